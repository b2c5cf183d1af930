use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::domain::{AnswerSet, Locale, Pillar, SessionId};
use crate::workflows::assessment::repository::{
    DiagnosisRepository, EnrichmentError, EnrichmentPayload, EnrichmentProvider,
    EnrichmentRequest, EnrichmentState, PlanDay, RepositoryError, SavedDiagnosis,
};
use crate::workflows::assessment::{
    assessment_router, AssessmentService, AssessmentSubmission, ContentCatalog, ScoringModel,
};

pub(super) const TEST_TIMEOUT: Duration = Duration::from_millis(50);

/// Answers producing Overload at confidence 98 with Leisure as the bottleneck.
pub(super) fn golden_answers() -> AnswerSet {
    [
        (1, 2),
        (2, 1),
        (3, 2),
        (4, 5),
        (5, 4),
        (6, 5),
        (7, 2),
        (8, 3),
        (9, 2),
        (10, 5),
        (11, 5),
        (12, 4),
        (13, 3),
        (14, 3),
        (15, 2),
        (16, 1),
        (17, 2),
        (18, 1),
        (19, 4),
        (20, 3),
        (21, 4),
    ]
    .into_iter()
    .collect()
}

pub(super) fn submission(locale: &str) -> AssessmentSubmission {
    AssessmentSubmission {
        answers: golden_answers(),
        context: Some("  New job, two kids, no time to train.  ".to_string()),
        locale: Some(locale.to_string()),
    }
}

pub(super) fn model() -> Arc<ScoringModel> {
    Arc::new(ScoringModel::standard())
}

pub(super) fn catalog() -> Arc<ContentCatalog> {
    Arc::new(ContentCatalog::load(Locale::En).expect("catalog loads"))
}

pub(super) fn service_with<R, E>(
    repository: Arc<R>,
    enrichment: Arc<E>,
) -> AssessmentService<R, E>
where
    R: DiagnosisRepository + 'static,
    E: EnrichmentProvider + 'static,
{
    AssessmentService::new(model(), catalog(), repository, enrichment, TEST_TIMEOUT)
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryRepository, PlanEnrichment>,
    Arc<MemoryRepository>,
    Arc<PlanEnrichment>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let enrichment = Arc::new(PlanEnrichment::default());
    let service = service_with(repository.clone(), enrichment.clone());
    (service, repository, enrichment)
}

pub(super) fn router_with_service<R, E>(service: AssessmentService<R, E>) -> axum::Router
where
    R: DiagnosisRepository + 'static,
    E: EnrichmentProvider + 'static,
{
    assessment_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<SessionId, SavedDiagnosis>>>,
}

impl DiagnosisRepository for MemoryRepository {
    fn insert(&self, record: SavedDiagnosis) -> Result<SavedDiagnosis, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SavedDiagnosis) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.session_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SavedDiagnosis>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

impl MemoryRepository {
    pub(super) fn stored(&self, id: &SessionId) -> SavedDiagnosis {
        self.fetch(id).expect("fetch succeeds").expect("record present")
    }
}

pub(super) struct ConflictRepository;

impl DiagnosisRepository for ConflictRepository {
    fn insert(&self, _record: SavedDiagnosis) -> Result<SavedDiagnosis, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: SavedDiagnosis) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SavedDiagnosis>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl DiagnosisRepository for UnavailableRepository {
    fn insert(&self, _record: SavedDiagnosis) -> Result<SavedDiagnosis, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: SavedDiagnosis) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SavedDiagnosis>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn seven_day_plan(focus: Pillar) -> EnrichmentPayload {
    EnrichmentPayload {
        executive_summary: "Recovery before ambition.".to_string(),
        seven_day_plan: (1..=7)
            .map(|day| PlanDay {
                day,
                action: format!("Protect one hour for {} on day {day}", focus.key()),
                pillar: Some(focus),
            })
            .collect(),
        stoic_refinement: "Do less, and do it well.".to_string(),
    }
}

/// Returns a valid plan aimed at the bottleneck and records every request.
#[derive(Default)]
pub(super) struct PlanEnrichment {
    requests: Mutex<Vec<EnrichmentRequest>>,
}

impl PlanEnrichment {
    pub(super) fn requests(&self) -> Vec<EnrichmentRequest> {
        self.requests.lock().expect("request mutex poisoned").clone()
    }
}

impl EnrichmentProvider for PlanEnrichment {
    async fn enrich(
        &self,
        request: EnrichmentRequest,
    ) -> Result<EnrichmentPayload, EnrichmentError> {
        let focus = request.insights.bottleneck;
        self.requests
            .lock()
            .expect("request mutex poisoned")
            .push(request);
        Ok(seven_day_plan(focus))
    }
}

pub(super) struct FailingEnrichment;

impl EnrichmentProvider for FailingEnrichment {
    async fn enrich(
        &self,
        _request: EnrichmentRequest,
    ) -> Result<EnrichmentPayload, EnrichmentError> {
        Err(EnrichmentError::Transport("connection reset".to_string()))
    }
}

/// Never answers within [`TEST_TIMEOUT`].
#[derive(Default)]
pub(super) struct SlowEnrichment {
    pub(super) calls: AtomicUsize,
}

impl EnrichmentProvider for SlowEnrichment {
    async fn enrich(
        &self,
        request: EnrichmentRequest,
    ) -> Result<EnrichmentPayload, EnrichmentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(seven_day_plan(request.insights.bottleneck))
    }
}

/// Returns a plan with only six days.
pub(super) struct TruncatedEnrichment;

impl EnrichmentProvider for TruncatedEnrichment {
    async fn enrich(
        &self,
        request: EnrichmentRequest,
    ) -> Result<EnrichmentPayload, EnrichmentError> {
        let mut payload = seven_day_plan(request.insights.bottleneck);
        payload.seven_day_plan.pop();
        Ok(payload)
    }
}

/// Succeeds on the first call after a short delay and fails every call after it.
#[derive(Default)]
pub(super) struct FlakyEnrichment {
    pub(super) calls: AtomicUsize,
}

impl EnrichmentProvider for FlakyEnrichment {
    async fn enrich(
        &self,
        request: EnrichmentRequest,
    ) -> Result<EnrichmentPayload, EnrichmentError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) > 0 {
            return Err(EnrichmentError::Transport("connection reset".to_string()));
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
        Ok(seven_day_plan(request.insights.bottleneck))
    }
}

/// Stores a finished plan on the session while its own call is in flight, then fails.
pub(super) struct OvertakenEnrichment {
    pub(super) repository: Arc<MemoryRepository>,
}

impl EnrichmentProvider for OvertakenEnrichment {
    async fn enrich(
        &self,
        request: EnrichmentRequest,
    ) -> Result<EnrichmentPayload, EnrichmentError> {
        let mut record = self.repository.stored(&request.session_id);
        record.enrichment = EnrichmentState::Ready(seven_day_plan(request.insights.bottleneck));
        self.repository
            .update(record)
            .map_err(|error| EnrichmentError::Transport(error.to_string()))?;
        Err(EnrichmentError::Transport("connection reset".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
