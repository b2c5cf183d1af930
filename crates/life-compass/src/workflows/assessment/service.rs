use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::content::{ContentCatalog, QuestionContent, UiCopy};
use super::diagnosis::DiagnosisEngine;
use super::domain::{AnswerSet, Locale, SessionId};
use super::pillars::PillarDeriver;
use super::report::{AssessmentReport, Evaluation, ReportAccess};
use super::repository::{
    DiagnosisRepository, EnrichmentError, EnrichmentProvider, EnrichmentRequest,
    EnrichmentState, RepositoryError, SavedDiagnosis,
};
use super::scoring::ScoringModel;

/// Client payload for both stateless diagnosis and persisted submissions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentSubmission {
    #[serde(default)]
    pub answers: AnswerSet,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

/// Localized questionnaire served to clients before they answer.
#[derive(Debug, Clone, Serialize)]
pub struct Questionnaire {
    pub locale: Locale,
    pub questions: &'static [QuestionContent],
    pub scale: &'static [&'static str; 5],
}

/// Service composing the scoring engine, content catalog, repository, and enrichment hook.
pub struct AssessmentService<R, E> {
    engine: Arc<DiagnosisEngine>,
    deriver: Arc<PillarDeriver>,
    catalog: Arc<ContentCatalog>,
    repository: Arc<R>,
    enrichment: Arc<E>,
    enrichment_timeout: Duration,
}

/// Random, unguessable session handle.
fn next_session_id() -> SessionId {
    SessionId(format!("dx-{}", Uuid::new_v4().simple()))
}

impl<R, E> AssessmentService<R, E>
where
    R: DiagnosisRepository + 'static,
    E: EnrichmentProvider + 'static,
{
    pub fn new(
        model: Arc<ScoringModel>,
        catalog: Arc<ContentCatalog>,
        repository: Arc<R>,
        enrichment: Arc<E>,
        enrichment_timeout: Duration,
    ) -> Self {
        Self {
            engine: Arc::new(DiagnosisEngine::new(model.clone())),
            deriver: Arc::new(PillarDeriver::new(model)),
            catalog,
            repository,
            enrichment,
            enrichment_timeout,
        }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn questionnaire(&self, requested_locale: Option<&str>) -> Questionnaire {
        let locale = self.catalog.resolve_locale(requested_locale);
        let UiCopy { likert_scale, .. } = self.catalog.ui(locale);
        Questionnaire {
            locale,
            questions: self.catalog.questions(locale),
            scale: likert_scale,
        }
    }

    /// Scores an answer set without persisting it. The result is always the locked view.
    pub fn diagnose(&self, submission: &AssessmentSubmission) -> AssessmentReport {
        let locale = self.catalog.resolve_locale(submission.locale.as_deref());
        let evaluation = self.evaluate(&submission.answers, locale);
        AssessmentReport::assemble(&self.catalog, None, &evaluation, ReportAccess::Locked)
    }

    /// Persists a new locked session.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<SavedDiagnosis, AssessmentServiceError> {
        let locale = self.catalog.resolve_locale(submission.locale.as_deref());
        let context = submission
            .context
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        let record = SavedDiagnosis {
            session_id: next_session_id(),
            answers: submission.answers,
            context,
            locale,
            unlocked: false,
            enrichment: EnrichmentState::NotRequested,
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            session_id = %stored.session_id,
            locale = stored.locale.code(),
            answered = stored.answers.answered(),
            "assessment stored"
        );
        Ok(stored)
    }

    /// Recomputes the report for a stored session from its raw answers.
    pub fn report(
        &self,
        session_id: &SessionId,
    ) -> Result<AssessmentReport, AssessmentServiceError> {
        let record = self.fetch(session_id)?;
        let evaluation = self.evaluate(&record.answers, record.locale);
        let access = if record.unlocked {
            ReportAccess::Unlocked {
                enrichment: &record.enrichment,
            }
        } else {
            ReportAccess::Locked
        };

        Ok(AssessmentReport::assemble(
            &self.catalog,
            Some(record.session_id.clone()),
            &evaluation,
            access,
        ))
    }

    /// Payment confirmation: flips the unlock flag. Repeated calls are no-ops.
    pub fn unlock(
        &self,
        session_id: &SessionId,
    ) -> Result<SavedDiagnosis, AssessmentServiceError> {
        let mut record = self.fetch(session_id)?;
        if record.unlocked {
            return Ok(record);
        }

        record.unlocked = true;
        self.repository.update(record.clone())?;
        info!(session_id = %record.session_id, "assessment unlocked");
        Ok(record)
    }

    /// Requests the generated plan for an unlocked session.
    ///
    /// Provider failures, timeouts, and malformed payloads are recorded on the session as
    /// `Unavailable` and returned as `Ok`; only lookup and storage failures are errors.
    /// A session already `Pending` or `Ready` is returned as stored without calling the
    /// provider.
    pub async fn enrich(
        &self,
        session_id: &SessionId,
    ) -> Result<EnrichmentState, AssessmentServiceError> {
        let mut record = self.fetch(session_id)?;
        if !record.unlocked {
            return Err(AssessmentServiceError::Locked(record.session_id));
        }
        if matches!(
            record.enrichment,
            EnrichmentState::Ready(_) | EnrichmentState::Pending
        ) {
            return Ok(record.enrichment);
        }

        record.enrichment = EnrichmentState::Pending;
        self.repository.update(record.clone())?;

        let evaluation = self.evaluate(&record.answers, record.locale);
        let request = EnrichmentRequest {
            session_id: record.session_id.clone(),
            locale: record.locale,
            state: evaluation.diagnosis.state,
            confidence: evaluation.diagnosis.confidence,
            pillar_scores: evaluation.pillar_scores.to_vec(),
            insights: evaluation.insights,
            context: record.context.clone(),
        };

        let outcome = match tokio::time::timeout(
            self.enrichment_timeout,
            self.enrichment.enrich(request),
        )
        .await
        {
            Ok(Ok(payload)) => payload.validate().map(|_| payload),
            Ok(Err(error)) => Err(error),
            Err(_) => Err(EnrichmentError::Timeout(self.enrichment_timeout)),
        };

        // Re-read so a plan stored by an overlapping call is never overwritten.
        let mut latest = self.fetch(session_id)?;
        if let EnrichmentState::Ready(_) = latest.enrichment {
            return Ok(latest.enrichment);
        }

        latest.enrichment = match outcome {
            Ok(payload) => {
                info!(session_id = %latest.session_id, "enrichment ready");
                EnrichmentState::Ready(payload)
            }
            Err(error) => {
                warn!(session_id = %latest.session_id, %error, "enrichment unavailable");
                EnrichmentState::Unavailable {
                    reason: error.to_string(),
                }
            }
        };

        self.repository.update(latest.clone())?;
        Ok(latest.enrichment)
    }

    /// Fetch a stored session for API responses.
    pub fn get(&self, session_id: &SessionId) -> Result<SavedDiagnosis, AssessmentServiceError> {
        self.fetch(session_id)
    }

    fn fetch(&self, session_id: &SessionId) -> Result<SavedDiagnosis, AssessmentServiceError> {
        self.repository
            .fetch(session_id)?
            .ok_or_else(|| AssessmentServiceError::NotFound(session_id.clone()))
    }

    fn evaluate(&self, answers: &AnswerSet, locale: Locale) -> Evaluation {
        Evaluation::compute(&self.engine, &self.deriver, answers, locale)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("assessment {0} not found")]
    NotFound(SessionId),
    #[error("assessment {0} is locked")]
    Locked(SessionId),
}
