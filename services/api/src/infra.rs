use life_compass::config::AssessmentConfig;
use life_compass::error::AppError;
use life_compass::workflows::assessment::repository::PLAN_DAYS;
use life_compass::workflows::assessment::{
    AnswerSet, AssessmentService, AssessmentSubmission, ContentCatalog, DiagnosisRepository,
    EnrichmentError, EnrichmentPayload, EnrichmentProvider, EnrichmentRequest, PlanDay,
    RepositoryError, SavedDiagnosis, ScoringModel, SessionId,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

pub(crate) type ApiService = AssessmentService<InMemoryDiagnosisRepository, OfflineEnrichment>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryDiagnosisRepository {
    records: Arc<Mutex<HashMap<SessionId, SavedDiagnosis>>>,
}

impl DiagnosisRepository for InMemoryDiagnosisRepository {
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
        if guard.contains_key(&record.session_id) {
            guard.insert(record.session_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SavedDiagnosis>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Deterministic stand-in for the text-generation collaborator.
///
/// Builds the plan from catalog copy: the state's immediate win on day one, the
/// leverage text of the five weakest pillars on days two to six, and the state's next
/// step on day seven.
#[derive(Clone)]
pub(crate) struct OfflineEnrichment {
    catalog: Arc<ContentCatalog>,
}

impl OfflineEnrichment {
    pub(crate) fn new(catalog: Arc<ContentCatalog>) -> Self {
        Self { catalog }
    }

    fn compose(&self, request: &EnrichmentRequest) -> EnrichmentPayload {
        let locale = request.locale;
        let state = self.catalog.state(locale, request.state);
        let archetype = self.catalog.archetype(locale, request.insights.archetype);

        let mut ranked: Vec<_> = request.pillar_scores.iter().collect();
        ranked.sort_by_key(|entry| entry.score);

        let mut plan = Vec::with_capacity(PLAN_DAYS);
        plan.push(PlanDay {
            day: 1,
            action: state.immediate_win.to_string(),
            pillar: Some(request.insights.bottleneck),
        });
        for (offset, entry) in ranked.iter().take(PLAN_DAYS - 2).enumerate() {
            plan.push(PlanDay {
                day: offset as u8 + 2,
                action: self.catalog.pillar(locale, entry.pillar).leverage.to_string(),
                pillar: Some(entry.pillar),
            });
        }
        plan.push(PlanDay {
            day: PLAN_DAYS as u8,
            action: state.next_step.to_string(),
            pillar: None,
        });

        EnrichmentPayload {
            executive_summary: format!(
                "{} ({}%): {} {} {}",
                state.label,
                request.confidence,
                state.one_liner,
                archetype.label,
                archetype.description
            ),
            seven_day_plan: plan,
            stoic_refinement: format!(
                "{} \"{}\" ({})",
                state.stoic_lesson, state.stoic_quote, state.stoic_author
            ),
        }
    }
}

impl EnrichmentProvider for OfflineEnrichment {
    async fn enrich(
        &self,
        request: EnrichmentRequest,
    ) -> Result<EnrichmentPayload, EnrichmentError> {
        Ok(self.compose(&request))
    }
}

/// Validates the scoring model and content tables, then wires the in-memory service.
pub(crate) fn build_service(config: &AssessmentConfig) -> Result<ApiService, AppError> {
    let model = ScoringModel::standard();
    model.validate()?;
    let catalog = Arc::new(ContentCatalog::load(config.default_locale)?);

    Ok(AssessmentService::new(
        Arc::new(model),
        catalog.clone(),
        Arc::new(InMemoryDiagnosisRepository::default()),
        Arc::new(OfflineEnrichment::new(catalog)),
        config.enrichment_timeout(),
    ))
}

/// Accepts either a full submission document or a bare `{"1": 3, ...}` answer map.
pub(crate) fn parse_submission(raw: &str) -> Result<AssessmentSubmission, AppError> {
    let value: Value = serde_json::from_str(raw)?;
    let submission = if value.get("answers").is_some() {
        serde_json::from_value(value)?
    } else {
        AssessmentSubmission {
            answers: serde_json::from_value::<AnswerSet>(value)?,
            ..AssessmentSubmission::default()
        }
    };
    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_compass::workflows::assessment::{EnrichmentState, Locale, Pillar};

    fn sample_answers() -> AnswerSet {
        let responses: [i64; 21] = [2, 1, 2, 5, 4, 5, 2, 3, 2, 5, 5, 4, 3, 3, 2, 1, 2, 1, 4, 3, 4];
        (1..=21u16).zip(responses).collect()
    }

    #[tokio::test]
    async fn offline_plan_is_valid_and_starts_at_the_bottleneck() {
        let service = build_service(&AssessmentConfig::default()).expect("service builds");
        let record = service
            .submit(AssessmentSubmission {
                answers: sample_answers(),
                context: None,
                locale: Some("pt".to_string()),
            })
            .expect("stored");
        service.unlock(&record.session_id).expect("unlocked");

        let state = service.enrich(&record.session_id).await.expect("enriched");
        let payload = match state {
            EnrichmentState::Ready(payload) => payload,
            other => panic!("expected ready plan, got {other:?}"),
        };

        assert!(payload.validate().is_ok());
        assert_eq!(payload.seven_day_plan[0].pillar, Some(Pillar::Leisure));
        assert_eq!(payload.seven_day_plan[1].pillar, Some(Pillar::Leisure));
        assert!(payload.executive_summary.starts_with("Sobrecarga (98%)"));
    }

    #[test]
    fn repository_update_requires_existing_record() {
        let repository = InMemoryDiagnosisRepository::default();
        let record = SavedDiagnosis {
            session_id: SessionId("dx-test".to_string()),
            answers: AnswerSet::new(),
            context: None,
            locale: Locale::En,
            unlocked: false,
            enrichment: Default::default(),
            created_at: chrono::Utc::now(),
        };

        assert!(matches!(
            repository.update(record.clone()),
            Err(RepositoryError::NotFound)
        ));
        repository.insert(record.clone()).expect("insert succeeds");
        assert!(matches!(
            repository.insert(record),
            Err(RepositoryError::Conflict)
        ));
    }

    #[test]
    fn parse_submission_accepts_bare_answer_maps() {
        let submission = parse_submission(r#"{"4": 5, "5": 4}"#).expect("parses");
        assert_eq!(submission.answers.response(4), 5);
        assert!(submission.locale.is_none());

        let submission =
            parse_submission(r#"{"answers": {"1": 2}, "locale": "es", "context": "busy"}"#)
                .expect("parses");
        assert_eq!(submission.answers.response(1), 2);
        assert_eq!(submission.locale.as_deref(), Some("es"));
    }

    #[test]
    fn parse_submission_rejects_invalid_json() {
        assert!(matches!(
            parse_submission("{not json"),
            Err(AppError::Input(_))
        ));
    }
}
