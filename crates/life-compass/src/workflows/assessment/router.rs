use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::SessionId;
use super::repository::{DiagnosisRepository, EnrichmentProvider, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError, AssessmentSubmission};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LocaleQuery {
    locale: Option<String>,
}

/// Router builder exposing the questionnaire, diagnosis, and session endpoints.
pub fn assessment_router<R, E>(service: Arc<AssessmentService<R, E>>) -> Router
where
    R: DiagnosisRepository + 'static,
    E: EnrichmentProvider + 'static,
{
    Router::new()
        .route("/api/v1/questionnaire", get(questionnaire_handler::<R, E>))
        .route("/api/v1/diagnosis", post(diagnosis_handler::<R, E>))
        .route("/api/v1/assessments", post(submit_handler::<R, E>))
        .route(
            "/api/v1/assessments/:session_id",
            get(session_handler::<R, E>),
        )
        .route(
            "/api/v1/assessments/:session_id/report",
            get(report_handler::<R, E>),
        )
        .route(
            "/api/v1/assessments/:session_id/unlock",
            post(unlock_handler::<R, E>),
        )
        .route(
            "/api/v1/assessments/:session_id/enrichment",
            post(enrichment_handler::<R, E>),
        )
        .with_state(service)
}

pub(crate) async fn questionnaire_handler<R, E>(
    State(service): State<Arc<AssessmentService<R, E>>>,
    Query(query): Query<LocaleQuery>,
) -> Response
where
    R: DiagnosisRepository + 'static,
    E: EnrichmentProvider + 'static,
{
    let questionnaire = service.questionnaire(query.locale.as_deref());
    (StatusCode::OK, axum::Json(questionnaire)).into_response()
}

pub(crate) async fn diagnosis_handler<R, E>(
    State(service): State<Arc<AssessmentService<R, E>>>,
    payload: Result<axum::Json<AssessmentSubmission>, JsonRejection>,
) -> Response
where
    R: DiagnosisRepository + 'static,
    E: EnrichmentProvider + 'static,
{
    let submission = match payload {
        Ok(axum::Json(submission)) => submission,
        Err(rejection) => return rejection_response(rejection),
    };
    let report = service.diagnose(&submission);
    (StatusCode::OK, axum::Json(report)).into_response()
}

pub(crate) async fn submit_handler<R, E>(
    State(service): State<Arc<AssessmentService<R, E>>>,
    payload: Result<axum::Json<AssessmentSubmission>, JsonRejection>,
) -> Response
where
    R: DiagnosisRepository + 'static,
    E: EnrichmentProvider + 'static,
{
    let submission = match payload {
        Ok(axum::Json(submission)) => submission,
        Err(rejection) => return rejection_response(rejection),
    };
    match service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.session_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn session_handler<R, E>(
    State(service): State<Arc<AssessmentService<R, E>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: DiagnosisRepository + 'static,
    E: EnrichmentProvider + 'static,
{
    match service.get(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.session_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<R, E>(
    State(service): State<Arc<AssessmentService<R, E>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: DiagnosisRepository + 'static,
    E: EnrichmentProvider + 'static,
{
    match service.report(&SessionId(session_id)) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn unlock_handler<R, E>(
    State(service): State<Arc<AssessmentService<R, E>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: DiagnosisRepository + 'static,
    E: EnrichmentProvider + 'static,
{
    match service.unlock(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.session_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn enrichment_handler<R, E>(
    State(service): State<Arc<AssessmentService<R, E>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: DiagnosisRepository + 'static,
    E: EnrichmentProvider + 'static,
{
    let id = SessionId(session_id);
    match service.enrich(&id).await {
        Ok(enrichment) => {
            let payload = json!({
                "session_id": id,
                "enrichment": enrichment,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

/// Unreadable bodies are client errors regardless of which stage rejected them.
fn rejection_response(rejection: JsonRejection) -> Response {
    let payload = json!({
        "error": rejection.body_text(),
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::NotFound(_)
        | AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Locked(_) => StatusCode::PAYMENT_REQUIRED,
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
