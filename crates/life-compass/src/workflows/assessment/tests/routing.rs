use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::assessment::router;

fn json_post(uri: &str, payload: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(payload).expect("payload serializes"),
        ))
        .expect("request builds")
}

fn empty_post(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

fn golden_payload(locale: &str) -> Value {
    json!({
        "answers": golden_answers(),
        "context": "Caring for a parent.",
        "locale": locale,
    })
}

#[tokio::test]
async fn diagnosis_route_returns_locked_summary() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_post("/api/v1/diagnosis", &golden_payload("en")))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["summary"]["state"], "overload");
    assert_eq!(payload["summary"]["confidence"], 98);
    assert_eq!(payload["summary"]["pillars"].as_array().map(Vec::len), Some(7));
    assert_eq!(payload["unlocked"], false);
    assert!(payload.get("details").is_none());
    assert!(payload["locked_teaser"].is_string());
}

#[tokio::test]
async fn diagnosis_route_tolerates_partial_and_malformed_answers() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);
    let baseline = json!({ "answers": { "4": 5, "6": 5 } });

    let response = router
        .clone()
        .oneshot(json_post("/api/v1/diagnosis", &baseline))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let expected = read_json_body(response).await["summary"].clone();

    let malformed = [
        json!({ "answers": { "4": 5, "5": 17, "6": 5 } }),
        json!({ "answers": { "4": 5, "5": null, "6": 5 } }),
        json!({ "answers": { "4": 5, "5": 4.5, "6": 5 } }),
        json!({ "answers": { "4": 5, "5": "4", "6": 5 } }),
        json!({ "answers": { "4": 5, "6": 5, "70000": 3, "abc": 2 } }),
    ];
    for payload in malformed {
        let response = router
            .clone()
            .oneshot(json_post("/api/v1/diagnosis", &payload))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK, "{payload}");
        let body = read_json_body(response).await;
        assert_eq!(body["locale"], "en");
        assert_eq!(body["summary"], expected, "{payload}");
    }
}

#[tokio::test]
async fn unreadable_bodies_are_bad_requests() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let syntax = router
        .clone()
        .oneshot(
            Request::post("/api/v1/diagnosis")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"answers\": {"))
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(syntax.status(), StatusCode::BAD_REQUEST);
    assert!(read_json_body(syntax).await["error"].is_string());

    let wrong_shape = router
        .oneshot(json_post(
            "/api/v1/assessments",
            &json!({ "answers": [1, 2, 3], "locale": 7 }),
        ))
        .await
        .expect("route executes");
    assert_eq!(wrong_shape.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn questionnaire_route_honours_locale_query() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(get("/api/v1/questionnaire?locale=pt-BR"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["locale"], "pt");
    assert_eq!(payload["questions"].as_array().map(Vec::len), Some(21));
    assert_eq!(payload["questions"][0]["id"], 1);
}

#[tokio::test]
async fn session_lifecycle_over_http() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let created = router
        .clone()
        .oneshot(json_post("/api/v1/assessments", &golden_payload("es")))
        .await
        .expect("route executes");
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = read_json_body(created).await;
    let session_id = created["session_id"]
        .as_str()
        .expect("session id")
        .to_string();
    assert_eq!(created["unlocked"], false);
    assert!(created.get("answers").is_none());

    let locked_enrichment = router
        .clone()
        .oneshot(empty_post(&format!(
            "/api/v1/assessments/{session_id}/enrichment"
        )))
        .await
        .expect("route executes");
    assert_eq!(locked_enrichment.status(), StatusCode::PAYMENT_REQUIRED);

    let unlocked = router
        .clone()
        .oneshot(empty_post(&format!("/api/v1/assessments/{session_id}/unlock")))
        .await
        .expect("route executes");
    assert_eq!(unlocked.status(), StatusCode::OK);
    assert_eq!(read_json_body(unlocked).await["unlocked"], true);

    let enriched = router
        .clone()
        .oneshot(empty_post(&format!(
            "/api/v1/assessments/{session_id}/enrichment"
        )))
        .await
        .expect("route executes");
    assert_eq!(enriched.status(), StatusCode::OK);
    let enriched = read_json_body(enriched).await;
    assert_eq!(enriched["enrichment"]["status"], "ready");
    assert_eq!(
        enriched["enrichment"]["seven_day_plan"]
            .as_array()
            .map(Vec::len),
        Some(7)
    );

    let report = router
        .clone()
        .oneshot(get(&format!("/api/v1/assessments/{session_id}/report")))
        .await
        .expect("route executes");
    assert_eq!(report.status(), StatusCode::OK);
    let report = read_json_body(report).await;
    assert_eq!(report["locale"], "es");
    assert_eq!(report["details"]["insights"]["bottleneck"], "leisure");
    assert_eq!(report["details"]["insights"]["archetype"], "survivor");
    assert_eq!(report["details"]["enrichment"]["status"], "ready");

    let session = router
        .oneshot(get(&format!("/api/v1/assessments/{session_id}")))
        .await
        .expect("route executes");
    assert_eq!(session.status(), StatusCode::OK);
    assert_eq!(read_json_body(session).await["enrichment"], "ready");
}

#[tokio::test]
async fn report_route_returns_not_found_for_unknown_session() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(get("/api/v1/assessments/dx-unknown/report"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("dx-unknown"));
}

#[tokio::test]
async fn submit_handler_returns_conflict_on_duplicate() {
    let service = Arc::new(service_with(
        Arc::new(ConflictRepository),
        Arc::new(PlanEnrichment::default()),
    ));

    let response = router::submit_handler::<ConflictRepository, PlanEnrichment>(
        State(service),
        Ok(axum::Json(submission("en"))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn unlock_handler_returns_unavailable_on_repository_outage() {
    let service = Arc::new(service_with(
        Arc::new(UnavailableRepository),
        Arc::new(PlanEnrichment::default()),
    ));

    let response = router::unlock_handler::<UnavailableRepository, PlanEnrichment>(
        State(service),
        Path("dx-000001".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn enrichment_handler_reports_timeouts_as_unavailable() {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(service_with(
        repository,
        Arc::new(SlowEnrichment::default()),
    ));
    let record = service.submit(submission("en")).expect("submission stored");
    service.unlock(&record.session_id).expect("unlock succeeds");

    let response = router::enrichment_handler::<MemoryRepository, SlowEnrichment>(
        State(service),
        Path(record.session_id.0.clone()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["enrichment"]["status"], "unavailable");
}
