use httpmock::prelude::*;
use medicino::core::backend::BackendSelection;
use medicino::{ApiFailure, BackendKind, BackendTarget, MedicinoApi, RequestGateway, ReqwestTransport};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio_test::assert_err;

fn api_for(primary_base: String, timeout: Duration) -> MedicinoApi<ReqwestTransport> {
    let backends = Arc::new(BackendSelection::new(
        BackendTarget::new(BackendKind::Primary, primary_base, false),
        BackendTarget::default_secondary(),
    ));
    MedicinoApi::new(
        RequestGateway::new(ReqwestTransport::new(), backends).with_default_timeout(timeout),
    )
}

#[tokio::test]
async fn test_diagnose_posts_symptoms_once() {
    let server = MockServer::start();
    let diagnose_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/diagnose")
            .header("Content-Type", "application/json")
            .json_body(json!({"symptoms": "fever, cough"}));
        then.status(200).json_body(json!({
            "success": true,
            "data": {
                "disease": "Common Cold",
                "ayurvedic": "Tulsi and ginger tea",
                "medicine": "Paracetamol",
                "confidence": 66.67,
                "severity": "mild",
                "description": "Viral infection of the upper respiratory tract",
                "precautions": "Rest and hydrate"
            }
        }));
    });

    let api = api_for(server.url("/api"), Duration::from_secs(5));
    let record = api.diagnose("fever, cough").await.unwrap();

    diagnose_mock.assert();
    assert_eq!(record.disease, "Common Cold");
    assert_eq!(record.severity.as_deref(), Some("mild"));
    assert_eq!(record.precautions.as_deref(), Some("Rest and hydrate"));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = MockServer::start();
    let history_mock = server.mock(|when, then| {
        when.method(GET).path("/api/history");
        then.status(200)
            .delay(Duration::from_millis(800))
            .json_body(json!({"success": true, "data": []}));
    });

    let timeout = Duration::from_millis(100);
    let api = api_for(server.url("/api"), timeout);
    let result = api.get_history().await;

    assert_eq!(result, Err(ApiFailure::Timeout(timeout)));
    history_mock.assert_hits(1);
}

#[tokio::test]
async fn test_server_error_ignores_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/diagnose");
        then.status(500)
            .json_body(json!({"success": true, "data": {"disease": "should not be read"}}));
    });

    let api = api_for(server.url("/api"), Duration::from_secs(5));
    let result = api.diagnose("headache").await;

    assert_eq!(result, Err(ApiFailure::HttpStatus(500)));
}

#[tokio::test]
async fn test_non_json_body_is_decode_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/medicines");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("<html>maintenance</html>");
    });

    let api = api_for(server.url("/api"), Duration::from_secs(5));
    let result = api.list_medicines().await;

    assert!(matches!(result, Err(ApiFailure::Decode(_))));
}

#[tokio::test]
async fn test_refused_connection_is_network_failure() {
    // Nothing listens on port 1.
    let api = api_for("http://127.0.0.1:1/api".to_string(), Duration::from_secs(5));
    let result = api.get_history().await;

    let failure = assert_err!(result);
    assert!(matches!(failure, ApiFailure::Network(_)));
}

#[tokio::test]
async fn test_medicine_lookup_is_not_cached() {
    let server = MockServer::start();
    let medicine_mock = server.mock(|when, then| {
        when.method(GET).path("/api/medicine/Paracetamol");
        then.status(200).json_body(json!({
            "success": true,
            "data": {
                "id": 1,
                "name": "Paracetamol",
                "description": "Pain reliever and fever reducer",
                "dosage": "500mg every 6 hours",
                "side_effects": "Nausea, rash",
                "contraindications": "Liver disease",
                "price": 25.0,
                "category": "analgesic"
            }
        }));
    });

    let api = api_for(server.url("/api"), Duration::from_secs(5));
    let first = api.get_medicine("Paracetamol").await.unwrap();
    let second = api.get_medicine("Paracetamol").await.unwrap();

    medicine_mock.assert_hits(2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_backend_logical_failure_surfaces_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/diagnose");
        then.status(200)
            .json_body(json!({"success": false, "message": "Symptoms are required"}));
    });

    let api = api_for(server.url("/api"), Duration::from_secs(5));
    let result = api.diagnose("   ").await;

    assert_eq!(
        result,
        Err(ApiFailure::Logical("Symptoms are required".to_string()))
    );
}
