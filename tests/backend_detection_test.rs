use httpmock::prelude::*;
use medicino::core::backend::BackendSelection;
use medicino::{
    ActionHandlers, BackendKind, BackendResolver, BackendTarget, MedicinoApi, Notice,
    RequestGateway, ReqwestTransport,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn api_for(primary: String, secondary: String) -> MedicinoApi<ReqwestTransport> {
    let backends = Arc::new(BackendSelection::new(
        BackendTarget::new(BackendKind::Primary, primary, false),
        BackendTarget::new(BackendKind::Secondary, secondary, true),
    ));
    MedicinoApi::new(RequestGateway::new(ReqwestTransport::new(), backends))
}

fn resolver() -> BackendResolver {
    BackendResolver::new("/medicines", Duration::from_millis(500))
}

#[tokio::test]
async fn test_primary_detected_secondary_never_probed() {
    let primary = MockServer::start();
    let secondary = MockServer::start();

    let primary_probe = primary.mock(|when, then| {
        when.method(GET).path("/api/medicines");
        then.status(200).json_body(json!({"success": true, "data": []}));
    });
    let secondary_probe = secondary.mock(|when, then| {
        when.method(GET).path("/api/medicines/");
        then.status(200).json_body(json!({"success": true, "data": []}));
    });

    let api = api_for(primary.url("/api"), secondary.url("/api"));
    let detected = api.select_backend(&resolver(), None).await;

    assert_eq!(detected, Some(BackendKind::Primary));
    assert_eq!(api.active_backend(), BackendKind::Primary);
    primary_probe.assert_hits(1);
    secondary_probe.assert_hits(0);
}

#[tokio::test]
async fn test_secondary_detected_and_used_with_trailing_slash() {
    let primary = MockServer::start();
    let secondary = MockServer::start();

    primary.mock(|when, then| {
        when.method(GET).path("/api/medicines");
        then.status(502);
    });
    secondary.mock(|when, then| {
        when.method(GET).path("/api/medicines/");
        then.status(200).json_body(json!({"success": true, "data": []}));
    });
    let history_mock = secondary.mock(|when, then| {
        when.method(GET).path("/api/history/");
        then.status(200).json_body(json!({
            "success": true,
            "data": [{
                "id": 7,
                "symptoms": "itchy skin, red patches",
                "diagnosed_condition": "Eczema",
                "ayurvedic_remedy": "Neem paste",
                "medicine_suggestion": "Hydrocortisone cream",
                "confidence_score": "72.50",
                "created_at": "2024-05-02T08:30:00Z"
            }]
        }));
    });

    let api = api_for(primary.url("/api"), secondary.url("/api"));
    let detected = api.select_backend(&resolver(), None).await;
    assert_eq!(detected, Some(BackendKind::Secondary));

    let outcome = ActionHandlers::new(&api).show_history().await;

    history_mock.assert();
    assert_eq!(
        outcome.notice,
        Some(Notice::success("Loaded 1 diagnosis records"))
    );
    let body = outcome.body.unwrap();
    assert!(body.contains("Eczema"));
    assert!(body.contains("72.5%"));
    assert!(body.contains("2024-05-02 08:30:00"));
}

#[tokio::test]
async fn test_no_backend_keeps_primary_and_requests_fail_individually() {
    let primary = MockServer::start();
    primary.mock(|when, then| {
        when.method(GET).path("/api/medicines");
        then.status(503);
    });
    let diagnose_mock = primary.mock(|when, then| {
        when.method(POST).path("/api/diagnose");
        then.status(503);
    });

    let api = api_for(primary.url("/api"), "http://127.0.0.1:1/api".to_string());
    let detected = api.select_backend(&resolver(), None).await;

    assert_eq!(detected, None);
    assert_eq!(api.active_backend(), BackendKind::Primary);

    let outcome = ActionHandlers::new(&api).diagnose("fever and cough").await;
    diagnose_mock.assert();
    assert_eq!(
        outcome.notice,
        Some(Notice::error("Diagnosis failed: HTTP error! status: 503"))
    );
}

#[tokio::test]
async fn test_slow_primary_probe_falls_back() {
    let primary = MockServer::start();
    let secondary = MockServer::start();

    primary.mock(|when, then| {
        when.method(GET).path("/api/medicines");
        then.status(200).delay(Duration::from_millis(1500));
    });
    let secondary_probe = secondary.mock(|when, then| {
        when.method(GET).path("/api/medicines/");
        then.status(200).json_body(json!({"success": true, "data": []}));
    });

    let api = api_for(primary.url("/api"), secondary.url("/api"));
    let detected = api
        .select_backend(
            &BackendResolver::new("/medicines", Duration::from_millis(100)),
            None,
        )
        .await;

    assert_eq!(detected, Some(BackendKind::Secondary));
    secondary_probe.assert_hits(1);
}

#[tokio::test]
async fn test_toml_config_pins_backend() -> anyhow::Result<()> {
    use medicino::domain::ports::ConfigProvider;
    use medicino::TomlConfig;

    let primary = MockServer::start();
    let secondary = MockServer::start();

    let primary_probe = primary.mock(|when, then| {
        when.method(GET).path("/api/medicines");
        then.status(200).json_body(json!({"success": true, "data": []}));
    });
    let medicines_mock = secondary.mock(|when, then| {
        when.method(GET).path("/api/medicines/");
        then.status(200).json_body(json!({
            "success": true,
            "data": [{"name": "Ashwagandha", "description": "Adaptogenic herb", "price": "120.00"}]
        }));
    });

    let toml_content = format!(
        r#"
[backends.primary]
base_url = "{}"

[backends.secondary]
base_url = "{}"

[client]
timeout_ms = 2000
backend = "secondary"
"#,
        primary.url("/api"),
        secondary.url("/api")
    );
    let config = TomlConfig::from_toml_str(&toml_content)?;

    let api = MedicinoApi::from_config(&config);
    let resolver = BackendResolver::from_config(&config);
    let selected = api
        .select_backend(&resolver, config.pinned_backend())
        .await;

    assert_eq!(selected, Some(BackendKind::Secondary));
    primary_probe.assert_hits(0);

    let outcome = ActionHandlers::new(&api).list_medicines().await;
    medicines_mock.assert();
    assert_eq!(outcome.notice, Some(Notice::success("Loaded 1 medicines")));
    assert!(outcome.body.unwrap_or_default().contains("Ashwagandha"));

    Ok(())
}
