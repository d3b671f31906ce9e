use crate::utils::error::{ApiFailure, ApiResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum BackendKind {
    Primary,
    Secondary,
}

impl BackendKind {
    /// Probe order used by backend detection.
    pub const PREFERENCE: [BackendKind; 2] = [BackendKind::Primary, BackendKind::Secondary];

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Primary => "primary",
            BackendKind::Secondary => "secondary",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(BackendKind::Primary),
            "secondary" => Ok(BackendKind::Secondary),
            other => Err(format!("unknown backend '{}'", other)),
        }
    }
}

/// One addressable backend: a base URL (including its `/api` prefix) plus the
/// path-suffix convention its routes use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendTarget {
    pub kind: BackendKind,
    pub base_url: String,
    pub trailing_slash: bool,
}

impl BackendTarget {
    pub const DEFAULT_PRIMARY_URL: &'static str = "http://localhost:5000/api";
    pub const DEFAULT_SECONDARY_URL: &'static str = "http://localhost:8000/api";

    pub fn new(kind: BackendKind, base_url: impl Into<String>, trailing_slash: bool) -> Self {
        Self {
            kind,
            base_url: base_url.into(),
            trailing_slash,
        }
    }

    pub fn default_primary() -> Self {
        Self::new(BackendKind::Primary, Self::DEFAULT_PRIMARY_URL, false)
    }

    pub fn default_secondary() -> Self {
        Self::new(BackendKind::Secondary, Self::DEFAULT_SECONDARY_URL, true)
    }

    /// Applies this target's suffix convention to a route such as `/history`.
    pub fn endpoint(&self, route: &str) -> String {
        if self.trailing_slash && !route.ends_with('/') {
            format!("{}/", route)
        } else {
            route.to_string()
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<serde_json::Value>,
    /// Falls back to the gateway's configured timeout when `None`.
    pub timeout: Option<Duration>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            method: HttpMethod::Get,
            headers,
            body: None,
            timeout: None,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post_json(body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Post,
            body: Some(body),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Fully resolved request handed to a `Transport`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// `{success, data?, message?}` wrapper every backend route responds with.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiEnvelope {
    pub fn from_value(payload: serde_json::Value) -> ApiResult<Self> {
        serde_json::from_value(payload)
            .map_err(|e| ApiFailure::Decode(format!("invalid response envelope: {}", e)))
    }

    /// Unwraps `data` as `T`. `fallback` is used when a failed envelope
    /// carries no message of its own.
    pub fn into_data<T: DeserializeOwned>(self, fallback: &str) -> ApiResult<T> {
        if !self.success {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string());
            return Err(ApiFailure::Logical(message));
        }

        match self.data {
            None | Some(serde_json::Value::Null) => Err(ApiFailure::Logical(
                self.message.unwrap_or_else(|| fallback.to_string()),
            )),
            Some(data) => serde_json::from_value(data)
                .map_err(|e| ApiFailure::Decode(format!("unexpected data shape: {}", e))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DiagnosisRecord {
    pub disease: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub ayurvedic: Option<String>,
    #[serde(default)]
    pub medicine: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub precautions: Option<String>,
    #[serde(default, alias = "created_at")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MedicineRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dosage: Option<String>,
    #[serde(default)]
    pub side_effects: Option<String>,
    #[serde(default)]
    pub contraindications: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub price: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HistoryRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub symptoms: String,
    #[serde(default)]
    pub diagnosed_condition: Option<String>,
    #[serde(default)]
    pub ayurvedic_remedy: Option<String>,
    #[serde(default)]
    pub medicine_suggestion: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// Decimal columns come back as JSON strings from the secondary backend.
fn number_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_suffix_convention() {
        let primary = BackendTarget::default_primary();
        let secondary = BackendTarget::default_secondary();

        assert_eq!(primary.endpoint("/history"), "/history");
        assert_eq!(secondary.endpoint("/history"), "/history/");
        assert_eq!(secondary.endpoint("/history/"), "/history/");
        assert_eq!(
            secondary.url(&secondary.endpoint("/medicines")),
            "http://localhost:8000/api/medicines/"
        );
    }

    #[test]
    fn test_url_trims_trailing_base_slash() {
        let target = BackendTarget::new(BackendKind::Primary, "http://host/api/", false);
        assert_eq!(target.url("/diagnose"), "http://host/api/diagnose");
    }

    #[test]
    fn test_backend_kind_from_str() {
        assert_eq!("Primary".parse::<BackendKind>(), Ok(BackendKind::Primary));
        assert_eq!("secondary".parse::<BackendKind>(), Ok(BackendKind::Secondary));
        assert!("flask".parse::<BackendKind>().is_err());
    }

    #[test]
    fn test_envelope_failure_uses_backend_message() {
        let envelope =
            ApiEnvelope::from_value(json!({"success": false, "message": "Medicine not found"}))
                .unwrap();
        let result: ApiResult<MedicineRecord> = envelope.into_data("Lookup failed");
        assert_eq!(result, Err(ApiFailure::Logical("Medicine not found".into())));
    }

    #[test]
    fn test_envelope_failure_without_message_uses_fallback() {
        let envelope = ApiEnvelope::from_value(json!({"success": false})).unwrap();
        let result: ApiResult<Vec<HistoryRecord>> = envelope.into_data("Diagnosis failed");
        assert_eq!(result, Err(ApiFailure::Logical("Diagnosis failed".into())));
    }

    #[test]
    fn test_envelope_success_without_data_is_logical_failure() {
        let envelope = ApiEnvelope::from_value(json!({"success": true, "data": null})).unwrap();
        let result: ApiResult<DiagnosisRecord> = envelope.into_data("Diagnosis failed");
        assert!(matches!(result, Err(ApiFailure::Logical(_))));
    }

    #[test]
    fn test_envelope_missing_success_is_decode_failure() {
        let result = ApiEnvelope::from_value(json!({"data": []}));
        assert!(matches!(result, Err(ApiFailure::Decode(_))));
    }

    #[test]
    fn test_wrong_data_shape_is_decode_failure() {
        let envelope =
            ApiEnvelope::from_value(json!({"success": true, "data": {"unexpected": 1}})).unwrap();
        let result: ApiResult<Vec<MedicineRecord>> = envelope.into_data("failed");
        assert!(matches!(result, Err(ApiFailure::Decode(_))));
    }

    #[test]
    fn test_medicine_price_accepts_decimal_string() {
        let from_string: MedicineRecord =
            serde_json::from_value(json!({"name": "Paracetamol", "price": "25.50"})).unwrap();
        let from_number: MedicineRecord =
            serde_json::from_value(json!({"name": "Paracetamol", "price": 25.5})).unwrap();
        let missing: MedicineRecord =
            serde_json::from_value(json!({"name": "Paracetamol", "price": null})).unwrap();

        assert_eq!(from_string.price, Some(25.5));
        assert_eq!(from_number.price, Some(25.5));
        assert_eq!(missing.price, None);
    }
}
