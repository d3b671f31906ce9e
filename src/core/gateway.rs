use crate::core::backend::BackendSelection;
use crate::domain::model::{BackendTarget, HttpRequest, HttpResponse, RequestOptions};
use crate::domain::ports::Transport;
use crate::utils::error::{ApiFailure, ApiResult};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Single entry point for every backend call: resolves the URL against a
/// backend target, enforces the timeout and normalizes the outcome.
pub struct RequestGateway<T: Transport> {
    transport: T,
    backends: Arc<BackendSelection>,
    default_timeout: Duration,
}

impl<T: Transport> RequestGateway<T> {
    pub fn new(transport: T, backends: Arc<BackendSelection>) -> Self {
        Self {
            transport,
            backends,
            default_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn backends(&self) -> &Arc<BackendSelection> {
        &self.backends
    }

    pub fn active_target(&self) -> BackendTarget {
        self.backends.active_target().clone()
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Sends `endpoint` to the active backend and decodes the body as JSON.
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<serde_json::Value> {
        let target = self.active_target();
        self.request_on(&target, endpoint, options).await
    }

    pub async fn request_on(
        &self,
        target: &BackendTarget,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<serde_json::Value> {
        let url = target.url(endpoint);
        let outcome = self.dispatch(&url, options).await.and_then(|response| {
            if !response.is_success() {
                return Err(ApiFailure::HttpStatus(response.status));
            }
            serde_json::from_slice(&response.body).map_err(|e| ApiFailure::Decode(e.to_string()))
        });

        match &outcome {
            Ok(_) => tracing::debug!("📡 {} backend answered {}", target.kind, url),
            Err(e) => tracing::warn!("📡 Request to {} failed: {}", url, e),
        }
        outcome
    }

    /// Status-only reachability check against a specific target. The body is
    /// never decoded.
    pub async fn probe(
        &self,
        target: &BackendTarget,
        endpoint: &str,
        timeout: Duration,
    ) -> ApiResult<()> {
        let url = target.url(endpoint);
        let response = self
            .dispatch(&url, RequestOptions::get().with_timeout(timeout))
            .await?;

        if response.is_success() {
            Ok(())
        } else {
            Err(ApiFailure::HttpStatus(response.status))
        }
    }

    async fn dispatch(&self, url: &str, options: RequestOptions) -> ApiResult<HttpResponse> {
        let timeout = options.timeout.unwrap_or(self.default_timeout);
        let body = options
            .body
            .map(|value| serde_json::to_vec(&value))
            .transpose()
            .map_err(|e| ApiFailure::Decode(format!("request body could not be encoded: {}", e)))?;

        let request = HttpRequest {
            method: options.method,
            url: url.to_string(),
            headers: options.headers,
            body,
        };

        tracing::debug!(
            "📡 {} {} (timeout {} ms)",
            request.method,
            request.url,
            timeout.as_millis()
        );

        // Whichever branch settles first wins; the other future is dropped,
        // which aborts an in-flight send or disarms the timer.
        tokio::select! {
            biased;
            outcome = self.transport.send(request) => outcome,
            _ = tokio::time::sleep(timeout) => Err(ApiFailure::Timeout(timeout)),
        }
    }
}
