use crate::domain::model::{BackendKind, BackendTarget, HttpRequest, HttpResponse};
use crate::utils::error::ApiResult;
use async_trait::async_trait;
use std::time::Duration;

/// Moves one request over the wire. Implementations report only transport
/// level failures (`ApiFailure::Network`); status handling, decoding and
/// timeouts belong to the gateway.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn backend_target(&self, kind: BackendKind) -> BackendTarget;
    fn request_timeout(&self) -> Duration;
    fn probe_timeout(&self) -> Duration;
    fn probe_path(&self) -> &str;
    fn pinned_backend(&self) -> Option<BackendKind> {
        None
    }
}
