use crate::adapters::http::ReqwestTransport;
use crate::core::backend::BackendSelection;
use crate::core::gateway::RequestGateway;
use crate::core::resolver::BackendResolver;
use crate::domain::model::{
    ApiEnvelope, BackendKind, DiagnosisRecord, HistoryRecord, MedicineRecord, RequestOptions,
};
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::ApiResult;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;

/// Named backend operations. Each call is independent: no retries, no caching.
pub struct MedicinoApi<T: Transport> {
    gateway: RequestGateway<T>,
}

impl MedicinoApi<ReqwestTransport> {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        let backends = Arc::new(BackendSelection::from_config(config));
        let gateway = RequestGateway::new(ReqwestTransport::new(), backends)
            .with_default_timeout(config.request_timeout());
        Self::new(gateway)
    }
}

impl<T: Transport> MedicinoApi<T> {
    pub fn new(gateway: RequestGateway<T>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &RequestGateway<T> {
        &self.gateway
    }

    pub fn active_backend(&self) -> BackendKind {
        self.gateway.backends().active_kind()
    }

    /// Honors an explicit backend choice, otherwise runs detection.
    pub async fn select_backend(
        &self,
        resolver: &BackendResolver,
        pinned: Option<BackendKind>,
    ) -> Option<BackendKind> {
        match pinned {
            Some(kind) => {
                resolver.pin(&self.gateway, kind);
                Some(kind)
            }
            None => resolver.detect(&self.gateway).await,
        }
    }

    pub async fn diagnose(&self, symptoms: &str) -> ApiResult<DiagnosisRecord> {
        let options = RequestOptions::post_json(json!({ "symptoms": symptoms }));
        self.call("/diagnose", options, "Diagnosis failed").await
    }

    pub async fn get_medicine(&self, name: &str) -> ApiResult<MedicineRecord> {
        let route = format!("/medicine/{}", urlencoding::encode(name));
        self.call(&route, RequestOptions::get(), "Medicine not found")
            .await
    }

    pub async fn list_medicines(&self) -> ApiResult<Vec<MedicineRecord>> {
        self.call("/medicines", RequestOptions::get(), "Failed to load medicines list")
            .await
    }

    pub async fn get_history(&self) -> ApiResult<Vec<HistoryRecord>> {
        self.call("/history", RequestOptions::get(), "No history found")
            .await
    }

    async fn call<R: DeserializeOwned>(
        &self,
        route: &str,
        options: RequestOptions,
        fallback: &str,
    ) -> ApiResult<R> {
        let target = self.gateway.active_target();
        let endpoint = target.endpoint(route);
        let payload = self.gateway.request_on(&target, &endpoint, options).await?;
        ApiEnvelope::from_value(payload)?.into_data(fallback)
    }
}
