use crate::core::gateway::RequestGateway;
use crate::domain::model::BackendKind;
use crate::domain::ports::{ConfigProvider, Transport};
use std::time::Duration;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(3_000);
pub const DEFAULT_PROBE_PATH: &str = "/medicines";

/// Chooses which backend the gateway talks to.
pub struct BackendResolver {
    probe_path: String,
    probe_timeout: Duration,
}

impl Default for BackendResolver {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_PATH, DEFAULT_PROBE_TIMEOUT)
    }
}

impl BackendResolver {
    pub fn new(probe_path: impl Into<String>, probe_timeout: Duration) -> Self {
        Self {
            probe_path: probe_path.into(),
            probe_timeout,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.probe_path(), config.probe_timeout())
    }

    pub fn probe_timeout(&self) -> Duration {
        self.probe_timeout
    }

    /// Probes the backends in preference order and activates the first one
    /// that answers with a success status. Later candidates are not probed
    /// once one succeeds. Returns `None` and leaves the selection untouched
    /// when nothing answers.
    pub async fn detect<T: Transport>(&self, gateway: &RequestGateway<T>) -> Option<BackendKind> {
        for kind in BackendKind::PREFERENCE {
            let target = gateway.backends().target(kind).clone();
            let endpoint = target.endpoint(&self.probe_path);

            match gateway.probe(&target, &endpoint, self.probe_timeout).await {
                Ok(()) => {
                    gateway.backends().activate(kind);
                    tracing::info!("✅ {} backend detected at {}", kind, target.base_url);
                    return Some(kind);
                }
                Err(e) => {
                    tracing::info!("{} backend not available: {}", kind, e);
                }
            }
        }

        tracing::warn!(
            "❌ No backend server detected; staying on {}",
            gateway.backends().active_kind()
        );
        None
    }

    /// Activates `kind` without probing.
    pub fn pin<T: Transport>(&self, gateway: &RequestGateway<T>, kind: BackendKind) {
        gateway.backends().activate(kind);
        tracing::info!("Backend pinned to {}", kind);
    }
}
