use crate::core::gateway::DEFAULT_REQUEST_TIMEOUT;
use crate::core::resolver::{DEFAULT_PROBE_PATH, DEFAULT_PROBE_TIMEOUT};
use crate::domain::model::{BackendKind, BackendTarget};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MedicinoError, Result};
use crate::utils::validation::{
    validate_endpoint_path, validate_positive_number, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub backends: BackendsConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendsConfig {
    pub primary: Option<BackendEntry>,
    pub secondary: Option<BackendEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendEntry {
    pub base_url: String,
    pub trailing_slash: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    pub timeout_ms: Option<u64>,
    pub probe_timeout_ms: Option<u64>,
    pub probe_path: Option<String>,
    /// Skips detection and always talks to this backend.
    pub backend: Option<BackendKind>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MedicinoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MedicinoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MedicinoError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// A backend chosen on the command line wins over the file.
    pub fn with_pinned_backend(mut self, backend: Option<BackendKind>) -> Self {
        if backend.is_some() {
            self.client.backend = backend;
        }
        self
    }

    pub fn timeout_ms(&self) -> u64 {
        self.client
            .timeout_ms
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT.as_millis() as u64)
    }

    pub fn probe_timeout_ms(&self) -> u64 {
        self.client
            .probe_timeout_ms
            .unwrap_or(DEFAULT_PROBE_TIMEOUT.as_millis() as u64)
    }

    pub fn validate_config(&self) -> Result<()> {
        for kind in BackendKind::PREFERENCE {
            let target = self.backend_target(kind);
            validate_url(&format!("backends.{}.base_url", kind), &target.base_url)?;
        }

        validate_positive_number("client.timeout_ms", self.timeout_ms(), 1)?;
        validate_positive_number("client.probe_timeout_ms", self.probe_timeout_ms(), 1)?;
        validate_endpoint_path("client.probe_path", self.probe_path())?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn backend_target(&self, kind: BackendKind) -> BackendTarget {
        let (entry, default) = match kind {
            BackendKind::Primary => (&self.backends.primary, BackendTarget::default_primary()),
            BackendKind::Secondary => (
                &self.backends.secondary,
                BackendTarget::default_secondary(),
            ),
        };

        match entry {
            Some(entry) => BackendTarget::new(
                kind,
                entry.base_url.clone(),
                entry.trailing_slash.unwrap_or(default.trailing_slash),
            ),
            None => default,
        }
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms())
    }

    fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms())
    }

    fn probe_path(&self) -> &str {
        self.client.probe_path.as_deref().unwrap_or(DEFAULT_PROBE_PATH)
    }

    fn pinned_backend(&self) -> Option<BackendKind> {
        self.client.backend
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
