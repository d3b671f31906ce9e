#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::cli::Command;
    use crate::core::gateway::DEFAULT_REQUEST_TIMEOUT;
    use crate::core::resolver::{DEFAULT_PROBE_PATH, DEFAULT_PROBE_TIMEOUT};
    use crate::domain::model::{BackendKind, BackendTarget};
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_endpoint_path, validate_positive_number, validate_url, Validate,
    };
    use clap::Parser;
    use std::path::PathBuf;
    use std::time::Duration;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "medicino")]
    #[command(about = "Symptom diagnosis and medicine lookup client")]
    pub struct CliConfig {
        #[arg(long, default_value = BackendTarget::DEFAULT_PRIMARY_URL)]
        pub primary_url: String,

        #[arg(long, default_value_t = false, action = clap::ArgAction::Set)]
        pub primary_trailing_slash: bool,

        #[arg(long, default_value = BackendTarget::DEFAULT_SECONDARY_URL)]
        pub secondary_url: String,

        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        pub secondary_trailing_slash: bool,

        #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT.as_millis() as u64)]
        pub timeout_ms: u64,

        #[arg(long, default_value_t = DEFAULT_PROBE_TIMEOUT.as_millis() as u64)]
        pub probe_timeout_ms: u64,

        #[arg(long, default_value = DEFAULT_PROBE_PATH)]
        pub probe_path: String,

        #[arg(long, value_enum, help = "Skip detection and use this backend")]
        pub backend: Option<BackendKind>,

        #[arg(long, help = "Load backend and client settings from a TOML file")]
        pub config: Option<PathBuf>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    impl ConfigProvider for CliConfig {
        fn backend_target(&self, kind: BackendKind) -> BackendTarget {
            match kind {
                BackendKind::Primary => {
                    BackendTarget::new(kind, self.primary_url.clone(), self.primary_trailing_slash)
                }
                BackendKind::Secondary => BackendTarget::new(
                    kind,
                    self.secondary_url.clone(),
                    self.secondary_trailing_slash,
                ),
            }
        }

        fn request_timeout(&self) -> Duration {
            Duration::from_millis(self.timeout_ms)
        }

        fn probe_timeout(&self) -> Duration {
            Duration::from_millis(self.probe_timeout_ms)
        }

        fn probe_path(&self) -> &str {
            &self.probe_path
        }

        fn pinned_backend(&self) -> Option<BackendKind> {
            self.backend
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_url("primary_url", &self.primary_url)?;
            validate_url("secondary_url", &self.secondary_url)?;
            validate_positive_number("timeout_ms", self.timeout_ms, 1)?;
            validate_positive_number("probe_timeout_ms", self.probe_timeout_ms, 1)?;
            validate_endpoint_path("probe_path", &self.probe_path)?;
            Ok(())
        }
    }

}
