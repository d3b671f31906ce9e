pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::Command, CliConfig};

pub use adapters::http::ReqwestTransport;
pub use app::{ActionHandlers, ActionOutcome, Notice, NoticeLevel};
pub use config::TomlConfig;
pub use core::{api::MedicinoApi, gateway::RequestGateway, resolver::BackendResolver};
pub use domain::model::{BackendKind, BackendTarget};
pub use utils::error::{ApiFailure, ApiResult, MedicinoError, Result};
