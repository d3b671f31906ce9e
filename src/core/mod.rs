pub mod api;
pub mod backend;
pub mod gateway;
pub mod resolver;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{BackendKind, BackendTarget, RequestOptions};
pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::{ApiFailure, ApiResult};
