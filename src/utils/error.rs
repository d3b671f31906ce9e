use std::time::Duration;
use thiserror::Error;

/// Outcome of a single gateway or façade call that did not succeed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiFailure {
    #[error("Request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),

    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Response could not be decoded: {0}")]
    Decode(String),

    #[error("{0}")]
    Logical(String),
}

impl ApiFailure {
    /// Message shown to the user when this failure ends an action.
    pub fn notice_message(&self) -> String {
        match self {
            ApiFailure::Timeout(_) => {
                "Request timeout. Please check your connection and try again.".to_string()
            }
            ApiFailure::HttpStatus(code) => format!("HTTP error! status: {}", code),
            ApiFailure::Network(_) => {
                "Network error. Please check if the backend server is running.".to_string()
            }
            ApiFailure::Decode(_) => "Unexpected response from the server.".to_string(),
            ApiFailure::Logical(message) => message.clone(),
        }
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, ApiFailure::Logical(_))
    }
}

pub type ApiResult<T = serde_json::Value> = std::result::Result<T, ApiFailure>;

#[derive(Error, Debug)]
pub enum MedicinoError {
    #[error("API request failed: {0}")]
    ApiError(#[from] ApiFailure),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("No backend server detected")]
    NoBackendDetected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Backend,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MedicinoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MedicinoError::ApiError(failure) => match failure {
                ApiFailure::Timeout(_) | ApiFailure::Network(_) => ErrorCategory::Network,
                _ => ErrorCategory::Backend,
            },
            MedicinoError::NoBackendDetected => ErrorCategory::Network,
            MedicinoError::IoError(_) | MedicinoError::SerializationError(_) => {
                ErrorCategory::System
            }
            MedicinoError::ConfigError { .. }
            | MedicinoError::ConfigValidationError { .. }
            | MedicinoError::InvalidConfigValueError { .. }
            | MedicinoError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MedicinoError::ValidationError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Backend | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MedicinoError::ApiError(ApiFailure::Timeout(_)) => {
                "Check your connection or raise --timeout-ms, then try again"
            }
            MedicinoError::ApiError(ApiFailure::Network(_)) | MedicinoError::NoBackendDetected => {
                "Start the primary or secondary backend server, or point --primary-url/--secondary-url at a running one"
            }
            MedicinoError::ApiError(ApiFailure::HttpStatus(_)) => {
                "Inspect the backend server logs for the failing endpoint"
            }
            MedicinoError::ApiError(ApiFailure::Decode(_)) => {
                "Make sure the configured URL points at a medicino-compatible API"
            }
            MedicinoError::ApiError(ApiFailure::Logical(_)) => {
                "Adjust the input and try again"
            }
            MedicinoError::ConfigError { .. }
            | MedicinoError::ConfigValidationError { .. }
            | MedicinoError::InvalidConfigValueError { .. }
            | MedicinoError::MissingConfigError { .. } => {
                "Review the command-line flags or configuration file"
            }
            MedicinoError::ValidationError { .. } => "Correct the input and try again",
            MedicinoError::IoError(_) | MedicinoError::SerializationError(_) => {
                "Check file permissions and available disk space"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MedicinoError::ApiError(failure) => failure.notice_message(),
            MedicinoError::NoBackendDetected => {
                "No backend server detected. Please start the primary or secondary server."
                    .to_string()
            }
            MedicinoError::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MedicinoError>;
