use crate::utils::error::{MedicinoError, Result};
use crate::utils::format::clean_symptoms;
use url::Url;

pub const MIN_SYMPTOMS_LEN: usize = 3;
pub const MAX_SYMPTOMS_LEN: usize = 500;
pub const MIN_MEDICINE_NAME_LEN: usize = 2;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MedicinoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MedicinoError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MedicinoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Endpoint paths are appended to a base URL, so they must be rooted.
pub fn validate_endpoint_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if !path.starts_with('/') {
        return Err(MedicinoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must start with '/'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(MedicinoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MedicinoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Cleans raw symptom text and checks its length. Returns the cleaned text
/// that should be sent to the backend.
pub fn validate_symptoms(raw: &str) -> Result<String> {
    let cleaned = clean_symptoms(raw);
    let len = cleaned.chars().count();

    if len < MIN_SYMPTOMS_LEN {
        return Err(MedicinoError::ValidationError {
            message: format!(
                "Please enter at least {} characters describing your symptoms",
                MIN_SYMPTOMS_LEN
            ),
        });
    }
    if len > MAX_SYMPTOMS_LEN {
        return Err(MedicinoError::ValidationError {
            message: format!(
                "Symptoms description is too long (max {} characters)",
                MAX_SYMPTOMS_LEN
            ),
        });
    }

    Ok(cleaned)
}

pub fn validate_medicine_name(raw: &str) -> Result<String> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(MedicinoError::ValidationError {
            message: "Please enter a medicine name".to_string(),
        });
    }
    if name.chars().count() < MIN_MEDICINE_NAME_LEN {
        return Err(MedicinoError::ValidationError {
            message: format!("Please enter at least {} characters", MIN_MEDICINE_NAME_LEN),
        });
    }

    Ok(name.to_string())
}
