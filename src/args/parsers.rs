use super::types::PositiveU64;
use crate::error::{AppError, AppResult, ValidationError};

pub(super) fn parse_positive_u64(s: &str) -> AppResult<PositiveU64> {
    s.parse::<PositiveU64>().map_err(AppError::from)
}

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}

/// Non-negative, finite percentage such as `0.5` or `2`.
pub(crate) fn parse_percentage(s: &str) -> AppResult<f64> {
    let trimmed = s.trim().trim_end_matches('%');
    let value: f64 = trimmed.parse().map_err(|_err| {
        AppError::validation(ValidationError::InvalidPercentage {
            value: s.to_owned(),
        })
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::validation(ValidationError::PercentageOutOfRange));
    }
    Ok(value)
}

pub(crate) fn parse_filter(s: &str) -> Result<String, ValidationError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyFilter);
    }
    Ok(trimmed.to_owned())
}
