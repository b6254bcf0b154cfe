use crate::utils::error::{QuoteError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_item_count(field_name: &str, count: usize, max: usize) -> Result<()> {
    if count > max {
        return Err(QuoteError::ValidationError {
            message: format!("{} holds {} items, at most {} are allowed", field_name, count, max),
        });
    }
    Ok(())
}

/// Areas must be finite and non-negative. Zero is allowed: it gates the item
/// out of the quote rather than failing the request.
pub fn validate_area(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Area must be a finite, non-negative number".to_string(),
        });
    }
    Ok(())
}
