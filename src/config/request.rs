use crate::domain::model::{TypeAItem, TypeBItem, MAX_ITEMS};
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{validate_area, validate_item_count, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A quote request as it arrives from the form boundary: up to MAX_ITEMS
/// records of each type. TOML is the primary format; JSON is accepted too,
/// picked by file extension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub type_a: Vec<TypeAItem>,
    #[serde(default)]
    pub type_b: Vec<TypeBItem>,
}

impl QuoteRequest {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_slice(content: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(content)?)
    }

    /// Parses raw request bytes, choosing the format from the path extension.
    pub fn from_bytes(path: &str, content: &[u8]) -> Result<Self> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        match extension {
            "toml" => {
                let text =
                    std::str::from_utf8(content).map_err(|e| QuoteError::ValidationError {
                        message: format!("request file is not valid UTF-8: {}", e),
                    })?;
                Self::from_toml_str(text)
            }
            "json" => Self::from_json_slice(content),
            other => Err(QuoteError::InvalidConfigValueError {
                field: "request_path".to_string(),
                value: path.to_string(),
                reason: format!("unsupported request format '{}', expected .toml or .json", other),
            }),
        }
    }
}

impl Validate for QuoteRequest {
    fn validate(&self) -> Result<()> {
        validate_item_count("type_a", self.type_a.len(), MAX_ITEMS)?;
        validate_item_count("type_b", self.type_b.len(), MAX_ITEMS)?;

        for (idx, item) in self.type_a.iter().enumerate() {
            validate_area(&format!("type_a[{}].exposed_area", idx), item.exposed_area)?;
            validate_area(&format!("type_a[{}].internal_area", idx), item.internal_area)?;
            validate_area(&format!("type_a[{}].shutter_area", idx), item.shutter_area)?;
        }
        for (idx, item) in self.type_b.iter().enumerate() {
            validate_area(&format!("type_b[{}].total_area", idx), item.total_area)?;
        }

        Ok(())
    }
}
