use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Pricing table error: {message}")]
    PricingError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    System,
}

/// Every error is fatal to the run; severity only picks the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl QuoteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuoteError::ConfigError { .. }
            | QuoteError::InvalidConfigValueError { .. }
            | QuoteError::ValidationError { .. } => ErrorCategory::Input,
            QuoteError::CsvError(_)
            | QuoteError::TomlError(_)
            | QuoteError::SerializationError(_)
            | QuoteError::PricingError { .. } => ErrorCategory::Data,
            QuoteError::IoError(_) | QuoteError::ProcessingError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            QuoteError::ConfigError { .. } | QuoteError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
            QuoteError::ValidationError { .. }
            | QuoteError::PricingError { .. }
            | QuoteError::CsvError(_)
            | QuoteError::TomlError(_)
            | QuoteError::SerializationError(_) => ErrorSeverity::High,
            QuoteError::IoError(_) | QuoteError::ProcessingError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuoteError::CsvError(_) => "The pricing table could not be read.".to_string(),
            QuoteError::TomlError(_) | QuoteError::SerializationError(_) => {
                "The quote request file could not be parsed.".to_string()
            }
            QuoteError::IoError(e) => format!("A file could not be accessed: {}", e),
            QuoteError::ConfigError { message } => format!("Configuration problem: {}", message),
            QuoteError::InvalidConfigValueError { field, reason, .. } => {
                format!("The value given for {} is not usable: {}", field, reason)
            }
            QuoteError::PricingError { message } => {
                format!("The pricing table is inconsistent: {}", message)
            }
            QuoteError::ValidationError { message } => {
                format!("The quote request is invalid: {}", message)
            }
            QuoteError::ProcessingError { message } => {
                format!("The quote could not be produced: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Input => {
                "Check the command-line flags and the quote request file against the sample request".to_string()
            }
            ErrorCategory::Data => {
                "Check the pricing CSV for duplicate or malformed rows (columns: Finish, Category, Price_per_sqft)".to_string()
            }
            ErrorCategory::System => {
                "Check that the input files exist and the output directory is writable".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
