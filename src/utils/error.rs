use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Demo processing error: {message}")]
    ProcessingError { message: String },

    #[error("Negative numbers are not allowed: {value}")]
    NegativeInput { value: f64 },

    #[error("Unknown day: {input}")]
    UnknownDay { input: String },

    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ShowcaseError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ShowcaseError::NegativeInput { .. } | ShowcaseError::UnknownDay { .. } => {
                ErrorSeverity::Low
            }
            ShowcaseError::ValidationError { .. }
            | ShowcaseError::InvalidConfigValueError { .. }
            | ShowcaseError::UnsupportedFormat { .. } => ErrorSeverity::Medium,
            ShowcaseError::ConfigError { .. }
            | ShowcaseError::ConfigValidationError { .. }
            | ShowcaseError::MissingConfigError { .. }
            | ShowcaseError::CsvError(_)
            | ShowcaseError::SerializationError(_)
            | ShowcaseError::ProcessingError { .. } => ErrorSeverity::High,
            ShowcaseError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ShowcaseError::IoError(e) => format!("Could not access a file: {}", e),
            ShowcaseError::CsvError(e) => format!("Could not read CSV data: {}", e),
            ShowcaseError::SerializationError(e) => format!("Could not read JSON data: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ShowcaseError::IoError(_) => "Check that the path exists and is readable",
            ShowcaseError::CsvError(_) => "Make sure the CSV has a header row matching the record fields",
            ShowcaseError::SerializationError(_) => "Make sure the file holds a JSON array of records",
            ShowcaseError::ConfigError { .. }
            | ShowcaseError::ConfigValidationError { .. }
            | ShowcaseError::MissingConfigError { .. }
            | ShowcaseError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
            ShowcaseError::ValidationError { .. } => "Correct the input records and run again",
            ShowcaseError::ProcessingError { .. } => "Run again with --verbose to see which demo failed",
            ShowcaseError::NegativeInput { .. } => "Pass a number greater than or equal to zero",
            ShowcaseError::UnknownDay { .. } => "Use a weekday name such as 'monday' or 'sat'",
            ShowcaseError::UnsupportedFormat { .. } => "Use a .csv or .json file",
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
