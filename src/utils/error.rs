use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Model format error: {message}")]
    ModelFormatError { message: String },

    // Displays as the bare description: the dispatcher embeds it verbatim
    // in the user-visible "Error during prediction: ..." string.
    #[error("{message}")]
    PredictionError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Model,
    Prediction,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorCategory::Config,
            AppError::ModelFormatError { .. } => ErrorCategory::Model,
            AppError::PredictionError { .. } => ErrorCategory::Prediction,
            AppError::IoError(_) | AppError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Prediction failures are reported to the user and never crash
            // the service.
            AppError::PredictionError { .. } => ErrorSeverity::Low,
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorSeverity::High,
            AppError::ModelFormatError { .. } | AppError::SerializationError(_) => {
                ErrorSeverity::High
            }
            AppError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::IoError(e) => format!("File operation failed: {}", e),
            AppError::SerializationError(e) => format!("Could not parse model file: {}", e),
            AppError::ConfigValidationError { field, message } => {
                format!("Configuration problem ({}): {}", field, message)
            }
            AppError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
            AppError::MissingConfigError { field } => {
                format!("Configuration is missing required field '{}'", field)
            }
            AppError::ModelFormatError { message } => {
                format!("Model artifact is malformed: {}", message)
            }
            AppError::PredictionError { message } => {
                format!("Prediction failed: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Config => {
                "Check the CLI flags or TOML configuration file and try again".to_string()
            }
            ErrorCategory::Model => {
                "Re-export the model artifact; it must contain feature_names, coefficients and intercept".to_string()
            }
            ErrorCategory::Prediction => {
                "Verify the submitted values match the model's feature contract".to_string()
            }
            ErrorCategory::System => {
                "Check that the model file exists and the bind address is available".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
