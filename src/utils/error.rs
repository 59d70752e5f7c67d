use thiserror::Error;

/// 轉換核心的錯誤種類
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("A valid value must be provided")]
    InvalidInput,

    #[error("Must provide a valid number (digits only)")]
    InvalidFormat { input: String },

    #[error("Roman numeral contains invalid characters")]
    InvalidCharacters { input: String },

    #[error("Roman numeral has an invalid format (wrong order or combination)")]
    InvalidGrammar { input: String },

    #[error("Value must be between 1 (I) and 3999 (MMMCMXCIX), got {input}")]
    OutOfRange { input: String },
}

impl ConversionError {
    /// 穩定的錯誤代碼，供 API 使用者程式化判斷
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::InvalidInput => "invalid_input",
            ConversionError::InvalidFormat { .. } => "invalid_format",
            ConversionError::InvalidCharacters { .. } => "invalid_characters",
            ConversionError::InvalidGrammar { .. } => "invalid_grammar",
            ConversionError::OutOfRange { .. } => "out_of_range",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Conversion(_) => ErrorCategory::Input,
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AppError::IoError(_) | AppError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Conversion(_) => ErrorSeverity::Low,
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorSeverity::High,
            AppError::IoError(_) | AppError::ServerError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Conversion(e) => e.to_string(),
            AppError::IoError(e) => format!("File or network operation failed: {}", e),
            AppError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            AppError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            AppError::ServerError { message } => format!("Server failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Use an integer from 1 to 3999 or a canonical Roman numeral",
            ErrorCategory::Configuration => "Check the command line flags and the TOML config file",
            ErrorCategory::System => "Check that the port is free and the files are readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_kinds() {
        assert_eq!(ConversionError::InvalidInput.kind(), "invalid_input");
        let err = ConversionError::OutOfRange {
            input: "4000".to_string(),
        };
        assert_eq!(err.kind(), "out_of_range");
        assert!(err.to_string().contains("4000"));
    }

    #[test]
    fn test_app_error_classification() {
        let err = AppError::MissingConfigError {
            field: "server.port".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("server.port"));

        let err: AppError = ConversionError::InvalidInput.into();
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "A valid value must be provided");
    }
}
