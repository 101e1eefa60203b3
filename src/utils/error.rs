use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    System,
}

impl ServiceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ServiceError::TomlError(_)
            | ServiceError::ConfigError { .. }
            | ServiceError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ServiceError::IoError(_) | ServiceError::ServerError { .. } => ErrorCategory::System,
        }
    }

    /// Process exit code the binaries use for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::System => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ServiceError::IoError(_) => {
                "Check that the file exists and the address is not already in use"
            }
            ServiceError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            ServiceError::ConfigError { .. } => "Review the configuration file and CLI flags",
            ServiceError::InvalidConfigValueError { .. } => {
                "Correct the reported field in the configuration or on the command line"
            }
            ServiceError::ServerError { .. } => "Restart the service and inspect the logs",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ServiceError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            ServiceError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
