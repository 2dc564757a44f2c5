use thiserror::Error;

/// Per-request resolution failures. The display text is the exact response body.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("unknown city")]
    UnknownCity,

    #[error("incorrect count")]
    InvalidCount,
}

#[derive(Error, Debug)]
pub enum CafeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl CafeError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CafeError::IoError(e) => format!("Could not read a required file: {}", e),
            CafeError::ConfigValidationError { field, .. } => {
                format!("The configuration file could not be parsed ({})", field)
            }
            CafeError::InvalidConfigValueError { field, value, .. } => {
                format!("Configuration value '{}' is not valid for {}", value, field)
            }
            CafeError::ServerError { message } => format!("The server stopped: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CafeError::IoError(_) => "Check that the path exists and is readable",
            CafeError::ConfigValidationError { .. } => "Fix the TOML syntax in the config file",
            CafeError::InvalidConfigValueError { .. } => {
                "Correct the value in the config file or on the command line"
            }
            CafeError::ServerError { .. } => {
                "Make sure the listen address is free and you are allowed to bind it"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CafeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_error_messages() {
        assert_eq!(ResolutionError::UnknownCity.to_string(), "unknown city");
        assert_eq!(ResolutionError::InvalidCount.to_string(), "incorrect count");
    }

    #[test]
    fn test_cafe_error_messages() {
        let err = CafeError::InvalidConfigValueError {
            field: "server.listen".to_string(),
            value: "nowhere".to_string(),
            reason: "not a socket address".to_string(),
        };
        assert!(err.to_string().contains("server.listen"));
        assert!(err.user_friendly_message().contains("nowhere"));
        assert!(!err.recovery_suggestion().is_empty());
    }
}
