use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Response decoding error: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Unexpected response shape: {message}")]
    ResponseShapeError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Element not found: #{id}")]
    MissingElementError { id: String },

    #[error("A submit listener is already bound to #{form_id}")]
    ListenerAlreadyBound { form_id: String },
}

/// 錯誤分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 網路錯誤與回應解析錯誤，只記錄不上拋
    RequestFailure,
    Configuration,
    Page,
    System,
}

impl AdvisorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AdvisorError::RequestError(_)
            | AdvisorError::DecodeError(_)
            | AdvisorError::ResponseShapeError { .. } => ErrorCategory::RequestFailure,
            AdvisorError::UrlError(_)
            | AdvisorError::ConfigError { .. }
            | AdvisorError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AdvisorError::MissingElementError { .. } | AdvisorError::ListenerAlreadyBound { .. } => {
                ErrorCategory::Page
            }
            AdvisorError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn is_request_failure(&self) -> bool {
        self.category() == ErrorCategory::RequestFailure
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AdvisorError::RequestError(_) => {
                "Could not reach the recommendation service".to_string()
            }
            AdvisorError::DecodeError(_) => {
                "The recommendation service returned an unreadable response".to_string()
            }
            AdvisorError::ResponseShapeError { .. } => {
                "The recommendation service returned an unexpected list".to_string()
            }
            AdvisorError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::RequestFailure => {
                "Check that the backend is running and that --base-url points at it"
            }
            ErrorCategory::Configuration => "Review the configuration file and CLI arguments",
            ErrorCategory::Page => "Check the form element ids in the [form] section",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
