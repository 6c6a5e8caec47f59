use thiserror::Error;

#[derive(Error, Debug)]
pub enum NbaAlertError {
    #[error("Received a {status} from the NBA API.")]
    UpstreamStatus { status: u16 },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Could not parse {team} score '{value}': {source}")]
    ScoreParseError {
        team: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("SMS delivery failed with status {status}: {body}")]
    NotificationError { status: u16, body: String },

    #[error("Missing secret: {name}")]
    MissingSecret { name: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that failed with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl NbaAlertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NbaAlertError::UpstreamStatus { .. }
            | NbaAlertError::ApiError(_)
            | NbaAlertError::NotificationError { .. } => ErrorCategory::Network,
            NbaAlertError::ScoreParseError { .. } | NbaAlertError::SerializationError(_) => {
                ErrorCategory::Data
            }
            NbaAlertError::MissingSecret { .. }
            | NbaAlertError::ConfigValidationError { .. }
            | NbaAlertError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            NbaAlertError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // The next scheduled run may well succeed.
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            NbaAlertError::UpstreamStatus { status } => {
                format!("The NBA API answered with HTTP {}", status)
            }
            NbaAlertError::ApiError(_) => "Could not reach a remote service".to_string(),
            NbaAlertError::ScoreParseError { team, value, .. } => {
                format!("The {} score '{}' is not a number", team, value)
            }
            NbaAlertError::NotificationError { status, .. } => {
                format!("The SMS provider rejected the message (HTTP {})", status)
            }
            NbaAlertError::MissingSecret { name } => format!("Secret {} is not set", name),
            NbaAlertError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            NbaAlertError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration ({}): {}", field, reason)
            }
            NbaAlertError::IoError(e) => format!("File system error: {}", e),
            NbaAlertError::SerializationError(_) => {
                "The NBA API response had an unexpected shape".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            NbaAlertError::UpstreamStatus { status: 401 | 403 } => {
                "Check that NBA_API_KEY is a valid RapidAPI key".to_string()
            }
            NbaAlertError::UpstreamStatus { status: 429 } => {
                "The RapidAPI quota is exhausted; lower the polling frequency".to_string()
            }
            NbaAlertError::UpstreamStatus { .. } | NbaAlertError::ApiError(_) => {
                "Wait for the next scheduled run or check network connectivity".to_string()
            }
            NbaAlertError::ScoreParseError { .. } | NbaAlertError::SerializationError(_) => {
                "The upstream payload changed; inspect it with -v".to_string()
            }
            NbaAlertError::NotificationError { .. } => {
                "Check the Twilio credentials and that both phone numbers are verified".to_string()
            }
            NbaAlertError::MissingSecret { name } => format!(
                "Export {} or add it to the [secrets] table of the config file",
                name
            ),
            NbaAlertError::ConfigValidationError { .. }
            | NbaAlertError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again".to_string()
            }
            NbaAlertError::IoError(_) => "Check the file path and permissions".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NbaAlertError>;
