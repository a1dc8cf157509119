use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregatorError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidation { field: String, message: String },

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Could not decode API payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Aggregation cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input or configuration, rejected before any network call.
    Client,
    /// The search endpoint is unreachable, failing or returning garbage.
    Upstream,
    Cancelled,
    Internal,
}

impl AggregatorError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. }
            | Self::InvalidConfigValue { .. }
            | Self::ConfigValidation { .. } => ErrorCategory::Client,
            Self::Http(_) | Self::UpstreamStatus { .. } | Self::Decode(_) => {
                ErrorCategory::Upstream
            }
            Self::Cancelled => ErrorCategory::Cancelled,
            Self::Io(_) => ErrorCategory::Internal,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Upstream => 1,
            ErrorCategory::Client => 2,
            ErrorCategory::Internal => 3,
            ErrorCategory::Cancelled => 130,
        }
    }
}

pub type Result<T> = std::result::Result<T, AggregatorError>;

/// Failure of a single detail lookup. Never leaves the enrichment stage.
#[derive(Error, Debug)]
pub enum DetailError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("detail endpoint returned status {0}")]
    Status(u16),

    #[error("malformed detail payload: {0}")]
    Malformed(String),

    #[error("detail record id mismatch: expected {expected}, got {actual}")]
    IdMismatch { expected: String, actual: String },

    #[error("gave up after {attempts} attempts: {last}")]
    Exhausted { attempts: u32, last: String },

    #[error("cancelled")]
    Cancelled,
}

impl DetailError {
    /// Transport errors and non-success statuses are worth another attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status(_))
    }
}
