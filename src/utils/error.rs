use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Source query failed with status {status}: {message}")]
    SourceQueryError { status: u16, message: String },

    #[error("Malformed source response: {message}")]
    MalformedResponseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    SourceQuery,
    Output,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::ApiError(_)
            | Self::SourceQueryError { .. }
            | Self::MalformedResponseError { .. } => ErrorCategory::SourceQuery,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingConfigError { field } => {
                format!("Required setting '{}' is not set", field)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::ApiError(_) | Self::SourceQueryError { .. } => {
                "Could not read team members from Airtable".to_string()
            }
            Self::MalformedResponseError { .. } => {
                "Airtable returned a response that could not be read".to_string()
            }
            Self::IoError(e) => format!("Could not write output: {}", e),
            Self::SerializationError(e) => format!("Could not encode output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingConfigError { .. } => {
                "Set AIRTABLE_API_TOKEN and AIRTABLE_BASE_ID in the build environment"
            }
            Self::InvalidConfigValueError { .. } | Self::ConfigError { .. } => {
                "Check the configuration file and environment variables"
            }
            Self::ApiError(_) => "Check network access to the Airtable API",
            Self::SourceQueryError { status, .. } if *status == 401 || *status == 403 => {
                "Check that the Airtable token is valid and has access to the base"
            }
            Self::SourceQueryError { status, .. } if *status == 404 => {
                "Check the Airtable base id and table name"
            }
            Self::SourceQueryError { .. } | Self::MalformedResponseError { .. } => {
                "Retry the build later; fallback data is used meanwhile"
            }
            Self::IoError(_) => "Check that the output directory is writable",
            Self::SerializationError(_) => "Report this as a bug",
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
