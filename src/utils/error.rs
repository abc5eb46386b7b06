use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Username or Password are invalid")]
    InvalidCredentials,

    #[error("Too many login failures. Please try again later")]
    TooManyLoginFailures,

    #[error("Project could not be found")]
    ProjectNotFound,

    #[error("The version of the service is not compatible with this version of the plugin")]
    IncompatibleServer,

    #[error("The server returned an unexpected status: {0}")]
    UnexpectedStatus(u16),

    #[error("The server didn't return any feature files")]
    EmptyResponse,

    #[error("Archive entry '{name}' would be written outside the output directory")]
    UnsafeEntryPath { name: String },

    #[error("Failed to extract feature files: {message}")]
    ExtractionError { message: String },
}

pub type Result<T> = std::result::Result<T, FetchError>;
