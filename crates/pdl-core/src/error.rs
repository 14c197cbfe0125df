use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("QueryError: {0}")]
    Query(#[from] QueryError),
    #[error("SchemaError: {0}")]
    Schema(#[from] SchemaError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Prompt failed: {0}")]
    Prompt(String),
    #[error("Unsupported query: {query}")]
    UnsupportedQuery { query: String },
}

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid network: {network}")]
    InvalidNetwork { network: String },
    #[error("Invalid email: {email}")]
    InvalidEmail { email: String },
    #[error("No query data provided.")]
    EmptyQuery,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed with status: {status}")]
    RequestFailed { status: u16, message: String },
    #[error("Transport error at {endpoint}: {message}")]
    Transport { endpoint: String, message: String },
    #[error("Failed to decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Schema violation at {path}: {reason}")]
    Violation { path: String, reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration field '{field}' is missing")]
    MissingField { field: String, hint: String },
    #[error("Invalid configuration value for '{field}': {value}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    #[error("Settings file {path} could not be parsed: {message}")]
    SettingsParse { path: String, message: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Serialization failed for {filename}: {message}")]
    Serialize { filename: String, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Config(_) => ErrorSeverity::Critical,
            AppError::Api(api_error) => match api_error {
                ApiError::RequestFailed { status, .. } if *status >= 500 => ErrorSeverity::High,
                ApiError::RequestFailed { status: 401 | 403, .. } => ErrorSeverity::High,
                ApiError::Transport { .. } => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Schema(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::High,
            AppError::Query(_) => ErrorSeverity::Medium,
            AppError::Cli(_) => ErrorSeverity::Low,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Config(ConfigError::MissingField { hint, .. }) => Some(hint.clone()),
            AppError::Api(ApiError::RequestFailed { status: 401 | 403, .. }) => {
                Some("Check that PEOPLEDATALABS_KEY holds a valid API key".to_string())
            }
            AppError::Api(ApiError::RequestFailed { status: 404, .. }) => {
                Some("No person records matched the query".to_string())
            }
            AppError::Api(ApiError::RequestFailed { status: 429, .. }) => {
                Some("Rate limit reached, wait before running the query again".to_string())
            }
            AppError::Query(QueryError::EmptyQuery) => Some(
                "Provide at least one of --email, --github, --linkedin or --facebook".to_string(),
            ),
            AppError::Query(QueryError::InvalidNetwork { .. }) => {
                Some("Supported networks are github, linkedin and facebook".to_string())
            }
            _ => None,
        }
    }
}
