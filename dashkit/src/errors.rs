use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Fetch error: HTTP status {0}")]
    HttpStatus(u16),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing target: no element with id '{0}'")]
    MissingTarget(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl DashError {
    /// True for every failure that means the document never arrived.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            DashError::Fetch(_) | DashError::HttpStatus(_) | DashError::Parse(_)
        )
    }
}

impl From<reqwest::Error> for DashError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => DashError::HttpStatus(status.as_u16()),
            None if err.is_decode() => DashError::Parse(err.to_string()),
            None => DashError::Fetch(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        DashError::Parse(err.to_string())
    }
}

impl From<config::ConfigError> for DashError {
    fn from(err: config::ConfigError) -> Self {
        DashError::Config(err.to_string())
    }
}

impl From<url::ParseError> for DashError {
    fn from(err: url::ParseError) -> Self {
        DashError::Config(format!("invalid data url: {}", err))
    }
}
