use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalystError {
    #[error("config error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("validation error: {0}")]
    Validation(String),

    /// Failure propagated from the Analyst API call, kind unmodified.
    #[error("request error: {0}")]
    Request(#[source] anyhow::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalystError>;
