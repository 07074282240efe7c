use thiserror::Error;

pub type Result<T> = std::result::Result<T, SchoolError>;

#[derive(Debug, Error)]
pub enum SchoolError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("roster: {0}")]
    Roster(String),
    #[error("render failed for {url}: {message}")]
    Render { url: String, message: String },
    #[error("export: {0}")]
    Export(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Other(String),
}

impl SchoolError {
    /// Error raised by a renderer while working on `url`.
    pub fn render_error(url: &str, message: impl ToString) -> Self {
        SchoolError::Render {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    pub fn roster_error(message: impl Into<String>) -> Self {
        SchoolError::Roster(message.into())
    }
}
