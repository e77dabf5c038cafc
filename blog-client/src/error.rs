use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogClientError {
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Not found")]
    NotFound,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BlogClientError {
    /// Builds the error for a non-success HTTP response.
    pub async fn from_http_response(resp: reqwest::Response) -> Self {
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return BlogClientError::NotFound;
        }
        let message = resp.text().await.unwrap_or_default();
        BlogClientError::Http {
            status: status.as_u16(),
            message,
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            BlogClientError::Http { status, .. } => Some(*status),
            BlogClientError::NotFound => Some(404),
            _ => None,
        }
    }
}
