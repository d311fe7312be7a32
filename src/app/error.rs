use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreshetError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status. `detail` carries
    /// the server-supplied human-readable string when the body had one.
    #[error("Server error ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Api {
        status: u16,
        detail: Option<String>,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Feed not found: {0}")]
    FeedNotFound(i64),

    #[error("Article not found: {0}")]
    ArticleNotFound(i64),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FreshetError {
    /// Server-supplied detail string, when the failure carries one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            FreshetError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FreshetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_present_only_for_api_errors() {
        let err = FreshetError::Api {
            status: 400,
            detail: Some("Feed already exists".into()),
        };
        assert_eq!(err.detail(), Some("Feed already exists"));

        let err = FreshetError::Config("bad".into());
        assert_eq!(err.detail(), None);
    }
}
