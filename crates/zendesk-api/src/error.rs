//! Zendesk API error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZendeskError {
    #[error("environment variable {0} is not set")]
    MissingEnvVar(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Zendesk API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ZendeskError {
    /// HTTP status of an API error response
    pub fn status(&self) -> Option<u16> {
        match self {
            ZendeskError::Api { status, .. } => Some(*status),
            ZendeskError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, ZendeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found() {
        let err = ZendeskError::Api {
            status: 404,
            body: "RecordNotFound".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Zendesk API error (404): RecordNotFound");

        let err = ZendeskError::InvalidConfig("bad".to_string());
        assert!(!err.is_not_found());
        assert_eq!(err.status(), None);
    }
}
