//! Types for portal operations.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::records::CaseIdentifier;

/// Errors raised while establishing the portal session.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Login failed with status code {status}")]
    Rejected { status: u16 },

    #[error("Login request failed: {0}")]
    Transport(String),

    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),
}

/// Errors raised while fetching a status page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() {
            FetchError::ConnectionFailed(e.to_string())
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

/// Login credentials. Either field may be empty.
#[derive(Clone, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Source of raw case status pages.
#[async_trait]
pub trait StatusPortal: Send + Sync {
    /// Fetch the status page for one identifier and return its body.
    async fn fetch_status(&self, identifier: &CaseIdentifier) -> Result<String, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_includes_status() {
        let err = AuthError::Rejected { status: 403 };
        assert_eq!(err.to_string(), "Login failed with status code 403");
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("alice", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
