//! Mock status portal for testing.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::portal::{FetchError, StatusPortal};
use crate::records::CaseIdentifier;

/// Mock implementation of the StatusPortal trait.
///
/// - Serves a scripted page per identifier, or a default page
/// - Records every fetched identifier in order
/// - Fails with a transport error for chosen identifiers
#[derive(Debug, Clone, Default)]
pub struct MockPortal {
    pages: Arc<RwLock<HashMap<String, String>>>,
    default_page: Arc<RwLock<String>>,
    failures: Arc<RwLock<HashSet<String>>>,
    requests: Arc<RwLock<Vec<CaseIdentifier>>>,
}

impl MockPortal {
    /// Create a mock portal that serves an empty page for every identifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `page` for `identifier`.
    pub async fn set_page(&self, identifier: &str, page: impl Into<String>) {
        self.pages
            .write()
            .await
            .insert(identifier.to_string(), page.into());
    }

    /// Serve `page` for identifiers without a scripted page.
    pub async fn set_default_page(&self, page: impl Into<String>) {
        *self.default_page.write().await = page.into();
    }

    /// Make fetches for `identifier` fail.
    pub async fn set_failure(&self, identifier: &str) {
        self.failures.write().await.insert(identifier.to_string());
    }

    /// Identifiers fetched so far, in order.
    pub async fn requests(&self) -> Vec<CaseIdentifier> {
        self.requests.read().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }
}

#[async_trait]
impl StatusPortal for MockPortal {
    async fn fetch_status(&self, identifier: &CaseIdentifier) -> Result<String, FetchError> {
        self.requests.write().await.push(identifier.clone());

        if self.failures.read().await.contains(identifier.as_str()) {
            return Err(FetchError::ConnectionFailed(format!(
                "mock failure for {}",
                identifier
            )));
        }

        let pages = self.pages.read().await;
        match pages.get(identifier.as_str()) {
            Some(page) => Ok(page.clone()),
            None => Ok(self.default_page.read().await.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_scripted_and_default_pages() {
        let portal = MockPortal::new();
        portal.set_page("A", "page-a").await;
        portal.set_default_page("fallback").await;

        assert_eq!(portal.fetch_status(&"A".into()).await.unwrap(), "page-a");
        assert_eq!(portal.fetch_status(&"B".into()).await.unwrap(), "fallback");
        assert_eq!(
            portal.requests().await,
            vec![CaseIdentifier::new("A"), CaseIdentifier::new("B")]
        );
    }

    #[tokio::test]
    async fn test_failure_is_recorded() {
        let portal = MockPortal::new();
        portal.set_failure("BAD").await;

        let result = portal.fetch_status(&"BAD".into()).await;
        assert!(matches!(result, Err(FetchError::ConnectionFailed(_))));
        assert_eq!(portal.request_count().await, 1);
    }
}
