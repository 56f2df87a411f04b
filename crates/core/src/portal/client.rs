//! reqwest-backed portal client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::PortalConfig;
use crate::records::CaseIdentifier;

use super::{AuthError, Credentials, FetchError, StatusPortal};

/// Query parameter carrying the receipt number on the status endpoint.
const RECEIPT_PARAM: &str = "appReceiptNum";

/// Unauthenticated portal client. Consumed by [`PortalClient::login`].
pub struct PortalClient {
    client: Client,
    config: PortalConfig,
}

impl PortalClient {
    /// Create a client with a cookie store so the login session carries over.
    pub fn new(config: PortalConfig) -> Result<Self, AuthError> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AuthError::ClientBuild(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Log in and return the authenticated session.
    ///
    /// Any status other than 200 is a rejection.
    pub async fn login(self, credentials: &Credentials) -> Result<PortalSession, AuthError> {
        let params = [
            ("userNameRules", self.config.user_name_rule.as_str()),
            ("changeLocale", ""),
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ];

        let response = self
            .client
            .post(&self.config.login_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
            });
        }

        debug!(url = %self.config.login_url, "Portal login successful");

        Ok(PortalSession {
            client: self.client,
            status_url: self.config.status_url,
        })
    }
}

/// Authenticated portal session, reused for every status fetch in a run.
pub struct PortalSession {
    client: Client,
    status_url: String,
}

impl PortalSession {
    /// Status URL for an identifier. The identifier is inserted verbatim.
    fn status_url_for(&self, identifier: &CaseIdentifier) -> String {
        format!("{}?{}={}", self.status_url, RECEIPT_PARAM, identifier)
    }
}

#[async_trait]
impl StatusPortal for PortalSession {
    async fn fetch_status(&self, identifier: &CaseIdentifier) -> Result<String, FetchError> {
        let url = self.status_url_for(identifier);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!(identifier = %identifier, status = %status, "Status page returned non-success");
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(status_url: &str) -> PortalSession {
        PortalSession {
            client: Client::new(),
            status_url: status_url.to_string(),
        }
    }

    #[test]
    fn test_status_url_for() {
        let session = session("https://egov.uscis.gov/casestatus/mycasestatus.do");
        assert_eq!(
            session.status_url_for(&"EAC2190012345".into()),
            "https://egov.uscis.gov/casestatus/mycasestatus.do?appReceiptNum=EAC2190012345"
        );
    }

    #[test]
    fn test_status_url_for_is_verbatim() {
        let session = session("http://localhost/status");
        assert_eq!(
            session.status_url_for(&"A&B".into()),
            "http://localhost/status?appReceiptNum=A&B"
        );
    }

    #[test]
    fn test_new_with_timeout() {
        let config = PortalConfig {
            timeout_secs: Some(5),
            ..PortalConfig::default()
        };
        assert!(PortalClient::new(config).is_ok());
    }
}
