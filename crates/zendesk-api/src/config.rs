//! Client configuration

use crate::error::{Result, ZendeskError};
use url::Url;

pub const ENV_ACCOUNT: &str = "ZENDESK_ACCOUNT";
pub const ENV_URL: &str = "ZENDESK_URL";
pub const ENV_EMAIL: &str = "ZENDESK_EMAIL";
pub const ENV_TOKEN: &str = "ZENDESK_TOKEN";

/// Where and as whom to talk to Zendesk
#[derive(Clone, PartialEq, Eq)]
pub struct ZendeskConfig {
    /// Instance root, always ending in `/` (e.g. `https://acme.zendesk.com/`)
    pub base_url: Url,
    /// Agent email; requests authenticate as `{email}/token`
    pub email: String,
    /// API token
    pub token: String,
}

impl ZendeskConfig {
    /// Configuration for an explicit instance URL
    pub fn new(
        base_url: &str,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        let mut url = Url::parse(base_url)
            .map_err(|e| ZendeskError::InvalidConfig(format!("invalid url {:?}: {}", base_url, e)))?;

        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(ZendeskError::InvalidConfig(format!(
                "unsupported url scheme {:?}",
                url.scheme()
            )));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            email: email.into(),
            token: token.into(),
        })
    }

    /// Configuration for `https://{account}.zendesk.com`
    pub fn for_account(
        account: &str,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        if account.is_empty()
            || !account
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ZendeskError::InvalidConfig(format!(
                "invalid account name {:?}",
                account
            )));
        }
        Self::new(&format!("https://{}.zendesk.com", account), email, token)
    }

    /// Create ZendeskConfig from environment variables
    ///
    /// `ZENDESK_URL` takes precedence over `ZENDESK_ACCOUNT`.
    pub fn from_env() -> Result<Self> {
        let email = require_env(ENV_EMAIL)?;
        let token = require_env(ENV_TOKEN)?;

        if let Some(url) = optional_env(ENV_URL) {
            return Self::new(&url, email, token);
        }
        let account = require_env(ENV_ACCOUNT)?;
        Self::for_account(&account, email, token)
    }
}

impl std::fmt::Debug for ZendeskConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZendeskConfig")
            .field("base_url", &self.base_url.as_str())
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Read a non-empty environment variable
pub fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn require_env(name: &str) -> Result<String> {
    optional_env(name).ok_or_else(|| ZendeskError::MissingEnvVar(name.to_string()))
}
