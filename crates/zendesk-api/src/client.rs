//! Zendesk REST client
//!
//! Talks to `{base_url}api/v2/macros` with HTTP basic authentication
//! (`{email}/token` + API token).

use crate::api::MacroApi;
use crate::config::ZendeskConfig;
use crate::error::{Result, ZendeskError};
use crate::model::{Macro, MacroEnvelope, MacroEnvelopeRef};
use async_trait::async_trait;
use reqwest::{Client, Method};
use url::Url;

const USER_AGENT: &str = concat!("zendesk-provider/", env!("CARGO_PKG_VERSION"));

/// Maximum length of a response body kept in errors and logs
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Truncate a response body and strip control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = match body.char_indices().nth(MAX_LOG_BODY_LENGTH) {
        Some((cut, _)) => format!("{}... [truncated, {} bytes total]", &body[..cut], body.len()),
        None => body.to_string(),
    };

    truncated.replace(|c: char| c.is_control(), "")
}

/// Zendesk API client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ZendeskClient {
    client: Client,
    config: ZendeskConfig,
}

impl ZendeskClient {
    pub fn new(config: ZendeskConfig) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.config
            .base_url
            .join(&format!("api/v2/{}", path))
            .map_err(|e| ZendeskError::InvalidConfig(format!("cannot build url for {}: {}", path, e)))
    }

    /// Send a request and return the body of a successful response
    async fn send(&self, method: Method, path: &str, body: Option<&Macro>) -> Result<String> {
        let url = self.endpoint(path)?;
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .basic_auth(format!("{}/token", self.config.email), Some(&self.config.token));

        if let Some(item) = body {
            request = request.json(&MacroEnvelopeRef { item });
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body = sanitize_for_log(&text);
            tracing::error!("Zendesk API error: {} - {}", status, body);
            return Err(ZendeskError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(text)
    }

    async fn send_macro(&self, method: Method, path: &str, body: Option<&Macro>) -> Result<Macro> {
        let text = self.send(method, path, body).await?;
        let envelope: MacroEnvelope = serde_json::from_str(&text)?;
        Ok(envelope.item)
    }
}

#[async_trait]
impl MacroApi for ZendeskClient {
    async fn create_macro(&self, m: Macro) -> Result<Macro> {
        self.send_macro(Method::POST, "macros.json", Some(&m)).await
    }

    async fn get_macro(&self, id: i64) -> Result<Macro> {
        self.send_macro(Method::GET, &format!("macros/{}.json", id), None)
            .await
    }

    async fn update_macro(&self, id: i64, m: Macro) -> Result<Macro> {
        self.send_macro(Method::PUT, &format!("macros/{}.json", id), Some(&m))
            .await
    }

    async fn delete_macro(&self, id: i64) -> Result<()> {
        self.send(Method::DELETE, &format!("macros/{}.json", id), None)
            .await?;
        Ok(())
    }
}
