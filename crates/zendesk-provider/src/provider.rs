//! Provider definition
//!
//! The provider is a plain value: the host constructs it, reads schemas from
//! it, configures it once, and looks resources up by type name.

use crate::error::{ProviderError, Result};
use crate::macros::MacroResource;
use crate::resource::{ProviderMeta, Resource};
use std::collections::BTreeMap;
use std::sync::Arc;
use zendesk_api::config::{ENV_ACCOUNT, ENV_EMAIL, ENV_TOKEN, ENV_URL, optional_env};
use zendesk_api::{ZendeskClient, ZendeskConfig};
use zendesk_provider_sdk::{
    Attribute, AttributeType, Diagnostics, ResourceData, Schema, TypedReader,
};

pub const ACCOUNT: &str = "account";
pub const EMAIL: &str = "email";
pub const TOKEN: &str = "token";
pub const URL: &str = "url";

/// Provider-level configuration schema
pub fn provider_schema() -> Schema {
    Schema::new("The Zendesk provider manages help desk configuration.")
        .with_attribute(
            ACCOUNT,
            Attribute::optional(AttributeType::String).with_description(
                "Zendesk account (subdomain) name. Defaults to ZENDESK_ACCOUNT.",
            ),
        )
        .with_attribute(
            EMAIL,
            Attribute::optional(AttributeType::String)
                .with_description("Agent email used for API token authentication. Defaults to ZENDESK_EMAIL."),
        )
        .with_attribute(
            TOKEN,
            Attribute::optional(AttributeType::String)
                .with_description("Zendesk API token. Defaults to ZENDESK_TOKEN.")
                .sensitive(),
        )
        .with_attribute(
            URL,
            Attribute::optional(AttributeType::String).with_description(
                "Instance URL, overriding https://{account}.zendesk.com. Defaults to ZENDESK_URL.",
            ),
        )
}

/// Zendesk provider
pub struct Provider {
    schema: Schema,
    resources: BTreeMap<String, Arc<dyn Resource>>,
}

impl Provider {
    pub fn new() -> Self {
        let mut provider = Self {
            schema: provider_schema(),
            resources: BTreeMap::new(),
        };
        provider.register(Arc::new(MacroResource::new()));
        provider
    }

    fn register(&mut self, resource: Arc<dyn Resource>) {
        self.resources
            .insert(resource.type_name().to_string(), resource);
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn resource(&self, type_name: &str) -> Option<Arc<dyn Resource>> {
        self.resources.get(type_name).cloned()
    }

    pub fn resource_types(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// Build the API client from provider configuration.
    ///
    /// Each setting comes from the configuration when present, otherwise
    /// from its environment variable.
    pub fn configure(&self, config: &dyn ResourceData) -> std::result::Result<ProviderMeta, Diagnostics> {
        self.try_configure(config)
            .map_err(|e| vec![e.to_diagnostic()])
    }

    fn try_configure(&self, config: &dyn ResourceData) -> Result<ProviderMeta> {
        let reader = TypedReader::new(config, &self.schema);
        let setting = |attribute: &'static str, env: &'static str| -> Result<Option<String>> {
            Ok(reader
                .string(attribute)?
                .filter(|v| !v.is_empty())
                .or_else(|| optional_env(env)))
        };
        let required = |attribute: &'static str, env: &'static str| -> Result<String> {
            setting(attribute, env)?.ok_or(ProviderError::MissingSetting { attribute, env })
        };

        let email = required(EMAIL, ENV_EMAIL)?;
        let token = required(TOKEN, ENV_TOKEN)?;

        let zendesk = match setting(URL, ENV_URL)? {
            Some(url) => ZendeskConfig::new(&url, email, token),
            None => ZendeskConfig::for_account(&required(ACCOUNT, ENV_ACCOUNT)?, email, token),
        }
        .map_err(ProviderError::Configure)?;

        tracing::info!(url = %zendesk.base_url, "Configured Zendesk provider");
        let client = ZendeskClient::new(zendesk).map_err(ProviderError::Configure)?;
        Ok(ProviderMeta::new(client))
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}
