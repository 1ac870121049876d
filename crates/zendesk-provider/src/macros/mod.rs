//! `zendesk_macro` resource
//!
//! - [`schema`]: declared attributes of a macro
//! - [`mapper`]: attribute bag ⇄ [`Macro`](zendesk_api::Macro)
//! - [`lifecycle`]: create / read / update / delete against the API

pub mod lifecycle;
pub mod mapper;
pub mod schema;

use crate::resource::{ProviderMeta, Resource};
use async_trait::async_trait;
use zendesk_provider_sdk::{Diagnostics, ResourceData, Schema};

pub use schema::{RESOURCE_TYPE, macro_schema};

/// The `zendesk_macro` resource
#[derive(Debug, Clone)]
pub struct MacroResource {
    schema: Schema,
}

impl MacroResource {
    pub fn new() -> Self {
        Self {
            schema: macro_schema(),
        }
    }
}

impl Default for MacroResource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Resource for MacroResource {
    fn type_name(&self) -> &str {
        RESOURCE_TYPE
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    async fn create(&self, d: &mut dyn ResourceData, meta: &ProviderMeta) -> Diagnostics {
        lifecycle::create_macro(&self.schema, d, meta.client()).await
    }

    async fn read(&self, d: &mut dyn ResourceData, meta: &ProviderMeta) -> Diagnostics {
        lifecycle::read_macro(d, meta.client()).await
    }

    async fn update(&self, d: &mut dyn ResourceData, meta: &ProviderMeta) -> Diagnostics {
        lifecycle::update_macro(&self.schema, d, meta.client()).await
    }

    async fn delete(&self, d: &mut dyn ResourceData, meta: &ProviderMeta) -> Diagnostics {
        lifecycle::delete_macro(d, meta.client()).await
    }
}
