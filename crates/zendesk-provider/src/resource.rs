//! Resource trait definition

use async_trait::async_trait;
use std::sync::Arc;
use zendesk_api::MacroApi;
use zendesk_provider_sdk::{Diagnostics, MapResourceData, ResourceData, Schema};

/// Opaque metadata produced by [`Provider::configure`](crate::Provider::configure)
/// and handed to every lifecycle call
#[derive(Clone)]
pub struct ProviderMeta {
    client: Arc<dyn MacroApi>,
}

impl ProviderMeta {
    pub fn new(client: impl MacroApi + 'static) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn from_arc(client: Arc<dyn MacroApi>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &dyn MacroApi {
        self.client.as_ref()
    }
}

/// A resource type the provider manages
///
/// Every lifecycle method returns zero or more diagnostics; an empty list
/// means success.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Type name used in configuration (e.g. "zendesk_macro")
    fn type_name(&self) -> &str;

    fn schema(&self) -> &Schema;

    async fn create(&self, d: &mut dyn ResourceData, meta: &ProviderMeta) -> Diagnostics;

    async fn read(&self, d: &mut dyn ResourceData, meta: &ProviderMeta) -> Diagnostics;

    async fn update(&self, d: &mut dyn ResourceData, meta: &ProviderMeta) -> Diagnostics;

    async fn delete(&self, d: &mut dyn ResourceData, meta: &ProviderMeta) -> Diagnostics;

    /// Turn an import id into resource data ready for a read
    fn import(&self, id: &str) -> Vec<MapResourceData> {
        vec![MapResourceData::with_schema(self.schema().clone()).with_id(id)]
    }
}
