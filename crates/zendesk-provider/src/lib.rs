//! Zendesk provider
//!
//! Maps Zendesk macros onto the declarative create/read/update/delete
//! lifecycle of an infrastructure-as-code orchestrator.
//!
//! The host process owns the plugin transport and planning. It asks the
//! [`Provider`] for a resource by type name, validates configuration against
//! the resource schema, and drives the lifecycle with an attribute bag:
//!
//! ```ignore
//! use zendesk_provider::{Provider, logging};
//! use zendesk_provider_sdk::MapResourceData;
//!
//! logging::init_logging();
//!
//! let provider = Provider::new();
//! let meta = provider.configure(&MapResourceData::new())?; // env fallback
//! let resource = provider.resource("zendesk_macro").unwrap();
//!
//! let mut data = MapResourceData::new()
//!     .with_attribute("title", "Close and thank")
//!     .with_attribute("actions", actions);
//! let diags = resource.create(&mut data, &meta).await;
//! assert!(diags.is_empty());
//! ```

pub mod error;
pub mod logging;
pub mod macros;
pub mod provider;
pub mod resource;

pub use error::{ProviderError, Result};
pub use macros::MacroResource;
pub use provider::{Provider, provider_schema};
pub use resource::{ProviderMeta, Resource};
