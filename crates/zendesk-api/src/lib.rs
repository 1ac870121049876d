//! Zendesk macro API
//!
//! Typed access to the Zendesk business-rules macro endpoints.
//!
//! # Features
//!
//! - [`Macro`] / [`MacroAction`] payload types matching the REST API
//! - [`MacroApi`] capability trait, so callers can substitute a test double
//! - [`ZendeskClient`], the reqwest-backed implementation
//!
//! # Requirements
//!
//! `ZENDESK_EMAIL` and `ZENDESK_TOKEN`, plus either `ZENDESK_ACCOUNT` or
//! `ZENDESK_URL`, when using [`ZendeskConfig::from_env`].
//!
//! # Example
//!
//! ```ignore
//! use zendesk_api::{Macro, MacroAction, MacroApi, ZendeskClient, ZendeskConfig};
//!
//! let client = ZendeskClient::new(ZendeskConfig::from_env()?)?;
//!
//! let created = client
//!     .create_macro(Macro {
//!         title: "Close and thank".to_string(),
//!         active: true,
//!         actions: vec![MacroAction::new("status", "solved")],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! client.delete_macro(created.id).await?;
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use api::MacroApi;
pub use client::ZendeskClient;
pub use config::ZendeskConfig;
pub use error::{Result, ZendeskError};
pub use model::{Macro, MacroAction};
