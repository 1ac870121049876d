//! Zendesk provider SDK
//!
//! Host-facing building blocks shared by every resource of the Zendesk
//! provider:
//!
//! - **Values**: the loosely typed attribute representation the orchestrator
//!   hands to a resource ([`Value`], [`Attributes`])
//! - **Resource data**: the attribute bag accessor ([`ResourceData`]) and an
//!   in-memory implementation ([`MapResourceData`])
//! - **Schema**: the declarative shape of a resource ([`Schema`], [`Attribute`])
//! - **Typed reads**: schema-checked access to a bag ([`TypedReader`])
//! - **Diagnostics**: what lifecycle operations report back ([`Diagnostic`])
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────┐
//! │   orchestrator (host process) │
//! └───────────────┬───────────────┘
//!                 │ attribute bag + metadata
//! ┌───────────────▼───────────────┐
//! │     zendesk-provider-sdk      │
//! │  Schema ── TypedReader ──┐    │
//! │  ResourceData ◄──────────┘    │
//! │  Diagnostic                   │
//! └───────────────┬───────────────┘
//!                 │
//! ┌───────────────▼───────────────┐
//! │       zendesk-provider        │
//! │   (resources, lifecycle)      │
//! └───────────────────────────────┘
//! ```

pub mod data;
pub mod diagnostic;
pub mod error;
pub mod schema;
pub mod typed;
pub mod value;

// Re-exports
pub use data::{MapResourceData, ResourceData};
pub use diagnostic::{Diagnostic, Diagnostics, Severity, has_errors};
pub use error::{AttributeError, ResourceDataError, Result};
pub use schema::{Attribute, AttributeMode, AttributeType, Schema};
pub use typed::{TypedReader, block_string};
pub use value::{Attributes, Value, ValueKind, attributes_from_json, attributes_to_json};
