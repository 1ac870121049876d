//! Provider error types

use std::num::ParseIntError;
use thiserror::Error;
use zendesk_api::ZendeskError;
use zendesk_provider_sdk::{AttributeError, Diagnostic, ResourceDataError};

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("could not parse macro id {id:?}: {source}")]
    MalformedIdentifier {
        id: String,
        #[source]
        source: ParseIntError,
    },

    /// Includes type mismatches between the bag and the schema
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    #[error(transparent)]
    RemoteCallFailed(#[from] ZendeskError),

    #[error(transparent)]
    BagWriteFailed(#[from] ResourceDataError),

    #[error("invalid provider configuration: {0}")]
    Configure(#[source] ZendeskError),

    #[error("provider attribute {attribute:?} is not set and {env} is empty")]
    MissingSetting {
        attribute: &'static str,
        env: &'static str,
    },
}

impl ProviderError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::from_err(self)
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
