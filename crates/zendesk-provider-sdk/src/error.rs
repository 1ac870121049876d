//! SDK error types

use crate::value::ValueKind;
use thiserror::Error;

/// Errors raised while reading or checking attributes against a schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    #[error("attribute {attribute:?}: expected {expected}, found {found}")]
    TypeMismatch {
        attribute: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("attribute {0:?} is not declared in the schema")]
    Undeclared(String),

    #[error("unsupported JSON value for attribute {attribute:?}: {reason}")]
    UnsupportedJson { attribute: String, reason: String },
}

/// Raised by a [`ResourceData`](crate::ResourceData) that refuses a write
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceDataError {
    #[error("cannot set attribute {attribute:?}: {reason}")]
    Rejected { attribute: String, reason: String },
}

impl From<AttributeError> for ResourceDataError {
    fn from(err: AttributeError) -> Self {
        let attribute = match &err {
            AttributeError::TypeMismatch { attribute, .. } => attribute.clone(),
            AttributeError::Undeclared(attribute) => attribute.clone(),
            AttributeError::UnsupportedJson { attribute, .. } => attribute.clone(),
        };
        ResourceDataError::Rejected {
            attribute,
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AttributeError>;
