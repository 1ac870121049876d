//! Attribute bag accessor
//!
//! [`ResourceData`] is the capability a resource uses to read the declared
//! state and write back the observed state. The host owns the bag and hands
//! it to one lifecycle call at a time.

use crate::error::{AttributeError, ResourceDataError};
use crate::schema::Schema;
use crate::value::{Attributes, Value, attributes_from_json, attributes_to_json};

/// Per-resource attribute bag plus its identifier slot
pub trait ResourceData: Send {
    /// The value stored under `key`, if present
    fn get_ok(&self, key: &str) -> Option<Value>;

    /// Store `value` under `key`
    fn set(&mut self, key: &str, value: Value) -> Result<(), ResourceDataError>;

    /// The identifier; empty until the resource has been created or imported
    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}

/// In-memory attribute bag
///
/// With a schema attached, writes to undeclared attributes or of the wrong
/// type are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapResourceData {
    id: String,
    attributes: Attributes,
    schema: Option<Schema>,
}

impl MapResourceData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(schema: Schema) -> Self {
        Self {
            schema: Some(schema),
            ..Self::default()
        }
    }

    /// Build a bag from a JSON object; `null` members are treated as unset
    pub fn from_json(id: impl Into<String>, json: serde_json::Value) -> Result<Self, AttributeError> {
        Ok(Self {
            id: id.into(),
            attributes: attributes_from_json(json)?,
            schema: None,
        })
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn to_json(&self) -> serde_json::Value {
        attributes_to_json(&self.attributes)
    }
}

impl ResourceData for MapResourceData {
    fn get_ok(&self, key: &str) -> Option<Value> {
        self.attributes.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), ResourceDataError> {
        if let Some(schema) = &self.schema {
            schema.check(key, &value)?;
        }
        self.attributes.insert(key.to_string(), value);
        Ok(())
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
