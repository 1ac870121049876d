//! Schema-checked reads from an attribute bag
//!
//! Every read names the type it expects. The value found in the bag is
//! checked against both the expectation and the schema declaration, so a
//! misconfigured host surfaces as [`AttributeError::TypeMismatch`] rather
//! than as a panic deep inside a resource.
//!
//! Only the top-level kind is checked. Members of nested blocks are read
//! with [`block_string`]; members nobody reads are ignored here and left to
//! [`Schema::validate`](crate::Schema::validate).
//!
//! Absent attributes fall back to the schema default, if one is declared.

use crate::data::ResourceData;
use crate::error::{AttributeError, Result};
use crate::schema::Schema;
use crate::value::{Attributes, Value, ValueKind};

/// Reads attributes of a bag through its schema
pub struct TypedReader<'a> {
    data: &'a dyn ResourceData,
    schema: &'a Schema,
}

impl<'a> TypedReader<'a> {
    pub fn new(data: &'a dyn ResourceData, schema: &'a Schema) -> Self {
        Self { data, schema }
    }

    fn value(&self, key: &str, expected: ValueKind) -> Result<Option<Value>> {
        let attribute = self
            .schema
            .attribute(key)
            .ok_or_else(|| AttributeError::Undeclared(key.to_string()))?;

        if attribute.attr_type.kind() != expected {
            return Err(AttributeError::TypeMismatch {
                attribute: key.to_string(),
                expected,
                found: attribute.attr_type.kind(),
            });
        }

        let Some(value) = self.data.get_ok(key).or_else(|| attribute.default.clone()) else {
            return Ok(None);
        };
        if value.kind() != expected {
            return Err(AttributeError::TypeMismatch {
                attribute: key.to_string(),
                expected,
                found: value.kind(),
            });
        }
        Ok(Some(value))
    }

    pub fn string(&self, key: &str) -> Result<Option<String>> {
        Ok(match self.value(key, ValueKind::String)? {
            Some(Value::String(s)) => Some(s),
            _ => None,
        })
    }

    pub fn int(&self, key: &str) -> Result<Option<i64>> {
        Ok(self.value(key, ValueKind::Int)?.and_then(|v| v.as_int()))
    }

    pub fn bool(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.value(key, ValueKind::Bool)?.and_then(|v| v.as_bool()))
    }

    pub fn list(&self, key: &str) -> Result<Option<Vec<Attributes>>> {
        Ok(match self.value(key, ValueKind::List)? {
            Some(Value::List(items)) => Some(items),
            _ => None,
        })
    }
}

/// Read a string member of a nested block; absent members read as `None`
pub fn block_string(block: &Attributes, path: &str, key: &str) -> Result<Option<String>> {
    match block.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(AttributeError::TypeMismatch {
            attribute: format!("{}.{}", path, key),
            expected: ValueKind::String,
            found: other.kind(),
        }),
    }
}
