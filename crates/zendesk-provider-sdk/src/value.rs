//! Attribute values
//!
//! The orchestrator describes a resource as a flat map of attribute names to
//! loosely typed values. Nested blocks (for example the actions of a macro)
//! are ordered lists of such maps.

use crate::error::{AttributeError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// A map of attribute names to values
pub type Attributes = BTreeMap<String, Value>;

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
    /// Ordered list of nested blocks; order is significant
    List(Vec<Attributes>),
}

/// The kind of a [`Value`], used in type errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    Int,
    Bool,
    List,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::String => write!(f, "string"),
            ValueKind::Int => write!(f, "int"),
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::List => write!(f, "list"),
        }
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
            Value::List(_) => ValueKind::List,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Attributes]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Convert a JSON value into an attribute value.
    ///
    /// `null` means "not set" and yields `Ok(None)`. Floats and bare objects
    /// have no attribute representation and are rejected; `attribute` names
    /// the offending path in the error.
    pub fn from_json(attribute: &str, json: serde_json::Value) -> Result<Option<Value>> {
        let value = match json {
            serde_json::Value::Null => return Ok(None),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => {
                    return Err(AttributeError::UnsupportedJson {
                        attribute: attribute.to_string(),
                        reason: format!("number {} is not a 64-bit integer", n),
                    });
                }
            },
            serde_json::Value::Array(items) => {
                let mut blocks = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    let path = format!("{}.{}", attribute, index);
                    match item {
                        serde_json::Value::Object(map) => {
                            blocks.push(attributes_from_json_map(&path, map)?);
                        }
                        other => {
                            return Err(AttributeError::UnsupportedJson {
                                attribute: path,
                                reason: format!("list elements must be objects, got {}", other),
                            });
                        }
                    }
                }
                Value::List(blocks)
            }
            serde_json::Value::Object(_) => {
                return Err(AttributeError::UnsupportedJson {
                    attribute: attribute.to_string(),
                    reason: "nested objects must be wrapped in a list".to_string(),
                });
            }
        };
        Ok(Some(value))
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(attributes_to_json).collect())
            }
        }
    }
}

/// Convert a JSON object into attributes, dropping `null` members
pub fn attributes_from_json(json: serde_json::Value) -> Result<Attributes> {
    match json {
        serde_json::Value::Object(map) => attributes_from_json_map("", map),
        serde_json::Value::Null => Ok(Attributes::new()),
        other => Err(AttributeError::UnsupportedJson {
            attribute: String::new(),
            reason: format!("expected an object, got {}", other),
        }),
    }
}

pub fn attributes_to_json(attributes: &Attributes) -> serde_json::Value {
    serde_json::Value::Object(
        attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect(),
    )
}

fn attributes_from_json_map(
    prefix: &str,
    map: serde_json::Map<String, serde_json::Value>,
) -> Result<Attributes> {
    let mut attributes = Attributes::new();
    for (key, json) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        if let Some(value) = Value::from_json(&path, json)? {
            attributes.insert(key, value);
        }
    }
    Ok(attributes)
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Attributes>> for Value {
    fn from(items: Vec<Attributes>) -> Self {
        Value::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_object() {
        let attributes = attributes_from_json(json!({
            "title": "Close ticket",
            "position": 3,
            "active": false,
            "description": null,
            "actions": [
                {"field": "status", "value": "solved"},
                {"field": "priority", "value": "low"}
            ]
        }))
        .unwrap();

        assert_eq!(attributes.get("title"), Some(&Value::from("Close ticket")));
        assert_eq!(attributes.get("position"), Some(&Value::Int(3)));
        assert_eq!(attributes.get("active"), Some(&Value::Bool(false)));
        assert!(!attributes.contains_key("description"));

        let actions = attributes.get("actions").and_then(Value::as_list).unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[1].get("field"), Some(&Value::from("priority")));
    }

    #[test]
    fn test_from_json_rejects_float() {
        let err = Value::from_json("position", json!(1.5)).unwrap_err();
        assert!(matches!(
            err,
            AttributeError::UnsupportedJson { ref attribute, .. } if attribute == "position"
        ));
    }

    #[test]
    fn test_from_json_rejects_scalar_list_element() {
        let err = Value::from_json("actions", json!(["status"])).unwrap_err();
        assert!(matches!(
            err,
            AttributeError::UnsupportedJson { ref attribute, .. } if attribute == "actions.0"
        ));
    }

    #[test]
    fn test_to_json_keeps_list_order() {
        let mut first = Attributes::new();
        first.insert("field".to_string(), Value::from("status"));
        let mut second = Attributes::new();
        second.insert("field".to_string(), Value::from("group_id"));

        let json = Value::List(vec![first, second]).to_json();
        assert_eq!(json, json!([{"field": "status"}, {"field": "group_id"}]));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Value::from(true).kind().to_string(), "bool");
        assert_eq!(Value::List(vec![]).kind().to_string(), "list");
    }
}
