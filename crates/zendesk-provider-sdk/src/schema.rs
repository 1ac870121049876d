//! Schema descriptor
//!
//! A [`Schema`] declares, for every attribute of a resource, its type and
//! whether the practitioner must, may, or cannot set it. Schemas are plain
//! values built by constructor functions; nothing is registered globally.
//!
//! ```
//! use zendesk_provider_sdk::{Attribute, AttributeType, Schema, Value};
//!
//! let schema = Schema::new("A thing")
//!     .with_attribute("name", Attribute::required(AttributeType::String))
//!     .with_attribute(
//!         "enabled",
//!         Attribute::optional(AttributeType::Bool).with_default(Value::Bool(true)),
//!     );
//!
//! assert!(schema.attribute("name").is_some());
//! ```

use crate::diagnostic::Diagnostic;
use crate::error::{AttributeError, Result};
use crate::value::{Attributes, Value, ValueKind};
use std::collections::BTreeMap;

/// Declared shape of a resource (or of a nested block)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
}

/// A single attribute declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub attr_type: AttributeType,
    pub mode: AttributeMode,
    pub description: String,
    /// Value assumed when the attribute is absent
    pub default: Option<Value>,
    /// Hide the value from plan output and logs
    pub sensitive: bool,
}

/// Semantic type of an attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
    String,
    Int,
    Bool,
    /// Ordered list of nested blocks sharing one schema
    List(Box<Schema>),
}

/// Who owns the attribute's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeMode {
    /// Must be set in configuration
    Required,
    /// May be set in configuration
    Optional,
    /// Set by the remote system only
    Computed,
}

impl AttributeType {
    pub fn kind(&self) -> ValueKind {
        match self {
            AttributeType::String => ValueKind::String,
            AttributeType::Int => ValueKind::Int,
            AttributeType::Bool => ValueKind::Bool,
            AttributeType::List(_) => ValueKind::List,
        }
    }

    /// Check `value` against this type, descending into list elements.
    ///
    /// `path` is the dotted attribute path used in the error.
    pub fn check(&self, path: &str, value: &Value) -> Result<()> {
        match (self, value) {
            (AttributeType::String, Value::String(_))
            | (AttributeType::Int, Value::Int(_))
            | (AttributeType::Bool, Value::Bool(_)) => Ok(()),
            (AttributeType::List(element), Value::List(items)) => {
                for (index, item) in items.iter().enumerate() {
                    let prefix = format!("{}.{}", path, index);
                    for (key, nested) in item {
                        let nested_path = format!("{}.{}", prefix, key);
                        let attribute = element
                            .attribute(key)
                            .ok_or_else(|| AttributeError::Undeclared(nested_path.clone()))?;
                        attribute.attr_type.check(&nested_path, nested)?;
                    }
                }
                Ok(())
            }
            _ => Err(AttributeError::TypeMismatch {
                attribute: path.to_string(),
                expected: self.kind(),
                found: value.kind(),
            }),
        }
    }
}

impl Attribute {
    pub fn new(attr_type: AttributeType, mode: AttributeMode) -> Self {
        Self {
            attr_type,
            mode,
            description: String::new(),
            default: None,
            sensitive: false,
        }
    }

    pub fn required(attr_type: AttributeType) -> Self {
        Self::new(attr_type, AttributeMode::Required)
    }

    pub fn optional(attr_type: AttributeType) -> Self {
        Self::new(attr_type, AttributeMode::Optional)
    }

    pub fn computed(attr_type: AttributeType) -> Self {
        Self::new(attr_type, AttributeMode::Computed)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn is_required(&self) -> bool {
        self.mode == AttributeMode::Required
    }

    pub fn is_computed(&self) -> bool {
        self.mode == AttributeMode::Computed
    }
}

impl Schema {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Look up `name` and check `value` against its declared type
    pub fn check(&self, name: &str, value: &Value) -> Result<()> {
        let attribute = self
            .attribute(name)
            .ok_or_else(|| AttributeError::Undeclared(name.to_string()))?;
        attribute.attr_type.check(name, value)
    }

    /// Validate a declared configuration before any lifecycle call.
    ///
    /// Reports every problem found, one error diagnostic each.
    pub fn validate(&self, config: &Attributes) -> Vec<Diagnostic> {
        let mut diags = Vec::new();
        self.validate_at("", config, &mut diags);
        diags
    }

    fn validate_at(&self, prefix: &str, config: &Attributes, diags: &mut Vec<Diagnostic>) {
        let path = |name: &str| {
            if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{}.{}", prefix, name)
            }
        };

        for (name, attribute) in &self.attributes {
            if attribute.is_required() && !config.contains_key(name) {
                diags.push(
                    Diagnostic::error("Missing required attribute")
                        .with_detail(format!("The attribute {:?} is required.", path(name)))
                        .with_attribute(path(name)),
                );
            }
        }

        for (name, value) in config {
            let Some(attribute) = self.attribute(name) else {
                diags.push(
                    Diagnostic::error("Unsupported attribute")
                        .with_detail(format!("An attribute named {:?} is not expected here.", path(name)))
                        .with_attribute(path(name)),
                );
                continue;
            };

            if attribute.is_computed() {
                diags.push(
                    Diagnostic::error("Value for unconfigurable attribute")
                        .with_detail(format!("Can't configure a value for {:?}: its value is decided by the remote system.", path(name)))
                        .with_attribute(path(name)),
                );
                continue;
            }

            match (&attribute.attr_type, value) {
                (AttributeType::List(element), Value::List(items)) => {
                    for (index, item) in items.iter().enumerate() {
                        element.validate_at(&path(&format!("{}.{}", name, index)), item, diags);
                    }
                }
                (attr_type, value) => {
                    if let Err(err) = attr_type.check(&path(name), value) {
                        diags.push(
                            Diagnostic::error("Incorrect attribute value type")
                                .with_detail(err.to_string())
                                .with_attribute(path(name)),
                        );
                    }
                }
            }
        }
    }

    /// Fill absent attributes that declare a default
    pub fn apply_defaults(&self, config: &mut Attributes) {
        for (name, attribute) in &self.attributes {
            if let Some(default) = &attribute.default {
                config
                    .entry(name.clone())
                    .or_insert_with(|| default.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_schema() -> Schema {
        let item = Schema::new("item")
            .with_attribute("field", Attribute::required(AttributeType::String))
            .with_attribute("value", Attribute::required(AttributeType::String));

        Schema::new("test")
            .with_attribute("id_url", Attribute::computed(AttributeType::String))
            .with_attribute("name", Attribute::required(AttributeType::String))
            .with_attribute("count", Attribute::optional(AttributeType::Int))
            .with_attribute(
                "enabled",
                Attribute::optional(AttributeType::Bool).with_default(Value::Bool(true)),
            )
            .with_attribute(
                "items",
                Attribute::required(AttributeType::List(Box::new(item))),
            )
    }

    fn item(field: &str, value: &str) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert("field".to_string(), Value::from(field));
        attrs.insert("value".to_string(), Value::from(value));
        attrs
    }

    #[test]
    fn test_validate_ok() {
        let mut config = Attributes::new();
        config.insert("name".to_string(), Value::from("n"));
        config.insert("items".to_string(), Value::List(vec![item("status", "open")]));

        assert!(block_schema().validate(&config).is_empty());
    }

    #[test]
    fn test_validate_missing_required() {
        let mut config = Attributes::new();
        config.insert("items".to_string(), Value::List(vec![]));

        let diags = block_schema().validate(&config);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].attribute.as_deref(), Some("name"));
    }

    #[test]
    fn test_validate_computed_and_unknown() {
        let mut config = Attributes::new();
        config.insert("name".to_string(), Value::from("n"));
        config.insert("items".to_string(), Value::List(vec![]));
        config.insert("id_url".to_string(), Value::from("https://example"));
        config.insert("colour".to_string(), Value::from("blue"));

        let diags = block_schema().validate(&config);
        let attributes: Vec<_> = diags.iter().filter_map(|d| d.attribute.clone()).collect();
        assert_eq!(attributes, vec!["colour".to_string(), "id_url".to_string()]);
    }

    #[test]
    fn test_validate_nested_block() {
        let mut incomplete = Attributes::new();
        incomplete.insert("field".to_string(), Value::from("status"));
        incomplete.insert("value".to_string(), Value::Int(1));

        let mut config = Attributes::new();
        config.insert("name".to_string(), Value::from("n"));
        config.insert(
            "items".to_string(),
            Value::List(vec![item("status", "open"), incomplete]),
        );

        let diags = block_schema().validate(&config);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].attribute.as_deref(), Some("items.1.value"));
    }

    #[test]
    fn test_check_type_mismatch() {
        let err = block_schema().check("count", &Value::from("3")).unwrap_err();
        assert_eq!(
            err,
            AttributeError::TypeMismatch {
                attribute: "count".to_string(),
                expected: ValueKind::Int,
                found: ValueKind::String,
            }
        );
    }

    #[test]
    fn test_check_undeclared() {
        let err = block_schema().check("colour", &Value::from("blue")).unwrap_err();
        assert_eq!(err, AttributeError::Undeclared("colour".to_string()));
    }

    #[test]
    fn test_apply_defaults() {
        let schema = block_schema();

        let mut config = Attributes::new();
        schema.apply_defaults(&mut config);
        assert_eq!(config.get("enabled"), Some(&Value::Bool(true)));

        let mut config = Attributes::new();
        config.insert("enabled".to_string(), Value::Bool(false));
        schema.apply_defaults(&mut config);
        assert_eq!(config.get("enabled"), Some(&Value::Bool(false)));
    }
}
