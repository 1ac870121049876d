//! Macro payload types
//!
//! See <https://developer.zendesk.com/api-reference/ticketing/business-rules/macros/>.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A Zendesk macro: an ordered list of ticket field updates plus metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macro {
    /// Assigned by Zendesk on creation
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,

    /// API URL of the macro, read-only
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Ordering hint among sibling macros; 0 is not sent and leaves the
    /// server-side position as is
    #[serde(default, skip_serializing_if = "is_zero")]
    pub position: i64,

    /// Restriction policy, kept as opaque text (compact JSON when the API
    /// returns an object)
    #[serde(default, with = "restriction")]
    pub restriction: String,

    #[serde(default)]
    pub active: bool,

    /// Applied in order when the macro runs
    #[serde(default, deserialize_with = "null_as_default")]
    pub actions: Vec<MacroAction>,

    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One field update performed by a macro
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacroAction {
    pub field: String,
    pub value: String,
}

impl MacroAction {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Request/response wrapper: `{"macro": {...}}`
#[derive(Debug, Deserialize)]
pub(crate) struct MacroEnvelope {
    #[serde(rename = "macro")]
    pub item: Macro,
}

#[derive(Debug, Serialize)]
pub(crate) struct MacroEnvelopeRef<'a> {
    #[serde(rename = "macro")]
    pub item: &'a Macro,
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

mod restriction {
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::value::RawValue;

    /// Object text is embedded as-is; anything else goes out as a string
    #[allow(clippy::ptr_arg)]
    pub fn serialize<S: Serializer>(value: &String, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_empty() {
            return serializer.serialize_none();
        }
        match serde_json::from_str::<serde_json::Value>(value) {
            Ok(serde_json::Value::Object(_)) => RawValue::from_string(value.clone())
                .map_err(S::Error::custom)?
                .serialize(serializer),
            _ => serializer.serialize_str(value),
        }
    }

    /// Strings are unwrapped; any other JSON is kept as the exact text received
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let Some(raw) = Option::<Box<RawValue>>::deserialize(deserializer)? else {
            return Ok(String::new());
        };
        match serde_json::from_str::<Option<String>>(raw.get()) {
            Ok(text) => Ok(text.unwrap_or_default()),
            Err(_) => Ok(raw.get().to_string()),
        }
    }
}
