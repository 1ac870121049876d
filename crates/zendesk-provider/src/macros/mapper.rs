//! Attribute bag ⇄ macro mapping

use super::schema::{
    ACTION_FIELD, ACTION_VALUE, ACTIONS, ACTIVE, DESCRIPTION, POSITION, RESTRICTION, TITLE, URL,
};
use crate::error::{ProviderError, Result};
use zendesk_api::{Macro, MacroAction};
use zendesk_provider_sdk::{Attributes, ResourceData, Schema, TypedReader, Value, block_string};

/// Parse a resource identifier as a base-10 macro id
pub fn parse_id(id: &str) -> Result<i64> {
    id.parse::<i64>()
        .map_err(|source| ProviderError::MalformedIdentifier {
            id: id.to_string(),
            source,
        })
}

/// Encode the macro into the resource data.
///
/// All seven attributes are written, including the read-only `url`.
pub fn marshal_macro(m: &Macro, d: &mut dyn ResourceData) -> Result<()> {
    let actions = m
        .actions
        .iter()
        .map(|action| {
            let mut block = Attributes::new();
            block.insert(ACTION_FIELD.to_string(), Value::from(action.field.as_str()));
            block.insert(ACTION_VALUE.to_string(), Value::from(action.value.as_str()));
            block
        })
        .collect::<Vec<_>>();

    let fields = [
        (URL, Value::from(m.url.as_str())),
        (TITLE, Value::from(m.title.as_str())),
        (DESCRIPTION, Value::from(m.description.as_str())),
        (POSITION, Value::Int(m.position)),
        (RESTRICTION, Value::from(m.restriction.as_str())),
        (ACTIVE, Value::Bool(m.active)),
        (ACTIONS, Value::List(actions)),
    ];

    for (key, value) in fields {
        d.set(key, value)?;
    }
    Ok(())
}

/// Decode the resource data into a macro.
///
/// Absent attributes keep their zero value unless the schema declares a
/// default. Action order is preserved; nothing is trimmed or de-duplicated.
pub fn unmarshal_macro(d: &dyn ResourceData, schema: &Schema) -> Result<Macro> {
    let mut m = Macro::default();

    let id = d.id();
    if !id.is_empty() {
        m.id = parse_id(id)?;
    }

    let reader = TypedReader::new(d, schema);

    if let Some(v) = reader.string(URL)? {
        m.url = v;
    }
    if let Some(v) = reader.string(TITLE)? {
        m.title = v;
    }
    if let Some(v) = reader.string(DESCRIPTION)? {
        m.description = v;
    }
    if let Some(v) = reader.int(POSITION)? {
        m.position = v;
    }
    if let Some(v) = reader.bool(ACTIVE)? {
        m.active = v;
    }
    if let Some(v) = reader.string(RESTRICTION)? {
        m.restriction = v;
    }

    if let Some(actions) = reader.list(ACTIONS)? {
        for (index, block) in actions.iter().enumerate() {
            let path = format!("{}.{}", ACTIONS, index);
            m.actions.push(MacroAction {
                field: block_string(block, &path, ACTION_FIELD)?.unwrap_or_default(),
                value: block_string(block, &path, ACTION_VALUE)?.unwrap_or_default(),
            });
        }
    }

    Ok(m)
}
