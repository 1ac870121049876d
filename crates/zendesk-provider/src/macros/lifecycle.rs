//! Macro lifecycle
//!
//! Each operation issues at most one remote call. Failures come back as a
//! single error diagnostic and leave the identifier untouched.

use super::mapper::{marshal_macro, parse_id, unmarshal_macro};
use crate::error::Result;
use zendesk_api::MacroApi;
use zendesk_provider_sdk::{Diagnostics, ResourceData, Schema};

fn into_diagnostics(operation: &str, result: Result<()>) -> Diagnostics {
    match result {
        Ok(()) => Vec::new(),
        Err(e) => {
            tracing::debug!(operation, error = %e, "macro operation failed");
            vec![e.to_diagnostic()]
        }
    }
}

/// Create a macro from the declared attributes
pub async fn create_macro(
    schema: &Schema,
    d: &mut dyn ResourceData,
    zd: &dyn MacroApi,
) -> Diagnostics {
    into_diagnostics("create", try_create(schema, d, zd).await)
}

async fn try_create(schema: &Schema, d: &mut dyn ResourceData, zd: &dyn MacroApi) -> Result<()> {
    let mut m = unmarshal_macro(d, schema)?;
    // Zendesk assigns the id
    m.id = 0;

    tracing::info!(title = %m.title, actions = m.actions.len(), "Creating macro");
    let m = zd.create_macro(m).await?;

    d.set_id(m.id.to_string());
    marshal_macro(&m, d)
}

/// Refresh the attributes from Zendesk
pub async fn read_macro(d: &mut dyn ResourceData, zd: &dyn MacroApi) -> Diagnostics {
    into_diagnostics("read", try_read(d, zd).await)
}

async fn try_read(d: &mut dyn ResourceData, zd: &dyn MacroApi) -> Result<()> {
    let id = parse_id(d.id())?;

    tracing::debug!(id, "Reading macro");
    let m = zd.get_macro(id).await?;

    marshal_macro(&m, d)
}

/// Push the declared attributes to Zendesk
pub async fn update_macro(
    schema: &Schema,
    d: &mut dyn ResourceData,
    zd: &dyn MacroApi,
) -> Diagnostics {
    into_diagnostics("update", try_update(schema, d, zd).await)
}

async fn try_update(schema: &Schema, d: &mut dyn ResourceData, zd: &dyn MacroApi) -> Result<()> {
    let m = unmarshal_macro(d, schema)?;
    let id = parse_id(d.id())?;

    tracing::info!(id, title = %m.title, "Updating macro");
    let m = zd.update_macro(id, m).await?;

    marshal_macro(&m, d)
}

/// Delete the macro; the resource data is left as is
pub async fn delete_macro(d: &mut dyn ResourceData, zd: &dyn MacroApi) -> Diagnostics {
    into_diagnostics("delete", try_delete(d, zd).await)
}

async fn try_delete(d: &mut dyn ResourceData, zd: &dyn MacroApi) -> Result<()> {
    let id = parse_id(d.id())?;

    tracing::info!(id, "Deleting macro");
    zd.delete_macro(id).await?;
    Ok(())
}
