//! Macro API capability trait

use crate::error::Result;
use crate::model::Macro;
use async_trait::async_trait;
use std::sync::Arc;

/// Remote operations on macros
///
/// Each method performs exactly one remote call. Implementations must be
/// safe to share between concurrent lifecycle operations on different
/// macros.
#[async_trait]
pub trait MacroApi: Send + Sync {
    /// Create a macro; the returned value carries the assigned id and URL
    async fn create_macro(&self, m: Macro) -> Result<Macro>;

    async fn get_macro(&self, id: i64) -> Result<Macro>;

    /// Replace the macro with the given id; `id` wins over `m.id`
    async fn update_macro(&self, id: i64, m: Macro) -> Result<Macro>;

    async fn delete_macro(&self, id: i64) -> Result<()>;
}

#[async_trait]
impl<T: MacroApi + ?Sized> MacroApi for Arc<T> {
    async fn create_macro(&self, m: Macro) -> Result<Macro> {
        (**self).create_macro(m).await
    }

    async fn get_macro(&self, id: i64) -> Result<Macro> {
        (**self).get_macro(id).await
    }

    async fn update_macro(&self, id: i64, m: Macro) -> Result<Macro> {
        (**self).update_macro(id, m).await
    }

    async fn delete_macro(&self, id: i64) -> Result<()> {
        (**self).delete_macro(id).await
    }
}
