//! Schema namespace modules.
//!
//! Each sub-module encodes one schema module as Rust static data. Modules are
//! listed in dependency order: `dima:` imports `scim:`.

pub mod dima_bias;
pub mod influence_mini;

use crate::model::{ModuleId, NamespaceModule};

/// Builds the raw (unvalidated) tables for `id`.
#[must_use]
pub fn module(id: ModuleId) -> NamespaceModule {
    match id {
        ModuleId::InfluenceMini => influence_mini::module(),
        ModuleId::DimaBias => dima_bias::module(),
    }
}
