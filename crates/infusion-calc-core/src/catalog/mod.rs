//! Drug reference table loading.
//!
//! The built-in table is embedded JSON generated from the maintained
//! reference spreadsheet; deployments may also load their own table from
//! a JSON string with the same record shape.

mod group;

pub use group::*;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::DrugProfile;

/// Reference-table errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid reference data: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

const BUILTIN_TABLE: &str = include_str!("../../data/drugs.json");

/// Load the built-in drug reference table.
pub fn load_builtin() -> CatalogResult<Vec<DrugProfile>> {
    load_from_json(BUILTIN_TABLE)
}

/// Load a reference table from a JSON array of profile records.
pub fn load_from_json(json: &str) -> CatalogResult<Vec<DrugProfile>> {
    Ok(serde_json::from_str(json)?)
}

/// Load the built-in table already grouped by drug identity.
pub fn load_builtin_grouped() -> CatalogResult<BTreeMap<String, GroupedDrug>> {
    Ok(group_by_base_name(&load_builtin()?))
}
