//! Saved calculation records.
//!
//! The engine does not persist anything itself; callers keep records in
//! whatever store they own (the reference UI uses browser local storage)
//! and feed them back to history and export views.

use serde::{Deserialize, Serialize};

use super::params::{CalcMode, CalcParams};
use super::results::CalcOutput;

/// A completed calculation as saved to history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationRecord {
    /// Unique record ID
    pub id: String,
    /// Creation timestamp (RFC 3339)
    pub timestamp: String,
    /// Display name of the drug
    pub drug_name: String,
    /// Calculation mode
    pub mode: CalcMode,
    /// Dose unit display string at the time of calculation
    pub dose_unit: String,
    /// Parameters as entered
    pub params: CalcParams,
    /// Results and note as computed
    pub output: CalcOutput,
}

impl CalculationRecord {
    /// Create a record for a just-computed calculation.
    pub fn new(
        drug_name: impl Into<String>,
        mode: CalcMode,
        dose_unit: impl Into<String>,
        params: CalcParams,
        output: CalcOutput,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            drug_name: drug_name.into(),
            mode,
            dose_unit: dose_unit.into(),
            params,
            output,
        }
    }

    /// The first result row's display text, used as a history summary.
    pub fn summary(&self) -> Option<String> {
        self.output
            .results
            .first()
            .map(|r| format!("{}: {}", r.label, r.value))
    }
}
