//! Calculation output shapes.

use serde::{Deserialize, Serialize};

/// One labeled result row.
///
/// The value is a pre-formatted display string (fixed decimals, unit
/// suffix, optional warning marker) so every consumer renders the same
/// text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultEntry {
    /// Row label (e.g. "Dose Total (mg)")
    pub label: String,
    /// Pre-formatted display value
    pub value: String,
}

impl ResultEntry {
    /// Create a result row.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The single error row used to reject degenerate input.
    pub fn error(message: &str) -> Self {
        Self::new("Erro", message)
    }
}

/// The full output of one calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalcOutput {
    /// Ordered result rows
    pub results: Vec<ResultEntry>,
    /// Preparation instruction, dose warning, or both
    pub dilution_note: Option<String>,
}

impl CalcOutput {
    /// Output carrying a single error row and no note.
    pub fn error(message: &str) -> Self {
        Self {
            results: vec![ResultEntry::error(message)],
            dilution_note: None,
        }
    }

    /// Whether this output is the single-row error shape.
    pub fn is_error(&self) -> bool {
        self.results.len() == 1 && self.results[0].label == "Erro"
    }
}
