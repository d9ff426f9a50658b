//! Structured dose units.
//!
//! The reference table stores dose units as display strings ("mcg/kg/min",
//! "UI/kg/h", ...). All unit semantics the engine needs are decided here,
//! once, when a profile is deserialized; calculation code branches on the
//! structured value and never re-inspects the string.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which infusion-rate formula a dose unit selects.
///
/// Units that name neither a per-minute nor a recognized per-hour pattern
/// select no formula and compute a rate of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateFormula {
    /// dose × weight × 60 / concentration (e.g. "mcg/kg/min")
    PerKgPerMinute,
    /// dose × weight / concentration (e.g. "mg/kg/h", "UI/kg/h")
    PerKgPerHour,
    /// dose × 60 / concentration (exactly "U/min" or "mcg/min")
    PerMinute,
}

/// A dose unit with its display string and the semantics derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoseUnit {
    raw: String,
    mcg: bool,
    units: bool,
    formula: Option<RateFormula>,
}

impl DoseUnit {
    /// Parse a display unit string into its structured form.
    pub fn parse(raw: &str) -> Self {
        let formula = if raw.contains("/min") && raw.contains("kg") {
            Some(RateFormula::PerKgPerMinute)
        } else if raw.contains("/h") && raw.contains("kg") {
            Some(RateFormula::PerKgPerHour)
        } else if raw == "U/min" || raw == "mcg/min" {
            Some(RateFormula::PerMinute)
        } else {
            None
        };

        Self {
            raw: raw.to_string(),
            mcg: raw.contains("mcg"),
            units: raw.contains("UI") || raw.contains('U'),
            formula,
        }
    }

    /// The original display string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the dose is expressed in micrograms.
    pub fn is_mcg(&self) -> bool {
        self.mcg
    }

    /// The infusion-rate formula this unit selects, if any.
    pub fn rate_formula(&self) -> Option<RateFormula> {
        self.formula
    }

    /// Concentration label for the infusion and check-dose paths.
    pub fn concentration_label(&self) -> &'static str {
        if self.mcg {
            "mcg/mL"
        } else if self.units {
            "U/mL"
        } else {
            "mg/mL"
        }
    }

    /// Concentration label for the diluted-bolus path.
    ///
    /// Unlike the infusion path, unit-based drugs are not special-cased
    /// here; anything non-mcg displays as mg/mL.
    pub fn bolus_concentration_label(&self) -> &'static str {
        if self.mcg {
            "mcg/mL"
        } else {
            "mg/mL"
        }
    }
}

impl fmt::Display for DoseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for DoseUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for DoseUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(DoseUnit::parse(&raw))
    }
}
