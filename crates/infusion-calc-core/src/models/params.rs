//! Calculation modes and user-entered parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which calculation the user requested.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalcMode {
    /// Single rapid-administration dose
    #[serde(rename = "bolus")]
    Bolus,
    /// Continuous infusion rate from a prescribed dose
    #[serde(rename = "infusion")]
    Infusion,
    /// Back-calculate the delivered dose from an observed pump rate
    #[serde(rename = "check-dose")]
    CheckDose,
}

impl CalcMode {
    /// The wire/display identifier for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            CalcMode::Bolus => "bolus",
            CalcMode::Infusion => "infusion",
            CalcMode::CheckDose => "check-dose",
        }
    }
}

impl fmt::Display for CalcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized mode identifier.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("unknown calculation mode: {0}")]
pub struct ParseModeError(String);

impl FromStr for CalcMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bolus" => Ok(CalcMode::Bolus),
            "infusion" => Ok(CalcMode::Infusion),
            "check-dose" => Ok(CalcMode::CheckDose),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Numeric parameters for one calculation invocation.
///
/// All fields follow the fail-soft-to-zero policy: unparseable or missing
/// text input becomes `0.0` and propagates through the arithmetic as zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CalcParams {
    /// Patient weight in kg
    pub weight: f64,
    /// Drug quantity added to the dilution, in the profile's quantity unit
    pub quantity: f64,
    /// Diluent volume in mL
    pub volume: f64,
    /// Prescribed dose, in the profile's dose unit
    pub dose: f64,
    /// Observed pump rate in mL/h (check-dose mode)
    pub infusion_rate: f64,
}

impl CalcParams {
    /// Build parameters from raw text fields as entered in a form.
    pub fn from_text(
        weight: &str,
        quantity: &str,
        volume: &str,
        dose: &str,
        infusion_rate: &str,
    ) -> Self {
        Self {
            weight: parse_decimal(weight),
            quantity: parse_decimal(quantity),
            volume: parse_decimal(volume),
            dose: parse_decimal(dose),
            infusion_rate: parse_decimal(infusion_rate),
        }
    }
}

/// Parse a user-entered decimal, tolerating a comma separator.
///
/// Returns `0.0` for anything that does not parse to a finite number.
pub fn parse_decimal(text: &str) -> f64 {
    let normalized = text.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
