//! Drug reference models.

use serde::{Deserialize, Serialize};

use super::unit::DoseUnit;

/// Which administration mode a raw reference record describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CalcKind {
    /// Single rapid-administration dose
    Bolus,
    /// Continuous infusion
    Infusion,
}

/// How a bolus dose is prepared.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BolusKind {
    /// Dose computed straight from weight, no user-entered dilution
    Direct,
    /// Requires a user-entered concentration/volume
    Diluted,
}

/// A physical formulation of a drug (e.g. a specific ampoule strength).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresentationOption {
    /// Display label (e.g. "5mg/5mL")
    pub label: String,
    /// Drug quantity in the package
    pub quantity: f64,
    /// Package volume in mL
    #[serde(default)]
    pub volume: Option<f64>,
    /// Concentration in quantity-unit per mL
    #[serde(default)]
    pub concentration: Option<f64>,
    /// Whether this is the pre-selected option
    #[serde(rename = "isDefault", default)]
    pub is_default: bool,
}

/// A single record in the drug reference table.
///
/// One record exists per drug per administration mode; the bolus and
/// infusion variants of the same drug share a `group_key` and are merged
/// by [`crate::catalog::group_by_base_name`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrugProfile {
    /// Stable identity shared by the bolus and infusion variants
    pub group_key: String,
    /// Primary drug name
    pub name: String,
    /// Commercial brand name
    #[serde(default)]
    pub brand_name: Option<String>,
    /// Display category (e.g. "Sedativos e Analgésicos")
    pub category: String,
    /// Which mode this record represents before grouping
    pub calc_type: CalcKind,
    /// Bolus preparation kind, when `calc_type` is bolus
    #[serde(default)]
    pub bolus_type: Option<BolusKind>,
    /// Presentation text shown to the user (e.g. "Ampola 10mL (50mcg/mL)")
    #[serde(default)]
    pub presentation: Option<String>,
    /// Dosing unit, parsed into its structured form at load time
    pub dose_unit: DoseUnit,
    /// Unit of `default_quantity` (e.g. "mg", "mcg", "UI")
    pub default_quantity_unit: String,
    /// Default drug quantity for the dilution form
    #[serde(default)]
    pub default_quantity: Option<f64>,
    /// Default diluent volume for the dilution form (mL)
    #[serde(default)]
    pub default_volume: Option<f64>,
    /// Lower safe-dose bound in `dose_unit`
    #[serde(default)]
    pub dose_min: Option<f64>,
    /// Upper safe-dose bound in `dose_unit`
    #[serde(default)]
    pub dose_max: Option<f64>,
    /// Free-text "min-max" label used to seed the default dose input
    #[serde(default)]
    pub dose_range_text: Option<String>,
    /// Whether the caller must expose a presentation selector
    #[serde(default)]
    pub has_presentation_selector: bool,
    /// Whether the caller must expose a concentration selector
    #[serde(default)]
    pub has_concentration_selector: bool,
    /// Alternate physical formulations of the same drug
    #[serde(default)]
    pub presentation_options: Option<Vec<PresentationOption>>,
    /// Free-text preparation/administration notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl DrugProfile {
    /// Whether safe-dose validation is configured for this record.
    pub fn has_dose_bounds(&self) -> bool {
        self.dose_min.is_some() && self.dose_max.is_some()
    }

    /// The presentation option at `index`, if any.
    pub fn presentation_option(&self, index: usize) -> Option<&PresentationOption> {
        self.presentation_options.as_deref()?.get(index)
    }

    /// The default presentation option, falling back to the first.
    pub fn default_presentation(&self) -> Option<&PresentationOption> {
        let options = self.presentation_options.as_deref()?;
        options.iter().find(|o| o.is_default).or_else(|| options.first())
    }

    /// The dose-to-quantity concentration correction factor.
    ///
    /// The form captures quantity in `default_quantity_unit` while the dose
    /// is entered in `dose_unit`; when the dose is in mcg but the quantity
    /// in mg, the concentration must be scaled by 1000.
    pub fn concentration_factor(&self) -> f64 {
        if self.dose_unit.is_mcg() && self.default_quantity_unit == "mg" {
            1000.0
        } else {
            1.0
        }
    }
}
