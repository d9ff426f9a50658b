//! Bedside clinical calculators.
//!
//! Companion formulas to the dosing engine: anthropometry, renal
//! function, hemodynamics, fluid/electrolyte balance, and transfusion.
//! All functions are pure; inputs the formula cannot work with yield
//! `None` instead of NaN or infinity.

mod anthropometry;
mod fluids;
mod hemodynamics;
mod renal;
mod transfusion;

pub use anthropometry::*;
pub use fluids::*;
pub use hemodynamics::*;
pub use renal::*;
pub use transfusion::*;

use serde::{Deserialize, Serialize};

/// Patient sex, as used by the sex-dependent formulas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}
