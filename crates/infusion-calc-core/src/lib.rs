//! Infusion-Calc Core Library
//!
//! Weight-based drug dosing engine for bolus and continuous-infusion
//! calculations, with dilution guidance and safe-range warnings.
//!
//! # Architecture
//!
//! ```text
//! Reference table (drugs.json)
//!         │
//!   catalog::load_builtin ──► catalog::group_by_base_name
//!         │                            │
//!         ▼                            ▼
//!   Vec<DrugProfile>          GroupedDrug { bolus, infusion }
//!                                       │
//!           user input (mode, params, presentation)
//!                                       │
//!                          ┌────────────▼────────────┐
//!                          │    engine::calculate    │
//!                          │  bolus │ infusion │ chk │
//!                          └────────────┬────────────┘
//!                                       │
//!                     CalcOutput { results, dilution_note }
//!                                       │
//!              rendering / history / export (external callers)
//! ```
//!
//! # Core principle
//!
//! The engine is pure and infallible: degenerate input yields an `Erro`
//! result row or propagates as zero, never a panic, `NaN`, or infinity.
//!
//! # Modules
//!
//! - [`models`]: Domain types (DrugProfile, DoseUnit, CalcParams, ...)
//! - [`catalog`]: Reference-table loading and per-drug grouping
//! - [`engine`]: Dose range checking and result calculation
//! - [`bedside`]: Companion clinical calculators

pub mod bedside;
pub mod catalog;
pub mod engine;
pub mod models;

// Re-export commonly used items
pub use catalog::{group_by_base_name, load_builtin, load_builtin_grouped, CatalogError, GroupedDrug};
pub use engine::{calculate, check_dose_range, min_dose_from_range};
pub use models::{
    BolusKind, CalcKind, CalcMode, CalcOutput, CalcParams, CalculationRecord, DoseUnit,
    DrugProfile, PresentationOption, RateFormula, ResultEntry,
};
