//! Continuous infusion rate and delivered-dose computation.

use crate::models::{CalcOutput, CalcParams, DrugProfile, RateFormula, ResultEntry};

use super::range::check_dose_range;

/// Pump rate in mL/h for a prescribed dose.
///
/// Zero when the unit selects no formula or the concentration is zero.
fn pump_rate(formula: Option<RateFormula>, dose: f64, weight: f64, concentration: f64) -> f64 {
    if concentration <= 0.0 {
        return 0.0;
    }
    match formula {
        Some(RateFormula::PerKgPerMinute) => (dose * weight * 60.0) / concentration,
        Some(RateFormula::PerKgPerHour) => (dose * weight) / concentration,
        Some(RateFormula::PerMinute) => (dose * 60.0) / concentration,
        None => 0.0,
    }
}

/// Delivered dose for an observed pump rate: the algebraic inverse of
/// [`pump_rate`], with the same zero short-circuits.
fn delivered_dose(formula: Option<RateFormula>, rate: f64, weight: f64, concentration: f64) -> f64 {
    if concentration <= 0.0 {
        return 0.0;
    }
    match formula {
        Some(RateFormula::PerKgPerMinute) => {
            if weight > 0.0 {
                (rate * concentration) / (weight * 60.0)
            } else {
                0.0
            }
        }
        Some(RateFormula::PerKgPerHour) => {
            if weight > 0.0 {
                (rate * concentration) / weight
            } else {
                0.0
            }
        }
        Some(RateFormula::PerMinute) => (rate * concentration) / 60.0,
        None => 0.0,
    }
}

/// Infusion mode: prescribed dose → pump rate.
///
/// The caller guarantees `params.volume` is non-zero.
pub(super) fn infusion(profile: &DrugProfile, params: &CalcParams) -> CalcOutput {
    let warning = check_dose_range(profile, params.dose);

    let concentration = params.quantity * profile.concentration_factor() / params.volume;
    let rate = pump_rate(
        profile.dose_unit.rate_formula(),
        params.dose,
        params.weight,
        concentration,
    );

    let marker = if warning.is_some() { " ⚠️" } else { "" };
    let results = vec![
        ResultEntry::new(
            format!("Concentração ({})", profile.dose_unit.concentration_label()),
            format!("{concentration:.2}"),
        ),
        ResultEntry::new("Velocidade (mL/h)", format!("{rate:.2}{marker}")),
    ];

    CalcOutput {
        results,
        dilution_note: warning,
    }
}

/// Check-dose mode: observed pump rate → delivered dose.
///
/// The caller guarantees `params.volume` is non-zero.
pub(super) fn check_dose(profile: &DrugProfile, params: &CalcParams) -> CalcOutput {
    let concentration = params.quantity * profile.concentration_factor() / params.volume;
    let real_dose = delivered_dose(
        profile.dose_unit.rate_formula(),
        params.infusion_rate,
        params.weight,
        concentration,
    );

    let warning = check_dose_range(profile, real_dose);

    let marker = if warning.is_some() { " ⚠️" } else { "" };
    let results = vec![
        ResultEntry::new(
            format!("Concentração ({})", profile.dose_unit.concentration_label()),
            format!("{concentration:.2}"),
        ),
        ResultEntry::new(
            format!("Dose Real ({})", profile.dose_unit),
            format!("{real_dose:.3}{marker}"),
        ),
    ];

    CalcOutput {
        results,
        dilution_note: warning,
    }
}
