//! Transfusion planning.

use super::Sex;

/// Estimated blood volume in mL (70 mL/kg male, 65 mL/kg female).
///
/// When sex is unknown the male factor is used.
pub fn estimated_blood_volume(weight_kg: f64, sex: Option<Sex>) -> Option<f64> {
    if weight_kg <= 0.0 {
        return None;
    }
    let factor = match sex {
        Some(Sex::Female) => 65.0,
        Some(Sex::Male) | None => 70.0,
    };
    Some(weight_kg * factor)
}

/// Maximum allowable blood loss in mL before reaching a minimum
/// hematocrit, using the mean-hematocrit method.
pub fn max_allowable_blood_loss(blood_volume_ml: f64, hct_initial: f64, hct_minimum: f64) -> Option<f64> {
    if blood_volume_ml <= 0.0 || hct_initial <= 0.0 || hct_minimum <= 0.0 {
        return None;
    }
    let mean_hct = (hct_initial + hct_minimum) / 2.0;
    Some(blood_volume_ml * (hct_initial - hct_minimum) / mean_hct)
}

/// Packed red-cell units needed to raise hemoglobin to a target.
///
/// `None` when the current level already meets the target.
pub fn rbc_units_needed(weight_kg: f64, hb_current: f64, hb_target: f64) -> Option<f64> {
    if weight_kg <= 0.0 || hb_current <= 0.0 || hb_target <= 0.0 {
        return None;
    }
    let deficit = hb_target - hb_current;
    if deficit <= 0.0 {
        return None;
    }
    Some(deficit * weight_kg * 0.3 / 50.0)
}

/// Platelet units for a standard 1-unit-per-10-kg transfusion.
pub fn platelet_units(weight_kg: f64) -> Option<f64> {
    if weight_kg <= 0.0 {
        return None;
    }
    Some(weight_kg / 10.0)
}
