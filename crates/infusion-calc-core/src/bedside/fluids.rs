//! Fluid and electrolyte balance.

use super::Sex;

/// Body water fraction used by the sodium/water formulas.
fn water_fraction(sex: Sex) -> f64 {
    match sex {
        Sex::Male => 0.6,
        Sex::Female => 0.5,
    }
}

/// Total body water in liters.
pub fn total_body_water(sex: Sex, weight_kg: f64) -> Option<f64> {
    if weight_kg <= 0.0 {
        return None;
    }
    Some(water_fraction(sex) * weight_kg)
}

/// Sodium deficit in mEq to move from the current to the target level.
pub fn sodium_deficit(sex: Sex, weight_kg: f64, current_na: f64, target_na: f64) -> Option<f64> {
    if weight_kg <= 0.0 || current_na <= 0.0 || target_na <= 0.0 {
        return None;
    }
    Some(water_fraction(sex) * weight_kg * (target_na - current_na))
}

/// Free water excess in mL for hyponatremia (Na < 135).
pub fn free_water_excess(sex: Sex, weight_kg: f64, sodium: f64) -> Option<f64> {
    if sodium <= 0.0 || sodium >= 135.0 {
        return None;
    }
    let tbw = total_body_water(sex, weight_kg)?;
    Some(tbw * (1.0 - sodium / 140.0) * 1000.0)
}

/// Free water deficit in mL for hypernatremia (Na > 145).
pub fn free_water_deficit(sex: Sex, weight_kg: f64, sodium: f64) -> Option<f64> {
    if sodium <= 145.0 {
        return None;
    }
    let tbw = total_body_water(sex, weight_kg)?;
    Some(tbw * (sodium / 140.0 - 1.0) * 1000.0)
}

/// Serum osmolarity in mOsm/L from sodium, glucose, and urea (mg/dL).
pub fn serum_osmolarity(sodium: f64, glucose: f64, urea: f64) -> Option<f64> {
    if sodium <= 0.0 || glucose <= 0.0 || urea <= 0.0 {
        return None;
    }
    Some(2.0 * sodium + glucose / 18.0 + urea / 6.0)
}
