//! Hemodynamic derived values.

/// Mean arterial pressure in mmHg.
pub fn mean_arterial_pressure(systolic: f64, diastolic: f64) -> Option<f64> {
    if systolic <= 0.0 || diastolic <= 0.0 {
        return None;
    }
    Some((systolic + 2.0 * diastolic) / 3.0)
}

/// Pulse pressure in mmHg.
pub fn pulse_pressure(systolic: f64, diastolic: f64) -> Option<f64> {
    if systolic <= 0.0 || diastolic <= 0.0 {
        return None;
    }
    Some(systolic - diastolic)
}

/// Blood oxygen content in mL/L.
///
/// Works for both arterial (SaO₂/PaO₂) and venous (SvO₂/PvO₂) samples;
/// the dissolved-oxygen term contributes zero when the partial pressure
/// is not measured.
pub fn oxygen_content(hemoglobin_g_dl: f64, saturation_pct: f64, partial_pressure_mmhg: f64) -> Option<f64> {
    if hemoglobin_g_dl <= 0.0 || saturation_pct <= 0.0 {
        return None;
    }
    Some(hemoglobin_g_dl * 13.4 * (saturation_pct / 100.0) + partial_pressure_mmhg * 0.0031)
}

/// Estimated oxygen consumption in mL/min, Brody (125 mL/min/m²).
pub fn estimated_vo2(body_surface_area_m2: f64) -> Option<f64> {
    if body_surface_area_m2 <= 0.0 {
        return None;
    }
    Some(125.0 * body_surface_area_m2)
}

/// Cardiac output in L/min by the Fick principle.
///
/// Requires an arterial-venous O₂ content gradient; `None` otherwise.
pub fn fick_cardiac_output(vo2_ml_min: f64, arterial_o2: f64, venous_o2: f64) -> Option<f64> {
    if vo2_ml_min <= 0.0 || arterial_o2 <= venous_o2 {
        return None;
    }
    Some(vo2_ml_min / (arterial_o2 - venous_o2))
}

/// Cardiac output in L/min from heart rate and stroke volume (mL).
pub fn cardiac_output_from_stroke(heart_rate: f64, stroke_volume_ml: f64) -> Option<f64> {
    if heart_rate <= 0.0 || stroke_volume_ml <= 0.0 {
        return None;
    }
    Some(heart_rate * stroke_volume_ml / 1000.0)
}

/// Cardiac index in L/min/m².
pub fn cardiac_index(cardiac_output: f64, body_surface_area_m2: f64) -> Option<f64> {
    if body_surface_area_m2 <= 0.0 {
        return None;
    }
    Some(cardiac_output / body_surface_area_m2)
}

/// Systemic vascular resistance in dyn·s/cm⁵.
pub fn systemic_vascular_resistance(map: f64, cvp: f64, cardiac_output: f64) -> Option<f64> {
    if cardiac_output <= 0.0 {
        return None;
    }
    Some(80.0 * (map - cvp) / cardiac_output)
}

/// Indexed systemic vascular resistance in dyn·s/cm⁵·m².
pub fn svr_index(svr: f64, body_surface_area_m2: f64) -> Option<f64> {
    if body_surface_area_m2 <= 0.0 {
        return None;
    }
    Some(svr * body_surface_area_m2)
}
