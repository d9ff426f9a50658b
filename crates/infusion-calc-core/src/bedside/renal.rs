//! Renal function estimates.

use super::Sex;

/// Creatinine clearance in mL/min, Cockcroft-Gault.
pub fn cockcroft_gault(age_years: f64, weight_kg: f64, creatinine_mg_dl: f64, sex: Sex) -> Option<f64> {
    if age_years <= 0.0 || weight_kg <= 0.0 || creatinine_mg_dl <= 0.0 {
        return None;
    }
    let clearance = ((140.0 - age_years) * weight_kg) / (72.0 * creatinine_mg_dl);
    match sex {
        Sex::Female => Some(clearance * 0.85),
        Sex::Male => Some(clearance),
    }
}

/// Estimated GFR in mL/min/1.73m², CKD-EPI 2021 (race-free).
pub fn ckd_epi_2021(creatinine_mg_dl: f64, age_years: f64, sex: Sex) -> Option<f64> {
    if creatinine_mg_dl <= 0.0 || age_years <= 0.0 {
        return None;
    }

    let (kappa, alpha) = match sex {
        Sex::Female => (0.7, -0.241),
        Sex::Male => (0.9, -0.302),
    };
    let ratio = creatinine_mg_dl / kappa;

    let mut gfr = if ratio < 1.0 {
        142.0 * ratio.powf(alpha) * 0.9938f64.powf(age_years)
    } else {
        142.0 * ratio.powf(-1.200) * 0.9938f64.powf(age_years)
    };
    if sex == Sex::Female {
        gfr *= 1.012;
    }
    Some(gfr)
}

/// KDIGO chronic kidney disease stage for an eGFR value.
pub fn ckd_stage(gfr: f64) -> &'static str {
    if gfr >= 90.0 {
        "G1 - Normal (>= 90)"
    } else if gfr >= 60.0 {
        "G2 - Levemente reduzido"
    } else if gfr >= 45.0 {
        "G3a - Moderadamente reduzido"
    } else if gfr >= 30.0 {
        "G3b - Moderadamente severo"
    } else if gfr >= 15.0 {
        "G4 - Severamente reduzido"
    } else {
        "G5 - Falencia renal"
    }
}
