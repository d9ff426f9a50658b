//! Body measurements: BMI, body surface area, and weight estimates.

use super::Sex;

/// Body mass index (kg/m²).
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// WHO classification band for a BMI value.
pub fn bmi_classification(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Abaixo do peso"
    } else if bmi < 25.0 {
        "Peso normal"
    } else if bmi < 30.0 {
        "Sobrepeso"
    } else if bmi < 35.0 {
        "Obesidade I"
    } else if bmi < 40.0 {
        "Obesidade II"
    } else {
        "Obesidade III"
    }
}

/// Body surface area in m², DuBois formula.
pub fn body_surface_area(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    Some(0.007184 * height_cm.powf(0.725) * weight_kg.powf(0.425))
}

/// Ideal body weight in kg, Devine formula.
///
/// `None` for heights short enough to drive the formula non-positive.
pub fn ideal_weight(sex: Sex, height_cm: f64) -> Option<f64> {
    let base = match sex {
        Sex::Male => 50.0,
        Sex::Female => 45.5,
    };
    let weight = base + 2.3 * ((height_cm - 152.4) / 2.54);
    (weight > 0.0).then_some(weight)
}

/// Adjusted body weight for dosing in obesity (BMI > 30).
pub fn adjusted_weight(ideal_kg: f64, actual_kg: f64, bmi: f64) -> Option<f64> {
    if bmi <= 30.0 {
        return None;
    }
    Some(ideal_kg + 0.4 * (actual_kg - ideal_kg))
}

/// Lean body weight in kg, Janmahasatian formula.
pub fn lean_body_weight(sex: Sex, weight_kg: f64, bmi: f64) -> Option<f64> {
    if weight_kg <= 0.0 || bmi <= 0.0 {
        return None;
    }
    let value = match sex {
        Sex::Male => (9270.0 * weight_kg) / (6680.0 + 216.0 * bmi),
        Sex::Female => (9270.0 * weight_kg) / (8780.0 + 244.0 * bmi),
    };
    Some(value)
}
