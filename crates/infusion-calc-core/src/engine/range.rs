//! Safe-dose range checking and range-text parsing.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::DrugProfile;

/// Check a dose against the profile's configured safe range.
///
/// Returns `None` when no bounds are configured or the dose falls inside
/// them, otherwise a display-ready warning string.
///
/// Thresholds are evaluated in a fixed order with first-match-wins
/// semantics: severely-high, high, low, severely-low. Because the low
/// check precedes the severely-low check, doses under half the minimum
/// report the plain below-range message. Callers depend on this exact
/// ordering and wording; do not reorder without coordinating with them.
pub fn check_dose_range(profile: &DrugProfile, dose: f64) -> Option<String> {
    let (min, max) = match (profile.dose_min, profile.dose_max) {
        (Some(min), Some(max)) => (min, max),
        _ => return None,
    };
    let unit = profile.dose_unit.as_str();

    if dose > max * 1.5 {
        return Some(format!(
            "⚠️ ATENÇÃO: Dose MUITO ALTA! ({dose:.3} {unit}) Range recomendado: {min}-{max} {unit}"
        ));
    }

    if dose > max {
        return Some(format!(
            "⚠️ Aviso: Dose acima do recomendado ({dose:.3} {unit}). Range: {min}-{max} {unit}"
        ));
    }

    if dose < min {
        return Some(format!(
            "⚠️ Aviso: Dose abaixo do recomendado ({dose:.3} {unit}). Range: {min}-{max} {unit}"
        ));
    }

    if dose < min * 0.5 {
        return Some(format!(
            "⚠️ Aviso: Dose MUITO BAIXA! ({dose:.3} {unit}). Range recomendado: {min}-{max} {unit}"
        ));
    }

    None
}

static RANGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9.]+)\s*-\s*([0-9.]+)").unwrap());

/// Extract the smaller bound of a free-text "min-max" dose range.
///
/// Used only to seed the default dose input; falls back to `"1"` when the
/// text is absent, has no range, or the captured numbers do not parse.
pub fn min_dose_from_range(text: Option<&str>) -> String {
    let Some(text) = text else {
        return "1".to_string();
    };

    let Some(captures) = RANGE_PATTERN.captures(text) else {
        return "1".to_string();
    };

    let first: f64 = match captures[1].parse() {
        Ok(v) => v,
        Err(_) => return "1".to_string(),
    };
    let second: f64 = match captures[2].parse() {
        Ok(v) => v,
        Err(_) => return "1".to_string(),
    };

    format!("{}", first.min(second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalcKind, DrugProfile};

    fn bounded_profile(min: f64, max: f64) -> DrugProfile {
        let mut profile: DrugProfile = serde_json::from_value(serde_json::json!({
            "group_key": "test",
            "name": "Test Drug",
            "category": "Teste",
            "calc_type": "bolus",
            "dose_unit": "mcg/kg",
            "default_quantity_unit": "mcg",
        }))
        .unwrap();
        profile.dose_min = Some(min);
        profile.dose_max = Some(max);
        assert_eq!(profile.calc_type, CalcKind::Bolus);
        profile
    }

    #[test]
    fn test_no_bounds_never_warns() {
        let mut profile = bounded_profile(1.0, 2.0);
        profile.dose_max = None;
        assert!(check_dose_range(&profile, 9999.0).is_none());

        profile.dose_max = Some(2.0);
        profile.dose_min = None;
        assert!(check_dose_range(&profile, 9999.0).is_none());
    }

    #[test]
    fn test_in_range_is_silent() {
        let profile = bounded_profile(1.0, 2.0);
        assert!(check_dose_range(&profile, 1.0).is_none());
        assert!(check_dose_range(&profile, 1.5).is_none());
        assert!(check_dose_range(&profile, 2.0).is_none());
    }

    #[test]
    fn test_severe_high_takes_precedence_over_high() {
        let profile = bounded_profile(1.0, 2.0);

        let warning = check_dose_range(&profile, 3.1).unwrap();
        assert!(warning.contains("MUITO ALTA"), "got: {warning}");

        let warning = check_dose_range(&profile, 2.5).unwrap();
        assert!(warning.contains("acima do recomendado"), "got: {warning}");
    }

    #[test]
    fn test_below_min_reports_mild_low_even_when_severe() {
        let profile = bounded_profile(1.0, 2.0);

        // 0.2 is under half the minimum, but the below-range check runs
        // first and wins.
        let warning = check_dose_range(&profile, 0.2).unwrap();
        assert!(warning.contains("abaixo do recomendado"), "got: {warning}");
        assert!(!warning.contains("MUITO BAIXA"));
    }

    #[test]
    fn test_warning_wording() {
        let profile = bounded_profile(1.0, 2.0);
        assert_eq!(
            check_dose_range(&profile, 4.0).unwrap(),
            "⚠️ ATENÇÃO: Dose MUITO ALTA! (4.000 mcg/kg) Range recomendado: 1-2 mcg/kg"
        );
        assert_eq!(
            check_dose_range(&profile, 0.5).unwrap(),
            "⚠️ Aviso: Dose abaixo do recomendado (0.500 mcg/kg). Range: 1-2 mcg/kg"
        );
    }

    #[test]
    fn test_min_dose_from_range() {
        assert_eq!(min_dose_from_range(Some("1-5 mg/kg")), "1");
        assert_eq!(min_dose_from_range(Some("5 - 1")), "1");
        assert_eq!(min_dose_from_range(Some("0.05 - 0.1 mg/kg")), "0.05");
        assert_eq!(min_dose_from_range(None), "1");
        assert_eq!(min_dose_from_range(Some("")), "1");
        assert_eq!(min_dose_from_range(Some("no numbers")), "1");
        assert_eq!(min_dose_from_range(Some("sem range, só texto")), "1");
    }
}
