//! The dose calculation engine.
//!
//! Pure functions only: every calculation is a function of the drug
//! profile, the mode, and the entered parameters. Degenerate numeric
//! input never raises; it either becomes a single `Erro` result row
//! (invalid weight/volume) or propagates as zero.

mod bolus;
mod infusion;
mod range;

pub use range::{check_dose_range, min_dose_from_range};

use crate::models::{BolusKind, CalcMode, CalcOutput, CalcParams, DrugProfile};

/// Run one calculation.
///
/// `presentation_index` selects among the profile's presentation options
/// when it has any (midazolam ampoule strengths); it is ignored otherwise.
pub fn calculate(
    mode: CalcMode,
    profile: &DrugProfile,
    params: &CalcParams,
    presentation_index: usize,
) -> CalcOutput {
    if params.weight == 0.0 {
        return CalcOutput::error("Peso inválido");
    }

    match mode {
        CalcMode::Bolus => {
            if profile.bolus_type == Some(BolusKind::Direct) {
                bolus::direct(profile, params, presentation_index)
            } else if params.volume == 0.0 {
                CalcOutput::error("Volume inválido")
            } else {
                bolus::diluted(profile, params)
            }
        }
        CalcMode::Infusion => {
            if params.volume == 0.0 {
                CalcOutput::error("Volume inválido")
            } else {
                infusion::infusion(profile, params)
            }
        }
        CalcMode::CheckDose => {
            if params.volume == 0.0 {
                CalcOutput::error("Volume inválido")
            } else {
                infusion::check_dose(profile, params)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(json: serde_json::Value) -> DrugProfile {
        serde_json::from_value(json).unwrap()
    }

    fn infusion_profile() -> DrugProfile {
        profile(serde_json::json!({
            "group_key": "noradrenalina",
            "name": "Noradrenalina",
            "category": "Vasopressores",
            "calc_type": "infusion",
            "dose_unit": "mcg/kg/min",
            "default_quantity_unit": "mg",
        }))
    }

    #[test]
    fn test_zero_weight_rejected_in_every_mode() {
        let profile = infusion_profile();
        let params = CalcParams {
            weight: 0.0,
            quantity: 4.0,
            volume: 250.0,
            dose: 0.1,
            infusion_rate: 10.0,
        };

        for mode in [CalcMode::Bolus, CalcMode::Infusion, CalcMode::CheckDose] {
            let output = calculate(mode, &profile, &params, 0);
            assert!(output.is_error(), "{mode}");
            assert_eq!(output.results[0].value, "Peso inválido");
            assert!(output.dilution_note.is_none());
        }
    }

    #[test]
    fn test_zero_volume_rejected_where_required() {
        let profile = infusion_profile();
        let params = CalcParams {
            weight: 70.0,
            quantity: 4.0,
            volume: 0.0,
            dose: 0.1,
            infusion_rate: 10.0,
        };

        for mode in [CalcMode::Infusion, CalcMode::CheckDose] {
            let output = calculate(mode, &profile, &params, 0);
            assert!(output.is_error(), "{mode}");
            assert_eq!(output.results[0].value, "Volume inválido");
        }
    }

    #[test]
    fn test_direct_bolus_ignores_volume() {
        let profile = profile(serde_json::json!({
            "group_key": "propofol",
            "name": "Propofol",
            "category": "Sedativos",
            "calc_type": "bolus",
            "bolus_type": "direct",
            "dose_unit": "mg/kg",
            "default_quantity_unit": "mg",
        }));
        let params = CalcParams {
            weight: 80.0,
            dose: 2.0,
            ..Default::default()
        };

        let output = calculate(CalcMode::Bolus, &profile, &params, 0);
        assert!(!output.is_error());
        assert_eq!(output.results[0].value, "160.00");
        assert_eq!(output.results[1].label, "Volume (mL)");
        assert_eq!(output.results[1].value, "16.00");
        assert!(output.dilution_note.is_none());
    }

    #[test]
    fn test_missing_bolus_type_takes_diluted_path() {
        let profile = profile(serde_json::json!({
            "group_key": "amiodarona",
            "name": "Amiodarona",
            "category": "Antiarrítmicos",
            "calc_type": "bolus",
            "dose_unit": "mg/kg",
            "default_quantity_unit": "mg",
        }));
        let params = CalcParams {
            weight: 70.0,
            quantity: 150.0,
            volume: 100.0,
            dose: 5.0,
            ..Default::default()
        };

        let output = calculate(CalcMode::Bolus, &profile, &params, 0);
        assert_eq!(output.results[1].label, "Concentração (mg/mL)");
        assert_eq!(output.results[2].label, "Volume Total (mL)");
    }
}
