//! Golden tests for the calculation engine.
//!
//! Each case pins the exact rows and note produced for a drug from the
//! built-in reference table.

use infusion_calc_core::{calculate, load_builtin_grouped, CalcMode, CalcParams, DrugProfile};

struct GoldenCase {
    id: &'static str,
    group_key: &'static str,
    mode: CalcMode,
    params: CalcParams,
    presentation_index: usize,
    expected_rows: &'static [(&'static str, &'static str)],
    expected_note: Option<&'static str>,
}

fn golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "fentanil-direct-bolus",
            group_key: "fentanil",
            mode: CalcMode::Bolus,
            params: CalcParams {
                weight: 70.0,
                dose: 2.0,
                ..Default::default()
            },
            presentation_index: 0,
            expected_rows: &[("Dose Total (mcg)", "140.00")],
            expected_note: Some(
                "Dilua 3.0mL com 12.0mL de ABD e aplique 14.0mL da solução",
            ),
        },
        GoldenCase {
            id: "ketamina-direct-bolus",
            group_key: "ketamina",
            mode: CalcMode::Bolus,
            params: CalcParams {
                weight: 70.0,
                dose: 2.0,
                ..Default::default()
            },
            presentation_index: 0,
            expected_rows: &[("Dose Total (mg)", "140.00")],
            expected_note: Some(
                "Dilua 3.0mL com 27.0mL de ABD e aplique 28.0mL da solução",
            ),
        },
        GoldenCase {
            id: "propofol-direct-bolus",
            group_key: "propofol",
            mode: CalcMode::Bolus,
            params: CalcParams {
                weight: 80.0,
                dose: 2.0,
                ..Default::default()
            },
            presentation_index: 0,
            expected_rows: &[("Dose Total (mg)", "160.00"), ("Volume (mL)", "16.00")],
            expected_note: None,
        },
        GoldenCase {
            id: "rocuronio-fixed-reference-doses",
            group_key: "rocuronio",
            mode: CalcMode::Bolus,
            params: CalcParams {
                weight: 70.0,
                dose: 1.0,
                ..Default::default()
            },
            presentation_index: 0,
            expected_rows: &[
                ("Dose Total (mg)", "70.00"),
                ("Dose de Indução (0.6 mg/kg)", "42.0 mg"),
                ("Dose de SRI (1.2 mg/kg)", "84.0 mg"),
            ],
            expected_note: Some(
                "Dilua 10.0mL com 10.0mL de ABD e aplique 14.0mL da solução",
            ),
        },
        GoldenCase {
            id: "heparina-direct-bolus",
            group_key: "heparina",
            mode: CalcMode::Bolus,
            params: CalcParams {
                weight: 70.0,
                dose: 80.0,
                ..Default::default()
            },
            presentation_index: 0,
            expected_rows: &[("Dose Total (UI)", "5600.00"), ("Volume (mL)", "1.12")],
            expected_note: None,
        },
        GoldenCase {
            id: "midazolam-single-ampoule",
            group_key: "midazolam",
            mode: CalcMode::Bolus,
            params: CalcParams {
                weight: 10.0,
                dose: 0.1,
                ..Default::default()
            },
            presentation_index: 0,
            expected_rows: &[("Dose Total (mg)", "1.00"), ("Volume (mL)", "1.00")],
            expected_note: Some("Aspire 5.0mL da ampola e aplique 1.0mL no paciente"),
        },
        GoldenCase {
            id: "midazolam-multiple-ampoules",
            group_key: "midazolam",
            mode: CalcMode::Bolus,
            params: CalcParams {
                weight: 70.0,
                dose: 0.1,
                ..Default::default()
            },
            presentation_index: 0,
            expected_rows: &[("Dose Total (mg)", "7.00"), ("Volume (mL)", "7.00")],
            expected_note: Some(
                "Use 2 ampola(s). Aspire todo o conteúdo e aplique 7.0mL no paciente",
            ),
        },
        GoldenCase {
            id: "midazolam-concentrated-presentation",
            group_key: "midazolam",
            mode: CalcMode::Bolus,
            params: CalcParams {
                weight: 70.0,
                dose: 0.1,
                ..Default::default()
            },
            presentation_index: 1,
            expected_rows: &[("Dose Total (mg)", "7.00")],
            expected_note: Some(
                "Dilua 2.0mL com 8.0mL de ABD e aplique 7.0mL da solução",
            ),
        },
        GoldenCase {
            id: "dexmedetomidina-diluted-bolus",
            group_key: "dexmedetomidina",
            mode: CalcMode::Bolus,
            params: CalcParams {
                weight: 70.0,
                quantity: 200.0,
                volume: 50.0,
                dose: 1.0,
                ..Default::default()
            },
            presentation_index: 0,
            expected_rows: &[
                ("Dose Total (mcg)", "70.00"),
                ("Concentração (mcg/mL)", "4.00"),
                ("Volume Total (mL)", "17.50"),
                ("Bolus em 10 min (mL/h)", "105.00"),
                ("Bolus em 20 min (mL/h)", "52.50"),
            ],
            expected_note: None,
        },
        GoldenCase {
            id: "tranexamico-rate-capped-with-warning",
            group_key: "acido_tranexamico",
            mode: CalcMode::Bolus,
            params: CalcParams {
                weight: 100.0,
                quantity: 1000.0,
                volume: 100.0,
                dose: 25.0,
                ..Default::default()
            },
            presentation_index: 0,
            expected_rows: &[
                ("Dose Total (mg)", "2500.00 ⚠️"),
                ("Concentração (mg/mL)", "10.00"),
                ("Volume Total (mL)", "250.00"),
                ("Velocidade em 20 min (mL/h)", "600.00"),
                ("Tempo real (min)", "25.0"),
            ],
            expected_note: Some(
                "⚠️ Aviso: Dose acima do recomendado (25.000 mg/kg). Range: 10-20 mg/kg",
            ),
        },
        GoldenCase {
            id: "noradrenalina-infusion",
            group_key: "noradrenalina",
            mode: CalcMode::Infusion,
            params: CalcParams {
                weight: 70.0,
                quantity: 4.0,
                volume: 250.0,
                dose: 0.1,
                ..Default::default()
            },
            presentation_index: 0,
            expected_rows: &[
                ("Concentração (mcg/mL)", "16.00"),
                ("Velocidade (mL/h)", "26.25"),
            ],
            expected_note: None,
        },
        GoldenCase {
            id: "noradrenalina-check-dose",
            group_key: "noradrenalina",
            mode: CalcMode::CheckDose,
            params: CalcParams {
                weight: 70.0,
                quantity: 4.0,
                volume: 250.0,
                infusion_rate: 26.25,
                ..Default::default()
            },
            presentation_index: 0,
            expected_rows: &[
                ("Concentração (mcg/mL)", "16.00"),
                ("Dose Real (mcg/kg/min)", "0.100"),
            ],
            expected_note: None,
        },
        GoldenCase {
            id: "vasopressina-units-per-minute",
            group_key: "vasopressina",
            mode: CalcMode::Infusion,
            params: CalcParams {
                weight: 70.0,
                quantity: 20.0,
                volume: 100.0,
                dose: 0.03,
                ..Default::default()
            },
            presentation_index: 0,
            expected_rows: &[("Concentração (U/mL)", "0.20"), ("Velocidade (mL/h)", "9.00")],
            expected_note: None,
        },
        GoldenCase {
            id: "insulina-units-per-kg-per-hour",
            group_key: "insulina",
            mode: CalcMode::Infusion,
            params: CalcParams {
                weight: 70.0,
                quantity: 100.0,
                volume: 100.0,
                dose: 0.05,
                ..Default::default()
            },
            presentation_index: 0,
            expected_rows: &[("Concentração (U/mL)", "1.00"), ("Velocidade (mL/h)", "3.50")],
            expected_note: None,
        },
        GoldenCase {
            id: "nitroglicerina-mcg-per-minute",
            group_key: "nitroglicerina",
            mode: CalcMode::Infusion,
            params: CalcParams {
                weight: 70.0,
                quantity: 50.0,
                volume: 250.0,
                dose: 100.0,
                ..Default::default()
            },
            presentation_index: 0,
            expected_rows: &[
                ("Concentração (mcg/mL)", "200.00"),
                ("Velocidade (mL/h)", "30.00"),
            ],
            expected_note: None,
        },
        GoldenCase {
            id: "zero-quantity-yields-zero-not-nan",
            group_key: "noradrenalina",
            mode: CalcMode::Infusion,
            params: CalcParams {
                weight: 70.0,
                quantity: 0.0,
                volume: 250.0,
                dose: 0.1,
                ..Default::default()
            },
            presentation_index: 0,
            expected_rows: &[
                ("Concentração (mcg/mL)", "0.00"),
                ("Velocidade (mL/h)", "0.00"),
            ],
            expected_note: None,
        },
    ]
}

fn profile_for_case(case: &GoldenCase) -> DrugProfile {
    let grouped = load_builtin_grouped().unwrap();
    let drug = grouped
        .get(case.group_key)
        .unwrap_or_else(|| panic!("[{}] missing drug {}", case.id, case.group_key));
    drug.profile_for(case.mode)
        .unwrap_or_else(|| panic!("[{}] no {} profile", case.id, case.mode))
        .clone()
}

#[test]
fn test_golden_cases() {
    for case in golden_cases() {
        let profile = profile_for_case(&case);
        let output = calculate(case.mode, &profile, &case.params, case.presentation_index);

        assert_eq!(
            output.results.len(),
            case.expected_rows.len(),
            "[{}] row count: {:?}",
            case.id,
            output.results
        );
        for (row, (label, value)) in output.results.iter().zip(case.expected_rows) {
            assert_eq!(&row.label, label, "[{}]", case.id);
            assert_eq!(&row.value, value, "[{}] {}", case.id, label);
        }
        assert_eq!(
            output.dilution_note.as_deref(),
            case.expected_note,
            "[{}]",
            case.id
        );
    }
}

#[test]
fn test_invalid_weight_wins_over_everything() {
    let grouped = load_builtin_grouped().unwrap();

    for drug in grouped.values() {
        for (mode, profile) in [
            (CalcMode::Bolus, drug.bolus.as_ref()),
            (CalcMode::Infusion, drug.infusion.as_ref()),
            (CalcMode::CheckDose, drug.infusion.as_ref()),
        ] {
            let Some(profile) = profile else { continue };
            let params = CalcParams {
                weight: 0.0,
                quantity: 100.0,
                volume: 100.0,
                dose: 1.0,
                infusion_rate: 10.0,
            };

            let output = calculate(mode, profile, &params, 0);
            assert_eq!(output.results.len(), 1, "{} {}", drug.group_key, mode);
            assert_eq!(output.results[0].label, "Erro");
            assert_eq!(output.results[0].value, "Peso inválido");
            assert!(output.dilution_note.is_none());
        }
    }
}

#[test]
fn test_invalid_volume_for_volume_dependent_modes() {
    let grouped = load_builtin_grouped().unwrap();
    let noradrenalina = grouped["noradrenalina"].infusion.as_ref().unwrap();
    let dexmedetomidina = grouped["dexmedetomidina"].bolus.as_ref().unwrap();

    let params = CalcParams {
        weight: 70.0,
        quantity: 4.0,
        volume: 0.0,
        dose: 0.1,
        infusion_rate: 10.0,
    };

    for (mode, profile) in [
        (CalcMode::Infusion, noradrenalina),
        (CalcMode::CheckDose, noradrenalina),
        (CalcMode::Bolus, dexmedetomidina),
    ] {
        let output = calculate(mode, profile, &params, 0);
        assert_eq!(output.results.len(), 1, "{mode}");
        assert_eq!(output.results[0].value, "Volume inválido", "{mode}");
    }
}

#[test]
fn test_severe_high_warning_on_infusion_rate_row() {
    let grouped = load_builtin_grouped().unwrap();
    let profile = grouped["noradrenalina"].infusion.as_ref().unwrap();

    // 6 mcg/kg/min is above 1.5 × the 3.3 maximum.
    let params = CalcParams {
        weight: 70.0,
        quantity: 4.0,
        volume: 250.0,
        dose: 6.0,
        ..Default::default()
    };

    let output = calculate(CalcMode::Infusion, profile, &params, 0);
    assert!(output.results[1].value.ends_with(" ⚠️"), "{:?}", output.results);

    let note = output.dilution_note.unwrap();
    assert!(note.contains("MUITO ALTA"), "{note}");
    assert!(note.contains("0.01-3.3 mcg/kg/min"), "{note}");
}
