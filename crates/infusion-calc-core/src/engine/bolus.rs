//! Bolus dose computation.
//!
//! Two paths: direct boluses are computed straight from the per-kg dose,
//! diluted boluses from a user-entered quantity/volume preparation. A few
//! drug families add extra rows or a preparation instruction on top of the
//! base rows; each family is one variant of a closed enum so that adding a
//! drug means adding a variant, not growing a conditional chain.

use crate::models::{CalcParams, CalcOutput, DrugProfile, ResultEntry};

use super::range::check_dose_range;

/// Midazolam single-ampoule reference: 5 mg in 5 mL.
const MIDAZOLAM_AMPOULE_MG: f64 = 5.0;
const MIDAZOLAM_AMPOULE_ML: f64 = 5.0;

/// A stock-to-target step dilution.
///
/// The total dose is rounded up to the next multiple of `step` so the
/// prepared syringe holds a round amount, then the pure-drug volume,
/// added-diluent volume, and the volume to administer at the original
/// (unrounded) dose are derived.
#[derive(Debug, Clone, Copy)]
struct StepDilution {
    /// Stock concentration, quantity-unit per mL
    stock: f64,
    /// Target concentration after dilution
    target: f64,
    /// Rounding step for the prepared amount
    step: f64,
}

impl StepDilution {
    fn note(&self, total_dose: f64) -> String {
        let multiple = (total_dose / self.step).ceil() * self.step;
        let volume_pure = multiple / self.stock;
        let volume_final = multiple / self.target;
        let volume_diluent = volume_final - volume_pure;
        let volume_apply = total_dose / self.target;

        format!(
            "Dilua {volume_pure:.1}mL com {volume_diluent:.1}mL de ABD e aplique {volume_apply:.1}mL da solução"
        )
    }
}

/// Drug families with direct-bolus specific output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirectBolusFamily {
    Fentanil,
    Ketamina,
    Midazolam,
    Propofol,
    Rocuronio,
    Heparina,
}

impl DirectBolusFamily {
    fn from_group_key(group_key: &str) -> Option<Self> {
        match group_key {
            "fentanil" => Some(Self::Fentanil),
            "ketamina" => Some(Self::Ketamina),
            "midazolam" => Some(Self::Midazolam),
            "propofol" => Some(Self::Propofol),
            "rocuronio" => Some(Self::Rocuronio),
            "heparina" => Some(Self::Heparina),
            _ => None,
        }
    }

    /// Extra rows and preparation note for this family.
    fn extras(
        &self,
        total_dose: f64,
        weight: f64,
        profile: &DrugProfile,
        presentation_index: usize,
    ) -> (Vec<ResultEntry>, Option<String>) {
        match self {
            Self::Fentanil => {
                let dilution = StepDilution { stock: 50.0, target: 10.0, step: 50.0 };
                (Vec::new(), Some(dilution.note(total_dose)))
            }
            Self::Ketamina => {
                let dilution = StepDilution { stock: 50.0, target: 5.0, step: 50.0 };
                (Vec::new(), Some(dilution.note(total_dose)))
            }
            Self::Midazolam => midazolam_extras(total_dose, profile, presentation_index),
            Self::Propofol => {
                // 10 mg/mL stock, given undiluted.
                let volume_apply = total_dose / 10.0;
                let row = ResultEntry::new("Volume (mL)", format!("{volume_apply:.2}"));
                (vec![row], None)
            }
            Self::Rocuronio => {
                // Fixed reference doses, independent of the entered dose.
                let induction = 0.6 * weight;
                let rapid_sequence = 1.2 * weight;
                let rows = vec![
                    ResultEntry::new("Dose de Indução (0.6 mg/kg)", format!("{induction:.1} mg")),
                    ResultEntry::new("Dose de SRI (1.2 mg/kg)", format!("{rapid_sequence:.1} mg")),
                ];
                let dilution = StepDilution { stock: 10.0, target: 5.0, step: 50.0 };
                (rows, Some(dilution.note(total_dose)))
            }
            Self::Heparina => {
                // 5000 UI/mL stock.
                let volume_apply = total_dose / 5000.0;
                let row = ResultEntry::new("Volume (mL)", format!("{volume_apply:.2}"));
                (vec![row], None)
            }
        }
    }
}

/// Midazolam output depends on the selected presentation.
///
/// The 5mg/5mL ampoule (1 mg/mL) is applied undiluted with ampoule-count
/// guidance; any other presentation is treated as the 5 mg/mL stock that
/// must be diluted down to 1 mg/mL.
fn midazolam_extras(
    total_dose: f64,
    profile: &DrugProfile,
    presentation_index: usize,
) -> (Vec<ResultEntry>, Option<String>) {
    let concentration = profile
        .presentation_option(presentation_index)
        .and_then(|option| option.concentration);

    if concentration == Some(1.0) {
        let volume_apply = total_dose;
        let row = ResultEntry::new("Volume (mL)", format!("{volume_apply:.2}"));

        let note = if total_dose <= MIDAZOLAM_AMPOULE_MG {
            format!(
                "Aspire {MIDAZOLAM_AMPOULE_ML:.1}mL da ampola e aplique {volume_apply:.1}mL no paciente"
            )
        } else {
            let ampoules = (total_dose / MIDAZOLAM_AMPOULE_MG).ceil() as u64;
            format!(
                "Use {ampoules} ampola(s). Aspire todo o conteúdo e aplique {volume_apply:.1}mL no paciente"
            )
        };
        (vec![row], Some(note))
    } else {
        let dilution = StepDilution { stock: 5.0, target: 1.0, step: 5.0 };
        (Vec::new(), Some(dilution.note(total_dose)))
    }
}

/// Drug families with extra rows on the diluted-bolus path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DilutedBolusFamily {
    Dexmedetomidina,
    AcidoTranexamico,
    Milrinona,
    SulfatoMagnesio,
}

impl DilutedBolusFamily {
    fn from_group_key(group_key: &str) -> Option<Self> {
        match group_key {
            "dexmedetomidina" => Some(Self::Dexmedetomidina),
            "acido_tranexamico" => Some(Self::AcidoTranexamico),
            "milrinona" => Some(Self::Milrinona),
            "sulfato_magnesio" => Some(Self::SulfatoMagnesio),
            _ => None,
        }
    }

    /// Timed-administration pump rates derived from the total volume.
    fn extras(&self, total_volume: f64, concentration: f64) -> Vec<ResultEntry> {
        match self {
            Self::Dexmedetomidina => vec![
                ResultEntry::new("Bolus em 10 min (mL/h)", format!("{:.2}", total_volume * 6.0)),
                ResultEntry::new("Bolus em 20 min (mL/h)", format!("{:.2}", total_volume * 3.0)),
            ],
            Self::AcidoTranexamico => {
                // The 20-minute rate is capped at 100 mg/min.
                let rate_20min = total_volume * 3.0;
                let max_rate = if concentration > 0.0 {
                    (100.0 / concentration) * 60.0
                } else {
                    0.0
                };
                let final_rate = rate_20min.min(max_rate);

                let mut rows = vec![ResultEntry::new(
                    "Velocidade em 20 min (mL/h)",
                    format!("{final_rate:.2}"),
                )];
                if final_rate < rate_20min && final_rate > 0.0 {
                    let actual_minutes = total_volume / (final_rate / 60.0);
                    rows.push(ResultEntry::new("Tempo real (min)", format!("{actual_minutes:.1}")));
                }
                rows
            }
            Self::Milrinona => vec![ResultEntry::new(
                "Bolus em 10 min (mL/h)",
                format!("{:.2}", total_volume * 6.0),
            )],
            Self::SulfatoMagnesio => vec![ResultEntry::new(
                "Velocidade em 15 min (mL/h)",
                format!("{:.2}", total_volume * 4.0),
            )],
        }
    }
}

/// Append a dose warning to an existing note, or promote it to the note.
fn attach_warning(note: Option<String>, warning: Option<String>) -> Option<String> {
    match (note, warning) {
        (None, warning) => warning,
        (Some(note), None) => Some(note),
        (Some(note), Some(warning)) => Some(format!("{note}\n\n⚠️ {warning}")),
    }
}

/// Direct bolus: dose comes straight from weight.
pub(super) fn direct(
    profile: &DrugProfile,
    params: &CalcParams,
    presentation_index: usize,
) -> CalcOutput {
    let total_dose = params.dose * params.weight;
    let warning = check_dose_range(profile, params.dose);

    let marker = if warning.is_some() { " ⚠️" } else { "" };
    let mut results = vec![ResultEntry::new(
        format!("Dose Total ({})", profile.default_quantity_unit),
        format!("{total_dose:.2}{marker}"),
    )];

    let mut note = None;
    if let Some(family) = DirectBolusFamily::from_group_key(&profile.group_key) {
        let (extra_rows, family_note) =
            family.extras(total_dose, params.weight, profile, presentation_index);
        results.extend(extra_rows);
        note = family_note;
    }

    CalcOutput {
        results,
        dilution_note: attach_warning(note, warning),
    }
}

/// Diluted bolus: dose applied through a user-entered preparation.
///
/// The caller guarantees `params.volume` is non-zero.
pub(super) fn diluted(profile: &DrugProfile, params: &CalcParams) -> CalcOutput {
    let total_dose = params.dose * params.weight;
    let warning = check_dose_range(profile, params.dose);

    let concentration = params.quantity * profile.concentration_factor() / params.volume;
    let total_volume = if concentration > 0.0 {
        total_dose / concentration
    } else {
        0.0
    };

    let marker = if warning.is_some() { " ⚠️" } else { "" };
    let mut results = vec![
        ResultEntry::new(
            format!("Dose Total ({})", profile.default_quantity_unit),
            format!("{total_dose:.2}{marker}"),
        ),
        ResultEntry::new(
            format!("Concentração ({})", profile.dose_unit.bolus_concentration_label()),
            format!("{concentration:.2}"),
        ),
        ResultEntry::new("Volume Total (mL)", format!("{total_volume:.2}")),
    ];

    if let Some(family) = DilutedBolusFamily::from_group_key(&profile.group_key) {
        results.extend(family.extras(total_volume, concentration));
    }

    CalcOutput {
        results,
        dilution_note: attach_warning(None, warning),
    }
}
