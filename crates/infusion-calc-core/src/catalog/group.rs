//! Grouping of raw reference records by drug identity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{CalcKind, CalcMode, DrugProfile};

/// The bolus and infusion variants of one drug, merged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupedDrug {
    /// Canonical drug identity
    pub group_key: String,
    /// Display name (from the first record seen for this group)
    pub name: String,
    /// Brand name, if any
    pub brand_name: Option<String>,
    /// Display category
    pub category: String,
    /// Bolus variant, if the drug has one
    pub bolus: Option<DrugProfile>,
    /// Infusion variant, if the drug has one
    pub infusion: Option<DrugProfile>,
    /// Notes concatenated across both variants
    pub notes: String,
}

impl GroupedDrug {
    /// The profile that serves a given calculation mode.
    ///
    /// Check-dose inverts an infusion, so it reads the infusion variant.
    pub fn profile_for(&self, mode: CalcMode) -> Option<&DrugProfile> {
        match mode {
            CalcMode::Bolus => self.bolus.as_ref(),
            CalcMode::Infusion | CalcMode::CheckDose => self.infusion.as_ref(),
        }
    }
}

/// Fold the raw reference table into one record per drug.
///
/// The first record seen for a group supplies its display metadata; each
/// record's notes are appended with a blank-line separator.
pub fn group_by_base_name(raw: &[DrugProfile]) -> BTreeMap<String, GroupedDrug> {
    let mut grouped: BTreeMap<String, GroupedDrug> = BTreeMap::new();

    for drug in raw {
        let entry = grouped
            .entry(drug.group_key.clone())
            .or_insert_with(|| GroupedDrug {
                group_key: drug.group_key.clone(),
                name: drug.name.clone(),
                brand_name: drug.brand_name.clone(),
                category: drug.category.clone(),
                bolus: None,
                infusion: None,
                notes: String::new(),
            });

        match drug.calc_type {
            CalcKind::Bolus => entry.bolus = Some(drug.clone()),
            CalcKind::Infusion => entry.infusion = Some(drug.clone()),
        }

        if let Some(notes) = drug.notes.as_deref() {
            if !notes.is_empty() {
                if !entry.notes.is_empty() {
                    entry.notes.push_str("\n\n");
                }
                entry.notes.push_str(notes);
            }
        }
    }

    grouped
}
