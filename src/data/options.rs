use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use super::model::Dataset;
use super::normalize::NORMALIZED_TYPE_ORDER;
use crate::config::Variant;

/// Values offered by the three multi-select widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionOptions {
    pub placenames: Vec<String>,
    pub years: Vec<i32>,
    pub types: Vec<String>,
}

impl SelectionOptions {
    /// Options shown before the user has selected anything.
    pub fn initial(dataset: &Dataset, variant: Variant) -> Self {
        SelectionOptions {
            placenames: placename_options(dataset),
            years: year_options(dataset, variant, &BTreeSet::new()),
            types: type_options(dataset, variant),
        }
    }
}

/// Distinct placenames, ascending.
pub fn placename_options(dataset: &Dataset) -> Vec<String> {
    dataset
        .rows
        .iter()
        .map(|r| r.placename.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct years of the whole dataset, ascending.
pub fn all_years(dataset: &Dataset) -> Vec<i32> {
    dataset
        .rows
        .iter()
        .map(|r| r.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct years among rows whose placename is selected, ascending.
/// Nothing selected offers nothing.
pub fn years_for_placenames(dataset: &Dataset, placenames: &BTreeSet<String>) -> Vec<i32> {
    if placenames.is_empty() {
        return Vec::new();
    }
    dataset
        .rows
        .iter()
        .filter(|r| placenames.contains(&r.placename))
        .map(|r| r.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Year options for the current placename selection under `variant`.
pub fn year_options(dataset: &Dataset, variant: Variant, placenames: &BTreeSet<String>) -> Vec<i32> {
    if variant.dependent_years() {
        years_for_placenames(dataset, placenames)
    } else {
        all_years(dataset)
    }
}

/// Type options: first-appearance order of non-empty values, or the fixed
/// vocabulary order when types are normalized.
pub fn type_options(dataset: &Dataset, variant: Variant) -> Vec<String> {
    if variant.normalizes_types() {
        return NORMALIZED_TYPE_ORDER.iter().map(|t| t.to_string()).collect();
    }
    let mut seen = HashSet::new();
    dataset
        .rows
        .iter()
        .map(|r| dataset.type_of(r))
        .filter(|t| !t.is_empty() && seen.insert(*t))
        .map(str::to_string)
        .collect()
}
