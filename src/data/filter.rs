use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::model::{Dataset, Row};

// ---------------------------------------------------------------------------
// Selection: what the user has picked in the widgets
// ---------------------------------------------------------------------------

/// Filter criteria for one render. Empty sets and `None` bounds mean
/// "no filter" for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selection {
    pub placenames: BTreeSet<String>,
    pub years: BTreeSet<i32>,
    pub types: BTreeSet<String>,
    /// Only applied together with `year_end`.
    pub year_start: Option<i32>,
    /// Only applied together with `year_start`.
    pub year_end: Option<i32>,
    pub min_count_total: Option<i64>,
    pub max_count_total: Option<i64>,
}

impl Selection {
    /// Inclusive year range, present only when both bounds are given.
    /// A lone bound is ignored rather than treated as one-sided.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        match (self.year_start, self.year_end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Whether `row` passes every active criterion.
    pub fn matches(&self, dataset: &Dataset, row: &Row) -> bool {
        if !self.placenames.is_empty() && !self.placenames.contains(&row.placename) {
            return false;
        }
        if !self.years.is_empty() && !self.years.contains(&row.year) {
            return false;
        }
        if !self.types.is_empty() && !self.types.contains(dataset.type_of(row)) {
            return false;
        }
        if let Some((start, end)) = self.year_range() {
            if row.year < start || row.year > end {
                return false;
            }
        }
        if let Some(min) = self.min_count_total {
            if !at_least(row.count_total, min) {
                return false;
            }
        }
        if let Some(max) = self.max_count_total {
            if !at_most(row.count_total, max) {
                return false;
            }
        }
        true
    }
}

fn at_least(count: u64, min: i64) -> bool {
    u64::try_from(min).map_or(true, |min| count >= min)
}

fn at_most(count: u64, max: i64) -> bool {
    u64::try_from(max).map_or(false, |max| count <= max)
}

// ---------------------------------------------------------------------------
// Filter / aggregate
// ---------------------------------------------------------------------------

/// Rows passing `selection`, ordered by placename, then year, then
/// `count_total` descending. Full ties keep their file order.
pub fn filter_rows<'a>(dataset: &'a Dataset, selection: &Selection) -> Vec<&'a Row> {
    let mut rows: Vec<&Row> = dataset
        .rows
        .iter()
        .filter(|row| selection.matches(dataset, row))
        .collect();

    // `sort_by` is stable.
    rows.sort_by(|a, b| {
        a.placename
            .cmp(&b.placename)
            .then(a.year.cmp(&b.year))
            .then(b.count_total.cmp(&a.count_total))
    });
    rows
}
