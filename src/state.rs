use std::sync::Arc;

use crate::config::NumericField;
use crate::data::filter::Selection;
use crate::view::{Dashboard, View};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Text typed into a numeric input, kept verbatim so the field can be edited
/// freely; parsed into the selection on every change.
#[derive(Debug, Clone, Default)]
pub struct NumericInputs {
    pub year_start: String,
    pub year_end: String,
    pub min_count_total: String,
    pub max_count_total: String,
}

impl NumericInputs {
    pub fn text_mut(&mut self, field: NumericField) -> &mut String {
        match field {
            NumericField::YearStart => &mut self.year_start,
            NumericField::YearEnd => &mut self.year_end,
            NumericField::MinCountTotal => &mut self.min_count_total,
            NumericField::MaxCountTotal => &mut self.max_count_total,
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dashboard, shared and never mutated.
    pub dashboard: Arc<Dashboard>,

    /// Current widget selections.
    pub selection: Selection,

    /// Raw numeric input text.
    pub inputs: NumericInputs,

    /// Years currently offered by the year widget.
    pub year_options: Vec<i32>,

    /// Result of the last render.
    pub view: View,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        let selection = Selection::default();
        let view = dashboard.render(&selection);
        Self {
            year_options: dashboard.options.years.clone(),
            dashboard,
            selection,
            inputs: NumericInputs::default(),
            view,
            status_message: None,
        }
    }

    /// Re-render the chart from the current selection.
    pub fn refresh(&mut self) {
        self.view = self.dashboard.render(&self.selection);
    }

    /// Recompute year options after a placename change and drop selected
    /// years that are no longer offered.
    fn placenames_changed(&mut self) {
        if !self.dashboard.variant.dependent_years() {
            return;
        }
        self.year_options = self.dashboard.year_options(&self.selection);
        let offered = &self.year_options;
        self.selection.years.retain(|y| offered.binary_search(y).is_ok());
    }

    pub fn toggle_placename(&mut self, placename: &str) {
        if !self.selection.placenames.remove(placename) {
            self.selection.placenames.insert(placename.to_string());
        }
        self.placenames_changed();
        self.refresh();
    }

    pub fn toggle_year(&mut self, year: i32) {
        if !self.selection.years.remove(&year) {
            self.selection.years.insert(year);
        }
        self.refresh();
    }

    pub fn toggle_type(&mut self, kind: &str) {
        if !self.selection.types.remove(kind) {
            self.selection.types.insert(kind.to_string());
        }
        self.refresh();
    }

    /// Select every offered placename.
    pub fn select_all_placenames(&mut self) {
        self.selection.placenames = self.dashboard.options.placenames.iter().cloned().collect();
        self.placenames_changed();
        self.refresh();
    }

    pub fn select_all_years(&mut self) {
        self.selection.years = self.year_options.iter().copied().collect();
        self.refresh();
    }

    pub fn select_all_types(&mut self) {
        self.selection.types = self.dashboard.options.types.iter().cloned().collect();
        self.refresh();
    }

    /// Clear a selection; an empty selection means "no filter".
    pub fn clear_placenames(&mut self) {
        self.selection.placenames.clear();
        self.placenames_changed();
        self.refresh();
    }

    pub fn clear_years(&mut self) {
        self.selection.years.clear();
        self.refresh();
    }

    pub fn clear_types(&mut self) {
        self.selection.types.clear();
        self.refresh();
    }

    /// Parse the text of a numeric input into the selection. Empty text
    /// clears the bound; unparsable text also clears it and sets a status.
    pub fn numeric_changed(&mut self, field: NumericField) {
        let text = self.inputs.text_mut(field).trim().to_string();
        self.status_message = None;

        let value: Option<i64> = if text.is_empty() {
            None
        } else {
            match text.parse::<i64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    self.status_message = Some(format!("{}: '{text}' is not a number", field.placeholder()));
                    None
                }
            }
        };

        match field {
            NumericField::YearStart => self.selection.year_start = self.to_year(field, value),
            NumericField::YearEnd => self.selection.year_end = self.to_year(field, value),
            NumericField::MinCountTotal => self.selection.min_count_total = value,
            NumericField::MaxCountTotal => self.selection.max_count_total = value,
        }
        self.refresh();
    }

    /// Narrow a parsed bound to a year; out-of-range values clear the bound
    /// and set a status.
    fn to_year(&mut self, field: NumericField, value: Option<i64>) -> Option<i32> {
        let v = value?;
        match i32::try_from(v) {
            Ok(year) => Some(year),
            Err(_) => {
                self.status_message = Some(format!("{}: {v} is out of range", field.placeholder()));
                None
            }
        }
    }
}
