use std::sync::Arc;

use serde::Serialize;

use crate::chart::BarFigure;
use crate::color::ColorMap;
use crate::config::Variant;
use crate::data::filter::{filter_rows, Selection};
use crate::data::model::{Dataset, Row};
use crate::data::normalize::normalize_types;
use crate::data::options::{year_options, SelectionOptions};

// ---------------------------------------------------------------------------
// Dashboard – the loaded, read-only state shared by every render
// ---------------------------------------------------------------------------

/// Dataset plus everything derived from it once at startup.
#[derive(Debug)]
pub struct Dashboard {
    pub dataset: Dataset,
    pub variant: Variant,
    pub options: SelectionOptions,
    pub colors: ColorMap,
}

/// What one render produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub year_options: Vec<i32>,
    pub rows: Vec<Row>,
    pub figure: BarFigure,
}

impl Dashboard {
    /// Finish startup: normalize if the variant asks for it and derive the
    /// initial options and type colours.
    pub fn new(dataset: Dataset, variant: Variant) -> Arc<Self> {
        let dataset = if variant.normalizes_types() {
            normalize_types(dataset)
        } else {
            dataset
        };
        let options = SelectionOptions::initial(&dataset, variant);
        let colors = ColorMap::new(options.types.as_slice());
        Arc::new(Dashboard {
            dataset,
            variant,
            options,
            colors,
        })
    }

    /// Drop criteria the variant does not expose.
    pub fn effective_selection(&self, selection: &Selection) -> Selection {
        let mut effective = selection.clone();
        if !self.variant.year_range_inputs() {
            effective.year_start = None;
            effective.year_end = None;
        }
        effective
    }

    /// Year options for a placename selection.
    pub fn year_options(&self, selection: &Selection) -> Vec<i32> {
        year_options(&self.dataset, self.variant, &selection.placenames)
    }

    /// Selection → options and chart. Pure; the dataset is only read.
    pub fn render(&self, selection: &Selection) -> View {
        let selection = self.effective_selection(selection);
        let rows = filter_rows(&self.dataset, &selection);
        log::debug!("render {selection:?}: {} of {} rows", rows.len(), self.dataset.len());

        let figure = BarFigure::build(&rows, self.dataset.type_column, &self.colors);
        View {
            year_options: self.year_options(&selection),
            rows: rows.into_iter().cloned().collect(),
            figure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::testing::{row, sample};
    use crate::data::model::TypeColumn;

    #[test]
    fn render_perth_offers_its_years() {
        let dash = Dashboard::new(sample(), Variant::Full);
        let sel = Selection {
            placenames: ["Perth".to_string()].into_iter().collect(),
            ..Default::default()
        };
        let view = dash.render(&sel);
        assert_eq!(view.year_options, [2000]);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.figure.categories, ["Perth"]);
    }

    #[test]
    fn normalized_variant_ignores_year_range_and_renames_types() {
        let ds = Dataset::new(
            vec![row("Bondi", 1990, "suburb", 1, 1), row("Perth", 2020, "city", 2, 2)],
            TypeColumn::Type,
        );
        let dash = Dashboard::new(ds, Variant::Normalized);
        assert_eq!(dash.dataset.rows[0].kind, "others");
        assert_eq!(dash.options.years, [1990, 2020]);

        let sel = Selection {
            year_start: Some(2000),
            year_end: Some(2030),
            ..Default::default()
        };
        let view = dash.render(&sel);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.year_options, [1990, 2020]);
    }

    #[test]
    fn full_variant_applies_year_range() {
        let dash = Dashboard::new(sample(), Variant::Full);
        let sel = Selection {
            year_start: Some(2001),
            year_end: Some(2001),
            ..Default::default()
        };
        let view = dash.render(&sel);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].year, 2001);
        assert!(view.year_options.is_empty());
    }

    #[test]
    fn empty_result_is_an_empty_chart() {
        let dash = Dashboard::new(sample(), Variant::Full);
        let sel = Selection {
            min_count_total: Some(10_000),
            ..Default::default()
        };
        let view = dash.render(&sel);
        assert!(view.rows.is_empty());
        assert!(view.figure.is_empty());
    }
}
