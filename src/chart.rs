use std::collections::HashMap;

use eframe::egui::Color32;
use serde::Serialize;

use crate::color::{to_hex, ColorMap};
use crate::data::model::{Row, TypeColumn};

/// Tick label rotation of the placename axis, in degrees.
pub const TICK_ANGLE: i32 = -45;

/// Share of a category slot covered by its group of bars.
const GROUP_WIDTH: f64 = 0.8;

// ---------------------------------------------------------------------------
// Figure model
// ---------------------------------------------------------------------------

/// A grouped bar chart: one category per placename, one series per type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BarFigure {
    /// Placenames, by descending total bar height.
    pub categories: Vec<String>,
    /// One series per type, in order of first appearance in the rows.
    pub series: Vec<BarSeries>,
    pub bar_mode: &'static str,
    pub tick_angle: i32,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub color: String,
    #[serde(skip)]
    pub fill: Color32,
    pub segments: Vec<BarSegment>,
}

/// One row rendered as one bar segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSegment {
    pub placename: String,
    /// Position of `placename` in [`BarFigure::categories`].
    pub category: usize,
    pub year: i32,
    pub count_year: u64,
    pub count_total: u64,
    /// Height of the segments stacked below this one.
    pub base: u64,
    pub hover: String,
}

/// Tooltip lines for a row, in display order.
pub fn hover_lines(row: &Row) -> [String; 4] {
    [
        format!("Placename: {}", row.placename),
        format!("Year: {}", row.year),
        format!("Count Year: {}", row.count_year),
        format!("Total Count: {}", row.count_total),
    ]
}

impl BarFigure {
    /// Build the figure from filtered rows. Every row becomes its own segment;
    /// rows sharing a placename and type stack in input order.
    pub fn build(rows: &[&Row], type_column: TypeColumn, colors: &ColorMap) -> Self {
        let categories = category_order(rows);
        let category_index: HashMap<&str, usize> = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();

        let mut series: Vec<BarSeries> = Vec::new();
        let mut series_index: HashMap<&str, usize> = HashMap::new();
        let mut stack_top: HashMap<(usize, usize), u64> = HashMap::new();

        for row in rows {
            let kind = row.category(type_column);
            let s = *series_index.entry(kind).or_insert_with(|| {
                let fill = colors.color_for(kind);
                series.push(BarSeries {
                    name: kind.to_string(),
                    color: to_hex(fill),
                    fill,
                    segments: Vec::new(),
                });
                series.len() - 1
            });
            let category = category_index[row.placename.as_str()];
            let top = stack_top.entry((s, category)).or_insert(0);

            series[s].segments.push(BarSegment {
                placename: row.placename.clone(),
                category,
                year: row.year,
                count_year: row.count_year,
                count_total: row.count_total,
                base: *top,
                hover: hover_lines(row).join("\n"),
            });
            *top += row.count_year;
        }

        BarFigure {
            categories,
            series,
            bar_mode: "group",
            tick_angle: TICK_ANGLE,
            x_label: "placename",
            y_label: "count_year",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Centre offset and width of `series` bars relative to a category slot.
    pub fn slot(&self, series: usize) -> (f64, f64) {
        let n = self.series.len().max(1) as f64;
        let width = GROUP_WIDTH / n;
        let offset = (series as f64 - (n - 1.0) / 2.0) * width;
        (offset, width)
    }
}

/// Placenames ordered by summed `count_year`, largest first; equal totals
/// keep first-appearance order.
fn category_order(rows: &[&Row]) -> Vec<String> {
    let mut totals: Vec<(&str, u64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for row in rows {
        let i = *index.entry(row.placename.as_str()).or_insert_with(|| {
            totals.push((row.placename.as_str(), 0));
            totals.len() - 1
        });
        totals[i].1 += row.count_year;
    }
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals.into_iter().map(|(p, _)| p.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filter_rows, Selection};
    use crate::data::model::testing::{row, sample};
    use crate::data::model::Dataset;

    fn figure(ds: &Dataset) -> BarFigure {
        let rows = filter_rows(ds, &Selection::default());
        BarFigure::build(&rows, ds.type_column, &ColorMap::new(&["city", "state"][..]))
    }

    #[test]
    fn categories_ordered_by_total_height() {
        let fig = figure(&sample());
        // Sydney 50 + 30 outranks Perth 20, although Perth sorts first.
        assert_eq!(fig.categories, ["Sydney", "Perth"]);
        assert_eq!(fig.tick_angle, -45);
        assert_eq!(fig.bar_mode, "group");
    }

    #[test]
    fn rows_of_a_series_stack_per_placename() {
        let fig = figure(&sample());
        assert_eq!(fig.series.len(), 1);
        let segs = &fig.series[0].segments;
        assert_eq!(segs.len(), 3);
        // Perth first in row order, then Sydney 2000 and 2001 stacked.
        assert_eq!((segs[0].placename.as_str(), segs[0].base), ("Perth", 0));
        assert_eq!((segs[1].year, segs[1].base, segs[1].category), (2000, 0, 0));
        assert_eq!((segs[2].year, segs[2].base, segs[2].category), (2001, 50, 0));
    }

    #[test]
    fn hover_has_four_literal_lines() {
        let fig = figure(&sample());
        let seg = &fig.series[0].segments[2];
        let lines: Vec<&str> = seg.hover.lines().collect();
        assert_eq!(
            lines,
            ["Placename: Sydney", "Year: 2001", "Count Year: 30", "Total Count: 500"]
        );
    }

    #[test]
    fn one_series_per_type_in_appearance_order() {
        let ds = Dataset::new(
            vec![
                row("A", 2000, "state", 5, 5),
                row("A", 2000, "city", 3, 3),
                row("B", 2000, "city", 1, 1),
            ],
            TypeColumn::Type,
        );
        let fig = figure(&ds);
        let names: Vec<&str> = fig.series.iter().map(|s| s.name.as_str()).collect();
        // Sorted rows: A/state(5) then A/city(3) by count_total desc, then B.
        assert_eq!(names, ["state", "city"]);
        assert_ne!(fig.series[0].fill, fig.series[1].fill);
        assert!(fig.series[0].color.starts_with('#'));

        let (o0, w0) = fig.slot(0);
        let (o1, w1) = fig.slot(1);
        assert_eq!(w0, w1);
        assert!((o0 + o1).abs() < 1e-9);
        assert!(o0 < o1);
    }

    #[test]
    fn empty_rows_render_empty_figure() {
        let fig = BarFigure::build(&[], TypeColumn::Type, &ColorMap::default());
        assert!(fig.is_empty());
        assert!(fig.categories.is_empty());
        assert_eq!(fig.slot(0), (0.0, 0.8));
    }
}
