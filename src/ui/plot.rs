use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, GridInput, GridMark, Legend, Plot};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the grouped bar chart in the central panel.
pub fn bar_chart(ui: &mut Ui, state: &AppState) {
    let figure = &state.view.figure;
    if figure.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No rows match the current filters");
        });
        return;
    }

    let n_categories = figure.categories.len();
    let categories = figure.categories.clone();
    let x_formatter = move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
        let i = mark.value.round();
        if (mark.value - i).abs() > 1e-6 || i < 0.0 {
            return String::new();
        }
        categories.get(i as usize).cloned().unwrap_or_default()
    };

    Plot::new("placename_bars")
        .legend(Legend::default())
        .x_axis_label(figure.x_label)
        .y_axis_label(figure.y_label)
        .x_axis_formatter(x_formatter)
        .x_grid_spacer(move |input: GridInput| category_marks(input.bounds, n_categories))
        .include_y(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (s, series) in figure.series.iter().enumerate() {
                let (offset, width) = figure.slot(s);
                let bars: Vec<Bar> = series
                    .segments
                    .iter()
                    .map(|seg| {
                        // The tooltip shows the bar name.
                        Bar::new(seg.category as f64 + offset, seg.count_year as f64)
                            .base_offset(seg.base as f64)
                            .width(width)
                            .name(&seg.hover)
                            .fill(series.fill)
                    })
                    .collect();

                let chart = BarChart::new(bars)
                    .name(&series.name)
                    .color(series.fill)
                    .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| bar.name.clone()));

                plot_ui.bar_chart(chart);
            }
        });
}

/// One unit-step mark per category inside `bounds`, so every placename gets
/// a tick whatever the zoom.
fn category_marks(bounds: (f64, f64), n_categories: usize) -> Vec<GridMark> {
    if n_categories == 0 {
        return Vec::new();
    }
    let last = (n_categories - 1) as f64;
    let lo = bounds.0.ceil().max(0.0);
    let hi = bounds.1.floor().min(last);
    if lo > hi {
        return Vec::new();
    }
    (lo as usize..=hi as usize)
        .map(|i| GridMark {
            value: i as f64,
            step_size: 1.0,
        })
        .collect()
}
