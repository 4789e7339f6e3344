use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// What the user did to a checklist this frame.
enum ChecklistAction<T> {
    Toggle(T),
    All,
    Clear,
}

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // Clone what we need so we can mutate state afterwards.
    let placenames = state.dashboard.options.placenames.clone();
    let years = state.year_options.clone();
    let types = state.dashboard.options.types.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let action = checklist(ui, "Placename", &placenames, |p| {
                state.selection.placenames.contains(p)
            });
            match action {
                Some(ChecklistAction::Toggle(p)) => state.toggle_placename(&p),
                Some(ChecklistAction::All) => state.select_all_placenames(),
                Some(ChecklistAction::Clear) => state.clear_placenames(),
                None => {}
            }

            if years.is_empty() && state.dashboard.variant.dependent_years() {
                ui.weak("Year: select a placename first");
            } else {
                let action = checklist(ui, "Year", &years, |y| state.selection.years.contains(y));
                match action {
                    Some(ChecklistAction::Toggle(y)) => state.toggle_year(y),
                    Some(ChecklistAction::All) => state.select_all_years(),
                    Some(ChecklistAction::Clear) => state.clear_years(),
                    None => {}
                }
            }

            let action = checklist(ui, "Type", &types, |t| state.selection.types.contains(t));
            match action {
                Some(ChecklistAction::Toggle(t)) => state.toggle_type(&t),
                Some(ChecklistAction::All) => state.select_all_types(),
                Some(ChecklistAction::Clear) => state.clear_types(),
                None => {}
            }

            ui.separator();
            numeric_inputs(ui, state);
        });
}

/// A collapsible multi-select. Nothing ticked means no filter.
fn checklist<T: Clone + ToString>(
    ui: &mut Ui,
    title: &str,
    values: &[T],
    is_selected: impl Fn(&T) -> bool,
) -> Option<ChecklistAction<T>> {
    let n_selected = values.iter().filter(|v| is_selected(v)).count();
    let header_text = if n_selected == 0 {
        format!("{title}  (all {})", values.len())
    } else {
        format!("{title}  ({n_selected}/{})", values.len())
    };

    let mut action = None;
    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(title)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    action = Some(ChecklistAction::All);
                }
                if ui.small_button("None").clicked() {
                    action = Some(ChecklistAction::Clear);
                }
            });

            ScrollArea::vertical()
                .id_salt(format!("{title}_values"))
                .max_height(260.0)
                .show(ui, |ui: &mut Ui| {
                    for val in values {
                        let mut checked = is_selected(val);
                        if ui.checkbox(&mut checked, val.to_string()).changed() {
                            action = Some(ChecklistAction::Toggle(val.clone()));
                        }
                    }
                });
        });
    action
}

fn numeric_inputs(ui: &mut Ui, state: &mut AppState) {
    for &field in state.dashboard.variant.numeric_fields() {
        let response = ui.add(
            egui::TextEdit::singleline(state.inputs.text_mut(field))
                .hint_text(field.placeholder())
                .desired_width(160.0),
        );
        if response.changed() {
            state.numeric_changed(field);
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the summary bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong(state.dashboard.variant.title());
        ui.separator();

        ui.label(format!(
            "{} rows loaded, {} shown",
            state.dashboard.dataset.len(),
            state.view.rows.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
