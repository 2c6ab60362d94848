use eframe::egui::{self, ScrollArea, Slider, Ui};

use crate::data::model::{Gender, PlotField};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the filter controls.  Any change triggers one synchronous
/// recomputation before the frame ends.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let mut changed = false;
    let (absence_min, absence_max) = state.dataset.absence_days_bounds;
    let (study_min, study_max) = state.dataset.study_hours_bounds;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Range sliders ----
            ui.strong("Absence days");
            changed |= ui
                .add(Slider::new(&mut state.criteria.absence_days.0, absence_min..=absence_max).text("from"))
                .changed();
            changed |= ui
                .add(Slider::new(&mut state.criteria.absence_days.1, absence_min..=absence_max).text("to"))
                .changed();
            ui.separator();

            ui.strong("Weekly self study hours");
            changed |= ui
                .add(
                    Slider::new(
                        &mut state.criteria.weekly_self_study_hours.0,
                        study_min..=study_max,
                    )
                    .text("from"),
                )
                .changed();
            changed |= ui
                .add(
                    Slider::new(
                        &mut state.criteria.weekly_self_study_hours.1,
                        study_min..=study_max,
                    )
                    .text("to"),
                )
                .changed();
            ui.separator();

            // ---- Categorical selects (with "All" wildcard) ----
            ui.strong("Gender");
            let selected = match state.criteria.gender {
                None => "All",
                Some(gender) => gender.as_str(),
            };
            egui::ComboBox::from_id_salt("gender_filter")
                .selected_text(selected)
                .show_ui(ui, |ui: &mut Ui| {
                    changed |= ui
                        .selectable_value(&mut state.criteria.gender, None, "All")
                        .changed();
                    for &gender in Gender::ALL {
                        changed |= ui
                            .selectable_value(&mut state.criteria.gender, Some(gender), gender.as_str())
                            .changed();
                    }
                });
            ui.separator();

            ui.strong("Part-time job");
            let selected = state
                .criteria
                .part_time_job
                .clone()
                .unwrap_or_else(|| "All".to_string());
            egui::ComboBox::from_id_salt("part_time_job_filter")
                .selected_text(selected)
                .show_ui(ui, |ui: &mut Ui| {
                    changed |= ui
                        .selectable_value(&mut state.criteria.part_time_job, None, "All")
                        .changed();
                    for option in ["True", "False"] {
                        changed |= ui
                            .selectable_value(
                                &mut state.criteria.part_time_job,
                                Some(option.to_string()),
                                option,
                            )
                            .changed();
                    }
                });
            ui.separator();

            // ---- Substring filters ----
            ui.strong("First name contains");
            changed |= ui.text_edit_singleline(&mut state.criteria.first_name).changed();
            ui.strong("Last name contains");
            changed |= ui.text_edit_singleline(&mut state.criteria.last_name).changed();
            ui.separator();

            // ---- Axis selection ----
            ui.strong("X axis");
            changed |= axis_combo(ui, "x_axis", &mut state.criteria.x_field, PlotField::X_AXIS);
            ui.strong("Y axis");
            changed |= axis_combo(ui, "y_axis", &mut state.criteria.y_field, PlotField::Y_AXIS);
        });

    if changed {
        state.refilter();
    }
}

fn axis_combo(ui: &mut Ui, id: &str, current: &mut PlotField, options: &[PlotField]) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.label())
        .show_ui(ui, |ui: &mut Ui| {
            for &field in options {
                changed |= ui.selectable_value(current, field, field.label()).changed();
            }
        });
    changed
}

// ---------------------------------------------------------------------------
// Static text panels
// ---------------------------------------------------------------------------

/// Top panel: the dataset description, rendered verbatim.
pub fn description_panel(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .id_salt("description_scroll")
        .max_height(110.0)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            ui.label(state.description.as_str());
        });
}

/// Bottom panel: the conclusion fragment, rendered verbatim, with a status
/// line reporting loaded vs. selected rows.
pub fn conclusion_panel(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .id_salt("conclusion_scroll")
        .max_height(110.0)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            ui.label(state.conclusion.as_str());
        });
    ui.separator();
    ui.label(format!(
        "{} students loaded, {} selected",
        state.dataset.len(),
        state.visible_indices.len()
    ));
}
