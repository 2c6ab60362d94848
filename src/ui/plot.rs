use eframe::egui::{self, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points};

use crate::color;
use crate::data::model::Gender;
use crate::state::AppState;

/// Squared pick distance for the hover tooltip, in screen pixels.
const PICK_RADIUS_SQ: f32 = 100.0;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the title, the scatter plot and the nearest-point tooltip.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let bundle = &state.bundle;

    ui.heading(&bundle.title);
    if bundle.is_empty() {
        ui.label("No students match the current filters.");
    }

    let response = Plot::new("students_scatter")
        .legend(Legend::default())
        .x_axis_label(bundle.x_label)
        .y_axis_label(bundle.y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One series per gender keeps the legend to two entries while
            // every point still carries its per-record color.
            for &gender in Gender::ALL {
                let points: PlotPoints = bundle
                    .gender
                    .iter()
                    .zip(bundle.x.iter().zip(bundle.y.iter()))
                    .filter(|(g, _)| **g == gender)
                    .map(|(_, (&x, &y))| [x, y])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(gender.as_str())
                        .color(color::gender_color(gender))
                        .radius(3.5)
                        .filled(true),
                );
            }
        });

    // Hover tooltip: first name and gender of the nearest point.
    if let Some(pointer) = response.response.hover_pos() {
        let transform = response.transform;
        let mut nearest: Option<(usize, f32)> = None;
        for i in 0..bundle.len() {
            let pos = transform.position_from_point(&PlotPoint::new(bundle.x[i], bundle.y[i]));
            let dist_sq = pos.distance_sq(pointer);
            if nearest.map_or(true, |(_, best)| dist_sq < best) {
                nearest = Some((i, dist_sq));
            }
        }

        if let Some((i, dist_sq)) = nearest {
            if dist_sq <= PICK_RADIUS_SQ {
                egui::show_tooltip_at_pointer(
                    ui.ctx(),
                    response.response.layer_id,
                    egui::Id::new("student_tooltip"),
                    |ui: &mut Ui| {
                        ui.strong(format!(
                            "{} {}",
                            bundle.first_name[i], bundle.last_name[i]
                        ));
                        ui.label(bundle.gender[i].as_str());
                        ui.weak(format!("absence days: {}", bundle.absence_days[i]));
                        ui.weak(format!(
                            "self-study hours/week: {}",
                            bundle.weekly_self_study_hours[i]
                        ));
                        ui.weak(format!("part-time job: {}", bundle.part_time_job[i]));
                        if !bundle.career_aspiration[i].is_empty() {
                            ui.weak(&bundle.career_aspiration[i]);
                        }
                    },
                );
            }
        }
    }
}
