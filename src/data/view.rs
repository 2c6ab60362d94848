use eframe::egui::Color32;

use super::filter::FilterCriteria;
use super::model::{Gender, StudentDataset};

// ---------------------------------------------------------------------------
// PlotBundle – everything the plot binds to, replaced wholesale
// ---------------------------------------------------------------------------

/// Column-oriented snapshot of the filtered rows, plus the axis labels and
/// title derived from the current criteria.  The renderer reads only this;
/// each recomputation swaps in a whole new bundle, never patches one.
#[derive(Debug, Clone, Default)]
pub struct PlotBundle {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: Vec<Color32>,
    // Passthrough columns for tooltips and inspection.
    pub first_name: Vec<String>,
    pub last_name: Vec<String>,
    pub gender: Vec<Gender>,
    pub absence_days: Vec<i64>,
    pub weekly_self_study_hours: Vec<i64>,
    pub part_time_job: Vec<bool>,
    pub career_aspiration: Vec<String>,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// e.g. "42 students selected"
    pub title: String,
}

impl PlotBundle {
    /// Number of plotted rows.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Project the filtered rows into the plot-bound bundle.
pub fn project(
    dataset: &StudentDataset,
    indices: &[usize],
    criteria: &FilterCriteria,
) -> PlotBundle {
    let mut bundle = PlotBundle {
        x_label: criteria.x_field.label(),
        y_label: criteria.y_field.label(),
        title: format!("{} students selected", indices.len()),
        ..PlotBundle::default()
    };

    for &i in indices {
        let record = &dataset.records[i];
        bundle.x.push(criteria.x_field.value(record));
        bundle.y.push(criteria.y_field.value(record));
        bundle.color.push(record.color);
        bundle.first_name.push(record.first_name.clone());
        bundle.last_name.push(record.last_name.clone());
        bundle.gender.push(record.gender);
        bundle.absence_days.push(record.absence_days);
        bundle
            .weekly_self_study_hours
            .push(record.weekly_self_study_hours);
        bundle.part_time_job.push(record.part_time_job);
        bundle.career_aspiration.push(record.career_aspiration.clone());
    }

    bundle
}
