use std::fmt;
use std::str::FromStr;

use eframe::egui::Color32;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Gender – the categorical field driving display color
// ---------------------------------------------------------------------------

/// Gender of a student, as recorded in the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All genders, in the order the filter dropdown lists them.
    pub const ALL: &'static [Gender] = &[Gender::Male, Gender::Female];

    /// The lowercase label used in the source data and the UI.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

#[derive(Debug, Error)]
#[error("unrecognised gender '{0}', expected 'male' or 'female'")]
pub struct GenderParseError(pub String);

impl FromStr for Gender {
    type Err = GenderParseError;

    /// Case-insensitive: the source data carries "male"/"female" but exports
    /// of the same table have been seen with capitalised variants.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(GenderParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StudentRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single student (one row of the source table).
#[derive(Debug, Clone)]
pub struct StudentRecord {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub part_time_job: bool,
    pub extracurricular_activities: bool,
    pub career_aspiration: String,
    pub absence_days: i64,
    pub weekly_self_study_hours: i64,
    pub math_score: f64,
    pub history_score: f64,
    pub physics_score: f64,
    pub chemistry_score: f64,
    pub biology_score: f64,
    pub english_score: f64,
    pub geography_score: f64,
    /// Display color, derived from `gender` once at load time.
    pub color: Color32,
}

// ---------------------------------------------------------------------------
// PlotField – the numeric fields that can be placed on an axis
// ---------------------------------------------------------------------------

/// A numeric field selectable for one of the plot axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotField {
    AbsenceDays,
    ExtracurricularActivities,
    WeeklySelfStudyHours,
    MathScore,
    HistoryScore,
    PhysicsScore,
    ChemistryScore,
    BiologyScore,
    EnglishScore,
    GeographyScore,
}

impl PlotField {
    /// X-axis choices, ordered by display name.
    pub const X_AXIS: &'static [PlotField] = &[
        PlotField::BiologyScore,
        PlotField::ChemistryScore,
        PlotField::EnglishScore,
        PlotField::GeographyScore,
        PlotField::HistoryScore,
        PlotField::MathScore,
        PlotField::PhysicsScore,
    ];

    /// Y-axis choices, ordered by display name.
    pub const Y_AXIS: &'static [PlotField] = &[
        PlotField::AbsenceDays,
        PlotField::ExtracurricularActivities,
        PlotField::WeeklySelfStudyHours,
    ];

    /// Human-readable axis label.
    pub fn label(self) -> &'static str {
        match self {
            PlotField::AbsenceDays => "Absence Days",
            PlotField::ExtracurricularActivities => "Extracurricular Activities",
            PlotField::WeeklySelfStudyHours => "Weekly Self Study Hours",
            PlotField::MathScore => "Math Score",
            PlotField::HistoryScore => "History Score",
            PlotField::PhysicsScore => "Physics Score",
            PlotField::ChemistryScore => "Chemistry Score",
            PlotField::BiologyScore => "Biology Score",
            PlotField::EnglishScore => "English Score",
            PlotField::GeographyScore => "Geography Score",
        }
    }

    /// Numeric value of this field for one record (booleans plot as 0/1).
    pub fn value(self, record: &StudentRecord) -> f64 {
        match self {
            PlotField::AbsenceDays => record.absence_days as f64,
            PlotField::ExtracurricularActivities => {
                if record.extracurricular_activities {
                    1.0
                } else {
                    0.0
                }
            }
            PlotField::WeeklySelfStudyHours => record.weekly_self_study_hours as f64,
            PlotField::MathScore => record.math_score,
            PlotField::HistoryScore => record.history_score,
            PlotField::PhysicsScore => record.physics_score,
            PlotField::ChemistryScore => record.chemistry_score,
            PlotField::BiologyScore => record.biology_score,
            PlotField::EnglishScore => record.english_score,
            PlotField::GeographyScore => record.geography_score,
        }
    }
}

// ---------------------------------------------------------------------------
// StudentDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset, immutable after construction.
#[derive(Debug, Clone)]
pub struct StudentDataset {
    /// All students (rows), in source order.
    pub records: Vec<StudentRecord>,
    /// Inclusive bounds of `absence_days`, seeding the range sliders.
    pub absence_days_bounds: (i64, i64),
    /// Inclusive bounds of `weekly_self_study_hours`.
    pub study_hours_bounds: (i64, i64),
}

impl StudentDataset {
    /// Build the dataset and precompute the slider bounds.
    pub fn from_records(records: Vec<StudentRecord>) -> Self {
        let absence_days_bounds = bounds(records.iter().map(|r| r.absence_days));
        let study_hours_bounds = bounds(records.iter().map(|r| r.weekly_self_study_hours));
        StudentDataset {
            records,
            absence_days_bounds,
            study_hours_bounds,
        }
    }

    /// Number of students.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Inclusive (min, max) of a column; (0, 0) for an empty dataset.
fn bounds<I: Iterator<Item = i64>>(values: I) -> (i64, i64) {
    values
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0, 0))
}
