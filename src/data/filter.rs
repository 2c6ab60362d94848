use super::model::{Gender, PlotField, StudentDataset, StudentRecord};

// ---------------------------------------------------------------------------
// FilterCriteria – current control values, rebuilt per interaction
// ---------------------------------------------------------------------------

/// Everything the controls currently ask for. A fresh normalized copy is
/// produced for each recomputation and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Inclusive range on `absence_days`. An inverted range is a valid
    /// empty selection, not an error.
    pub absence_days: (i64, i64),
    /// Inclusive range on `weekly_self_study_hours`.
    pub weekly_self_study_hours: (i64, i64),
    /// `None` is the "All" wildcard.
    pub gender: Option<Gender>,
    /// Substring needle matched against the row's stringified part-time-job
    /// flag ("true"/"false"); `None` is the "All" wildcard.
    pub part_time_job: Option<String>,
    /// Case-insensitive substring needle; empty means no constraint.
    pub first_name: String,
    pub last_name: String,
    /// Axis choices travel with the criteria but never affect row selection.
    pub x_field: PlotField,
    pub y_field: PlotField,
}

impl FilterCriteria {
    /// Criteria that select every row of `dataset`, with the default axes.
    pub fn match_all(dataset: &StudentDataset) -> Self {
        FilterCriteria {
            absence_days: dataset.absence_days_bounds,
            weekly_self_study_hours: dataset.study_hours_bounds,
            gender: None,
            part_time_job: None,
            first_name: String::new(),
            last_name: String::new(),
            x_field: PlotField::MathScore,
            y_field: PlotField::WeeklySelfStudyHours,
        }
    }

    /// Lowercase the text needles once; the row predicate expects this.
    pub fn normalized(mut self) -> Self {
        self.part_time_job = self.part_time_job.map(|s| s.to_lowercase());
        self.first_name = self.first_name.to_lowercase();
        self.last_name = self.last_name.to_lowercase();
        self
    }
}

// ---------------------------------------------------------------------------
// Row predicate
// ---------------------------------------------------------------------------

/// Whether one record satisfies every active predicate, conjunctively.
///
/// Expects criteria whose text needles are already lowercased
/// (see [`FilterCriteria::normalized`]).
pub fn matches(record: &StudentRecord, criteria: &FilterCriteria) -> bool {
    let (lo, hi) = criteria.absence_days;
    if record.absence_days < lo || record.absence_days > hi {
        return false;
    }

    let (lo, hi) = criteria.weekly_self_study_hours;
    if record.weekly_self_study_hours < lo || record.weekly_self_study_hours > hi {
        return false;
    }

    if let Some(gender) = criteria.gender {
        if record.gender != gender {
            return false;
        }
    }

    if let Some(needle) = &criteria.part_time_job {
        // Loose containment against "true"/"false", not strict equality.
        let flag = if record.part_time_job { "true" } else { "false" };
        if !flag.contains(needle.as_str()) {
            return false;
        }
    }

    if !criteria.first_name.is_empty()
        && !record.first_name.to_lowercase().contains(&criteria.first_name)
    {
        return false;
    }

    if !criteria.last_name.is_empty()
        && !record.last_name.to_lowercase().contains(&criteria.last_name)
    {
        return false;
    }

    true
}

/// Indices of records passing all active filters, in source order.
pub fn filtered_indices(dataset: &StudentDataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, criteria))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    fn student(
        first_name: &str,
        gender: Gender,
        part_time_job: bool,
        absence_days: i64,
    ) -> StudentRecord {
        StudentRecord {
            first_name: first_name.to_string(),
            last_name: format!("{first_name}son"),
            gender,
            part_time_job,
            extracurricular_activities: false,
            career_aspiration: String::new(),
            absence_days,
            weekly_self_study_hours: 10,
            math_score: 50.0,
            history_score: 50.0,
            physics_score: 50.0,
            chemistry_score: 50.0,
            biology_score: 50.0,
            english_score: 50.0,
            geography_score: 50.0,
            color: color::gender_color(gender),
        }
    }

    /// Rows 0..=2: Ben (male, job, absence 1), Anna (female, no job,
    /// absence 5), Anton (male, job, absence 10).
    fn dataset() -> StudentDataset {
        StudentDataset::from_records(vec![
            student("Ben", Gender::Male, true, 1),
            student("Anna", Gender::Female, false, 5),
            student("Anton", Gender::Male, true, 10),
        ])
    }

    fn criteria(dataset: &StudentDataset) -> FilterCriteria {
        FilterCriteria::match_all(dataset)
    }

    #[test]
    fn match_all_selects_every_row_in_order() {
        let ds = dataset();
        assert_eq!(filtered_indices(&ds, &criteria(&ds)), vec![0, 1, 2]);
    }

    #[test]
    fn range_filter_is_inclusive_at_both_ends() {
        let ds = dataset();
        let mut c = criteria(&ds);
        c.absence_days = (1, 5);
        assert_eq!(filtered_indices(&ds, &c), vec![0, 1]);
        c.absence_days = (5, 10);
        assert_eq!(filtered_indices(&ds, &c), vec![1, 2]);
        c.absence_days = (5, 5);
        assert_eq!(filtered_indices(&ds, &c), vec![1]);
    }

    #[test]
    fn inverted_range_selects_nothing() {
        let ds = dataset();
        let mut c = criteria(&ds);
        c.absence_days = (5, 1);
        assert!(filtered_indices(&ds, &c).is_empty());
    }

    #[test]
    fn range_plus_gender_wildcard_scenario() {
        // Range [1, 5] with gender "All" keeps the first two rows only.
        let ds = dataset();
        let mut c = criteria(&ds);
        c.absence_days = (1, 5);
        c.gender = None;
        let selected = filtered_indices(&ds, &c);
        assert_eq!(selected, vec![0, 1]);
    }

    #[test]
    fn gender_filter_selects_exactly_the_one_female_row() {
        let ds = dataset();
        let mut c = criteria(&ds);
        c.gender = Some(Gender::Female);
        assert_eq!(filtered_indices(&ds, &c), vec![1]);
    }

    #[test]
    fn gender_wildcard_is_equivalent_to_no_predicate() {
        let ds = dataset();
        let c = criteria(&ds);
        assert_eq!(filtered_indices(&ds, &c).len(), ds.len());
    }

    #[test]
    fn first_name_substring_is_case_insensitive() {
        let ds = dataset();
        let mut c = criteria(&ds);
        c.first_name = "AN".to_string();
        let c = c.normalized();
        assert_eq!(filtered_indices(&ds, &c), vec![1, 2]);
    }

    #[test]
    fn empty_needle_is_equivalent_to_no_predicate() {
        let ds = dataset();
        let mut c = criteria(&ds);
        c.first_name = String::new();
        c.last_name = String::new();
        assert_eq!(filtered_indices(&ds, &c.normalized()).len(), ds.len());
    }

    #[test]
    fn part_time_job_matches_by_containment() {
        let ds = dataset();
        let mut c = criteria(&ds);
        c.part_time_job = Some("True".to_string());
        assert_eq!(filtered_indices(&ds, &c.clone().normalized()), vec![0, 2]);
        c.part_time_job = Some("False".to_string());
        assert_eq!(filtered_indices(&ds, &c.clone().normalized()), vec![1]);
        // A partial needle still matches: containment, not equality.
        c.part_time_job = Some("ru".to_string());
        assert_eq!(filtered_indices(&ds, &c.normalized()), vec![0, 2]);
    }

    #[test]
    fn axis_choice_does_not_change_the_selected_rows() {
        let ds = dataset();
        let mut c = criteria(&ds);
        c.absence_days = (1, 5);
        let with_math = filtered_indices(&ds, &c);
        c.x_field = PlotField::PhysicsScore;
        c.y_field = PlotField::AbsenceDays;
        assert_eq!(filtered_indices(&ds, &c), with_math);
    }

    #[test]
    fn selected_rows_satisfy_all_predicates_and_complement_fails_one() {
        let ds = dataset();
        let mut c = criteria(&ds);
        c.absence_days = (1, 5);
        c.gender = Some(Gender::Male);
        c.first_name = "b".to_string();
        let c = c.normalized();

        let selected = filtered_indices(&ds, &c);
        for (i, record) in ds.records.iter().enumerate() {
            if selected.contains(&i) {
                assert!(matches(record, &c));
            } else {
                assert!(!matches(record, &c));
            }
        }
    }
}
