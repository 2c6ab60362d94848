use crate::data::filter::{filtered_indices, FilterCriteria};
use crate::data::model::StudentDataset;
use crate::data::view::{project, PlotBundle};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, read-only for the lifetime of the process.
    pub dataset: StudentDataset,

    /// Current control values.  The text needles hold whatever the user
    /// typed; matching normalizes a transient copy per recomputation.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Plot-bound columns, replaced wholesale by [`AppState::refilter`].
    pub bundle: PlotBundle,

    /// Static text fragments shown above and below the plot.
    pub description: String,
    pub conclusion: String,
}

impl AppState {
    /// Build the initial state: everything selected, default axes.
    pub fn new(dataset: StudentDataset, description: String, conclusion: String) -> Self {
        let criteria = FilterCriteria::match_all(&dataset);
        let mut state = AppState {
            dataset,
            criteria,
            visible_indices: Vec::new(),
            bundle: PlotBundle::default(),
            description,
            conclusion,
        };
        state.refilter();
        state
    }

    /// Recompute the filtered view and plot bundle after a control change.
    /// Synchronous: the new bundle is in place before the frame ends.
    pub fn refilter(&mut self) {
        let criteria = self.criteria.clone().normalized();
        self.visible_indices = filtered_indices(&self.dataset, &criteria);
        self.bundle = project(&self.dataset, &self.visible_indices, &criteria);
    }
}
