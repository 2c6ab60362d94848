/// Data layer: core types, loading, filtering, and plot projection.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → StudentDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ StudentDataset │  Vec<StudentRecord>, slider bounds
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply FilterCriteria → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   view    │  project indices → PlotBundle (columns, labels, title)
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod view;
