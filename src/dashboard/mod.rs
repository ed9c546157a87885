//! View Renderer
//!
//! Turns the static dataset plus the current filter into everything the page
//! shows:
//!
//! - **filter**: Selector domain and validation
//! - **metrics**: Headline aggregates and display cards
//! - **projections**: Chart-shaped sequences (bar, pie, scatter)
//! - **charts**: Plotly figure JSON built from the projections
//! - **export**: CSV download of the department table
//! - **render**: The `render(state) -> View` pipeline
//! - **error**: Error types
//!
//! # Pipeline
//!
//! ```text
//! load_data() → validate filter → aggregate → project → View
//! ```
//!
//! # Example
//!
//! ```rust
//! use onu_haiti::dashboard::{render, RenderOptions, RenderState};
//! use onu_haiti::data::Dataset;
//!
//! let dataset = Dataset::load();
//! let state = RenderState::new(Some("Ouest".to_string()));
//! let view = render(&dataset, &state, &RenderOptions::default());
//!
//! assert_eq!(view.metrics.total_projects, 247);
//! assert!(view.selection.is_some());
//! ```

pub mod charts;
pub mod error;
pub mod export;
pub mod filter;
pub mod metrics;
pub mod projections;
pub mod render;

pub use charts::{figures, Figure};
pub use error::{DashboardError, DashboardResult};
pub use export::{
    departments_from_csv, departments_to_csv, export_departments, CsvExport, ExportLink,
    EXPORT_FILE_NAME, EXPORT_MIME,
};
pub use filter::{DepartmentFilter, ALL};
pub use metrics::{aggregate, KeyMetrics, MetricCard};
pub use projections::{BarPoint, PieSlice, Projections, ScatterPoint};
pub use render::{render, RenderOptions, RenderState, Selection, TableView, View};
