//! # ONU Haïti Data
//!
//! Interactive dashboard of UN demonstration statistics for Haiti's ten
//! departments and six UN thematic budgets.
//!
//! ## Features
//!
//! - **Static dataset**: Two fixed tables rebuilt identically on every start
//! - **Headline metrics**: Population, projects, mean poverty, budget
//! - **Charts**: Bar, pie and bubble-scatter figures for plotly.js
//! - **Filter**: Validated department selector, never fatal on bad input
//! - **Export**: Department table as `haiti_data.csv`
//!
//! ## Modules
//!
//! - [`data`]: Dataset provider
//! - [`dashboard`]: The `render(state) -> View` pipeline
//! - [`page`]: HTML page rendering
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use onu_haiti::{render, Dataset, RenderOptions, RenderState};
//!
//! let dataset = Dataset::load();
//! let view = render(&dataset, &RenderState::default(), &RenderOptions::default());
//!
//! assert_eq!(view.metrics.total_population, 10_911_819);
//! assert_eq!(view.metrics.mean_poverty, 75.3);
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod page;

// Re-export top-level types for convenience
pub use data::{
    load_data, DataError, Dataset, DepartmentRecord, DepartmentTable, ThemeRecord, ThemeTable,
};

pub use dashboard::{
    export_departments, render, DashboardError, DepartmentFilter, KeyMetrics, Projections,
    RenderOptions, RenderState, View,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, DashboardConfig, LoadOutcome, LoggingConfig, ServerConfig};
