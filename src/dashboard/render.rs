//! View rendering
//!
//! `render` is the whole per-interaction pipeline: validate the filter,
//! aggregate, project, and assemble a serializable `View`. It holds no state
//! between calls; the host passes the current filter value in every time.

use serde::Serialize;

use super::error::DashboardError;
use super::export::ExportLink;
use super::filter::DepartmentFilter;
use super::metrics::{self, KeyMetrics, MetricCard};
use super::projections::{Projections, DEFAULT_SCATTER_SIZE_MAX};
use crate::data::{Dataset, DepartmentRecord, DepartmentTable, ThemeTable};

/// Section name of the department table
pub const DEPARTMENTS_SECTION: &str = "Departments";
/// Section name of the theme table
pub const THEMES_SECTION: &str = "Themes";

/// Interaction state owned by the host session
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    /// Raw selector value; `None` means "All"
    pub department_filter: Option<String>,
}

impl RenderState {
    pub fn new(department_filter: Option<String>) -> Self {
        Self { department_filter }
    }

    /// Build the state from every value the host received for the selector
    ///
    /// Empty values are ignored and identical repeats count once. Distinct
    /// values are kept joined with `,` so validation rejects them.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut distinct: Vec<String> = Vec::new();
        for value in values.into_iter().map(Into::into) {
            if !value.is_empty() && !distinct.contains(&value) {
                distinct.push(value);
            }
        }

        if distinct.is_empty() {
            Self::default()
        } else {
            Self::new(Some(distinct.join(",")))
        }
    }
}

/// Knobs that shape a render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Largest scatter marker diameter, in pixels
    pub scatter_size_max: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scatter_size_max: DEFAULT_SCATTER_SIZE_MAX,
        }
    }
}

/// A named table section
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TableSection<T> {
    pub name: &'static str,
    pub rows: T,
}

/// Both tables, verbatim
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TableView {
    pub departments: TableSection<DepartmentTable>,
    pub themes: TableSection<ThemeTable>,
}

/// The selected department with its weight in the national total
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Selection {
    pub record: DepartmentRecord,
    /// Percent of the total population, one decimal
    pub population_share: f64,
}

/// Everything the host needs to draw the dashboard
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct View {
    /// Effective filter after validation
    pub filter: DepartmentFilter,
    pub filter_options: Vec<String>,
    /// Inline validation message, set when the requested filter was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub metrics: KeyMetrics,
    pub cards: Vec<MetricCard>,
    pub projections: Projections,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<Selection>,
    pub tables: TableView,
    pub export: ExportLink,
}

/// Render the dashboard for one interaction
///
/// An out-of-domain filter never aborts the render: it is reported through
/// `View::notice` and the view falls back to "All". Metrics always cover the
/// full tables.
pub fn render(dataset: &Dataset, state: &RenderState, options: &RenderOptions) -> View {
    let (filter, notice) = match resolve_filter(dataset, state) {
        Ok(filter) => (filter, None),
        Err(err) => {
            tracing::warn!(error = %err, "Rejected department filter");
            (DepartmentFilter::All, Some(err.to_string()))
        }
    };

    let key_metrics = metrics::aggregate(dataset);
    let projections = Projections::from_dataset(dataset, options.scatter_size_max);
    let selection = select(dataset, &filter, &key_metrics);

    tracing::debug!(
        filter = %filter,
        rejected = notice.is_some(),
        "Rendered dashboard view"
    );

    View {
        filter_options: DepartmentFilter::options(&dataset.departments),
        filter,
        notice,
        cards: key_metrics.cards(),
        metrics: key_metrics,
        projections,
        selection,
        tables: table_view(dataset),
        export: ExportLink::default(),
    }
}

/// Validate the requested filter; an absent value selects "All"
pub fn resolve_filter(
    dataset: &Dataset,
    state: &RenderState,
) -> Result<DepartmentFilter, DashboardError> {
    match state.department_filter.as_deref() {
        None => Ok(DepartmentFilter::All),
        Some(value) => DepartmentFilter::parse(value, &dataset.departments),
    }
}

fn select(dataset: &Dataset, filter: &DepartmentFilter, metrics: &KeyMetrics) -> Option<Selection> {
    let record = dataset.departments.get(filter.department()?)?;
    Some(Selection {
        population_share: metrics::population_share(record, metrics.total_population),
        record: record.clone(),
    })
}

fn table_view(dataset: &Dataset) -> TableView {
    TableView {
        departments: TableSection {
            name: DEPARTMENTS_SECTION,
            rows: dataset.departments.clone(),
        },
        themes: TableSection {
            name: THEMES_SECTION,
            rows: dataset.themes.clone(),
        },
    }
}
