//! Chart projections
//!
//! Each projection is a sequence shaped for one chart type. Order always
//! follows the source table.

use serde::Serialize;

use crate::data::{Dataset, DepartmentTable, ThemeTable};

/// Default cap on scatter marker diameter, in pixels
pub const DEFAULT_SCATTER_SIZE_MAX: f64 = 40.0;

/// UN projects for one department (bar chart)
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BarPoint {
    pub department: String,
    pub un_projects: u32,
}

/// Budget share of one theme (pie chart)
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PieSlice {
    pub theme: String,
    pub budget_million_usd: u32,
}

/// One bubble of the projects vs. poverty scatter
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub un_projects: u32,
    pub poverty_rate: u8,
    pub population: u64,
    pub department: String,
    /// Marker diameter in pixels, in `[0, size_max]`
    pub marker_size: f64,
}

/// All three chart projections of a render
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Projections {
    pub bar: Vec<BarPoint>,
    pub pie: Vec<PieSlice>,
    pub scatter: Vec<ScatterPoint>,
}

impl Projections {
    pub fn from_dataset(dataset: &Dataset, scatter_size_max: f64) -> Self {
        Self {
            bar: bar(&dataset.departments),
            pie: pie(&dataset.themes),
            scatter: scatter(&dataset.departments, scatter_size_max),
        }
    }

    /// Sum of the pie values
    pub fn pie_total(&self) -> u64 {
        self.pie
            .iter()
            .map(|s| u64::from(s.budget_million_usd))
            .sum()
    }
}

pub fn bar(departments: &DepartmentTable) -> Vec<BarPoint> {
    departments
        .iter()
        .map(|r| BarPoint {
            department: r.name.clone(),
            un_projects: r.un_projects,
        })
        .collect()
}

/// Zero budgets pass through untouched and render as empty slices
pub fn pie(themes: &ThemeTable) -> Vec<PieSlice> {
    themes
        .iter()
        .map(|t| PieSlice {
            theme: t.theme.clone(),
            budget_million_usd: t.budget_million_usd,
        })
        .collect()
}

pub fn scatter(departments: &DepartmentTable, size_max: f64) -> Vec<ScatterPoint> {
    let max_population = departments.iter().map(|r| r.population).max().unwrap_or(0);

    departments
        .iter()
        .map(|r| ScatterPoint {
            un_projects: r.un_projects,
            poverty_rate: r.poverty_rate,
            population: r.population,
            department: r.name.clone(),
            marker_size: marker_size(r.population, max_population, size_max),
        })
        .collect()
}

/// Marker diameter for a population
///
/// Bubble area is proportional to population, so the diameter grows with the
/// square root. The most populous department gets exactly `size_max`.
pub fn marker_size(population: u64, max_population: u64, size_max: f64) -> f64 {
    if max_population == 0 || size_max <= 0.0 {
        return 0.0;
    }
    let ratio = (population.min(max_population) as f64) / (max_population as f64);
    size_max * ratio.sqrt()
}
