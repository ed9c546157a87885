//! Headline metrics
//!
//! Pure reductions over the full tables. The department filter never reaches
//! this module: totals always describe the whole country.

use serde::Serialize;

use crate::data::{Dataset, DepartmentRecord, DepartmentTable, ThemeTable};

/// The four headline indicators
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct KeyMetrics {
    pub total_population: u64,
    pub total_projects: u64,
    /// Mean poverty rate in percent, rounded to one decimal
    pub mean_poverty: f64,
    /// Total budget in millions of USD
    pub total_budget: u64,
}

/// A labelled, display-formatted metric
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
}

impl KeyMetrics {
    /// Display cards in dashboard order
    pub fn cards(&self) -> Vec<MetricCard> {
        vec![
            MetricCard {
                label: "Population Totale",
                value: format_thousands(self.total_population),
            },
            MetricCard {
                label: "Total Projets ONU",
                value: self.total_projects.to_string(),
            },
            MetricCard {
                label: "Pauvreté Moyenne",
                value: format!("{:.1}%", self.mean_poverty),
            },
            MetricCard {
                label: "Budget Total",
                value: format!("${}M", self.total_budget),
            },
        ]
    }
}

/// Compute the headline metrics over the unfiltered dataset
pub fn aggregate(dataset: &Dataset) -> KeyMetrics {
    KeyMetrics {
        total_population: total_population(&dataset.departments),
        total_projects: total_projects(&dataset.departments),
        mean_poverty: mean_poverty(&dataset.departments),
        total_budget: total_budget(&dataset.themes),
    }
}

pub fn total_population(departments: &DepartmentTable) -> u64 {
    departments.iter().map(|r| r.population).sum()
}

pub fn total_projects(departments: &DepartmentTable) -> u64 {
    departments.iter().map(|r| u64::from(r.un_projects)).sum()
}

/// Mean poverty rate rounded to one decimal; 0.0 for an empty table
pub fn mean_poverty(departments: &DepartmentTable) -> f64 {
    if departments.is_empty() {
        return 0.0;
    }
    let sum: u64 = departments.iter().map(|r| u64::from(r.poverty_rate)).sum();
    round_one_decimal(sum as f64 / departments.len() as f64)
}

pub fn total_budget(themes: &ThemeTable) -> u64 {
    themes.iter().map(|t| u64::from(t.budget_million_usd)).sum()
}

/// Share of the national population living in `record`, in percent
pub fn population_share(record: &DepartmentRecord, total_population: u64) -> f64 {
    if total_population == 0 {
        return 0.0;
    }
    round_one_decimal(record.population as f64 * 100.0 / total_population as f64)
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format an integer with comma thousands separators (`10,911,819`)
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DepartmentRecord, ThemeRecord};

    #[test]
    fn test_fixed_dataset_totals() {
        let metrics = aggregate(&Dataset::load());

        assert_eq!(metrics.total_population, 10_911_819);
        assert_eq!(metrics.total_projects, 247);
        assert_eq!(metrics.mean_poverty, 75.3);
        assert_eq!(metrics.total_budget, 175);
    }

    #[test]
    fn test_cards() {
        let cards = aggregate(&Dataset::load()).cards();
        let values: Vec<(&str, &str)> = cards
            .iter()
            .map(|c| (c.label, c.value.as_str()))
            .collect();

        assert_eq!(
            values,
            vec![
                ("Population Totale", "10,911,819"),
                ("Total Projets ONU", "247"),
                ("Pauvreté Moyenne", "75.3%"),
                ("Budget Total", "$175M"),
            ]
        );
    }

    #[test]
    fn test_mean_poverty_rounding() {
        let table = DepartmentTable::new(vec![
            DepartmentRecord::new("A", 1, 0, 70, 0),
            DepartmentRecord::new("B", 1, 0, 71, 0),
            DepartmentRecord::new("C", 1, 0, 71, 0),
        ]);
        // 212 / 3 = 70.666...
        assert_eq!(mean_poverty(&table), 70.7);
    }

    #[test]
    fn test_empty_tables() {
        let dataset = Dataset::new(DepartmentTable::default(), ThemeTable::default());
        let metrics = aggregate(&dataset);

        assert_eq!(metrics.total_population, 0);
        assert_eq!(metrics.total_projects, 0);
        assert_eq!(metrics.mean_poverty, 0.0);
        assert_eq!(metrics.total_budget, 0);
    }

    #[test]
    fn test_total_budget_allows_zero_entries() {
        let themes = ThemeTable::new(vec![
            ThemeRecord::new("Santé", 32, 95),
            ThemeRecord::new("Culture", 0, 0),
        ]);
        assert_eq!(total_budget(&themes), 32);
    }

    #[test]
    fn test_population_share() {
        let dataset = Dataset::load();
        let ouest = dataset.departments.get("Ouest").unwrap();

        assert_eq!(population_share(ouest, 10_911_819), 36.9);
        assert_eq!(population_share(ouest, 0), 0.0);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(342_525), "342,525");
        assert_eq!(format_thousands(10_911_819), "10,911,819");
    }
}
