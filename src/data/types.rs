//! Core record and table types for the dashboard datasets
//!
//! - `DepartmentRecord` / `DepartmentTable`: one row per Haitian department
//! - `ThemeRecord` / `ThemeTable`: one row per UN programmatic theme
//! - `Dataset`: both tables, shared read-only by the server
//!
//! Field names serialize with the column headers used by the CSV export.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::{DataError, DataResult};

/// Upper bound for percentage fields
pub const PERCENT_MAX: u8 = 100;

/// Statistics for one of Haiti's ten departments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentRecord {
    /// Department name, unique within the table
    #[serde(rename = "Département")]
    pub name: String,
    /// Resident population
    #[serde(rename = "Population")]
    pub population: u64,
    /// Number of UN projects running in the department
    #[serde(rename = "Projets_ONU")]
    pub un_projects: u32,
    /// Poverty rate in percent (0-100)
    #[serde(rename = "Taux_Pauvrete")]
    pub poverty_rate: u8,
    /// Share of the population with water access, in percent (0-100)
    #[serde(rename = "Acces_Eau")]
    pub water_access: u8,
}

impl DepartmentRecord {
    pub fn new(
        name: impl Into<String>,
        population: u64,
        un_projects: u32,
        poverty_rate: u8,
        water_access: u8,
    ) -> Self {
        Self {
            name: name.into(),
            population,
            un_projects,
            poverty_rate,
            water_access,
        }
    }
}

/// Budget and project count for one UN theme
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeRecord {
    /// Theme name, unique within the table
    #[serde(rename = "Thème")]
    pub theme: String,
    /// Allocated budget in millions of USD
    #[serde(rename = "Budget_Million_USD")]
    pub budget_million_usd: u32,
    /// Number of projects under the theme
    #[serde(rename = "Projets")]
    pub project_count: u32,
}

impl ThemeRecord {
    pub fn new(theme: impl Into<String>, budget_million_usd: u32, project_count: u32) -> Self {
        Self {
            theme: theme.into(),
            budget_million_usd,
            project_count,
        }
    }
}

/// Ordered department rows. Order is insertion order and carries no meaning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct DepartmentTable {
    records: Vec<DepartmentRecord>,
}

impl DepartmentTable {
    pub fn new(records: Vec<DepartmentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DepartmentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DepartmentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a department by exact name
    pub fn get(&self, name: &str) -> Option<&DepartmentRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Department names in table order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Check name uniqueness and percentage bounds
    pub fn validate(&self) -> DataResult<()> {
        let mut seen = HashSet::new();
        for record in &self.records {
            if !seen.insert(record.name.as_str()) {
                return Err(DataError::DuplicateDepartment(record.name.clone()));
            }
            check_percent(&record.name, "poverty_rate", record.poverty_rate)?;
            check_percent(&record.name, "water_access", record.water_access)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DepartmentTable {
    type Item = &'a DepartmentRecord;
    type IntoIter = std::slice::Iter<'a, DepartmentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Ordered theme rows
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ThemeTable {
    records: Vec<ThemeRecord>,
}

impl ThemeTable {
    pub fn new(records: Vec<ThemeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ThemeRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ThemeRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check theme name uniqueness
    pub fn validate(&self) -> DataResult<()> {
        let mut seen = HashSet::new();
        for record in &self.records {
            if !seen.insert(record.theme.as_str()) {
                return Err(DataError::DuplicateTheme(record.theme.clone()));
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ThemeTable {
    type Item = &'a ThemeRecord;
    type IntoIter = std::slice::Iter<'a, ThemeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Both dashboard tables
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Dataset {
    pub departments: DepartmentTable,
    pub themes: ThemeTable,
}

impl Dataset {
    pub fn new(departments: DepartmentTable, themes: ThemeTable) -> Self {
        Self {
            departments,
            themes,
        }
    }

    /// Build the compiled-in demonstration dataset
    pub fn load() -> Self {
        let (departments, themes) = super::provider::load_data();
        Self::new(departments, themes)
    }

    /// Check the invariants of both tables
    pub fn validate(&self) -> DataResult<()> {
        self.departments.validate()?;
        self.themes.validate()
    }
}

fn check_percent(department: &str, field: &'static str, value: u8) -> DataResult<()> {
    if value > PERCENT_MAX {
        return Err(DataError::PercentageOutOfRange {
            department: department.to_string(),
            field,
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_departments() -> DepartmentTable {
        DepartmentTable::new(vec![
            DepartmentRecord::new("Ouest", 4_029_705, 45, 65, 72),
            DepartmentRecord::new("Nippes", 342_525, 12, 78, 52),
        ])
    }

    #[test]
    fn test_department_lookup() {
        let table = sample_departments();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Nippes").map(|r| r.un_projects), Some(12));
        assert!(table.get("nippes").is_none());
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["Ouest", "Nippes"]);
    }

    #[test]
    fn test_duplicate_department_rejected() {
        let table = DepartmentTable::new(vec![
            DepartmentRecord::new("Sud", 1, 1, 1, 1),
            DepartmentRecord::new("Sud", 2, 2, 2, 2),
        ]);

        assert!(matches!(
            table.validate(),
            Err(DataError::DuplicateDepartment(name)) if name == "Sud"
        ));
    }

    #[test]
    fn test_percentage_bounds() {
        let ok = DepartmentTable::new(vec![DepartmentRecord::new("Centre", 10, 0, 0, 100)]);
        assert!(ok.validate().is_ok());

        let bad = DepartmentTable::new(vec![DepartmentRecord::new("Centre", 10, 0, 101, 50)]);
        match bad.validate() {
            Err(DataError::PercentageOutOfRange { field, value, .. }) => {
                assert_eq!(field, "poverty_rate");
                assert_eq!(value, 101);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_theme_rejected() {
        let table = ThemeTable::new(vec![
            ThemeRecord::new("Santé", 32, 95),
            ThemeRecord::new("Santé", 1, 1),
        ]);

        assert!(matches!(table.validate(), Err(DataError::DuplicateTheme(_))));
    }

    #[test]
    fn test_record_serializes_with_column_names() {
        let record = DepartmentRecord::new("Ouest", 4_029_705, 45, 65, 72);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["Département"], "Ouest");
        assert_eq!(json["Projets_ONU"], 45);
        assert_eq!(json["Acces_Eau"], 72);
    }
}
