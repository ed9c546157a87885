//! Compiled-in demonstration dataset
//!
//! `load_data` is pure and deterministic: every call rebuilds the same two
//! tables from the constants below.

use super::types::{DepartmentRecord, DepartmentTable, ThemeRecord, ThemeTable};

/// (name, population, un_projects, poverty_rate, water_access)
const DEPARTMENTS: [(&str, u64, u32, u8, u8); 10] = [
    ("Ouest", 4_029_705, 45, 65, 72),
    ("Artibonite", 1_727_524, 28, 78, 58),
    ("Nord", 1_067_177, 32, 72, 65),
    ("Nord-Est", 393_967, 18, 82, 45),
    ("Nord-Ouest", 728_807, 22, 85, 40),
    ("Centre", 746_236, 25, 75, 55),
    ("Sud", 774_976, 30, 70, 68),
    ("Sud-Est", 632_601, 20, 68, 62),
    ("Grand'Anse", 468_301, 15, 80, 48),
    ("Nippes", 342_525, 12, 78, 52),
];

/// (theme, budget_million_usd, project_count)
const THEMES: [(&str, u32, u32); 6] = [
    ("Développement", 45, 120),
    ("Paix et Sécurité", 35, 85),
    ("Droits Humains", 25, 60),
    ("Environnement", 20, 45),
    ("Santé", 32, 95),
    ("Éducation", 18, 55),
];

/// Build the department and theme tables
pub fn load_data() -> (DepartmentTable, ThemeTable) {
    let departments = DEPARTMENTS
        .iter()
        .map(|&(name, population, projects, poverty, water)| {
            DepartmentRecord::new(name, population, projects, poverty, water)
        })
        .collect();

    let themes = THEMES
        .iter()
        .map(|&(theme, budget, projects)| ThemeRecord::new(theme, budget, projects))
        .collect();

    (DepartmentTable::new(departments), ThemeTable::new(themes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;

    const EXPECTED_DEPARTMENTS: [&str; 10] = [
        "Ouest",
        "Artibonite",
        "Nord",
        "Nord-Est",
        "Nord-Ouest",
        "Centre",
        "Sud",
        "Sud-Est",
        "Grand'Anse",
        "Nippes",
    ];

    const EXPECTED_THEMES: [&str; 6] = [
        "Développement",
        "Paix et Sécurité",
        "Droits Humains",
        "Environnement",
        "Santé",
        "Éducation",
    ];

    #[test]
    fn test_row_counts_and_names() {
        let (departments, themes) = load_data();

        assert_eq!(departments.len(), 10);
        assert_eq!(themes.len(), 6);
        assert_eq!(
            departments.names().collect::<Vec<_>>(),
            EXPECTED_DEPARTMENTS.to_vec()
        );
        assert_eq!(
            themes.iter().map(|t| t.theme.as_str()).collect::<Vec<_>>(),
            EXPECTED_THEMES.to_vec()
        );
    }

    #[test]
    fn test_load_is_deterministic() {
        let first = load_data();
        for _ in 0..3 {
            assert_eq!(load_data(), first);
        }
    }

    #[test]
    fn test_compiled_data_satisfies_invariants() {
        let dataset = Dataset::load();
        assert!(dataset.validate().is_ok());
    }

    #[test]
    fn test_spot_check_values() {
        let (departments, themes) = load_data();

        let grand_anse = departments.get("Grand'Anse").unwrap();
        assert_eq!(grand_anse.population, 468_301);
        assert_eq!(grand_anse.water_access, 48);

        let sante = themes.iter().find(|t| t.theme == "Santé").unwrap();
        assert_eq!(sante.budget_million_usd, 32);
        assert_eq!(sante.project_count, 95);
    }
}
