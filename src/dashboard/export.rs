//! CSV export of the department table
//!
//! Header row is the column names, then one row per department in table
//! order. No index column.

use serde::Serialize;

use super::error::{DashboardError, DashboardResult};
use crate::data::{DepartmentRecord, DepartmentTable};

/// File name offered for download
pub const EXPORT_FILE_NAME: &str = "haiti_data.csv";

/// MIME type of the export
pub const EXPORT_MIME: &str = "text/csv";

/// Route serving the export
pub const EXPORT_HREF: &str = "/api/v1/export";

/// Header row, in field order
pub const DEPARTMENT_COLUMNS: [&str; 5] = [
    "Département",
    "Population",
    "Projets_ONU",
    "Taux_Pauvrete",
    "Acces_Eau",
];

/// A ready-to-download CSV blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Download descriptor carried by the rendered view
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExportLink {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub href: &'static str,
}

impl Default for ExportLink {
    fn default() -> Self {
        Self {
            file_name: EXPORT_FILE_NAME,
            mime: EXPORT_MIME,
            href: EXPORT_HREF,
        }
    }
}

/// Serialize the department table for download
pub fn export_departments(departments: &DepartmentTable) -> DashboardResult<CsvExport> {
    let bytes = departments_to_csv(departments)?;

    tracing::debug!(
        rows = departments.len(),
        bytes = bytes.len(),
        "Exported department table"
    );

    Ok(CsvExport {
        file_name: EXPORT_FILE_NAME,
        mime: EXPORT_MIME,
        bytes,
    })
}

/// UTF-8 CSV bytes with `\n` line endings
pub fn departments_to_csv(departments: &DepartmentTable) -> DashboardResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    // Written explicitly so an empty table still yields a header row
    writer.write_record(DEPARTMENT_COLUMNS)?;
    for record in departments {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| DashboardError::Export(e.to_string()))
}

/// Parse an export back into records
pub fn departments_from_csv(bytes: &[u8]) -> DashboardResult<Vec<DepartmentRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    if headers.iter().ne(DEPARTMENT_COLUMNS.iter().copied()) {
        return Err(DashboardError::Export(format!(
            "Unexpected header row: {:?}",
            headers.iter().collect::<Vec<_>>()
        )));
    }

    reader
        .deserialize()
        .map(|row| row.map_err(DashboardError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_data;

    #[test]
    fn test_header_and_first_rows() {
        let (departments, _) = load_data();
        let bytes = departments_to_csv(&departments).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Département,Population,Projets_ONU,Taux_Pauvrete,Acces_Eau"
        );
        assert_eq!(lines[1], "Ouest,4029705,45,65,72");
        assert_eq!(lines[9], "Grand'Anse,468301,15,80,48");
        assert_eq!(lines.len(), 11);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_round_trip_reproduces_table() {
        let (departments, _) = load_data();
        let bytes = departments_to_csv(&departments).unwrap();
        let parsed = departments_from_csv(&bytes).unwrap();

        assert_eq!(parsed.len(), departments.len());
        for (parsed, source) in parsed.iter().zip(departments.iter()) {
            assert_eq!(parsed, source);
        }
    }

    #[test]
    fn test_fields_needing_quotes_survive() {
        let table = DepartmentTable::new(vec![DepartmentRecord::new(
            "Nord, \"haut\"",
            1,
            2,
            3,
            4,
        )]);
        let bytes = departments_to_csv(&table).unwrap();
        let parsed = departments_from_csv(&bytes).unwrap();

        assert_eq!(parsed, table.records());
    }

    #[test]
    fn test_empty_table_keeps_header() {
        let bytes = departments_to_csv(&DepartmentTable::default()).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Département,Population,Projets_ONU,Taux_Pauvrete,Acces_Eau\n"
        );
    }

    #[test]
    fn test_export_descriptor() {
        let (departments, _) = load_data();
        let export = export_departments(&departments).unwrap();

        assert_eq!(export.file_name, "haiti_data.csv");
        assert_eq!(export.mime, "text/csv");
        assert!(!export.bytes.is_empty());
    }

    #[test]
    fn test_foreign_header_rejected() {
        let result = departments_from_csv(b"index,name\n0,Ouest\n");
        assert!(matches!(result, Err(DashboardError::Export(_))));
    }
}
