//! Dataset error types
//!
//! Violations of the table invariants. The compiled-in data never produces
//! these; they guard against edits to the constant tables.

use thiserror::Error;

/// Errors raised when a table breaks its invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// Two department rows share a name
    #[error("Duplicate department: {0}")]
    DuplicateDepartment(String),

    /// Two theme rows share a name
    #[error("Duplicate theme: {0}")]
    DuplicateTheme(String),

    /// A percentage field lies outside [0, 100]
    #[error("Percentage out of range for {department}.{field}: {value}")]
    PercentageOutOfRange {
        department: String,
        field: &'static str,
        value: u8,
    },
}

/// Result type alias for dataset operations
pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::DuplicateDepartment("Nord".to_string());
        assert_eq!(err.to_string(), "Duplicate department: Nord");

        let err = DataError::PercentageOutOfRange {
            department: "Sud".to_string(),
            field: "water_access",
            value: 120,
        };
        assert_eq!(
            err.to_string(),
            "Percentage out of range for Sud.water_access: 120"
        );
    }
}
