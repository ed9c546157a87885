//! Dashboard error types

use thiserror::Error;

/// Errors raised while rendering or exporting the dashboard
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Selector value outside `{"All"} ∪ department names`
    #[error("Invalid filter value: {value:?} is not \"All\" or a known department")]
    InvalidFilterValue { value: String },

    /// CSV serialization failed
    #[error("Export error: {0}")]
    Export(String),
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        DashboardError::Export(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::InvalidFilterValue {
            value: "Miami".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid filter value: \"Miami\" is not \"All\" or a known department"
        );
    }
}
