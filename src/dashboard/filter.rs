//! Department filter
//!
//! The single selector of the dashboard. Its domain is `"All"` plus the
//! department names of the loaded table; anything else is rejected.

use serde::{Serialize, Serializer};
use std::fmt;

use super::error::{DashboardError, DashboardResult};
use crate::data::DepartmentTable;

/// Selector value meaning "no specific department"
pub const ALL: &str = "All";

/// A validated selector value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DepartmentFilter {
    #[default]
    All,
    Department(String),
}

impl DepartmentFilter {
    /// Validate a raw selector value against the department table
    ///
    /// Matching is exact and case-sensitive.
    pub fn parse(value: &str, departments: &DepartmentTable) -> DashboardResult<Self> {
        if value == ALL {
            return Ok(DepartmentFilter::All);
        }

        match departments.get(value) {
            Some(record) => Ok(DepartmentFilter::Department(record.name.clone())),
            None => Err(DashboardError::InvalidFilterValue {
                value: value.to_string(),
            }),
        }
    }

    /// Selector options in display order: `"All"` first, then table order
    pub fn options(departments: &DepartmentTable) -> Vec<String> {
        std::iter::once(ALL)
            .chain(departments.names())
            .map(str::to_string)
            .collect()
    }

    pub fn as_str(&self) -> &str {
        match self {
            DepartmentFilter::All => ALL,
            DepartmentFilter::Department(name) => name.as_str(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, DepartmentFilter::All)
    }

    /// Selected department name, if any
    pub fn department(&self) -> Option<&str> {
        match self {
            DepartmentFilter::All => None,
            DepartmentFilter::Department(name) => Some(name.as_str()),
        }
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DepartmentFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
