//! Data Transfer Objects
//!
//! Request and response types for the HTTP endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dashboard::{RenderState, View};

/// Query parameters of the page and view endpoints
///
/// Read as raw pairs so a repeated `department` reaches validation instead of
/// failing extraction. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct ViewParams {
    /// Every `department` value in query order
    pub departments: Vec<String>,
}

impl From<Vec<(String, String)>> for ViewParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let departments = pairs
            .into_iter()
            .filter(|(key, _)| key == "department")
            .map(|(_, value)| value)
            .collect();
        Self { departments }
    }
}

impl ViewParams {
    pub fn into_render_state(self) -> RenderState {
        RenderState::from_values(self.departments)
    }
}

/// Response of `GET /api/v1/view`
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub rendered_at: DateTime<Utc>,
    #[serde(flatten)]
    pub view: View,
}

/// Response of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub departments: usize,
    pub themes: usize,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: &[(&str, &str)]) -> ViewParams {
        query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_empty_department_means_all() {
        let params = pairs(&[("department", "")]);
        assert!(params.into_render_state().department_filter.is_none());

        let params = pairs(&[("theme", "Santé")]);
        assert!(params.into_render_state().department_filter.is_none());

        let params = pairs(&[("department", "Nord")]);
        assert_eq!(
            params.into_render_state().department_filter.as_deref(),
            Some("Nord")
        );
    }

    #[test]
    fn test_repeated_department_values() {
        let params = pairs(&[("department", "Nord"), ("x", "1"), ("department", "Nord")]);
        assert_eq!(params.departments, vec!["Nord", "Nord"]);
        assert_eq!(
            params.into_render_state().department_filter.as_deref(),
            Some("Nord")
        );

        let params = pairs(&[("department", "Nord"), ("department", "Sud")]);
        assert_eq!(
            params.into_render_state().department_filter.as_deref(),
            Some("Nord,Sud")
        );
    }
}
