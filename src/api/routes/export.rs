//! Export Routes
//!
//! - GET /api/v1/export - Department table as a CSV download

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::export_departments;

/// GET /api/v1/export
///
/// The export always covers the full department table.
pub async fn export_data(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let export = export_departments(&state.dataset.departments)?;

    tracing::info!(
        file_name = export.file_name,
        bytes = export.bytes.len(),
        "Serving CSV export"
    );

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                format!("{}; charset=utf-8", export.mime),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.file_name),
            ),
        ],
        Body::from(export.bytes),
    )
        .into_response())
}
