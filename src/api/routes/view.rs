//! View Route
//!
//! - GET /api/v1/view?department=<value> - The rendered view as JSON

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::{ViewParams, ViewResponse};
use crate::api::state::AppState;
use crate::dashboard::render;

/// GET /api/v1/view
///
/// Same render as the page. A rejected filter is reported in `notice`.
pub async fn get_view(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ViewParams>,
) -> Json<ViewResponse> {
    let view = render(
        &state.dataset,
        &params.into_render_state(),
        &state.dashboard.render_options(),
    );

    Json(ViewResponse {
        rendered_at: Utc::now(),
        view,
    })
}
