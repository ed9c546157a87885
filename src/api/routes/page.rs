//! Page Route
//!
//! - GET /?department=<value> - The dashboard page
//!
//! Every request is one full render: the selector value arrives in the query
//! string and nothing is remembered between requests.

use axum::{
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::api::dto::ViewParams;
use crate::api::state::AppState;
use crate::dashboard::render;
use crate::page::render_page;

/// GET /
///
/// An invalid department still returns 200; the page shows the problem inline.
pub async fn dashboard_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ViewParams>,
) -> Html<String> {
    let view = render(
        &state.dataset,
        &params.into_render_state(),
        &state.dashboard.render_options(),
    );

    Html(render_page(&view, &state.dashboard.plotly_src))
}
