use super::state::{SearchSession, SessionSnapshot};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

/// Current session state, for (re)rendering the grid without a new dispatch.
pub async fn handle_results(
    Extension(session): Extension<Arc<SearchSession>>,
) -> Json<SessionSnapshot> {
    Json(session.snapshot().await)
}

/// The pointer left the hovered item; any in-flight metadata fetch for it
/// becomes stale and will be ignored when it settles.
pub async fn handle_hover_leave(
    Extension(session): Extension<Arc<SearchSession>>,
) -> StatusCode {
    session.hover_leave().await;
    StatusCode::NO_CONTENT
}
