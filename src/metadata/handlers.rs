use super::manifest::ManifestClient;
use super::types::ImageMetadata;
use crate::error::{reject, ErrorResponse};
use crate::identifier;
use crate::session::hover::HoverOutcome;
use crate::session::state::SearchSession;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ReferenceParams {
    pub image_url: String,
}

/// Metadata for one hovered result, with the viewer link alongside so the
/// overlay renders from a single response.
#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    pub metadata: Option<ImageMetadata>,
    pub viewer_link: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ViewerLinkResponse {
    pub viewer_link: String,
}

/// Hover path: resolve the reference, fetch (or reuse) the document's
/// metadata, and settle the hover state machine.
///
/// An unresolvable reference degrades this one entry to "no metadata"; it must
/// never fail the batch, so the handler always answers 200. The metadata store
/// is keyed by manifest key and caches `None` too, so a failing manifest is
/// fetched exactly once per search session.
pub async fn handle_metadata(
    Query(params): Query<ReferenceParams>,
    Extension(manifests): Extension<Arc<ManifestClient>>,
    Extension(session): Extension<Arc<SearchSession>>,
) -> Json<MetadataResponse> {
    let token = session.hover_begin(&params.image_url).await;

    let id = match identifier::parse(&params.image_url) {
        Ok(id) => id,
        Err(err) => {
            tracing::debug!("hovered reference has no identifier: {}", err);
            session.hover_settle(token, HoverOutcome::Failed).await;
            return Json(MetadataResponse {
                metadata: None,
                viewer_link: None,
            });
        }
    };

    let manifest_key = id.manifest_key();
    let metadata = match session.cached_metadata(&manifest_key) {
        Some(cached) => cached,
        None => {
            // Concurrent first hovers on the same document may both miss and
            // fetch; the store is first-wins, so both render one entry.
            let fetched = manifests.fetch_metadata(&manifest_key).await;
            session.store_metadata(&manifest_key, fetched)
        }
    };

    let outcome = if metadata.is_some() {
        HoverOutcome::Shown
    } else {
        HoverOutcome::Failed
    };
    // A stale token means the hovered target changed while the fetch was in
    // flight; the result is still returned, but the hover state ignores it.
    session.hover_settle(token, outcome).await;

    Json(MetadataResponse {
        metadata,
        viewer_link: Some(id.viewer_link()),
    })
}

/// Viewer link for a user-initiated click. Resolution failure here is local
/// and non-fatal: the UI disables the link instead of crashing.
pub async fn handle_viewer_link(
    Query(params): Query<ReferenceParams>,
) -> Result<Json<ViewerLinkResponse>, (StatusCode, Json<ErrorResponse>)> {
    match identifier::parse(&params.image_url) {
        Ok(id) => Ok(Json(ViewerLinkResponse {
            viewer_link: id.viewer_link(),
        })),
        Err(err) => Err(reject(err)),
    }
}
