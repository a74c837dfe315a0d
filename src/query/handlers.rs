use super::client::SimilarityClient;
use super::normalizer::normalize;
use super::types::{SearchMode, SimilarWord};
use crate::error::{reject, ErrorResponse};
use crate::session::state::{SearchSession, SessionSnapshot};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub hits: Option<usize>,
}

#[derive(Deserialize)]
pub struct SimilarParams {
    pub image_url: String,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct WordParams {
    pub word: String,
    pub collection_name: Option<String>,
}

/// Text search. The session is only touched on success, so a failed dispatch
/// leaves the prior stable result set and mode in place.
pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(client): Extension<Arc<SimilarityClient>>,
    Extension(session): Extension<Arc<SearchSession>>,
) -> Result<Json<SessionSnapshot>, (StatusCode, Json<ErrorResponse>)> {
    let raw = client
        .search_images(&params.q, params.hits)
        .await
        .map_err(reject)?;

    let entries = normalize(&raw, SearchMode::TextSearch);
    tracing::info!(
        "text search '{}' returned {} entries",
        params.q.trim(),
        entries.len()
    );

    let snapshot = session.apply_text_results(params.q.trim(), entries).await;
    Ok(Json(snapshot))
}

/// Pivot to "find visually similar images". Same session contract as
/// `handle_search`: failure leaves the prior stable mode untouched.
pub async fn handle_similar(
    Query(params): Query<SimilarParams>,
    Extension(client): Extension<Arc<SimilarityClient>>,
    Extension(session): Extension<Arc<SearchSession>>,
) -> Result<Json<SessionSnapshot>, (StatusCode, Json<ErrorResponse>)> {
    let raw = client
        .find_similar_images(&params.image_url, params.limit)
        .await
        .map_err(reject)?;

    let entries = normalize(&raw, SearchMode::SimilaritySearch);
    tracing::info!("similarity search returned {} entries", entries.len());

    let snapshot = session
        .apply_similar_results(&params.image_url, entries)
        .await;
    Ok(Json(snapshot))
}

pub async fn handle_words(
    Query(params): Query<WordParams>,
    Extension(client): Extension<Arc<SimilarityClient>>,
) -> Result<Json<Vec<SimilarWord>>, (StatusCode, Json<ErrorResponse>)> {
    let words = client
        .similar_words(&params.word, params.collection_name.as_deref())
        .await
        .map_err(reject)?;
    Ok(Json(words))
}

pub async fn handle_collections(
    Extension(client): Extension<Arc<SimilarityClient>>,
) -> Result<String, (StatusCode, Json<ErrorResponse>)> {
    client.collections().await.map_err(reject)
}
