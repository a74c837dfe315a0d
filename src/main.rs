use axum::response::Html;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use nb_image_search::metadata::handlers::{handle_metadata, handle_viewer_link};
use nb_image_search::metadata::manifest::{ManifestClient, DEFAULT_MANIFEST_URL};
use nb_image_search::query::client::{SimilarityClient, DEFAULT_API_URL};
use nb_image_search::query::handlers::{
    handle_collections, handle_search, handle_similar, handle_words,
};
use nb_image_search::session::handlers::{handle_hover_leave, handle_results};
use nb_image_search::session::state::SearchSession;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let api_url =
        std::env::var("SIMILARITY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let manifest_url =
        std::env::var("MANIFEST_API_URL").unwrap_or_else(|_| DEFAULT_MANIFEST_URL.to_string());
    let bind_addr: SocketAddr = std::env::var("UI_BIND")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;

    let client = Arc::new(SimilarityClient::new(&api_url));
    let manifests = Arc::new(ManifestClient::new(&manifest_url));
    let session = Arc::new(SearchSession::new());

    let app = Router::new()
        .route("/", get(ui))
        .route("/api/search", get(handle_search))
        .route("/api/similar", get(handle_similar))
        .route("/api/results", get(handle_results))
        .route("/api/metadata", get(handle_metadata))
        .route("/api/viewer-link", get(handle_viewer_link))
        .route("/api/words", get(handle_words))
        .route("/api/collections", get(handle_collections))
        .route("/api/hover-leave", post(handle_hover_leave))
        .layer(Extension(client))
        .layer(Extension(manifests))
        .layer(Extension(session));

    tracing::info!("similarity API: {}", api_url);
    tracing::info!("manifest API: {}", manifest_url);
    tracing::info!("image search UI listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn ui() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}
