use super::types::{RawImageMap, SimilarWord};
use crate::error::ClientError;
use crate::identifier;
use serde_json::Value;

/// Public host of the similarity API.
pub const DEFAULT_API_URL: &str = "https://api.nb.no/dhlab/similarity";

/// Result-count bound applied when the caller leaves it unset.
pub const DEFAULT_HITS: usize = 10;

/// Client for the similarity API.
///
/// Every call issues exactly one outbound request. There are no retries, no
/// backoff, and no timeout beyond the transport default; a transport failure or
/// non-success status surfaces as `RemoteFailure`, a success response with the
/// wrong payload shape as `MalformedResponse`.
pub struct SimilarityClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl SimilarityClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Text search: `GET /images?search={query}&hits={n}`.
    ///
    /// An empty or whitespace-only query is refused before any network access;
    /// it is not a meaningful request against the remote service.
    pub async fn search_images(
        &self,
        query: &str,
        hits: Option<usize>,
    ) -> Result<RawImageMap, ClientError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ClientError::InvalidInput(
                "search query is empty".to_string(),
            ));
        }

        let url = format!(
            "{}/images?search={}&hits={}",
            self.base_url,
            urlencoding::encode(query),
            hits.unwrap_or(DEFAULT_HITS)
        );
        self.fetch_image_map(url).await
    }

    /// Similarity search: `GET /sim_images?image_url={reference}&limit={n}`.
    ///
    /// The reference must carry a resolvable identifier, otherwise the call
    /// fails with `InvalidInput` before any network access.
    pub async fn find_similar_images(
        &self,
        reference: &str,
        limit: Option<usize>,
    ) -> Result<RawImageMap, ClientError> {
        if let Err(err) = identifier::parse(reference) {
            return Err(ClientError::InvalidInput(format!(
                "not a similarity-searchable reference: {}",
                err
            )));
        }

        let url = format!(
            "{}/sim_images?image_url={}&limit={}",
            self.base_url,
            urlencoding::encode(reference),
            limit.unwrap_or(DEFAULT_HITS)
        );
        self.fetch_image_map(url).await
    }

    /// Plain-text listing of available collections. Not used by the core
    /// pipeline, exposed for completeness of the API surface.
    pub async fn collections(&self) -> Result<String, ClientError> {
        let url = format!("{}/collections", self.base_url);
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(remote_failure)?;
        let status = response.status();
        if !status.is_success() {
            return Err(non_success(status));
        }

        response.text().await.map_err(remote_failure)
    }

    /// Word-similarity lookup: `GET /sim_words?word={w}[&collection_name={c}]`.
    pub async fn similar_words(
        &self,
        word: &str,
        collection: Option<&str>,
    ) -> Result<Vec<SimilarWord>, ClientError> {
        let mut url = format!(
            "{}/sim_words?word={}",
            self.base_url,
            urlencoding::encode(word)
        );
        if let Some(collection) = collection {
            url.push_str(&format!(
                "&collection_name={}",
                urlencoding::encode(collection)
            ));
        }
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(remote_failure)?;
        let status = response.status();
        if !status.is_success() {
            return Err(non_success(status));
        }

        response
            .json::<Vec<SimilarWord>>()
            .await
            .map_err(|err| ClientError::MalformedResponse(err.to_string()))
    }

    async fn fetch_image_map(&self, url: String) -> Result<RawImageMap, ClientError> {
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(remote_failure)?;
        let status = response.status();
        if !status.is_success() {
            return Err(non_success(status));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| ClientError::MalformedResponse(format!("body is not JSON: {}", err)))?;
        RawImageMap::from_value(payload)
    }
}

fn remote_failure(err: reqwest::Error) -> ClientError {
    ClientError::RemoteFailure {
        status: err.status().map(|s| s.as_u16()),
        message: err.to_string(),
    }
}

fn non_success(status: reqwest::StatusCode) -> ClientError {
    ClientError::RemoteFailure {
        status: Some(status.as_u16()),
        message: format!("similarity API answered {}", status),
    }
}
