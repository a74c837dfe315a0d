use super::types::{ImageMetadata, Manifest};
use super::vocabulary::{extract_metadata, LabelVocabulary};

/// Public host of the IIIF manifest API.
pub const DEFAULT_MANIFEST_URL: &str = "https://api.nb.no/catalog/v1/iiif";

/// Client for the document manifest endpoint.
///
/// Strictly best-effort: `fetch_metadata` makes one attempt, never retries, and
/// resolves every failure to `None`. Nothing in this path returns an error.
pub struct ManifestClient {
    base_url: String,
    vocabulary: LabelVocabulary,
    http_client: reqwest::Client,
}

impl ManifestClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_vocabulary(base_url, LabelVocabulary::default())
    }

    /// The label vocabulary is caller-replaceable; the default rule set is not
    /// assumed exhaustive or stable across manifest deployments.
    pub fn with_vocabulary(base_url: &str, vocabulary: LabelVocabulary) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            vocabulary,
            http_client: reqwest::Client::new(),
        }
    }

    /// Fetches `GET {base}/{manifest_key}/manifest` and maps its metadata list
    /// onto display fields. Any failure degrades to `None`.
    pub async fn fetch_metadata(&self, manifest_key: &str) -> Option<ImageMetadata> {
        let url = format!("{}/{}/manifest", self.base_url, manifest_key);
        tracing::debug!("GET {}", url);

        let response = match self.http_client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("manifest fetch failed for {}: {}", manifest_key, err);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("manifest endpoint answered {} for {}", status, manifest_key);
            return None;
        }

        let manifest: Manifest = match response.json().await {
            Ok(manifest) => manifest,
            Err(err) => {
                tracing::warn!("manifest for {} did not decode: {}", manifest_key, err);
                return None;
            }
        };

        Some(extract_metadata(&manifest, &self.vocabulary))
    }
}
