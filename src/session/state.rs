use super::hover::{HoverOutcome, HoverState, HoverToken};
use crate::metadata::types::ImageMetadata;
use crate::query::types::{ResultEntry, SearchMode};
use dashmap::DashMap;
use serde::Serialize;
use tokio::sync::RwLock;

/// The top-level session object.
///
/// Owns the current result set, the per-document metadata store, and the hover
/// state. Components get read access by reference; there is no global mutable
/// state anywhere else in the crate.
pub struct SearchSession {
    state: RwLock<SessionState>,
    hover: RwLock<HoverState>,
    /// Metadata keyed by manifest key, so one fetch covers every page of a
    /// document. `None` is a negative cache: a manifest that failed to resolve
    /// is not fetched again within the same result set.
    metadata: DashMap<String, Option<ImageMetadata>>,
}

#[derive(Debug, Default)]
struct SessionState {
    mode: SearchMode,
    query: Option<String>,
    selected: Option<String>,
    entries: Vec<ResultEntry>,
}

/// Snapshot of the renderable session state, returned by every state-changing
/// route and by `/api/results`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub mode: SearchMode,
    pub query: Option<String>,
    pub selected: Option<String>,
    pub count: usize,
    pub entries: Vec<ResultEntry>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
            hover: RwLock::new(HoverState::Idle),
            metadata: DashMap::new(),
        }
    }

    /// Installs a text-search result set. Replaces the previous results
    /// wholesale and discards all derived state.
    pub async fn apply_text_results(
        &self,
        query: &str,
        entries: Vec<ResultEntry>,
    ) -> SessionSnapshot {
        let mut state = self.state.write().await;
        state.mode = SearchMode::TextSearch;
        state.query = Some(query.to_string());
        state.selected = None;
        state.entries = entries;
        self.reset_derived().await;
        snapshot_of(&state)
    }

    /// Installs a similarity result set pivoted on `reference`. The last text
    /// query is kept so the UI can offer "back to search results".
    pub async fn apply_similar_results(
        &self,
        reference: &str,
        entries: Vec<ResultEntry>,
    ) -> SessionSnapshot {
        let mut state = self.state.write().await;
        state.mode = SearchMode::SimilaritySearch;
        state.selected = Some(reference.to_string());
        state.entries = entries;
        self.reset_derived().await;
        snapshot_of(&state)
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        snapshot_of(&*self.state.read().await)
    }

    /// Cached metadata for a manifest key. The outer `None` means "never
    /// fetched"; the inner `None` means "fetched and unavailable".
    pub fn cached_metadata(&self, manifest_key: &str) -> Option<Option<ImageMetadata>> {
        self.metadata
            .get(manifest_key)
            .map(|cached| cached.clone())
    }

    /// Stores fetched metadata for a manifest key and returns the entry that
    /// ended up in the store.
    ///
    /// First store wins: when two concurrent hovers over pages of the same
    /// document both miss the cache and fetch, the second fetch's result is
    /// discarded and both callers render the same entry. The duplicate fetch
    /// itself is benign; "fetched once" holds for everything after the store.
    pub fn store_metadata(
        &self,
        manifest_key: &str,
        metadata: Option<ImageMetadata>,
    ) -> Option<ImageMetadata> {
        self.metadata
            .entry(manifest_key.to_string())
            .or_insert(metadata)
            .clone()
    }

    pub async fn hover_begin(&self, reference: &str) -> HoverToken {
        self.hover.write().await.begin(reference)
    }

    pub async fn hover_settle(&self, token: HoverToken, outcome: HoverOutcome) -> bool {
        self.hover.write().await.settle(token, outcome)
    }

    pub async fn hover_leave(&self) {
        self.hover.write().await.leave();
    }

    pub async fn hover_state(&self) -> HoverState {
        self.hover.read().await.clone()
    }

    async fn reset_derived(&self) {
        self.metadata.clear();
        self.hover.write().await.leave();
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

fn snapshot_of(state: &SessionState) -> SessionSnapshot {
    SessionSnapshot {
        mode: state.mode,
        query: state.query.clone(),
        selected: state.selected.clone(),
        count: state.entries.len(),
        entries: state.entries.clone(),
    }
}
