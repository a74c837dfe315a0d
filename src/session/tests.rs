//! Session Module Tests
//!
//! Validates the hover lifecycle state machine (token staleness in
//! particular) and the session's replace-wholesale result semantics.

#[cfg(test)]
mod tests {
    use crate::metadata::types::ImageMetadata;
    use crate::query::types::{ResultEntry, SearchMode};
    use crate::session::hover::{HoverOutcome, HoverState};
    use crate::session::state::SearchSession;

    fn entry(collection_id: &str, reference: &str) -> ResultEntry {
        ResultEntry {
            collection_id: collection_id.to_string(),
            reference: reference.to_string(),
        }
    }

    // ============================================================
    // HOVER STATE MACHINE
    // ============================================================

    #[test]
    fn test_hover_begin_is_pending() {
        let mut hover = HoverState::Idle;
        let token = hover.begin("ref-1");

        assert!(matches!(hover, HoverState::Pending { .. }));
        assert_eq!(hover.token(), Some(token));
        assert_eq!(hover.reference(), Some("ref-1"));
    }

    #[test]
    fn test_hover_settle_with_current_token() {
        let mut hover = HoverState::Idle;
        let token = hover.begin("ref-1");

        assert!(hover.settle(token, HoverOutcome::Shown));
        assert!(matches!(hover, HoverState::Shown { .. }));
        assert_eq!(hover.reference(), Some("ref-1"));
    }

    #[test]
    fn test_hover_settle_failed_outcome() {
        let mut hover = HoverState::Idle;
        let token = hover.begin("ref-1");

        assert!(hover.settle(token, HoverOutcome::Failed));
        assert!(matches!(hover, HoverState::Failed { .. }));
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let mut hover = HoverState::Idle;
        let stale = hover.begin("ref-1");
        // The pointer moved on before the first fetch settled
        let current = hover.begin("ref-2");

        assert!(!hover.settle(stale, HoverOutcome::Shown));
        assert_eq!(hover.reference(), Some("ref-2"));
        assert!(matches!(hover, HoverState::Pending { .. }));

        assert!(hover.settle(current, HoverOutcome::Shown));
        assert_eq!(hover.reference(), Some("ref-2"));
    }

    #[test]
    fn test_settle_after_leave_is_ignored() {
        let mut hover = HoverState::Idle;
        let token = hover.begin("ref-1");
        hover.leave();

        assert!(!hover.settle(token, HoverOutcome::Shown));
        assert_eq!(hover, HoverState::Idle);
    }

    #[test]
    fn test_settle_twice_is_ignored() {
        let mut hover = HoverState::Idle;
        let token = hover.begin("ref-1");

        assert!(hover.settle(token, HoverOutcome::Shown));
        assert!(!hover.settle(token, HoverOutcome::Failed));
        assert!(matches!(hover, HoverState::Shown { .. }));
    }

    // ============================================================
    // SESSION STATE
    // ============================================================

    #[tokio::test]
    async fn test_default_snapshot() {
        let session = SearchSession::new();
        let snapshot = session.snapshot().await;

        assert_eq!(snapshot.mode, SearchMode::TextSearch);
        assert!(snapshot.query.is_none());
        assert!(snapshot.selected.is_none());
        assert_eq!(snapshot.count, 0);
    }

    #[tokio::test]
    async fn test_apply_text_results_replaces_wholesale() {
        let session = SearchSession::new();
        session
            .apply_text_results("daguerrotypi", vec![entry("b1", "r1"), entry("b1", "r2")])
            .await;

        let snapshot = session
            .apply_text_results("portrett", vec![entry("b2", "r3")])
            .await;

        assert_eq!(snapshot.query.as_deref(), Some("portrett"));
        assert_eq!(snapshot.count, 1);
        assert_eq!(snapshot.entries[0].reference, "r3");
    }

    #[tokio::test]
    async fn test_apply_similar_keeps_query_sets_selected() {
        let session = SearchSession::new();
        session
            .apply_text_results("daguerrotypi", vec![entry("b1", "r1")])
            .await;

        let snapshot = session
            .apply_similar_results("r1", vec![entry("b2", "r9")])
            .await;

        assert_eq!(snapshot.mode, SearchMode::SimilaritySearch);
        assert_eq!(snapshot.selected.as_deref(), Some("r1"));
        // The text query survives the pivot for "back to search results"
        assert_eq!(snapshot.query.as_deref(), Some("daguerrotypi"));
    }

    #[tokio::test]
    async fn test_dispatch_clears_metadata_store() {
        let session = SearchSession::new();
        session.store_metadata("key-1", Some(ImageMetadata::default()));
        assert!(session.cached_metadata("key-1").is_some());

        session.apply_text_results("portrett", vec![]).await;

        assert!(session.cached_metadata("key-1").is_none());
    }

    #[tokio::test]
    async fn test_negative_metadata_cache() {
        let session = SearchSession::new();

        // Never fetched vs fetched-and-unavailable are distinct
        assert!(session.cached_metadata("key-1").is_none());
        session.store_metadata("key-1", None);
        assert_eq!(session.cached_metadata("key-1"), Some(None));
    }

    #[tokio::test]
    async fn test_first_metadata_store_wins() {
        let session = SearchSession::new();
        let titled = ImageMetadata {
            title: Some("Norske folkeeventyr".to_string()),
            ..ImageMetadata::default()
        };

        // Two hovers racing on the same document both store after fetching;
        // the later store must not displace the earlier entry
        let first = session.store_metadata("key-1", Some(titled));
        let second = session.store_metadata("key-1", None);

        assert_eq!(
            first.as_ref().and_then(|m| m.title.as_deref()),
            Some("Norske folkeeventyr")
        );
        assert_eq!(first, second);
        assert_eq!(session.cached_metadata("key-1"), Some(first));
    }

    #[tokio::test]
    async fn test_dispatch_resets_hover() {
        let session = SearchSession::new();
        let token = session.hover_begin("r1").await;

        session.apply_text_results("portrett", vec![]).await;

        assert!(!session.hover_settle(token, HoverOutcome::Shown).await);
        assert_eq!(session.hover_state().await, HoverState::Idle);
    }
}
