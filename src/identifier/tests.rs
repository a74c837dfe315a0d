//! Identifier Module Tests
//!
//! Validates token matching, segmentation, and the two derived operations
//! (manifest key, viewer link).
//!
//! ## Test Scopes
//! - **Parsing**: Token location, field splitting, error cases.
//! - **Manifest key**: Invariance across page numbers of the same document.
//! - **Viewer link**: The 1-based page offset contract.

#[cfg(test)]
mod tests {
    use crate::error::ClientError;
    use crate::identifier::{contains_token, parse};

    const SAMPLE_REFERENCE: &str = "https://www.nb.no/services/image/resolver/URN:NBN:no-nb_digibok_2014062307551_0134/full/0,400/0/default.jpg";

    // ============================================================
    // PARSING
    // ============================================================

    #[test]
    fn test_parse_full_image_url() {
        let id = parse(SAMPLE_REFERENCE).expect("reference should parse");

        assert_eq!(id.prefix, "URN:NBN:no-nb");
        assert_eq!(id.doc_type, "digibok");
        assert_eq!(id.catalog_id, "2014062307551");
        assert_eq!(id.page, Some(134));
    }

    #[test]
    fn test_parse_token_stops_at_path_separator() {
        let id = parse("http://host/URN:NBN:no-nb_digibok_2010_0005/rest_of_path_with_underscores").unwrap();

        // Nothing past the '/' leaks into the fields
        assert_eq!(id.catalog_id, "2010");
        assert_eq!(id.page, Some(5));
    }

    #[test]
    fn test_parse_bare_token() {
        let id = parse("URN:NBN:no-nb_digibok_2010010203040_0007").unwrap();

        assert_eq!(id.prefix, "URN:NBN:no-nb");
        assert_eq!(id.page, Some(7));
    }

    #[test]
    fn test_parse_no_token_is_invalid_reference() {
        let err = parse("https://example.com/not-an-image.jpg").unwrap_err();
        assert!(matches!(err, ClientError::InvalidReference(_)));
    }

    #[test]
    fn test_parse_missing_catalog_id_is_invalid_reference() {
        // Only two fields: no catalog id, so neither derivation can work
        let err = parse("host/URN:NBN:no-nb_digibok/full").unwrap_err();
        assert!(matches!(err, ClientError::InvalidReference(_)));
    }

    #[test]
    fn test_parse_three_fields_has_no_page() {
        let id = parse("host/URN:NBN:no-nb_digibok_2010010203040/full").unwrap();

        assert_eq!(id.catalog_id, "2010010203040");
        assert_eq!(id.page, None);
    }

    #[test]
    fn test_parse_non_numeric_page_becomes_none() {
        let id = parse("URN:NBN:no-nb_digibok_2010010203040_cover").unwrap();
        assert_eq!(id.page, None);
    }

    #[test]
    fn test_parse_extra_fields_are_ignored() {
        // Policy: take the first four `_`-fields, drop the rest
        let id = parse("URN_digibok_NB_2020010100001_5").unwrap();

        assert_eq!(id.prefix, "URN");
        assert_eq!(id.doc_type, "digibok");
        assert_eq!(id.catalog_id, "NB");
        assert_eq!(id.page, Some(2020010100001));
    }

    #[test]
    fn test_contains_token() {
        assert!(contains_token(SAMPLE_REFERENCE));
        assert!(contains_token("URN_a_b_1"));
        assert!(!contains_token("https://example.com/plain.jpg"));
        assert!(!contains_token(""));
    }

    // ============================================================
    // MANIFEST KEY
    // ============================================================

    #[test]
    fn test_manifest_key_format() {
        let id = parse(SAMPLE_REFERENCE).unwrap();
        assert_eq!(id.manifest_key(), "URN:NBN:no-nb_digibok_2014062307551");
    }

    #[test]
    fn test_manifest_key_invariant_across_pages() {
        let first = parse("URN:NBN:no-nb_digibok_2014062307551_0001").unwrap();
        let other = parse("URN:NBN:no-nb_digibok_2014062307551_0134").unwrap();

        assert_eq!(first.manifest_key(), other.manifest_key());
    }

    #[test]
    fn test_manifest_key_without_page_segment() {
        let id = parse("URN:NBN:no-nb_digibok_2014062307551").unwrap();
        assert_eq!(id.manifest_key(), "URN:NBN:no-nb_digibok_2014062307551");
    }

    // ============================================================
    // VIEWER LINK
    // ============================================================

    #[test]
    fn test_viewer_link_page_offset() {
        // Zero-based page index 7 renders as the viewer's page 8
        let id = parse("URN:NBN:no-nb_digibok_2014062307551_7").unwrap();

        assert_eq!(
            id.viewer_link(),
            "https://www.nb.no/items/URN:NBN:no-nb_digibok_2014062307551?page=8"
        );
    }

    #[test]
    fn test_viewer_link_page_zero() {
        let id = parse("URN:NBN:no-nb_digibok_2014062307551_0000").unwrap();
        assert!(id.viewer_link().ends_with("?page=1"));
    }

    #[test]
    fn test_viewer_link_page_at_numeric_limit() {
        // A page segment of u64::MAX still parses; the +1 saturates instead
        // of overflowing, keeping the derivation total
        let id = parse("URN:NBN:no-nb_digibok_2014062307551_18446744073709551615").unwrap();

        assert_eq!(id.page, Some(u64::MAX));
        assert_eq!(id.viewer_page(), u64::MAX);
        assert!(id.viewer_link().ends_with(&format!("?page={}", u64::MAX)));
    }

    #[test]
    fn test_viewer_link_defaults_to_first_page() {
        // Missing page segment is treated as index 0: still a useful link
        let id = parse("URN:NBN:no-nb_digibok_2014062307551").unwrap();

        assert_eq!(
            id.viewer_link(),
            "https://www.nb.no/items/URN:NBN:no-nb_digibok_2014062307551?page=1"
        );
    }

    #[test]
    fn test_derivations_never_fail_after_parse() {
        for reference in [
            SAMPLE_REFERENCE,
            "URN:NBN:no-nb_digibok_2014062307551",
            "URN_digibok_NB_2020010100001_5",
            "host/URN:NBN:no-nb_digibok_2010_cover/full",
        ] {
            let id = parse(reference).expect("all samples parse");
            assert!(!id.manifest_key().is_empty());
            assert!(id.viewer_link().contains("?page="));
        }
    }
}
