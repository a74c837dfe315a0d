use serde::{Deserialize, Serialize};

/// Base URL of the public book viewer. The derived link format is an external
/// contract; the viewer counts pages from 1.
pub const VIEWER_BASE_URL: &str = "https://www.nb.no/items/";

/// Structured identifier extracted from an image reference.
///
/// The first three fields are guaranteed non-empty once parsing succeeds.
/// `page` is the zero-based page index; `None` means the reference carried no
/// parseable page segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub prefix: String,
    pub doc_type: String,
    pub catalog_id: String,
    pub page: Option<u64>,
}

impl Identifier {
    /// The stable per-document key used to fetch shared metadata.
    ///
    /// References that differ only in their page segment resolve to the same
    /// key, so metadata fetched for one page of a document is reusable for any
    /// other image from that document.
    pub fn manifest_key(&self) -> String {
        format!("{}_{}_{}", self.prefix, self.doc_type, self.catalog_id)
    }

    /// The 1-based page number the viewer link carries.
    ///
    /// A reference without a page segment is treated as page index 0. The
    /// increment saturates so the derivation stays total even for a parseable
    /// page segment at the numeric limit.
    pub fn viewer_page(&self) -> u64 {
        self.page.unwrap_or(0).saturating_add(1)
    }

    /// Public book-viewer URL for this identifier.
    pub fn viewer_link(&self) -> String {
        format!(
            "{}{}?page={}",
            VIEWER_BASE_URL,
            self.manifest_key(),
            self.viewer_page()
        )
    }
}
