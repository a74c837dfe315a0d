//! Identifier Resolution Module
//!
//! Image references returned by the similarity API are opaque URLs with a URN
//! identifier token embedded in the path, e.g.
//! `.../URN:NBN:no-nb_digibok_2014062307551_0134/full/...`.
//!
//! ## Responsibilities
//! - **Extraction**: Locating the identifier token inside a reference and
//!   splitting it into its `(prefix, doc_type, catalog_id, page)` fields.
//! - **Manifest key**: Deriving the per-document key used to fetch shared
//!   metadata, identical for every page of the same document.
//! - **Viewer link**: Deriving the public book-viewer URL with the 1-based page
//!   numbering the viewer expects.
//!
//! ## Submodules
//! - **`resolver`**: Token matching and segmentation.
//! - **`types`**: The structured `Identifier` and its derivations.

pub mod resolver;
pub mod types;

pub use resolver::{contains_token, parse};
pub use types::Identifier;

#[cfg(test)]
mod tests;
