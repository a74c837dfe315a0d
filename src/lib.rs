//! Historical Image Search Client Library
//!
//! This library crate defines the core pipeline behind the image search browser.
//! It serves as the foundation for the binary executable (`main.rs`), which wraps
//! it in an HTTP shell and a single-page UI.
//!
//! ## Architecture Modules
//! The pipeline is composed of four loosely coupled subsystems:
//!
//! - **`identifier`**: The identifier resolution layer. Extracts the structured
//!   URN identifier embedded in an image reference and derives the per-document
//!   manifest key and the 1-based viewer link from it.
//! - **`query`**: The remote lookup layer. Dispatches text and similarity
//!   searches against the similarity API and normalizes the raw
//!   collection-to-images mapping into an ordered, renderable result sequence.
//! - **`metadata`**: The manifest layer. Fetches IIIF document manifests and
//!   maps their loosely structured label/value pairs onto display metadata
//!   (title, creator, date, publisher, language). Strictly best-effort.
//! - **`session`**: The state layer. Owns the current result set, the
//!   per-search metadata store, and the hover lifecycle state machine.

pub mod error;
pub mod identifier;
pub mod metadata;
pub mod query;
pub mod session;
