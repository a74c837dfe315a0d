//! Query Service Module
//!
//! The remote lookup layer: dispatches text and similarity searches against the
//! similarity API and turns the raw responses into renderable result sequences.
//!
//! ## Overview
//! Both search endpoints answer with the same shape, a JSON object mapping a
//! collection (book) id to a list of image references. The dispatcher validates
//! that shape and preserves the remote ordering; the normalizer flattens it into
//! `(collection_id, reference)` entries, filtering known sentinel values in
//! similarity mode only.
//!
//! ## Responsibilities
//! - **Dispatch**: One outbound request per call, no retries, no backoff.
//! - **Validation**: Pre-flight input checks before any network access, and
//!   explicit shape validation of successful responses.
//! - **Normalization**: Flattening the raw mapping in mapping-then-list order.
//! - **API**: HTTP handlers exposing both searches to the UI shell.
//!
//! ## Submodules
//! - **`client`**: The `reqwest`-backed similarity API client.
//! - **`normalizer`**: Raw-mapping flattening and sentinel filtering.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod client;
pub mod handlers;
pub mod normalizer;
pub mod types;

pub use client::SimilarityClient;
pub use normalizer::normalize;
pub use types::{RawImageMap, ResultEntry, SearchMode};
