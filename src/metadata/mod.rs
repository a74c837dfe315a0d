//! Manifest Metadata Module
//!
//! Fetches IIIF document manifests by manifest key and maps their label/value
//! pairs onto display metadata for the hover overlay.
//!
//! ## Overview
//! The manifest endpoint has varied across deployments: labels and values may
//! be plain strings or localized objects, and the label vocabulary mixes
//! IIIF-standard English terms with Norwegian free-text labels. Decoding is
//! therefore tolerant, and the label-to-field mapping is configuration data
//! (`LabelVocabulary`) rather than code.
//!
//! This whole path is best-effort: any failure, whether transport, status, or
//! shape, degrades to "no metadata" for that document and never propagates to
//! the surrounding pipeline.
//!
//! ## Submodules
//! - **`manifest`**: The manifest API client.
//! - **`vocabulary`**: The configurable label-matching rules.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Manifest decoding structures and the extracted metadata DTO.

pub mod handlers;
pub mod manifest;
pub mod types;
pub mod vocabulary;

pub use manifest::ManifestClient;
pub use types::ImageMetadata;
pub use vocabulary::LabelVocabulary;
