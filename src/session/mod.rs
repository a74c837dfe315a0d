//! Search Session Module
//!
//! The state layer: a single session object owns everything the UI renders.
//!
//! ## Overview
//! A dispatch replaces the result set wholesale; there is no incremental merge
//! and no identity across searches. Metadata derived from the results is cached
//! per document for the lifetime of one result set and discarded on the next
//! dispatch. Dispatch failures never touch the session, which is what makes the
//! "revert to the prior stable mode" error contract fall out for free.
//!
//! In-flight requests are never cancelled; overlapping hover fetches resolve
//! by token comparison instead, so a stale response cannot overwrite the state
//! of a newer hover.
//!
//! ## Submodules
//! - **`state`**: The session object and its snapshot DTO.
//! - **`hover`**: The per-hover lifecycle state machine.
//! - **`handlers`**: HTTP request handlers for the Axum web server.

pub mod handlers;
pub mod hover;
pub mod state;

pub use hover::{HoverOutcome, HoverState, HoverToken};
pub use state::{SearchSession, SessionSnapshot};

#[cfg(test)]
mod tests;
