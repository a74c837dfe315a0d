use super::types::{RawImageMap, ResultEntry, SearchMode};
use crate::identifier;
use serde_json::Value;

/// Flattens a raw mapping into an ordered sequence of result entries.
///
/// Ordering follows the remote mapping's key order, then each key's list order.
/// An empty mapping yields an empty sequence in both modes.
///
/// In text mode every element passes through unfiltered; a structurally odd
/// value is carried in its JSON rendering and caught lazily at resolution time,
/// only if the entry is actually used. In similarity mode, elements that are
/// not strings or carry no identifier token are dropped: that endpoint is known
/// to interleave non-image sentinel values with real references.
pub fn normalize(raw: &RawImageMap, mode: SearchMode) -> Vec<ResultEntry> {
    let mut entries = Vec::new();

    for (collection_id, images) in &raw.groups {
        for image in images {
            let reference = match mode {
                SearchMode::TextSearch => render_reference(image),
                SearchMode::SimilaritySearch => match image.as_str() {
                    Some(reference) if identifier::contains_token(reference) => {
                        reference.to_string()
                    }
                    _ => {
                        tracing::debug!(
                            "dropping sentinel value in collection {}: {}",
                            collection_id,
                            image
                        );
                        continue;
                    }
                },
            };

            entries.push(ResultEntry {
                collection_id: collection_id.clone(),
                reference,
            });
        }
    }

    entries
}

fn render_reference(value: &Value) -> String {
    match value.as_str() {
        Some(reference) => reference.to_string(),
        None => value.to_string(),
    }
}
