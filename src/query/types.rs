use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which of the two remote lookups produced the current result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    TextSearch,
    SimilaritySearch,
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::TextSearch
    }
}

/// The raw response of a search call: collection id mapped to an ordered list
/// of image references, in the remote API's own key order.
///
/// List elements stay untyped JSON values. The similarity endpoint is known to
/// interleave non-string sentinel values with real references, and text-mode
/// results deliberately pass odd values through to be caught lazily at
/// resolution time, so typing them as strings here would be wrong both ways.
#[derive(Debug, Clone, Default)]
pub struct RawImageMap {
    pub groups: Vec<(String, Vec<Value>)>,
}

impl RawImageMap {
    /// Validates a decoded payload against the expected key-to-list shape.
    ///
    /// The top level must be an object and every value an array; anything else
    /// is a `MalformedResponse`. Element types are not checked here.
    pub fn from_value(payload: Value) -> Result<Self, ClientError> {
        let map = match payload {
            Value::Object(map) => map,
            other => {
                return Err(ClientError::MalformedResponse(format!(
                    "expected a collection-to-images object, got {}",
                    json_kind(&other)
                )))
            }
        };

        let mut groups = Vec::with_capacity(map.len());
        for (collection_id, images) in map {
            match images {
                Value::Array(images) => groups.push((collection_id, images)),
                other => {
                    return Err(ClientError::MalformedResponse(format!(
                        "collection {}: expected a list of image references, got {}",
                        collection_id,
                        json_kind(&other)
                    )))
                }
            }
        }

        Ok(RawImageMap { groups })
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One renderable search result: an image reference and the collection
/// (book/document) it belongs to. Collection ids repeat across entries;
/// multiple images per collection is the expected case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub collection_id: String,
    pub reference: String,
}

/// One entry of the similar-words endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarWord {
    pub word: String,
    pub score: f64,
}
