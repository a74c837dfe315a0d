use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display metadata extracted from a document manifest.
///
/// All semantic fields are optional; `raw` carries every label/value pair the
/// manifest listed, for callers that want to display the unparsed remainder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub title: Option<String>,
    pub creator: Option<String>,
    pub date: Option<String>,
    pub publisher: Option<String>,
    pub language: Option<String>,
    pub raw: Vec<LabelValue>,
}

/// One unparsed manifest metadata pair, flattened to display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelValue {
    pub label: String,
    pub value: String,
}

/// The subset of a IIIF manifest this client reads.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub metadata: Vec<ManifestEntry>,
}

/// One manifest metadata entry. Either side may be absent in the wild;
/// a missing side decodes as an empty plain string and simply never matches
/// any vocabulary rule.
#[derive(Debug, Deserialize)]
pub struct ManifestEntry {
    #[serde(default)]
    pub label: ManifestText,
    #[serde(default)]
    pub value: ManifestText,
}

/// A manifest label or value in any of the shapes observed across deployments:
/// a plain string, a list of strings, or a language-keyed localized object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ManifestText {
    Plain(String),
    List(Vec<String>),
    Localized(BTreeMap<String, Vec<String>>),
}

impl Default for ManifestText {
    fn default() -> Self {
        ManifestText::Plain(String::new())
    }
}

/// Language preference for localized manifest text, most preferred first.
const LANGUAGE_PREFERENCE: [&str; 5] = ["no", "nb", "nn", "en", "none"];

impl ManifestText {
    /// First non-empty rendering of this text, following the language
    /// preference order for localized objects.
    pub fn first(&self) -> Option<&str> {
        match self {
            ManifestText::Plain(text) => Some(text.as_str()).filter(|t| !t.is_empty()),
            ManifestText::List(values) => {
                values.iter().map(String::as_str).find(|v| !v.is_empty())
            }
            ManifestText::Localized(by_language) => {
                for language in LANGUAGE_PREFERENCE {
                    if let Some(values) = by_language.get(language) {
                        if let Some(value) = values.iter().find(|v| !v.is_empty()) {
                            return Some(value.as_str());
                        }
                    }
                }
                // Unknown language keys still beat showing nothing
                by_language
                    .values()
                    .flatten()
                    .map(String::as_str)
                    .find(|v| !v.is_empty())
            }
        }
    }

    /// All renderings joined for display, e.g. multi-valued creator lists.
    pub fn display(&self) -> String {
        match self {
            ManifestText::Plain(text) => text.clone(),
            ManifestText::List(values) => values.join("; "),
            ManifestText::Localized(_) => self.first().unwrap_or_default().to_string(),
        }
    }
}
