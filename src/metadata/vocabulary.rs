use super::types::{ImageMetadata, LabelValue, Manifest};
use regex::Regex;

/// Label-matching rules mapping manifest labels to semantic fields.
///
/// The vocabulary observed in the wild mixes IIIF-standard English labels with
/// Norwegian free-text labels and has changed between deployments, so the rule
/// set is data a caller can replace, not hard-coded logic. Needle lists match by
/// case-insensitive containment; the published marker matches exactly
/// (case-insensitive) and additionally mines a 4-digit year out of its value.
#[derive(Debug, Clone)]
pub struct LabelVocabulary {
    pub title: Vec<String>,
    pub creator: Vec<String>,
    pub date: Vec<String>,
    pub publisher: Vec<String>,
    pub language: Vec<String>,
    pub published_marker: String,
}

impl Default for LabelVocabulary {
    fn default() -> Self {
        Self {
            title: needles(&["title", "tittel"]),
            creator: needles(&["creator", "author", "forfatter"]),
            date: needles(&["date", "dato"]),
            publisher: needles(&["publisher", "utgiver"]),
            language: needles(&["language", "språk"]),
            published_marker: "published".to_string(),
        }
    }
}

fn needles(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn matches_any(label: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| label.contains(needle.as_str()))
}

/// Maps a manifest's metadata list onto display metadata.
///
/// First match wins per field; every pair also lands in `raw` untouched so the
/// UI can show labels the vocabulary does not know about.
pub fn extract_metadata(manifest: &Manifest, vocabulary: &LabelVocabulary) -> ImageMetadata {
    let mut metadata = ImageMetadata::default();

    for entry in &manifest.metadata {
        let label = match entry.label.first() {
            Some(label) => label,
            None => continue,
        };
        let value = entry.value.display();

        metadata.raw.push(LabelValue {
            label: label.to_string(),
            value: value.clone(),
        });

        if value.is_empty() {
            continue;
        }
        let label_lower = label.to_lowercase();

        if label_lower == vocabulary.published_marker {
            if metadata.publisher.is_none() {
                metadata.publisher = Some(value.clone());
            }
            if metadata.date.is_none() {
                if let Some(year) = extract_year(&value) {
                    metadata.date = Some(year);
                }
            }
        } else if metadata.title.is_none() && matches_any(&label_lower, &vocabulary.title) {
            metadata.title = Some(value);
        } else if metadata.creator.is_none() && matches_any(&label_lower, &vocabulary.creator) {
            metadata.creator = Some(value);
        } else if metadata.date.is_none() && matches_any(&label_lower, &vocabulary.date) {
            metadata.date = Some(value);
        } else if metadata.publisher.is_none() && matches_any(&label_lower, &vocabulary.publisher) {
            metadata.publisher = Some(value);
        } else if metadata.language.is_none() && matches_any(&label_lower, &vocabulary.language) {
            metadata.language = Some(value);
        }
    }

    metadata
}

fn extract_year(text: &str) -> Option<String> {
    let re = Regex::new(r"(\d{4})").unwrap();
    re.captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}
