use super::types::Identifier;
use crate::error::ClientError;
use regex::Regex;

/// The identifier token starts at the literal `URN` marker and runs up to,
/// but excluding, the next path separator.
const TOKEN_PATTERN: &str = r"URN[^/]*";

/// Cheap pre-filter: does the reference contain an identifier token at all?
///
/// Used by the result normalizer in similarity mode to drop non-image sentinel
/// values before they reach resolution.
pub fn contains_token(reference: &str) -> bool {
    let re = Regex::new(TOKEN_PATTERN).unwrap();
    re.is_match(reference)
}

/// Extracts the structured identifier embedded in an image reference.
///
/// The token splits on `_` into ordered fields. The first four fields are
/// `(prefix, doc_type, catalog_id, page)`; any further fields are ignored.
/// The first three must be non-empty. The page field is parsed as a decimal
/// numeral and becomes `None` when missing or unparseable, so viewer-link
/// derivation can still fall back to the first page.
pub fn parse(reference: &str) -> Result<Identifier, ClientError> {
    let re = Regex::new(TOKEN_PATTERN).unwrap();
    let token = re
        .find(reference)
        .ok_or_else(|| ClientError::InvalidReference(reference.to_string()))?
        .as_str();

    let mut fields = token.split('_');
    let prefix = fields.next().unwrap_or_default();
    let doc_type = fields.next().unwrap_or_default();
    let catalog_id = fields.next().unwrap_or_default();
    let page = fields.next().and_then(|raw| raw.parse::<u64>().ok());

    if prefix.is_empty() || doc_type.is_empty() || catalog_id.is_empty() {
        return Err(ClientError::InvalidReference(reference.to_string()));
    }

    Ok(Identifier {
        prefix: prefix.to_string(),
        doc_type: doc_type.to_string(),
        catalog_id: catalog_id.to_string(),
        page,
    })
}
