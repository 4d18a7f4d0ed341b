use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::results::model::ResultDocument;

/// Read a results document from a JSON file on disk.
///
/// The document is parsed in full before returning; rendering never
/// starts from a partially read file.
pub fn read_results(path: &Path) -> Result<ResultDocument> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read results: {}", path.display()))?;

    parse_results(&text).with_context(|| format!("invalid results document: {}", path.display()))
}

/// Parse a results document from JSON text.
pub fn parse_results(text: &str) -> Result<ResultDocument> {
    let doc: ResultDocument = serde_json::from_str(text).context("failed to parse results JSON")?;

    tracing::debug!(
        static_strings = doc.strings.static_strings.len(),
        stack_strings = doc.strings.stack_strings.len(),
        tight_strings = doc.strings.tight_strings.len(),
        decoded_strings = doc.strings.decoded_strings.len(),
        "loaded results document"
    );

    Ok(doc)
}
