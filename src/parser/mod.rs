//! Parser module — dispatch by file extension.

pub mod changelog;
pub mod element;

use crate::model::Document;
use anyhow::{anyhow, Result};
use std::path::Path;

/// Parse a source file into a Document based on its extension.
pub fn parse_file(path: &Path, content: &str) -> Result<Document> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("js" | "mjs") => Ok(Document::Element(element::parse(content))),
        Some("md") => Ok(Document::Changelog(changelog::parse(content)?)),
        _ => Err(anyhow!("unsupported file type: {}", path.display())),
    }
}

/// Whether a path has an extension `parse_file` can dispatch on. Used when
/// scanning directories so unrelated files never reach the parsers.
pub fn is_supported(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("js" | "mjs" | "md")
    )
}
