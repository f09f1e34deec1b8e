//! Renderer module — format dispatch for the documentation output.
//!
//! Markdown is the default and feeds the docs tree; html produces a
//! standalone portal page; json is consumed by tooling.

pub mod html;
pub mod json;
pub mod markdown;

use crate::model::Document;
use anyhow::{anyhow, Result};

/// Renders a parsed [`Document`] (element page or changelog) into one
/// output format.
pub trait Renderer {
    fn render(&self, doc: &Document) -> String;
    /// Extension for output files written in file mode, without the dot.
    fn file_extension(&self) -> &str;
}

/// Look up the renderer for a format name given on the command line.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {} (expected markdown, html, or json)",
            format
        )),
    }
}
