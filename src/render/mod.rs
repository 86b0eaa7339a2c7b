//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

use crate::model::Module;
use anyhow::{anyhow, Result};

/// Trait for rendering extracted modules into a specific output format.
pub trait Renderer {
    fn render(&self, project: &str, modules: &[Module]) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "text" | "txt" => Ok(Box::new(text::TextRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use text, html, markdown, or json",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        for (format, ext) in [
            ("text", "txt"),
            ("txt", "txt"),
            ("html", "html"),
            ("markdown", "md"),
            ("md", "md"),
            ("json", "json"),
        ] {
            assert_eq!(create_renderer(format).unwrap().file_extension(), ext);
        }
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("xml").err().unwrap();
        assert!(err.to_string().starts_with("unknown format: xml"));
    }
}
