//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the model directly, with the project name alongside.

use crate::model::Module;
use crate::render::Renderer;
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct Document<'a> {
    name: &'a str,
    modules: &'a [Module],
}

impl Renderer for JsonRenderer {
    fn render(&self, project: &str, modules: &[Module]) -> String {
        let doc = Document {
            name: project,
            modules,
        };
        // Model types are plain strings, bools and sequences; serialization cannot fail.
        let mut out = serde_json::to_string_pretty(&doc).unwrap_or_default();
        out.push('\n');
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
