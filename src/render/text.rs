//! Plain-text renderer for the console.

use crate::model::Module;
use crate::render::Renderer;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, _project: &str, modules: &[Module]) -> String {
        let mut out = String::new();
        for module in modules {
            out.push_str(&format!("Module: {}\n", module.name()));
            out.push_str(&format!("Description: {}\n", module.description()));
            for func in module.functions() {
                out.push_str(&format!("   Method: {} \n", func));
            }
            out.push('\n');
        }
        out
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}
