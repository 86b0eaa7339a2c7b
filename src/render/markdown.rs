//! GitHub-flavored markdown renderer.

use crate::model::*;
use crate::render::Renderer;
use crate::toc;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, project: &str, modules: &[Module]) -> String {
        let mut output = format!("# {}\n\n", project);

        if !modules.is_empty() {
            output.push_str("## Index\n\n");
            for module in modules {
                output.push_str(&toc::render_toc_item(module.name()));
                output.push('\n');
            }
            output.push('\n');
        }

        for module in modules {
            output.push_str(&render_module(module));
            output.push('\n');
        }

        output
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_module(module: &Module) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("## {}\n", module.name()));
    if !module.description().is_empty() {
        lines.push(module.description().to_string());
        lines.push(String::new());
    }

    if module.functions().is_empty() {
        lines.push("_Module has no functions._".to_string());
        lines.push(String::new());
    }

    for func in module.functions() {
        lines.push(render_function(func));
    }

    lines.join("\n")
}

/// Render a single function's documentation block.
fn render_function(func: &Function) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", func.name()));

    if func.is_native() {
        lines.push("> `native`".to_string());
        lines.push(String::new());
    }

    if !func.description().is_empty() {
        lines.push(func.description().to_string());
        lines.push(String::new());
    }

    lines.push("```".to_string());
    lines.push(func.to_string());
    lines.push("```".to_string());
    lines.push(String::new());

    if !func.parameters().is_empty() {
        lines.push("#### Parameters\n".to_string());
        for param in func.parameters() {
            lines.push(format!("* {}", render_parameter(param)));
        }
        lines.push(String::new());
    }

    if let Some(returns) = func.returns() {
        lines.push(format!("**Returns** `{}`", returns));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// `x: Int` → `**x** (Int)`, with the description after a colon when present.
fn render_parameter(param: &Parameter) -> String {
    let ty = param.ty().map(ResolvedType::as_str).unwrap_or("?");
    if param.description().is_empty() {
        format!("**{}** ({})", param.name(), ty)
    } else {
        format!("**{}** ({}): {}", param.name(), ty, param.description())
    }
}
