//! HTML renderer — standalone index page with semantic markup.

use crate::model::*;
use crate::render::Renderer;
use crate::toc;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, project: &str, modules: &[Module]) -> String {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!(
            "<title>{} API Documentation</title>\n",
            html_escape(project)
        ));
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("table { border-collapse: collapse; margin: 0.5em 0 1em; }\n");
        out.push_str("th, td { text-align: left; padding: 0.2em 0.8em; border-bottom: 1px solid #ddd; }\n");
        out.push_str(".tag { display: inline-block; font-size: 0.75em; padding: 0.1em 0.4em; border-radius: 3px; margin-left: 0.5em; }\n");
        out.push_str(".tag-native { background: #dea584; color: #1a1a1a; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");
        out.push_str(&format!("<h1>{}</h1>\n", html_escape(project)));

        // Index
        if !modules.is_empty() {
            out.push_str("<h2>Modules</h2>\n<ul>\n");
            for module in modules {
                out.push_str(&format!(
                    "  <li><a href=\"#{}\">{}</a></li>\n",
                    html_escape(&module_anchor(module)),
                    html_escape(module.name())
                ));
            }
            out.push_str("</ul>\n");
        }

        for module in modules {
            out.push_str(&render_module_html(module));
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn module_anchor(module: &Module) -> String {
    format!("module-{}", toc::slug(module.name()))
}

fn render_module_html(module: &Module) -> String {
    let mut out = String::new();
    let anchor = module_anchor(module);

    out.push_str(&format!(
        "<section id=\"{}\">\n<h2>{}</h2>\n",
        html_escape(&anchor),
        html_escape(module.name())
    ));
    if !module.description().is_empty() {
        out.push_str(&format!("<p>{}</p>\n", html_escape(module.description())));
    }

    if module.functions().is_empty() {
        out.push_str("<p><em>No functions.</em></p>\n");
    }
    for func in module.functions() {
        out.push_str(&render_function_html(func));
    }

    out.push_str("</section>\n");
    out
}

fn render_function_html(func: &Function) -> String {
    let mut out = String::new();

    out.push_str(&format!("<h3><code>{}</code>", html_escape(&func.to_string())));
    if func.is_native() {
        out.push_str(" <span class=\"tag tag-native\">native</span>");
    }
    out.push_str("</h3>\n");

    if !func.description().is_empty() {
        out.push_str(&format!("<p>{}</p>\n", html_escape(func.description())));
    }

    if !func.parameters().is_empty() {
        out.push_str("<table>\n  <tr><th>Parameter</th><th>Type</th></tr>\n");
        for param in func.parameters() {
            let ty = param.ty().map(ResolvedType::as_str).unwrap_or("?");
            out.push_str(&format!(
                "  <tr><td><code>{}</code></td><td><code>{}</code></td></tr>\n",
                html_escape(param.name()),
                html_escape(ty)
            ));
        }
        out.push_str("</table>\n");
    }

    if let Some(returns) = func.returns() {
        out.push_str(&format!(
            "<p>Returns <code>{}</code></p>\n",
            html_escape(returns.as_str())
        ));
    }

    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
