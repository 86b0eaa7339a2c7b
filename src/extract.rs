//! AST → documentation model.
//!
//! One pass over the tree. Module order follows the AST's key order, function
//! order follows the module root's children, parameter order follows each
//! function node's children. Unknown node kinds are skipped.

use crate::ast::{Ast, AstNode, ModuleRoot, NodeKind};
use crate::model::{Function, Module, Parameter};

/// Extract documentation for every module in the tree.
pub fn extract(ast: &Ast) -> Vec<Module> {
    ast.iter()
        .map(|(name, root)| extract_module(name, root))
        .collect()
}

fn extract_module(name: &str, root: &ModuleRoot) -> Module {
    let mut module = Module::new(name, "");

    for child in &root.children {
        match child.kind {
            NodeKind::FunctionDecl => module.add_function(extract_function(name, child)),
            NodeKind::Parameter
            | NodeKind::NativeMarker
            | NodeKind::ExternMarker
            | NodeKind::Other(_) => {}
        }
    }

    tracing::debug!(
        module = name,
        functions = module.functions().len(),
        "extracted module"
    );
    module
}

fn extract_function(module: &str, node: &AstNode) -> Function {
    let name = node_name(module, node);
    let mut func = Function::new(name, "");

    for child in &node.children {
        match child.kind {
            NodeKind::Parameter => {
                let param_name = node_name(module, child);
                func.add_parameter(Parameter::new(param_name, child.resolved_type.clone(), ""));
            }
            NodeKind::NativeMarker | NodeKind::ExternMarker => func.mark_native(),
            NodeKind::FunctionDecl | NodeKind::Other(_) => {
                tracing::trace!(
                    module,
                    function = func.name(),
                    kind = child.kind.tag(),
                    "skipping node"
                );
            }
        }
    }

    // Return type lives on the function node itself, not on any child.
    func.set_returns(node.resolved_type.clone());
    func
}

/// Identifier of a function or parameter node. Nameless nodes degrade to "".
fn node_name<'a>(module: &str, node: &'a AstNode) -> &'a str {
    match node.value.as_deref() {
        Some(value) => value,
        None => {
            tracing::warn!(module, kind = node.kind.tag(), "node has no identifier");
            ""
        }
    }
}
