//! alcl-apidoc — API documentation from serialized ALCL syntax trees.
//!
//! - `ast`: typed input boundary (node kinds, resolved types, module mapping)
//! - `loader`: reading AST files from disk
//! - `extract`: AST → documentation model
//! - `model`: modules, functions, parameters
//! - `render`: text, HTML, Markdown and JSON output

pub mod ast;
pub mod extract;
pub mod loader;
pub mod model;
pub mod render;
mod toc;

pub use ast::{Ast, AstNode, ModuleRoot, NodeKind};
pub use extract::extract;
pub use loader::LoadError;
pub use model::{Function, Module, Parameter, ResolvedType};
