//! Typed view of the serialized ALCL syntax tree.
//!
//! The compiler writes nodes as loosely-typed JSON objects:
//!
//! ```json
//! { "type": 4, "value": "add", "children": [], "analysisType": { "_type": "Int" } }
//! ```
//!
//! Module roots are only containers: their `children` are read, any tag or
//! value they carry is ignored. Everything is decoded once here, so traversal
//! code only ever sees [`NodeKind`] and an optional [`ResolvedType`].

use crate::model::ResolvedType;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Node kinds the documentation extractor cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    FunctionDecl,
    Parameter,
    NativeMarker,
    ExternMarker,
    /// Any other tag; carried for diagnostics only.
    Other(u32),
}

impl NodeKind {
    const FUNCTION_DECL: u32 = 4;
    const PARAMETER: u32 = 5;
    const NATIVE_MARKER: u32 = 9;
    const EXTERN_MARKER: u32 = 10;

    pub fn from_tag(tag: u32) -> Self {
        match tag {
            Self::FUNCTION_DECL => NodeKind::FunctionDecl,
            Self::PARAMETER => NodeKind::Parameter,
            Self::NATIVE_MARKER => NodeKind::NativeMarker,
            Self::EXTERN_MARKER => NodeKind::ExternMarker,
            other => NodeKind::Other(other),
        }
    }

    pub fn tag(self) -> u32 {
        match self {
            NodeKind::FunctionDecl => Self::FUNCTION_DECL,
            NodeKind::Parameter => Self::PARAMETER,
            NodeKind::NativeMarker => Self::NATIVE_MARKER,
            NodeKind::ExternMarker => Self::EXTERN_MARKER,
            NodeKind::Other(tag) => tag,
        }
    }
}

/// A single syntax tree node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawNode")]
pub struct AstNode {
    pub kind: NodeKind,
    pub value: Option<String>,
    pub children: Vec<AstNode>,
    /// Flattened from `analysisType._type`.
    pub resolved_type: Option<ResolvedType>,
}

impl AstNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            value: None,
            children: Vec::new(),
            resolved_type: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_type(mut self, ty: impl Into<ResolvedType>) -> Self {
        self.resolved_type = Some(ty.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = AstNode>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Wire shape of a node, before kind and type resolution.
#[derive(Deserialize)]
struct RawNode {
    #[serde(rename = "type", alias = "kind")]
    kind: u32,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    children: Vec<AstNode>,
    #[serde(default, rename = "analysisType")]
    analysis_type: Option<RawAnalysisType>,
}

#[derive(Deserialize)]
struct RawAnalysisType {
    #[serde(default, rename = "_type")]
    ty: Value,
}

impl From<RawNode> for AstNode {
    fn from(raw: RawNode) -> Self {
        AstNode {
            kind: NodeKind::from_tag(raw.kind),
            value: scalar_text(raw.value),
            children: raw.children,
            // An empty type name means "no type", as for a missing one.
            resolved_type: raw
                .analysis_type
                .and_then(|a| scalar_text(a.ty))
                .filter(|ty| !ty.is_empty())
                .map(ResolvedType::from),
        }
    }
}

/// Literal nodes carry numeric or boolean values; keep their JSON text.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Top-level node of one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleRoot {
    #[serde(default)]
    pub children: Vec<AstNode>,
}

impl ModuleRoot {
    pub fn new(children: impl IntoIterator<Item = AstNode>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }
}

/// Module name → module root, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Ast {
    modules: IndexMap<String, ModuleRoot>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a module. A replaced module keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, root: ModuleRoot) -> Option<ModuleRoot> {
        self.modules.insert(name.into(), root)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModuleRoot)> {
        self.modules.iter().map(|(name, root)| (name.as_str(), root))
    }
}

impl<S: Into<String>> FromIterator<(S, ModuleRoot)> for Ast {
    fn from_iter<I: IntoIterator<Item = (S, ModuleRoot)>>(iter: I) -> Self {
        let mut ast = Ast::new();
        for (name, root) in iter {
            ast.insert(name, root);
        }
        ast
    }
}

impl IntoIterator for Ast {
    type Item = (String, ModuleRoot);
    type IntoIter = indexmap::map::IntoIter<String, ModuleRoot>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags() {
        assert_eq!(NodeKind::from_tag(4), NodeKind::FunctionDecl);
        assert_eq!(NodeKind::from_tag(5), NodeKind::Parameter);
        assert_eq!(NodeKind::from_tag(9), NodeKind::NativeMarker);
        assert_eq!(NodeKind::from_tag(10), NodeKind::ExternMarker);
        assert_eq!(NodeKind::from_tag(0), NodeKind::Other(0));
        assert_eq!(NodeKind::from_tag(42).tag(), 42);
        assert_eq!(NodeKind::ExternMarker.tag(), 10);
    }

    #[test]
    fn decodes_compiler_node() {
        let json = r#"{
            "type": 4,
            "value": "add",
            "children": [
                { "type": 5, "value": "a", "children": [], "analysisType": { "_type": "Int" } }
            ],
            "analysisType": { "_type": "Int", "nullable": false }
        }"#;
        let node: AstNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, NodeKind::FunctionDecl);
        assert_eq!(node.value.as_deref(), Some("add"));
        assert_eq!(node.resolved_type, Some(ResolvedType::from("Int")));
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].kind, NodeKind::Parameter);
    }

    #[test]
    fn missing_fields_degrade() {
        let node: AstNode = serde_json::from_str(r#"{ "kind": 9 }"#).unwrap();
        assert_eq!(node.kind, NodeKind::NativeMarker);
        assert!(node.value.is_none());
        assert!(node.children.is_empty());
        assert!(node.resolved_type.is_none());

        let node: AstNode =
            serde_json::from_str(r#"{ "type": 4, "analysisType": null }"#).unwrap();
        assert!(node.resolved_type.is_none());

        let node: AstNode =
            serde_json::from_str(r#"{ "type": 4, "analysisType": {} }"#).unwrap();
        assert!(node.resolved_type.is_none());
    }

    #[test]
    fn literal_values_keep_json_text() {
        let node: AstNode = serde_json::from_str(r#"{ "type": 20, "value": 10.5 }"#).unwrap();
        assert_eq!(node.kind, NodeKind::Other(20));
        assert_eq!(node.value.as_deref(), Some("10.5"));
    }

    #[test]
    fn ast_preserves_key_order() {
        let json = r#"{
            "zeta": { "type": 0, "children": [] },
            "alpha": { "type": 0, "children": [] },
            "mid": { "type": 0, "children": [] }
        }"#;
        let ast: Ast = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = ast.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn empty_type_name_is_absent() {
        let node: AstNode =
            serde_json::from_str(r#"{ "type": 4, "analysisType": { "_type": "" } }"#).unwrap();
        assert!(node.resolved_type.is_none());
    }

    #[test]
    fn module_root_needs_only_children() {
        let ast: Ast = serde_json::from_str(
            r#"{ "m": { "children": [ { "type": 4, "value": "f" } ] }, "bare": {} }"#,
        )
        .unwrap();
        let roots: Vec<(&str, usize)> = ast.iter().map(|(n, root)| (n, root.children.len())).collect();
        assert_eq!(roots, [("m", 1), ("bare", 0)]);
    }

    #[test]
    fn module_root_ignores_its_own_tag() {
        let ast: Ast =
            serde_json::from_str(r#"{ "m": { "type": 1, "value": null, "children": [] } }"#)
                .unwrap();
        assert_eq!(ast.len(), 1);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut ast: Ast = [("a", ModuleRoot::default()), ("b", ModuleRoot::default())]
            .into_iter()
            .collect();
        let replacement = ModuleRoot::new([AstNode::new(NodeKind::FunctionDecl)]);
        let previous = ast.insert("a", replacement);
        assert!(previous.is_some());
        let roots: Vec<(&str, usize)> = ast.iter().map(|(n, root)| (n, root.children.len())).collect();
        assert_eq!(roots, [("a", 1), ("b", 0)]);
    }
}
