//! Data model for extracted documentation — format-agnostic.
//!
//! Values are built by [`crate::extract`] in a single pass and never mutated
//! afterwards, so a finished `Vec<Module>` can be shared freely between readers.

use serde::Serialize;
use std::fmt;

/// A type already resolved by the compiler's analysis phase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResolvedType(String);

impl ResolvedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResolvedType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ResolvedType {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A single formal argument of a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    name: String,
    /// `None` when the AST node carried no resolved type.
    #[serde(rename = "type")]
    ty: Option<ResolvedType>,
    description: String,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        ty: Option<ResolvedType>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty,
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> Option<&ResolvedType> {
        self.ty.as_ref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// `x: Int`. A missing type is shown as `?`.
impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            Some(ref ty) => write!(f, "{}: {}", self.name, ty),
            None => write!(f, "{}: ?", self.name),
        }
    }
}

/// A single documented function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    name: String,
    description: String,
    /// Declaration order
    parameters: Vec<Parameter>,
    /// Body is provided by a native or extern implementation
    is_native: bool,
    returns: Option<ResolvedType>,
}

impl Function {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            is_native: false,
            returns: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn is_native(&self) -> bool {
        self.is_native
    }

    pub fn returns(&self) -> Option<&ResolvedType> {
        self.returns.as_ref()
    }

    pub fn add_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    /// Last write wins.
    pub fn set_returns(&mut self, returns: Option<ResolvedType>) {
        self.returns = returns;
    }

    pub fn mark_native(&mut self) {
        self.is_native = true;
    }
}

/// `name(a: Int, b: Str): Bool`, or `name()` without parameters or return type.
impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
        }
        f.write_str(")")?;
        if let Some(ref returns) = self.returns {
            write!(f, ": {}", returns)?;
        }
        Ok(())
    }
}

/// Documentation for one compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    name: String,
    /// Always empty: the AST has no module-level doc comments.
    description: String,
    functions: Vec<Function>,
}

impl Module {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            functions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn add_function(&mut self, function: Function) {
        self.functions.push(function);
    }

    /// First function with the given name, in declaration order.
    pub fn find_function(&self, name: &str) -> Option<&Function> {
        self.find_function_index(name).map(|i| &self.functions[i])
    }

    /// Position of the first function with the given name.
    pub fn find_function_index(&self, name: &str) -> Option<usize> {
        self.functions.iter().position(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> Option<ResolvedType> {
        Some(ResolvedType::from("Int"))
    }

    #[test]
    fn parameter_display() {
        let param = Parameter::new("x", int(), "");
        assert_eq!(param.to_string(), "x: Int");
    }

    #[test]
    fn parameter_display_missing_type() {
        let param = Parameter::new("x", None, "");
        assert_eq!(param.to_string(), "x: ?");
    }

    #[test]
    fn function_display_bare() {
        let func = Function::new("main", "");
        assert_eq!(func.to_string(), "main()");
        assert!(!func.is_native());
        assert!(func.returns().is_none());
    }

    #[test]
    fn function_display_full() {
        let mut func = Function::new("add", "");
        func.add_parameter(Parameter::new("a", int(), ""));
        func.add_parameter(Parameter::new("b", int(), ""));
        func.set_returns(int());
        assert_eq!(func.to_string(), "add(a: Int, b: Int): Int");
    }

    #[test]
    fn function_display_no_return() {
        let mut func = Function::new("log", "");
        func.add_parameter(Parameter::new("msg", Some("String".into()), ""));
        assert_eq!(func.to_string(), "log(msg: String)");
    }

    #[test]
    fn set_returns_last_write_wins() {
        let mut func = Function::new("f", "");
        func.set_returns(int());
        func.set_returns(Some("Bool".into()));
        assert_eq!(func.returns().map(ResolvedType::as_str), Some("Bool"));
        func.set_returns(None);
        assert_eq!(func.to_string(), "f()");
    }

    #[test]
    fn mark_native_is_idempotent() {
        let mut func = Function::new("printf", "");
        func.mark_native();
        func.mark_native();
        assert!(func.is_native());
    }

    #[test]
    fn parameters_keep_insertion_order() {
        let mut func = Function::new("f", "");
        for name in ["c", "a", "b", "a"] {
            func.add_parameter(Parameter::new(name, int(), ""));
        }
        let names: Vec<&str> = func.parameters().iter().map(Parameter::name).collect();
        assert_eq!(names, ["c", "a", "b", "a"]);
    }

    #[test]
    fn find_function_first_match() {
        let mut module = Module::new("m", "");
        module.add_function(Function::new("a", ""));
        let mut dup = Function::new("b", "");
        dup.mark_native();
        module.add_function(dup);
        module.add_function(Function::new("b", ""));

        let found = module.find_function("b").unwrap();
        assert!(found.is_native());
        assert_eq!(module.find_function_index("b"), Some(1));
        assert_eq!(module.find_function_index("a"), Some(0));
    }

    #[test]
    fn find_function_and_index_agree_on_absence() {
        let mut module = Module::new("m", "");
        module.add_function(Function::new("a", ""));
        assert!(module.find_function("missing").is_none());
        assert_eq!(module.find_function_index("missing"), None);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let mut func = Function::new("f", "");
        func.add_parameter(Parameter::new("x", int(), ""));
        func.mark_native();
        let json = serde_json::to_value(&func).unwrap();
        assert_eq!(json["isNative"], true);
        assert_eq!(json["returns"], serde_json::Value::Null);
        assert_eq!(json["parameters"][0]["type"], "Int");
    }
}
