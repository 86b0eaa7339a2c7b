//! Loading serialized syntax trees from disk.

use crate::ast::Ast;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to turn an AST file into an [`Ast`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("AST file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read AST file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed AST in {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode an AST document from a JSON string.
///
/// Expression trees nest arbitrarily deep, so the parser's recursion limit is
/// lifted and the stack grows on demand instead.
pub fn parse(content: &str) -> Result<Ast, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(content);
    de.disable_recursion_limit();
    let ast = Ast::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(ast)
}

/// Read and decode a single AST file.
pub fn load(path: &Path) -> Result<Ast, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse(&content).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Load several AST files into one tree, in argument order.
///
/// A module defined again by a later file replaces the earlier root but keeps
/// its original position.
pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<Ast, LoadError> {
    let mut merged = Ast::new();
    for path in paths {
        let path = path.as_ref();
        for (name, root) in load(path)? {
            if merged.insert(name.clone(), root).is_some() {
                tracing::warn!(module = %name, file = %path.display(), "module redefined");
            }
        }
    }
    Ok(merged)
}
