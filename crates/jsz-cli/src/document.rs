//! Script documents: a serialized tree plus the names it references.
//!
//! ```json
//! { "names": ["console", "log"], "body": { "statements": [...], "global": true } }
//! ```
//!
//! `names[i]` is the text of atom `i + 1`; atom 0 stays the empty name.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use jsz_ast::Block;
use jsz_common::Interner;

#[derive(Debug, Deserialize)]
pub struct ScriptDocument {
    #[serde(default)]
    pub names: Vec<String>,
    pub body: Block,
}

impl ScriptDocument {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid script document")
    }

    /// Read a document from `path`, or from stdin when `path` is `None`.
    pub fn read(path: Option<&Path>) -> Result<Self> {
        let text = match path {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read stdin")?;
                text
            }
        };
        Self::parse(&text)
    }

    /// Intern the name table so that `names[i]` becomes atom `i + 1`.
    pub fn interner(&self) -> Result<Interner> {
        let mut interner = Interner::new();
        for (i, name) in self.names.iter().enumerate() {
            if name.is_empty() {
                bail!("name #{i} is empty");
            }
            let atom = interner.intern(name);
            if atom.index() as usize != i + 1 {
                bail!("duplicate name `{name}` at index {i}");
            }
        }
        tracing::debug!(names = self.names.len(), "interned document names");
        Ok(interner)
    }
}

#[cfg(test)]
#[path = "../tests/document.rs"]
mod tests;
