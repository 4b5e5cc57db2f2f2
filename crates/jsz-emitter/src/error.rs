//! Faults raised while printing a tree.

use jsz_common::Atom;

/// Error that aborts a print.
///
/// Every variant except `Sink` points at an upstream defect in the tree.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("malformed {node} node: missing {field}")]
    MissingField {
        node: &'static str,
        field: &'static str,
    },

    #[error("malformed {node} node: `{operator}` is not valid here")]
    InvalidOperator {
        node: &'static str,
        operator: &'static str,
    },

    #[error("{node} node references unknown name atom {}", .atom.index())]
    UnresolvedName { node: &'static str, atom: Atom },

    #[error("unsupported node kind: {kind}")]
    UnsupportedNode { kind: &'static str },

    #[error(transparent)]
    Sink(#[from] std::fmt::Error),
}

impl EmitError {
    pub(crate) const fn missing(node: &'static str, field: &'static str) -> Self {
        Self::MissingField { node, field }
    }
}

pub type EmitResult<T = ()> = Result<T, EmitError>;
