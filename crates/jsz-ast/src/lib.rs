//! JavaScript syntax tree for the jsz printer.
//!
//! The tree is a closed set of statement and expression kinds. Nodes own their
//! children; identifier names are interned `Atom`s resolved through the
//! `jsz_common::Interner` the tree was built with.

pub mod node;
pub use node::{
    Block, CatchClause, DocComment, DocTag, DocTagValue, Expression, ForInit, Function,
    ObjectLiteral, PropertyInitializer, PropertyLabel, Statement, SwitchMember, VarDeclaration,
    VarDeclarations,
};

pub mod operators;
pub use operators::{Associativity, BinaryOperator, UnaryOperator};

pub use jsz_common::{Atom, Interner};
