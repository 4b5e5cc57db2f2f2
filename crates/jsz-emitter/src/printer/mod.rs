//! JavaScript printer.
//!
//! Walks a statement or expression tree depth-first and writes it to a
//! `TextOutput` in grammar order. Parenthesization comes from the precedence
//! oracle, mandatory spaces from the spacing policy, and statement
//! terminators from the `StatementEnd` each statement emission returns.
//!
//! The printer never edits the tree and keeps no per-node state: everything a
//! child needs to know about its context (the enclosing global scope, the
//! operand side of a binary operator) is passed down as an argument.
//!
//! # Module Organization
//!
//! - `helpers.rs` - output and name helpers shared by the other modules
//! - `blocks.rs` - block bodies, statement lists, truncation
//! - `statements.rs` - statement emission and terminators
//! - `expressions.rs` - expression emission, literals, functions

use jsz_ast::{Block, Expression, Statement};
use jsz_common::Interner;

use crate::error::EmitResult;
use crate::options::PrinterOptions;
use crate::source_writer::{SourceWriter, TextOutput};

mod blocks;
mod expressions;
mod helpers;
mod statements;

/// How a printed statement must be closed before the next one.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatementEnd {
    /// The statement closed itself with a brace; an optional line break follows.
    Closed,
    /// Function declaration: a mandatory line break follows, optional when it
    /// is the last statement of a braced block.
    LineBreak,
    /// A `;` follows, optional when it is the last statement of a braced block.
    Semicolon,
}

/// A node the printer can start from.
#[derive(Clone, Copy, Debug)]
pub enum Node<'n> {
    Statement(&'n Statement),
    Expression(&'n Expression),
    Block(&'n Block),
}

impl<'n> From<&'n Statement> for Node<'n> {
    fn from(statement: &'n Statement) -> Self {
        Self::Statement(statement)
    }
}

impl<'n> From<&'n Expression> for Node<'n> {
    fn from(expression: &'n Expression) -> Self {
        Self::Expression(expression)
    }
}

impl<'n> From<&'n Block> for Node<'n> {
    fn from(block: &'n Block) -> Self {
        Self::Block(block)
    }
}

/// Prints trees to a borrowed sink.
///
/// A printer holds no state between calls beyond its sink, so one printer can
/// print several trees into the same output.
pub struct Printer<'a, O: TextOutput + ?Sized = SourceWriter> {
    out: &'a mut O,
    names: &'a Interner,
    options: &'a PrinterOptions,
}

impl<'a, O: TextOutput + ?Sized> Printer<'a, O> {
    pub fn new(out: &'a mut O, names: &'a Interner, options: &'a PrinterOptions) -> Self {
        Self {
            out,
            names,
            options,
        }
    }

    /// Print `node` and everything below it.
    ///
    /// A statement other than a block is followed by its terminator, so
    /// printing statements one after another yields a valid script.
    pub fn print<'n>(&mut self, node: impl Into<Node<'n>>) -> EmitResult {
        let node = node.into();
        tracing::debug!(
            kind = node.kind_name(),
            compact = self.out.is_compact(),
            "printing node"
        );

        match node {
            Node::Expression(expr) => self.emit_expression(expr),
            Node::Block(block) | Node::Statement(Statement::Block(block)) => {
                self.emit_block(block, false)
            }
            Node::Statement(Statement::Empty) => Ok(()),
            Node::Statement(statement) => {
                let end = self.emit_statement(statement)?;
                self.terminate(end, false, statement)
            }
        }
    }
}

impl Node<'_> {
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Statement(statement) => statement.kind_name(),
            Self::Expression(expr) => expr.kind_name(),
            Self::Block(_) => "Block",
        }
    }
}

/// Print `node` into a fresh `SourceWriter` configured from `options`.
pub fn print_to_string<'n>(
    node: impl Into<Node<'n>>,
    names: &Interner,
    options: &PrinterOptions,
) -> EmitResult<String> {
    let mut out = SourceWriter::new(options.compact).with_indent(options.indent.clone());
    Printer::new(&mut out, names, options).print(node)?;
    let text = out.finish();
    tracing::debug!(bytes = text.len(), "print finished");
    Ok(text)
}
