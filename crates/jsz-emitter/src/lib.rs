//! JavaScript source printer.
//!
//! Turns a `jsz_ast` tree into valid JavaScript text, either pretty (indented,
//! one statement per line) or compact (no optional whitespace at all).
//!
//! ```
//! use jsz_ast::{BinaryOperator, Expression, Interner, Statement};
//! use jsz_emitter::{print_to_string, PrinterOptions};
//!
//! let mut names = Interner::new();
//! let a = names.intern("a");
//! let b = names.intern("b");
//! let stmt = Statement::expr(Expression::assign(
//!     Expression::name(a),
//!     Expression::binary(Expression::name(b), BinaryOperator::Add, Expression::Int(1)),
//! ));
//!
//! let text = print_to_string(&stmt, &names, &PrinterOptions::compact()).unwrap();
//! assert_eq!(text, "a=b+1;");
//! ```

pub mod error;
pub use error::{EmitError, EmitResult};

pub mod options;
pub use options::PrinterOptions;

pub mod precedence;

pub mod printer;
pub use printer::{Node, Printer, StatementEnd, print_to_string};

pub mod source_writer;
pub use source_writer::{SourceWriter, TextOutput};

pub mod spacing;

pub mod string_literal;
pub use string_literal::javascript_string;
