use jsz_ast::{Block, Statement};
use jsz_common::limits::ELISION_MARKER;

use super::{Printer, StatementEnd};
use crate::error::EmitResult;
use crate::source_writer::TextOutput;

impl<'a, O: TextOutput + ?Sized> Printer<'a, O> {
    /// Print a block: braced unless `block.global`.
    ///
    /// `in_global_scope` is set while printing a block that sits directly in a
    /// global (or transiently global) block. Such blocks are exempt from
    /// truncation; every other block is summarized when truncation is on.
    pub(super) fn emit_block(&mut self, block: &Block, in_global_scope: bool) -> EmitResult {
        self.emit_statement_list(
            &block.statements,
            !block.global,
            block.global || in_global_scope,
            in_global_scope,
        )
    }

    /// Print a function, `try`, `catch` or `finally` body, which is braced
    /// whatever its block says.
    pub(super) fn emit_braced_body(&mut self, block: &Block) -> EmitResult {
        self.emit_statement_list(&block.statements, true, false, false)
    }

    /// Print a statement list. `nested_global` is the scope flag handed to
    /// blocks that appear directly in the list.
    fn emit_statement_list(
        &mut self,
        statements: &[Statement],
        braced: bool,
        nested_global: bool,
        in_global_scope: bool,
    ) -> EmitResult {
        let limit = (self.options.truncate && !in_global_scope)
            .then_some(self.options.truncate_limit);

        if braced {
            if statements.iter().all(Statement::is_empty) {
                return self.print_text("{}");
            }
            self.print_text("{")?;
            self.indent_in();
            self.newline_opt()?;
        }

        let mut statements = statements.iter().filter(|s| !s.is_empty()).peekable();
        let mut printed = 0usize;
        while let Some(statement) = statements.next() {
            if limit.is_some_and(|limit| printed >= limit) {
                tracing::trace!(printed, "block truncated");
                self.print_text(ELISION_MARKER)?;
                self.newline_opt()?;
                break;
            }

            tracing::trace!(kind = statement.kind_name(), "block statement");
            let end = match statement {
                Statement::Block(inner) => {
                    self.emit_block(inner, nested_global)?;
                    StatementEnd::Closed
                }
                _ => self.emit_statement(statement)?,
            };
            let is_last = braced && statements.peek().is_none();
            self.terminate(end, is_last, statement)?;
            printed += 1;
        }

        if braced {
            self.indent_out();
            self.print_text("}")?;
        }
        Ok(())
    }

    /// Close a statement inside a statement list.
    pub(super) fn terminate(
        &mut self,
        end: StatementEnd,
        is_last: bool,
        statement: &Statement,
    ) -> EmitResult {
        match end {
            StatementEnd::Closed => self.newline_opt(),
            StatementEnd::LineBreak if is_last => self.newline_opt(),
            StatementEnd::LineBreak => self.newline(),
            StatementEnd::Semicolon => {
                if is_last && !trailing_statement_is_empty(statement) {
                    self.print_opt(";")?;
                } else {
                    self.print_text(";")?;
                }
                self.newline_opt()
            }
        }
    }
}

/// Whether the statement ends in an empty statement (`if(a);`, `l:;`), whose
/// `;` is the statement itself and cannot be dropped.
fn trailing_statement_is_empty(statement: &Statement) -> bool {
    match statement {
        Statement::Empty => true,
        Statement::If {
            then_branch,
            else_branch,
            ..
        } => trailing_statement_is_empty(else_branch.as_deref().unwrap_or(then_branch)),
        Statement::While { body, .. }
        | Statement::For { body, .. }
        | Statement::ForIn { body, .. }
        | Statement::Labeled { body, .. } => trailing_statement_is_empty(body),
        _ => false,
    }
}

#[cfg(test)]
#[path = "../../tests/blocks.rs"]
mod tests;
