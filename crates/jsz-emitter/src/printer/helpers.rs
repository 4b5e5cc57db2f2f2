use jsz_ast::Expression;
use jsz_common::Atom;

use super::Printer;
use crate::error::{EmitError, EmitResult};
use crate::precedence::{needs_comma_parens, needs_parens};
use crate::source_writer::TextOutput;

impl<'a, O: TextOutput + ?Sized> Printer<'a, O> {
    // =========================================================================
    // Output Helpers (delegate to the sink)
    // =========================================================================

    pub(super) fn print_text(&mut self, text: &str) -> EmitResult {
        self.out.print(text)?;
        Ok(())
    }

    pub(super) fn print_opt(&mut self, text: &str) -> EmitResult {
        self.out.print_opt(text)?;
        Ok(())
    }

    pub(super) fn space_opt(&mut self) -> EmitResult {
        self.print_opt(" ")
    }

    pub(super) fn newline(&mut self) -> EmitResult {
        self.out.newline()?;
        Ok(())
    }

    /// Line break in pretty output only.
    pub(super) fn newline_opt(&mut self) -> EmitResult {
        if self.out.is_compact() {
            return Ok(());
        }
        self.newline()
    }

    pub(super) fn indent_in(&mut self) {
        self.out.indent_in();
    }

    pub(super) fn indent_out(&mut self) {
        self.out.indent_out();
    }

    pub(super) fn is_compact(&self) -> bool {
        self.out.is_compact()
    }

    // =========================================================================
    // Name Helpers
    // =========================================================================

    /// Resolve a name atom; the empty atom and unknown atoms are faults.
    pub(super) fn resolve_name(&self, node: &'static str, atom: Atom) -> EmitResult<&'a str> {
        match self.names.try_resolve(atom) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(EmitError::UnresolvedName { node, atom }),
        }
    }

    pub(super) fn print_name(&mut self, node: &'static str, atom: Atom) -> EmitResult {
        let name = self.resolve_name(node, atom)?;
        self.print_text(name)
    }

    // =========================================================================
    // Grouping Helpers
    // =========================================================================

    /// Print `child` as an operand of `parent`, parenthesized when the oracle
    /// says so. Returns whether parentheses were printed.
    pub(super) fn print_operand(
        &mut self,
        parent: &Expression,
        child: &Expression,
        wrong_assoc: bool,
    ) -> EmitResult<bool> {
        let parens = needs_parens(parent, child, wrong_assoc);
        self.print_grouped(child, parens)?;
        Ok(parens)
    }

    pub(super) fn print_grouped(&mut self, expr: &Expression, parens: bool) -> EmitResult {
        if parens {
            self.print_text("(")?;
        }
        self.emit_expression(expr)?;
        if parens {
            self.print_text(")")?;
        }
        Ok(())
    }

    /// Print an initializer, element or argument; a top-level comma
    /// expression is wrapped so it does not read as a separator.
    pub(super) fn print_list_item(&mut self, expr: &Expression) -> EmitResult {
        self.print_grouped(expr, needs_comma_parens(expr))
    }

    /// Comma-separated elements or arguments. A doc comment annotates the item
    /// after it, so no separator follows one.
    pub(super) fn print_list(&mut self, items: &[Expression]) -> EmitResult {
        let mut previous: Option<&Expression> = None;
        for item in items {
            if let Some(previous) = previous
                && !matches!(previous, Expression::DocComment(_))
            {
                self.print_text(",")?;
                self.space_opt()?;
            }
            self.print_list_item(item)?;
            previous = Some(item);
        }
        Ok(())
    }
}
