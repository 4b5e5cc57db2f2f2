use jsz_ast::{Atom, CatchClause, Expression, ForInit, Statement, SwitchMember, VarDeclarations};

use super::{Printer, StatementEnd};
use crate::error::{EmitError, EmitResult};
use crate::precedence::{contains_in_operator, needs_comma_parens, starts_with_function_or_brace};
use crate::source_writer::TextOutput;

impl<'a, O: TextOutput + ?Sized> Printer<'a, O> {
    /// Print one statement without its terminator.
    pub(super) fn emit_statement(&mut self, statement: &Statement) -> EmitResult<StatementEnd> {
        match statement {
            Statement::Block(block) => {
                self.emit_block(block, false)?;
                Ok(StatementEnd::Closed)
            }
            Statement::If {
                condition,
                then_branch,
                else_branch,
            } => self.emit_if(condition, then_branch, else_branch.as_deref()),
            Statement::While { condition, body } => {
                self.print_text("while")?;
                self.emit_paren_head(condition)?;
                self.emit_nested(body, false)
            }
            Statement::DoWhile { body, condition } => {
                self.print_text("do")?;
                let end = self.emit_nested(body, true)?;
                self.separate_continuation(end)?;
                self.print_text("while")?;
                self.emit_paren_head(condition)?;
                Ok(StatementEnd::Semicolon)
            }
            Statement::For {
                init,
                condition,
                increment,
                body,
            } => self.emit_for(init.as_ref(), condition.as_ref(), increment.as_ref(), body),
            Statement::ForIn {
                iter_var,
                iter_expr,
                object,
                body,
            } => {
                self.print_text("for")?;
                self.space_opt()?;
                self.print_text("(")?;
                if let Some(var) = iter_var {
                    self.print_text("var ")?;
                    self.print_name("ForIn", *var)?;
                    if let Some(init) = iter_expr {
                        self.space_opt()?;
                        self.print_text("=")?;
                        self.space_opt()?;
                        self.print_for_init_expression(init)?;
                    }
                } else {
                    let target = iter_expr
                        .as_ref()
                        .ok_or(EmitError::missing("ForIn", "iteration target"))?;
                    self.print_for_init_expression(target)?;
                }
                let object = object.as_ref().ok_or(EmitError::missing("ForIn", "object"))?;
                self.print_text(" in ")?;
                self.emit_expression(object)?;
                self.print_text(")")?;
                self.emit_nested(body, false)
            }
            Statement::Switch {
                discriminant,
                cases,
            } => {
                self.emit_switch(discriminant, cases)?;
                Ok(StatementEnd::Closed)
            }
            Statement::Try {
                try_block,
                catches,
                finally_block,
            } => {
                if catches.is_empty() && finally_block.is_none() {
                    return Err(EmitError::missing("Try", "catch or finally clause"));
                }
                self.print_text("try")?;
                self.space_opt()?;
                self.emit_braced_body(try_block)?;
                for catch in catches {
                    self.emit_catch(catch)?;
                }
                if let Some(finally_block) = finally_block {
                    self.space_opt()?;
                    self.print_text("finally")?;
                    self.space_opt()?;
                    self.emit_braced_body(finally_block)?;
                }
                Ok(StatementEnd::Closed)
            }
            Statement::Return(value) => {
                self.print_text("return")?;
                if let Some(value) = value {
                    self.print_text(" ")?;
                    self.emit_expression(value)?;
                }
                Ok(StatementEnd::Semicolon)
            }
            Statement::Throw(value) => {
                self.print_text("throw ")?;
                self.emit_expression(value)?;
                Ok(StatementEnd::Semicolon)
            }
            Statement::Break(label) => self.emit_jump("break", "Break", *label),
            Statement::Continue(label) => self.emit_jump("continue", "Continue", *label),
            Statement::Labeled { label, body } => {
                self.print_name("Labeled", *label)?;
                self.print_text(":")?;
                if let Statement::Block(block) = body.as_ref() {
                    self.space_opt()?;
                    self.emit_block(block, false)?;
                    return Ok(StatementEnd::Closed);
                }
                if !body.is_empty() {
                    self.space_opt()?;
                }
                self.emit_statement(body)
            }
            Statement::Expression(expr) => self.emit_expression_statement(expr),
            Statement::Vars(vars) => {
                self.emit_vars(vars, false)?;
                Ok(StatementEnd::Semicolon)
            }
            // The terminator alone is the statement.
            Statement::Empty => Ok(StatementEnd::Semicolon),
            Statement::Debugger => {
                self.print_text("debugger")?;
                Ok(StatementEnd::Semicolon)
            }
            _ => Err(EmitError::UnsupportedNode {
                kind: statement.kind_name(),
            }),
        }
    }

    /// ` (condition)` after `if`, `while`, `switch`.
    fn emit_paren_head(&mut self, condition: &Expression) -> EmitResult {
        self.space_opt()?;
        self.print_text("(")?;
        self.emit_expression(condition)?;
        self.print_text(")")
    }

    /// Print the body of a compound statement.
    ///
    /// A block stays on the current line. Anything else goes on its own
    /// indented line in pretty output; after a keyword (`else`, `do`) compact
    /// output needs a space instead.
    fn emit_nested(&mut self, body: &Statement, after_keyword: bool) -> EmitResult<StatementEnd> {
        match body {
            Statement::Block(block) => {
                self.space_opt()?;
                self.emit_block(block, false)?;
                Ok(StatementEnd::Closed)
            }
            Statement::Empty => Ok(StatementEnd::Semicolon),
            _ => {
                if after_keyword && self.is_compact() {
                    self.print_text(" ")?;
                }
                self.indent_in();
                self.newline_opt()?;
                let end = self.emit_statement(body);
                self.indent_out();
                end
            }
        }
    }

    /// Separate a body from a following `else` or `while`.
    fn separate_continuation(&mut self, end: StatementEnd) -> EmitResult {
        match end {
            StatementEnd::Closed => self.space_opt(),
            StatementEnd::LineBreak => self.newline(),
            StatementEnd::Semicolon => {
                self.print_text(";")?;
                self.newline_opt()
            }
        }
    }

    fn emit_if(
        &mut self,
        condition: &Expression,
        then_branch: &Statement,
        else_branch: Option<&Statement>,
    ) -> EmitResult<StatementEnd> {
        self.print_text("if")?;
        self.emit_paren_head(condition)?;

        let Some(else_branch) = else_branch else {
            return self.emit_nested(then_branch, false);
        };

        // An else-less `if` at the end of the then-branch would capture our `else`.
        let then_end = if ends_with_open_if(then_branch) {
            self.space_opt()?;
            self.emit_wrapped_in_braces(then_branch)?;
            StatementEnd::Closed
        } else {
            self.emit_nested(then_branch, false)?
        };
        self.separate_continuation(then_end)?;
        self.print_text("else")?;

        if matches!(else_branch, Statement::If { .. }) {
            self.print_text(" ")?;
            self.emit_statement(else_branch)
        } else {
            self.emit_nested(else_branch, true)
        }
    }

    fn emit_wrapped_in_braces(&mut self, statement: &Statement) -> EmitResult {
        self.print_text("{")?;
        self.indent_in();
        self.newline_opt()?;
        let end = self.emit_statement(statement)?;
        self.terminate(end, true, statement)?;
        self.indent_out();
        self.print_text("}")
    }

    fn emit_for(
        &mut self,
        init: Option<&ForInit>,
        condition: Option<&Expression>,
        increment: Option<&Expression>,
        body: &Statement,
    ) -> EmitResult<StatementEnd> {
        self.print_text("for")?;
        self.space_opt()?;
        self.print_text("(")?;
        match init {
            Some(ForInit::Vars(vars)) => self.emit_vars(vars, true)?,
            Some(ForInit::Expression(expr)) => self.print_for_init_expression(expr)?,
            None => {}
        }
        self.print_text(";")?;
        if let Some(condition) = condition {
            self.space_opt()?;
            self.emit_expression(condition)?;
        }
        self.print_text(";")?;
        if let Some(increment) = increment {
            self.space_opt()?;
            self.emit_expression(increment)?;
        }
        self.print_text(")")?;
        self.emit_nested(body, false)
    }

    /// An `in` operator inside a `for` head would end the initializer early.
    fn print_for_init_expression(&mut self, expr: &Expression) -> EmitResult {
        self.print_grouped(expr, contains_in_operator(expr) || needs_comma_parens(expr))
    }

    fn emit_switch(&mut self, discriminant: &Expression, cases: &[SwitchMember]) -> EmitResult {
        self.print_text("switch")?;
        self.emit_paren_head(discriminant)?;
        self.space_opt()?;
        self.print_text("{")?;
        self.indent_in();
        self.newline_opt()?;

        for member in cases {
            match member {
                SwitchMember::Case { test, .. } => {
                    self.print_text("case ")?;
                    self.emit_expression(test)?;
                    self.print_text(":")?;
                }
                SwitchMember::Default { .. } => self.print_text("default:")?,
            }
            self.newline_opt()?;

            self.indent_in();
            for statement in member.statements().iter().filter(|s| !s.is_empty()) {
                if self.emit_statement(statement)? != StatementEnd::Closed {
                    self.print_text(";")?;
                }
                self.newline_opt()?;
            }
            self.indent_out();
        }

        self.indent_out();
        self.print_text("}")
    }

    fn emit_catch(&mut self, catch: &CatchClause) -> EmitResult {
        self.space_opt()?;
        self.print_text("catch")?;
        self.space_opt()?;
        self.print_text("(")?;
        self.print_name("Catch", catch.parameter)?;
        self.print_text(")")?;
        self.space_opt()?;
        self.emit_braced_body(&catch.body)
    }

    fn emit_jump(
        &mut self,
        keyword: &str,
        node: &'static str,
        label: Option<Atom>,
    ) -> EmitResult<StatementEnd> {
        self.print_text(keyword)?;
        if let Some(label) = label {
            self.print_text(" ")?;
            self.print_name(node, label)?;
        }
        Ok(StatementEnd::Semicolon)
    }

    fn emit_expression_statement(&mut self, expr: &Expression) -> EmitResult<StatementEnd> {
        if let Expression::Function(function) = expr
            && function.name.is_some()
        {
            self.emit_function(function)?;
            return Ok(StatementEnd::LineBreak);
        }
        self.print_grouped(expr, starts_with_function_or_brace(expr))?;
        Ok(StatementEnd::Semicolon)
    }

    /// `var a = 1, b`. Inside a `for` head, initializers holding an `in`
    /// operator are parenthesized.
    pub(super) fn emit_vars(&mut self, vars: &VarDeclarations, in_for_head: bool) -> EmitResult {
        if vars.declarations.is_empty() {
            return Err(EmitError::missing("Vars", "declarations"));
        }
        self.print_text("var ")?;
        if vars.multiline {
            self.indent_in();
        }
        for (i, declaration) in vars.declarations.iter().enumerate() {
            if i > 0 {
                self.print_text(",")?;
                if vars.multiline {
                    self.newline_opt()?;
                } else {
                    self.space_opt()?;
                }
            }
            self.print_name("Vars", declaration.name)?;
            if let Some(initializer) = &declaration.initializer {
                self.space_opt()?;
                self.print_text("=")?;
                self.space_opt()?;
                if in_for_head {
                    self.print_for_init_expression(initializer)?;
                } else {
                    self.print_list_item(initializer)?;
                }
            }
        }
        if vars.multiline {
            self.indent_out();
        }
        Ok(())
    }
}

/// Whether the statement ends in an `if` without `else`.
fn ends_with_open_if(statement: &Statement) -> bool {
    match statement {
        Statement::If {
            else_branch: None, ..
        } => true,
        Statement::If {
            else_branch: Some(else_branch),
            ..
        } => ends_with_open_if(else_branch),
        Statement::While { body, .. }
        | Statement::For { body, .. }
        | Statement::ForIn { body, .. }
        | Statement::Labeled { body, .. } => ends_with_open_if(body),
        _ => false,
    }
}

#[cfg(test)]
#[path = "../../tests/statements.rs"]
mod tests;
