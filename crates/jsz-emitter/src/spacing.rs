//! Token-merge avoidance.
//!
//! Decides whether an operator and the operand printed right after it must be
//! separated by a literal space even in compact output, so that `a - -1` does
//! not collapse into `a--1` and `typeof x` stays two tokens.

use jsz_ast::{BinaryOperator, Expression, UnaryOperator};

use crate::precedence::is_negative_number;

/// The operator that precedes an operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Binary(BinaryOperator),
    Unary(UnaryOperator),
}

impl Operator {
    fn is_keyword(self) -> bool {
        match self {
            Self::Binary(op) => op.is_keyword(),
            Self::Unary(op) => op.is_keyword(),
        }
    }

    fn precedence(self) -> u8 {
        match self {
            Self::Binary(op) => op.precedence(),
            Self::Unary(op) => op.precedence(),
        }
    }

    fn is_minus(self) -> bool {
        matches!(
            self,
            Self::Binary(BinaryOperator::Sub) | Self::Unary(UnaryOperator::Neg)
        )
    }

    fn is_plus(self) -> bool {
        matches!(
            self,
            Self::Binary(BinaryOperator::Add) | Self::Unary(UnaryOperator::Pos)
        )
    }
}

impl From<BinaryOperator> for Operator {
    fn from(op: BinaryOperator) -> Self {
        Self::Binary(op)
    }
}

impl From<UnaryOperator> for Operator {
    fn from(op: UnaryOperator) -> Self {
        Self::Unary(op)
    }
}

/// Whether `op` followed directly by `operand` needs a separating space.
pub fn requires_space(op: impl Into<Operator>, operand: &Expression) -> bool {
    let op = op.into();
    if op.is_keyword() {
        return true;
    }

    match operand {
        // Printed without parens, so its first token is its left operand's.
        Expression::Binary {
            operator, left, ..
        } if operator.precedence() > op.precedence() => requires_space(op, left),
        Expression::Prefix {
            operator: inner,
            operand: inner_operand,
        } => {
            (op.is_minus() && matches!(inner, UnaryOperator::Dec | UnaryOperator::Neg))
                || (op.is_plus() && matches!(inner, UnaryOperator::Inc | UnaryOperator::Pos))
                // `<!--` opens an HTML-like comment in scripts.
                || (op == Operator::Binary(BinaryOperator::Lt)
                    && *inner == UnaryOperator::Not
                    && matches!(
                        inner_operand.as_ref(),
                        Expression::Prefix {
                            operator: UnaryOperator::Dec,
                            ..
                        }
                    ))
        }
        _ if is_negative_number(operand) => op.is_minus(),
        // `a//re/` would start a line comment.
        _ => op == Operator::Binary(BinaryOperator::Div) && starts_with_regexp(operand),
    }
}

/// Whether `operand`, printed unparenthesized, needs a space before the
/// binary operator that follows it. `/re/` then `/` would read as `/re//`.
pub fn requires_space_before(operand: &Expression, op: BinaryOperator) -> bool {
    matches!(op, BinaryOperator::Div | BinaryOperator::AsgDiv) && ends_with_bare_regexp(operand)
}

/// A regexp without flags as the last token. Walks the operands printed last.
fn ends_with_bare_regexp(expr: &Expression) -> bool {
    match expr {
        Expression::RegExp { flags, .. } => flags.as_deref().is_none_or(str::is_empty),
        Expression::Binary { right, .. } => ends_with_bare_regexp(right),
        Expression::Prefix { operand, .. } => ends_with_bare_regexp(operand),
        Expression::Conditional { else_expr, .. } => ends_with_bare_regexp(else_expr),
        _ => false,
    }
}

fn starts_with_regexp(expr: &Expression) -> bool {
    match expr {
        Expression::RegExp { .. } => true,
        Expression::NameRef {
            qualifier: Some(qualifier),
            ..
        }
        | Expression::Invocation {
            qualifier: Some(qualifier),
            ..
        } => starts_with_regexp(qualifier),
        Expression::ArrayAccess { array, .. } => starts_with_regexp(array),
        Expression::Postfix { operand, .. } => starts_with_regexp(operand),
        _ => false,
    }
}

#[cfg(test)]
#[path = "../tests/spacing.rs"]
mod tests;
