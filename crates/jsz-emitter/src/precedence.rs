//! Precedence and associativity oracle.
//!
//! Every expression gets an integer rank (higher binds tighter). A child is
//! parenthesized when its parent outranks it, or when both rank equally and
//! the child sits on the side its parent's operator does not associate
//! towards. The remaining helpers cover the positions where grammar, not
//! rank, decides.

use jsz_ast::{BinaryOperator, Expression, UnaryOperator};

/// Literals, `this`, unqualified names, array/object literals, functions.
pub const PRIMARY: u8 = 17;
/// Calls, qualified names and element access.
pub const MEMBER: u8 = 16;
pub const NEW: u8 = 15;
pub const CONDITIONAL: u8 = 3;

/// Rank of `expr` when it appears as an operand.
pub fn precedence(expr: &Expression) -> u8 {
    match expr {
        Expression::Binary { operator, .. } => operator.precedence(),
        Expression::Prefix { operator, .. } => operator.precedence(),
        Expression::Postfix { operator, .. } => operator.postfix_precedence(),
        Expression::Conditional { .. } => CONDITIONAL,
        Expression::New { .. } => NEW,
        Expression::Invocation { .. } | Expression::ArrayAccess { .. } => MEMBER,
        Expression::NameRef {
            qualifier: Some(_), ..
        } => MEMBER,
        // A negative number prints with a leading minus and groups like one.
        _ if is_negative_number(expr) => UnaryOperator::Neg.precedence(),
        _ => PRIMARY,
    }
}

/// Whether `child` needs parentheses as an operand of `parent`.
///
/// `wrong_assoc` marks the side that equal-rank operands must not occupy
/// unparenthesized: the right operand of a left-associative operator, the
/// left operand of a right-associative one.
pub fn needs_parens(parent: &Expression, child: &Expression, wrong_assoc: bool) -> bool {
    let parent_rank = precedence(parent);
    let child_rank = precedence(child);
    parent_rank > child_rank || (parent_rank == child_rank && wrong_assoc)
}

/// Comma expressions in element, argument and initializer position would
/// read as separators.
#[inline]
pub fn needs_comma_parens(expr: &Expression) -> bool {
    expr.is_comma()
}

/// `42.foo` lexes the dot into the number, so a numeric qualifier of a
/// member access is always wrapped.
#[inline]
pub fn is_numeric_qualifier(qualifier: &Expression) -> bool {
    qualifier.is_number()
}

/// Fixed rule: a `&&` expression as the second operand of another binary
/// operation is always parenthesized, even where precedence alone would not
/// require it. This is a literal special case; it is not derived from the
/// rank table and must not be generalized to other operators.
#[inline]
pub fn is_forced_right_operand(right: &Expression) -> bool {
    matches!(
        right,
        Expression::Binary {
            operator: BinaryOperator::And,
            ..
        }
    )
}

/// Whether the constructor expression of `new` needs parentheses.
///
/// A call anywhere along the member chain would take the `new` arguments
/// for itself (`new (f())()` vs `new f()()`), and anything looser than a
/// member expression cannot follow `new` at all.
pub fn constructor_needs_parens(constructor: &Expression) -> bool {
    match constructor {
        Expression::Invocation { .. } => true,
        Expression::New { .. } => false,
        Expression::NameRef {
            qualifier: Some(qualifier),
            ..
        } => constructor_needs_parens(qualifier),
        Expression::NameRef {
            qualifier: None, ..
        } => false,
        Expression::ArrayAccess { array, .. } => constructor_needs_parens(array),
        other => precedence(other) < MEMBER,
    }
}

/// Whether an expression statement would begin with `function` or `{`, which
/// the parser would take for a declaration or a block.
pub fn starts_with_function_or_brace(expr: &Expression) -> bool {
    match expr {
        Expression::Function(_) | Expression::Object(_) => true,
        Expression::Binary { left, .. } => starts_with_function_or_brace(left),
        Expression::Postfix { operand, .. } => starts_with_function_or_brace(operand),
        Expression::Conditional { condition, .. } => starts_with_function_or_brace(condition),
        Expression::Invocation {
            qualifier: Some(qualifier),
            ..
        }
        | Expression::NameRef {
            qualifier: Some(qualifier),
            ..
        } => starts_with_function_or_brace(qualifier),
        Expression::ArrayAccess { array, .. } => starts_with_function_or_brace(array),
        _ => false,
    }
}

/// Whether `expr` contains an `in` operator outside any function body. Such an
/// expression in a `for` initializer would be read as a `for-in` head.
pub fn contains_in_operator(expr: &Expression) -> bool {
    match expr {
        Expression::Binary {
            operator, left, right,
        } => {
            *operator == BinaryOperator::In
                || contains_in_operator(left)
                || contains_in_operator(right)
        }
        Expression::Prefix { operand, .. } | Expression::Postfix { operand, .. } => {
            contains_in_operator(operand)
        }
        Expression::Conditional {
            condition,
            then_expr,
            else_expr,
        } => {
            contains_in_operator(condition)
                || contains_in_operator(then_expr)
                || contains_in_operator(else_expr)
        }
        Expression::Array(elements) => elements.iter().any(contains_in_operator),
        Expression::Object(object) => object
            .properties
            .iter()
            .any(|property| contains_in_operator(&property.value)),
        Expression::Invocation {
            qualifier,
            arguments,
        }
        | Expression::New {
            constructor: qualifier,
            arguments,
        } => {
            qualifier.as_deref().is_some_and(contains_in_operator)
                || arguments.iter().any(contains_in_operator)
        }
        Expression::NameRef {
            qualifier: Some(qualifier),
            ..
        } => contains_in_operator(qualifier),
        Expression::ArrayAccess { array, index } => {
            contains_in_operator(array) || contains_in_operator(index)
        }
        _ => false,
    }
}

/// True for numeric literals whose text starts with a minus sign, `-0` included.
pub fn is_negative_number(expr: &Expression) -> bool {
    match expr {
        Expression::Int(value) => *value < 0,
        Expression::Double(value) => value.is_sign_negative() && !value.is_nan(),
        _ => false,
    }
}

#[cfg(test)]
#[path = "../tests/precedence.rs"]
mod tests;
