use super::*;
use jsz_ast::{Atom, ObjectLiteral};

fn id(n: u32) -> Expression {
    Expression::name(Atom(n))
}

fn sub(left: Expression, right: Expression) -> Expression {
    Expression::binary(left, BinaryOperator::Sub, right)
}

#[test]
fn test_ranks() {
    assert_eq!(precedence(&id(1)), PRIMARY);
    assert_eq!(precedence(&Expression::prop(id(1), Atom(2))), MEMBER);
    assert_eq!(precedence(&Expression::call(id(1), vec![])), MEMBER);
    assert_eq!(precedence(&Expression::elem(id(1), Expression::Int(0))), MEMBER);
    assert_eq!(precedence(&Expression::new_instance(id(1), vec![])), NEW);
    assert_eq!(
        precedence(&Expression::postfix(id(1), UnaryOperator::Inc)),
        15
    );
    assert_eq!(precedence(&Expression::prefix(UnaryOperator::Not, id(1))), 14);
    assert_eq!(precedence(&sub(id(1), id(2))), 12);
    assert_eq!(
        precedence(&Expression::conditional(id(1), id(2), id(3))),
        CONDITIONAL
    );
    assert_eq!(
        precedence(&Expression::binary(id(1), BinaryOperator::Comma, id(2))),
        1
    );
}

#[test]
fn test_negative_numbers_rank_as_prefix_minus() {
    assert_eq!(precedence(&Expression::Int(1)), PRIMARY);
    assert_eq!(precedence(&Expression::Int(-1)), 14);
    assert_eq!(precedence(&Expression::Double(-2.5)), 14);
    assert_eq!(precedence(&Expression::Double(-0.0)), 14);
    assert_eq!(precedence(&Expression::Double(0.0)), PRIMARY);
    assert_eq!(precedence(&Expression::Double(f64::NAN)), PRIMARY);
}

#[test]
fn test_needs_parens_respects_associativity() {
    let parent = sub(id(1), sub(id(2), id(3)));
    let child = sub(id(2), id(3));
    // Right operand of a left-associative operator.
    assert!(needs_parens(&parent, &child, true));
    // Left operand of the same operator.
    assert!(!needs_parens(&parent, &child, false));

    let product = Expression::binary(id(1), BinaryOperator::Mul, id(2));
    assert!(needs_parens(&product, &sub(id(1), id(2)), false));
    assert!(!needs_parens(&sub(id(1), id(2)), &product, true));
}

#[test]
fn test_forced_right_operand_is_only_and() {
    let and = Expression::binary(id(1), BinaryOperator::And, id(2));
    let or = Expression::binary(id(1), BinaryOperator::Or, id(2));
    assert!(is_forced_right_operand(&and));
    assert!(!is_forced_right_operand(&or));
}

#[test]
fn test_constructor_needs_parens() {
    let call = Expression::call(id(1), vec![]);
    assert!(!constructor_needs_parens(&id(1)));
    assert!(!constructor_needs_parens(&Expression::prop(id(1), Atom(2))));
    assert!(!constructor_needs_parens(&Expression::elem(id(1), Expression::Int(0))));
    assert!(!constructor_needs_parens(&Expression::new_instance(id(1), vec![])));
    assert!(constructor_needs_parens(&call));
    assert!(constructor_needs_parens(&Expression::prop(call.clone(), Atom(2))));
    assert!(constructor_needs_parens(&Expression::elem(call, Expression::Int(0))));
    assert!(constructor_needs_parens(&sub(id(1), id(2))));
}

#[test]
fn test_leftmost_function_or_brace() {
    let function = Expression::function(None, vec![], vec![]);
    let object = Expression::Object(ObjectLiteral::default());

    assert!(starts_with_function_or_brace(&function));
    assert!(starts_with_function_or_brace(&Expression::call(function.clone(), vec![])));
    assert!(starts_with_function_or_brace(&Expression::prop(object.clone(), Atom(1))));
    assert!(starts_with_function_or_brace(&Expression::assign(
        Expression::elem(object.clone(), Expression::Int(0)),
        id(1),
    )));
    assert!(!starts_with_function_or_brace(&Expression::assign(id(1), object)));
    assert!(!starts_with_function_or_brace(&Expression::call(id(1), vec![function])));
}

#[test]
fn test_contains_in_operator_skips_function_bodies() {
    let in_expr = Expression::binary(id(1), BinaryOperator::In, id(2));
    assert!(contains_in_operator(&in_expr));
    assert!(contains_in_operator(&Expression::assign(id(3), in_expr.clone())));
    assert!(contains_in_operator(&Expression::call(id(3), vec![in_expr.clone()])));
    assert!(!contains_in_operator(&sub(id(1), id(2))));

    let function = Expression::function(
        None,
        vec![],
        vec![jsz_ast::Statement::ret(Some(in_expr))],
    );
    assert!(!contains_in_operator(&function));
}
