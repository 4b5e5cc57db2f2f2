//! Mandatory spaces that keep adjacent tokens from merging.

use jsz_ast::{BinaryOperator, Block, Expression, Interner, Statement, UnaryOperator};
use jsz_emitter::{PrinterOptions, print_to_string};

fn both(expr: &Expression, names: &Interner) -> (String, String) {
    (
        print_to_string(expr, names, &PrinterOptions::compact()).unwrap(),
        print_to_string(expr, names, &PrinterOptions::pretty()).unwrap(),
    )
}

#[test]
fn test_minus_negative_literal() {
    let mut names = Interner::new();
    let a = Expression::name(names.intern("a"));
    let expr = Expression::binary(a, BinaryOperator::Sub, Expression::Int(-1));

    let (compact, pretty) = both(&expr, &names);
    assert_eq!(compact, "a- -1");
    assert_eq!(pretty, "a - -1");
    assert!(!compact.contains("--"));
}

#[test]
fn test_minus_negative_zero() {
    let mut names = Interner::new();
    let a = Expression::name(names.intern("a"));
    let expr = Expression::binary(a, BinaryOperator::Sub, Expression::Double(-0.0));
    assert_eq!(both(&expr, &names).0, "a- -0");
}

#[test]
fn test_minus_prefix_minus_and_decrement() {
    let mut names = Interner::new();
    let a = Expression::name(names.intern("a"));
    let b = Expression::name(names.intern("b"));

    let neg = Expression::binary(
        a.clone(),
        BinaryOperator::Sub,
        Expression::prefix(UnaryOperator::Neg, b.clone()),
    );
    assert_eq!(both(&neg, &names).0, "a- -b");

    let dec = Expression::binary(
        a.clone(),
        BinaryOperator::Sub,
        Expression::prefix(UnaryOperator::Dec, b.clone()),
    );
    assert_eq!(both(&dec, &names).0, "a- --b");

    let inc = Expression::binary(a, BinaryOperator::Sub, Expression::prefix(UnaryOperator::Inc, b));
    assert_eq!(both(&inc, &names).0, "a-++b");
}

#[test]
fn test_plus_prefix_plus_and_increment() {
    let mut names = Interner::new();
    let a = Expression::name(names.intern("a"));
    let b = Expression::name(names.intern("b"));

    let pos = Expression::binary(
        a.clone(),
        BinaryOperator::Add,
        Expression::prefix(UnaryOperator::Pos, b.clone()),
    );
    assert_eq!(both(&pos, &names).0, "a+ +b");

    let inc = Expression::binary(a, BinaryOperator::Add, Expression::prefix(UnaryOperator::Inc, b));
    assert_eq!(both(&inc, &names).0, "a+ ++b");
}

#[test]
fn test_nested_prefix_operators() {
    let mut names = Interner::new();
    let a = Expression::name(names.intern("a"));

    let double_neg = Expression::prefix(
        UnaryOperator::Neg,
        Expression::prefix(UnaryOperator::Neg, a.clone()),
    );
    assert_eq!(both(&double_neg, &names).0, "- -a");

    let not_not = Expression::prefix(
        UnaryOperator::Not,
        Expression::prefix(UnaryOperator::Not, a.clone()),
    );
    assert_eq!(both(&not_not, &names).0, "!!a");

    let neg_literal = Expression::prefix(UnaryOperator::Neg, Expression::Int(-1));
    assert_eq!(both(&neg_literal, &names).0, "- -1");

    let postfix_operand = Expression::prefix(
        UnaryOperator::Neg,
        Expression::postfix(a, UnaryOperator::Dec),
    );
    assert_eq!(both(&postfix_operand, &names).0, "-a--");
}

#[test]
fn test_keyword_operators() {
    let mut names = Interner::new();
    let a = Expression::name(names.intern("a"));
    let b = Expression::name(names.intern("b"));

    let type_of = Expression::prefix(UnaryOperator::TypeOf, a.clone());
    assert_eq!(both(&type_of, &names), ("typeof a".into(), "typeof a".into()));

    let void = Expression::prefix(UnaryOperator::Void, Expression::Int(0));
    assert_eq!(both(&void, &names).0, "void 0");

    let instance = Expression::binary(a.clone(), BinaryOperator::InstanceOf, b.clone());
    assert_eq!(both(&instance, &names).0, "a instanceof b");

    let grouped_in = Expression::binary(
        Expression::binary(a.clone(), BinaryOperator::Comma, b.clone()),
        BinaryOperator::In,
        b,
    );
    let (compact, pretty) = both(&grouped_in, &names);
    assert_eq!(compact, "(a,b)in b");
    assert_eq!(pretty, "(a, b) in b");
}

#[test]
fn test_division_by_regexp() {
    let mut names = Interner::new();
    let a = Expression::name(names.intern("a"));
    let regexp = Expression::RegExp {
        pattern: "x".to_string(),
        flags: Some("g".to_string()),
    };
    let expr = Expression::binary(a, BinaryOperator::Div, regexp);

    let (compact, pretty) = both(&expr, &names);
    assert_eq!(compact, "a/ /x/g");
    assert_eq!(pretty, "a / /x/g");
}

#[test]
fn test_regexp_before_division() {
    let mut names = Interner::new();
    let x = Expression::name(names.intern("x"));
    let a = Expression::name(names.intern("a"));
    let b = Expression::name(names.intern("b"));
    let regexp = Expression::RegExp {
        pattern: "re".to_string(),
        flags: None,
    };

    let stmts = Block::global(vec![
        Statement::expr(Expression::assign(
            x,
            Expression::binary(regexp.clone(), BinaryOperator::Div, b.clone()),
        )),
        Statement::expr(b.clone()),
    ]);
    let compact = print_to_string(&stmts, &names, &PrinterOptions::compact()).unwrap();
    assert_eq!(compact, "x=/re/ /b;b;");
    assert!(!compact.contains("//"));

    let product = Expression::binary(
        Expression::binary(a, BinaryOperator::Mul, regexp),
        BinaryOperator::Div,
        b.clone(),
    );
    let (compact, pretty) = both(&product, &names);
    assert_eq!(compact, "a*/re/ /b");
    assert_eq!(pretty, "a * /re/ / b");
}

#[test]
fn test_regexp_with_flags_before_division() {
    let mut names = Interner::new();
    let b = Expression::name(names.intern("b"));
    let regexp = Expression::RegExp {
        pattern: "re".to_string(),
        flags: Some("g".to_string()),
    };
    let expr = Expression::binary(regexp, BinaryOperator::Div, b);
    assert_eq!(both(&expr, &names).0, "/re/g/b");
}

#[test]
fn test_less_than_not_decrement() {
    let mut names = Interner::new();
    let a = Expression::name(names.intern("a"));
    let b = Expression::name(names.intern("b"));
    let expr = Expression::binary(
        a,
        BinaryOperator::Lt,
        Expression::prefix(
            UnaryOperator::Not,
            Expression::prefix(UnaryOperator::Dec, b),
        ),
    );

    let (compact, pretty) = both(&expr, &names);
    assert_eq!(compact, "a< !--b");
    assert_eq!(pretty, "a < !--b");
    assert!(!compact.contains("<!--"));
}
