//! Statement terminators: which statements need `;`, which need a line break,
//! and when the last statement of a block may drop its terminator.

use jsz_ast::{Block, Expression, Interner, Statement};
use jsz_emitter::{Printer, PrinterOptions, SourceWriter, TextOutput, print_to_string};

fn print(node: &Block, names: &Interner, compact: bool) -> String {
    let options = if compact {
        PrinterOptions::compact()
    } else {
        PrinterOptions::pretty()
    };
    print_to_string(node, names, &options).unwrap()
}

#[test]
fn test_named_function_as_only_statement_gets_no_semicolon() {
    let mut names = Interner::new();
    let f = names.intern("f");
    let block = Block::braced(vec![Statement::expr(Expression::function(
        Some(f),
        vec![],
        vec![],
    ))]);

    let pretty = print(&block, &names, false);
    assert_eq!(pretty, "{\n  function f() {}\n}");
    assert!(!pretty.contains(';'));
    assert_eq!(print(&block, &names, true), "{function f(){}}");
}

#[test]
fn test_function_declaration_before_another_statement_needs_a_line_break() {
    let mut names = Interner::new();
    let f = names.intern("f");
    let block = Block::braced(vec![
        Statement::expr(Expression::function(Some(f), vec![], vec![])),
        Statement::expr(Expression::call(Expression::name(f), vec![])),
    ]);
    assert_eq!(print(&block, &names, true), "{function f(){}\nf()}");
}

#[test]
fn test_anonymous_function_statement_is_an_expression() {
    let names = Interner::new();
    let block = Block::braced(vec![Statement::expr(Expression::function(
        None,
        vec![],
        vec![],
    ))]);
    assert_eq!(print(&block, &names, true), "{(function(){})}");
}

#[test]
fn test_lone_return_is_always_terminated() {
    let names = Interner::new();
    let block = Block::braced(vec![Statement::ret(None)]);
    assert_eq!(print(&block, &names, false), "{\n  return;\n}");
    assert_eq!(print(&block, &names, true), "{return}");
}

#[test]
fn test_last_statement_semicolon_is_optional() {
    let mut names = Interner::new();
    let a = Expression::name(names.intern("a"));
    let block = Block::braced(vec![
        Statement::expr(Expression::assign(a.clone(), Expression::Int(1))),
        Statement::expr(Expression::assign(a, Expression::Int(2))),
    ]);
    assert_eq!(print(&block, &names, true), "{a=1;a=2}");
    assert_eq!(print(&block, &names, false), "{\n  a = 1;\n  a = 2;\n}");
}

#[test]
fn test_trailing_empty_statements_do_not_count_as_last() {
    let mut names = Interner::new();
    let a = Expression::name(names.intern("a"));
    let block = Block::braced(vec![Statement::expr(a), Statement::Empty, Statement::Empty]);
    assert_eq!(print(&block, &names, true), "{a}");
}

#[test]
fn test_empty_body_keeps_its_semicolon() {
    let mut names = Interner::new();
    let a = Expression::name(names.intern("a"));
    let block = Block::braced(vec![Statement::if_else(a.clone(), Statement::Empty, None)]);
    assert_eq!(print(&block, &names, true), "{if(a);}");

    let while_loop = Block::braced(vec![Statement::While {
        condition: a,
        body: Box::new(Statement::Empty),
    }]);
    assert_eq!(print(&while_loop, &names, true), "{while(a);}");
}

#[test]
fn test_closed_statements_need_no_terminator() {
    let mut names = Interner::new();
    let a = Expression::name(names.intern("a"));
    let block = Block::braced(vec![
        Statement::block(vec![Statement::Debugger]),
        Statement::While {
            condition: a,
            body: Box::new(Statement::block(vec![])),
        },
        Statement::Debugger,
    ]);
    assert_eq!(print(&block, &names, true), "{{debugger}while(a){}debugger}");
}

#[test]
fn test_loop_body_ending_propagates() {
    let mut names = Interner::new();
    let a = Expression::name(names.intern("a"));
    let b = names.intern("b");
    let block = Block::braced(vec![
        Statement::While {
            condition: a,
            body: Box::new(Statement::expr(Expression::call(Expression::name(b), vec![]))),
        },
        Statement::Debugger,
    ]);
    assert_eq!(print(&block, &names, true), "{while(a)b();debugger}");
}

#[test]
fn test_do_while_separator_follows_body_end() {
    let mut names = Interner::new();
    let a = Expression::name(names.intern("a"));
    let block = Block::braced(vec![
        Statement::DoWhile {
            body: Box::new(Statement::Debugger),
            condition: a.clone(),
        },
        Statement::DoWhile {
            body: Box::new(Statement::block(vec![Statement::Debugger])),
            condition: a,
        },
    ]);
    assert_eq!(
        print(&block, &names, true),
        "{do debugger;while(a);do{debugger}while(a)}"
    );
}

#[test]
fn test_global_block_terminates_every_statement() {
    let mut names = Interner::new();
    let a = Expression::name(names.intern("a"));
    let block = Block::global(vec![Statement::expr(a.clone()), Statement::expr(a)]);
    assert_eq!(print(&block, &names, true), "a;a;");
    assert_eq!(print(&block, &names, false), "a;\na;\n");
}

#[test]
fn test_statements_printed_one_at_a_time_stay_apart() {
    let mut names = Interner::new();
    let a = Expression::name(names.intern("a"));
    let options = PrinterOptions::compact();
    let mut out = SourceWriter::compact();
    {
        let mut printer = Printer::new(&mut out, &names, &options);
        printer.print(&Statement::expr(a.clone())).unwrap();
        printer.print(&Statement::expr(a)).unwrap();
    }
    assert!(out.is_compact());
    assert_eq!(out.finish(), "a;a;");
}
