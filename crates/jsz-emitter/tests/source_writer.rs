use super::*;

#[test]
fn test_pretty_writer_indents_lazily() {
    let mut w = SourceWriter::pretty();
    w.print("{").unwrap();
    w.indent_in();
    w.newline().unwrap();
    w.print("a;").unwrap();
    w.newline().unwrap();
    w.newline().unwrap();
    w.indent_out();
    w.print("}").unwrap();
    assert_eq!(w.finish(), "{\n  a;\n\n}");
}

#[test]
fn test_compact_writer_drops_optional_text_and_indentation() {
    let mut w = SourceWriter::compact();
    w.indent_in();
    w.print("a").unwrap();
    w.print_opt(" ").unwrap();
    w.print("=").unwrap();
    w.newline().unwrap();
    w.print("b").unwrap();
    assert!(w.is_compact());
    assert_eq!(w.finish(), "a=\nb");
}

#[test]
fn test_custom_indent_unit() {
    let mut w = SourceWriter::pretty().with_indent("\t");
    w.indent_in();
    w.indent_in();
    w.print("x").unwrap();
    assert_eq!(w.indent_level(), 2);
    assert_eq!(w.finish(), "\t\tx");
}

#[test]
fn test_indent_out_saturates_at_zero() {
    let mut w = SourceWriter::pretty();
    w.indent_out();
    w.print("x").unwrap();
    assert_eq!(w.indent_level(), 0);
    assert_eq!(w.finish(), "x");
}
