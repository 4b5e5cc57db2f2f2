use jsz_ast::{
    BinaryOperator, DocComment, DocTagValue, Expression, Function, ObjectLiteral, PropertyLabel,
};

use super::Printer;
use crate::error::{EmitError, EmitResult};
use crate::precedence::{
    constructor_needs_parens, is_forced_right_operand, is_numeric_qualifier, needs_parens,
};
use crate::source_writer::TextOutput;
use crate::spacing::{requires_space, requires_space_before};
use crate::string_literal::javascript_string;

impl<'a, O: TextOutput + ?Sized> Printer<'a, O> {
    pub(super) fn emit_expression(&mut self, expr: &Expression) -> EmitResult {
        match expr {
            Expression::Binary {
                operator,
                left,
                right,
            } => self.emit_binary(expr, *operator, left, right),
            Expression::Prefix { operator, operand } => {
                self.print_text(operator.symbol())?;
                if requires_space(*operator, operand) {
                    self.print_text(" ")?;
                }
                self.print_operand(expr, operand, false)?;
                Ok(())
            }
            Expression::Postfix { operator, operand } => {
                if !operator.is_postfix_capable() {
                    return Err(EmitError::InvalidOperator {
                        node: "Postfix",
                        operator: operator.symbol(),
                    });
                }
                self.print_operand(expr, operand, false)?;
                self.print_text(operator.symbol())
            }
            Expression::Conditional {
                condition,
                then_expr,
                else_expr,
            } => {
                // A conditional test of equal rank is always grouped.
                self.print_operand(expr, condition, true)?;
                self.space_opt()?;
                self.print_text("?")?;
                self.space_opt()?;
                self.print_operand(expr, then_expr, false)?;
                self.space_opt()?;
                self.print_text(":")?;
                self.space_opt()?;
                self.print_operand(expr, else_expr, false)?;
                Ok(())
            }
            Expression::Array(elements) => {
                self.print_text("[")?;
                self.print_list(elements)?;
                self.print_text("]")
            }
            Expression::Object(object) => self.emit_object(object),
            Expression::Invocation {
                qualifier,
                arguments,
            } => {
                let qualifier = qualifier
                    .as_deref()
                    .ok_or(EmitError::missing("Invocation", "qualifier"))?;
                self.print_operand(expr, qualifier, false)?;
                self.emit_arguments(arguments)
            }
            Expression::New {
                constructor,
                arguments,
            } => {
                let constructor = constructor
                    .as_deref()
                    .ok_or(EmitError::missing("New", "constructor"))?;
                self.print_text("new ")?;
                self.print_grouped(constructor, constructor_needs_parens(constructor))?;
                self.emit_arguments(arguments)
            }
            Expression::NameRef { qualifier, name } => {
                if let Some(qualifier) = qualifier {
                    if is_numeric_qualifier(qualifier) {
                        self.print_grouped(qualifier, true)?;
                    } else {
                        self.print_operand(expr, qualifier, false)?;
                    }
                    self.print_text(".")?;
                }
                self.print_name("NameRef", *name)
            }
            Expression::ArrayAccess { array, index } => {
                self.print_operand(expr, array, false)?;
                self.print_text("[")?;
                self.emit_expression(index)?;
                self.print_text("]")
            }
            Expression::Null => self.print_text("null"),
            Expression::Boolean(value) => self.print_text(if *value { "true" } else { "false" }),
            Expression::Int(value) => self.print_text(&value.to_string()),
            Expression::Double(value) => self.print_text(&format_double(*value)),
            Expression::String(value) => {
                let literal = javascript_string(value, self.options.force_double_quote);
                self.print_text(&literal)
            }
            Expression::RegExp { pattern, flags } => {
                self.print_text("/")?;
                self.print_text(pattern)?;
                self.print_text("/")?;
                if let Some(flags) = flags {
                    self.print_text(flags)?;
                }
                Ok(())
            }
            Expression::This => self.print_text("this"),
            Expression::Function(function) => self.emit_function(function),
            Expression::DocComment(comment) => self.emit_doc_comment(comment),
            _ => Err(EmitError::UnsupportedNode {
                kind: expr.kind_name(),
            }),
        }
    }

    fn emit_binary(
        &mut self,
        expr: &Expression,
        operator: BinaryOperator,
        left: &Expression,
        right: &Expression,
    ) -> EmitResult {
        let left_assoc = operator.is_left_associative();

        let left_parens = self.print_operand(expr, left, !left_assoc)?;
        if !left_parens
            && (operator.is_keyword() || requires_space_before(left, operator))
        {
            self.print_text(" ")?;
        } else if operator != BinaryOperator::Comma {
            self.space_opt()?;
        }
        self.print_text(operator.symbol())?;

        if operator == BinaryOperator::Comma {
            self.space_opt()?;
            return self.emit_expression(right);
        }

        if is_forced_right_operand(right) {
            self.space_opt()?;
            return self.print_grouped(right, true);
        }

        let right_parens = needs_parens(expr, right, left_assoc);
        if requires_space(operator, right) && !right_parens {
            self.print_text(" ")?;
        } else {
            self.space_opt()?;
        }
        self.print_grouped(right, right_parens)
    }

    fn emit_arguments(&mut self, arguments: &[Expression]) -> EmitResult {
        self.print_text("(")?;
        self.print_list(arguments)?;
        self.print_text(")")
    }

    fn emit_object(&mut self, object: &ObjectLiteral) -> EmitResult {
        if object.properties.is_empty() {
            return self.print_text("{}");
        }

        self.print_text("{")?;
        if object.multiline {
            self.indent_in();
            self.newline_opt()?;
        }
        for (i, property) in object.properties.iter().enumerate() {
            if i > 0 {
                self.print_text(",")?;
                if object.multiline {
                    self.newline_opt()?;
                } else {
                    self.space_opt()?;
                }
            }
            self.emit_property_label(&property.label)?;
            self.print_text(":")?;
            self.space_opt()?;
            self.print_list_item(&property.value)?;
        }
        if object.multiline {
            self.indent_out();
            self.newline_opt()?;
        }
        self.print_text("}")
    }

    fn emit_property_label(&mut self, label: &PropertyLabel) -> EmitResult {
        match label {
            PropertyLabel::Name(atom) => self.print_name("ObjectLiteral", *atom),
            PropertyLabel::String(value) if is_identifier_name(value) => self.print_text(value),
            PropertyLabel::String(value) => {
                let literal = javascript_string(value, self.options.force_double_quote);
                self.print_text(&literal)
            }
            PropertyLabel::Int(value) => self.emit_numeric_label(value.to_string()),
            PropertyLabel::Double(value) => self.emit_numeric_label(format_double(*value)),
        }
    }

    /// A leading minus is not valid in a label, so negative keys are quoted.
    fn emit_numeric_label(&mut self, text: String) -> EmitResult {
        if text.starts_with('-') {
            let literal = javascript_string(&text, self.options.force_double_quote);
            self.print_text(&literal)
        } else {
            self.print_text(&text)
        }
    }

    pub(super) fn emit_function(&mut self, function: &Function) -> EmitResult {
        self.print_text("function")?;
        if let Some(name) = function.name {
            self.print_text(" ")?;
            self.print_name("Function", name)?;
        } else {
            self.space_opt()?;
        }

        self.print_text("(")?;
        for (i, parameter) in function.parameters.iter().enumerate() {
            if i > 0 {
                self.print_text(",")?;
                self.space_opt()?;
            }
            self.print_name("Function", *parameter)?;
        }
        self.print_text(")")?;
        self.space_opt()?;
        self.emit_braced_body(&function.body)
    }

    /// `/** @key value */` on one line for a single tag, one ` * @key value`
    /// line per tag otherwise.
    fn emit_doc_comment(&mut self, comment: &DocComment) -> EmitResult {
        match comment.tags.as_slice() {
            [] => {
                self.print_text("/** */")?;
                self.space_opt()
            }
            [tag] => {
                self.print_text("/** ")?;
                self.emit_doc_tag(&tag.key, tag.value.as_ref())?;
                self.print_text(" */")?;
                self.space_opt()
            }
            tags => {
                self.newline_opt()?;
                self.print_text("/**")?;
                self.newline()?;
                for tag in tags {
                    self.print_text(" * ")?;
                    self.emit_doc_tag(&tag.key, tag.value.as_ref())?;
                    self.newline()?;
                }
                self.print_text(" */")?;
                self.newline_opt()
            }
        }
    }

    fn emit_doc_tag(&mut self, key: &str, value: Option<&DocTagValue>) -> EmitResult {
        self.print_text("@")?;
        self.print_text(key)?;
        match value {
            None => Ok(()),
            Some(DocTagValue::Text(text)) => {
                self.print_text(" ")?;
                // `*/` would close the comment early.
                self.print_text(&text.replace("*/", "*\\/"))
            }
            Some(DocTagValue::Name(name)) => {
                self.print_text(" ")?;
                self.emit_expression(name)
            }
        }
    }
}

/// Shortest round-tripping text, as `Number.prototype.toString` prints it.
/// `-0` keeps its sign.
fn format_double(value: f64) -> String {
    if value == 0.0 && value.is_sign_negative() {
        return "-0".to_string();
    }
    let mut buffer = ryu_js::Buffer::new();
    buffer.format(value).to_string()
}

/// ASCII identifier names may be used as object labels unquoted.
fn is_identifier_name(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
#[path = "../../tests/expressions.rs"]
mod tests;
