//! Statement and expression nodes.
//!
//! Each node kind is a variant with fixed children. Identifier names are
//! `Atom`s into the interner the tree was built with, so one name can be
//! referenced from many nodes without being owned by any of them.
//!
//! Fields that an upstream builder fills in after construction (the qualifier
//! of a call, the constructor of `new`, the parts of a `for-in` head) are
//! `Option`s; the printer rejects a node that reaches it with such a field
//! still unset.

use jsz_common::Atom;
use serde::{Deserialize, Serialize};

use crate::operators::{BinaryOperator, UnaryOperator};

// =============================================================================
// Statements
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Statement {
    /// `{ statements }`, or an unbraced script body when global
    Block(Block),

    /// `if (cond) then else otherwise`
    If {
        condition: Expression,
        then_branch: Box<Self>,
        else_branch: Option<Box<Self>>,
    },

    /// `while (cond) body`
    While {
        condition: Expression,
        body: Box<Self>,
    },

    /// `do body while (cond)`
    DoWhile {
        body: Box<Self>,
        condition: Expression,
    },

    /// `for (init; cond; incr) body`
    For {
        init: Option<ForInit>,
        condition: Option<Expression>,
        increment: Option<Expression>,
        body: Box<Self>,
    },

    /// `for (var name = iter_expr in object) body` or `for (iter_expr in object) body`
    ForIn {
        /// Optional iterator variable introduced with `var`
        iter_var: Option<Atom>,
        iter_expr: Option<Expression>,
        object: Option<Expression>,
        body: Box<Self>,
    },

    /// `switch (discriminant) { cases }`
    Switch {
        discriminant: Expression,
        cases: Vec<SwitchMember>,
    },

    /// `try { } catch (e) { } finally { }`
    Try {
        try_block: Block,
        catches: Vec<CatchClause>,
        finally_block: Option<Block>,
    },

    Return(Option<Expression>),

    Throw(Expression),

    /// `break;` or `break label;`
    Break(Option<Atom>),

    /// `continue;` or `continue label;`
    Continue(Option<Atom>),

    /// `label: statement`
    Labeled {
        label: Atom,
        body: Box<Self>,
    },

    /// `expr;`
    Expression(Expression),

    /// `var a = 1, b;`
    Vars(VarDeclarations),

    Empty,

    Debugger,
}

impl Statement {
    /// Name of the node kind, used in diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Block(_) => "Block",
            Self::If { .. } => "If",
            Self::While { .. } => "While",
            Self::DoWhile { .. } => "DoWhile",
            Self::For { .. } => "For",
            Self::ForIn { .. } => "ForIn",
            Self::Switch { .. } => "Switch",
            Self::Try { .. } => "Try",
            Self::Return(_) => "Return",
            Self::Throw(_) => "Throw",
            Self::Break(_) => "Break",
            Self::Continue(_) => "Continue",
            Self::Labeled { .. } => "Labeled",
            Self::Expression(_) => "ExpressionStatement",
            Self::Vars(_) => "Vars",
            Self::Empty => "Empty",
            Self::Debugger => "Debugger",
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    pub const fn is_block(&self) -> bool {
        matches!(self, Self::Block(_))
    }
}

/// A statement list, braced unless it is a global (script-level) body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Statement>,
    #[serde(default)]
    pub global: bool,
}

impl Block {
    pub fn braced(statements: Vec<Statement>) -> Self {
        Self {
            statements,
            global: false,
        }
    }

    pub fn global(statements: Vec<Statement>) -> Self {
        Self {
            statements,
            global: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForInit {
    Vars(VarDeclarations),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SwitchMember {
    Case {
        test: Expression,
        statements: Vec<Statement>,
    },
    Default {
        statements: Vec<Statement>,
    },
}

impl SwitchMember {
    pub fn statements(&self) -> &[Statement] {
        match self {
            Self::Case { statements, .. } | Self::Default { statements } => statements,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    pub parameter: Atom,
    pub body: Block,
}

/// `var` group; `multiline` puts each declarator on its own line in pretty output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VarDeclarations {
    pub declarations: Vec<VarDeclaration>,
    #[serde(default)]
    pub multiline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDeclaration {
    pub name: Atom,
    pub initializer: Option<Expression>,
}

// =============================================================================
// Expressions
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Expression {
    /// `left op right`
    Binary {
        operator: BinaryOperator,
        left: Box<Self>,
        right: Box<Self>,
    },

    /// `op operand`
    Prefix {
        operator: UnaryOperator,
        operand: Box<Self>,
    },

    /// `operand op`
    Postfix {
        operator: UnaryOperator,
        operand: Box<Self>,
    },

    /// `cond ? then : else`
    Conditional {
        condition: Box<Self>,
        then_expr: Box<Self>,
        else_expr: Box<Self>,
    },

    /// `[a, b, c]`
    Array(Vec<Self>),

    /// `{ key: value, ... }`
    Object(ObjectLiteral),

    /// `qualifier(args)`
    Invocation {
        qualifier: Option<Box<Self>>,
        arguments: Vec<Self>,
    },

    /// `new constructor(args)`
    New {
        constructor: Option<Box<Self>>,
        arguments: Vec<Self>,
    },

    /// `name` or `qualifier.name`
    NameRef {
        qualifier: Option<Box<Self>>,
        name: Atom,
    },

    /// `array[index]`
    ArrayAccess {
        array: Box<Self>,
        index: Box<Self>,
    },

    Null,

    Boolean(bool),

    Int(i64),

    Double(f64),

    String(String),

    /// `/pattern/flags`
    RegExp {
        pattern: String,
        flags: Option<String>,
    },

    This,

    Function(Function),

    /// `/** @tag value */`
    DocComment(DocComment),
}

impl Expression {
    /// Name of the node kind, used in diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Binary { .. } => "Binary",
            Self::Prefix { .. } => "Prefix",
            Self::Postfix { .. } => "Postfix",
            Self::Conditional { .. } => "Conditional",
            Self::Array(_) => "ArrayLiteral",
            Self::Object(_) => "ObjectLiteral",
            Self::Invocation { .. } => "Invocation",
            Self::New { .. } => "New",
            Self::NameRef { .. } => "NameRef",
            Self::ArrayAccess { .. } => "ArrayAccess",
            Self::Null => "Null",
            Self::Boolean(_) => "Boolean",
            Self::Int(_) => "Int",
            Self::Double(_) => "Double",
            Self::String(_) => "String",
            Self::RegExp { .. } => "RegExp",
            Self::This => "This",
            Self::Function(_) => "Function",
            Self::DocComment(_) => "DocComment",
        }
    }

    #[inline]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Double(_))
    }

    /// True for the binary comma operator at the top of this expression.
    #[inline]
    pub const fn is_comma(&self) -> bool {
        matches!(
            self,
            Self::Binary {
                operator: BinaryOperator::Comma,
                ..
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Function {
    pub name: Option<Atom>,
    pub parameters: Vec<Atom>,
    pub body: Block,
}

/// Object literal; `multiline` puts each property on its own line in pretty output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectLiteral {
    pub properties: Vec<PropertyInitializer>,
    #[serde(default)]
    pub multiline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyInitializer {
    pub label: PropertyLabel,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyLabel {
    Name(Atom),
    String(String),
    Int(i64),
    Double(f64),
}

/// Documentation comment pseudo-expression: an ordered list of `@tag value` entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocComment {
    pub tags: Vec<DocTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocTag {
    pub key: String,
    pub value: Option<DocTagValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DocTagValue {
    Text(String),
    /// A (possibly qualified) name reference, printed like a `NameRef` expression
    Name(Box<Expression>),
}

// =============================================================================
// Builders
// =============================================================================

impl Expression {
    /// Create an unqualified name reference
    pub fn name(name: Atom) -> Self {
        Self::NameRef {
            qualifier: None,
            name,
        }
    }

    /// Create a qualified name reference: `qualifier.name`
    pub fn prop(qualifier: Self, name: Atom) -> Self {
        Self::NameRef {
            qualifier: Some(Box::new(qualifier)),
            name,
        }
    }

    /// Create a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Create a binary expression
    pub fn binary(left: Self, operator: BinaryOperator, right: Self) -> Self {
        Self::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create an assignment expression
    pub fn assign(target: Self, value: Self) -> Self {
        Self::binary(target, BinaryOperator::Asg, value)
    }

    /// Create a prefix unary expression
    pub fn prefix(operator: UnaryOperator, operand: Self) -> Self {
        Self::Prefix {
            operator,
            operand: Box::new(operand),
        }
    }

    /// Create a postfix unary expression
    pub fn postfix(operand: Self, operator: UnaryOperator) -> Self {
        Self::Postfix {
            operator,
            operand: Box::new(operand),
        }
    }

    /// Create a conditional expression
    pub fn conditional(condition: Self, then_expr: Self, else_expr: Self) -> Self {
        Self::Conditional {
            condition: Box::new(condition),
            then_expr: Box::new(then_expr),
            else_expr: Box::new(else_expr),
        }
    }

    /// Create a call expression
    pub fn call(qualifier: Self, arguments: Vec<Self>) -> Self {
        Self::Invocation {
            qualifier: Some(Box::new(qualifier)),
            arguments,
        }
    }

    /// Create a `new` expression
    pub fn new_instance(constructor: Self, arguments: Vec<Self>) -> Self {
        Self::New {
            constructor: Some(Box::new(constructor)),
            arguments,
        }
    }

    /// Create an element access
    pub fn elem(array: Self, index: Self) -> Self {
        Self::ArrayAccess {
            array: Box::new(array),
            index: Box::new(index),
        }
    }

    /// Create a function expression
    pub fn function(name: Option<Atom>, parameters: Vec<Atom>, body: Vec<Statement>) -> Self {
        Self::Function(Function {
            name,
            parameters,
            body: Block::braced(body),
        })
    }
}

impl Statement {
    /// Create an expression statement
    pub fn expr(expression: Expression) -> Self {
        Self::Expression(expression)
    }

    /// Create a return statement
    pub fn ret(expression: Option<Expression>) -> Self {
        Self::Return(expression)
    }

    /// Create a single-declarator var statement
    pub fn var(name: Atom, initializer: Option<Expression>) -> Self {
        Self::Vars(VarDeclarations {
            declarations: vec![VarDeclaration { name, initializer }],
            multiline: false,
        })
    }

    /// Create an if statement
    pub fn if_else(condition: Expression, then_branch: Self, else_branch: Option<Self>) -> Self {
        Self::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    /// Create a braced block statement
    pub fn block(statements: Vec<Self>) -> Self {
        Self::Block(Block::braced(statements))
    }
}

#[cfg(test)]
#[path = "../tests/node.rs"]
mod tests;
