//! Binary and unary operators with their precedence ranks.
//!
//! Ranks follow the JavaScript grammar: a higher rank binds tighter. The
//! expression-level ranks (calls, member access, primaries) live in the
//! emitter's precedence oracle; operators only know their own.

use serde::{Deserialize, Serialize};

/// Grouping direction for operators of equal precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    // Multiplicative
    Mul,
    Div,
    Mod,

    // Additive
    Add,
    Sub,

    // Shift
    Shl,
    Shr,
    Shru,

    // Relational
    Lt,
    Lte,
    Gt,
    Gte,
    InstanceOf,
    In,

    // Equality
    Eq,
    Neq,
    RefEq,
    RefNeq,

    // Bitwise
    BitAnd,
    BitXor,
    BitOr,

    // Logical
    And,
    Or,

    // Assignment
    Asg,
    AsgAdd,
    AsgSub,
    AsgMul,
    AsgDiv,
    AsgMod,
    AsgShl,
    AsgShr,
    AsgShru,
    AsgBitAnd,
    AsgBitOr,
    AsgBitXor,

    Comma,
}

impl BinaryOperator {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Shru => ">>>",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::InstanceOf => "instanceof",
            Self::In => "in",
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::RefEq => "===",
            Self::RefNeq => "!==",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::BitOr => "|",
            Self::And => "&&",
            Self::Or => "||",
            Self::Asg => "=",
            Self::AsgAdd => "+=",
            Self::AsgSub => "-=",
            Self::AsgMul => "*=",
            Self::AsgDiv => "/=",
            Self::AsgMod => "%=",
            Self::AsgShl => "<<=",
            Self::AsgShr => ">>=",
            Self::AsgShru => ">>>=",
            Self::AsgBitAnd => "&=",
            Self::AsgBitOr => "|=",
            Self::AsgBitXor => "^=",
            Self::Comma => ",",
        }
    }

    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Mod => 13,
            Self::Add | Self::Sub => 12,
            Self::Shl | Self::Shr | Self::Shru => 11,
            Self::Lt | Self::Lte | Self::Gt | Self::Gte | Self::InstanceOf | Self::In => 10,
            Self::Eq | Self::Neq | Self::RefEq | Self::RefNeq => 9,
            Self::BitAnd => 8,
            Self::BitXor => 7,
            Self::BitOr => 6,
            Self::And => 5,
            Self::Or => 4,
            Self::Asg
            | Self::AsgAdd
            | Self::AsgSub
            | Self::AsgMul
            | Self::AsgDiv
            | Self::AsgMod
            | Self::AsgShl
            | Self::AsgShr
            | Self::AsgShru
            | Self::AsgBitAnd
            | Self::AsgBitOr
            | Self::AsgBitXor => 2,
            Self::Comma => 1,
        }
    }

    pub const fn associativity(self) -> Associativity {
        if self.is_assignment() {
            Associativity::Right
        } else {
            Associativity::Left
        }
    }

    #[inline]
    pub const fn is_left_associative(self) -> bool {
        matches!(self.associativity(), Associativity::Left)
    }

    pub const fn is_assignment(self) -> bool {
        matches!(
            self,
            Self::Asg
                | Self::AsgAdd
                | Self::AsgSub
                | Self::AsgMul
                | Self::AsgDiv
                | Self::AsgMod
                | Self::AsgShl
                | Self::AsgShr
                | Self::AsgShru
                | Self::AsgBitAnd
                | Self::AsgBitOr
                | Self::AsgBitXor
        )
    }

    /// Keyword operators need whitespace on both sides.
    pub const fn is_keyword(self) -> bool {
        matches!(self, Self::InstanceOf | Self::In)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    /// `-x`
    Neg,
    /// `+x`
    Pos,
    Not,
    BitNot,
    TypeOf,
    Void,
    Delete,
    /// `++`, prefix or postfix
    Inc,
    /// `--`, prefix or postfix
    Dec,
}

impl UnaryOperator {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Pos => "+",
            Self::Not => "!",
            Self::BitNot => "~",
            Self::TypeOf => "typeof",
            Self::Void => "void",
            Self::Delete => "delete",
            Self::Inc => "++",
            Self::Dec => "--",
        }
    }

    /// Rank of the operator used as a prefix.
    pub const fn precedence(self) -> u8 {
        14
    }

    /// Rank of the operator used as a postfix.
    pub const fn postfix_precedence(self) -> u8 {
        15
    }

    pub const fn is_keyword(self) -> bool {
        matches!(self, Self::TypeOf | Self::Void | Self::Delete)
    }

    /// Only `++` and `--` have a postfix form.
    pub const fn is_postfix_capable(self) -> bool {
        matches!(self, Self::Inc | Self::Dec)
    }
}

#[cfg(test)]
#[path = "../tests/operators.rs"]
mod tests;
