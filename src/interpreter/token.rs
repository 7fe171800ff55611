use crate::{
    interpreter::function::{Function, Infix, Postfix, Prefix},
    util::num::Number,
};

/// The atomic unit the engine consumes.
///
/// Tokens are produced outside the engine, by the keypad state machine or by
/// [`crate::interpreter::lexer::tokenize`]. A leading minus is its own
/// `Function(Prefix(Negate))` token and is never folded into a literal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal.
    Number(Number),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// A function symbol.
    Function(Function),
}

impl Token {
    /// Returns `true` if an operand ends with this token, that is, a function
    /// after it must take it as its left operand.
    #[must_use]
    pub const fn ends_operand(&self) -> bool {
        matches!(self, Self::Number(_) | Self::CloseParen | Self::Function(Function::Postfix(_)))
    }
}

impl From<Number> for Token {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<Function> for Token {
    fn from(value: Function) -> Self {
        Self::Function(value)
    }
}

impl From<Prefix> for Token {
    fn from(value: Prefix) -> Self {
        Self::Function(value.into())
    }
}

impl From<Infix> for Token {
    fn from(value: Infix) -> Self {
        Self::Function(value.into())
    }
}

impl From<Postfix> for Token {
    fn from(value: Postfix) -> Self {
        Self::Function(value.into())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}
