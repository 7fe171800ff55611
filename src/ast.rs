use crate::{
    interpreter::function::{Infix, Postfix, Prefix},
    util::num::Number,
};

/// An abstract syntax tree for one calculator expression.
///
/// Every node owns its children exclusively, so the tree is acyclic by
/// construction. A tree lives for a single parse and evaluate pass; the
/// engine rebuilds it from scratch on every edit.
///
/// The two sentinels separate "nothing typed yet" ([`Self::Empty`]) from
/// malformed input ([`Self::Error`]). Both evaluate to NaN.
#[derive(Debug, Clone, PartialEq)]
pub enum ArithmeticExpression {
    /// No tokens at the top level.
    Empty,
    /// Malformed token sequence.
    Error,
    /// A literal value.
    Number(Number),
    /// `-a`
    Negation(Box<Self>),
    /// `√a`
    SquareRoot(Box<Self>),
    /// `1 / a`
    Inverse(Box<Self>),
    /// `|a|`
    AbsoluteValue(Box<Self>),
    /// The signed triangular number of `a`.
    Summation(Box<Self>),
    /// `a + b`
    Addition(Box<Self>, Box<Self>),
    /// `a - b`
    Subtraction(Box<Self>, Box<Self>),
    /// `a mod b`, taking the sign of `b`.
    Modulo(Box<Self>, Box<Self>),
    /// `a * b`
    Multiplication(Box<Self>, Box<Self>),
    /// `a / b`
    Division(Box<Self>, Box<Self>),
    /// `base ^ exponent`
    Exponentiation(Box<Self>, Box<Self>),
    /// `Root(n, x)` is the `n`-th root of `x`.
    Root(Box<Self>, Box<Self>),
    /// `a²`
    Square(Box<Self>),
    /// `a!`
    Factorial(Box<Self>),
}

impl ArithmeticExpression {
    /// Wraps `operand` in the node for a prefix function.
    ///
    /// # Example
    /// ```
    /// use calculon::{ArithmeticExpression, Prefix};
    ///
    /// let node = ArithmeticExpression::prefix(Prefix::Negate, 2.0.into());
    /// assert_eq!(node, ArithmeticExpression::Negation(Box::new(2.0.into())));
    /// ```
    #[must_use]
    pub fn prefix(function: Prefix, operand: Self) -> Self {
        let operand = Box::new(operand);
        match function {
            Prefix::Negate => Self::Negation(operand),
            Prefix::SquareRoot => Self::SquareRoot(operand),
            Prefix::Inverse => Self::Inverse(operand),
            Prefix::AbsoluteValue => Self::AbsoluteValue(operand),
            Prefix::Summation => Self::Summation(operand),
        }
    }

    /// Combines two operands with an infix function.
    #[must_use]
    pub fn infix(function: Infix, left: Self, right: Self) -> Self {
        let (left, right) = (Box::new(left), Box::new(right));
        match function {
            Infix::Add => Self::Addition(left, right),
            Infix::Subtract => Self::Subtraction(left, right),
            Infix::Modulo => Self::Modulo(left, right),
            Infix::Multiply => Self::Multiplication(left, right),
            Infix::Divide => Self::Division(left, right),
            Infix::Exponent => Self::Exponentiation(left, right),
            Infix::Root => Self::Root(left, right),
        }
    }

    /// Wraps `operand` in the node for a postfix function.
    #[must_use]
    pub fn postfix(function: Postfix, operand: Self) -> Self {
        let operand = Box::new(operand);
        match function {
            Postfix::Square => Self::Square(operand),
            Postfix::Factorial => Self::Factorial(operand),
        }
    }

    /// Returns `true` for the [`Self::Empty`] sentinel.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` for the [`Self::Error`] sentinel.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl From<Number> for ArithmeticExpression {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl std::fmt::Display for ArithmeticExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Error => write!(f, "Error"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Negation(a) => write!(f, "{}{a}", Prefix::Negate.symbol()),
            Self::SquareRoot(a) => write!(f, "{}{a}", Prefix::SquareRoot.symbol()),
            Self::Inverse(a) => write!(f, "{}{a}", Prefix::Inverse.symbol()),
            Self::AbsoluteValue(a) => write!(f, "{}{a}", Prefix::AbsoluteValue.symbol()),
            Self::Summation(a) => write!(f, "{}{a}", Prefix::Summation.symbol()),
            Self::Addition(a, b) => write!(f, "({a} {} {b})", Infix::Add.symbol()),
            Self::Subtraction(a, b) => write!(f, "({a} {} {b})", Infix::Subtract.symbol()),
            Self::Modulo(a, b) => write!(f, "({a} {} {b})", Infix::Modulo.symbol()),
            Self::Multiplication(a, b) => write!(f, "({a} {} {b})", Infix::Multiply.symbol()),
            Self::Division(a, b) => write!(f, "({a} {} {b})", Infix::Divide.symbol()),
            Self::Exponentiation(a, b) => write!(f, "({a} {} {b})", Infix::Exponent.symbol()),
            Self::Root(a, b) => write!(f, "({a} {} {b})", Infix::Root.symbol()),
            Self::Square(a) => write!(f, "{a}{}", Postfix::Square.symbol()),
            Self::Factorial(a) => write!(f, "{a}{}", Postfix::Factorial.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parenthesizes_every_binary_node() {
        let tree = ArithmeticExpression::infix(Infix::Add,
                                               1.0.into(),
                                               ArithmeticExpression::infix(Infix::Multiply,
                                                                           2.0.into(),
                                                                           3.0.into()));
        assert_eq!(tree.to_string(), "(1 + (2 x 3))");
    }

    #[test]
    fn display_places_unary_symbols_on_their_side() {
        let tree = ArithmeticExpression::postfix(Postfix::Factorial,
                                                 ArithmeticExpression::prefix(Prefix::Negate,
                                                                              3.0.into()));
        assert_eq!(tree.to_string(), "-3!");
        assert_eq!(ArithmeticExpression::Empty.to_string(), "");
        assert_eq!(ArithmeticExpression::Error.to_string(), "Error");
    }
}
