use crate::{
    ast::ArithmeticExpression,
    interpreter::{
        evaluator::{
            binary::core::eval_binary,
            unary::{eval_postfix, eval_prefix},
        },
        function::{Infix, Postfix, Prefix},
    },
    util::num::Number,
};

impl ArithmeticExpression {
    /// Evaluates the tree to a single number.
    ///
    /// Evaluation is total. The sentinels evaluate to NaN, and every numeric
    /// anomaly (`0/0`, `√-1`, `2.5!`) comes back as NaN or an infinity
    /// rather than an error.
    ///
    /// # Example
    /// ```
    /// use calculon::{ArithmeticExpression, Infix};
    ///
    /// let tree = ArithmeticExpression::infix(Infix::Modulo, (-100.0).into(), 3.0.into());
    /// assert_eq!(tree.evaluate(), 2.0);
    ///
    /// let tree = ArithmeticExpression::infix(Infix::Divide, 1.0.into(), 0.0.into());
    /// assert_eq!(tree.evaluate(), f64::INFINITY);
    ///
    /// assert!(ArithmeticExpression::Error.evaluate().is_nan());
    /// ```
    #[must_use]
    pub fn evaluate(&self) -> Number {
        use ArithmeticExpression::{
            AbsoluteValue, Addition, Division, Empty, Error, Exponentiation, Factorial, Inverse,
            Modulo, Multiplication, Negation, Root, Square, SquareRoot, Subtraction, Summation,
        };

        match self {
            Empty | Error => Number::NAN,
            Self::Number(value) => *value,
            Negation(a) => eval_prefix(Prefix::Negate, a.evaluate()),
            SquareRoot(a) => eval_prefix(Prefix::SquareRoot, a.evaluate()),
            Inverse(a) => eval_prefix(Prefix::Inverse, a.evaluate()),
            AbsoluteValue(a) => eval_prefix(Prefix::AbsoluteValue, a.evaluate()),
            Summation(a) => eval_prefix(Prefix::Summation, a.evaluate()),
            Addition(a, b) => eval_binary(Infix::Add, a.evaluate(), b.evaluate()),
            Subtraction(a, b) => eval_binary(Infix::Subtract, a.evaluate(), b.evaluate()),
            Modulo(a, b) => eval_binary(Infix::Modulo, a.evaluate(), b.evaluate()),
            Multiplication(a, b) => eval_binary(Infix::Multiply, a.evaluate(), b.evaluate()),
            Division(a, b) => eval_binary(Infix::Divide, a.evaluate(), b.evaluate()),
            Exponentiation(a, b) => eval_binary(Infix::Exponent, a.evaluate(), b.evaluate()),
            Root(a, b) => eval_binary(Infix::Root, a.evaluate(), b.evaluate()),
            Square(a) => eval_postfix(Postfix::Square, a.evaluate()),
            Factorial(a) => eval_postfix(Postfix::Factorial, a.evaluate()),
        }
    }
}
