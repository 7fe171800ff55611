use crate::{interpreter::function::Infix, util::num::Number};

/// Evaluates one of the four field operations with IEEE-754 semantics.
///
/// Division by zero is not an error: `x / 0` is `±∞` with the sign of `x`
/// and `0 / 0` is NaN. Functions other than `Add`, `Sub`, `Multiply` and
/// `Divide` are routed elsewhere and give NaN here.
///
/// # Example
/// ```
/// use calculon::{Infix, interpreter::evaluator::binary::scalar::eval_scalar_op};
///
/// assert_eq!(eval_scalar_op(Infix::Divide, -1.0, 0.0), f64::NEG_INFINITY);
/// assert!(eval_scalar_op(Infix::Divide, 0.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn eval_scalar_op(function: Infix, left: Number, right: Number) -> Number {
    match function {
        Infix::Add => left + right,
        Infix::Subtract => left - right,
        Infix::Multiply => left * right,
        Infix::Divide => left / right,
        Infix::Modulo | Infix::Exponent | Infix::Root => Number::NAN,
    }
}
