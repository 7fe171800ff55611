use crate::{
    interpreter::{
        evaluator::binary::{power::eval_pow, scalar::eval_scalar_op},
        function::{Infix, Postfix, Prefix},
    },
    util::num::{Number, is_odd, is_whole, sign, whole_to_u32},
};

/// Largest `n` whose factorial is finite in an `f64`.
const MAX_FINITE_FACTORIAL: u32 = 170;

/// Evaluates a prefix function on an already evaluated operand.
///
/// - `Negate`: `-x`.
/// - `SquareRoot`: principal root, NaN for negative inputs.
/// - `Inverse`: `1 / x`, through the same division as the `÷` key.
/// - `AbsoluteValue`: `|x|`.
/// - `Summation`: see [`summation`].
#[must_use]
pub fn eval_prefix(function: Prefix, value: Number) -> Number {
    match function {
        Prefix::Negate => -value,
        Prefix::SquareRoot => value.sqrt(),
        Prefix::Inverse => eval_scalar_op(Infix::Divide, 1.0, value),
        Prefix::AbsoluteValue => value.abs(),
        Prefix::Summation => summation(value),
    }
}

/// Evaluates a postfix function on an already evaluated operand.
///
/// `Square` is exponentiation by a literal `2`, so it shares every special
/// case of `^`.
#[must_use]
pub fn eval_postfix(function: Postfix, value: Number) -> Number {
    match function {
        Postfix::Square => eval_pow(value, 2.0),
        Postfix::Factorial => factorial(value),
    }
}

/// Computes `n!` for whole `n`.
///
/// Non-negative `n` gives the usual product, with `0! = 1` and overflow to
/// infinity past `170!`. Negative `n` mirrors the positive side with a sign
/// set by parity: `n! = (-1)^|n| · |n|!`, so `(-3)! = -6` and `(-4)! = 24`.
/// Infinities map to themselves. Anything fractional, and NaN, is NaN.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::unary::factorial;
///
/// assert_eq!(factorial(5.0), 120.0);
/// assert_eq!(factorial(0.0), 1.0);
/// assert_eq!(factorial(-3.0), -6.0);
/// assert_eq!(factorial(-4.0), 24.0);
/// assert!(factorial(2.5).is_nan());
/// ```
#[must_use]
pub fn factorial(value: Number) -> Number {
    if !is_whole(value) {
        return Number::NAN;
    }
    if value.is_infinite() {
        return value;
    }

    let magnitude = match whole_to_u32(value.abs()) {
        Some(n) if n <= MAX_FINITE_FACTORIAL => (2..=n).map(Number::from).product::<Number>(),
        _ => Number::INFINITY,
    };

    if value < 0.0 && is_odd(value) { -magnitude } else { magnitude }
}

/// Computes the signed triangular number `sign(n) · (|n| + 1) · |n| / 2`.
///
/// NaN unless `n` is whole; infinities stay infinite.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::unary::summation;
///
/// assert_eq!(summation(3.0), 6.0);
/// assert_eq!(summation(-3.0), -6.0);
/// assert_eq!(summation(0.0), 0.0);
/// assert!(summation(0.5).is_nan());
/// ```
#[must_use]
pub fn summation(value: Number) -> Number {
    if !is_whole(value) {
        return Number::NAN;
    }

    let magnitude = value.abs();
    sign(value) * (magnitude + 1.0) * magnitude / 2.0
}
