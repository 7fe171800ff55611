use crate::util::num::Number;

/// Evaluates `dividend mod divisor` with the sign of the divisor.
///
/// Takes the truncating remainder and, when it is non-zero and its sign
/// differs from the divisor's, adds the divisor once. A zero divisor gives
/// NaN.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::binary::modulo::eval_modulo;
///
/// assert_eq!(eval_modulo(-100.0, 3.0), 2.0);
/// assert_eq!(eval_modulo(100.0, -3.0), -2.0);
/// assert_eq!(eval_modulo(100.0, 3.0), 1.0);
/// assert!(eval_modulo(1.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn eval_modulo(dividend: Number, divisor: Number) -> Number {
    let remainder = dividend % divisor;

    if remainder != 0.0 && remainder.is_sign_negative() != divisor.is_sign_negative() {
        remainder + divisor
    } else {
        remainder
    }
}
