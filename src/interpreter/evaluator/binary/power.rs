use crate::{
    interpreter::{
        evaluator::{binary::scalar::eval_scalar_op, unary::eval_prefix},
        function::{Infix, Prefix},
    },
    util::num::{Number, is_nearly_odd},
};

/// Evaluates `base ^ exponent`.
///
/// NaN in either operand gives NaN, including `1 ^ NaN`. When the exponent
/// is the reciprocal of an odd whole number, the sign of a negative base is
/// carried through so that odd roots of negative numbers are real:
/// `(-8) ^ (1/3)` is `-2` rather than NaN. Everything else follows
/// [`f64::powf`], so `0 ^ 0` is `1` and `(-1) ^ ∞` is `1`.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::binary::power::eval_pow;
///
/// assert_eq!(eval_pow(2.0, 10.0), 1024.0);
/// assert_eq!(eval_pow(-27.0, 1.0 / 3.0), -3.0);
/// assert!(eval_pow(-4.0, 0.5).is_nan());
/// assert!(eval_pow(1.0, f64::NAN).is_nan());
/// ```
#[must_use]
pub fn eval_pow(base: Number, exponent: Number) -> Number {
    if base.is_nan() || exponent.is_nan() {
        return Number::NAN;
    }

    if base < 0.0 && is_nearly_odd(1.0 / exponent) {
        return -(-base).powf(exponent);
    }

    base.powf(exponent)
}

/// Evaluates the `degree`-th root of `radicand`.
///
/// Defined as `radicand ^ (1 / degree)`, reusing the reciprocal and the
/// power above, so odd roots of negative numbers stay real.
///
/// # Example
/// ```
/// use calculon::interpreter::evaluator::binary::power::eval_root;
///
/// assert_eq!(eval_root(2.0, 16.0), 4.0);
/// assert_eq!(eval_root(3.0, -8.0), -2.0);
/// ```
#[must_use]
pub fn eval_root(degree: Number, radicand: Number) -> Number {
    eval_pow(radicand, eval_prefix(Prefix::Inverse, degree))
}
