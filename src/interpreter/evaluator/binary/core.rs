use crate::{
    interpreter::{
        evaluator::binary::{
            modulo::eval_modulo,
            power::{eval_pow, eval_root},
            scalar::eval_scalar_op,
        },
        function::Infix,
    },
    util::num::Number,
};

/// Evaluates an infix function on two already evaluated operands.
///
/// Routes the four field operations to [`eval_scalar_op`], modulo to
/// [`eval_modulo`], and exponentiation and roots to [`eval_pow`] and
/// [`eval_root`].
///
/// # Example
/// ```
/// use calculon::{Infix, interpreter::evaluator::binary::core::eval_binary};
///
/// assert_eq!(eval_binary(Infix::Add, 3.0, 4.0), 7.0);
/// assert_eq!(eval_binary(Infix::Modulo, 100.0, -3.0), -2.0);
/// assert_eq!(eval_binary(Infix::Root, 3.0, -8.0), -2.0);
/// ```
#[must_use]
pub fn eval_binary(function: Infix, left: Number, right: Number) -> Number {
    match function {
        Infix::Add | Infix::Subtract | Infix::Multiply | Infix::Divide => {
            eval_scalar_op(function, left, right)
        },
        Infix::Modulo => eval_modulo(left, right),
        Infix::Exponent => eval_pow(left, right),
        Infix::Root => eval_root(left, right),
    }
}
