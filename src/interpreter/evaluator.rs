/// Infix function evaluation.
///
/// Handles the field operations, sign-of-divisor modulo, exponentiation
/// with signed odd roots, and roots expressed through exponentiation.
pub mod binary;

/// Prefix and postfix function evaluation.
///
/// Implements negation, square root, inverse, absolute value, summation,
/// square and the extended factorial.
pub mod unary;

/// Tree evaluation.
///
/// Walks an `ArithmeticExpression` bottom-up and dispatches every node to
/// the unary or binary routines. Evaluation never fails; anomalies surface
/// as NaN or infinities.
pub mod core;
