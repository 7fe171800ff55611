/// Dispatch from an infix function to its routine.
pub mod core;

/// Modulo whose result takes the sign of the divisor.
pub mod modulo;

/// Exponentiation and roots.
///
/// Roots are exponentiation by a reciprocal; a negative base keeps its sign
/// under odd roots.
pub mod power;

/// Addition, subtraction, multiplication and division with IEEE-754
/// semantics.
pub mod scalar;
