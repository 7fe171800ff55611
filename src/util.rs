/// Numeric helpers.
///
/// This module declares the engine's number type and the small predicates the
/// evaluator relies on: wholeness, parity, sign, and checked conversion of
/// whole values into machine integers.
pub mod num;
