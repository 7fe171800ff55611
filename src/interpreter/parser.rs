/// Parser entry points.
///
/// Turns a whole token sequence into one expression tree, mapping the empty
/// sequence to the `Empty` sentinel and malformed input to `Error`.
pub mod core;

/// Precedence climbing.
///
/// Consumes a resolved item sequence once and builds the tree, honouring
/// rank, associativity, and the prefix/infix/postfix shape of each function.
pub mod generator;

/// Parenthesis resolution.
///
/// Folds every outermost balanced parenthesis span into a single group
/// reference and detects imbalance.
pub mod grouping;
