/// The evaluator module computes the value of an expression tree.
///
/// Evaluation walks the tree bottom-up and applies each function's numeric
/// rule. It is total: NaN and the infinities are ordinary results, so
/// nothing here can fail.
///
/// # Responsibilities
/// - Evaluates every node kind, including the two sentinels.
/// - Implements the delicate cases: signed odd roots, extended factorial,
///   sign-of-divisor modulo and triangular summation.
pub mod evaluator;
/// The function table.
///
/// Static metadata for every function symbol: which side its operands sit
/// on, its precedence rank, and whether same-rank chains nest to the right.
pub mod function;
/// The lexer turns calculator notation into tokens.
///
/// This is a front end for callers that hold text rather than key presses.
/// The engine itself never tokenizes.
///
/// # Responsibilities
/// - Recognises numbers, parentheses, function symbols and variables.
/// - Decides whether a minus negates or subtracts and whether `√` is the
///   square root or the root operator, from what precedes it.
/// - Reports characters outside the notation with their offset.
pub mod lexer;
/// The parser module builds an expression tree from tokens.
///
/// Parentheses are resolved into group references first, then a precedence
/// climbing generator consumes the sequence once, recursing into groups.
///
/// # Responsibilities
/// - Detects unbalanced parentheses, missing operands and stray tokens.
/// - Applies rank, associativity and fixity to shape the tree.
/// - Separates empty input from malformed input.
pub mod parser;
/// The token module defines the engine's input alphabet.
pub mod token;
