//! # calculon
//!
//! calculon is the expression engine of a keystroke-driven calculator.
//! On every edit it turns the current token sequence, complete or not, into
//! an expression tree and evaluates it to a preview value, with a fixed
//! precedence and associativity policy and total numeric semantics.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the expression tree.
///
/// This module declares `ArithmeticExpression`, an owned tree whose nodes
/// mirror the calculator's functions, plus the `Empty` and `Error` sentinels
/// that separate "nothing typed yet" from malformed input.
///
/// # Responsibilities
/// - Defines one node kind per function, each owning its operands.
/// - Builds nodes from prefix, infix and postfix functions.
/// - Renders trees for diagnostics.
pub mod ast;
/// Provides error types for lexing and parsing.
///
/// Parsing errors never escape the engine's main entry point, which maps
/// them to the `Error` sentinel, but they are available to callers who want
/// the reason.
pub mod error;
/// Orchestrates tokens, parsing and evaluation.
///
/// This module ties together the function table, the parser, the evaluator
/// and the text front end.
///
/// # Responsibilities
/// - Declares the token alphabet and function metadata.
/// - Resolves parentheses and builds trees by precedence climbing.
/// - Evaluates trees to numbers.
pub mod interpreter;
/// Calculator state around the engine.
///
/// Holds the `ANS` and `MEM` variables, substitutes them into token
/// sequences, and implements the soft-preview convention of closing open
/// groups before evaluation.
pub mod session;
/// Numeric helpers.
///
/// Declares the engine's number type and the wholeness, parity and sign
/// predicates the evaluator relies on.
pub mod util;

pub use crate::{
    ast::ArithmeticExpression,
    error::{LexError, ParseError},
    interpreter::{
        function::{Fixity, Function, Infix, Postfix, Prefix},
        parser::core::{parse, try_parse},
        token::Token,
    },
    session::{Session, Variable},
    util::num::Number,
};

/// Parses and evaluates a token sequence in one pass.
///
/// Empty and malformed sequences both evaluate to NaN; use [`parse`] to tell
/// them apart.
///
/// # Example
/// ```
/// use calculon::{Infix, Postfix, Token, evaluate_tokens};
///
/// // 3! + 1
/// let tokens = [Token::Number(3.0),
///               Postfix::Factorial.into(),
///               Infix::Add.into(),
///               Token::Number(1.0)];
/// assert_eq!(evaluate_tokens(&tokens), 7.0);
///
/// // 3 +
/// assert!(evaluate_tokens(&[Token::Number(3.0), Infix::Add.into()]).is_nan());
/// ```
#[must_use]
pub fn evaluate_tokens(tokens: &[Token]) -> Number {
    parse(tokens).evaluate()
}
