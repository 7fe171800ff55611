use thiserror::Error;

/// Reasons a token sequence is malformed.
///
/// The public [`crate::parse`] collapses all of them into the
/// [`crate::ArithmeticExpression::Error`] sentinel; [`crate::try_parse`]
/// hands them to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `)` with no matching `(`, or a `(` left open at the end of input.
    #[error("Unbalanced parentheses.")]
    UnbalancedParentheses,
    /// An operand was expected but the input ran out.
    #[error("Missing operand.")]
    MissingOperand,
    /// A token that is neither an operand nor an operator in its position.
    #[error("Unexpected token: {token}.")]
    UnexpectedToken {
        /// The offending token, rendered with its display symbol.
        token: String,
    },
    /// A parenthesis group with nothing inside it.
    #[error("Empty parenthesis group.")]
    EmptyGroup,
}
