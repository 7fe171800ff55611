use log::debug;

use crate::{
    ast::ArithmeticExpression,
    error::ParseError,
    interpreter::{
        function::LOOSEST_RANK,
        parser::{
            generator::{Generator, unexpected},
            grouping::Grouping,
        },
        token::Token,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token sequence into an expression tree.
///
/// This is the entry point of the engine. It never fails: zero tokens give
/// [`ArithmeticExpression::Empty`] and any malformed sequence collapses to
/// [`ArithmeticExpression::Error`]. The reason is logged at debug level; use
/// [`try_parse`] to get it as a value.
///
/// # Example
/// ```
/// use calculon::{ArithmeticExpression, Infix, Token, parse};
///
/// let tokens = [Token::Number(1.0), Infix::Add.into(), Token::Number(2.0)];
/// assert_eq!(parse(&tokens),
///            ArithmeticExpression::Addition(Box::new(1.0.into()), Box::new(2.0.into())));
///
/// assert!(parse(&[]).is_empty());
/// assert!(parse(&[Token::OpenParen, Token::Number(1.0)]).is_error());
/// ```
#[must_use]
pub fn parse(tokens: &[Token]) -> ArithmeticExpression {
    match try_parse(tokens) {
        Ok(expression) => expression,
        Err(e) => {
            debug!("malformed input ({} tokens): {e}", tokens.len());
            ArithmeticExpression::Error
        },
    }
}

/// Parses a token sequence, reporting why it is malformed.
///
/// Zero tokens is not an error here either; it yields
/// [`ArithmeticExpression::Empty`].
///
/// # Errors
/// The first [`ParseError`] met while resolving parentheses or generating
/// the tree. Nothing is recovered after it.
pub fn try_parse(tokens: &[Token]) -> ParseResult<ArithmeticExpression> {
    if tokens.is_empty() {
        return Ok(ArithmeticExpression::Empty);
    }

    parse_sequence(tokens)
}

/// Parses the inside of a parenthesis group.
///
/// A group is a full sub-expression, so the whole pipeline runs on it again.
/// Unlike the top level, an empty group is malformed.
pub(crate) fn parse_group(tokens: &[Token]) -> ParseResult<ArithmeticExpression> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyGroup);
    }

    parse_sequence(tokens)
}

fn parse_sequence(tokens: &[Token]) -> ParseResult<ArithmeticExpression> {
    let grouping = Grouping::resolve(tokens)?;
    let (expression, rest) = Generator::new(&grouping).generate(grouping.items(), LOOSEST_RANK)?;

    match rest.first() {
        None => Ok(expression),
        Some(item) => Err(unexpected(*item)),
    }
}
