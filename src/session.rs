use log::debug;

use crate::{
    ast::ArithmeticExpression,
    error::LexError,
    interpreter::{lexer::tokenize, parser::core::parse, token::Token},
    util::num::Number,
};

/// A stored value the user can recall by name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Variable {
    /// `ANS`, the last committed result.
    Answer,
    /// `MEM`, the value explicitly stored by the user.
    Memory,
}

/// Calculator state around the engine.
///
/// The engine itself is stateless. A session keeps the two recallable
/// variables and substitutes their values into the token sequence before the
/// engine sees it, then re-runs the whole pipeline for every request.
///
/// ## Usage
/// ```
/// use calculon::Session;
///
/// let mut session = Session::new();
/// assert_eq!(session.commit("6 x 7").unwrap(), 42.0);
/// assert_eq!(session.evaluate("ANS + 1").unwrap(), 43.0);
///
/// // Unclosed groups still preview.
/// assert_eq!(session.preview("2 x (3 + 4").unwrap(), 14.0);
/// assert!(session.evaluate("2 x (3 + 4").unwrap().is_nan());
///
/// // `=` on an unfinished entry keeps the value on display.
/// assert_eq!(session.commit("5 x 3 +").unwrap(), 15.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    answer: Number,
    memory: Number,
}

impl Session {
    /// Creates a session with both variables at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with the given `ANS` and `MEM` values.
    #[must_use]
    pub const fn with_variables(answer: Number, memory: Number) -> Self {
        Self { answer, memory }
    }

    /// Returns the current value of a variable.
    #[must_use]
    pub const fn variable(&self, variable: Variable) -> Number {
        match variable {
            Variable::Answer => self.answer,
            Variable::Memory => self.memory,
        }
    }

    /// Lexes `source` and substitutes the session's variables.
    ///
    /// # Errors
    /// A [`LexError`] for characters outside calculator notation.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError> {
        tokenize(source, |variable| self.variable(variable))
    }

    /// Parses `source` into an expression tree.
    ///
    /// # Errors
    /// A [`LexError`] for characters outside calculator notation. Malformed
    /// but lexable input is not an error; it parses to the `Error` sentinel.
    pub fn parse(&self, source: &str) -> Result<ArithmeticExpression, LexError> {
        Ok(parse(&self.tokenize(source)?))
    }

    /// Evaluates `source` exactly as typed.
    ///
    /// # Errors
    /// A [`LexError`] for characters outside calculator notation.
    pub fn evaluate(&self, source: &str) -> Result<Number, LexError> {
        Ok(self.parse(source)?.evaluate())
    }

    /// Evaluates `source` after closing every group left open.
    ///
    /// This is the live preview shown while the user is still typing.
    ///
    /// # Errors
    /// A [`LexError`] for characters outside calculator notation.
    pub fn preview(&self, source: &str) -> Result<Number, LexError> {
        Ok(preview_tokens(&self.tokenize(source)?))
    }

    /// Returns the value the display shows for `source`.
    ///
    /// While the preview is defined the display follows it. Once it turns
    /// NaN the display keeps the last defined preview met while typing
    /// `source` token by token, and zero if there never was one. So
    /// `3 +` shows `3`, and `1 + 2 x` shows `3`.
    ///
    /// # Errors
    /// A [`LexError`] for characters outside calculator notation.
    pub fn displayed(&self, source: &str) -> Result<Number, LexError> {
        Ok(last_shown(&self.tokenize(source)?))
    }

    /// Stores the displayed value of `source` in `ANS`, as with the `=` key.
    ///
    /// # Returns
    /// The stored value, see [`Session::displayed`].
    ///
    /// # Errors
    /// A [`LexError`] for characters outside calculator notation. `ANS` is
    /// left unchanged.
    pub fn commit(&mut self, source: &str) -> Result<Number, LexError> {
        let value = self.displayed(source)?;
        debug!("ANS = {value}");
        self.answer = value;
        Ok(value)
    }

    /// Stores the displayed value of `source` in `MEM`, as with the `SET`
    /// key.
    ///
    /// # Errors
    /// A [`LexError`] for characters outside calculator notation. `MEM` is
    /// left unchanged.
    pub fn store(&mut self, source: &str) -> Result<Number, LexError> {
        let value = self.displayed(source)?;
        debug!("MEM = {value}");
        self.memory = value;
        Ok(value)
    }
}

fn preview_tokens(tokens: &[Token]) -> Number {
    let mut tokens = tokens.to_vec();
    balance_parentheses(&mut tokens);
    parse(&tokens).evaluate()
}

/// Replays `tokens` one token at a time and returns the latest defined
/// preview, newest first.
fn last_shown(tokens: &[Token]) -> Number {
    (1..=tokens.len()).rev()
                      .map(|end| preview_tokens(&tokens[..end]))
                      .find(|value| !value.is_nan())
                      .unwrap_or(0.0)
}

/// Appends one `)` for every `(` left open.
///
/// Surplus closing parentheses are left alone, so a sequence that closes
/// too early stays malformed.
///
/// # Example
/// ```
/// use calculon::{Token, session::balance_parentheses};
///
/// let mut tokens = vec![Token::OpenParen, Token::OpenParen, Token::Number(1.0)];
/// balance_parentheses(&mut tokens);
/// assert_eq!(tokens.iter().filter(|t| **t == Token::CloseParen).count(), 2);
/// ```
pub fn balance_parentheses(tokens: &mut Vec<Token>) {
    let balance = tokens.iter().fold(0usize, |depth, token| match token {
                                   Token::OpenParen => depth + 1,
                                   Token::CloseParen => depth.saturating_sub(1),
                                   Token::Number(_) | Token::Function(_) => depth,
                               });

    tokens.extend(std::iter::repeat_n(Token::CloseParen, balance));
}
