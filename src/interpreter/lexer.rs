use logos::Logos;

use crate::{
    error::LexError,
    interpreter::{
        function::{Function, Infix, Postfix, Prefix},
        token::Token,
    },
    session::Variable,
    util::num::Number,
};

/// A lexical unit of calculator notation.
///
/// Lexemes are one step before [`Token`]s: the minus sign and the root sign
/// are still ambiguous here, and variables are still names. [`tokenize`]
/// settles both.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Lexeme {
    /// Numeric literals, such as `2.75`, `.5`, `2` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(Number),
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `-`, `–` or `−`: negate or subtract, depending on what precedes it.
    #[token("-")]
    #[token("–")]
    #[token("−")]
    Minus,
    /// `√`: square root, or the root operator after an operand.
    #[token("√")]
    RootSign,
    /// Function symbols with a single reading.
    #[token("+", |_| Function::Infix(Infix::Add))]
    #[token("%", |_| Function::Infix(Infix::Modulo))]
    #[token("x", |_| Function::Infix(Infix::Multiply))]
    #[token("×", |_| Function::Infix(Infix::Multiply))]
    #[token("*", |_| Function::Infix(Infix::Multiply))]
    #[token("÷", |_| Function::Infix(Infix::Divide))]
    #[token("/", |_| Function::Infix(Infix::Divide))]
    #[token("^", |_| Function::Infix(Infix::Exponent))]
    #[token("*√", |_| Function::Infix(Infix::Root))]
    #[token("~", |_| Function::Prefix(Prefix::AbsoluteValue))]
    #[token("∑", |_| Function::Prefix(Prefix::Summation))]
    #[token("⅟", |_| Function::Prefix(Prefix::Inverse))]
    #[token("²", |_| Function::Postfix(Postfix::Square))]
    #[token("!", |_| Function::Postfix(Postfix::Factorial))]
    Function(Function),
    /// `ANS` or `MEM`.
    #[token("ANS", |_| Variable::Answer)]
    #[token("MEM", |_| Variable::Memory)]
    Variable(Variable),
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current lexeme slice.
///
/// # Returns
/// - `Some(Number)`: The parsed value.
/// - `None`: If the slice is not a valid number, which makes the lexer
///   report an error.
fn parse_number(lex: &mut logos::Lexer<Lexeme>) -> Option<Number> {
    lex.slice().parse().ok()
}

/// Splits calculator notation into lexemes paired with their byte offsets.
///
/// # Errors
/// [`LexError::UnexpectedCharacter`] for the first text that matches no
/// lexeme.
pub fn lex(source: &str) -> Result<Vec<(Lexeme, usize)>, LexError> {
    let mut lexemes = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        match lexeme {
            Ok(lexeme) => lexemes.push((lexeme, lexer.span().start)),
            Err(()) => {
                return Err(LexError::UnexpectedCharacter { text:   lexer.slice().to_string(),
                                                           offset: lexer.span().start, });
            },
        }
    }

    Ok(lexemes)
}

/// Turns calculator notation into engine tokens.
///
/// Applies the keypad's rules for ambiguous keys: a minus that follows an
/// operand (a number, a variable, `)` or a postfix function) subtracts,
/// anywhere else it negates; likewise `√` after an operand is the infix root
/// (`3√8` is the cube root of 8) and elsewhere the square root. Variables
/// are replaced by the value `resolve` gives them.
///
/// # Errors
/// Any [`LexError`] raised by [`lex`].
///
/// # Example
/// ```
/// use calculon::{Infix, Prefix, Token, interpreter::lexer::tokenize};
///
/// let tokens = tokenize("-2 - 3", |_| 0.0).unwrap();
/// assert_eq!(tokens,
///            vec![Prefix::Negate.into(),
///                 Token::Number(2.0),
///                 Infix::Subtract.into(),
///                 Token::Number(3.0)]);
/// ```
pub fn tokenize<F>(source: &str, resolve: F) -> Result<Vec<Token>, LexError>
    where F: Fn(Variable) -> Number
{
    let lexemes = lex(source)?;
    let mut tokens: Vec<Token> = Vec::with_capacity(lexemes.len());

    for (lexeme, _) in lexemes {
        let after_operand = tokens.last().is_some_and(Token::ends_operand);

        let token = match lexeme {
            Lexeme::Number(value) => Token::Number(value),
            Lexeme::Variable(variable) => Token::Number(resolve(variable)),
            Lexeme::OpenParen => Token::OpenParen,
            Lexeme::CloseParen => Token::CloseParen,
            Lexeme::Minus if after_operand => Infix::Subtract.into(),
            Lexeme::Minus => Prefix::Negate.into(),
            Lexeme::RootSign if after_operand => Infix::Root.into(),
            Lexeme::RootSign => Prefix::SquareRoot.into(),
            Lexeme::Function(function) => Token::Function(function),
            Lexeme::Ignored => continue,
        };

        tokens.push(token);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        tokenize(source, |variable| match variable {
            Variable::Answer => 42.0,
            Variable::Memory => -1.5,
        }).unwrap()
    }

    #[test]
    fn numbers_in_every_notation() {
        assert_eq!(tokens("2.75 .5 2 2.1e-10"),
                   vec![Token::Number(2.75),
                        Token::Number(0.5),
                        Token::Number(2.0),
                        Token::Number(2.1e-10)]);
    }

    #[test]
    fn minus_depends_on_what_precedes_it() {
        assert_eq!(tokens("(-1)–-2"),
                   vec![Token::OpenParen,
                        Prefix::Negate.into(),
                        Token::Number(1.0),
                        Token::CloseParen,
                        Infix::Subtract.into(),
                        Prefix::Negate.into(),
                        Token::Number(2.0)]);
        assert_eq!(tokens("3!-1")[2], Token::from(Infix::Subtract));
        assert_eq!(tokens("√-4")[1], Token::from(Prefix::Negate));
    }

    #[test]
    fn root_sign_depends_on_what_precedes_it() {
        assert_eq!(tokens("√9"), vec![Prefix::SquareRoot.into(), Token::Number(9.0)]);
        assert_eq!(tokens("3√8"),
                   vec![Token::Number(3.0), Infix::Root.into(), Token::Number(8.0)]);
        assert_eq!(tokens("3*√8"),
                   vec![Token::Number(3.0), Infix::Root.into(), Token::Number(8.0)]);
        assert_eq!(tokens("2x√9")[2], Token::from(Prefix::SquareRoot));
    }

    #[test]
    fn keypad_and_ascii_symbols() {
        assert_eq!(tokens("1x2*3×4÷5/6"),
                   vec![Token::Number(1.0),
                        Infix::Multiply.into(),
                        Token::Number(2.0),
                        Infix::Multiply.into(),
                        Token::Number(3.0),
                        Infix::Multiply.into(),
                        Token::Number(4.0),
                        Infix::Divide.into(),
                        Token::Number(5.0),
                        Infix::Divide.into(),
                        Token::Number(6.0)]);
        assert_eq!(tokens("~∑⅟3²!"),
                   vec![Prefix::AbsoluteValue.into(),
                        Prefix::Summation.into(),
                        Prefix::Inverse.into(),
                        Token::Number(3.0),
                        Postfix::Square.into(),
                        Postfix::Factorial.into()]);
    }

    #[test]
    fn variables_are_resolved() {
        assert_eq!(tokens("ANS+MEM"),
                   vec![Token::Number(42.0), Infix::Add.into(), Token::Number(-1.5)]);
        assert_eq!(tokens("ANS-1")[1], Token::from(Infix::Subtract));
    }

    #[test]
    fn unknown_characters_are_reported() {
        assert_eq!(tokenize("1 + y", |_| 0.0),
                   Err(LexError::UnexpectedCharacter { text:   "y".to_string(),
                                                       offset: 4, }));
    }
}
