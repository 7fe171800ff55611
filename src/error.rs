/// Lexing errors.
///
/// Raised by the text front end when calculator notation contains a
/// character that belongs to no lexeme.
pub mod lex_error;
/// Parsing errors.
///
/// Describes why a token sequence is malformed: unbalanced parentheses, a
/// missing operand, or a token out of place. The engine itself only surfaces
/// these as the `Error` sentinel; the typed reason is available through
/// `try_parse` and the debug log.
pub mod parse_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
