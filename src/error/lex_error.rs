use thiserror::Error;

/// Errors raised while turning calculator notation into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Text that matches no lexeme.
    #[error("Unexpected character {text:?} at offset {offset}.")]
    UnexpectedCharacter {
        /// The unmatched text.
        text:   String,
        /// Byte offset of the text in the source.
        offset: usize,
    },
}
