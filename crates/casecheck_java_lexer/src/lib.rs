//! Lightweight Java tokenizer.
//!
//! This is not a parser: it splits Java source into identifiers, keywords,
//! literals and operators, and reports only lexical errors (unterminated
//! comments and literals, characters that cannot start any token). The
//! automaton is generated by `logos`.

mod lexer;
mod token;

pub use lexer::JavaLexer;
pub use token::{Token, TokenKind};

use casecheck_text_size::TextSize;

/// Source text that cannot be split into Java tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unterminated block comment starting at offset {0}")]
    UnterminatedComment(TextSize),
    #[error("unterminated string literal starting at offset {0}")]
    UnterminatedString(TextSize),
    #[error("unterminated text block starting at offset {0}")]
    UnterminatedTextBlock(TextSize),
    #[error("unterminated character literal starting at offset {0}")]
    UnterminatedChar(TextSize),
    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedCharacter { ch: char, offset: TextSize },
}

impl LexError {
    /// Byte offset the error points at.
    pub fn offset(&self) -> TextSize {
        match self {
            LexError::UnterminatedComment(offset)
            | LexError::UnterminatedString(offset)
            | LexError::UnterminatedTextBlock(offset)
            | LexError::UnterminatedChar(offset)
            | LexError::UnexpectedCharacter { offset, .. } => *offset,
        }
    }
}

/// Tokenizes the whole source, failing on the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    JavaLexer::new(source).collect()
}
