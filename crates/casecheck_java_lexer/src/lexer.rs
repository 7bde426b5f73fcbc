use logos::{Lexer as LogosLexer, Logos};

use casecheck_text_size::{TextRange, TextSize};

use crate::LexError;
use crate::token::{Token, TokenKind, decode_unicode_escapes, is_keyword, is_literal_word};

/// Raw token shapes recognized by the generated automaton.
///
/// Keywords are not listed here: every word lexes as [`RawToken::Word`] and
/// is looked up in the keyword table afterwards, which keeps contextual
/// keywords (`record`, `var`, ...) plain identifiers.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\f\r\n]+")]
#[logos(skip r"//[^\n]*")]
enum RawToken {
    // Identifiers, keywords and literal words; `\uXXXX` escapes may stand in
    // for any character.
    #[regex(r"([\p{Alphabetic}_$]|\\u+[0-9a-fA-F]{4})([\p{Alphabetic}\p{N}_$]|\\u+[0-9a-fA-F]{4})*")]
    Word,

    #[regex(r"[0-9][0-9_]*[lLfFdD]?")]
    #[regex(r"0[xX][0-9a-fA-F_]+[lL]?")]
    #[regex(r"0[bB][01_]+[lL]?")]
    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9_]+)?[fFdD]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9_]+)?[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9_]+[fFdD]?")]
    #[regex(r"0[xX][0-9a-fA-F_]*\.?[0-9a-fA-F_]*[pP][+-]?[0-9_]+[fFdD]?")]
    Number,

    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*""#)]
    String,

    #[token(r#"""""#, text_block)]
    TextBlock,

    #[regex(r"'([^'\\\r\n]|\\[^\r\n])+'")]
    Char,

    #[token("/*", block_comment)]
    BlockComment,

    // `>>` and `>>>` are never single tokens: closing angle brackets of nested
    // generics (`List<List<String>>`) must come out as separate `>`.
    #[token(">", shift_assign)]
    Greater,

    #[token("(")]
    #[token(")")]
    #[token("{")]
    #[token("}")]
    #[token("[")]
    #[token("]")]
    #[token(";")]
    #[token(",")]
    #[token(".")]
    #[token("...")]
    #[token("@")]
    #[token("::")]
    #[token("=")]
    #[token("<")]
    #[token("!")]
    #[token("~")]
    #[token("?")]
    #[token(":")]
    #[token("->")]
    #[token("==")]
    #[token(">=")]
    #[token("<=")]
    #[token("!=")]
    #[token("&&")]
    #[token("||")]
    #[token("++")]
    #[token("--")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("&")]
    #[token("|")]
    #[token("^")]
    #[token("%")]
    #[token("<<")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("%=")]
    #[token("<<=")]
    Operator,
}

/// Finds the closing `*/` of a block comment.
fn block_comment(lex: &mut LogosLexer<'_, RawToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => false,
    }
}

/// Finds the closing `"""` of a text block, skipping escaped characters.
fn text_block(lex: &mut LogosLexer<'_, RawToken>) -> bool {
    let rest = lex.remainder();
    let mut chars = rest.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '"' if rest[i..].starts_with(r#"""""#) => {
                lex.bump(i + 3);
                return true;
            }
            _ => {}
        }
    }
    false
}

/// Extends `>` into `>>=` or `>>>=`; a bare `>>` stays two tokens.
fn shift_assign(lex: &mut LogosLexer<'_, RawToken>) {
    let rest = lex.remainder();
    if rest.starts_with(">>=") {
        lex.bump(3);
    } else if rest.starts_with(">=") {
        lex.bump(2);
    }
}

/// Streaming Java tokenizer.
///
/// Yields tokens in source order, skipping whitespace and comments. After the
/// first error the iterator is exhausted.
pub struct JavaLexer<'src> {
    inner: LogosLexer<'src, RawToken>,
    failed: bool,
}

impl<'src> JavaLexer<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut inner = RawToken::lexer(source);
        if source.starts_with('\u{feff}') {
            inner.bump('\u{feff}'.len_utf8());
        }
        Self {
            inner,
            failed: false,
        }
    }

    /// Maps a failed match onto the literal or comment it started.
    fn error_at(&self, start: usize) -> LexError {
        let rest = &self.inner.source()[start..];
        let at = offset(start);
        if rest.starts_with("/*") {
            LexError::UnterminatedComment(at)
        } else if rest.starts_with(r#"""""#) {
            LexError::UnterminatedTextBlock(at)
        } else if rest.starts_with('"') {
            LexError::UnterminatedString(at)
        } else if rest.starts_with('\'') {
            LexError::UnterminatedChar(at)
        } else {
            LexError::UnexpectedCharacter {
                ch: rest.chars().next().unwrap_or('\0'),
                offset: at,
            }
        }
    }
}

impl std::fmt::Debug for JavaLexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JavaLexer")
            .field("offset", &self.inner.span().end)
            .field("failed", &self.failed)
            .finish()
    }
}

impl<'src> Iterator for JavaLexer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let raw = self.inner.next()?;
            let span = self.inner.span();
            let kind = match raw {
                Ok(RawToken::BlockComment) => continue,
                Ok(RawToken::Word) => word_kind(self.inner.slice()),
                Ok(RawToken::Number | RawToken::String | RawToken::TextBlock | RawToken::Char) => {
                    TokenKind::Literal
                }
                Ok(RawToken::Greater | RawToken::Operator) => TokenKind::Operator,
                Err(()) => {
                    self.failed = true;
                    return Some(Err(self.error_at(span.start)));
                }
            };
            let range = TextRange::new(offset(span.start), offset(span.end));
            return Some(Ok(Token::new(kind, self.inner.slice(), range)));
        }
    }
}

impl std::iter::FusedIterator for JavaLexer<'_> {}

fn word_kind(text: &str) -> TokenKind {
    let word = decode_unicode_escapes(text);
    if is_literal_word(&word) {
        TokenKind::Literal
    } else if is_keyword(&word) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    }
}

fn offset(position: usize) -> TextSize {
    TextSize::try_from(position).unwrap_or(TextSize::MAX)
}
