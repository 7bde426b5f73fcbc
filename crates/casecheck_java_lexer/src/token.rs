use std::borrow::Cow;

use casecheck_text_size::{Ranged, TextRange};

/// Java reserved keywords, sorted for binary search.
///
/// Contextual keywords (`record`, `var`, `sealed`, `permits`, `yield`) are
/// lexed as identifiers.
const KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "try",
    "void",
    "volatile",
    "while",
];

/// Keywords that name a primitive type (including `void`).
const PRIMITIVE_TYPES: &[&str] = &[
    "boolean", "byte", "char", "double", "float", "int", "long", "short", "void",
];

/// Literal words that look like identifiers.
const LITERAL_WORDS: &[&str] = &["false", "null", "true"];

pub(crate) fn is_keyword(word: &str) -> bool {
    KEYWORDS.binary_search(&word).is_ok()
}

pub(crate) fn is_literal_word(word: &str) -> bool {
    LITERAL_WORDS.contains(&word)
}

/// Replaces `\uXXXX` escapes (any number of `u`s) with the characters they
/// encode. Surrogate pairs are joined; lone surrogates become U+FFFD.
pub(crate) fn decode_unicode_escapes(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }

    let mut decoded = String::with_capacity(text.len());
    let mut units = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        if let Some((unit, after)) = split_unicode_escape(rest) {
            units.push(unit);
            rest = after;
            continue;
        }
        flush_utf16(&mut decoded, &mut units);
        let mut chars = rest.chars();
        decoded.extend(chars.next());
        rest = chars.as_str();
    }
    flush_utf16(&mut decoded, &mut units);
    Cow::Owned(decoded)
}

fn split_unicode_escape(text: &str) -> Option<(u16, &str)> {
    let escape = text.strip_prefix('\\')?;
    let digits = escape.trim_start_matches('u');
    if digits.len() == escape.len() {
        return None;
    }
    let hex = digits.get(..4)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let unit = u16::from_str_radix(hex, 16).ok()?;
    Some((unit, &digits[4..]))
}

fn flush_utf16(decoded: &mut String, units: &mut Vec<u16>) {
    decoded.extend(
        char::decode_utf16(units.drain(..)).map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}

/// Broad token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    /// Numbers, strings, text blocks, characters, `true`, `false`, `null`.
    Literal,
    /// Operators and separators, including braces and `@`.
    Operator,
}

/// A single Java token borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub range: TextRange,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, range: TextRange) -> Self {
        Self { kind, text, range }
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    /// The token text with Unicode escapes decoded; borrowed when there are none.
    pub fn unescaped(&self) -> Cow<'src, str> {
        decode_unicode_escapes(self.text)
    }

    /// Identifier with exactly this text (used for contextual keywords).
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Identifier && self.unescaped() == word
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.unescaped() == keyword
    }

    pub fn is_operator(&self, operator: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == operator
    }

    /// `int`, `boolean`, ..., and `void`.
    pub fn is_primitive_type(&self) -> bool {
        self.kind == TokenKind::Keyword && PRIMITIVE_TYPES.contains(&&*self.unescaped())
    }
}

impl Ranged for Token<'_> {
    fn range(&self) -> TextRange {
        self.range
    }
}
