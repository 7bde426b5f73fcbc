use std::fmt;
use std::num::NonZeroUsize;

use casecheck_text_size::TextSize;

/// Byte offsets of the start of every line in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "get-size", derive(get_size2::GetSize))]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    kind: IndexKind,
}

/// Whether the text is pure ASCII, in which case columns are byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "get-size", derive(get_size2::GetSize))]
enum IndexKind {
    Ascii,
    Utf8,
}

impl LineIndex {
    /// Builds the index by scanning `text` for `\n`.
    pub fn from_source_text(text: &str) -> Self {
        let mut line_starts = Vec::with_capacity(text.len() / 40 + 1);
        line_starts.push(TextSize::default());

        for newline in memchr::memchr_iter(b'\n', text.as_bytes()) {
            // Offsets past u32::MAX are clamped; TextSize cannot address them.
            let start = TextSize::try_from(newline + 1).unwrap_or(TextSize::MAX);
            line_starts.push(start);
        }

        let kind = if text.is_ascii() {
            IndexKind::Ascii
        } else {
            IndexKind::Utf8
        };

        Self { line_starts, kind }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The 0-based line containing `offset`.
    fn line_of(&self, offset: TextSize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next_line) => next_line - 1,
        }
    }

    /// The 1-based line and column of `offset`. Columns count characters.
    pub fn line_column(&self, offset: TextSize, text: &str) -> SourceLocation {
        let line = self.line_of(offset);
        let line_start = self.line_starts[line];

        let column = match self.kind {
            IndexKind::Ascii => (offset - line_start).to_usize(),
            IndexKind::Utf8 => {
                let end = offset.to_usize().min(text.len());
                text.get(line_start.to_usize()..end)
                    .map_or(0, |prefix| prefix.chars().count())
            }
        };

        SourceLocation {
            line: OneIndexed::from_zero_indexed(line),
            column: OneIndexed::from_zero_indexed(column),
        }
    }
}

/// A 1-based index, used for lines and columns.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "get-size", derive(get_size2::GetSize))]
pub struct OneIndexed(NonZeroUsize);

impl OneIndexed {
    pub const MIN: OneIndexed = OneIndexed(NonZeroUsize::MIN);

    pub const fn new(value: usize) -> Option<Self> {
        match NonZeroUsize::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    pub const fn from_zero_indexed(value: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(value))
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for OneIndexed {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Debug for OneIndexed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OneIndexed").field(&self.get()).finish()
    }
}

impl fmt::Display for OneIndexed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

/// A 1-based line/column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLocation {
    pub line: OneIndexed,
    pub column: OneIndexed,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
