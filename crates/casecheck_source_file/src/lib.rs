//! Line/column lookup for source text.

mod line_index;

pub use line_index::{LineIndex, OneIndexed, SourceLocation};

use casecheck_text_size::TextSize;

/// Source text paired with its [`LineIndex`].
#[derive(Debug, Clone, Copy)]
pub struct SourceCode<'src, 'index> {
    text: &'src str,
    index: &'index LineIndex,
}

impl<'src, 'index> SourceCode<'src, 'index> {
    pub fn new(text: &'src str, index: &'index LineIndex) -> Self {
        Self { text, index }
    }

    /// The 1-based line and column of `offset`.
    pub fn line_column(&self, offset: TextSize) -> SourceLocation {
        self.index.line_column(offset, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_line_columns() {
        let text = "class A {\r\n  int x;\r\n}";
        let index = LineIndex::from_source_text(text);
        let code = SourceCode::new(text, &index);
        let x = TextSize::try_from(text.find('x').unwrap()).unwrap();
        assert_eq!(code.line_column(x).to_string(), "2:7");
        assert_eq!(code.line_column(TextSize::new(0)).to_string(), "1:1");
    }
}
