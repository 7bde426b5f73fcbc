//! Byte offsets and ranges into source text.
//!
//! Offsets are stored as `u32`; source files larger than 4GiB are not
//! supported.

mod range;
mod size;

#[cfg(feature = "serde")]
mod serde_impls;

pub use range::TextRange;
pub use size::TextSize;

/// Something that occupies a range of source text.
pub trait Ranged {
    fn range(&self) -> TextRange;

    fn start(&self) -> TextSize {
        self.range().start()
    }

    fn end(&self) -> TextSize {
        self.range().end()
    }
}

impl Ranged for TextRange {
    fn range(&self) -> TextRange {
        *self
    }
}
