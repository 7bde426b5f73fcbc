use std::fmt;
use std::num::TryFromIntError;
use std::ops::{Add, Sub};

/// A byte offset into source text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "get-size", derive(get_size2::GetSize))]
pub struct TextSize {
    raw: u32,
}

impl TextSize {
    pub const MAX: TextSize = TextSize { raw: u32::MAX };

    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self { raw }
    }

    /// The offset as a `usize`, for slicing.
    #[inline]
    pub const fn to_usize(self) -> usize {
        self.raw as usize
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)
    }
}

impl From<u32> for TextSize {
    #[inline]
    fn from(raw: u32) -> Self {
        TextSize::new(raw)
    }
}

impl From<TextSize> for u32 {
    #[inline]
    fn from(value: TextSize) -> Self {
        value.raw
    }
}

impl From<TextSize> for usize {
    #[inline]
    fn from(value: TextSize) -> Self {
        value.to_usize()
    }
}

impl TryFrom<usize> for TextSize {
    type Error = TryFromIntError;

    #[inline]
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Ok(u32::try_from(value)?.into())
    }
}

impl Add for TextSize {
    type Output = TextSize;

    #[inline]
    fn add(self, rhs: TextSize) -> TextSize {
        TextSize::new(self.raw + rhs.raw)
    }
}

impl Sub for TextSize {
    type Output = TextSize;

    #[inline]
    fn sub(self, rhs: TextSize) -> TextSize {
        TextSize::new(self.raw - rhs.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = TextSize::new(10);
        let b = TextSize::new(4);
        assert_eq!(a + b, TextSize::new(14));
        assert_eq!(a - b, TextSize::new(6));
    }

    #[test]
    fn conversions() {
        assert_eq!(TextSize::try_from(7usize).unwrap(), TextSize::new(7));
        assert_eq!(usize::from(TextSize::new(3)), 3);
        assert_eq!(u32::from(TextSize::new(9)), 9);
        assert_eq!(TextSize::new(42).to_string(), "42");
    }
}
