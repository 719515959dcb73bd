use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpanIndex(u32);

impl SpanIndex {
    pub const fn to_usize(&self) -> usize {
        self.0 as usize
    }
}

impl From<SpanIndex> for usize {
    fn from(value: SpanIndex) -> Self {
        value.0 as usize
    }
}

impl From<usize> for SpanIndex {
    fn from(value: usize) -> Self {
        Self(value as u32)
    }
}

/// Byte range of a line inside the original script text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: SpanIndex,
    pub end: SpanIndex,
}

impl Span {
    pub fn new(start: SpanIndex, end: SpanIndex) -> Self {
        Self { start, end }
    }

    pub fn range(&self) -> Range<usize> {
        self.start.to_usize()..self.end.to_usize()
    }
}
