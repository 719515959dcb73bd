mod span;

pub use span::{Span, SpanIndex};

/// One non-blank physical line of a script.
///
/// The text keeps its leading spaces, which carry the nesting depth of the
/// line, but has trailing whitespace removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'src> {
    pub text: &'src str,
    pub number: u32,
    pub span: Span,
}

impl<'src> Line<'src> {
    /// Number of leading space characters. Tabs do not count.
    pub fn indent(&self) -> usize {
        self.text.len() - self.text.trim_start_matches(' ').len()
    }

    pub fn content(&self) -> &'src str {
        self.text.trim()
    }
}

/// Split a script into its executable lines.
pub fn normalize(source: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for (index, raw) in source.split('\n').enumerate() {
        let start = offset;
        offset += raw.len() + 1;

        let text = raw.trim_end();
        if text.trim().is_empty() {
            continue;
        }
        lines.push(Line {
            text,
            number: (index + 1) as u32,
            span: Span::new(start.into(), (start + text.len()).into()),
        });
    }
    lines
}
