use super::ELSE_MARKER;
use crate::source::Line;

/// The bodies of a conditional, still carrying their original indentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branches<'src> {
    pub success: Vec<Line<'src>>,
    pub failure: Vec<Line<'src>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<'src> {
    pub branches: Branches<'src>,
    /// Number of lines taken from the input, else marker included.
    pub consumed: usize,
}

/// Split the lines following a conditional header into its two branches.
///
/// Lines indented deeper than the header belong to the branch being filled.
/// An `else:` at exactly the header's indentation switches to the false
/// branch and is dropped. The first other line at or above the header's
/// indentation ends the conditional and is left unconsumed.
pub fn extract_branches<'src>(lines: &[Line<'src>], header_indent: usize) -> Extraction<'src> {
    let mut branches = Branches::default();
    let mut in_failure = false;
    let mut consumed = 0;

    for line in lines {
        let indent = line.indent();
        if indent > header_indent {
            if in_failure {
                branches.failure.push(*line);
            } else {
                branches.success.push(*line);
            }
        } else if indent == header_indent && line.content() == ELSE_MARKER {
            in_failure = true;
        } else {
            break;
        }
        consumed += 1;
    }

    tracing::trace!(
        header_indent,
        consumed,
        success = branches.success.len(),
        failure = branches.failure.len(),
        "extracted conditional branches"
    );
    Extraction { branches, consumed }
}
