use crate::source::Span;
use compact_str::CompactString;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeErrorKind {
    #[error("Unknown Class: {class} (instantiating {object})")]
    UnknownClass {
        class: CompactString,
        object: CompactString,
    },
    #[error("Unknown Object: {object} (assigning {property})")]
    UnknownObject {
        object: CompactString,
        property: CompactString,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("[line {line}] {kind}")]
pub struct RuntimeError {
    #[source]
    pub kind: RuntimeErrorKind,
    pub line: u32,
    pub span: Span,
}

impl RuntimeError {
    pub fn code(&self) -> &'static str {
        match self.kind {
            RuntimeErrorKind::UnknownClass { .. } => "RT001",
            RuntimeErrorKind::UnknownObject { .. } => "RT002",
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
