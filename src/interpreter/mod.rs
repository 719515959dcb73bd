pub mod context;
mod executor;

use crate::environment::Environment;
use crate::source::normalize;
use crate::value::error::{RuntimeError, SourceError};
pub use executor::{Executor, LineCursor};
use std::{fs::read_to_string, io::ErrorKind, path::Path};

/// Where printed values and reports go.
pub trait SystemContext {
    fn writeln(&mut self, text: &str);
    fn ewriteln(&mut self, text: &str);
}

/// Read a whole script into memory.
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
        _ => SourceError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Runs scripts against a single environment. State defined by one call to
/// [`Interpreter::run`] stays visible to later calls on the same interpreter.
pub struct Interpreter<C: SystemContext> {
    environment: Environment,
    context: C,
}

impl<C> Interpreter<C>
where
    C: SystemContext,
{
    pub fn new(context: C) -> Self {
        Self {
            environment: Environment::new(),
            context,
        }
    }

    pub fn run(&mut self, source: &str) -> Result<(), RuntimeError> {
        let lines = normalize(source);
        tracing::debug!(lines = lines.len(), "running script");
        Executor::new(&mut self.environment, &mut self.context).execute_lines(&lines)
    }

    /// Run the script at `path`. A missing file is reported through the
    /// context and is not an error.
    pub fn run_file(&mut self, path: &Path) -> Result<(), SourceError> {
        let source = match read_source(path) {
            Ok(source) => source,
            Err(error @ SourceError::NotFound(_)) => {
                tracing::warn!(path = %path.display(), "script not found");
                self.context.ewriteln(&error.to_string());
                return Ok(());
            }
            Err(error) => return Err(error),
        };
        self.run(&source)?;
        Ok(())
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }
}
