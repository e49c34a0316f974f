//! Documentation sources.
//!
//! The scanner only consumes text; where that text comes from is behind
//! `DocSource` so tests and alternative toolchains can supply their own.

use std::process::Command;

use thiserror::Error;

/// Failure to obtain documentation text for a module.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to run go doc: {0}")]
    Io(#[from] std::io::Error),

    #[error("go doc {module:?} failed: {stderr}")]
    GoDoc { module: String, stderr: String },
}

/// Supplies raw documentation text for a module path.
pub trait DocSource {
    fn load(&self, module_path: &str) -> Result<String, SourceError>;
}

/// Production source: runs `go doc -all <module>` with modules disabled,
/// the mode under which the declaration grammar is printed one per line.
pub struct GoDoc;

impl DocSource for GoDoc {
    fn load(&self, module_path: &str) -> Result<String, SourceError> {
        let output = Command::new("go")
            .args(["doc", "-all", module_path])
            .env("GO111MODULE", "off")
            .output()?;

        if !output.status.success() {
            return Err(SourceError::GoDoc {
                module: module_path.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
