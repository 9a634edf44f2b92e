//! Tagcheck Checker
//!
//! Verifies that tags in HTML/JSX-like source are balanced: every opening
//! tag has a matching closing tag and tags nest properly. Void elements and
//! explicitly self-closed tags are skipped.
//!
//! Malformed markup is the expected input, not a failure: problems come back
//! as a list of [`Diagnostic`]s. Only reading the file can fail.
//!
//! ```text
//! source → Scanner::tokenize() → Checker::feed() … finish() → Vec<Diagnostic>
//! ```
//!
//! # Example
//!
//! ```
//! let diagnostics = tagcheck_checker::check("<div><span></div>");
//! let messages: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
//! assert_eq!(
//!     messages,
//!     vec![
//!         "Error: Mismatched tag. Opened <span> at line 1, closed </div> at line 1",
//!         "Error: Unclosed tag <div> opened at line 1",
//!     ]
//! );
//! ```

pub mod checker;
pub mod diagnostic;

use std::path::{Path, PathBuf};

pub use checker::{Checker, OpenTag};
pub use diagnostic::Diagnostic;
use tagcheck_lexer::Scanner;

/// Failure to obtain the source text.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Check tag balance in source text.
pub fn check(source: &str) -> Vec<Diagnostic> {
    let mut checker = Checker::new();
    for token in Scanner::tokenize(source) {
        checker.feed(&token);
    }
    let diagnostics = checker.finish();
    tracing::debug!("Tag check produced {} diagnostics", diagnostics.len());
    diagnostics
}

/// Read a file and check its tag balance.
///
/// The whole file is read into memory before scanning begins.
pub fn analyze(path: impl AsRef<Path>) -> Result<Vec<Diagnostic>, AnalyzeError> {
    let source = read_source(path)?;
    Ok(check(&source))
}

/// Read a whole source file as text.
///
/// Line endings are normalized to `\n` (`\r\n` and lone `\r` both count as
/// one line break), so spans refer to the normalized text.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, AnalyzeError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| AnalyzeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {}", raw.len(), path.display());
    Ok(normalize_newlines(&raw))
}

fn normalize_newlines(source: &str) -> String {
    if !source.contains('\r') {
        return source.to_string();
    }
    source.replace("\r\n", "\n").replace('\r', "\n")
}
