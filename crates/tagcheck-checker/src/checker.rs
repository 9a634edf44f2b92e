//! Stack-based tag balancing.
//!
//! Tokens are fed in document order. Opening tags are pushed with their line;
//! a closing tag pops the innermost open tag and reports a mismatch if the
//! names differ. There is no recovery: the pop happens either way.
//! Self-closing and void tags never touch the stack.

use crate::diagnostic::Diagnostic;
use tagcheck_lexer::Token;

/// A tag that has been opened and not yet closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTag {
    pub name: String,
    pub line: usize,
}

/// Tag balance checker.
///
/// Holds the open-tag stack (innermost last) and the diagnostics emitted so far.
#[derive(Debug, Default)]
pub struct Checker {
    stack: Vec<OpenTag>,
    diagnostics: Vec<Diagnostic>,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one token.
    pub fn feed(&mut self, token: &Token) {
        if token.is_self_closing() {
            return;
        }

        if !token.is_closing {
            self.stack.push(OpenTag {
                name: token.name.clone(),
                line: token.line(),
            });
            return;
        }

        match self.stack.pop() {
            Some(open) if open.name != token.name => {
                self.diagnostics.push(Diagnostic::Mismatch {
                    opened: open.name,
                    opened_line: open.line,
                    closed: token.name.clone(),
                    closed_line: token.line(),
                });
            }
            Some(_) => {}
            None => {
                self.diagnostics.push(Diagnostic::UnexpectedClose {
                    name: token.name.clone(),
                    line: token.line(),
                });
            }
        }
    }

    /// Number of tags currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Currently open tags, outermost first.
    pub fn open_tags(&self) -> &[OpenTag] {
        &self.stack
    }

    /// Drain the stack innermost-first, reporting each remaining tag as unclosed.
    pub fn finish(mut self) -> Vec<Diagnostic> {
        while let Some(open) = self.stack.pop() {
            self.diagnostics.push(Diagnostic::Unclosed {
                name: open.name,
                line: open.line,
            });
        }
        self.diagnostics
    }
}
