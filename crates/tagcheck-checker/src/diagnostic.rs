use std::fmt;

/// A structural problem found while balancing tags.
///
/// `Display` renders the one-line console message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A closing tag arrived while no tag was open.
    UnexpectedClose { name: String, line: usize },
    /// A closing tag didn't match the innermost open tag.
    Mismatch {
        opened: String,
        opened_line: usize,
        closed: String,
        closed_line: usize,
    },
    /// A tag was still open at end of input.
    Unclosed { name: String, line: usize },
}

impl Diagnostic {
    /// Line the problem is reported at. For a mismatch, the closing tag's line.
    pub fn line(&self) -> usize {
        match self {
            Diagnostic::UnexpectedClose { line, .. } | Diagnostic::Unclosed { line, .. } => *line,
            Diagnostic::Mismatch { closed_line, .. } => *closed_line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnexpectedClose { name, line } => {
                write!(f, "Error: Unexpected closing tag </{name}> at line {line}")
            }
            Diagnostic::Mismatch {
                opened,
                opened_line,
                closed,
                closed_line,
            } => write!(
                f,
                "Error: Mismatched tag. Opened <{opened}> at line {opened_line}, closed </{closed}> at line {closed_line}"
            ),
            Diagnostic::Unclosed { name, line } => {
                write!(f, "Error: Unclosed tag <{name}> opened at line {line}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unexpected_close_message() {
        let d = Diagnostic::UnexpectedClose {
            name: "p".into(),
            line: 1,
        };
        assert_eq!(d.to_string(), "Error: Unexpected closing tag </p> at line 1");
    }

    #[test]
    fn test_mismatch_message() {
        let d = Diagnostic::Mismatch {
            opened: "span".into(),
            opened_line: 3,
            closed: "div".into(),
            closed_line: 7,
        };
        assert_eq!(
            d.to_string(),
            "Error: Mismatched tag. Opened <span> at line 3, closed </div> at line 7"
        );
        assert_eq!(d.line(), 7);
    }

    #[test]
    fn test_unclosed_message() {
        let d = Diagnostic::Unclosed {
            name: "ns:tag".into(),
            line: 12,
        };
        assert_eq!(d.to_string(), "Error: Unclosed tag <ns:tag> opened at line 12");
        assert_eq!(d.line(), 12);
    }
}
