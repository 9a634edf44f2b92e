/// A position in source text, tracking line and column for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// A tag occurrence matched by the scanner.
///
/// `self_closing` only records an explicit trailing `/` (`<br/>`, `<Foo />`).
/// Use [`Token::is_self_closing`] to also account for void elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub name: String,
    pub is_closing: bool,
    pub self_closing: bool,
    pub span: Span,
}

impl Token {
    pub fn new(name: impl Into<String>, is_closing: bool, self_closing: bool, span: Span) -> Self {
        Self {
            name: name.into(),
            is_closing,
            self_closing,
            span,
        }
    }

    /// True if the tag never opens a scope: explicit `/>` or a void element.
    pub fn is_self_closing(&self) -> bool {
        self.self_closing || is_void_element(&self.name)
    }

    /// Line number of the tag's `<`.
    pub fn line(&self) -> usize {
        self.span.line
    }
}

/// Elements treated as self-closing even without a trailing `/`.
pub const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// Check if a tag name is a void element.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}
