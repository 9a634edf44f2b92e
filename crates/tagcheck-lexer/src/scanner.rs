use crate::token::{Span, Token};

/// Tag scanner.
///
/// Walks the source looking for tag-shaped substrings:
///
/// ```text
/// < /? name ( whitespace attributes )? /? whitespace* >
/// ```
///
/// where `name` is a run of ASCII letters, digits and `:`. This is a lexical
/// scan, not a grammar: it has no notion of quoted attribute values, comments
/// or embedded expressions, so an attribute containing `>` ends the tag early.
///
/// - `Vec<(usize, char)>` source for index-based navigation with byte offsets
/// - No error state: text that doesn't form a tag is skipped
/// - Line numbers recomputed from the full source at every match
pub struct Scanner<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().collect(),
            pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source into tag tokens, in document order.
    pub fn tokenize(source: &str) -> Vec<Token> {
        let mut scanner = Scanner::new(source);
        scanner.scan_tokens();
        tracing::debug!(
            "Scanned {} tag tokens from {} bytes",
            scanner.tokens.len(),
            source.len()
        );
        scanner.tokens
    }

    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            if self.peek() == '<' {
                if let Some(token) = self.scan_tag() {
                    self.tokens.push(token);
                    continue;
                }
            }
            self.advance();
        }
    }

    /// Try to match a tag starting at the current `<`.
    ///
    /// On success the scanner is moved past the closing `>`; on failure the
    /// position is left untouched so the caller resumes one char later.
    fn scan_tag(&mut self) -> Option<Token> {
        let start = self.pos;
        let mut cursor = start + 1;

        let is_closing = self.char_at(cursor) == '/';
        if is_closing {
            cursor += 1;
        }

        let name_start = cursor;
        while is_name_char(self.char_at(cursor)) {
            cursor += 1;
        }
        if cursor == name_start {
            return None;
        }
        let name: String = self.chars[name_start..cursor].iter().map(|&(_, c)| c).collect();

        let (self_closing, end) = if is_space(self.char_at(cursor)) {
            self.scan_attributes(cursor)?
        } else {
            self.scan_tag_end(cursor)?
        };

        let start_byte = self.byte_offset(start);
        let (line, column) = self.line_and_column(start_byte);
        let span = Span::new(start_byte, self.byte_offset(end), line, column);

        self.pos = end;
        Some(Token::new(name, is_closing, self_closing, span))
    }

    /// Attribute segment: everything up to the first `>`.
    /// The tag is self-closing if that segment ends in `/` (ignoring trailing whitespace).
    fn scan_attributes(&self, from: usize) -> Option<(bool, usize)> {
        let close = (from..self.chars.len()).find(|&i| self.chars[i].1 == '>')?;
        let self_closing = self.chars[from..close]
            .iter()
            .rev()
            .map(|&(_, c)| c)
            .find(|&c| !is_space(c))
            == Some('/');
        Some((self_closing, close + 1))
    }

    /// Bare tag end right after the name: `/? whitespace* >`.
    fn scan_tag_end(&self, from: usize) -> Option<(bool, usize)> {
        let mut cursor = from;
        let self_closing = self.char_at(cursor) == '/';
        if self_closing {
            cursor += 1;
        }
        while is_space(self.char_at(cursor)) {
            cursor += 1;
        }
        if self.char_at(cursor) != '>' {
            return None;
        }
        Some((self_closing, cursor + 1))
    }

    // --- Positions ---

    /// 1-based line (count of `\n` before `offset`, plus one) and column.
    fn line_and_column(&self, offset: usize) -> (usize, usize) {
        let before = &self.source[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.chars
            .get(index)
            .map_or(self.source.len(), |&(offset, _)| offset)
    }

    // --- Helpers ---

    fn peek(&self) -> char {
        self.char_at(self.pos)
    }

    fn char_at(&self, index: usize) -> char {
        self.chars.get(index).map_or('\0', |&(_, c)| c)
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ':'
}

/// Whitespace between a name and its attributes or `>`.
/// Unicode whitespace plus the ASCII separators `\x1c`..=`\x1f`.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
