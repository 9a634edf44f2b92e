//! Tagcheck Lexer
//!
//! Extracts tag tokens (`<div>`, `</div>`, `<Foo />`, `<svg:path>`) from
//! HTML/JSX-like source. The scan is best-effort: anything that isn't shaped
//! like a tag is skipped, so tokenizing never fails.
//!
//! # Example
//!
//! ```
//! use tagcheck_lexer::Scanner;
//!
//! let tokens = Scanner::tokenize("<p>Hello<br></p>");
//! assert_eq!(tokens.len(), 3);
//! assert!(tokens[1].is_self_closing()); // void element
//! assert!(tokens[2].is_closing);
//! ```

pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{is_void_element, Span, Token, VOID_ELEMENTS};
