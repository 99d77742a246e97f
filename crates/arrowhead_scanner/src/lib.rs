//! arrowhead_scanner: Lexer for ECMAScript and TypeScript source text.
//!
//! The scanner works on byte offsets into a borrowed `&str` and never
//! allocates per token. It supports:
//! - All punctuation, keyword and literal tokens
//! - An explicit regex-allowed mode for a leading `/`
//! - Template literal continuation and `>` rescanning
//! - JSX text, attribute values and dashed tag names
//!
//! The whole scanner state is a small `Copy` value, so the parser can
//! checkpoint and rewind it cheaply during speculative parsing.

mod char_codes;
mod scanner;

pub use scanner::{Scanner, ScannerState};
