//! arrowhead_core: Source position types shared by every arrowhead crate.
//!
//! All positions are byte offsets into the UTF-8 source text.

pub mod text;

pub use text::{LineAndColumn, LineMap, TextPos, TextRange, TextSpan};
