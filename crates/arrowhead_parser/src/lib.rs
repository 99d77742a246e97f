//! arrowhead_parser: single-pass recursive descent parser for ECMAScript,
//! TypeScript and JSX.
//!
//! Tokens are pulled from the scanner one at a time and turned into an
//! arena-allocated tree. Parenthesized lists that may be either call
//! arguments or arrow parameters are parsed once through a cover grammar and
//! resolved by the token that follows the closing parenthesis.

mod context;
mod cover;
mod declarations;
mod expressions;
mod jsx;
mod parser;
mod precedence;
mod statements;
mod types;

pub use context::Context;
pub use parser::{ParseResult, Parser, MAX_NESTING_DEPTH};
pub use precedence::{get_binary_operator_precedence, OperatorPrecedence};

use arrowhead_options::ParseOptions;
use bumpalo::Bump;

/// Parse `source` into a `ScriptBody` or `ModuleBody` allocated in `arena`.
///
/// Syntax errors never abort the parse; they are returned alongside a
/// best-effort tree.
pub fn parse<'a>(arena: &'a Bump, source: &'a str, options: &ParseOptions) -> ParseResult<'a> {
    Parser::new(arena, source, *options).parse()
}
