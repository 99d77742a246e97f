//! arrowhead_ast: syntax tree definitions for the arrowhead parser.
//!
//! This crate defines the token and node kinds, the token classifier, the
//! flag types, the arena-allocated node shapes and the factory that builds
//! them.

pub mod classifier;
pub mod factory;
pub mod generated;
pub mod node;
pub mod syntax_kind;
pub mod types;
pub mod visitor;

// Re-export key types
pub use classifier::TokenCategory;
pub use factory::NodeFactory;
pub use node::*;
pub use syntax_kind::SyntaxKind;
pub use types::*;
pub use visitor::Visit;
