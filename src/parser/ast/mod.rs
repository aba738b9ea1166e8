//! Typed syntax tree for the EdModel DSL.
//!
//! The tree is a pure append-only structure: nodes own their children in
//! declaration order, carry no parent back-references, and are never
//! mutated after the parse that built them. Consumers traverse by value
//! and must rely only on field values and child ordering.
//!
//! Text conventions:
//! - identifiers are stored as [`smol_str::SmolStr`]
//! - documentation / deprecation text is stored without the surrounding
//!   quotes, escapes untouched
//! - model ids (`[42]`) are stored as their digits (`42`)

mod entities;
mod namespace;
mod properties;

pub use entities::*;
pub use namespace::*;
pub use properties::*;
