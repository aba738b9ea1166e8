//! Lexer and recursive-descent parser for the EdModel DSL.
//!
//! This module provides the syntactic front end:
//! - **logos** for fast lexing, with the multi-word keyword table compiled
//!   into the automaton
//! - a predictive, non-backtracking parser with 1-2 tokens of lookahead
//! - a typed, owned syntax tree built bottom-up in one pass
//! - accumulate-all diagnostics with resynchronizing recovery
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind + line/column
//!     ↓
//! Parser → grammar productions (one function per rule)
//!     ↓
//! ast::Namespace tree + Diagnostics
//! ```
//!
//! The parser is synchronous and free of shared mutable state; parse
//! independent source units concurrently with [`parse_units`].

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
mod errors;
pub(crate) mod grammar;
mod lexer;
mod token_kind;

pub use ast::*;
pub use errors::{Diagnostic, DiagnosticKind, Severity};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, parse, parse_units};
pub use token_kind::TokenKind;
