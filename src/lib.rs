//! # edmodel-lang
//!
//! Core library for EdModel DSL lexing, parsing, and syntax tree
//! construction. The EdModel language describes educational-data
//! metamodels: domain entities, associations, enumerations, descriptors,
//! common types, domains, and data-interchange manifests.
//!
//! This crate is the syntactic front end only: one source unit in, one
//! (tree, diagnostics) pair out. Semantic validation, cross-reference
//! resolution, and artifact generation consume the tree downstream.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → Logos lexer, recursive-descent parser, typed AST, diagnostics
//!   ↓
//! base      → Primitives (Position, LineIndex, TextRange)
//! ```
//!
//! ## Example
//!
//! ```
//! let source = r#"
//! Begin Namespace EdFi core
//!   Domain Entity Student
//!     documentation "A student."
//!     string StudentName
//!       documentation "The student's name."
//!       is required
//!       max length 75
//! End Namespace
//! "#;
//!
//! let parse = edmodel::parse(source);
//! assert!(parse.ok());
//! assert_eq!(parse.namespaces.len(), 1);
//! ```

// ============================================================================
// MODULES (dependency order: base → parser)
// ============================================================================

/// Foundation types: Position, LineIndex, TextRange
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, typed AST, diagnostics
pub mod parser;

// Re-export the public surface
pub use base::{LineIndex, Position, TextRange, TextSize};
pub use parser::{Diagnostic, DiagnosticKind, Parse, Severity, parse, parse_units};
