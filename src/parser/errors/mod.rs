//! Parser diagnostics.
//!
//! The front end never aborts: every lexical or syntactic problem becomes a
//! [`Diagnostic`] and parsing continues after resynchronization. Callers
//! decide what is fatal (for instance, refusing to run semantic validation
//! while any syntax error is present).

mod error;

pub use error::{Diagnostic, DiagnosticKind, Severity};
