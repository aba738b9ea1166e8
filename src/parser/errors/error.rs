//! Diagnostic types for the lexer and parser.

use thiserror::Error;

use crate::base::Position;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// A hard error that prevents valid parsing
    #[default]
    Error,
    /// A warning that doesn't prevent parsing
    Warning,
}

impl Severity {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// The two failure families the front end can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DiagnosticKind {
    /// Input matched no token rule; reported by the lexer, recovered by
    /// skipping the offending characters.
    #[error("lexical error")]
    Lexical,
    /// An expected token or production was absent, or an unexpected token
    /// appeared where a fixed set of alternatives was required.
    #[error("syntax error")]
    Syntax,
}

/// A problem found while lexing or parsing one source unit.
///
/// Diagnostics accumulate in source order; the parse always terminates and
/// always returns the full list alongside the (possibly partial) tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// Human-readable message, e.g. `mismatched input 'documentation'
    /// expecting ID`.
    pub message: String,
    /// Position of the offending token (line 1-based, column 0-based).
    pub position: Position,
}

impl Diagnostic {
    pub fn syntax(message: impl Into<String>, position: Position) -> Self {
        Self {
            kind: DiagnosticKind::Syntax,
            severity: Severity::Error,
            message: message.into(),
            position,
        }
    }

    pub fn lexical(message: impl Into<String>, position: Position) -> Self {
        Self {
            kind: DiagnosticKind::Lexical,
            severity: Severity::Error,
            message: message.into(),
            position,
        }
    }

    /// Check if this diagnostic is error-severity
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}, {}",
            self.kind, self.message, self.position
        )
    }
}
