//! Recursive descent parser for the EdModel DSL.
//!
//! Builds the typed syntax tree from tokens. Dispatch is predictive with
//! one or two tokens of lookahead (three across an optional namespace
//! qualifier); there is no backtracking. All failures become diagnostics
//! with best-effort recovery - parsing never raises.

use rayon::prelude::*;
use smol_str::SmolStr;
use text_size::TextSize;

use super::ast::Namespace;
use super::errors::{Diagnostic, DiagnosticKind};
use super::grammar;
use super::lexer::{Lexer, Token};
use super::token_kind::TokenKind;
use crate::base::{LineIndex, Position};

/// Parse result containing the namespaces and any diagnostics.
///
/// A parse always terminates and always yields this pair; the tree may be
/// partial when diagnostics are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    pub namespaces: Vec<Namespace>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parse {
    /// Check if parsing succeeded without diagnostics
    pub fn ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Check if any diagnostic is a syntax error. Callers typically refuse
    /// to run semantic validation while this holds.
    pub fn has_syntax_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::Syntax && d.is_error())
    }
}

/// Parse one DSL source unit (one or more namespace blocks).
pub fn parse(source: &str) -> Parse {
    let mut diagnostics = Vec::new();
    let mut tokens = Vec::new();
    for token in Lexer::new(source) {
        if token.kind == TokenKind::Error {
            diagnostics.push(Diagnostic::lexical(
                format!("token recognition error at: '{}'", token.text),
                token.position,
            ));
        } else {
            tokens.push(token);
        }
    }

    tracing::trace!(tokens = tokens.len(), "lexed source unit");
    let eof_position = LineIndex::new(source).position(TextSize::of(source));
    let mut parser = Parser::new(&tokens, diagnostics, eof_position);
    let namespaces = grammar::parse_source_unit(&mut parser);
    Parse {
        namespaces,
        diagnostics: parser.finish(),
    }
}

/// Parse independent source units in parallel.
///
/// Each unit gets its own parser instance; there is no shared mutable
/// state, so units scale embarrassingly across threads.
pub fn parse_units<'a, I>(sources: I) -> Vec<Parse>
where
    I: IntoParallelIterator<Item = &'a str>,
{
    sources.into_par_iter().map(parse).collect()
}

/// The parser state
pub(crate) struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    diagnostics: Vec<Diagnostic>,
    eof_position: Position,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(
        tokens: &'a [Token<'a>],
        diagnostics: Vec<Diagnostic>,
        eof_position: Position,
    ) -> Self {
        Self {
            tokens,
            pos: 0,
            diagnostics,
            eof_position,
        }
    }

    /// Sort accumulated diagnostics into source-position order and hand
    /// them off. Stable, so same-position diagnostics keep emit order.
    pub(crate) fn finish(mut self) -> Vec<Diagnostic> {
        self.diagnostics.sort_by_key(|d| d.position);
        self.diagnostics
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    pub(crate) fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn peek(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    /// Lookahead without consuming: `nth(0)` is the current token.
    pub(crate) fn nth(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.peek() == Some(kind)
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    fn current_position(&self) -> Position {
        self.current()
            .map(|t| t.position)
            .unwrap_or(self.eof_position)
    }

    fn current_text(&self) -> &str {
        self.current().map(|t| t.text).unwrap_or("<EOF>")
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    /// Advance one token. Returns the consumed token; at EOF returns None.
    pub(crate) fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.current().cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or report a mismatch.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Option<Token<'a>> {
        if self.at(kind) {
            self.bump()
        } else {
            self.error_expecting(kind.display());
            None
        }
    }

    /// Consume an identifier and return its name.
    pub(crate) fn expect_id(&mut self) -> Option<SmolStr> {
        self.expect(TokenKind::Id).map(|t| SmolStr::new(t.text))
    }

    /// Consume a TEXT block and return its content without the quotes.
    pub(crate) fn expect_text(&mut self) -> Option<String> {
        self.expect(TokenKind::Text)
            .map(|t| strip_delimiters(t.text).to_string())
    }

    /// Consume an unsigned integer literal.
    pub(crate) fn expect_unsigned(&mut self) -> Option<u32> {
        let token = self.expect(TokenKind::UnsignedInt)?;
        match token.text.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.diagnostics.push(Diagnostic::syntax(
                    format!("integer value out of range: '{}'", token.text),
                    token.position,
                ));
                None
            }
        }
    }

    /// Consume an optional model id (`[42]`) and return its digits.
    pub(crate) fn model_id_opt(&mut self) -> Option<SmolStr> {
        if self.at(TokenKind::ModelId) {
            self.bump().map(|t| SmolStr::new(strip_delimiters(t.text)))
        } else {
            None
        }
    }

    // =========================================================================
    // Error handling & recovery
    // =========================================================================

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        let position = self.current_position();
        self.diagnostics.push(Diagnostic::syntax(message, position));
    }

    /// Report the current token as mismatched against what the active
    /// production expected. `expected` is a display string: one quoted
    /// literal or a `{'a', 'b', ...}` alternative set.
    pub(crate) fn error_expecting(&mut self, expected: &str) {
        let message = format!(
            "mismatched input '{}' expecting {}",
            self.current_text(),
            expected
        );
        self.error(message);
    }

    /// Skip tokens until the stop predicate matches or the stream ends.
    /// Every error path funnels through this one routine.
    pub(crate) fn skip_until(&mut self, stop: impl Fn(TokenKind) -> bool) {
        let mut skipped = 0usize;
        while let Some(kind) = self.peek() {
            if stop(kind) {
                break;
            }
            self.pos += 1;
            skipped += 1;
        }
        if skipped > 0 {
            tracing::debug!(skipped, "resynchronized after syntax error");
        }
    }

    /// Resynchronize after a failed production: skip tokens until one that
    /// can start a new top-level entity, a namespace delimiter, or a token
    /// the caller's context can resume at.
    pub(crate) fn recover(&mut self, also_stop_at: impl Fn(TokenKind) -> bool) {
        self.skip_until(|kind| {
            kind.starts_top_level_entity()
                || kind == TokenKind::BeginNamespace
                || kind == TokenKind::EndNamespace
                || also_stop_at(kind)
        });
    }

    /// Recover to the next top-level entity or namespace delimiter.
    pub(crate) fn recover_to_top_level(&mut self) {
        self.recover(|_| false);
    }
}

/// Drop the single-character delimiters around TEXT (`"..."`) and model id
/// (`[...]`) tokens.
fn strip_delimiters(text: &str) -> &str {
    let mut chars = text.chars();
    if chars.next().is_some() && chars.next_back().is_some() {
        chars.as_str()
    } else {
        text
    }
}
