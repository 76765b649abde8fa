#![warn(missing_docs)]
//! Mermaid Core - headless lexing and error-position reconciliation for Mermaid sources.
//!
//! # Overview
//!
//! `mermaid-core` provides the two pieces of an editor integration for Mermaid diagrams that
//! carry real logic, and the small amount of document state they operate on:
//!
//! - **Lexer**: a restartable, first-match-wins tokenizer that covers its input with
//!   classified tokens for syntax highlighting.
//! - **Error range resolver**: maps `(message, line, column)` triples reported by an external
//!   renderer, whose indexing conventions vary, onto in-bounds ranges of the current text.
//!
//! Both are pure: they hold no shared state and may be called from any thread.
//!
//! # Quick Start
//!
//! ```rust
//! use mermaid_core::{DiagnosticError, LineIndex, TokenKind, resolve_error_range, tokenize};
//!
//! let text = "graph TD\n  A[Start] --> B";
//! let kinds: Vec<TokenKind> = tokenize(text).iter().map(|t| t.kind).collect();
//! assert_eq!(kinds[0], TokenKind::DiagramType);
//!
//! let index = LineIndex::from_text(text);
//! let range = resolve_error_range(&index, &DiagnosticError::at("bad arrow", 2, 12));
//! assert_eq!((range.start, range.end), (20, 21));
//! ```
//!
//! # Module Description
//!
//! - [`lexer`] - tokenizer
//! - [`classifier`] - keyword / diagram type / direction tables
//! - [`resolver`] - error range resolution and best-effort annotation
//! - [`line_index`] - rope based line index
//! - [`state`] - live document with style layers and diagnostics
//! - [`processing`] - derived-state edits produced by processors

pub mod classifier;
pub mod diagnostics;
pub mod intervals;
pub mod lexer;
pub mod line_index;
pub mod processing;
pub mod resolver;
pub mod state;
pub mod token;
pub mod view;

pub use classifier::classify_identifier;
pub use diagnostics::{
    Diagnostic, DiagnosticBatch, DiagnosticError, DiagnosticRange, DiagnosticSeverity,
    UNKNOWN_POSITION,
};
pub use intervals::{DIAGNOSTIC_ERROR_STYLE_ID, Interval, StyleId, StyleLayer, StyleLayerId};
pub use lexer::{LexError, Lexer, scan_token, tokenize, tokenize_range};
pub use line_index::LineIndex;
pub use processing::{DocumentProcessor, ProcessingEdit};
pub use resolver::{
    AnnotationReport, AnnotationSink, annotate_batch, resolve_batch, resolve_error_range,
};
pub use state::{
    AnnotationError, MermaidDocument, StateChange, StateChangeCallback, StateChangeType,
};
pub use token::{Token, TokenKind};
pub use view::DocumentView;
