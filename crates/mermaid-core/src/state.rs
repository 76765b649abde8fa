//! Live document state.
//!
//! [`MermaidDocument`] owns the text of one diagram source together with the state derived from
//! it (style layers and resolved diagnostics). Every change bumps a version number and notifies
//! subscribers, so a frontend can tell whether results computed for an older snapshot are still
//! current.
//!
//! # Example
//!
//! ```rust
//! use mermaid_core::{MermaidDocument, StateChangeType};
//!
//! let mut document = MermaidDocument::new("graph TD\n  A --> B");
//! document.subscribe(|change| {
//!     println!("{:?}: {} -> {}", change.change_type, change.old_version, change.new_version);
//! });
//!
//! document.insert(0, "%% demo\n");
//! assert_eq!(document.version(), 1);
//! assert_eq!(document.line_index().line_count(), 3);
//! ```

use crate::diagnostics::{Diagnostic, DiagnosticError, DiagnosticRange};
use crate::intervals::{Interval, StyleId, StyleLayer, StyleLayerId};
use crate::line_index::LineIndex;
use crate::processing::{DocumentProcessor, ProcessingEdit};
use crate::resolver::AnnotationSink;
use std::collections::BTreeMap;
use thiserror::Error;

/// State change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChangeType {
    /// Document text modified
    DocumentModified,
    /// A style layer changed
    StyleChanged,
    /// Diagnostics changed
    DiagnosticsChanged,
}

/// State change record
#[derive(Debug, Clone)]
pub struct StateChange {
    /// Change type
    pub change_type: StateChangeType,
    /// Old version number
    pub old_version: u64,
    /// New version number
    pub new_version: u64,
}

/// State change callback function type
pub type StateChangeCallback = Box<dyn FnMut(&StateChange) + Send>;

/// Reasons an annotation cannot be applied to the live document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    /// `start > end`.
    #[error("inverted range {start}..{end}")]
    InvertedRange {
        /// Range start.
        start: usize,
        /// Range end.
        end: usize,
    },
    /// The range reaches past the current end of the document.
    #[error("range {start}..{end} exceeds document length {len}")]
    OutOfBounds {
        /// Range start.
        start: usize,
        /// Range end.
        end: usize,
        /// Current document length in chars.
        len: usize,
    },
}

/// A diagram source document plus its derived state.
pub struct MermaidDocument {
    line_index: LineIndex,
    version: u64,
    style_layers: BTreeMap<StyleLayerId, StyleLayer>,
    diagnostics: Vec<Diagnostic>,
    callbacks: Vec<StateChangeCallback>,
}

impl MermaidDocument {
    /// Create a document holding `text`.
    pub fn new(text: &str) -> Self {
        Self {
            line_index: LineIndex::from_text(text),
            version: 0,
            style_layers: BTreeMap::new(),
            diagnostics: Vec::new(),
            callbacks: Vec::new(),
        }
    }

    /// The line index of the current text.
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// The current text.
    pub fn text(&self) -> String {
        self.line_index.get_text()
    }

    /// Current character count.
    pub fn char_count(&self) -> usize {
        self.line_index.char_count()
    }

    /// Current version. Incremented by every change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether anything changed after `version`.
    pub fn has_changed_since(&self, version: u64) -> bool {
        self.version > version
    }

    /// Replace the whole text.
    pub fn set_text(&mut self, text: &str) {
        self.line_index = LineIndex::from_text(text);
        self.mark_modified(StateChangeType::DocumentModified);
    }

    /// Insert `text` at a character offset.
    pub fn insert(&mut self, char_offset: usize, text: &str) {
        self.line_index.insert(char_offset, text);
        self.mark_modified(StateChangeType::DocumentModified);
    }

    /// Delete `len_chars` characters starting at `start_char`.
    pub fn delete(&mut self, start_char: usize, len_chars: usize) {
        self.line_index.delete(start_char, len_chars);
        self.mark_modified(StateChangeType::DocumentModified);
    }

    /// Replace all intervals in a style layer.
    ///
    /// Triggers `StyleChanged` once for the whole layer.
    pub fn replace_style_layer(&mut self, layer: StyleLayerId, intervals: Vec<Interval>) {
        if intervals.is_empty() {
            self.style_layers.remove(&layer);
        } else {
            self.style_layers
                .insert(layer, StyleLayer::from_intervals(intervals));
        }
        self.mark_modified(StateChangeType::StyleChanged);
    }

    /// Clear a style layer.
    pub fn clear_style_layer(&mut self, layer: StyleLayerId) {
        self.style_layers.remove(&layer);
        self.mark_modified(StateChangeType::StyleChanged);
    }

    /// The intervals of one style layer, if it is populated.
    pub fn style_layer(&self, layer: StyleLayerId) -> Option<&StyleLayer> {
        self.style_layers.get(&layer)
    }

    /// Style ids covering `offset`, across all layers, in layer order.
    pub fn styles_at(&self, offset: usize) -> Vec<StyleId> {
        let mut styles: Vec<StyleId> = self
            .style_layers
            .values()
            .flat_map(|layer| layer.query_point(offset))
            .map(|interval| interval.style_id)
            .collect();
        styles.dedup();
        styles
    }

    /// Resolved diagnostics, in reporting order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Replace diagnostics wholesale.
    pub fn replace_diagnostics(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics = diagnostics;
        self.mark_modified(StateChangeType::DiagnosticsChanged);
    }

    /// Clear all diagnostics.
    pub fn clear_diagnostics(&mut self) {
        self.diagnostics.clear();
        self.mark_modified(StateChangeType::DiagnosticsChanged);
    }

    /// Apply edits produced by a [`DocumentProcessor`].
    pub fn apply_processing_edits<I>(&mut self, edits: I)
    where
        I: IntoIterator<Item = ProcessingEdit>,
    {
        for edit in edits {
            match edit {
                ProcessingEdit::ReplaceStyleLayer { layer, intervals } => {
                    self.replace_style_layer(layer, intervals);
                }
                ProcessingEdit::ClearStyleLayer { layer } => {
                    self.clear_style_layer(layer);
                }
                ProcessingEdit::ReplaceDiagnostics { diagnostics } => {
                    self.replace_diagnostics(diagnostics);
                }
                ProcessingEdit::ClearDiagnostics => {
                    self.clear_diagnostics();
                }
            }
        }
    }

    /// Run a [`DocumentProcessor`] against the current document and apply its edits.
    pub fn apply_processor<P>(&mut self, processor: &mut P) -> Result<(), P::Error>
    where
        P: DocumentProcessor,
    {
        let edits = processor.process(self)?;
        self.apply_processing_edits(edits);
        Ok(())
    }

    /// Subscribe to state change notifications
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&StateChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    fn mark_modified(&mut self, change_type: StateChangeType) {
        let old_version = self.version;
        self.version += 1;

        let change = StateChange {
            change_type,
            old_version,
            new_version: self.version,
        };
        for callback in &mut self.callbacks {
            callback(&change);
        }
    }
}

impl AnnotationSink for MermaidDocument {
    type Error = AnnotationError;

    /// Append a diagnostic for `range`, which must fit the current text.
    fn annotate(
        &mut self,
        error: &DiagnosticError,
        range: DiagnosticRange,
    ) -> Result<(), Self::Error> {
        let DiagnosticRange { start, end } = range;
        if start > end {
            return Err(AnnotationError::InvertedRange { start, end });
        }
        let len = self.char_count();
        if end > len {
            return Err(AnnotationError::OutOfBounds { start, end, len });
        }

        self.diagnostics
            .push(Diagnostic::error(range, error.message.clone()));
        self.mark_modified(StateChangeType::DiagnosticsChanged);
        Ok(())
    }
}
