//! Generic document processing interfaces.
//!
//! Highlighters and diagnostic publishers produce [`ProcessingEdit`] values describing derived
//! state (style layers, diagnostics). The caller applies them with
//! [`MermaidDocument::apply_processing_edits`](crate::MermaidDocument::apply_processing_edits).

use crate::MermaidDocument;
use crate::diagnostics::Diagnostic;
use crate::intervals::{Interval, StyleLayerId};

/// A change to derived document state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingEdit {
    /// Replace an entire style layer with the given intervals (char offsets).
    ReplaceStyleLayer {
        /// The style layer being replaced.
        layer: StyleLayerId,
        /// The full set of style intervals for the layer (char offsets, half-open).
        intervals: Vec<Interval>,
    },
    /// Clear a style layer.
    ClearStyleLayer {
        /// The style layer being cleared.
        layer: StyleLayerId,
    },
    /// Replace all resolved diagnostics.
    ReplaceDiagnostics {
        /// The complete diagnostic list, in reporting order.
        diagnostics: Vec<Diagnostic>,
    },
    /// Clear all diagnostics.
    ClearDiagnostics,
}

/// A processor that produces [`ProcessingEdit`]s for a document.
pub trait DocumentProcessor {
    /// The error type returned by [`DocumentProcessor::process`].
    type Error;

    /// Compute derived state updates for `document`.
    ///
    /// Implementations should not mutate the document; they return edits for the caller to
    /// apply.
    fn process(&mut self, document: &MermaidDocument) -> Result<Vec<ProcessingEdit>, Self::Error>;
}
