//! Turning a diagnostic batch into document state.

use crate::banner::ErrorBanner;
use crate::config::DiagnosticsConfig;
use crate::payload::parse_payload;
use mermaid_core::{
    AnnotationReport, Diagnostic, DiagnosticBatch, DocumentProcessor, DocumentView, Interval,
    MermaidDocument, ProcessingEdit, annotate_batch, resolve_batch,
};
use std::convert::Infallible;

fn marker_intervals<'a, I>(diagnostics: I, config: &DiagnosticsConfig) -> Vec<Interval>
where
    I: IntoIterator<Item = &'a Diagnostic>,
{
    diagnostics
        .into_iter()
        .filter(|diag| !diag.range.is_empty())
        .map(|diag| Interval::new(diag.range.start, diag.range.end, config.style_id))
        .collect()
}

/// Convert a batch into processing edits.
///
/// The resulting edits include:
/// - a marker layer replacement (`config.layer`) for rendering underlines
/// - `ProcessingEdit::ReplaceDiagnostics` with one entry per error, in batch order
///
/// Ranges are resolved against `view`, which must be the text the edits will be applied to.
pub fn batch_to_processing_edits<V>(
    view: &V,
    batch: &DiagnosticBatch,
    config: &DiagnosticsConfig,
) -> Vec<ProcessingEdit>
where
    V: DocumentView + ?Sized,
{
    let diagnostics: Vec<Diagnostic> = resolve_batch(view, batch)
        .into_iter()
        .zip(batch)
        .map(|(range, error)| Diagnostic::error(range, error.message.clone()))
        .collect();

    vec![
        ProcessingEdit::ReplaceStyleLayer {
            layer: config.layer,
            intervals: marker_intervals(&diagnostics, config),
        },
        ProcessingEdit::ReplaceDiagnostics { diagnostics },
    ]
}

/// Edits removing all markers and diagnostics.
pub fn clear_edits(config: &DiagnosticsConfig) -> Vec<ProcessingEdit> {
    vec![
        ProcessingEdit::ClearStyleLayer {
            layer: config.layer,
        },
        ProcessingEdit::ClearDiagnostics,
    ]
}

/// Publish `batch` into a live document, best-effort.
///
/// Ranges are resolved against `snapshot`, the text the renderer saw. The live document may
/// have changed since; annotations it can no longer hold are dropped individually and the rest
/// of the batch is still applied.
pub fn publish_batch<V>(
    document: &mut MermaidDocument,
    snapshot: &V,
    batch: &DiagnosticBatch,
    config: &DiagnosticsConfig,
) -> AnnotationReport
where
    V: DocumentView + ?Sized,
{
    document.clear_diagnostics();
    let report = annotate_batch(snapshot, batch, document);
    if report.dropped > 0 {
        log::debug!(
            "published {} of {} diagnostics; document is at version {}",
            report.applied,
            batch.len(),
            document.version()
        );
    }

    let intervals = marker_intervals(document.diagnostics(), config);
    document.replace_style_layer(config.layer, intervals);
    report
}

/// Holds the latest renderer result and keeps a document's diagnostics in sync with it.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsProcessor {
    config: DiagnosticsConfig,
    batch: DiagnosticBatch,
}

impl DiagnosticsProcessor {
    /// Create a processor with no stored errors.
    pub fn new(config: DiagnosticsConfig) -> Self {
        Self {
            config,
            batch: DiagnosticBatch::default(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &DiagnosticsConfig {
        &self.config
    }

    /// The latest batch.
    pub fn batch(&self) -> &DiagnosticBatch {
        &self.batch
    }

    /// Store the errors of a failed render.
    pub fn set_batch(&mut self, batch: DiagnosticBatch) {
        self.batch = batch;
    }

    /// Decode and store a raw renderer error payload.
    pub fn set_payload(&mut self, raw: &str) {
        self.batch = parse_payload(raw);
    }

    /// Forget the stored errors, e.g. after a successful render.
    pub fn clear(&mut self) {
        self.batch = DiagnosticBatch::default();
    }

    /// Banner for the stored errors.
    pub fn banner(&self) -> Option<ErrorBanner> {
        ErrorBanner::from_batch(&self.batch, self.config.banner_title.as_str())
    }
}

impl DocumentProcessor for DiagnosticsProcessor {
    type Error = Infallible;

    fn process(&mut self, document: &MermaidDocument) -> Result<Vec<ProcessingEdit>, Self::Error> {
        // Blank sources are never sent to the renderer, so any stored errors are stale.
        if self.batch.is_empty() || document.text().trim().is_empty() {
            return Ok(clear_edits(&self.config));
        }
        Ok(batch_to_processing_edits(
            document.line_index(),
            &self.batch,
            &self.config,
        ))
    }
}
