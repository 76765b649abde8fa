//! Error range resolution.
//!
//! Renderer positions are unreliable: the line may be 0-based, 1-based or missing, the column
//! may be missing, and either may point past the current document (the text can change after
//! the renderer ran). [`resolve_error_range`] maps any such position to an in-bounds range,
//! degrading from a single character to the whole line to the whole document.
//!
//! [`annotate_batch`] applies a whole batch through an [`AnnotationSink`] on a best-effort
//! basis: a sink failure drops that one annotation and the batch carries on.

use crate::diagnostics::{DiagnosticBatch, DiagnosticError, DiagnosticRange};
use crate::view::DocumentView;

/// Resolve the range to mark for `error` in `view`.
///
/// The result always satisfies `0 <= start <= end <= view.len_chars()`, and is non-empty unless
/// the document is.
pub fn resolve_error_range<V>(view: &V, error: &DiagnosticError) -> DiagnosticRange
where
    V: DocumentView + ?Sized,
{
    let whole = DiagnosticRange::new(0, view.len_chars());
    let line_count = view.line_count();
    if error.line < 0 || line_count == 0 {
        return whole;
    }

    // A positive line is 1-based; line 0 also means the first line.
    let line = if error.line > 0 {
        (error.line - 1) as usize
    } else {
        0
    };
    let line = line.min(line_count - 1);
    let line_start = view.line_start_offset(line);
    let line_end = view.line_end_offset(line);

    let (start, end) = if error.column > 0 {
        let start = line_start
            .saturating_add(error.column as usize - 1)
            .min(line_end);
        (start, (start + 1).min(line_end))
    } else {
        (line_start, line_end)
    };

    if start < end {
        DiagnosticRange::new(start, end)
    } else if line_start < line_end {
        DiagnosticRange::new(line_start, line_end)
    } else {
        whole
    }
}

/// Resolve every error of `batch`, in order.
pub fn resolve_batch<V>(view: &V, batch: &DiagnosticBatch) -> Vec<DiagnosticRange>
where
    V: DocumentView + ?Sized,
{
    batch
        .iter()
        .map(|error| resolve_error_range(view, error))
        .collect()
}

/// Destination for resolved error ranges, typically a live document.
///
/// Applying may fail, e.g. when the document changed after the ranges were resolved.
pub trait AnnotationSink {
    /// The error type returned by [`AnnotationSink::annotate`].
    type Error: std::fmt::Display;

    /// Mark `range` for `error`.
    fn annotate(&mut self, error: &DiagnosticError, range: DiagnosticRange)
    -> Result<(), Self::Error>;
}

/// Outcome of [`annotate_batch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationReport {
    /// Annotations the sink accepted.
    pub applied: usize,
    /// Annotations the sink rejected.
    pub dropped: usize,
}

/// Resolve every error of `batch` against `view` and hand it to `sink`.
///
/// Sink failures are logged and counted, never propagated: each error is applied
/// independently of the others.
pub fn annotate_batch<V, S>(view: &V, batch: &DiagnosticBatch, sink: &mut S) -> AnnotationReport
where
    V: DocumentView + ?Sized,
    S: AnnotationSink + ?Sized,
{
    let mut report = AnnotationReport::default();
    for error in batch {
        let range = resolve_error_range(view, error);
        match sink.annotate(error, range) {
            Ok(()) => report.applied += 1,
            Err(err) => {
                log::debug!(
                    "dropping annotation {}..{} for {:?}: {err}",
                    range.start,
                    range.end,
                    error.message
                );
                report.dropped += 1;
            }
        }
    }
    report
}
