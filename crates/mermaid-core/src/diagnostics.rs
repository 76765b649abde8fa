//! Diagnostics data model.
//!
//! Renderer errors arrive as [`DiagnosticError`] values whose positions follow no single
//! convention. The resolver turns each of them into a [`DiagnosticRange`] in the current
//! document, and the stored, resolved form is a [`Diagnostic`].

/// Sentinel used by renderers for "position unknown".
pub const UNKNOWN_POSITION: i32 = -1;

/// An error as reported by the external renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticError {
    /// Human-readable message.
    pub message: String,
    /// Line number, 0-based or 1-based depending on the reporter; negative when unknown.
    pub line: i32,
    /// 1-based column; zero or negative when unknown.
    pub column: i32,
}

impl DiagnosticError {
    /// Create an error with an unknown position.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: UNKNOWN_POSITION,
            column: UNKNOWN_POSITION,
        }
    }

    /// Create an error at `line` / `column`.
    pub fn at(message: impl Into<String>, line: i32, column: i32) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }

    /// Whether the reporter supplied a line number.
    pub fn has_line(&self) -> bool {
        self.line >= 0
    }
}

/// Errors from one renderer round-trip, in reporting order.
///
/// The first error is the primary one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticBatch {
    errors: Vec<DiagnosticError>,
}

impl DiagnosticBatch {
    /// Create a batch from errors in reporting order.
    pub fn new(errors: Vec<DiagnosticError>) -> Self {
        Self { errors }
    }

    /// The first reported error.
    pub fn primary(&self) -> Option<&DiagnosticError> {
        self.errors.first()
    }

    /// Number of errors beyond the primary one.
    pub fn suppressed_count(&self) -> usize {
        self.errors.len().saturating_sub(1)
    }

    /// All errors, in reporting order.
    pub fn errors(&self) -> &[DiagnosticError] {
        &self.errors
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the batch holds no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over errors in reporting order.
    pub fn iter(&self) -> std::slice::Iter<'_, DiagnosticError> {
        self.errors.iter()
    }
}

impl From<Vec<DiagnosticError>> for DiagnosticBatch {
    fn from(errors: Vec<DiagnosticError>) -> Self {
        Self::new(errors)
    }
}

impl FromIterator<DiagnosticError> for DiagnosticBatch {
    fn from_iter<I: IntoIterator<Item = DiagnosticError>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DiagnosticBatch {
    type Item = &'a DiagnosticError;
    type IntoIter = std::slice::Iter<'a, DiagnosticError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// A half-open character-offset range (`start..end`) in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticRange {
    /// Range start offset (inclusive), in Unicode scalar values (`char`).
    pub start: usize,
    /// Range end offset (exclusive), in Unicode scalar values (`char`).
    pub end: usize,
}

impl DiagnosticRange {
    /// Create a new diagnostic range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    /// Error diagnostics.
    Error,
}

/// A resolved diagnostic stored on the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Range in character offsets.
    pub range: DiagnosticRange,
    /// Diagnostic severity.
    pub severity: DiagnosticSeverity,
    /// Diagnostic message.
    pub message: String,
}

impl Diagnostic {
    /// An error-severity diagnostic.
    pub fn error(range: DiagnosticRange, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: DiagnosticSeverity::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_primary_and_suppressed() {
        let batch: DiagnosticBatch = vec![
            DiagnosticError::at("first", 2, 1),
            DiagnosticError::new("second"),
            DiagnosticError::new("third"),
        ]
        .into();

        assert_eq!(batch.primary().map(|e| e.message.as_str()), Some("first"));
        assert_eq!(batch.suppressed_count(), 2);
        assert_eq!(batch.len(), 3);
    }

    #[test]
    fn test_empty_batch() {
        let batch = DiagnosticBatch::default();
        assert!(batch.is_empty());
        assert!(batch.primary().is_none());
        assert_eq!(batch.suppressed_count(), 0);
    }

    #[test]
    fn test_unknown_position_defaults() {
        let error = DiagnosticError::new("oops");
        assert_eq!(error.line, -1);
        assert_eq!(error.column, -1);
        assert!(!error.has_line());
    }
}
