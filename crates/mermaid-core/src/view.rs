//! Read-only document view used by the error range resolver.

/// A line-indexed, read-only view of a document snapshot.
///
/// Offsets are character offsets. Implementations must keep
/// `line_start_offset(i) <= line_end_offset(i) <= len_chars()` for every line, and clamp
/// out-of-range lines to the end of the document.
pub trait DocumentView {
    /// Number of lines in the document.
    fn line_count(&self) -> usize;

    /// Offset of the first character of `line`.
    fn line_start_offset(&self, line: usize) -> usize;

    /// Offset just past the last character of `line`, excluding its line terminator.
    fn line_end_offset(&self, line: usize) -> usize;

    /// Length of the whole document.
    fn len_chars(&self) -> usize;
}

impl<T: DocumentView + ?Sized> DocumentView for &T {
    fn line_count(&self) -> usize {
        (**self).line_count()
    }

    fn line_start_offset(&self, line: usize) -> usize {
        (**self).line_start_offset(line)
    }

    fn line_end_offset(&self, line: usize) -> usize {
        (**self).line_end_offset(line)
    }

    fn len_chars(&self) -> usize {
        (**self).len_chars()
    }
}
