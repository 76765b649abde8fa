//! The error banner shown above the preview.
//!
//! Only the primary error is spelled out; the rest are summarized as a count. Inline markers
//! cover every error of the batch separately.

use mermaid_core::DiagnosticBatch;

/// Summary of a diagnostic batch for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    title: String,
    message: String,
    suppressed: usize,
}

impl ErrorBanner {
    /// Build a banner for `batch`, or `None` when there is nothing to show.
    pub fn from_batch(batch: &DiagnosticBatch, title: impl Into<String>) -> Option<Self> {
        let primary = batch.primary()?;
        Some(Self {
            title: title.into(),
            message: primary.message.clone(),
            suppressed: batch.suppressed_count(),
        })
    }

    /// Banner title, e.g. `Mermaid Error:`.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The primary error message, verbatim.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of errors not spelled out.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    /// Render as an HTML label.
    ///
    /// The message is XML-escaped and its newlines become `<br/>`; the title is inserted as is.
    pub fn to_html(&self) -> String {
        let message = escape_xml(&self.message).replace('\n', "<br/>");
        let extra = if self.suppressed > 0 {
            format!("<br/>(and {} more errors)", self.suppressed)
        } else {
            String::new()
        };
        format!("<html>{}<br/>{message}{extra}</html>", self.title)
    }
}

/// Escape the XML special characters `& < > " '`.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
