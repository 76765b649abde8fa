#![warn(missing_docs)]
//! `mermaid-core-diagnostics` - renderer error reporting for `mermaid-core`.
//!
//! The diagram renderer runs outside this workspace and reports failures as a JSON payload.
//! This crate decodes that payload (degrading gracefully when it is malformed), builds the
//! error banner, and turns the errors into inline markers on a
//! [`MermaidDocument`](mermaid_core::MermaidDocument).

pub mod banner;
pub mod config;
pub mod payload;
pub mod publish;

pub use banner::{ErrorBanner, escape_xml};
pub use config::{DEFAULT_BANNER_TITLE, DiagnosticsConfig};
pub use payload::{PayloadError, parse_batch_strict, parse_error_strict, parse_payload};
pub use publish::{
    DiagnosticsProcessor, batch_to_processing_edits, clear_edits, publish_batch,
};
