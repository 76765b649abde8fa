//! Diagnostics display configuration.

use mermaid_core::{DIAGNOSTIC_ERROR_STYLE_ID, StyleId, StyleLayerId};

/// Default banner title.
pub const DEFAULT_BANNER_TITLE: &str = "Mermaid Error:";

/// Where and how renderer errors are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    /// Style layer receiving the inline error markers.
    pub layer: StyleLayerId,
    /// Style id of an inline error marker.
    pub style_id: StyleId,
    /// Title line of the error banner.
    pub banner_title: String,
}

impl DiagnosticsConfig {
    /// The default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different style layer for markers.
    pub fn with_layer(mut self, layer: StyleLayerId) -> Self {
        self.layer = layer;
        self
    }

    /// Use a different marker style id.
    pub fn with_style_id(mut self, style_id: StyleId) -> Self {
        self.style_id = style_id;
        self
    }

    /// Use a different banner title.
    pub fn with_banner_title(mut self, title: impl Into<String>) -> Self {
        self.banner_title = title.into();
        self
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            layer: StyleLayerId::DIAGNOSTICS,
            style_id: DIAGNOSTIC_ERROR_STYLE_ID,
            banner_title: DEFAULT_BANNER_TITLE.to_string(),
        }
    }
}
