//! `mermaid-core-highlight` - token-based syntax highlighting for `mermaid-core`.
//!
//! The highlighter runs the `mermaid-core` lexer over a document and turns every styled token
//! into an [`Interval`] in character offsets. Whitespace and bad characters are left unstyled.

use mermaid_core::intervals::{Interval, StyleId, StyleLayerId};
use mermaid_core::processing::{DocumentProcessor, ProcessingEdit};
use mermaid_core::{LexError, LineIndex, MermaidDocument, TokenKind, tokenize, tokenize_range};
use std::convert::Infallible;

/// Default `StyleId` constants for Mermaid token kinds.
///
/// These are only identifiers. UI/theme layer is expected to map them to actual colors.
pub const MERMAID_STYLE_KEYWORD: StyleId = 0x0200_0001;
pub const MERMAID_STYLE_DIAGRAM_TYPE: StyleId = 0x0200_0002;
pub const MERMAID_STYLE_DIRECTION: StyleId = 0x0200_0003;
pub const MERMAID_STYLE_COMMENT: StyleId = 0x0200_0004;
pub const MERMAID_STYLE_STRING: StyleId = 0x0200_0005;
pub const MERMAID_STYLE_ARROW: StyleId = 0x0200_0006;
pub const MERMAID_STYLE_BRACKET: StyleId = 0x0200_0007;
pub const MERMAID_STYLE_NODE_ID: StyleId = 0x0200_0008;

/// Style ids assigned to each highlighted token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MermaidStyles {
    pub keyword: StyleId,
    pub diagram_type: StyleId,
    pub direction: StyleId,
    pub comment: StyleId,
    pub string: StyleId,
    pub arrow: StyleId,
    pub bracket: StyleId,
    pub node_id: StyleId,
}

impl Default for MermaidStyles {
    fn default() -> Self {
        Self {
            keyword: MERMAID_STYLE_KEYWORD,
            diagram_type: MERMAID_STYLE_DIAGRAM_TYPE,
            direction: MERMAID_STYLE_DIRECTION,
            comment: MERMAID_STYLE_COMMENT,
            string: MERMAID_STYLE_STRING,
            arrow: MERMAID_STYLE_ARROW,
            bracket: MERMAID_STYLE_BRACKET,
            node_id: MERMAID_STYLE_NODE_ID,
        }
    }
}

impl MermaidStyles {
    /// The style for `kind`, or `None` for kinds that are never styled.
    pub fn style_for(&self, kind: TokenKind) -> Option<StyleId> {
        match kind {
            TokenKind::Keyword => Some(self.keyword),
            TokenKind::DiagramType => Some(self.diagram_type),
            TokenKind::Direction => Some(self.direction),
            TokenKind::Comment => Some(self.comment),
            TokenKind::String => Some(self.string),
            TokenKind::Arrow => Some(self.arrow),
            TokenKind::Bracket => Some(self.bracket),
            TokenKind::NodeId => Some(self.node_id),
            TokenKind::Whitespace | TokenKind::BadCharacter => None,
        }
    }

    /// Every styled kind with its style id, for building a theme or settings page.
    pub fn entries(&self) -> Vec<(TokenKind, StyleId)> {
        TokenKind::ALL
            .into_iter()
            .filter_map(|kind| self.style_for(kind).map(|style| (kind, style)))
            .collect()
    }

    /// Reverse lookup of [`MermaidStyles::style_for`].
    pub fn kind_for(&self, style_id: StyleId) -> Option<TokenKind> {
        TokenKind::ALL
            .into_iter()
            .find(|&kind| self.style_for(kind) == Some(style_id))
    }
}

/// Token-based Mermaid syntax highlighter.
#[derive(Debug, Clone, Default)]
pub struct MermaidHighlighter {
    styles: MermaidStyles,
}

impl MermaidHighlighter {
    pub fn new(styles: MermaidStyles) -> Self {
        Self { styles }
    }

    pub fn styles(&self) -> &MermaidStyles {
        &self.styles
    }

    /// Highlight the whole document and return style intervals (char offsets).
    ///
    /// The text is scanned as a whole rather than per line: string literals may span lines.
    pub fn highlight(&self, line_index: &LineIndex) -> Vec<Interval> {
        let text = line_index.get_text();
        tokenize(&text)
            .into_iter()
            .filter_map(|token| {
                let style_id = self.styles.style_for(token.kind)?;
                Some(Interval::new(
                    line_index.byte_to_char(token.start),
                    line_index.byte_to_char(token.end),
                    style_id,
                ))
            })
            .collect()
    }

    /// Highlight the byte window `text[from..to]`.
    ///
    /// Interval offsets are characters from the start of `text`, not of the window.
    pub fn highlight_text(
        &self,
        text: &str,
        from: usize,
        to: usize,
    ) -> Result<Vec<Interval>, LexError> {
        let tokens = tokenize_range(text, from, to)?;

        let mut intervals = Vec::with_capacity(tokens.len());
        let mut char_pos = tokens
            .first()
            .map_or(0, |token| text[..token.start].chars().count());

        for token in tokens {
            let start = char_pos;
            char_pos += token.text(text).chars().count();
            if let Some(style_id) = self.styles.style_for(token.kind) {
                intervals.push(Interval::new(start, char_pos, style_id));
            }
        }

        Ok(intervals)
    }
}

/// A processor that applies a [`MermaidHighlighter`] into a [`StyleLayerId`] via `mermaid-core`'s
/// generic processing interface.
#[derive(Debug, Clone)]
pub struct MermaidHighlightProcessor {
    layer: StyleLayerId,
    highlighter: MermaidHighlighter,
}

impl MermaidHighlightProcessor {
    pub fn new(layer: StyleLayerId, highlighter: MermaidHighlighter) -> Self {
        Self { layer, highlighter }
    }

    pub fn layer(&self) -> StyleLayerId {
        self.layer
    }

    pub fn highlighter(&self) -> &MermaidHighlighter {
        &self.highlighter
    }

    pub fn highlighter_mut(&mut self) -> &mut MermaidHighlighter {
        &mut self.highlighter
    }
}

impl Default for MermaidHighlightProcessor {
    fn default() -> Self {
        Self::new(StyleLayerId::MERMAID_SYNTAX, MermaidHighlighter::default())
    }
}

impl DocumentProcessor for MermaidHighlightProcessor {
    type Error = Infallible;

    fn process(&mut self, document: &MermaidDocument) -> Result<Vec<ProcessingEdit>, Self::Error> {
        let intervals = self.highlighter.highlight(document.line_index());
        log::debug!(
            "highlighted {} spans at document version {}",
            intervals.len(),
            document.version()
        );
        Ok(vec![ProcessingEdit::ReplaceStyleLayer {
            layer: self.layer,
            intervals,
        }])
    }
}
