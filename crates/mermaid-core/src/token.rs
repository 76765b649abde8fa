//! Token model produced by the [`Lexer`](crate::Lexer).

use std::ops::Range;

/// Category of a scanned token.
///
/// Identifier-shaped lexemes never surface as a bare "identifier": the classifier always
/// refines them into [`TokenKind::DiagramType`], [`TokenKind::Direction`],
/// [`TokenKind::Keyword`] or [`TokenKind::NodeId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `%%` line comment.
    Comment,
    /// Run of whitespace, line terminators included.
    Whitespace,
    /// Double-quoted string literal.
    String,
    /// Edge/link glyph such as `-->`, `==>` or `-.->`.
    Arrow,
    /// Node-shape delimiter or separator (`[`, `((`, `:`, `,` ...).
    Bracket,
    /// Structural keyword (`subgraph`, `participant`, `loop`, ...).
    Keyword,
    /// Diagram opener (`graph`, `sequenceDiagram`, ...).
    DiagramType,
    /// Layout direction code (`TD`, `LR`, ...).
    Direction,
    /// Any other identifier: a user-defined node or entity name.
    NodeId,
    /// A single character no rule accepts.
    BadCharacter,
}

impl TokenKind {
    /// All token kinds, in declaration order.
    pub const ALL: [TokenKind; 10] = [
        TokenKind::Comment,
        TokenKind::Whitespace,
        TokenKind::String,
        TokenKind::Arrow,
        TokenKind::Bracket,
        TokenKind::Keyword,
        TokenKind::DiagramType,
        TokenKind::Direction,
        TokenKind::NodeId,
        TokenKind::BadCharacter,
    ];

    /// Whether this kind is the classification of an identifier-shaped lexeme.
    pub fn is_identifier_derived(self) -> bool {
        matches!(
            self,
            TokenKind::Keyword | TokenKind::DiagramType | TokenKind::Direction | TokenKind::NodeId
        )
    }

    /// User-facing name, e.g. for a color settings page.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Comment => "Comment",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::String => "String",
            TokenKind::Arrow => "Arrow",
            TokenKind::Bracket => "Bracket",
            TokenKind::Keyword => "Keyword",
            TokenKind::DiagramType => "Diagram Type",
            TokenKind::Direction => "Direction",
            TokenKind::NodeId => "Node ID",
            TokenKind::BadCharacter => "Bad Character",
        }
    }
}

/// A classified, non-empty span `[start, end)` of the scanned text, in byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token category.
    pub kind: TokenKind,
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Token {
    /// Create a token spanning `[start, end)`.
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// Byte range covered by the token.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The lexeme of this token within the text it was scanned from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}
