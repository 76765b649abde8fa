//! Classification of identifier-shaped lexemes.
//!
//! Membership is exact and case-sensitive. The tables are checked in priority order:
//! diagram types, then directions, then keywords; anything else is a node id.

use crate::token::TokenKind;

/// Diagram openers.
pub const DIAGRAM_TYPES: &[&str] = &[
    "graph",
    "flowchart",
    "sequenceDiagram",
    "classDiagram",
    "stateDiagram",
    "stateDiagram-v2",
    "erDiagram",
    "gantt",
    "pie",
    "gitGraph",
    "requirementDiagram",
    "journey",
    "timeline",
    "mindmap",
];

/// Layout direction codes.
pub const DIRECTIONS: &[&str] = &["TD", "TB", "BT", "RL", "LR"];

/// Structural and control keywords shared by the diagram kinds.
pub const KEYWORDS: &[&str] = &[
    // flowchart
    "subgraph", "end", "click", "callback", "style", "classDef", "class", "direction",
    // sequence
    "participant", "actor", "boundary", "control", "entity", "database", "collections",
    "notes", "note", "over", "as", "rect", "autonumber", "loop", "alt", "else", "opt",
    "parallel", "and", "critical", "break",
    // gantt
    "title", "section", "dateFormat", "axisFormat", "todayMarker", "excludes", "includes",
    // state / er
    "state", "join", "fork", "choice", "PK", "FK",
    // git
    "commit", "branch", "checkout", "merge", "tag", "cherry-pick", "reset", "revert",
    // class
    "abstract", "static", "public", "private", "protected", "package", "namespace",
];

/// Whether `lexeme` opens a diagram.
pub fn is_diagram_type(lexeme: &str) -> bool {
    DIAGRAM_TYPES.contains(&lexeme)
}

/// Whether `lexeme` is a layout direction code.
pub fn is_direction(lexeme: &str) -> bool {
    DIRECTIONS.contains(&lexeme)
}

/// Whether `lexeme` is a structural keyword.
pub fn is_keyword(lexeme: &str) -> bool {
    KEYWORDS.contains(&lexeme)
}

/// Classify an identifier-shaped lexeme.
pub fn classify_identifier(lexeme: &str) -> TokenKind {
    if is_diagram_type(lexeme) {
        TokenKind::DiagramType
    } else if is_direction(lexeme) {
        TokenKind::Direction
    } else if is_keyword(lexeme) {
        TokenKind::Keyword
    } else {
        TokenKind::NodeId
    }
}
