use mermaid_core::intervals::StyleLayerId;
use mermaid_core::{DocumentProcessor, MermaidDocument, ProcessingEdit, TokenKind};
use mermaid_core_highlight::{
    MERMAID_STYLE_ARROW, MERMAID_STYLE_COMMENT, MERMAID_STYLE_KEYWORD, MermaidHighlightProcessor,
    MermaidStyles,
};

const SAMPLE: &str = "%% This is a comment
graph TD
    A[Start] --> B{Is it working?}
    B -- Yes --> C[Great!]
    subgraph Section
        E[\"Multi-line
string\"]
    end
";

#[test]
fn test_processor_replaces_syntax_layer() {
    let document = MermaidDocument::new(SAMPLE);
    let mut processor = MermaidHighlightProcessor::default();

    let edits = processor.process(&document).unwrap();
    assert_eq!(edits.len(), 1);
    match &edits[0] {
        ProcessingEdit::ReplaceStyleLayer { layer, intervals } => {
            assert_eq!(*layer, StyleLayerId::MERMAID_SYNTAX);
            assert_eq!(intervals[0].start, 0);
            assert_eq!(intervals[0].end, 20);
            assert_eq!(intervals[0].style_id, MERMAID_STYLE_COMMENT);
            assert!(intervals.windows(2).all(|w| w[0].end <= w[1].start));
        }
        other => panic!("unexpected edit: {:?}", other),
    }
}

#[test]
fn test_apply_processor_styles_document() {
    let mut document = MermaidDocument::new(SAMPLE);
    let mut processor = MermaidHighlightProcessor::default();
    document.apply_processor(&mut processor).unwrap();

    let arrow_offset = SAMPLE.find("-->").unwrap();
    assert_eq!(document.styles_at(arrow_offset), vec![MERMAID_STYLE_ARROW]);

    let subgraph_offset = SAMPLE.find("subgraph").unwrap();
    assert_eq!(
        document.styles_at(subgraph_offset),
        vec![MERMAID_STYLE_KEYWORD]
    );

    // Whitespace is unstyled.
    let indent = SAMPLE.find("\n    A").unwrap() + 1;
    assert!(document.styles_at(indent).is_empty());
}

#[test]
fn test_multiline_string_is_one_span() {
    let mut document = MermaidDocument::new(SAMPLE);
    document
        .apply_processor(&mut MermaidHighlightProcessor::default())
        .unwrap();

    let start = SAMPLE.find("\"Multi").unwrap();
    let end = SAMPLE.find("string\"").unwrap() + "string\"".len();
    let layer = document.style_layer(StyleLayerId::MERMAID_SYNTAX).unwrap();
    let hits = layer.query_point(start);
    assert_eq!(hits.len(), 1);
    assert_eq!((hits[0].start, hits[0].end), (start, end));
}

#[test]
fn test_custom_styles() {
    let styles = MermaidStyles {
        node_id: 42,
        ..MermaidStyles::default()
    };
    let mut processor = MermaidHighlightProcessor::new(
        StyleLayerId::MERMAID_SYNTAX,
        mermaid_core_highlight::MermaidHighlighter::new(styles),
    );
    let mut document = MermaidDocument::new("A --> B");
    document.apply_processor(&mut processor).unwrap();

    assert_eq!(document.styles_at(0), vec![42]);
    assert_eq!(processor.highlighter().styles().kind_for(42), Some(TokenKind::NodeId));
}
