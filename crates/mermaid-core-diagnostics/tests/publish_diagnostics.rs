use mermaid_core::{
    AnnotationReport, DIAGNOSTIC_ERROR_STYLE_ID, DiagnosticBatch, DiagnosticError,
    DiagnosticRange, DocumentProcessor, LineIndex, MermaidDocument, ProcessingEdit, StyleLayerId,
};
use mermaid_core_diagnostics::{
    DiagnosticsConfig, DiagnosticsProcessor, batch_to_processing_edits, parse_payload,
    publish_batch,
};
use mermaid_core_highlight::MermaidHighlightProcessor;
use pretty_assertions::assert_eq;

const SOURCE: &str = "graph TD\n  A[Start] --> B{Ok?}\n  B -- Yes --> C\n\n  C --> D";

#[test]
fn test_batch_to_processing_edits() {
    let index = LineIndex::from_text(SOURCE);
    let batch = parse_payload(
        r#"{"errors":[{"message":"bad node","line":2,"column":3},{"message":"whole doc","line":-1,"column":-1}]}"#,
    );

    let edits = batch_to_processing_edits(&index, &batch, &DiagnosticsConfig::default());
    assert_eq!(edits.len(), 2);

    match &edits[0] {
        ProcessingEdit::ReplaceStyleLayer { layer, intervals } => {
            assert_eq!(*layer, StyleLayerId::DIAGNOSTICS);
            assert_eq!(intervals.len(), 2);
            assert_eq!((intervals[0].start, intervals[0].end), (11, 12));
            assert_eq!(intervals[0].style_id, DIAGNOSTIC_ERROR_STYLE_ID);
            assert_eq!((intervals[1].start, intervals[1].end), (0, 58));
        }
        other => panic!("unexpected edit: {:?}", other),
    }

    match &edits[1] {
        ProcessingEdit::ReplaceDiagnostics { diagnostics } => {
            let messages: Vec<&str> = diagnostics.iter().map(|d| d.message.as_str()).collect();
            assert_eq!(messages, vec!["bad node", "whole doc"]);
        }
        other => panic!("unexpected edit: {:?}", other),
    }
}

#[test]
fn test_empty_document_keeps_diagnostic_without_marker() {
    let index = LineIndex::from_text("");
    let batch: DiagnosticBatch = vec![DiagnosticError::at("No diagram type detected", 1, 1)].into();

    let edits = batch_to_processing_edits(&index, &batch, &DiagnosticsConfig::default());
    match (&edits[0], &edits[1]) {
        (
            ProcessingEdit::ReplaceStyleLayer { intervals, .. },
            ProcessingEdit::ReplaceDiagnostics { diagnostics },
        ) => {
            assert!(intervals.is_empty());
            assert_eq!(diagnostics.len(), 1);
            assert_eq!(diagnostics[0].range, DiagnosticRange::new(0, 0));
        }
        other => panic!("unexpected edits: {:?}", other),
    }
}

#[test]
fn test_publish_batch_against_edited_document() {
    let snapshot = LineIndex::from_text(SOURCE);
    let mut document = MermaidDocument::new(SOURCE);
    // Edit after the render: drop the last line.
    document.delete(48, 10);

    let batch: DiagnosticBatch = vec![
        DiagnosticError::at("missing end", 5, 0),
        DiagnosticError::at("unexpected '--'", 3, 5),
    ]
    .into();

    let config = DiagnosticsConfig::default();
    let report = publish_batch(&mut document, &snapshot, &batch, &config);

    assert_eq!(report, AnnotationReport { applied: 1, dropped: 1 });
    assert_eq!(document.diagnostics().len(), 1);
    assert_eq!(document.diagnostics()[0].range, DiagnosticRange::new(35, 36));
    assert_eq!(document.styles_at(35), vec![DIAGNOSTIC_ERROR_STYLE_ID]);
}

#[test]
fn test_processor_lifecycle() {
    let mut document = MermaidDocument::new(SOURCE);
    let mut highlight = MermaidHighlightProcessor::default();
    let mut diagnostics = DiagnosticsProcessor::new(DiagnosticsConfig::default());

    document.apply_processor(&mut highlight).unwrap();

    diagnostics.set_payload(r#"{"message":"Parse error on line 3","line":3,"column":0}"#);
    document.apply_processor(&mut diagnostics).unwrap();
    assert_eq!(document.diagnostics().len(), 1);
    assert_eq!(document.diagnostics()[0].range, DiagnosticRange::new(31, 47));
    // Syntax and marker layers coexist.
    assert_eq!(document.styles_at(33).len(), 2);
    assert_eq!(
        diagnostics.banner().unwrap().to_html(),
        "<html>Mermaid Error:<br/>Parse error on line 3</html>"
    );

    // A successful render clears everything.
    diagnostics.clear();
    document.apply_processor(&mut diagnostics).unwrap();
    assert!(document.diagnostics().is_empty());
    assert!(document.style_layer(StyleLayerId::DIAGNOSTICS).is_none());
    assert!(diagnostics.banner().is_none());
}

#[test]
fn test_blank_document_clears_stale_errors() {
    let mut document = MermaidDocument::new("   \n\t");
    let mut processor = DiagnosticsProcessor::default();
    processor.set_batch(vec![DiagnosticError::new("stale")].into());

    let edits = processor.process(&document).unwrap();
    assert_eq!(
        edits,
        vec![
            ProcessingEdit::ClearStyleLayer {
                layer: StyleLayerId::DIAGNOSTICS
            },
            ProcessingEdit::ClearDiagnostics,
        ]
    );
    document.apply_processing_edits(edits);
    assert!(document.diagnostics().is_empty());
}

#[test]
fn test_custom_layer_and_title() {
    let config = DiagnosticsConfig::new()
        .with_layer(StyleLayerId::new(40))
        .with_style_id(7)
        .with_banner_title("Render failed:");
    let mut processor = DiagnosticsProcessor::new(config);
    processor.set_payload("Mermaid library not loaded yet");

    let mut document = MermaidDocument::new("graph LR");
    document.apply_processor(&mut processor).unwrap();

    assert_eq!(document.styles_at(0), vec![7]);
    assert!(document.style_layer(StyleLayerId::new(40)).is_some());
    assert_eq!(
        processor.banner().unwrap().to_html(),
        "<html>Render failed:<br/>Mermaid library not loaded yet</html>"
    );
}
