//! Feeds renderer payloads through the diagnostics processor.
//!
//! Run with `RUST_LOG=debug` to see how malformed payloads degrade.

use mermaid_core::MermaidDocument;
use mermaid_core_diagnostics::{DiagnosticsConfig, DiagnosticsProcessor};
use mermaid_core_highlight::MermaidHighlightProcessor;
use serde_json::json;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut document = MermaidDocument::new("graph TD\n  A[Start] --> B{Ok?}\n  B -- Yes -->\n");
    let mut highlight = MermaidHighlightProcessor::default();
    let mut diagnostics = DiagnosticsProcessor::new(DiagnosticsConfig::default());

    document
        .apply_processor(&mut highlight)
        .unwrap_or_else(|never| match never {});

    let payloads = [
        json!({
            "errors": [
                { "message": "Parse error on line 3:\n...Yes -->\nExpecting 'NODE_STRING'", "line": 3, "column": 13 },
                { "message": "Unclosed shape", "line": null, "column": null }
            ]
        })
        .to_string(),
        json!({ "message": "Lexical error on line 2", "line": 2 }).to_string(),
        "Mermaid library not loaded yet".to_string(),
    ];

    for payload in &payloads {
        diagnostics.set_payload(payload);
        document
            .apply_processor(&mut diagnostics)
            .unwrap_or_else(|never| match never {});

        println!("payload: {payload}");
        for diagnostic in document.diagnostics() {
            println!(
                "  [{}..{}) {}",
                diagnostic.range.start, diagnostic.range.end, diagnostic.message
            );
        }
        if let Some(banner) = diagnostics.banner() {
            println!("  banner: {}", banner.to_html());
        }
    }

    diagnostics.clear();
    document
        .apply_processor(&mut diagnostics)
        .unwrap_or_else(|never| match never {});
    println!("after a successful render: {} diagnostics", document.diagnostics().len());
}
