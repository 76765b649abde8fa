//! Token dump example
//!
//! Lexes a small flowchart and prints every token with its kind and byte range.

use mermaid_core::{LineIndex, MermaidDocument, TokenKind, tokenize};

fn main() {
    let source = "%% checkout flow\ngraph LR\n  cart[\"Cart\"] --> pay{Pay?}\n  pay -.-> done((Done))\n";

    println!("=== tokens ===");
    for token in tokenize(source) {
        if token.kind == TokenKind::Whitespace {
            continue;
        }
        println!(
            "{:>3}..{:<3} {:<13} {:?}",
            token.start,
            token.end,
            token.kind.display_name(),
            token.text(source)
        );
    }

    let index = LineIndex::from_text(source);
    println!("\nlines: {}, chars: {}", index.line_count(), index.char_count());

    let mut document = MermaidDocument::new(source);
    document.subscribe(|change| {
        println!(
            "change {:?}: v{} -> v{}",
            change.change_type, change.old_version, change.new_version
        );
    });
    document.insert(document.char_count(), "  done --> cart\n");
    println!("text after edit:\n{}", document.text());
}
