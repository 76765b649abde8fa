//! Highlighting lexer.
//!
//! The lexer is restartable and holds nothing but cursor offsets: [`Lexer::start`] selects a
//! byte window of the text and each [`Lexer::advance`] yields exactly one token until the
//! window is exhausted. Tokens cover the window without gaps or overlaps.
//!
//! Rules are tried in a fixed order and the first rule that matches at the cursor wins, even
//! when a later rule would match a longer prefix:
//!
//! 1. comment (`%%` to end of line)
//! 2. whitespace
//! 3. double-quoted string
//! 4. arrow glyphs (alternatives in declared order)
//! 5. brackets
//! 6. identifiers, refined by [`classify_identifier`]
//! 7. a single bad character

use crate::classifier::classify_identifier;
use crate::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors returned when selecting a lexing window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A window bound falls inside a UTF-8 sequence.
    #[error("offset {0} is not on a char boundary")]
    NotCharBoundary(usize),
}

#[derive(Debug, Clone, Copy)]
enum RuleKind {
    Token(TokenKind),
    Identifier,
}

struct Rule {
    kind: RuleKind,
    regex: Regex,
}

impl Rule {
    fn new(kind: RuleKind, pattern: &str) -> Self {
        Self {
            kind,
            regex: Regex::new(pattern).expect("lexer patterns are valid"),
        }
    }
}

// `regex` uses leftmost-first alternation, so the arrow alternatives keep their declared
// priority instead of matching the longest glyph.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(
            RuleKind::Token(TokenKind::Comment),
            r"^%%[^\n\r\x{85}\x{2028}\x{2029}]*",
        ),
        Rule::new(
            RuleKind::Token(TokenKind::Whitespace),
            r"^[ \t\n\x0B\x0C\r]+",
        ),
        Rule::new(RuleKind::Token(TokenKind::String), r#"^"[^"]*""#),
        Rule::new(
            RuleKind::Token(TokenKind::Arrow),
            r"^(?:--+>|--+|->+|==+>|==+|-\.-?>|<-+>|<-+|<--+|<-+|--|==|\.\.|-)",
        ),
        Rule::new(
            RuleKind::Token(TokenKind::Bracket),
            r"^(?:\[{2,}|\({2,}|\]{2,}|\){2,}|[\[\](){}:,])",
        ),
        Rule::new(RuleKind::Identifier, r"^[a-zA-Z0-9_\-]+"),
    ]
});

/// Scan the single token starting at byte offset `start`, never reading past `end`.
///
/// `start` must be less than `end`, and both must be char boundaries of `text`.
pub fn scan_token(text: &str, start: usize, end: usize) -> Token {
    let rest = &text[start..end];

    for rule in RULES.iter() {
        let Some(m) = rule.regex.find(rest) else {
            continue;
        };
        if m.is_empty() {
            continue;
        }

        let token_end = start + m.end();
        let kind = match rule.kind {
            RuleKind::Token(kind) => kind,
            RuleKind::Identifier => classify_identifier(m.as_str()),
        };
        return Token::new(kind, start, token_end);
    }

    let width = rest.chars().next().map_or(1, char::len_utf8);
    Token::new(TokenKind::BadCharacter, start, start + width)
}

/// Restartable, pull-based lexer over a byte window of a text.
#[derive(Debug, Clone, Default)]
pub struct Lexer<'a> {
    text: &'a str,
    end: usize,
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Create an idle lexer. Call [`Lexer::start`] before advancing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lexer positioned over the whole of `text`.
    pub fn over(text: &'a str) -> Self {
        Self {
            text,
            end: text.len(),
            position: 0,
        }
    }

    /// Begin a new session over `text[from..to]`.
    ///
    /// `to` is clamped to the text length and `from` to `to`. Any state left from a previous
    /// session is discarded.
    pub fn start(&mut self, text: &'a str, from: usize, to: usize) -> Result<(), LexError> {
        let to = to.min(text.len());
        let from = from.min(to);
        for offset in [from, to] {
            if !text.is_char_boundary(offset) {
                return Err(LexError::NotCharBoundary(offset));
            }
        }

        self.text = text;
        self.end = to;
        self.position = from;
        Ok(())
    }

    /// Produce the next token, or `None` once the window is exhausted.
    pub fn advance(&mut self) -> Option<Token> {
        if self.position >= self.end {
            return None;
        }
        let token = scan_token(self.text, self.position, self.end);
        self.position = token.end;
        Some(token)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

/// Tokenize the whole of `text`.
pub fn tokenize(text: &str) -> Vec<Token> {
    Lexer::over(text).collect()
}

/// Tokenize the byte window `text[from..to]`.
pub fn tokenize_range(text: &str, from: usize, to: usize) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new();
    lexer.start(text, from, to)?;
    Ok(lexer.collect())
}
