//! Lexer implementation.
//!
//! Scans case-folded text into tokens by trying the rule table at each
//! position, then refines generic words against the keyword table.
//!
//! Design: single linear pass, no backtracking across tokens, one allocation
//! per token for its text. Tracks line/column so tokens can be located inside
//! larger documents.
//!
//! Related: `RuleTable`, `KeywordTable`, `when_syntax` (tokens).
use log::trace;
use when_syntax::{Span, Token, TokenKind};

use crate::keywords::KeywordTable;
use crate::rules::RuleTable;

/// Date/time expression lexer over already case-folded text.
pub struct Lexer<'a> {
    rules: &'a RuleTable,
    keywords: &'a KeywordTable,
    input: &'a str,
    i: usize,
    chars: u32,
    line: u32,
    col: u32,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer.
    pub fn new(rules: &'a RuleTable, keywords: &'a KeywordTable, input: &'a str) -> Self {
        Self {
            rules,
            keywords,
            input,
            i: 0,
            chars: 0,
            line: 1,
            col: 1,
        }
    }

    /// Run the lexer to completion.
    pub fn lex(self) -> Vec<Token> {
        let approx = self.input.len().saturating_div(3).max(8);
        let mut tokens = Vec::with_capacity(approx);
        tokens.extend(self);
        tokens
    }

    /// Byte offset of the next token.
    pub fn position(&self) -> usize {
        self.i
    }

    /// Character index of the next token.
    pub fn char_position(&self) -> u32 {
        self.chars
    }

    fn next_token(&mut self) -> Option<Token> {
        let rest = &self.input[self.i..];
        let (rule, len) = self.rules.first_match(rest)?;
        let start = self.i;
        let end = start + len;
        let matched = &rest[..len];

        let kind = if rule.kind == TokenKind::Word {
            self.keywords.classify(matched)
        } else {
            rule.kind
        };
        let text = match rule.normalize {
            Some(n) => n.apply(matched),
            None => matched.to_string(),
        };
        let line_breaks = matched.bytes().filter(|&b| b == b'\n').count() as u32;
        let char_len = matched.chars().count() as u32;

        let token = Token {
            kind,
            text,
            offset: self.chars,
            span: Span::from_range(start..end),
            line: self.line,
            col: self.col,
            line_breaks,
            original: None,
        };
        trace!("{} {} {:?}", token.kind, token.span, token.text);

        self.advance(matched, char_len, line_breaks);
        self.i = end;
        self.chars += char_len;
        Some(token)
    }

    fn advance(&mut self, matched: &str, char_len: u32, line_breaks: u32) {
        if line_breaks == 0 {
            self.col += char_len;
            return;
        }
        self.line += line_breaks;
        let tail = matched.rsplit('\n').next().unwrap_or_default();
        self.col = 1 + tail.chars().count() as u32;
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
