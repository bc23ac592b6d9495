//! Lexical rule table.
//!
//! Each rule pairs a pattern with the kind it emits and an optional text
//! normalizer. At every position the rules are tried in table order and the
//! first one that matches is taken; there is no longest-match arbitration.
//! That order carries the precedence: `time` before `integer` so `12:30` stays
//! whole, `decimal` before `integer`, `ordinal` before `integer`, and
//! `quarter`/`half`/`ampm` before the generic `word` rule. The final `other`
//! rule accepts any single character, so every position matches something.
//!
//! Patterns are hand-written scanners that reproduce leftmost-first regex
//! semantics; `describe` carries the equivalent regex, which must accept
//! exactly what the scanner accepts when anchored at the current position.
use std::fmt;

use log::debug;
use when_syntax::{TokenKind, is_word_continue, is_word_start};

/// How a rule recognizes text at the current position.
#[derive(Clone, Copy)]
pub enum Pattern {
    /// Exact string.
    Literal(&'static str),
    /// Any one of the listed characters.
    AnyOf(&'static [char]),
    /// Scanner returning the byte length of an anchored match.
    Scan(fn(&str) -> Option<usize>),
    /// Any single character.
    AnyChar,
}

impl Pattern {
    /// Byte length of the match anchored at the start of `rest`. Never `Some(0)`.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        let len = match *self {
            Pattern::Literal(lit) => rest.starts_with(lit).then_some(lit.len()),
            Pattern::AnyOf(set) => rest
                .chars()
                .next()
                .filter(|c| set.contains(c))
                .map(char::len_utf8),
            Pattern::Scan(scan) => scan(rest),
            Pattern::AnyChar => rest.chars().next().map(char::len_utf8),
        };
        len.filter(|&n| n > 0)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(lit) => f.debug_tuple("Literal").field(lit).finish(),
            Pattern::AnyOf(set) => f.debug_tuple("AnyOf").field(set).finish(),
            Pattern::Scan(_) => f.write_str("Scan(..)"),
            Pattern::AnyChar => f.write_str("AnyChar"),
        }
    }
}

/// Text transform applied to a rule's match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Normalize {
    Upper,
    Lower,
}

impl Normalize {
    pub fn apply(self, text: &str) -> String {
        match self {
            Normalize::Upper => text.to_ascii_uppercase(),
            Normalize::Lower => text.to_ascii_lowercase(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub kind: TokenKind,
    pub pattern: Pattern,
    pub normalize: Option<Normalize>,
    /// Regex-style description of the pattern.
    pub describe: &'static str,
}

impl Rule {
    const fn new(kind: TokenKind, pattern: Pattern, describe: &'static str) -> Self {
        Self {
            kind,
            pattern,
            normalize: None,
            describe,
        }
    }

    const fn normalized(mut self, normalize: Normalize) -> Self {
        self.normalize = Some(normalize);
        self
    }
}

const ENGLISH_RULES: [Rule; 22] = [
    Rule::new(TokenKind::Ws, Pattern::Scan(scan_ws), "[ \\t]+"),
    Rule::new(TokenKind::Newline, Pattern::Scan(scan_newline), "\\r?\\n"),
    Rule::new(
        TokenKind::Time,
        Pattern::Scan(scan_time),
        "(?:0?[0-9]|1[0-9]|2[0-3]):[0-5][0-9](?::[0-5][0-9])?",
    ),
    Rule::new(TokenKind::Quarter, Pattern::Scan(scan_quarter), "[Qq][1-4]")
        .normalized(Normalize::Upper),
    Rule::new(TokenKind::Half, Pattern::Scan(scan_half), "[Hh][1-2]")
        .normalized(Normalize::Upper),
    Rule::new(
        TokenKind::Ordinal,
        Pattern::Scan(scan_ordinal),
        "(?:3[01]|[12]?[0-9])(?i:st|nd|rd|th)",
    )
    .normalized(Normalize::Lower),
    Rule::new(TokenKind::Decimal, Pattern::Scan(scan_decimal), "[0-9]+\\.[0-9]+"),
    Rule::new(TokenKind::Integer, Pattern::Scan(scan_digits), "[0-9]+"),
    Rule::new(TokenKind::Ampm, Pattern::Scan(scan_ampm), "[Aa][Mm]|[Pp][Mm]")
        .normalized(Normalize::Lower),
    Rule::new(TokenKind::Word, Pattern::Scan(scan_word), "[a-zA-Z][a-zA-Z0-9#]*"),
    Rule::new(TokenKind::LParen, Pattern::Literal("("), "\\("),
    Rule::new(TokenKind::RParen, Pattern::Literal(")"), "\\)"),
    Rule::new(TokenKind::LBracket, Pattern::Literal("["), "\\["),
    Rule::new(TokenKind::RBracket, Pattern::Literal("]"), "\\]"),
    Rule::new(TokenKind::LBrace, Pattern::Literal("{"), "\\{"),
    Rule::new(TokenKind::RBrace, Pattern::Literal("}"), "\\}"),
    Rule::new(TokenKind::Colon, Pattern::Literal(":"), ":"),
    Rule::new(TokenKind::Semicolon, Pattern::Literal(";"), ";"),
    Rule::new(TokenKind::Comma, Pattern::Literal(","), ","),
    Rule::new(TokenKind::Dash, Pattern::AnyOf(&['-', '\u{2013}', '\u{2014}']), "[-–—]"),
    Rule::new(TokenKind::Slash, Pattern::Literal("/"), "/"),
    Rule::new(TokenKind::Other, Pattern::AnyChar, "(?s:.)"),
];

/// Ordered rule list.
#[derive(Clone, Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn english() -> Self {
        debug!("rule table built: {} rules", ENGLISH_RULES.len());
        Self {
            rules: ENGLISH_RULES.to_vec(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// First rule matching at the start of `rest`, with its byte length.
    ///
    /// The table ends in a catch-all, so this is only `None` for empty input.
    pub fn first_match(&self, rest: &str) -> Option<(&Rule, usize)> {
        self.rules
            .iter()
            .find_map(|r| r.pattern.match_len(rest).map(|n| (r, n)))
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::english()
    }
}

fn byte_at(s: &str, i: usize) -> Option<u8> {
    s.as_bytes().get(i).copied()
}

fn is_digit_at(s: &str, i: usize) -> bool {
    byte_at(s, i).is_some_and(|b| b.is_ascii_digit())
}

fn count_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

fn scan_ws(s: &str) -> Option<usize> {
    let n = s.bytes().take_while(|&b| b == b' ' || b == b'\t').count();
    (n > 0).then_some(n)
}

fn scan_newline(s: &str) -> Option<usize> {
    if s.starts_with("\r\n") {
        Some(2)
    } else if s.starts_with('\n') {
        Some(1)
    } else {
        None
    }
}

/// `[0-5][0-9]` at `i`.
fn is_sexagesimal_at(s: &str, i: usize) -> bool {
    matches!(byte_at(s, i), Some(b'0'..=b'5')) && is_digit_at(s, i + 1)
}

/// `:MM` then an optional `:SS`, starting at the colon.
fn scan_minutes(s: &str, at: usize) -> Option<usize> {
    if byte_at(s, at) != Some(b':') || !is_sexagesimal_at(s, at + 1) {
        return None;
    }
    let end = at + 3;
    if byte_at(s, end) == Some(b':') && is_sexagesimal_at(s, end + 1) {
        Some(end + 3)
    } else {
        Some(end)
    }
}

fn scan_time(s: &str) -> Option<usize> {
    let b0 = byte_at(s, 0)?;
    let b1 = byte_at(s, 1);
    // Hour alternatives in regex priority: `0?[0-9]` (greedy), `1[0-9]`, `2[0-3]`.
    let mut hours: [Option<usize>; 4] = [None; 4];
    if b0 == b'0' && is_digit_at(s, 1) {
        hours[0] = Some(2);
    }
    if b0.is_ascii_digit() {
        hours[1] = Some(1);
    }
    if b0 == b'1' && is_digit_at(s, 1) {
        hours[2] = Some(2);
    }
    if b0 == b'2' && matches!(b1, Some(b'0'..=b'3')) {
        hours[3] = Some(2);
    }
    hours
        .into_iter()
        .flatten()
        .find_map(|h| scan_minutes(s, h))
}

fn scan_quarter(s: &str) -> Option<usize> {
    match s.as_bytes() {
        [b'q' | b'Q', b'1'..=b'4', ..] => Some(2),
        _ => None,
    }
}

fn scan_half(s: &str) -> Option<usize> {
    match s.as_bytes() {
        [b'h' | b'H', b'1'..=b'2', ..] => Some(2),
        _ => None,
    }
}

fn is_ordinal_suffix_at(s: &str, i: usize) -> bool {
    let Some(suffix) = s.get(i..i + 2) else {
        return false;
    };
    ["st", "nd", "rd", "th"]
        .iter()
        .any(|x| suffix.eq_ignore_ascii_case(x))
}

fn scan_ordinal(s: &str) -> Option<usize> {
    let b0 = byte_at(s, 0)?;
    let b1 = byte_at(s, 1);
    // Number alternatives in regex priority: `3[01]`, `[12][0-9]`, `[0-9]`.
    let mut numbers: [Option<usize>; 3] = [None; 3];
    if b0 == b'3' && matches!(b1, Some(b'0' | b'1')) {
        numbers[0] = Some(2);
    }
    if matches!(b0, b'1' | b'2') && is_digit_at(s, 1) {
        numbers[1] = Some(2);
    }
    if b0.is_ascii_digit() {
        numbers[2] = Some(1);
    }
    numbers
        .into_iter()
        .flatten()
        .find(|&n| is_ordinal_suffix_at(s, n))
        .map(|n| n + 2)
}

fn scan_decimal(s: &str) -> Option<usize> {
    let int = count_digits(s);
    if int == 0 || byte_at(s, int) != Some(b'.') {
        return None;
    }
    let frac = count_digits(&s[int + 1..]);
    (frac > 0).then_some(int + 1 + frac)
}

fn scan_digits(s: &str) -> Option<usize> {
    let n = count_digits(s);
    (n > 0).then_some(n)
}

fn scan_ampm(s: &str) -> Option<usize> {
    match s.as_bytes() {
        [b'a' | b'A' | b'p' | b'P', b'm' | b'M', ..] => Some(2),
        _ => None,
    }
}

fn scan_word(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    if !chars.next().is_some_and(is_word_start) {
        return None;
    }
    // Word characters are ASCII, so the char count is the byte length.
    Some(1 + chars.take_while(|&c| is_word_continue(c)).count())
}
