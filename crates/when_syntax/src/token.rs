//! Token definitions.
//!
//! Defines every token kind a date/time expression can lex into, the tag string
//! each kind is emitted as, and the positioned `Token` record itself. The tag
//! strings are the contract downstream grammars match against.
use std::fmt;
use std::str::FromStr;

use crate::Span;

/// Token kind.
///
/// Declaration order matches the tag table handed to downstream grammars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Run of spaces/tabs.
    Ws,
    /// `\n` or `\r\n`.
    Newline,
    /// `HH:MM` or `HH:MM:SS`.
    Time,
    /// `Q1`..`Q4`.
    Quarter,
    /// `H1`/`H2`.
    Half,
    /// `1st`, `22nd`, `3rd`, `31st`.
    Ordinal,
    /// `3.5`
    Decimal,
    /// `2024`
    Integer,
    /// `am` / `pm`
    Ampm,

    /// `today`, `noon`, ...
    TimeWord,
    /// `next`, `last`, ...
    Relative,
    /// `early`, `mid`, `end`, ...
    Modifier,
    /// `first`, `third`, ...
    OrdinalWord,
    /// `half`
    HalfWord,
    /// `to`, `from`, `of`, ...
    Connector,
    /// `day`, `weeks`, `hrs`, ...
    Unit,
    /// `spring`, `winter`, ...
    Season,
    /// `one`, `twelve`, `a`, `couple`, ...
    WordNumber,
    /// `january`, `sept`, ...
    Month,
    /// `monday`, `thurs`, ...
    Weekday,
    /// `fiscal`, `ago`, `weekly`, ...
    OtherKeyword,
    /// Word outside every keyword category.
    Word,

    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `-`, en dash or em dash.
    Dash,
    /// `/`
    Slash,
    /// Any single character no other rule accepts.
    Other,
}

impl TokenKind {
    pub const COUNT: usize = 34;

    pub const ALL: [TokenKind; Self::COUNT] = [
        TokenKind::Ws,
        TokenKind::Newline,
        TokenKind::Time,
        TokenKind::Quarter,
        TokenKind::Half,
        TokenKind::Ordinal,
        TokenKind::Decimal,
        TokenKind::Integer,
        TokenKind::Ampm,
        TokenKind::TimeWord,
        TokenKind::Relative,
        TokenKind::Modifier,
        TokenKind::OrdinalWord,
        TokenKind::HalfWord,
        TokenKind::Connector,
        TokenKind::Unit,
        TokenKind::Season,
        TokenKind::WordNumber,
        TokenKind::Month,
        TokenKind::Weekday,
        TokenKind::OtherKeyword,
        TokenKind::Word,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::Dash,
        TokenKind::Slash,
        TokenKind::Other,
    ];

    /// Tag string emitted for this kind. Changing one is a breaking change.
    pub fn tag(self) -> &'static str {
        match self {
            TokenKind::Ws => token_types::WS,
            TokenKind::Newline => token_types::NEWLINE,
            TokenKind::Time => token_types::TIME,
            TokenKind::Quarter => token_types::QUARTER,
            TokenKind::Half => token_types::HALF,
            TokenKind::Ordinal => token_types::ORDINAL,
            TokenKind::Decimal => token_types::DECIMAL,
            TokenKind::Integer => token_types::INTEGER,
            TokenKind::Ampm => token_types::AMPM,
            TokenKind::TimeWord => token_types::TIME_WORD,
            TokenKind::Relative => token_types::RELATIVE,
            TokenKind::Modifier => token_types::MODIFIER,
            TokenKind::OrdinalWord => token_types::ORDINAL_WORD,
            TokenKind::HalfWord => token_types::HALF_WORD,
            TokenKind::Connector => token_types::CONNECTOR,
            TokenKind::Unit => token_types::UNIT,
            TokenKind::Season => token_types::SEASON,
            TokenKind::WordNumber => token_types::WORD_NUMBER,
            TokenKind::Month => token_types::MONTH,
            TokenKind::Weekday => token_types::WEEKDAY,
            TokenKind::OtherKeyword => token_types::OTHER_KEYWORD,
            TokenKind::Word => token_types::WORD,
            TokenKind::LParen => token_types::LPAREN,
            TokenKind::RParen => token_types::RPAREN,
            TokenKind::LBracket => token_types::LBRACKET,
            TokenKind::RBracket => token_types::RBRACKET,
            TokenKind::LBrace => token_types::LBRACE,
            TokenKind::RBrace => token_types::RBRACE,
            TokenKind::Colon => token_types::COLON,
            TokenKind::Semicolon => token_types::SEMICOLON,
            TokenKind::Comma => token_types::COMMA,
            TokenKind::Dash => token_types::DASH,
            TokenKind::Slash => token_types::SLASH,
            TokenKind::Other => token_types::OTHER,
        }
    }

    /// Logical name of this kind (`TIME_WORD` for `timeWord`).
    pub fn name(self) -> &'static str {
        TOKEN_TYPES[self as usize].0
    }

    pub fn from_tag(tag: &str) -> Option<TokenKind> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }

    /// Kinds produced by refining a generic word against a vocabulary.
    pub fn is_keyword_category(self) -> bool {
        matches!(
            self,
            TokenKind::TimeWord
                | TokenKind::Relative
                | TokenKind::Modifier
                | TokenKind::OrdinalWord
                | TokenKind::HalfWord
                | TokenKind::Connector
                | TokenKind::Unit
                | TokenKind::Season
                | TokenKind::WordNumber
                | TokenKind::Month
                | TokenKind::Weekday
                | TokenKind::OtherKeyword
        )
    }

    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Ws | TokenKind::Newline)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown token type tag: {}", self.0)
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for TokenKind {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::from_tag(s).ok_or_else(|| UnknownTag(s.to_string()))
    }
}

/// Logical name to emitted tag.
pub mod token_types {
    pub const WS: &str = "ws";
    pub const NEWLINE: &str = "newline";
    pub const TIME: &str = "time";
    pub const QUARTER: &str = "quarter";
    pub const HALF: &str = "half";
    pub const ORDINAL: &str = "ordinal";
    pub const DECIMAL: &str = "decimal";
    pub const INTEGER: &str = "integer";
    pub const AMPM: &str = "ampm";
    pub const TIME_WORD: &str = "timeWord";
    pub const RELATIVE: &str = "relative";
    pub const MODIFIER: &str = "modifier";
    pub const ORDINAL_WORD: &str = "ordinalWord";
    pub const HALF_WORD: &str = "halfWord";
    pub const CONNECTOR: &str = "connector";
    pub const UNIT: &str = "unit";
    pub const SEASON: &str = "season";
    pub const WORD_NUMBER: &str = "wordNumber";
    pub const MONTH: &str = "month";
    pub const WEEKDAY: &str = "weekday";
    pub const OTHER_KEYWORD: &str = "otherKeyword";
    pub const WORD: &str = "word";
    pub const LPAREN: &str = "lparen";
    pub const RPAREN: &str = "rparen";
    pub const LBRACKET: &str = "lbracket";
    pub const RBRACKET: &str = "rbracket";
    pub const LBRACE: &str = "lbrace";
    pub const RBRACE: &str = "rbrace";
    pub const COLON: &str = "colon";
    pub const SEMICOLON: &str = "semicolon";
    pub const COMMA: &str = "comma";
    pub const DASH: &str = "dash";
    pub const SLASH: &str = "slash";
    pub const OTHER: &str = "other";
}

/// `(logical name, tag)` pairs, indexed by `TokenKind as usize`.
pub const TOKEN_TYPES: [(&str, &str); TokenKind::COUNT] = [
    ("WS", token_types::WS),
    ("NEWLINE", token_types::NEWLINE),
    ("TIME", token_types::TIME),
    ("QUARTER", token_types::QUARTER),
    ("HALF", token_types::HALF),
    ("ORDINAL", token_types::ORDINAL),
    ("DECIMAL", token_types::DECIMAL),
    ("INTEGER", token_types::INTEGER),
    ("AMPM", token_types::AMPM),
    ("TIME_WORD", token_types::TIME_WORD),
    ("RELATIVE", token_types::RELATIVE),
    ("MODIFIER", token_types::MODIFIER),
    ("ORDINAL_WORD", token_types::ORDINAL_WORD),
    ("HALF_WORD", token_types::HALF_WORD),
    ("CONNECTOR", token_types::CONNECTOR),
    ("UNIT", token_types::UNIT),
    ("SEASON", token_types::SEASON),
    ("WORD_NUMBER", token_types::WORD_NUMBER),
    ("MONTH", token_types::MONTH),
    ("WEEKDAY", token_types::WEEKDAY),
    ("OTHER_KEYWORD", token_types::OTHER_KEYWORD),
    ("WORD", token_types::WORD),
    ("LPAREN", token_types::LPAREN),
    ("RPAREN", token_types::RPAREN),
    ("LBRACKET", token_types::LBRACKET),
    ("RBRACKET", token_types::RBRACKET),
    ("LBRACE", token_types::LBRACE),
    ("RBRACE", token_types::RBRACE),
    ("COLON", token_types::COLON),
    ("SEMICOLON", token_types::SEMICOLON),
    ("COMMA", token_types::COMMA),
    ("DASH", token_types::DASH),
    ("SLASH", token_types::SLASH),
    ("OTHER", token_types::OTHER),
];

/// Token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Matched text of the case-folded input after rule normalization.
    pub text: String,
    /// Zero-based character index of the first character.
    pub offset: u32,
    /// Byte range in the input.
    pub span: Span,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column (in characters) of the first character.
    pub col: u32,
    /// Line breaks contained in the token.
    pub line_breaks: u32,
    /// Source slice at `span` with its original casing. Only filled by
    /// `tokenize_with_original`.
    pub original: Option<String>,
}

impl Token {
    /// Length of the matched input in bytes.
    pub fn len(&self) -> usize {
        self.span.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }
}
