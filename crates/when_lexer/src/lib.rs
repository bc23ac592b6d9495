//! when_lexer: date/time expression tokenizer.
//!
//! Case-folds input, scans it against an ordered rule table, and refines
//! generic words against keyword vocabularies. Tokenization is total: every
//! character of the input lands in exactly one token.
//! Entry points: `tokenize`, `tokenize_with_original`, and `Tokenizer`.
mod config;
mod diagnose;
mod keywords;
mod lexer;
mod normalize;
mod rules;
mod tokenizer;

pub use config::{ConfigError, ConfigResult, TokenizerConfig};
pub use diagnose::diagnose;
pub use keywords::{KeywordCategory, KeywordTable};
pub use lexer::Lexer;
pub use normalize::fold_case;
pub use rules::{Normalize, Pattern, Rule, RuleTable};
pub use tokenizer::{Tokenizer, english, tokenize, tokenize_with_original};
pub use when_syntax::{TOKEN_TYPES, Token, TokenKind, token_types};
