//! Public tokenizer entry points.
use std::sync::LazyLock;

use log::debug;
use when_syntax::Token;

use crate::config::{ConfigResult, TokenizerConfig};
use crate::keywords::KeywordTable;
use crate::lexer::Lexer;
use crate::normalize::fold_case;
use crate::rules::RuleTable;

/// Immutable rule and keyword tables. Shareable across threads; every call
/// owns its own cursor and output.
#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
    rules: RuleTable,
    keywords: KeywordTable,
}

impl Tokenizer {
    pub fn new(rules: RuleTable, keywords: KeywordTable) -> Self {
        Self { rules, keywords }
    }

    /// English rules and vocabularies.
    pub fn english() -> Self {
        Self::new(RuleTable::english(), KeywordTable::english())
    }

    /// English tables extended with the config's extra keywords.
    pub fn from_config(config: &TokenizerConfig) -> ConfigResult<Self> {
        let mut keywords = KeywordTable::english();
        for (kind, words) in config.keyword_extensions()? {
            for word in words {
                keywords.extend(kind, word)?;
            }
        }
        debug!("tokenizer configured from {} categories", config.keywords.len());
        Ok(Self::new(RuleTable::english(), keywords))
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Lexer over text the caller has already case-folded.
    pub fn lexer<'a>(&'a self, folded: &'a str) -> Lexer<'a> {
        Lexer::new(&self.rules, &self.keywords, folded)
    }

    /// Case-insensitive tokenization. Token text comes from the lowercased input.
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let folded = fold_case(input);
        self.lexer(&folded).lex()
    }

    /// Like `tokenize`, with each token's `original` set to the input slice at
    /// its span.
    pub fn tokenize_with_original(&self, input: &str) -> Vec<Token> {
        let folded = fold_case(input);
        let mut tokens = self.lexer(&folded).lex();
        for token in &mut tokens {
            token.original = Some(input[token.span.range()].to_string());
        }
        tokens
    }
}

static ENGLISH: LazyLock<Tokenizer> = LazyLock::new(Tokenizer::english);

/// The shared English tokenizer.
pub fn english() -> &'static Tokenizer {
    &ENGLISH
}

/// Tokenizes `input` with the shared English tokenizer.
pub fn tokenize(input: &str) -> Vec<Token> {
    ENGLISH.tokenize(input)
}

/// Tokenizes `input` with the shared English tokenizer, keeping original casing.
pub fn tokenize_with_original(input: &str) -> Vec<Token> {
    ENGLISH.tokenize_with_original(input)
}
