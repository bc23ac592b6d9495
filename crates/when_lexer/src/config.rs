//! Tokenizer configuration.
//!
//! A config extends the built-in vocabularies, e.g.
//!
//! ```json
//! { "keywords": { "weekday": ["weds"], "otherKeyword": ["biz"] } }
//! ```
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use when_syntax::TokenKind;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown keyword category: {0}")]
    UnknownCategory(String),

    #[error("{0} is not a keyword category")]
    NotACategory(TokenKind),

    #[error("'{word}' cannot be a {category} keyword: expected a lowercase word the word rule emits whole")]
    InvalidKeyword { category: TokenKind, word: String },

    #[error("'{word}' is already a {existing} keyword; cannot add it to {requested}")]
    Overlap {
        word: String,
        existing: TokenKind,
        requested: TokenKind,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TokenizerConfig {
    /// Extra words per category, keyed by category tag (`"weekday"`, `"timeWord"`, ...).
    #[serde(default)]
    pub keywords: BTreeMap<String, Vec<String>>,
}

impl TokenizerConfig {
    pub fn from_json_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Category kinds paired with their extra words, tags resolved.
    pub fn keyword_extensions(&self) -> ConfigResult<Vec<(TokenKind, &[String])>> {
        self.keywords
            .iter()
            .map(|(tag, words)| {
                let kind = TokenKind::from_tag(tag)
                    .filter(|k| k.is_keyword_category())
                    .ok_or_else(|| ConfigError::UnknownCategory(tag.clone()))?;
                Ok((kind, words.as_slice()))
            })
            .collect()
    }
}
