//! Keyword vocabularies.
//!
//! A generic word is refined by looking it up in an ordered list of
//! categories; the first category containing the word decides its kind.
//! Built-in vocabularies are pairwise disjoint, so order only matters once a
//! caller extends them.
use std::collections::BTreeSet;

use log::debug;
use when_syntax::{TokenKind, is_word_continue, is_word_start};

use crate::ConfigError;

pub(crate) static WEEKDAYS: phf::Set<&'static str> = phf::phf_set! {
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
    "mon", "tue", "tues", "wed", "thu", "thur", "thurs", "fri", "sat", "sun",
};

pub(crate) static MONTHS: phf::Set<&'static str> = phf::phf_set! {
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
};

pub(crate) static UNITS: phf::Set<&'static str> = phf::phf_set! {
    "day", "days", "week", "weeks", "month", "months", "year", "years",
    "quarter", "quarters", "hour", "hours", "minute", "minutes", "second", "seconds",
    "hr", "hrs", "min", "mins", "sec", "secs", "wk", "wks", "mo", "mos", "yr", "yrs",
};

pub(crate) static CONNECTORS: phf::Set<&'static str> = phf::phf_set! {
    "to", "from", "until", "til", "till", "through", "between", "and", "for", "in", "on",
    "at", "of", "the", "within", "over", "during", "starting", "by", "before", "after",
    "around", "about", "sometime",
};

pub(crate) static RELATIVES: phf::Set<&'static str> = phf::phf_set! {
    "next", "last", "this", "previous", "coming", "upcoming", "past",
};

pub(crate) static MODIFIERS: phf::Set<&'static str> = phf::phf_set! {
    "early", "mid", "late", "beginning", "middle", "end", "start",
};

// "second" is a unit.
pub(crate) static ORDINAL_WORDS: phf::Set<&'static str> = phf::phf_set! {
    "first", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
    "eleventh", "twelfth",
};

pub(crate) static HALF_WORDS: phf::Set<&'static str> = phf::phf_set! {
    "half",
};

pub(crate) static SEASONS: phf::Set<&'static str> = phf::phf_set! {
    "spring", "summer", "fall", "autumn", "winter",
};

pub(crate) static WORD_NUMBERS: phf::Set<&'static str> = phf::phf_set! {
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
    "eighteen", "nineteen", "twenty", "a", "an", "couple",
};

pub(crate) static OTHER_KEYWORDS: phf::Set<&'static str> = phf::phf_set! {
    "fiscal", "fy", "daily", "weekly", "monthly", "yearly", "annually", "ago", "hence", "later",
};

pub(crate) static TIME_WORDS: phf::Set<&'static str> = phf::phf_set! {
    "today", "tomorrow", "yesterday", "now", "noon", "midnight",
};

/// Lookup order of the English vocabularies.
static ENGLISH: [(TokenKind, &phf::Set<&str>); 12] = [
    (TokenKind::Weekday, &WEEKDAYS),
    (TokenKind::Month, &MONTHS),
    (TokenKind::Unit, &UNITS),
    (TokenKind::Connector, &CONNECTORS),
    (TokenKind::Relative, &RELATIVES),
    (TokenKind::Modifier, &MODIFIERS),
    (TokenKind::OrdinalWord, &ORDINAL_WORDS),
    (TokenKind::HalfWord, &HALF_WORDS),
    (TokenKind::Season, &SEASONS),
    (TokenKind::WordNumber, &WORD_NUMBERS),
    (TokenKind::OtherKeyword, &OTHER_KEYWORDS),
    (TokenKind::TimeWord, &TIME_WORDS),
];

/// One named vocabulary.
#[derive(Clone, Debug)]
pub struct KeywordCategory {
    kind: TokenKind,
    builtin: &'static phf::Set<&'static str>,
    extra: BTreeSet<String>,
}

impl KeywordCategory {
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn contains(&self, word: &str) -> bool {
        self.builtin.contains(word) || self.extra.contains(word)
    }

    /// Every word in the category: built-ins first, then extensions.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        let builtin = self.builtin.iter().map(|w| -> &str { w });
        builtin.chain(self.extra.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.builtin.len() + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered `(category, words)` list used to refine `word` tokens.
#[derive(Clone, Debug)]
pub struct KeywordTable {
    categories: Vec<KeywordCategory>,
}

impl KeywordTable {
    pub fn english() -> Self {
        let categories: Vec<KeywordCategory> = ENGLISH
            .iter()
            .map(|&(kind, builtin)| KeywordCategory {
                kind,
                builtin,
                extra: BTreeSet::new(),
            })
            .collect();
        debug!(
            "keyword table built: {} categories, {} words",
            categories.len(),
            categories.iter().map(KeywordCategory::len).sum::<usize>()
        );
        Self { categories }
    }

    pub fn categories(&self) -> &[KeywordCategory] {
        &self.categories
    }

    pub fn category(&self, kind: TokenKind) -> Option<&KeywordCategory> {
        self.categories.iter().find(|c| c.kind == kind)
    }

    /// Kind for a lowercase word: the first category holding it, else `Word`.
    pub fn classify(&self, word: &str) -> TokenKind {
        self.categories
            .iter()
            .find(|c| c.contains(word))
            .map(|c| c.kind)
            .unwrap_or(TokenKind::Word)
    }

    /// Every word across all categories, in lookup order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.iter().flat_map(KeywordCategory::words)
    }

    /// Adds `word` to the category `kind`, keeping categories disjoint.
    ///
    /// Adding a word the category already holds is a no-op.
    pub fn extend(&mut self, kind: TokenKind, word: &str) -> Result<(), ConfigError> {
        if !kind.is_keyword_category() {
            return Err(ConfigError::NotACategory(kind));
        }
        if !is_keyword_shaped(word) {
            return Err(ConfigError::InvalidKeyword {
                category: kind,
                word: word.to_string(),
            });
        }
        if let Some(existing) = self.categories.iter().find(|c| c.contains(word)) {
            if existing.kind == kind {
                return Ok(());
            }
            return Err(ConfigError::Overlap {
                word: word.to_string(),
                existing: existing.kind,
                requested: kind,
            });
        }
        let Some(category) = self.categories.iter_mut().find(|c| c.kind == kind) else {
            return Err(ConfigError::NotACategory(kind));
        };
        category.extra.insert(word.to_string());
        debug!("keyword '{}' added to {}", word, kind);
        Ok(())
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::english()
    }
}

/// A word the generic word rule would emit whole from case-folded input.
///
/// Words that open with a quarter, half, or am/pm prefix (`q1x`, `amx`) never
/// reach keyword lookup, since those rules run first.
fn is_keyword_shaped(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !is_word_start(first) || first.is_ascii_uppercase() {
        return false;
    }
    if !chars.all(|c| is_word_continue(c) && !c.is_ascii_uppercase()) {
        return false;
    }
    let bytes = word.as_bytes();
    let shadowed = match bytes {
        [b'q', b'1'..=b'4', ..] | [b'h', b'1'..=b'2', ..] => true,
        [b'a' | b'p', b'm', ..] => true,
        _ => false,
    };
    !shadowed
}
