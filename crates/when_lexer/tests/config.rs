use std::io::Write;

use when_lexer::{ConfigError, KeywordTable, TokenKind, Tokenizer, TokenizerConfig};

#[test]
fn config_extends_vocabulary() {
    let config = TokenizerConfig::from_json_str(
        r#"{ "keywords": { "weekday": ["weds"], "otherKeyword": ["biz"] } }"#,
    )
    .unwrap();
    let tokenizer = Tokenizer::from_config(&config).unwrap();
    let kinds: Vec<TokenKind> = tokenizer
        .tokenize("Weds biz")
        .iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Weekday, TokenKind::Ws, TokenKind::OtherKeyword]
    );
    // The shared English tokenizer is untouched.
    assert_eq!(when_lexer::tokenize("weds")[0].kind, TokenKind::Word);
}

#[test]
fn empty_config_is_english() {
    let config = TokenizerConfig::from_json_str("{}").unwrap();
    assert_eq!(config, TokenizerConfig::default());
    let tokenizer = Tokenizer::from_config(&config).unwrap();
    assert_eq!(tokenizer.tokenize("monday")[0].kind, TokenKind::Weekday);
}

#[test]
fn overlapping_keyword_is_rejected() {
    let config =
        TokenizerConfig::from_json_str(r#"{ "keywords": { "month": ["monday"] } }"#).unwrap();
    match Tokenizer::from_config(&config) {
        Err(ConfigError::Overlap {
            word,
            existing,
            requested,
        }) => {
            assert_eq!(word, "monday");
            assert_eq!(existing, TokenKind::Weekday);
            assert_eq!(requested, TokenKind::Month);
        }
        other => panic!("expected overlap, got {other:?}"),
    }
}

#[test]
fn unknown_category_is_rejected() {
    for tag in ["weekdays", "integer", "word"] {
        let json = format!(r#"{{ "keywords": {{ "{tag}": ["x"] }} }}"#);
        let config = TokenizerConfig::from_json_str(&json).unwrap();
        let err = Tokenizer::from_config(&config).unwrap_err();
        assert!(matches!(&err, ConfigError::UnknownCategory(t) if t == tag), "{err}");
    }
}

#[test]
fn keywords_must_be_lexable_words() {
    let mut table = KeywordTable::english();
    for word in ["Weds", "", "3rd", "q1x", "amx", "pmish", "h2o", "two words", "caf\u{e9}"] {
        let err = table.extend(TokenKind::Weekday, word).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKeyword { .. }), "{word}: {err}");
    }
    table.extend(TokenKind::Unit, "fortnight").unwrap();
    table.extend(TokenKind::Unit, "fortnight").unwrap();
    table.extend(TokenKind::Unit, "c#").unwrap();
    assert_eq!(table.classify("fortnight"), TokenKind::Unit);
    let units = table.category(TokenKind::Unit).unwrap();
    assert_eq!(units.words().filter(|w| *w == "fortnight").count(), 1);
}

#[test]
fn only_keyword_categories_can_be_extended() {
    let mut table = KeywordTable::english();
    let err = table.extend(TokenKind::Integer, "dozen").unwrap_err();
    assert!(matches!(err, ConfigError::NotACategory(TokenKind::Integer)));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = TokenizerConfig::from_json_str(r#"{ "keyword": {} }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "keywords": {{ "season": ["monsoon"] }} }}"#).unwrap();
    let config = TokenizerConfig::from_path(file.path()).unwrap();
    let tokenizer = Tokenizer::from_config(&config).unwrap();
    assert_eq!(tokenizer.tokenize("Monsoon")[0].kind, TokenKind::Season);
}

#[test]
fn missing_config_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = TokenizerConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.json"), "{err}");
}
