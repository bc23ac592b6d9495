use when_lexer::{KeywordTable, TokenKind, tokenize};

fn kind_of(word: &str) -> TokenKind {
    let tokens = tokenize(word);
    assert_eq!(tokens.len(), 1, "{word}: {tokens:?}");
    tokens[0].kind
}

#[test]
fn classifies_each_category() {
    let cases = [
        ("monday", TokenKind::Weekday),
        ("thurs", TokenKind::Weekday),
        ("sept", TokenKind::Month),
        ("may", TokenKind::Month),
        ("weeks", TokenKind::Unit),
        ("hrs", TokenKind::Unit),
        ("to", TokenKind::Connector),
        ("sometime", TokenKind::Connector),
        ("upcoming", TokenKind::Relative),
        ("beginning", TokenKind::Modifier),
        ("twelfth", TokenKind::OrdinalWord),
        ("half", TokenKind::HalfWord),
        ("autumn", TokenKind::Season),
        ("nineteen", TokenKind::WordNumber),
        ("annually", TokenKind::OtherKeyword),
        ("midnight", TokenKind::TimeWord),
        ("weekend", TokenKind::Word),
    ];
    for (word, kind) in cases {
        assert_eq!(kind_of(word), kind, "{word}");
    }
}

#[test]
fn keyword_lookup_ignores_input_case() {
    assert_eq!(kind_of("MONDAY"), TokenKind::Weekday);
    assert_eq!(kind_of("Tomorrow"), TokenKind::TimeWord);
}

#[test]
fn second_is_a_unit() {
    assert_eq!(kind_of("second"), TokenKind::Unit);
    assert_eq!(kind_of("seconds"), TokenKind::Unit);
}

#[test]
fn categories_are_pairwise_disjoint() {
    let table = KeywordTable::english();
    let categories = table.categories();
    for (i, a) in categories.iter().enumerate() {
        for b in &categories[i + 1..] {
            for w in a.words() {
                assert!(
                    !b.contains(w),
                    "'{w}' is in both {} and {}",
                    a.kind(),
                    b.kind()
                );
            }
        }
    }
}

#[test]
fn category_order() {
    let table = KeywordTable::english();
    let order: Vec<TokenKind> = table.categories().iter().map(|c| c.kind()).collect();
    assert_eq!(
        order,
        vec![
            TokenKind::Weekday,
            TokenKind::Month,
            TokenKind::Unit,
            TokenKind::Connector,
            TokenKind::Relative,
            TokenKind::Modifier,
            TokenKind::OrdinalWord,
            TokenKind::HalfWord,
            TokenKind::Season,
            TokenKind::WordNumber,
            TokenKind::OtherKeyword,
            TokenKind::TimeWord,
        ]
    );
    assert!(order.iter().all(|k| k.is_keyword_category()));
}

#[test]
fn every_builtin_keyword_lexes_whole() {
    let table = KeywordTable::english();
    for category in table.categories() {
        for word in category.words() {
            let tokens = tokenize(word);
            assert_eq!(tokens.len(), 1, "{word}: {tokens:?}");
            assert_eq!(tokens[0].kind, category.kind(), "{word}");
        }
    }
}

#[test]
fn unknown_words_stay_generic() {
    let table = KeywordTable::english();
    assert_eq!(table.classify("fortnight"), TokenKind::Word);
    assert_eq!(table.classify(""), TokenKind::Word);
    // Lookup is over folded text only.
    assert_eq!(table.classify("Monday"), TokenKind::Word);
}
