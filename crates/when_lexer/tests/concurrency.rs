use when_lexer::{Tokenizer, tokenize};

#[test]
fn shared_tokenizer_across_threads() {
    let tokenizer = Tokenizer::english();
    let inputs = [
        "next friday at 3pm",
        "Q1 2024",
        "3rd of March",
        "between 9:30 and 17:45 on weekdays",
    ];
    let expected: Vec<_> = inputs.iter().map(|s| tokenize(s)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let tokenizer = &tokenizer;
                let inputs = &inputs;
                scope.spawn(move || {
                    let mut out = Vec::new();
                    for round in 0..50 {
                        let i = (n + round) % inputs.len();
                        out.push((i, tokenizer.tokenize(inputs[i])));
                    }
                    out
                })
            })
            .collect();
        for handle in handles {
            for (i, tokens) in handle.join().unwrap() {
                assert_eq!(tokens, expected[i]);
            }
        }
    });
}

#[test]
fn tokenizer_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Tokenizer>();
}
