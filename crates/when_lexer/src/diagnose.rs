use when_syntax::{
    Diagnostic, DiagnosticKind, DiagnosticsFormatter, Token, TokenKind, codes, find_best_match,
};

use crate::Tokenizer;

/// Warnings for fragments a grammar cannot interpret: `other` tokens and words
/// outside every vocabulary. Unknown words get a closest-keyword hint.
pub fn diagnose(tokenizer: &Tokenizer, tokens: &[Token]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for t in tokens {
        match t.kind {
            TokenKind::Other => {
                let Some(c) = t.text.chars().next() else {
                    continue;
                };
                diagnostics.push(
                    Diagnostic::warning_kind(DiagnosticKind::UnrecognizedChar(c), Some(t.span))
                        .with_code(codes::UNRECOGNIZED_CHAR),
                );
            }
            TokenKind::Word => {
                let mut d = Diagnostic::warning_kind(
                    DiagnosticKind::UnknownWord(t.text.clone()),
                    Some(t.span),
                )
                .with_code(codes::UNKNOWN_WORD);
                if let Some(best) = find_best_match(&t.text, tokenizer.keywords().vocabulary()) {
                    let hint = DiagnosticKind::DidYouMean(best.to_string());
                    d = d.with_help(DiagnosticsFormatter::format(&hint));
                }
                diagnostics.push(d);
            }
            _ => {}
        }
    }
    diagnostics
}
