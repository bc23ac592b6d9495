/// What a diagnostic reports about a lexed expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A character no lexical rule accepts.
    UnrecognizedChar(char),
    /// A word outside every keyword vocabulary.
    UnknownWord(String),
    DidYouMean(String),
}

pub struct DiagnosticsFormatter;

impl DiagnosticsFormatter {
    fn format_en(kind: &DiagnosticKind) -> String {
        match kind {
            DiagnosticKind::UnrecognizedChar(c) => {
                format!("Unrecognized character: {}", c.escape_debug())
            }
            DiagnosticKind::UnknownWord(w) => format!("Unknown word: {}", w),
            DiagnosticKind::DidYouMean(s) => format!("Did you mean '{}'?", s),
        }
    }

    pub fn format(kind: &DiagnosticKind) -> String {
        Self::format_en(kind)
    }
}
