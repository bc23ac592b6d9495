//! Diagnostics for fragments a downstream grammar cannot interpret.
//!
//! Lexing never fails; these only describe `other` and unknown `word` tokens.

use crate::{DiagnosticKind, DiagnosticsFormatter, Span};

/// Lexical findings never stop a parse, so every one is a warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
    pub code: Option<&'static str>,
    pub span: Option<Span>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, kind: DiagnosticKind, span: Option<Span>) -> Self {
        Self {
            severity,
            message: DiagnosticsFormatter::format(&kind),
            kind,
            code: None,
            span,
            help: None,
        }
    }

    pub fn warning_kind(kind: DiagnosticKind, span: Option<Span>) -> Self {
        Self::new(Severity::Warning, kind, span)
    }

    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

pub mod codes {
    pub const UNRECOGNIZED_CHAR: &str = "W0001";
    pub const UNKNOWN_WORD: &str = "W0002";
}
