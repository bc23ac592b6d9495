//! Token model, source positions and diagnostics shared by the `when` crates.
mod diagnostic;
mod loc;
mod render;
mod source;
mod span;
mod token;
mod util;

pub use diagnostic::{Diagnostic, Severity, codes};
pub use loc::{DiagnosticKind, DiagnosticsFormatter};
pub use render::{render_diagnostic, render_diagnostics};
pub use source::{SourceFile, SourceText};
pub use span::{ByteIndex, Span};
pub use token::{TOKEN_TYPES, Token, TokenKind, UnknownTag, token_types};
pub use util::{find_best_match, is_word_continue, is_word_start, levenshtein_distance};
