use std::path::Path;

use when_lexer::diagnose;
use when_syntax::render_diagnostics;

use crate::args::InputArgs;
use crate::commands::CliError;
use crate::commands::common::{load_tokenizer, read_input};

pub(crate) fn run(args: &InputArgs, config: Option<&Path>) -> Result<i32, CliError> {
    let tokenizer = load_tokenizer(config)?;
    let source = read_input(args)?;
    let tokens = tokenizer.tokenize(source.text.as_str());
    let diagnostics = diagnose(&tokenizer, &tokens);
    if diagnostics.is_empty() {
        return Ok(0);
    }
    eprintln!("{}", render_diagnostics(&source, &diagnostics));
    Ok(1)
}
