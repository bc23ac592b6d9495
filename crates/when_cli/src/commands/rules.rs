use std::io::Write;
use std::path::Path;

use when_lexer::Normalize;

use crate::commands::CliError;
use crate::commands::common::load_tokenizer;

pub(crate) fn run(config: Option<&Path>) -> Result<i32, CliError> {
    let tokenizer = load_tokenizer(config)?;
    let mut out = std::io::stdout().lock();
    for (i, rule) in tokenizer.rules().rules().iter().enumerate() {
        let normalize = match rule.normalize {
            Some(Normalize::Upper) => "\tupper",
            Some(Normalize::Lower) => "\tlower",
            None => "",
        };
        writeln!(out, "{i}\t{}\t{}{normalize}", rule.kind, rule.describe)?;
    }
    Ok(0)
}
