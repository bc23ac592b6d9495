use std::io::Write;

use serde_json::json;
use when_syntax::TOKEN_TYPES;

use crate::commands::CliError;

pub(crate) fn run(json_out: bool) -> Result<i32, CliError> {
    let mut out = std::io::stdout().lock();
    for (name, tag) in TOKEN_TYPES {
        if json_out {
            writeln!(out, "{}", json!({ "name": name, "tag": tag }))?;
        } else {
            writeln!(out, "{name}\t{tag}")?;
        }
    }
    Ok(0)
}
