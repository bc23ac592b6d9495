use std::io::Write;
use std::path::Path;

use serde_json::json;
use when_syntax::Token;

use crate::args::TokensArgs;
use crate::commands::CliError;
use crate::commands::common::{escape_visible, load_tokenizer, read_input};

pub(crate) fn run(args: &TokensArgs, config: Option<&Path>) -> Result<i32, CliError> {
    let tokenizer = load_tokenizer(config)?;
    let source = read_input(&args.input)?;
    let input = source.text.as_str();
    let tokens = if args.original {
        tokenizer.tokenize_with_original(input)
    } else {
        tokenizer.tokenize(input)
    };

    let mut out = std::io::stdout().lock();
    for t in &tokens {
        if t.kind.is_trivia() && !args.trivia {
            continue;
        }
        if args.json {
            writeln!(out, "{}", token_json(t))?;
        } else {
            write!(out, "{}\t{}\t{}", t.kind, t.span, escape_visible(&t.text))?;
            if let Some(original) = &t.original {
                write!(out, "\t{}", escape_visible(original))?;
            }
            writeln!(out)?;
        }
    }
    Ok(0)
}

fn token_json(t: &Token) -> serde_json::Value {
    let mut obj = json!({
        "type": t.kind.tag(),
        "text": t.text,
        "offset": t.offset,
        "line": t.line,
        "col": t.col,
        "lineBreaks": t.line_breaks,
    });
    if let Some(original) = &t.original {
        obj["original"] = json!(original);
    }
    obj
}
