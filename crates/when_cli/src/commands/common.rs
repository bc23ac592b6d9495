use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;
use when_lexer::{ConfigError, Tokenizer, TokenizerConfig};
use when_syntax::SourceFile;

use crate::args::InputArgs;

#[derive(Error, Debug)]
pub(crate) enum CliError {
    #[error("Read failed: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("stdout error: {0}")]
    Stdout(#[from] io::Error),
}

/// Input named by `--text`, a file, or stdin (`-` or no file).
pub(crate) fn read_input(args: &InputArgs) -> Result<SourceFile, CliError> {
    if let Some(text) = &args.text {
        return Ok(SourceFile::new("<text>", text.clone()));
    }
    match args.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(SourceFile::new(path.display().to_string(), text))
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Read {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(SourceFile::new("<stdin>", text))
        }
    }
}

pub(crate) fn load_tokenizer(config: Option<&Path>) -> Result<Tokenizer, CliError> {
    match config {
        Some(path) => {
            debug!("loading tokenizer config {}", path.display());
            let config = TokenizerConfig::from_path(path)?;
            Ok(Tokenizer::from_config(&config)?)
        }
        None => Ok(Tokenizer::english()),
    }
}

pub(crate) fn escape_visible(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
