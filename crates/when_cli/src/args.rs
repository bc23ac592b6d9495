use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "when",
    version,
    about = "Tokenize natural-language date/time expressions",
    after_long_help = "Set RUST_LOG to control logging (trace, debug, info, warn, error)."
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// JSON file with extra keywords per category
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Print the token stream of an expression
    Tokens(TokensArgs),

    /// Report characters and words a grammar cannot interpret
    Check(InputArgs),

    /// Print the token type tags
    Types {
        /// One JSON object per tag
        #[arg(long)]
        json: bool,
    },

    /// Print the lexical rules in match order
    Rules,
}

#[derive(Args)]
pub(crate) struct InputArgs {
    /// Input file; `-` or nothing reads stdin
    pub file: Option<PathBuf>,

    /// Expression given inline instead of a file
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,
}

#[derive(Args)]
pub(crate) struct TokensArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Also print each token's original-case text
    #[arg(long)]
    pub original: bool,

    /// One JSON object per token
    #[arg(long)]
    pub json: bool,

    /// Include whitespace and newline tokens
    #[arg(long)]
    pub trivia: bool,
}
