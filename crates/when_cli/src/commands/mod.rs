use crate::args::{Cli, Command};

pub(crate) mod check;
pub(crate) mod common;
pub(crate) mod rules;
pub(crate) mod tokens;
pub(crate) mod types;

pub(crate) use common::CliError;

/// Runs the selected subcommand and returns the process exit code.
pub(crate) fn run(cli: &Cli) -> Result<i32, CliError> {
    match &cli.command {
        Command::Tokens(args) => tokens::run(args, cli.config.as_deref()),
        Command::Check(args) => check::run(args, cli.config.as_deref()),
        Command::Types { json } => types::run(*json),
        Command::Rules => rules::run(cli.config.as_deref()),
    }
}
