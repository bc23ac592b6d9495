//! `when` command line: inspect how date/time expressions tokenize.
use std::io::ErrorKind;

use clap::Parser;

mod args;
mod commands;

use args::Cli;
use commands::CliError;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let code = match commands::run(&cli) {
        Ok(code) => code,
        Err(CliError::Stdout(e)) if e.kind() == ErrorKind::BrokenPipe => 0,
        Err(e) => {
            eprintln!("{e}");
            2
        }
    };
    std::process::exit(code);
}
