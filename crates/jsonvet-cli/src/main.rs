//! `jsonvet`: strict JSON checker for standard input, files and directories.

mod report;

use std::{io, path::PathBuf, process};

use clap::{Parser, ValueHint};
use jsonvet::{DEFAULT_MAX_DEPTH, ParserOptions};
use tracing_subscriber::EnvFilter;

use crate::report::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "jsonvet",
    version,
    about = "Check that JSON documents are strictly valid",
    long_about = None,
    after_help = r#"EXAMPLES
  $ echo '{"a": [1, 2]}' | jsonvet
  $ jsonvet config.json
  $ jsonvet --max-depth 8 fixtures/

A document must be a single object or array. A directory is checked
non-recursively: every entry ending in .json is parsed and a report of
passed and failed files is printed.

Set RUST_LOG=debug for per-file diagnostics on stderr."#
)]
struct Cli {
    #[arg(
        help = "File or directory to check; reads standard input when omitted",
        value_hint = ValueHint::AnyPath
    )]
    path: Option<PathBuf>,
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DEPTH,
        help = "Nesting depth at which documents are rejected"
    )]
    max_depth: usize,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    };
    process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32, CliError> {
    let options = ParserOptions {
        max_depth: cli.max_depth,
    };
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match &cli.path {
        None => report::check_stdin(io::stdin().lock(), options, &mut out, &mut err),
        Some(path) => report::check_path(path, options, &mut out, &mut err),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
