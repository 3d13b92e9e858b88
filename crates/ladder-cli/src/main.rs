//! word-ladder CLI
//!
//! Finds the shortest ladder between two words of equal length using a
//! dictionary file (`dictionary.txt` by default). Words not given on the
//! command line are prompted for on stdin.
//!
//! Exit codes: 0 when the search completes (ladder or not), -1 on any
//! validation, dictionary, config, or resource failure.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use ladder_core::logging::init_logging;

mod app;
mod error;
mod prompt;
mod render;
mod source;

use app::{run, RunRequest};
use error::CliExitCode;

/// Find the shortest word ladder between two words
#[derive(Parser)]
#[command(name = "word-ladder")]
#[command(version)]
#[command(about = "Find the shortest one-letter-at-a-time ladder between two words")]
struct Cli {
    /// Start word (prompted for when omitted)
    start: Option<String>,

    /// Goal word (prompted for when omitted)
    goal: Option<String>,

    /// Dictionary file, overriding config and WORD_LADDER_DICTIONARY
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Config file (defaults to ./ladder.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let request = RunRequest {
        start: cli.start,
        goal: cli.goal,
        dictionary: cli.dictionary,
        config: cli.config,
        json: cli.json,
    };

    let root = PathBuf::from(".");
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let exit_code = match run(request, &root, &mut input, &mut output) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(code = err.error_code(), error = %err, "word-ladder failed");
            eprintln!("error: {err}");
            CliExitCode::Failure
        }
    };

    if exit_code != CliExitCode::Success {
        std::process::exit(exit_code.code());
    }
}
