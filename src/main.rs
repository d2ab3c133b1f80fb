use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{Context, Result, ensure};
use clap::Parser;

use rex::Matcher;

/// Search one line of standard input for a pattern.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Interpret PATTERN as an extended pattern (required)
    #[arg(short = 'E', long = "extended-regexp")]
    extended: bool,

    /// Pattern to search for
    #[arg(value_name = "PATTERN")]
    pattern: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("rex: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    ensure!(args.extended, "only extended patterns are supported; pass -E");

    let matcher = Matcher::compile(&args.pattern)?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    // Strip the line terminator so it is never treated as input text.
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(matcher.matches(&line))
}
