#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing)]

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, trace};

/// Spreadsheet column titles and last-word lengths
#[derive(Debug, Parser)]
#[command(name = "strings-cli", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print each result as a JSON object
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a 1-based column number into its title (28 -> AB)
    Title {
        /// Column number, must be at least 1
        #[arg(allow_negative_numbers = true)]
        column_number: i64,
    },
    /// Convert a column title back into its number (AB -> 28)
    Number {
        /// Column title made of ASCII letters
        title: String,
    },
    /// Length of the last space-delimited word; reads stdin lines when TEXT is omitted
    LastWord {
        /// Text to scan
        text: Option<String>,
    },
}

#[derive(Debug, PartialEq, Serialize)]
struct ColumnTitle {
    column_number: i64,
    title: String,
}

#[derive(Debug, PartialEq, Serialize)]
struct LastWord {
    text: String,
    length: usize,
}

fn render_title(out: &ColumnTitle, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string(out).context("failed to encode result");
    }
    Ok(out.title.clone())
}

fn render_number(out: &ColumnTitle, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string(out).context("failed to encode result");
    }
    Ok(out.column_number.to_string())
}

fn render_last_word(out: &LastWord, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string(out).context("failed to encode result");
    }
    Ok(out.length.to_string())
}

fn scan(text: String) -> LastWord {
    let length = strings::length_of_last_word(&text);
    trace!(?text, length, "scanned");
    LastWord { text, length }
}

/// Run one command, writing one line per result to `out`.
fn run<R: BufRead, W: Write>(command: Commands, json: bool, input: R, out: &mut W) -> Result<()> {
    match command {
        Commands::Title { column_number } => {
            let title = strings::convert_to_title(column_number)?;
            debug!(column_number, %title, "converted");
            writeln!(out, "{}", render_title(&ColumnTitle { column_number, title }, json)?)?;
        }
        Commands::Number { title } => {
            let column_number = strings::title_to_number(&title)?;
            debug!(%title, column_number, "converted");
            writeln!(out, "{}", render_number(&ColumnTitle { column_number, title }, json)?)?;
        }
        Commands::LastWord { text: Some(text) } => {
            writeln!(out, "{}", render_last_word(&scan(text), json)?)?;
        }
        Commands::LastWord { text: None } => {
            debug!("reading lines from stdin");
            for line in input.lines() {
                let line = line.context("failed to read stdin")?;
                writeln!(out, "{}", render_last_word(&scan(line), json)?)?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("strings-cli started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, cli.json, stdin.lock(), &mut out)
}
