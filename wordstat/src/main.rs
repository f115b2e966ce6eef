//! # wordstat
//!
//! A CLI that prints descriptive statistics for a newline-delimited word list.
//!
//! ## Overview
//!
//! wordstat is built on top of wordstatlib. It reads the list, computes the
//! statistics, and prints one fact per line: the word count, the longest and
//! shortest words with their lengths, and how many words have each length from
//! the longest down to 1.
//!
//! ## Usage
//!
//! ```bash
//! # Analyze words.txt next to the wordstat executable
//! wordstat
//!
//! # Analyze a specific file
//! wordstat /usr/share/dict/words
//!
//! # Show debug logging on stderr
//! RUST_LOG=debug wordstat words.txt
//! ```

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use console::style;
use wordstatlib::{run, ReportOptions, DEFAULT_WORDS_FILE};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("wordstat")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Word count, longest and shortest word, and a length histogram for a word list")
        .arg(Arg::new("source").help(format!(
            "Word list to analyze (defaults to {DEFAULT_WORDS_FILE} next to the executable)"
        )))
}

/// Build report options from matches
fn build_options(matches: &ArgMatches) -> ReportOptions {
    match matches.get_one::<String>("source") {
        Some(path) => ReportOptions::new().source_path(path),
        None => ReportOptions::new(),
    }
}

/// Compute the whole report, then print it
fn report_handler(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let options = build_options(matches);
    let report = run(&options)?;

    report
        .write_to(io::stdout().lock())
        .context("failed to write report")?;
    Ok(())
}

/// Logs go to stderr so stdout only carries the report
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let matches = build_command().get_matches();

    match report_handler(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("run failed: {e:?}");
            eprintln!("{} {e}", style("Error:").for_stderr().red().bold());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_options_without_source() {
        let matches = build_command().get_matches_from(["wordstat"]);
        assert_eq!(build_options(&matches), ReportOptions::new());
    }

    #[test]
    fn test_options_with_source() {
        let matches = build_command().get_matches_from(["wordstat", "list.txt"]);
        assert_eq!(
            build_options(&matches).source_path,
            Some(PathBuf::from("list.txt"))
        );
    }
}
