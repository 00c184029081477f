// junit4-convert/src/main.rs
//! junit4-convert entry point.
//!
//! Parses arguments, builds the regex engine from the embedded rule set and
//! dispatches to the requested command.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use junit4_convert::cli::Cli;
use junit4_convert::commands::convert::{ConvertOptions, run_convert_opts};
use junit4_convert::commands::list_rules::run_list_rules;
use junit4_convert::logger;
use junit4_convert_core::RegexEngine;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.log_level());
    info!("junit4-convert v{} started.", env!("CARGO_PKG_VERSION"));

    let engine = RegexEngine::with_default_rules().context("Failed to load the built-in conversion rules")?;

    if cli.list_rules {
        return run_list_rules(&engine);
    }

    let input_path = cli.file.context("No input file given")?;
    let opts = ConvertOptions {
        input_path,
        in_place: cli.in_place,
        diff: cli.diff,
        no_summary: cli.no_summary,
        quiet: cli.quiet,
    };
    run_convert_opts(&engine, opts)
}
