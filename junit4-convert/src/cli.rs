// junit4-convert/src/cli.rs
//! This file defines the command-line interface (CLI) for the junit4-convert
//! application and its arguments.
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "junit4-convert",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert a JUnit 3 test class to JUnit 4 annotations",
    long_about = "junit4-convert rewrites a single JUnit 3 test class into its JUnit 4 form: it adds the org.junit imports, annotates test, setUp and tearDown methods, drops the TestCase inheritance and legacy imports, and removes constructors that only forward to super(...). The result is printed to stdout unless --in-place is given.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Java source file to convert.
    #[arg(
        long = "file",
        short = 'f',
        value_name = "FILE",
        required_unless_present = "list_rules",
        help = "Java source file to convert."
    )]
    pub file: Option<PathBuf>,

    /// Write the result back into the source file.
    #[arg(long = "in-place", short = 'i', help = "Overwrite the source file with the converted text instead of printing it.")]
    pub in_place: bool,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff between the original and the converted text.")]
    pub diff: bool,

    /// Suppress the conversion summary.
    #[arg(long = "no-summary", help = "Suppress the conversion summary printed to stderr.")]
    pub no_summary: bool,

    /// Print the built-in rules and exit.
    #[arg(long = "list-rules", help = "Print the built-in conversion rules in application order and exit.")]
    pub list_rules: bool,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,
}

impl Cli {
    /// The log level requested on the command line, if any.
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        if self.quiet {
            Some(log::LevelFilter::Off)
        } else if self.debug {
            Some(log::LevelFilter::Debug)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_file_is_required_without_list_rules() {
        assert!(Cli::try_parse_from(["junit4-convert", "--in-place"]).is_err());
        assert!(Cli::try_parse_from(["junit4-convert", "--list-rules"]).is_ok());
    }

    #[test]
    fn test_quiet_and_debug_conflict() {
        assert!(Cli::try_parse_from(["junit4-convert", "-f", "A.java", "-q", "-d"]).is_err());
    }

    #[test]
    fn test_log_level_mapping() {
        let cli = Cli::try_parse_from(["junit4-convert", "-f", "A.java", "-d"]).unwrap();
        assert_eq!(cli.log_level(), Some(log::LevelFilter::Debug));
        let cli = Cli::try_parse_from(["junit4-convert", "-f", "A.java", "--quiet"]).unwrap();
        assert_eq!(cli.log_level(), Some(log::LevelFilter::Off));
        let cli = Cli::try_parse_from(["junit4-convert", "--file", "A.java"]).unwrap();
        assert_eq!(cli.log_level(), None);
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("A.java")));
    }
}
