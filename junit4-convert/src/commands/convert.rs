// junit4-convert/src/commands/convert.rs
//! The convert command: one file in, converted text out.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;

use junit4_convert_core::{ConversionEngine, ConversionReport};

use crate::ui::conversion_summary;
use crate::ui::diff_viewer;
use crate::ui::output_format;
use crate::utils::file_io::{read_input_file, write_converted_file};

/// Options for the run_convert_opts API
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input_path: PathBuf,
    pub in_place: bool,
    pub diff: bool,
    pub no_summary: bool,
    pub quiet: bool,
}

/// Where the converted text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Printed to standard output; the source file is not touched.
    Stdout,
    /// Written back over the source file.
    InPlace(PathBuf),
}

impl ConvertOptions {
    pub fn sink(&self) -> OutputSink {
        if self.in_place {
            OutputSink::InPlace(self.input_path.clone())
        } else {
            OutputSink::Stdout
        }
    }
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Reads, converts and emits a single source file.
pub fn run_convert_opts(engine: &dyn ConversionEngine, opts: ConvertOptions) -> Result<()> {
    info!("Starting convert operation.");

    let source_id = opts.input_path.display().to_string();
    let original = read_input_file(&opts.input_path)?;
    let (converted, report) = engine
        .convert(&original, &source_id)
        .with_context(|| format!("Conversion of {} failed", source_id))?;

    debug!(
        "Content converted. Original length: {}, Converted length: {}",
        original.len(),
        converted.len()
    );

    handle_primary_output(&opts, &source_id, &original, &converted)?;
    handle_conversion_summary(&report, &opts)?;

    info!("Convert operation completed.");
    Ok(())
}

fn handle_primary_output(
    opts: &ConvertOptions,
    source_id: &str,
    original: &str,
    converted: &str,
) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    match opts.sink() {
        OutputSink::InPlace(path) => {
            write_converted_file(&path, converted)?;
            if !opts.quiet {
                info_msg(format!("Converted file written in place: {}", path.display()));
            }
        }
        OutputSink::Stdout => {
            if !opts.diff {
                writeln!(writer, "{}", converted)?;
            }
        }
    }

    if opts.diff {
        diff_viewer::print_diff(original, converted, source_id, &mut writer, supports_color)?;
    }
    writer.flush()?;
    Ok(())
}

fn handle_conversion_summary(report: &ConversionReport, opts: &ConvertOptions) -> Result<()> {
    if opts.quiet {
        return Ok(());
    }

    if report.total_rewrites() == 0 && report.constructors_removed == 0 {
        warn_msg(format!(
            "No JUnit 3 constructs found in {}; only the import block was added.",
            report.source_id
        ));
    }

    if !opts.no_summary {
        let stderr_supports_color = io::stderr().is_terminal();
        conversion_summary::print_summary(report, &mut io::stderr(), stderr_supports_color)?;
    }
    Ok(())
}
