// junit4-convert/src/ui/conversion_summary.rs
//! Prints what a conversion did, rule by rule.

use comfy_table::Table;
use junit4_convert_core::ConversionReport;
use std::io::{self, Write};

use crate::ui::output_format::print_header;

pub fn print_summary<W: Write>(report: &ConversionReport, writer: &mut W, supports_color: bool) -> io::Result<()> {
    print_header(writer, "--- Conversion Summary ---", supports_color)?;
    writeln!(writer, "Source: {}", report.source_id)?;

    if report.rule_summary.is_empty() {
        writeln!(writer, "No rewrite rule matched.")?;
    } else {
        let mut table = Table::new();
        table.set_header(vec!["Rule", "Kind", "Rewrites"]);
        for item in &report.rule_summary {
            table.add_row(vec![
                item.rule_name.clone(),
                item.kind.to_string(),
                item.occurrences.to_string(),
            ]);
        }
        writeln!(writer, "{table}")?;
        writeln!(writer, "Total rewrites: {}", report.total_rewrites())?;
    }

    writeln!(writer, "Import block inserted at byte offset {}.", report.import_offset)?;
    match &report.type_name {
        Some(name) => writeln!(
            writer,
            "Constructors of '{}' removed: {}.",
            name, report.constructors_removed
        )?,
        None => writeln!(writer, "No class declaration found; constructors left as they were.")?,
    }
    Ok(())
}
