// junit4-convert/src/commands/list_rules.rs
//! Prints the built-in rule set: the import block, then every rule in the
//! order it is applied.

use anyhow::Result;
use comfy_table::Table;
use junit4_convert_core::ConversionEngine;
use std::io::{self, Write};

pub fn run_list_rules(engine: &dyn ConversionEngine) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_rules(engine, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes the rule listing to `writer`.
pub fn write_rules<W: Write>(engine: &dyn ConversionEngine, writer: &mut W) -> io::Result<()> {
    let rule_set = engine.get_rules();

    writeln!(writer, "Imports added after the last existing import:")?;
    for statement in rule_set.imports.statements() {
        writeln!(writer, "  {}", statement)?;
    }
    writeln!(writer)?;

    let mut table = Table::new();
    table.set_header(vec!["#", "Rule", "Kind", "Description"]);
    for (index, rule) in rule_set.rules.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            rule.name.clone(),
            rule.kind.to_string(),
            rule.description.clone().unwrap_or_default(),
        ]);
    }
    writeln!(writer, "{table}")?;
    writeln!(
        writer,
        "{} rules; super-only constructors of the declared class are removed last.",
        engine.compiled_rules().len()
    )
}
