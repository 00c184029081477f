// junit4-convert-core/src/report.rs
//! Data describing what a single conversion did to a file.

use crate::config::RuleSummaryItem;

/// Facts collected while converting one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// The name or identifier of the converted source.
    pub source_id: String,
    /// Byte offset in the input at which the import block was inserted.
    pub import_offset: usize,
    /// Rules that fired, in application order.
    pub rule_summary: Vec<RuleSummaryItem>,
    /// Type name used for constructor removal, if a declaration was found.
    pub type_name: Option<String>,
    pub constructors_removed: usize,
}

impl ConversionReport {
    /// Total number of rule rewrites, excluding import insertion and
    /// constructor removal.
    pub fn total_rewrites(&self) -> usize {
        self.rule_summary.iter().map(|item| item.occurrences).sum()
    }

    /// Rewrite count for one rule; 0 if it never fired.
    pub fn occurrences_of(&self, rule_name: &str) -> usize {
        self.rule_summary
            .iter()
            .find(|item| item.rule_name == rule_name)
            .map_or(0, |item| item.occurrences)
    }
}
