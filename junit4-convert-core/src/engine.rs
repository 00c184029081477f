// junit4-convert-core/src/engine.rs
//! Defines the core `ConversionEngine` trait.
//!
//! The trait decouples the CLI from the concrete way a file is rewritten, so
//! callers only deal with text in and text out plus a report.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;

use crate::config::RuleSet;
use crate::report::ConversionReport;
use crate::rules::compiler::CompiledRules;

/// The contract every conversion engine adheres to.
pub trait ConversionEngine: Send + Sync {
    /// Converts one file's full text.
    ///
    /// # Arguments
    /// * `content` - The file text, with `\n` line endings.
    /// * `source_id` - The name or identifier of the source being processed.
    fn convert(&self, content: &str, source_id: &str) -> Result<(String, ConversionReport)>;

    /// Returns the compiled rules, in application order.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns the rule set the engine was built from.
    fn get_rules(&self) -> &RuleSet;
}
