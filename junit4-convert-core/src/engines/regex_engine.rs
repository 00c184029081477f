// junit4-convert-core/src/engines/regex_engine.rs
//! A `ConversionEngine` implementation built on ordered regex substitutions.
//!
//! The pipeline is import injection, then every rule of the rule set in
//! declaration order (each rule rewrites the output of the one before it),
//! then constructor stripping.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use regex::Captures;

use crate::config::{validate_rules, RuleSet, RuleSummaryItem};
use crate::constructor::strip_super_constructors;
use crate::engine::ConversionEngine;
use crate::imports::inject_imports;
use crate::report::ConversionReport;
use crate::rules::compiler::{compile_rules, CompiledRule, CompiledRules};

#[derive(Debug)]
pub struct RegexEngine {
    compiled_rules: CompiledRules,
    rule_set: RuleSet,
}

impl RegexEngine {
    pub fn new(rule_set: RuleSet) -> Result<Self> {
        validate_rules(&rule_set.rules).context("Invalid rule set for RegexEngine")?;
        let compiled_rules = compile_rules(rule_set.rules.clone())
            .context("Failed to compile rewrite rules for RegexEngine")?;

        Ok(Self {
            compiled_rules,
            rule_set,
        })
    }

    /// Builds an engine from the embedded default rule set.
    pub fn with_default_rules() -> Result<Self> {
        Self::new(RuleSet::load_default_rules()?)
    }

    /// Applies every compiled rule, in order, to `content`.
    ///
    /// Returns the rewritten text and one summary item per rule that matched
    /// at least once.
    pub fn apply_rules(&self, content: String) -> (String, Vec<RuleSummaryItem>) {
        let mut current = content;
        let mut summary = Vec::new();

        for rule in &self.compiled_rules.rules {
            let (rewritten, occurrences) = apply_rule(rule, &current);
            let Some(rewritten) = rewritten else {
                continue;
            };

            debug!(
                target: "junit4_convert_core::rules",
                "Rule '{}' rewrote {} occurrence(s).",
                rule.name,
                occurrences
            );
            current = rewritten;
            summary.push(RuleSummaryItem {
                rule_name: rule.name.clone(),
                kind: rule.kind,
                occurrences,
            });
        }

        (current, summary)
    }
}

/// Replaces every non-overlapping match of `rule` in `content`.
///
/// Returns `None` for the text when nothing matched.
fn apply_rule(rule: &CompiledRule, content: &str) -> (Option<String>, usize) {
    let mut occurrences = 0usize;
    let rewritten = rule.regex.replace_all(content, |caps: &Captures<'_>| {
        occurrences += 1;
        let mut expanded = String::new();
        caps.expand(&rule.replace_with, &mut expanded);
        expanded
    });

    if occurrences == 0 {
        (None, 0)
    } else {
        (Some(rewritten.into_owned()), occurrences)
    }
}

impl ConversionEngine for RegexEngine {
    fn convert(&self, content: &str, source_id: &str) -> Result<(String, ConversionReport)> {
        info!("Converting '{}' ({} bytes).", source_id, content.len());

        let (with_imports, import_offset) = inject_imports(content, &self.rule_set.imports);
        let (rewritten, rule_summary) = self.apply_rules(with_imports);
        let stripped = strip_super_constructors(rewritten)
            .with_context(|| format!("Failed to strip constructors in '{}'", source_id))?;

        let report = ConversionReport {
            source_id: source_id.to_string(),
            import_offset,
            rule_summary,
            type_name: stripped.type_name,
            constructors_removed: stripped.removed,
        };
        debug!(
            "Conversion of '{}' finished: {} rule rewrite(s), {} constructor(s) removed.",
            source_id,
            report.total_rewrites(),
            report.constructors_removed
        );

        Ok((stripped.content, report))
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn get_rules(&self) -> &RuleSet {
        &self.rule_set
    }
}
