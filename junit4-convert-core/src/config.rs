//! Configuration management for `junit4-convert-core`.
//!
//! This module defines the data structures for rewrite rules and the rule set
//! they belong to. The canonical rule set ships embedded in the binary as
//! YAML (`config/default_rules.yaml`); it is parsed, validated, and handed to
//! an engine as an immutable value.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::errors::ConvertError;
use crate::imports::ImportBlock;
use crate::rules::compiler::build_pattern;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Matches `$N` and `${N}` group references inside a replacement template.
static GROUP_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{?(\d+)\}?").expect("group reference pattern is a valid regex")
});

/// The intent label of a rule, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Prefixes a declaration with a marker annotation.
    Annotate,
    /// Collapses a marker that ended up applied twice.
    Deduplicate,
    /// Deletes legacy code outright.
    Remove,
    /// Rewrites legacy code into its annotation-based form.
    Rewrite,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            RuleKind::Annotate => "annotate",
            RuleKind::Deduplicate => "deduplicate",
            RuleKind::Remove => "remove",
            RuleKind::Rewrite => "rewrite",
        };
        f.write_str(label)
    }
}

fn default_multiline() -> bool {
    true
}

/// A single ordered (pattern, replacement) pair of the rule engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RewriteRule {
    /// Unique identifier for the rule (e.g., "mark_test_methods").
    pub name: String,
    /// What the rule is for.
    pub kind: RuleKind,
    /// Human-readable description of the rewrite.
    #[serde(default)]
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: String,
    /// Replacement template; may reference capture groups as `$N` or `${N}`.
    #[serde(default)]
    pub replace_with: String,
    /// If true, `^` and `$` match at every line boundary.
    #[serde(default = "default_multiline")]
    pub multiline: bool,
}

/// The complete, ordered configuration consumed by an engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleSet {
    /// Statements inserted after the last existing import.
    #[serde(default)]
    pub imports: ImportBlock,
    /// Rewrite rules in application order.
    pub rules: Vec<RewriteRule>,
}

/// How many rewrites a single rule performed during one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSummaryItem {
    pub rule_name: String,
    pub kind: RuleKind,
    pub occurrences: usize,
}

impl RuleSet {
    /// Loads the built-in rule set embedded at compile time.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let rule_set = Self::from_yaml_str(default_yaml).context("Failed to parse default rules")?;

        debug!(
            "Loaded {} default rules and {} import statements.",
            rule_set.rules.len(),
            rule_set.imports.statements().len()
        );
        Ok(rule_set)
    }

    /// Parses a rule set from YAML and validates it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let rule_set: RuleSet = serde_yml::from_str(yaml).context("Invalid rule set YAML")?;
        validate_rules(&rule_set.rules)?;
        Ok(rule_set)
    }

    /// Looks up a rule by name.
    pub fn rule(&self, name: &str) -> Option<&RewriteRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// Rule names in application order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name.as_str()).collect()
    }
}

/// Validates rule integrity: unique names, compilable patterns, and
/// replacement templates that only reference existing capture groups.
///
/// Every problem found is reported, not just the first.
pub fn validate_rules(rules: &[RewriteRule]) -> Result<(), ConvertError> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.as_str()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        if rule.pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
            continue;
        }

        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(
                ConvertError::PatternLengthExceeded(
                    rule.name.clone(),
                    rule.pattern.len(),
                    MAX_PATTERN_LENGTH,
                )
                .to_string(),
            );
            continue;
        }

        let regex = match build_pattern(&rule.pattern, rule.multiline) {
            Ok(regex) => regex,
            Err(e) => {
                errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
                continue;
            }
        };

        // captures_len() counts the implicit whole-match group 0.
        let group_count = regex.captures_len() - 1;
        for cap in GROUP_REFERENCE.captures_iter(&rule.replace_with) {
            if let Ok(group_num) = cap[1].parse::<usize>() {
                if group_num > group_count {
                    errors.push(format!(
                        "Rule '{}': replacement references non-existent capture group '${}'.",
                        rule.name, group_num
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConvertError::InvalidRuleSet(errors.join("\n")))
    }
}
