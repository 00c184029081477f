//! compiler.rs - Compiles rewrite rules into ready-to-apply regexes.
//!
//! Compilation happens once, when an engine is built. The resulting
//! `CompiledRules` keeps the declaration order of the source rule set, since
//! that order decides the converted output.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::config::{RewriteRule, RuleKind, MAX_PATTERN_LENGTH};
use crate::errors::ConvertError;

/// Upper bound on the compiled size of a single rule's regex.
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A single compiled rewrite rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The replacement template, expanded against each match's captures.
    pub replace_with: String,
    /// The unique name of the rewrite rule.
    pub name: String,
    /// Intent label carried through to the conversion report.
    pub kind: RuleKind,
}

/// All compiled rules of a rule set, in application order.
#[derive(Debug)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
}

impl CompiledRules {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Builds a regex with the options every rule pattern is compiled with.
pub(crate) fn build_pattern(pattern: &str, multiline: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .multi_line(multiline)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
}

/// Compiles `rules_to_compile` in order.
///
/// Every failing rule is collected; if any fail, a single `Fatal` error lists
/// all of them.
pub fn compile_rules(rules_to_compile: Vec<RewriteRule>) -> Result<CompiledRules, ConvertError> {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());

    let mut compiled_rules = Vec::with_capacity(rules_to_compile.len());
    let mut compilation_errors = Vec::new();

    for rule in rules_to_compile {
        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(ConvertError::PatternLengthExceeded(
                rule.name,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        match build_pattern(&rule.pattern, rule.multiline) {
            Ok(regex) => {
                debug!(
                    target: "junit4_convert_core::rules",
                    "Rule '{}' compiled successfully.",
                    &rule.name
                );
                compiled_rules.push(CompiledRule {
                    regex,
                    replace_with: rule.replace_with,
                    name: rule.name,
                    kind: rule.kind,
                });
            }
            Err(e) => {
                compilation_errors.push(ConvertError::RuleCompilationError(rule.name, e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(ConvertError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )));
    }

    debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
    Ok(CompiledRules { rules: compiled_rules })
}
