// junit4-convert-core/src/constructor.rs
//! Constructor stripping: the last text stage of the conversion pipeline.
//!
//! JUnit 3 test classes often declare a constructor that does nothing but
//! forward to `TestCase`'s (`FooTest() { super(); }` or
//! `FooTest(String name) { super(name); }`). Once the class no longer
//! extends `TestCase` those constructors are dead weight, so they are
//! removed.
//!
//! The type name comes from the first `class <Name> {` in the text. This is
//! a text pattern, not a parser: any span shaped like such a constructor for
//! that name is removed, wherever it sits.

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};

use crate::errors::ConvertError;

static TYPE_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^(.*)class\s*([a-zA-Z0-9_]*)\s*\{")
        .multi_line(true)
        .build()
        .expect("type declaration pattern is a valid regex")
});

/// Result of the constructor stripping stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedConstructors {
    pub content: String,
    /// The type name the removal pattern was built for, if one was found.
    pub type_name: Option<String>,
    pub removed: usize,
}

/// Returns the name captured by the first `class <Name> {` match.
///
/// An empty capture (`class {`) counts as no declaration.
pub fn detect_type_name(content: &str) -> Option<&str> {
    let caps = TYPE_DECLARATION.captures(content)?;
    let name = caps.get(2)?.as_str();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Builds the pattern matching a constructor of `type_name` whose body is a
/// single `super(...)` call.
pub fn constructor_pattern(type_name: &str) -> Result<Regex, ConvertError> {
    let pattern = format!(
        r"^(.*){}\s*\(.*\)\s*\{{\s*super\s*\(.*\)\s*;\s*\}}",
        regex::escape(type_name)
    );
    RegexBuilder::new(&pattern)
        .multi_line(true)
        .build()
        .map_err(|e| ConvertError::RuleCompilationError(format!("constructor of {}", type_name), e))
}

/// Removes every `super(...)`-only constructor of the first declared type.
///
/// Without a type declaration the text is returned unchanged.
pub fn strip_super_constructors(content: String) -> Result<StrippedConstructors, ConvertError> {
    let Some(type_name) = detect_type_name(&content).map(str::to_string) else {
        debug!("No type declaration found; skipping constructor removal.");
        return Ok(StrippedConstructors {
            content,
            type_name: None,
            removed: 0,
        });
    };

    let pattern = constructor_pattern(&type_name)?;
    let mut removed = 0usize;
    let stripped = pattern
        .replace_all(&content, |_: &Captures<'_>| {
            removed += 1;
            ""
        })
        .into_owned();

    debug!(
        "Removed {} super-only constructor(s) of type '{}'.",
        removed, type_name
    );
    Ok(StrippedConstructors {
        content: stripped,
        type_name: Some(type_name),
        removed,
    })
}
