// junit4-convert-core/src/lib.rs
//! # junit4-convert Core Library
//!
//! `junit4-convert-core` holds the platform-independent logic that rewrites
//! JUnit 3 test classes (inheritance from `TestCase`, `test*` naming,
//! `setUp`/`tearDown` overrides) into JUnit 4 annotated classes.
//!
//! Conversion is plain text rewriting: there is no Java parser. A file goes
//! through three stages, always in this order:
//!
//! 1. **Import injection** ([`inject_imports`]): the JUnit 4 imports are
//!    inserted after the last existing import statement.
//! 2. **Rule engine** ([`RegexEngine::apply_rules`]): an ordered list of
//!    multiline regex substitutions, each applied globally to the output of
//!    the previous one.
//! 3. **Constructor stripping** ([`strip_super_constructors`]): constructors
//!    of the first declared class whose body is only a `super(...)` call are
//!    removed.
//!
//! The library does no I/O; reading and writing files is the caller's job.
//!
//! ## Modules
//!
//! * `config`: `RewriteRule`, `RuleSet`, the embedded default rule table and its validation.
//! * `rules`: compiles rules into regexes, keeping declaration order.
//! * `engine`: the `ConversionEngine` trait.
//! * `engines`: concrete engines (`RegexEngine`).
//! * `imports`: the import block and its insertion.
//! * `constructor`: type name detection and constructor removal.
//! * `report`: what a conversion did.
//! * `text`: line-ending normalization.
//! * `headless`: one-shot string conversion.
//!
//! ## Usage Example
//!
//! ```rust
//! use junit4_convert_core::{headless_convert_string, RuleSet};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let input = "import junit.framework.TestCase;\n\
//!                  public class FooTest extends TestCase {\n\
//!                  \x20   public void testBar() {}\n\
//!                  }\n";
//!
//!     let converted = headless_convert_string(RuleSet::load_default_rules()?, input, "FooTest.java")?;
//!
//!     assert!(converted.contains("import org.junit.Test;"));
//!     assert!(converted.contains("\t@Test\n    public void testBar()"));
//!     assert!(!converted.contains("extends TestCase"));
//!     Ok(())
//! }
//! ```
//!
//! License: MIT OR Apache-2.0

pub mod config;
pub mod constructor;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod imports;
pub mod report;
pub mod rules;
pub mod text;

pub use config::{validate_rules, RewriteRule, RuleKind, RuleSet, RuleSummaryItem, MAX_PATTERN_LENGTH};
pub use errors::ConvertError;

pub use engine::ConversionEngine;
pub use engines::regex_engine::RegexEngine;

pub use constructor::{detect_type_name, strip_super_constructors, StrippedConstructors};
pub use imports::{find_insertion_point, inject_imports, ImportBlock};
pub use report::ConversionReport;
pub use text::normalize_line_endings;

pub use headless::headless_convert_string;

pub use rules::compiler::{compile_rules, CompiledRule, CompiledRules};
