//! errors.rs - Custom error types for the junit4-convert-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// All error types raised by `junit4-convert-core`.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream `match` expressions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("Failed to compile rewrite rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Rule set validation failed:\n{0}")]
    InvalidRuleSet(String),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
