//! Rule compilation.
//!
//! Turns the declarative `RewriteRule`s of a `RuleSet` into compiled regular
//! expressions, preserving declaration order.

pub mod compiler;
