// junit4-convert-core/src/headless.rs
//! Convenience wrapper for one-shot, non-interactive conversion of a string.

use anyhow::Result;

use crate::config::RuleSet;
use crate::engine::ConversionEngine;
use crate::engines::regex_engine::RegexEngine;
use crate::text::normalize_line_endings;

/// Converts `content` with a freshly built engine and returns the new text.
///
/// Line endings are normalized first, the same way the CLI does when it
/// reads a file.
///
/// # Arguments
///
/// * `rule_set` - The rule set to convert with, usually
///   [`RuleSet::load_default_rules`].
/// * `content` - The source text.
/// * `source_id` - A stable identifier for the input (file path or pseudo id).
pub fn headless_convert_string(rule_set: RuleSet, content: &str, source_id: &str) -> Result<String> {
    let engine = RegexEngine::new(rule_set)?;
    let normalized = normalize_line_endings(content);
    let (converted, _) = engine.convert(&normalized, source_id)?;
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_convert_string_handles_crlf() -> Result<()> {
        let content = "import junit.framework.TestCase;\r\npublic class FooTest extends TestCase {\r\n  public void testBar() {}\r\n}";
        let converted = headless_convert_string(RuleSet::load_default_rules()?, content, "test_input")?;

        assert!(!converted.contains('\r'));
        assert!(converted.contains("public class FooTest {\n"));
        assert!(converted.contains("\t@Test\n    public void testBar() {}\n"));
        Ok(())
    }

    #[test]
    fn test_headless_with_empty_rule_set_only_touches_imports() -> Result<()> {
        let converted = headless_convert_string(RuleSet::default(), "class A {}\n", "empty")?;
        assert_eq!(converted, "class A {}\n");
        Ok(())
    }
}
