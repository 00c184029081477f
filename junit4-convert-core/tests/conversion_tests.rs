// junit4-convert-core/tests/conversion_tests.rs
//! End-to-end conversions through `RegexEngine` with the default rule set.

use anyhow::Result;
use test_log::test;

use junit4_convert_core::{
    headless_convert_string, normalize_line_endings, ConversionEngine, RegexEngine, RuleKind,
    RuleSet,
};

const IMPORT_BLOCK: &str = "import org.junit.After;\nimport org.junit.Before;\nimport org.junit.Test;\nimport org.junit.Ignore;\nimport static org.junit.Assert.*;";

fn convert(input: &str) -> Result<String> {
    let engine = RegexEngine::with_default_rules()?;
    let (converted, _) = engine.convert(&normalize_line_endings(input), "test_input")?;
    Ok(converted)
}

#[test]
fn test_calculator_fixture() -> Result<()> {
    let input = include_str!("fixtures/CalculatorTest.java");
    let expected = normalize_line_endings(include_str!("fixtures/CalculatorTest.expected.java"));

    let converted = headless_convert_string(RuleSet::load_default_rules()?, input, "CalculatorTest.java")?;
    assert_eq!(converted, expected);
    Ok(())
}

#[test]
fn test_service_fixture() -> Result<()> {
    let input = include_str!("fixtures/ServiceTest.java");
    let expected = normalize_line_endings(include_str!("fixtures/ServiceTest.expected.java"));

    let converted = headless_convert_string(RuleSet::load_default_rules()?, input, "ServiceTest.java")?;
    assert_eq!(converted, expected);
    Ok(())
}

#[test]
fn test_minimal_testcase_scenario() -> Result<()> {
    let input = "import junit.framework.TestCase;\npublic class FooTest extends TestCase {\n  public void testBar() {}\n}";
    let converted = convert(input)?;

    assert_eq!(
        converted,
        format!("\n\n{}\npublic class FooTest {{\n\t@Test\n    public void testBar() {{}}\n}}\n", IMPORT_BLOCK)
    );
    assert!(!converted.contains("extends TestCase"));
    assert!(!converted.contains("junit.framework"));
    Ok(())
}

#[test]
fn test_block_goes_to_the_very_start_without_imports() -> Result<()> {
    let converted = convert("public class PlainTest {\n}\n")?;
    assert!(converted.starts_with(&format!("\n\n{}", IMPORT_BLOCK)));
    Ok(())
}

#[test]
fn test_block_follows_last_import_after_one_blank_line() -> Result<()> {
    let input = "package a;\n\nimport java.util.List;\nimport java.util.Map;\n\npublic class MapTest {\n}\n";
    let converted = convert(input)?;
    assert!(converted.contains(&format!("import java.util.Map;\n\n{}\n\npublic class MapTest", IMPORT_BLOCK)));
    Ok(())
}

#[test]
fn test_second_rule_pass_is_a_no_op() -> Result<()> {
    let engine = RegexEngine::with_default_rules()?;
    let fixtures = [
        ("CalculatorTest.java", include_str!("fixtures/CalculatorTest.java")),
        ("ServiceTest.java", include_str!("fixtures/ServiceTest.java")),
    ];

    for (name, source) in fixtures {
        let (converted, _) = engine.convert(&normalize_line_endings(source), name)?;
        let (again, summary) = engine.apply_rules(converted.clone());
        assert_eq!(again, converted, "second pass changed {}", name);
        assert!(
            summary
                .iter()
                .all(|item| matches!(item.kind, RuleKind::Annotate | RuleKind::Deduplicate)),
            "{}: {:?}",
            name,
            summary
        );
    }
    Ok(())
}

#[test]
fn test_second_pass_keeps_hook_layout() -> Result<()> {
    let engine = RegexEngine::with_default_rules()?;
    let input = "class HookTest extends TestCase {\n\n    private int x;\n\n    protected void tearDown() throws Exception {\n        x = 0;\n        super.tearDown();\n    }\n\n    public void _testSlow() {}\n}\n";
    let (converted, _) = engine.convert(input, "HookTest.java")?;

    assert!(converted.contains("    private int x;\n\t@After\n    public void tearDown() throws Exception {\n        x = 0;\n    }\n\t@Test\n\t@Ignore\n"));
    assert_eq!(engine.apply_rules(converted.clone()).0, converted);
    Ok(())
}

#[test]
fn test_constructor_is_removed_and_fields_stay() -> Result<()> {
    let input = "class FooTest {\n    public FooTest() {\n        super();\n    }\n    private int x;\n}\n";
    let engine = RegexEngine::with_default_rules()?;
    let (converted, report) = engine.convert(input, "FooTest.java")?;

    assert_eq!(report.constructors_removed, 1);
    assert!(!converted.contains("public FooTest()"));
    assert!(converted.contains("    private int x;\n"));
    Ok(())
}

#[test]
fn test_report_counts_for_calculator_fixture() -> Result<()> {
    let engine = RegexEngine::with_default_rules()?;
    let input = normalize_line_endings(include_str!("fixtures/CalculatorTest.java"));
    let (_, report) = engine.convert(&input, "CalculatorTest.java")?;

    assert_eq!(report.type_name.as_deref(), Some("CalculatorTest"));
    assert_eq!(report.constructors_removed, 1);
    assert_eq!(report.occurrences_of("mark_test_methods"), 1);
    assert_eq!(report.occurrences_of("mark_disabled_tests"), 1);
    assert_eq!(report.occurrences_of("strip_super_setup_calls"), 1);
    assert_eq!(report.occurrences_of("mark_setup_hooks"), 1);
    assert_eq!(report.occurrences_of("strip_empty_teardown"), 1);
    assert_eq!(report.occurrences_of("remove_legacy_imports"), 2);
    assert_eq!(report.occurrences_of("remove_testcase_inheritance"), 1);
    assert_eq!(report.occurrences_of("remove_assert_qualifier"), 1);
    assert_eq!(report.total_rewrites(), 9);
    Ok(())
}
