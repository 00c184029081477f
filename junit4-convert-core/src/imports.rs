// junit4-convert-core/src/imports.rs
//! Import injection: the first stage of the conversion pipeline.
//!
//! Locates the end of the last import statement in a file and inserts the
//! annotation imports right after it, separated by one blank line. Files
//! without any import statement get the block at offset 0.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Matches one import statement; `^` anchors at every line start.
static IMPORT_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^\s*import\s+.*;")
        .multi_line(true)
        .build()
        .expect("import statement pattern is a valid regex")
});

/// An ordered list of literal import statements, inserted verbatim as a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ImportBlock {
    statements: Vec<String>,
}

impl ImportBlock {
    pub fn new<I, S>(statements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            statements: statements.into_iter().map(Into::into).collect(),
        }
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// The exact text inserted into a file: two newlines, then one statement
    /// per line. There is no trailing newline; the text following the
    /// insertion point supplies it.
    pub fn render(&self) -> String {
        format!("\n\n{}", self.statements.join("\n"))
    }
}

/// Returns the byte offset right after the last import statement, or 0 when
/// the text has none.
pub fn find_insertion_point(content: &str) -> usize {
    IMPORT_STATEMENT
        .find_iter(content)
        .last()
        .map_or(0, |m| m.end())
}

/// Inserts `imports` after the last import statement of `content`.
///
/// Returns the new text and the offset the block was inserted at. An empty
/// block leaves the text untouched.
pub fn inject_imports(content: &str, imports: &ImportBlock) -> (String, usize) {
    let offset = find_insertion_point(content);
    if imports.is_empty() {
        debug!("Import block is empty; nothing to insert.");
        return (content.to_string(), offset);
    }

    let block = imports.render();
    let mut text = String::with_capacity(content.len() + block.len());
    text.push_str(&content[..offset]);
    text.push_str(&block);
    text.push_str(&content[offset..]);

    debug!(
        "Inserted {} import statement(s) at offset {}.",
        imports.statements().len(),
        offset
    );
    (text, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> ImportBlock {
        ImportBlock::new(["import org.junit.Test;", "import org.junit.Before;"])
    }

    #[test]
    fn test_insertion_point_is_end_of_last_import() {
        let content = "package a;\n\nimport java.util.List;\nimport java.util.Map;\n\nclass A {}\n";
        let expected = content.find("Map;").unwrap() + "Map;".len();
        assert_eq!(find_insertion_point(content), expected);
    }

    #[test]
    fn test_insertion_point_defaults_to_zero() {
        assert_eq!(find_insertion_point("package a;\nclass A {}\n"), 0);
    }

    #[test]
    fn test_indented_import_is_recognized() {
        let content = "  import a.B;\nclass A {}\n";
        assert_eq!(find_insertion_point(content), "  import a.B;".len());
    }

    #[test]
    fn test_block_follows_last_import_after_one_blank_line() {
        let content = "import java.util.List;\nclass A {}\n";
        let (text, offset) = inject_imports(content, &block());
        assert_eq!(offset, 22);
        assert_eq!(
            text,
            "import java.util.List;\n\nimport org.junit.Test;\nimport org.junit.Before;\nclass A {}\n"
        );
    }

    #[test]
    fn test_block_goes_to_start_without_imports() {
        let (text, offset) = inject_imports("class A {}\n", &block());
        assert_eq!(offset, 0);
        assert_eq!(
            text,
            "\n\nimport org.junit.Test;\nimport org.junit.Before;class A {}\n"
        );
    }

    #[test]
    fn test_empty_block_inserts_nothing() {
        let content = "import java.util.List;\n";
        let (text, _) = inject_imports(content, &ImportBlock::default());
        assert_eq!(text, content);
    }
}
