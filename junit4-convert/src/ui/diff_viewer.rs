// junit4-convert/src/ui/diff_viewer.rs
//! Unified diff between the original and the converted source.
//!
//! Removed lines are red, added lines green, hunk headers cyan.

use diffy::{Line as DiffLine, create_patch};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes a unified diff of `original` against `converted`.
///
/// `label` names the file in the `---`/`+++` header lines.
pub fn print_diff<W: Write>(
    original: &str,
    converted: &str,
    label: &str,
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    let patch = create_patch(original, converted);
    if patch.hunks().is_empty() {
        return writeln!(writer, "No changes detected.");
    }

    let old_header = format!("--- a/{}", label);
    let new_header = format!("+++ b/{}", label);
    if supports_color {
        writeln!(writer, "{}", old_header.bold())?;
        writeln!(writer, "{}", new_header.bold())?;
    } else {
        writeln!(writer, "{}", old_header)?;
        writeln!(writer, "{}", new_header)?;
    }

    for hunk in patch.hunks() {
        let old = hunk.old_range();
        let new = hunk.new_range();
        let header = format!("@@ -{},{} +{},{} @@", old.start(), old.len(), new.start(), new.len());
        if supports_color {
            writeln!(writer, "{}", header.cyan())?;
        } else {
            writeln!(writer, "{}", header)?;
        }

        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    let line = format!("-{}", trim_newline(s));
                    if supports_color {
                        writeln!(writer, "{}", line.red())?;
                    } else {
                        writeln!(writer, "{}", line)?;
                    }
                }
                DiffLine::Insert(s) => {
                    let line = format!("+{}", trim_newline(s));
                    if supports_color {
                        writeln!(writer, "{}", line.green())?;
                    } else {
                        writeln!(writer, "{}", line)?;
                    }
                }
                DiffLine::Context(s) => {
                    writeln!(writer, " {}", trim_newline(s))?;
                }
            }
        }
    }

    Ok(())
}

fn trim_newline(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(original: &str, converted: &str) -> String {
        let mut buf = Vec::new();
        print_diff(original, converted, "FooTest.java", &mut buf, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_identical_input_reports_no_changes() {
        assert_eq!(render("a\nb\n", "a\nb\n"), "No changes detected.\n");
    }

    #[test]
    fn test_changed_lines_are_marked() {
        let out = render(
            "class A {\n    public void testX() {}\n}\n",
            "class A {\n\t@Test\n    public void testX() {}\n}\n",
        );
        assert!(out.starts_with("--- a/FooTest.java\n+++ b/FooTest.java\n@@ "));
        assert!(out.contains("\n+\t@Test\n"));
        assert!(out.contains("\n     public void testX() {}\n"));
        assert!(!out.contains("\n-"));
    }

    #[test]
    fn test_removed_lines_are_marked() {
        let out = render("import junit.framework.TestCase;\nclass A {}\n", "class A {}\n");
        assert!(out.contains("\n-import junit.framework.TestCase;\n"));
    }
}
