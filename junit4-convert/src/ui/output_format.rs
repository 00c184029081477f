// junit4-convert/src/ui/output_format.rs
//! Colored status messages for stderr.

use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn print_info_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", message.cyan())
    } else {
        writeln!(writer, "{}", message)
    }
}

pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), message.yellow())
    } else {
        writeln!(writer, "Warning: {}", message)
    }
}

/// Writes a section header, bold when color is available.
pub fn print_header<W: Write>(writer: &mut W, title: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", title.bold())
    } else {
        writeln!(writer, "{}", title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output_has_no_escapes() {
        let mut buf = Vec::new();
        print_warn_message(&mut buf, "nothing matched", false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Warning: nothing matched\n");
    }

    #[test]
    fn test_colored_output_wraps_message() {
        let mut buf = Vec::new();
        print_info_message(&mut buf, "done", true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("done"));
    }
}
