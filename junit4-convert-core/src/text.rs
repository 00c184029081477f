//! Line-ending normalization for source text.
//!
//! Every stage of the pipeline assumes `\n` line terminators: the rule
//! patterns match `\n` literally and `$` only anchors before `\n`.

/// Re-assembles `input` line by line so that every line, including the last
/// one, is terminated by a single `\n`.
///
/// `\r\n` and lone `\r` terminators are both treated as line breaks. Empty
/// input stays empty.
pub fn normalize_line_endings(input: &str) -> String {
    let unified = input.replace("\r\n", "\n").replace('\r', "\n");
    let mut text = String::with_capacity(unified.len() + 1);
    for line in unified.lines() {
        text.push_str(line);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_missing_final_newline() {
        assert_eq!(normalize_line_endings("a\nb"), "a\nb\n");
    }

    #[test]
    fn test_converts_crlf_and_cr() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\r\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_keeps_blank_lines() {
        assert_eq!(normalize_line_endings("a\n\n\nb\n"), "a\n\n\nb\n");
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(normalize_line_endings(""), "");
    }
}
