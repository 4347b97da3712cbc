//! Line filter: keep only lines that can contribute to a record.
//!
//! Pure substring matching, no JSON awareness. A key fragment that appears
//! inside an unrelated string value still keeps the line.

/// Quoted key fragments that mark a metadata or declaration line.
const KEY_FRAGMENTS: &[&str] = &["\"dbid\"", "\"type\"", "\"title\"", "\"syntax\""];

/// Marker for parameters visible only at the internal level.
pub const INTERNAL_MARKER: &str = "\"level\": \"INTERNAL\"";

/// Line boundaries, matching the usual "universal newlines" set: `\r\n` is
/// one boundary, and a bare `\r` or form feed also ends a line.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{b}', '\u{c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split content into lines on any of [`LINE_BREAKS`].
///
/// A trailing boundary does not produce an empty final line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;
    while let Some(pos) = rest.find(LINE_BREAKS) {
        lines.push(&rest[..pos]);
        let tail = &rest[pos..];
        let skip = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[skip..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

/// Returns true if the line should survive filtering.
pub fn is_relevant(line: &str) -> bool {
    KEY_FRAGMENTS.iter().any(|key| line.contains(key)) || line.contains(INTERNAL_MARKER)
}

/// Filter raw dump content, returning retained lines in input order.
pub fn filter_lines(content: &str) -> Vec<String> {
    split_lines(content)
        .into_iter()
        .filter(|line| is_relevant(line))
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_key_lines() {
        assert!(is_relevant(r#"  "dbid": 42,"#));
        assert!(is_relevant(r#"  "type": "Widget","#));
        assert!(is_relevant(r#"  "title": "Main widget","#));
        assert!(is_relevant(r#"  "syntax": "widget <name>","#));
    }

    #[test]
    fn keeps_internal_marker() {
        assert!(is_relevant(r#"{"name": "x", "level": "INTERNAL"},"#));
    }

    #[test]
    fn drops_other_lines() {
        assert!(!is_relevant(r#"  "name": "x","#));
        assert!(!is_relevant(r#"{"name": "x", "level": "PUBLIC"},"#));
        assert!(!is_relevant("{"));
        assert!(!is_relevant(""));
    }

    #[test]
    fn unquoted_key_is_not_enough() {
        assert!(!is_relevant("dbid: 42"));
        assert!(!is_relevant(r#""level":"INTERNAL""#));
    }

    #[test]
    fn fragment_inside_value_is_kept() {
        assert!(is_relevant(r#"  "description": "see \"title\" above","#));
    }

    #[test]
    fn filter_preserves_order() {
        let input = "{\n  \"dbid\": 1,\n  \"name\": \"a\",\n  \"type\": \"T\",\n  {\"level\": \"INTERNAL\"},\n}\n";
        let lines = filter_lines(input);
        assert_eq!(
            lines,
            vec![
                "  \"dbid\": 1,",
                "  \"type\": \"T\",",
                "  {\"level\": \"INTERNAL\"},",
            ]
        );
    }

    #[test]
    fn splits_on_every_line_break() {
        assert_eq!(split_lines("a\rb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\rb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\u{c}b\u{b}c"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\u{2028}b\u{85}c"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("\n\nx"), vec!["", "", "x"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn filters_old_mac_line_endings() {
        let lines = filter_lines("\"dbid\": 1,\rnoise\r\"type\": \"T\",\r");
        assert_eq!(lines, vec!["\"dbid\": 1,", "\"type\": \"T\","]);
    }

    #[test]
    fn handles_crlf() {
        let lines = filter_lines("\"dbid\": 1,\r\nnoise\r\n");
        assert_eq!(lines, vec!["\"dbid\": 1,"]);
    }
}
