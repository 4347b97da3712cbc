//! Repair heuristic for raw parameter lines.
//!
//! Raw lines are fragments of a larger JSON-ish dump: they may carry a
//! trailing comma, lose their opening brace, or end in a `//` comment.
//! [`REPAIR_STEPS`] is applied in order. The brace is added before the
//! comment is stripped, so a leading comment ends up inside the object.

/// A named text transformation.
pub struct RepairStep {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

pub static REPAIR_STEPS: &[RepairStep] = &[
    RepairStep {
        name: "trim",
        apply: trim,
    },
    RepairStep {
        name: "strip_trailing_commas",
        apply: strip_trailing_commas,
    },
    RepairStep {
        name: "ensure_open_brace",
        apply: ensure_open_brace,
    },
    RepairStep {
        name: "strip_line_comment",
        apply: strip_line_comment,
    },
    RepairStep {
        name: "strip_comment_residue",
        apply: strip_comment_residue,
    },
];

/// Run every repair step over `raw`.
pub fn repair(raw: &str) -> String {
    REPAIR_STEPS
        .iter()
        .fold(raw.to_string(), |text, step| (step.apply)(&text))
}

pub fn trim(text: &str) -> String {
    text.trim().to_string()
}

pub fn strip_trailing_commas(text: &str) -> String {
    text.trim_end_matches(',').to_string()
}

pub fn ensure_open_brace(text: &str) -> String {
    if text.starts_with('{') {
        text.to_string()
    } else {
        format!("{{{}", text)
    }
}

/// Drop everything from the first `//`, including `//` inside string values.
pub fn strip_line_comment(text: &str) -> String {
    match text.find("//") {
        Some(pos) => text[..pos].to_string(),
        None => text.to_string(),
    }
}

/// Whitespace and commas left in front of a stripped comment.
pub fn strip_comment_residue(text: &str) -> String {
    text.trim_end().trim_end_matches(',').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_order() {
        let names: Vec<_> = REPAIR_STEPS.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "trim",
                "strip_trailing_commas",
                "ensure_open_brace",
                "strip_line_comment",
                "strip_comment_residue",
            ]
        );
    }

    #[test]
    fn trims() {
        assert_eq!(trim("  {\"a\": 1}\t"), "{\"a\": 1}");
    }

    #[test]
    fn strips_multiple_trailing_commas() {
        assert_eq!(strip_trailing_commas("{\"a\": 1},,,"), "{\"a\": 1}");
        assert_eq!(strip_trailing_commas("{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn prepends_brace_only_when_missing() {
        assert_eq!(ensure_open_brace("\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(ensure_open_brace("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(ensure_open_brace(""), "{");
    }

    #[test]
    fn strips_comment_to_end() {
        assert_eq!(strip_line_comment("{\"a\": 1} // note"), "{\"a\": 1} ");
        assert_eq!(strip_line_comment("{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn comment_inside_value_is_cut() {
        assert_eq!(
            strip_line_comment(r#"{"url": "http://host"}"#),
            r#"{"url": "http:"#
        );
    }

    #[test]
    fn repairs_trailing_comma_and_comment() {
        assert_eq!(
            repair(r#"  {"role": "SOURCE", "name": "x"},  // comment"#),
            r#"{"role": "SOURCE", "name": "x"}"#
        );
    }

    #[test]
    fn repairs_missing_brace() {
        assert_eq!(repair(r#""name": "x"} // trailing"#), r#"{"name": "x"}"#);
    }

    #[test]
    fn leading_comment_swallows_object() {
        assert_eq!(repair(r#"// leading {"name": "x"}"#), "{");
    }
}
