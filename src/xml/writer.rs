//! XML serializer for identifier records.

use super::{PARAMETER_TAG, RECORD_TAG, ROOT_TAG};
use crate::model::IdentifierRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::warn;

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Render records as a complete XML document.
pub fn render(records: &[IdentifierRecord]) -> String {
    let mut out = String::new();
    out.push_str(DECLARATION);
    out.push('\n');

    if records.is_empty() {
        out.push_str(&format!("<{} />\n", ROOT_TAG));
        return out;
    }

    out.push_str(&format!("<{}>\n", ROOT_TAG));
    for record in records {
        render_record(&mut out, record);
    }
    out.push_str(&format!("</{}>\n", ROOT_TAG));
    out
}

/// Render and write records to `path`.
pub fn save(records: &[IdentifierRecord], path: &Path) -> Result<()> {
    fs::write(path, render(records))
        .with_context(|| format!("failed to write {}", path.display()))
}

fn render_record(out: &mut String, record: &IdentifierRecord) {
    out.push_str(&format!("  <{}", RECORD_TAG));
    write_attr(out, "id", Some(&record.id));
    write_attr(out, "type", record.kind.as_deref());
    write_attr(out, "title", record.title.as_deref());
    write_attr(out, "syntax", record.syntax.as_deref());

    if record.parameters.is_empty() {
        out.push_str(" />\n");
        return;
    }

    out.push_str(">\n");
    for param in &record.parameters {
        out.push_str(&format!(
            "    <{tag}>{}</{tag}>\n",
            escape_text(param),
            tag = PARAMETER_TAG
        ));
    }
    out.push_str(&format!("  </{}>\n", RECORD_TAG));
}

fn write_attr(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(v) = value {
        out.push_str(&format!(" {}=\"{}\"", name, escape_attr(v)));
    }
}

/// XML 1.0 has no representation for C0 controls other than tab, newline
/// and carriage return, nor for U+FFFE and U+FFFF.
fn is_xml_char(c: char) -> bool {
    !matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}'
    )
}

fn escape_text(s: &str) -> String {
    let clean: String = if s.chars().all(is_xml_char) {
        s.to_string()
    } else {
        warn!(value = s, "dropping characters not allowed in XML");
        s.chars().filter(|&c| is_xml_char(c)).collect()
    };
    clean
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\r', "&#13;")
}

// Whitespace in attributes is normalized by parsers unless written as
// character references.
fn escape_attr(s: &str) -> String {
    escape_text(s)
        .replace('"', "&quot;")
        .replace('\n', "&#10;")
        .replace('\t', "&#9;")
}
