//! Display list derivation from the record tree.

use crate::model::{DisplayEntry, IdentifierRecord, RecordTree};

const TARGET_SUFFIX: &str = " (target)";
const EXCLUDED_TITLE: &str = "enum";

/// Compute the display title for a record.
///
/// The base name is the title, falling back to the type. The suffix is
/// driven by the type alone, whichever field supplied the base name.
pub fn display_title(record: &IdentifierRecord) -> String {
    let mut title = record
        .title
        .as_deref()
        .or(record.kind.as_deref())
        .unwrap_or_default()
        .to_string();
    if record
        .kind
        .as_deref()
        .is_some_and(|k| k.to_lowercase().contains("target"))
    {
        title.push_str(TARGET_SUFFIX);
    }
    title
}

/// Display entries in document order, without "enum" entries.
pub fn display_entries(tree: Option<&RecordTree>) -> Vec<DisplayEntry> {
    let Some(tree) = tree else {
        return Vec::new();
    };

    tree.records
        .iter()
        .filter_map(|record| {
            let title = display_title(record);
            if title.to_lowercase() == EXCLUDED_TITLE {
                return None;
            }
            Some(DisplayEntry {
                id: record.id.clone(),
                title,
                syntax: record.syntax.clone(),
            })
        })
        .collect()
}
