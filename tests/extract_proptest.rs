//! Property-based tests for the extraction pipeline and the XML format.
//!
//! - the line filter never keeps a line without a key fragment or the
//!   INTERNAL marker
//! - N declarations produce N records, each owning the parameters that
//!   follow it
//! - rendering records to XML and parsing them back is lossless

use dbprops::extract::builder::build_records;
use dbprops::extract::filter::{filter_lines, is_relevant};
use dbprops::model::IdentifierRecord;
use dbprops::xml;
use proptest::prelude::*;

/// Printable lines that carry no key fragment and no INTERNAL marker
fn noise_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,40}",
        "[ ]{0,4}\"[a-z]{1,8}\": \"[a-zA-Z0-9 ]{0,12}\",?",
        "[ ]{0,4}\\{\"name\": \"[a-z]{1,8}\", \"level\": \"(PUBLIC|EXTERNAL)\"\\},?",
    ]
    .prop_filter("line must not be relevant", |line| !is_relevant(line))
}

/// Parameter names for generated INTERNAL lines
fn parameter_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}"
}

/// Optional printable attribute text
fn attribute_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("\\PC{0,20}")
}

fn record_strategy() -> impl Strategy<Value = IdentifierRecord> {
    (
        "[0-9]{1,6}",
        attribute_strategy(),
        attribute_strategy(),
        attribute_strategy(),
        prop::collection::vec("\\PC{0,30}", 0..4),
    )
        .prop_map(|(id, kind, title, syntax, parameters)| IdentifierRecord {
            id,
            kind,
            title,
            syntax,
            parameters,
        })
}

fn internal_line(name: &str) -> String {
    format!("      {{\"name\": \"{}\", \"level\": \"INTERNAL\"}},", name)
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_noise_lines_never_survive(
            lines in prop::collection::vec(noise_line_strategy(), 0..20)
        ) {
            let content = lines.join("\n");
            prop_assert!(filter_lines(&content).is_empty(), "kept lines from: {:?}", content);
        }

        #[test]
        fn test_filter_keeps_only_relevant_lines(
            noise in prop::collection::vec(noise_line_strategy(), 0..10),
            names in prop::collection::vec(parameter_name_strategy(), 0..10)
        ) {
            let mut lines: Vec<String> = Vec::new();
            for (i, n) in noise.iter().enumerate() {
                lines.push(n.clone());
                if let Some(name) = names.get(i) {
                    lines.push(internal_line(name));
                }
            }
            let expected: Vec<String> = names
                .iter()
                .take(noise.len())
                .map(|n| internal_line(n))
                .collect();

            let kept = filter_lines(&lines.join("\n"));
            prop_assert!(kept.iter().all(|l| is_relevant(l)));
            prop_assert_eq!(kept, expected);
        }

        #[test]
        fn test_declarations_produce_records_in_order(
            groups in prop::collection::vec(
                prop::collection::vec(parameter_name_strategy(), 0..5),
                0..10,
            )
        ) {
            let mut content = String::from("{\n  \"props\": [\n");
            for (i, names) in groups.iter().enumerate() {
                content.push_str(&format!("    {{\n      \"dbid\": {},\n", i + 1));
                for name in names {
                    content.push_str(&internal_line(name));
                    content.push('\n');
                }
                content.push_str("    },\n");
            }
            content.push_str("  ]\n}\n");

            let records = build_records(&filter_lines(&content));
            prop_assert_eq!(records.len(), groups.len());
            for (i, (record, names)) in records.iter().zip(&groups).enumerate() {
                prop_assert_eq!(&record.id, &(i + 1).to_string());
                let expected: Vec<String> =
                    names.iter().map(|n| internal_line(n).trim().to_string()).collect();
                prop_assert_eq!(&record.parameters, &expected);
            }
        }

        #[test]
        fn test_xml_round_trip(records in prop::collection::vec(record_strategy(), 0..6)) {
            let text = xml::render(&records);
            let tree = xml::parse(&text);
            prop_assert!(tree.is_ok(), "failed to parse: {}", text);
            if let Ok(tree) = tree {
                prop_assert_eq!(tree.records, records);
            }
        }
    }
}
