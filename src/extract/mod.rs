//! Extraction pipeline: raw dump → filtered lines → identifier records.

pub mod builder;
pub mod filter;

use crate::model::IdentifierRecord;

/// Output of one extraction run.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Lines kept by the filter, for the optional flat file
    pub lines: Vec<String>,
    pub records: Vec<IdentifierRecord>,
}

impl Extraction {
    /// Flat file content: retained lines joined by newlines.
    pub fn flat_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Run the filter and builder over raw dump content.
pub fn extract(content: &str) -> Extraction {
    let lines = filter::filter_lines(content);
    let records = builder::build_records(&lines);
    Extraction { lines, records }
}
