//! Record builder — line-by-line state machine over filtered lines.
//!
//! Each line is classified by the first matching rule in [`RULES`]:
//! declaration, then attribute, then internal parameter. A declaration
//! closes the open record; end of input closes the last one.

use super::filter::INTERNAL_MARKER;
use crate::model::IdentifierRecord;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// -- Regex patterns -----------------------------------------------------------

static RE_DBID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""dbid":\s*(\d+)"#).unwrap());

static RE_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""type":\s*"([^"]+)""#).unwrap());

static RE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""title":\s*"([^"]+)""#).unwrap());

static RE_SYNTAX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""syntax":\s*"([^"]+)""#).unwrap());

// -- Line classification ------------------------------------------------------

/// Record attribute carried over to the XML output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Type,
    Title,
    Syntax,
}

impl Attribute {
    fn pattern(self) -> &'static Regex {
        match self {
            Attribute::Type => &*RE_TYPE,
            Attribute::Title => &*RE_TITLE,
            Attribute::Syntax => &*RE_SYNTAX,
        }
    }

    fn apply(self, record: &mut IdentifierRecord, value: &str) {
        let slot = match self {
            Attribute::Type => &mut record.kind,
            Attribute::Title => &mut record.title,
            Attribute::Syntax => &mut record.syntax,
        };
        *slot = Some(value.to_string());
    }
}

const ATTRIBUTES: [Attribute; 3] = [Attribute::Type, Attribute::Title, Attribute::Syntax];

/// What a single line contributes to the record being built.
#[derive(Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    Declaration(&'a str),
    Attributes(Vec<(Attribute, &'a str)>),
    Parameter(&'a str),
}

/// A named classifier; rules are tried in order and the first hit wins.
pub struct Rule {
    pub name: &'static str,
    pub classify: fn(&str) -> Option<LineKind<'_>>,
}

pub static RULES: &[Rule] = &[
    Rule {
        name: "declaration",
        classify: classify_declaration,
    },
    Rule {
        name: "attribute",
        classify: classify_attributes,
    },
    Rule {
        name: "parameter",
        classify: classify_parameter,
    },
];

fn classify_declaration(line: &str) -> Option<LineKind<'_>> {
    let caps = RE_DBID.captures(line)?;
    caps.get(1).map(|m| LineKind::Declaration(m.as_str()))
}

fn classify_attributes(line: &str) -> Option<LineKind<'_>> {
    let found: Vec<(Attribute, &str)> = ATTRIBUTES
        .iter()
        .filter_map(|&attr| {
            let caps = attr.pattern().captures(line)?;
            caps.get(1).map(|m| (attr, m.as_str()))
        })
        .collect();
    if found.is_empty() {
        None
    } else {
        Some(LineKind::Attributes(found))
    }
}

fn classify_parameter(line: &str) -> Option<LineKind<'_>> {
    if line.contains(INTERNAL_MARKER) {
        Some(LineKind::Parameter(line.trim()))
    } else {
        None
    }
}

/// Classify a line against [`RULES`].
pub fn classify(line: &str) -> Option<LineKind<'_>> {
    RULES.iter().find_map(|rule| {
        let kind = (rule.classify)(line)?;
        debug!(rule = rule.name, "classified line");
        Some(kind)
    })
}

// -- Builder state ------------------------------------------------------------

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    InRecord(IdentifierRecord),
}

#[derive(Debug, Default)]
struct RecordBuilder {
    state: State,
    records: Vec<IdentifierRecord>,
}

impl RecordBuilder {
    fn process_line(&mut self, line: &str) {
        let Some(kind) = classify(line) else {
            debug!(line, "line matched no rule");
            return;
        };

        match kind {
            LineKind::Declaration(id) => {
                self.finalize();
                self.state = State::InRecord(IdentifierRecord::new(id));
            }
            LineKind::Attributes(attrs) => match &mut self.state {
                State::InRecord(record) => {
                    for (attr, value) in attrs {
                        attr.apply(record, value);
                    }
                }
                State::Idle => debug!(line, "dropping attributes before first declaration"),
            },
            LineKind::Parameter(text) => match &mut self.state {
                State::InRecord(record) => record.parameters.push(text.to_string()),
                State::Idle => debug!(line, "dropping parameter before first declaration"),
            },
        }
    }

    fn finalize(&mut self) {
        if let State::InRecord(record) = std::mem::take(&mut self.state) {
            self.records.push(record);
        }
    }
}

// -- Public API ---------------------------------------------------------------

/// Rebuild identifier records from filtered lines.
pub fn build_records<S: AsRef<str>>(lines: &[S]) -> Vec<IdentifierRecord> {
    let mut builder = RecordBuilder::default();
    for line in lines {
        builder.process_line(line.as_ref());
    }
    builder.finalize();
    builder.records
}
