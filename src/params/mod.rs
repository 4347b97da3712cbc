//! Parameter extraction: repair, parse and bucket a record's parameters.

pub mod repair;

use crate::model::{ParameterBuckets, RecordTree, UnparsedParameter, UNKNOWN_PARAMETER};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Outcome of parsing one parameter line.
#[derive(Debug, PartialEq)]
pub enum Parameter {
    Source(Map<String, Value>),
    Target(Map<String, Value>),
    Other(Map<String, Value>),
    Unparsed(UnparsedParameter),
}

/// Repair and parse one raw parameter line. Never fails.
pub fn parse_parameter(raw: &str) -> Parameter {
    let text = repair::repair(raw);

    match serde_json::from_str::<Map<String, Value>>(&text) {
        Ok(map) => {
            let role = map.get("role").and_then(Value::as_str);
            match role {
                Some("SOURCE") => Parameter::Source(map),
                Some("TARGET") => Parameter::Target(map),
                _ => Parameter::Other(map),
            }
        }
        Err(e) => {
            debug!(text = %text, "error parsing parameter: {}", e);
            Parameter::Unparsed(UnparsedParameter {
                name: recover_name(&text),
                value: text,
            })
        }
    }
}

/// Text between the first pair of quotes after `"name":`.
pub fn recover_name(text: &str) -> String {
    text.split_once("\"name\":")
        .and_then(|(_, rest)| rest.split('"').nth(1))
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_PARAMETER.to_string())
}

/// Bucket the parameters of the record with id `id`.
///
/// An absent tree or unknown id yields empty buckets.
pub fn extract_parameters(tree: Option<&RecordTree>, id: &str) -> ParameterBuckets {
    let mut buckets = ParameterBuckets::default();

    let Some(record) = tree.and_then(|t| t.find(id)) else {
        warn!(dbid = id, "no dbid found");
        return buckets;
    };

    debug!(dbid = id, count = record.parameters.len(), "extracting parameters");
    for raw in &record.parameters {
        match parse_parameter(raw) {
            Parameter::Source(map) => buckets.source.push(map),
            Parameter::Target(map) => buckets.target.push(map),
            Parameter::Other(map) => buckets.other.push(map),
            Parameter::Unparsed(entry) => buckets.unparsed.push(entry),
        }
    }
    buckets
}
