//! XML loader — turns the persisted document back into a [`RecordTree`].

use super::{PARAMETER_TAG, RECORD_TAG};
use crate::model::{IdentifierRecord, RecordTree};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Parse XML text into a record tree.
///
/// Every `dbid` child of the root element becomes a record, whatever the
/// root is called. A missing `id` attribute yields an empty id.
pub fn parse(text: &str) -> Result<RecordTree> {
    let doc = roxmltree::Document::parse(text).context("malformed record document")?;

    let records = doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name(RECORD_TAG))
        .map(|node| IdentifierRecord {
            id: node.attribute("id").unwrap_or_default().to_string(),
            kind: node.attribute("type").map(str::to_string),
            title: node.attribute("title").map(str::to_string),
            syntax: node.attribute("syntax").map(str::to_string),
            parameters: node
                .children()
                .filter(|n| n.has_tag_name(PARAMETER_TAG))
                .map(|p| p.text().unwrap_or_default().to_string())
                .collect(),
        })
        .collect();

    Ok(RecordTree { records })
}

/// Load the record tree from disk, degrading to `None` on any failure.
pub fn load(path: &Path) -> Option<RecordTree> {
    let result = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
        .and_then(|text| parse(&text));

    match result {
        Ok(tree) => {
            info!(path = %path.display(), records = tree.records.len(), "loaded record tree");
            Some(tree)
        }
        Err(e) => {
            error!(path = %path.display(), "error loading record tree: {:#}", e);
            None
        }
    }
}
