//! Viewer core: the query and comment operations behind any front end.
//!
//! The record tree is loaded once by the caller and handed in; it is never
//! reloaded. Comments are read from disk on every query.

use crate::comments::{CommentStore, Comments};
use crate::metadata;
use crate::model::{DisplayEntry, ParameterBuckets, RecordTree};
use crate::params;
use anyhow::Result;
use serde::Serialize;
use tracing::{error, info};

/// Parameters and syntax of the selected identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub id: String,
    pub syntax: Option<String>,
    #[serde(flatten)]
    pub parameters: ParameterBuckets,
}

/// Everything a front end needs to draw one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub entries: Vec<DisplayEntry>,
    pub selection: Option<Selection>,
    pub comments: Comments,
    pub comment_mode: bool,
}

#[derive(Debug)]
pub struct Viewer {
    tree: Option<RecordTree>,
    store: CommentStore,
    comment_mode: bool,
}

impl Viewer {
    pub fn new(tree: Option<RecordTree>, store: CommentStore, comment_mode: bool) -> Self {
        Self {
            tree,
            store,
            comment_mode,
        }
    }

    pub fn entries(&self) -> Vec<DisplayEntry> {
        metadata::display_entries(self.tree.as_ref())
    }

    /// Display list plus, when `selected` is given, its parameter buckets.
    ///
    /// The syntax comes from the display list, so an identifier excluded
    /// from it reports no syntax even though its parameters are returned.
    pub fn query(&self, selected: Option<&str>) -> QueryResult {
        let entries = self.entries();

        let selection = selected.map(|id| {
            info!(dbid = id, "selected dbid");
            Selection {
                id: id.to_string(),
                syntax: entries
                    .iter()
                    .find(|e| e.id == id)
                    .and_then(|e| e.syntax.clone()),
                parameters: params::extract_parameters(self.tree.as_ref(), id),
            }
        });

        let comments = self.store.load().unwrap_or_else(|e| {
            error!("error loading comments: {:#}", e);
            Comments::new()
        });

        QueryResult {
            entries,
            selection,
            comments,
            comment_mode: self.comment_mode,
        }
    }

    /// Append a comment for a parameter name.
    pub fn add_comment(&self, name: &str, text: &str) -> Result<()> {
        self.store.add(name, text)
    }
}
