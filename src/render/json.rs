//! JSON renderer — structured output for tooling and web front ends.

use crate::model::DisplayEntry;
use crate::render::Renderer;
use crate::viewer::QueryResult;
use anyhow::Result;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render_entries(&self, entries: &[DisplayEntry]) -> Result<String> {
        Ok(serde_json::to_string_pretty(entries)? + "\n")
    }

    fn render_query(&self, result: &QueryResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)? + "\n")
    }
}
