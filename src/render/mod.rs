//! Renderer module — trait-based format dispatch for viewer output.

pub mod json;
pub mod text;

use crate::model::DisplayEntry;
use crate::viewer::QueryResult;
use anyhow::{anyhow, Result};

/// Trait for rendering viewer results into a specific output format.
pub trait Renderer {
    fn render_entries(&self, entries: &[DisplayEntry]) -> Result<String>;
    fn render_query(&self, result: &QueryResult) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "text" | "txt" => Ok(Box::new(text::TextRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use text or json", format)),
    }
}
