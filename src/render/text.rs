//! Plain text renderer for terminal use.

use crate::comments::Comments;
use crate::model::{DisplayEntry, UnparsedParameter, UNKNOWN_PARAMETER};
use crate::render::Renderer;
use crate::viewer::{QueryResult, Selection};
use anyhow::Result;
use serde_json::{Map, Value};
use std::fmt::Write;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render_entries(&self, entries: &[DisplayEntry]) -> Result<String> {
        let mut out = String::new();
        let width = entries.iter().map(|e| e.id.len()).max().unwrap_or(0);
        for entry in entries {
            writeln!(out, "{:>width$}  {}", entry.id, entry.title, width = width)?;
        }
        Ok(out)
    }

    fn render_query(&self, result: &QueryResult) -> Result<String> {
        let mut out = self.render_entries(&result.entries)?;

        if let Some(ref sel) = result.selection {
            out.push('\n');
            render_selection(&mut out, sel, &result.comments)?;
        }
        Ok(out)
    }
}

fn render_selection(out: &mut String, sel: &Selection, comments: &Comments) -> Result<()> {
    writeln!(out, "dbid {}", sel.id)?;
    if let Some(ref syntax) = sel.syntax {
        writeln!(out, "syntax: {}", syntax)?;
    }

    if sel.parameters.is_empty() {
        writeln!(out, "\nno parameters")?;
        return Ok(());
    }

    let p = &sel.parameters;
    render_parsed(out, "Source parameters", &p.source, comments)?;
    render_parsed(out, "Target parameters", &p.target, comments)?;
    render_parsed(out, "Other parameters", &p.other, comments)?;
    render_unparsed(out, &p.unparsed, comments)?;
    Ok(())
}

fn render_parsed(
    out: &mut String,
    heading: &str,
    params: &[Map<String, Value>],
    comments: &Comments,
) -> Result<()> {
    if params.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n{}:", heading)?;
    for param in params {
        let name = param
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_PARAMETER);
        writeln!(out, "  - {}", name)?;
        for (key, value) in param {
            if key != "name" {
                writeln!(out, "      {}: {}", key, value)?;
            }
        }
        render_comments(out, name, comments)?;
    }
    Ok(())
}

fn render_unparsed(
    out: &mut String,
    params: &[UnparsedParameter],
    comments: &Comments,
) -> Result<()> {
    if params.is_empty() {
        return Ok(());
    }
    writeln!(out, "\nUnparsed parameters:")?;
    for param in params {
        writeln!(out, "  - {}", param.name)?;
        writeln!(out, "      {}", param.value)?;
        render_comments(out, &param.name, comments)?;
    }
    Ok(())
}

fn render_comments(out: &mut String, name: &str, comments: &Comments) -> Result<()> {
    for comment in comments.get(name).into_iter().flatten() {
        writeln!(out, "      # {}", comment)?;
    }
    Ok(())
}
