//! Presentation helpers for rendered trees.
//!
//! The tree builder only ever produces plain text. Wrapping it for display,
//! serializing it, and cleaning colour markers out of edited copies happens here.

use crate::{TreeError, TreeResult};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats a rendered tree into a string.
pub fn format_result(
    result: &TreeResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, TreeError> {
    match format {
        OutputFormat::Text => Ok(result.tree.clone()),
        OutputFormat::Markdown => Ok(format_markdown(&result.tree)),
        OutputFormat::Json => format_json(result, pretty),
    }
}

/// Writes the formatted result to a file.
pub fn write_result_to_file(
    result: &TreeResult,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), TreeError> {
    let content = format_result(result, format, pretty)?;
    fs::write(&path, content).map_err(|e| TreeError::io(path.as_ref(), e))?;
    Ok(())
}

/// Removes `<#RRGGBB>` and `</#>` colour tags from a tree before it is copied or edited.
pub fn strip_color_markers(text: &str) -> String {
    static MARKERS: OnceLock<Regex> = OnceLock::new();
    let markers = MARKERS.get_or_init(|| {
        Regex::new(r"<#[0-9A-Fa-f]{6}>|</#>").expect("colour marker pattern is valid")
    });
    markers.replace_all(text, "").into_owned()
}

// ----------------------- Internal formatting -----------------------

fn format_markdown(tree: &str) -> String {
    let mut out = String::with_capacity(tree.len() + 32);
    out.push_str("# Directory Tree\n\n```\n");
    out.push_str(tree);
    if !tree.ends_with('\n') { out.push('\n'); }
    out.push_str("```\n");
    out
}

fn format_json(result: &TreeResult, pretty: bool) -> Result<String, TreeError> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
