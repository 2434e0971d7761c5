use crate::config::ViewConfig;
use crate::diagnostics;
use crate::Result;
use anyhow::{bail, Context};
use std::fs;
use std::path::Path;

/// The only `view-type` this crate compiles.
pub const LIST_VIEW_TYPE: &str = "list";

/// Source syntax of a view configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick a parser from the file extension; anything that is not `.json`
    /// is read as YAML, which is a superset of JSON anyway.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

/// Parse a single view configuration from text.
pub fn parse_view(text: &str, format: Format) -> Result<ViewConfig> {
    let cfg = match format {
        Format::Json => serde_json::from_str(text).context("parse view config as JSON")?,
        Format::Yaml => serde_yaml::from_str(text).context("parse view config as YAML")?,
    };
    Ok(cfg)
}

/// Read and parse a single view configuration file.
pub fn load_view(path: impl AsRef<Path>) -> Result<ViewConfig> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| {
        diagnostics::error_message(format!("read view config {}", path.display()))
    })?;

    if text.trim().is_empty() {
        bail!(
            "{}",
            diagnostics::error_message(format!("view config {} is empty", path.display()))
        );
    }

    let cfg = parse_view(&text, Format::from_path(path))
        .with_context(|| format!("in {}", path.display()))?;

    if let Some(kind) = cfg.view_type.as_deref().filter(|k| *k != LIST_VIEW_TYPE) {
        diagnostics::warn(format!(
            "{}: view-type '{}' is not '{}'; compiling as a list view",
            path.display(),
            kind,
            LIST_VIEW_TYPE
        ));
    }
    log::debug!("loaded view config from {}", path.display());
    Ok(cfg)
}
