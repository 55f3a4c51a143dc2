use crate::error::{BmtreeError, Result};
use crate::models::Node;
use crate::operations::collect_urls;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Trait for writing bookmark trees to different formats
pub trait TreeWriter {
    fn write(&self, tree: &[Node], path: &Path) -> Result<()>;
}

/// JSON array of nodes
pub struct JsonWriter {
    pub pretty: bool,
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl TreeWriter for JsonWriter {
    fn write(&self, tree: &[Node], path: &Path) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(tree)?
        } else {
            serde_json::to_string(tree)?
        };
        write_atomically(path, json.as_bytes())
    }
}

/// Plain-text list of the tree's unique URLs, one per line
pub struct UrlListWriter;

impl TreeWriter for UrlListWriter {
    fn write(&self, tree: &[Node], path: &Path) -> Result<()> {
        write_atomically(path, render_url_list(tree).as_bytes())
    }
}

/// Unique URLs of `tree`, newline-joined with a trailing newline
pub fn render_url_list(tree: &[Node]) -> String {
    let mut out = String::new();
    for url in collect_urls(tree) {
        out.push_str(url);
        out.push('\n');
    }
    out
}

/// Write `contents` next to `path` and rename it into place
///
/// A failed write leaves whatever was at `path` before untouched.
fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let write_error = |source: std::io::Error| BmtreeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_error)?;

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(contents).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
