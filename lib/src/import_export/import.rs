use crate::error::{BmtreeError, Result};
use crate::models::Node;
use crate::parser;
use std::fs;
use std::path::Path;

/// Trait for reading bookmark trees from different formats
pub trait TreeReader {
    fn read(&self, path: &Path) -> Result<Vec<Node>>;
}

/// HTML/Netscape Bookmark File reader
pub struct HtmlReader;

impl TreeReader for HtmlReader {
    fn read(&self, path: &Path) -> Result<Vec<Node>> {
        let html = read_source(path)?;
        Ok(parser::parse_bookmarks(&html))
    }
}

/// Reader for JSON trees written by an earlier conversion
pub struct JsonReader;

impl TreeReader for JsonReader {
    fn read(&self, path: &Path) -> Result<Vec<Node>> {
        let json = read_source(path)?;
        let tree = serde_json::from_str(&json)
            .map_err(|e| BmtreeError::Json(format!("{}: {}", path.display(), e)))?;
        Ok(tree)
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| BmtreeError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Pick a reader by file extension: `.json` is a tree, anything else markup
pub fn reader_for(path: &Path) -> Box<dyn TreeReader> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        Box::new(JsonReader)
    } else {
        Box::new(HtmlReader)
    }
}

/// Load the bookmark tree stored at `path`
pub fn load_tree(path: &Path) -> Result<Vec<Node>> {
    reader_for(path).read(path)
}
