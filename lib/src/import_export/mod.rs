pub mod export;
pub mod import;

use crate::error::Result;
use crate::models::Node;
use crate::operations::{tree_stats, FolderFilter};
use log::{debug, info};
use std::path::Path;

// Re-export main functions for convenience
pub use export::{render_url_list, JsonWriter, TreeWriter, UrlListWriter};
pub use import::{load_tree, reader_for, HtmlReader, JsonReader, TreeReader};

/// Read `input` and apply `filter` to the resulting tree
///
/// The whole document is read and parsed before anything is returned, so a
/// caller writing the result never starts on a partially read input.
pub fn convert_bookmarks(input: &Path, filter: &FolderFilter) -> Result<Vec<Node>> {
    let tree = load_tree(input)?;
    let parsed = tree_stats(&tree);
    debug!(
        "Parsed {}: {} bookmark(s) in {} folder(s)",
        input.display(),
        parsed.bookmarks,
        parsed.folders
    );

    if filter.is_empty() {
        return Ok(tree);
    }

    let tree = filter.apply(tree);
    let kept = tree_stats(&tree);
    info!(
        "Filtered {}: kept {} of {} bookmark(s)",
        input.display(),
        kept.bookmarks,
        parsed.bookmarks
    );
    Ok(tree)
}
