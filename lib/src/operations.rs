use crate::models::{Folder, Node};
use std::collections::{BTreeSet, HashSet};

/// Folder names to remove and to pick, applied in that order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderFilter {
    pub remove: HashSet<String>,
    pub pick: HashSet<String>,
}

impl FolderFilter {
    pub fn new<R, P>(remove: R, pick: P) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            remove: remove.into_iter().map(Into::into).collect(),
            pick: pick.into_iter().map(Into::into).collect(),
        }
    }

    /// True when applying the filter would leave any tree unchanged
    pub fn is_empty(&self) -> bool {
        self.remove.is_empty() && self.pick.is_empty()
    }

    /// Remove, then pick; a mode with no names is skipped
    pub fn apply(&self, tree: Vec<Node>) -> Vec<Node> {
        let tree = if self.remove.is_empty() {
            tree
        } else {
            remove_folders(&tree, &self.remove)
        };

        if self.pick.is_empty() {
            tree
        } else {
            pick_folders(&tree, &self.pick)
        }
    }
}

/// Drop every folder titled in `names`, with its whole subtree
///
/// A folder whose children all get removed is dropped as well, so removal
/// never leaves empty shells behind. Folders that were empty to begin with
/// stay. Bookmarks are never removed and sibling order is kept.
pub fn remove_folders(tree: &[Node], names: &HashSet<String>) -> Vec<Node> {
    tree.iter()
        .filter_map(|node| match node {
            Node::Bookmark(_) => Some(node.clone()),
            Node::Folder(folder) if names.contains(folder.title.as_str()) => None,
            Node::Folder(folder) => {
                let children = remove_folders(&folder.children, names);
                if children.is_empty() && !folder.children.is_empty() {
                    None
                } else {
                    Some(Node::Folder(with_children(folder, children)))
                }
            }
        })
        .collect()
}

/// Keep only folders titled in `names` and the folders leading to them
///
/// Matching folders are kept whole. Other folders survive only if something
/// below them is picked, and then only with the picked part. Bookmarks are
/// never picked on their own.
pub fn pick_folders(tree: &[Node], names: &HashSet<String>) -> Vec<Node> {
    tree.iter()
        .filter_map(|node| match node {
            Node::Bookmark(_) => None,
            Node::Folder(folder) if names.contains(folder.title.as_str()) => Some(node.clone()),
            Node::Folder(folder) => {
                let children = pick_folders(&folder.children, names);
                if children.is_empty() {
                    None
                } else {
                    Some(Node::Folder(with_children(folder, children)))
                }
            }
        })
        .collect()
}

fn with_children(folder: &Folder, children: Vec<Node>) -> Folder {
    Folder {
        title: folder.title.clone(),
        add_date: folder.add_date.clone(),
        last_modified: folder.last_modified.clone(),
        children,
    }
}

/// Unique URLs of all bookmarks in the tree, at any depth, in sorted order
pub fn collect_urls(tree: &[Node]) -> BTreeSet<&str> {
    let mut urls = BTreeSet::new();
    extend_urls(tree, &mut urls);
    urls
}

fn extend_urls<'a>(tree: &'a [Node], urls: &mut BTreeSet<&'a str>) {
    for node in tree {
        match node {
            Node::Bookmark(bookmark) => {
                urls.insert(bookmark.url.as_str());
            }
            Node::Folder(folder) => extend_urls(&folder.children, urls),
        }
    }
}

/// Counts gathered by a full walk of a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub bookmarks: usize,
    pub folders: usize,
    /// Nesting level of the deepest node; top-level nodes are at depth 1
    pub max_depth: usize,
}

pub fn tree_stats(tree: &[Node]) -> TreeStats {
    let mut stats = TreeStats::default();
    walk_stats(tree, 1, &mut stats);
    stats
}

fn walk_stats(tree: &[Node], depth: usize, stats: &mut TreeStats) {
    for node in tree {
        stats.max_depth = stats.max_depth.max(depth);
        match node {
            Node::Bookmark(_) => stats.bookmarks += 1,
            Node::Folder(folder) => {
                stats.folders += 1;
                walk_stats(&folder.children, depth + 1, stats);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bookmark;
    use rstest::rstest;

    fn folder(title: &str, children: Vec<Node>) -> Node {
        Folder::new(title, children).into()
    }

    fn bookmark(title: &str, url: &str) -> Node {
        Bookmark::new(title, url).into()
    }

    fn names(names: &[&str]) -> HashSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn sample_tree() -> Vec<Node> {
        vec![
            folder(
                "Bookmarks Bar",
                vec![
                    bookmark("Example", "https://example.com"),
                    folder("accounts", vec![bookmark("Bank", "https://bank.example")]),
                ],
            ),
            folder(
                "Other",
                vec![
                    folder("Work", vec![bookmark("Tracker", "https://tracker.example")]),
                    folder("Empty", Vec::new()),
                    bookmark("News", "https://news.example"),
                ],
            ),
            bookmark("Loose", "https://example.com"),
        ]
    }

    #[test]
    fn test_remove_with_no_names_is_noop() {
        let tree = sample_tree();
        assert_eq!(remove_folders(&tree, &HashSet::new()), tree);
    }

    #[test]
    fn test_remove_drops_named_folder() {
        let tree = vec![
            folder(
                "Bookmarks Bar",
                vec![bookmark("Example", "https://example.com")],
            ),
            folder("accounts", vec![bookmark("", "https://bank.example")]),
        ];

        let result = remove_folders(&tree, &names(&["accounts"]));

        assert_eq!(
            result,
            vec![folder(
                "Bookmarks Bar",
                vec![bookmark("Example", "https://example.com")]
            )]
        );
        assert_eq!(
            collect_urls(&result),
            BTreeSet::from(["https://example.com"])
        );
    }

    #[test]
    fn test_remove_prunes_emptied_ancestors() {
        let tree = vec![
            folder(
                "Outer",
                vec![folder(
                    "Inner",
                    vec![folder("accounts", vec![bookmark("Bank", "https://bank.example")])],
                )],
            ),
            bookmark("Keep", "https://keep.example"),
        ];

        let result = remove_folders(&tree, &names(&["accounts"]));

        assert_eq!(result, vec![bookmark("Keep", "https://keep.example")]);
    }

    #[test]
    fn test_remove_keeps_originally_empty_folders() {
        let result = remove_folders(&sample_tree(), &names(&["accounts"]));
        let other = result[1].as_folder().unwrap();
        assert!(other
            .children
            .iter()
            .any(|node| node.title() == "Empty" && node.as_folder().is_some()));
    }

    #[rstest]
    #[case(&["accounts"])]
    #[case(&["Work", "accounts"])]
    #[case(&["Other"])]
    #[case(&["does not exist"])]
    fn test_remove_is_idempotent(#[case] targets: &[&str]) {
        let targets = names(targets);
        let once = remove_folders(&sample_tree(), &targets);
        let twice = remove_folders(&once, &targets);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_does_not_touch_input() {
        let tree = sample_tree();
        let _ = remove_folders(&tree, &names(&["accounts", "Work"]));
        assert_eq!(tree, sample_tree());
    }

    #[test]
    fn test_remove_preserves_order() {
        let result = remove_folders(&sample_tree(), &names(&["Work"]));
        let titles: Vec<_> = result.iter().map(Node::title).collect();
        assert_eq!(titles, vec!["Bookmarks Bar", "Other", "Loose"]);

        let other: Vec<_> = result[1]
            .as_folder()
            .unwrap()
            .children
            .iter()
            .map(Node::title)
            .collect();
        assert_eq!(other, vec!["Empty", "News"]);
    }

    #[test]
    fn test_pick_keeps_matching_subtree_and_path() {
        let result = pick_folders(&sample_tree(), &names(&["Work"]));

        assert_eq!(
            result,
            vec![folder(
                "Other",
                vec![folder(
                    "Work",
                    vec![bookmark("Tracker", "https://tracker.example")]
                )]
            )]
        );
    }

    #[test]
    fn test_pick_never_returns_top_level_bookmarks() {
        let result = pick_folders(&sample_tree(), &names(&["Bookmarks Bar", "Work"]));

        assert!(result.iter().all(|node| node.as_folder().is_some()));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_pick_keeps_matched_folder_whole() {
        let tree = vec![folder(
            "Work",
            vec![
                bookmark("Direct", "https://direct.example"),
                folder("Work", vec![bookmark("Nested", "https://nested.example")]),
                folder("Empty", Vec::new()),
            ],
        )];

        let result = pick_folders(&tree, &names(&["Work"]));

        assert_eq!(result, tree);
    }

    #[rstest]
    #[case(&[])]
    #[case(&["nothing matches"])]
    fn test_pick_without_match_is_empty(#[case] targets: &[&str]) {
        assert!(pick_folders(&sample_tree(), &names(targets)).is_empty());
    }

    #[test]
    fn test_pick_leaves_reachable_bookmarks_inside_match() {
        fn all_inside(nodes: &[Node], inside: bool, target: &str) -> bool {
            nodes.iter().all(|node| match node {
                Node::Bookmark(_) => inside,
                Node::Folder(f) => all_inside(&f.children, inside || f.title == target, target),
            })
        }

        let result = pick_folders(&sample_tree(), &names(&["Work"]));
        assert!(all_inside(&result, false, "Work"));
    }

    #[test]
    fn test_collect_urls_deduplicates_across_folders() {
        let tree = sample_tree();
        let urls = collect_urls(&tree);

        assert_eq!(
            urls.into_iter().collect::<Vec<_>>(),
            vec![
                "https://bank.example",
                "https://example.com",
                "https://news.example",
                "https://tracker.example",
            ]
        );
    }

    #[test]
    fn test_collect_urls_empty_tree() {
        assert!(collect_urls(&[]).is_empty());
    }

    #[test]
    fn test_filter_applies_remove_then_pick() {
        let filter = FolderFilter::new(["Work"], ["Other"]);
        let result = filter.apply(sample_tree());

        assert_eq!(
            result,
            vec![folder(
                "Other",
                vec![
                    folder("Empty", Vec::new()),
                    bookmark("News", "https://news.example"),
                ]
            )]
        );
    }

    #[test]
    fn test_empty_filter_returns_tree_unchanged() {
        let filter = FolderFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(sample_tree()), sample_tree());
    }

    #[test]
    fn test_tree_stats() {
        assert_eq!(
            tree_stats(&sample_tree()),
            TreeStats {
                bookmarks: 5,
                folders: 5,
                max_depth: 3,
            }
        );
        assert_eq!(tree_stats(&[]), TreeStats::default());
    }
}
