pub mod node;

pub use node::{Bookmark, Folder, Node};
