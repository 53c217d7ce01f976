pub mod file_tree;
pub mod post;

pub use file_tree::{FileTree, FileTreeItem, FileTreeNode};
pub use post::Post;
