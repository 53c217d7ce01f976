use std::collections::BTreeMap;

use relative_path::{RelativePath, RelativePathBuf};

use super::post::Post;

/// One node in the browsable content tree: a folder or a post.
#[derive(Debug, Clone, PartialEq)]
pub struct FileTreeNode {
    pub name: String,
    pub relative_path: RelativePathBuf,
    pub is_folder: bool,
    pub is_expanded: bool,
    pub post: Option<Post>,
    pub children: BTreeMap<String, FileTreeNode>,
}

impl FileTreeNode {
    pub fn new_folder(name: String, relative_path: RelativePathBuf) -> Self {
        Self {
            name,
            relative_path,
            is_folder: true,
            is_expanded: false,
            post: None,
            children: BTreeMap::new(),
        }
    }

    pub fn new_post(name: String, post: Post) -> Self {
        Self {
            name,
            relative_path: post.relative_path().to_relative_path_buf(),
            is_folder: false,
            is_expanded: false,
            post: Some(post),
            children: BTreeMap::new(),
        }
    }

    fn insert(&mut self, components: &[&str], post: Post) {
        let Some((first, rest)) = components.split_first() else {
            return;
        };

        if rest.is_empty() {
            self.children
                .insert(first.to_string(), FileTreeNode::new_post(first.to_string(), post));
        } else {
            let folder_path = self.relative_path.join(first);
            self.children
                .entry(first.to_string())
                .or_insert_with(|| FileTreeNode::new_folder(first.to_string(), folder_path))
                .insert(rest, post);
        }
    }

    fn set_expanded(&mut self, path: &RelativePath, expanded: bool) -> bool {
        if self.relative_path == *path {
            self.is_expanded = expanded;
            return true;
        }
        for child in self.children.values_mut() {
            if child.set_expanded(path, expanded) {
                return true;
            }
        }
        false
    }

    fn toggle_expanded(&mut self, path: &RelativePath) -> bool {
        if self.relative_path == *path {
            self.is_expanded = !self.is_expanded;
            return true;
        }
        for child in self.children.values_mut() {
            if child.toggle_expanded(path) {
                return true;
            }
        }
        false
    }

    fn flatten_into(&self, depth: usize, items: &mut Vec<FileTreeItem>) {
        items.push(FileTreeItem {
            node: self.clone(),
            depth,
        });

        if !self.is_expanded {
            return;
        }

        // Folders before posts, both case-insensitive alphabetical.
        let mut sorted_children: Vec<_> = self.children.values().collect();
        sorted_children.sort_by(|a, b| match (a.is_folder, b.is_folder) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        });

        for child in sorted_children {
            child.flatten_into(depth + 1, items);
        }
    }
}

/// A tree node paired with its indent depth, for list-style UIs.
#[derive(Debug, Clone, PartialEq)]
pub struct FileTreeItem {
    pub node: FileTreeNode,
    pub depth: usize,
}

/// The content directory as a browsable tree of folders and posts.
#[derive(Debug, Clone, PartialEq)]
pub struct FileTree {
    pub root: FileTreeNode,
}

impl FileTree {
    pub fn new(root_name: String) -> Self {
        Self {
            root: FileTreeNode::new_folder(root_name, RelativePathBuf::new()),
        }
    }

    pub fn build_from_posts(root_name: String, posts: Vec<Post>) -> Self {
        let mut tree = Self::new(root_name);
        tree.root.is_expanded = true; // Root is always open

        for post in posts {
            let path = post.relative_path().to_relative_path_buf();
            let components: Vec<&str> = path.iter().collect();
            tree.root.insert(&components, post);
        }

        tree
    }

    pub fn toggle_folder(&mut self, path: &RelativePath) {
        self.root.toggle_expanded(path);
    }

    pub fn expand_folder(&mut self, path: &RelativePath) {
        self.root.set_expanded(path, true);
    }

    pub fn collapse_folder(&mut self, path: &RelativePath) {
        self.root.set_expanded(path, false);
    }

    pub fn get_items(&self) -> Vec<FileTreeItem> {
        let mut items = Vec::new();
        self.root.flatten_into(0, &mut items);
        items
    }
}
