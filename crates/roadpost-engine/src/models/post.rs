use relative_path::{RelativePath, RelativePathBuf};

/// A markdown post in the content directory.
///
/// Posts are addressed by content-relative path; the slug is that path
/// without the `.md` extension, and the title is a human-readable form of
/// the file stem (dashes and underscores read as spaces).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    relative_path: RelativePathBuf,
    slug: String,
    title: String,
}

impl Post {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let slug = {
            let path_str = relative_path.as_str();
            path_str.strip_suffix(".md").unwrap_or(path_str).to_string()
        };
        let title = Self::title_from_path(&relative_path);

        Self {
            relative_path,
            slug,
            title,
        }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Content-relative path without the `.md` extension, for links.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Display title derived from the file stem.
    pub fn title(&self) -> &str {
        &self.title
    }

    fn title_from_path(path: &RelativePath) -> String {
        let stem = path
            .file_name()
            .map(|name| name.strip_suffix(".md").unwrap_or(name))
            .unwrap_or("Untitled");
        stem.replace(['-', '_'], " ")
    }
}

impl From<RelativePathBuf> for Post {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for Post {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_strips_extension_but_keeps_folders() {
        let post = Post::from_relative_str("guides/solar-panel-sizing.md");
        assert_eq!(post.slug(), "guides/solar-panel-sizing");
        assert_eq!(post.relative_path().as_str(), "guides/solar-panel-sizing.md");
    }

    #[test]
    fn title_reads_dashes_and_underscores_as_spaces() {
        let post = Post::from_relative_str("towing_weight-basics.md");
        assert_eq!(post.title(), "towing weight basics");
    }

    #[test]
    fn non_markdown_name_is_kept_verbatim() {
        let post = Post::from_relative_str("notes.txt");
        assert_eq!(post.slug(), "notes.txt");
        assert_eq!(post.title(), "notes.txt");
    }
}
