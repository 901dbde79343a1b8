//! Navigation tree building.
//!
//! The content root is walked fresh on every call. There is no cache and no
//! incremental update; the tree reflects the filesystem at call time.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::natural::natural_cmp;

/// Extension of markdown source files.
pub(crate) const MARKDOWN_EXTENSION: &str = "md";

/// One file or directory under the content root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    /// Directory name, or file name without the `.md` extension.
    pub name: String,
    /// Root-relative URL path with a leading slash (`/genesis/1`).
    pub path: String,
    /// Whether this node is a directory.
    pub is_directory: bool,
    /// Child nodes; `Some` exactly when this node is a directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ContentNode>>,
}

impl ContentNode {
    /// Create a directory node.
    #[must_use]
    pub fn directory(name: impl Into<String>, path: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_directory: true,
            children: Some(children),
        }
    }

    /// Create a file node.
    #[must_use]
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_directory: false,
            children: None,
        }
    }

    /// Children of a directory node (empty for files).
    #[must_use]
    pub fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// Sibling order: directories first, then natural order on `name`.
fn compare_nodes(a: &ContentNode, b: &ContentNode) -> Ordering {
    b.is_directory
        .cmp(&a.is_directory)
        .then_with(|| natural_cmp(&a.name, &b.name))
}

/// Error reading a directory while building the tree.
///
/// Never escapes [`build_tree`]; it is logged and the directory treated as empty.
#[derive(Debug, thiserror::Error)]
pub(crate) enum TreeError {
    #[error("Failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to create content root {}: {source}", path.display())]
    CreateRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Build the navigation tree for a content root.
///
/// The root is created when it does not exist, yielding an empty tree.
/// Directories that cannot be read are logged and contribute no children.
pub fn build_tree(root: &Path) -> Vec<ContentNode> {
    if let Err(e) = ensure_root(root) {
        tracing::warn!(error = %e, "Content root unavailable");
        return Vec::new();
    }
    read_level(root, "")
}

/// Create the content root if it is missing.
fn ensure_root(root: &Path) -> Result<(), TreeError> {
    if root.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(root).map_err(|source| TreeError::CreateRoot {
        path: root.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %root.display(), "Created content root");
    Ok(())
}

/// Read one directory level, logging and degrading on failure.
fn read_level(dir: &Path, url_prefix: &str) -> Vec<ContentNode> {
    match read_directory(dir, url_prefix) {
        Ok(nodes) => nodes,
        Err(e) => {
            tracing::warn!(error = %e, "Skipping unreadable content directory");
            Vec::new()
        }
    }
}

/// Read a directory into sorted nodes, recursing into subdirectories.
fn read_directory(dir: &Path, url_prefix: &str) -> Result<Vec<ContentNode>, TreeError> {
    let entries = fs::read_dir(dir).map_err(|source| TreeError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut nodes = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| TreeError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let url_path = format!("{url_prefix}/{file_name}");

        // Follow symlinks so linked chapters appear like regular entries
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        if metadata.is_dir() {
            let children = read_level(&path, &url_path);
            nodes.push(ContentNode::directory(file_name, url_path, children));
        } else if let Some(stem) = markdown_stem(&file_name) {
            let url_path = format!("{url_prefix}/{stem}");
            nodes.push(ContentNode::file(stem, url_path));
        }
    }

    nodes.sort_by(compare_nodes);
    Ok(nodes)
}

/// Return the name without `.md` if it is a markdown file name.
fn markdown_stem(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(MARKDOWN_EXTENSION)
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|stem| !stem.is_empty())
}
