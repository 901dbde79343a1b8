//! Slug resolution against an ordered list of content roots.

use std::fs;
use std::path::{Path, PathBuf};

use lectern_renderer::{RenderOptions, TocEntry, render_markdown};
use serde::Serialize;

use crate::slug::Slug;

/// Error resolving a slug to content.
///
/// Every failure (invalid slug, missing file, unreadable file) collapses into
/// `NotFound` so callers can map it straight to a 404.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Could not find {slug}")]
    NotFound { slug: String },
}

impl ResolveError {
    /// The slug that could not be resolved.
    #[must_use]
    pub fn slug(&self) -> &str {
        match self {
            Self::NotFound { slug } => slug,
        }
    }
}

/// Ordered content roots: primary first, then fallbacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentRoots {
    roots: Vec<PathBuf>,
}

impl ContentRoots {
    /// Create roots from a primary directory and its fallbacks.
    #[must_use]
    pub fn new(primary: impl Into<PathBuf>, fallbacks: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut roots = vec![primary.into()];
        roots.extend(fallbacks);
        Self { roots }
    }

    /// The primary root.
    #[must_use]
    pub fn primary(&self) -> &Path {
        &self.roots[0]
    }

    /// All roots in lookup order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.roots.iter().map(PathBuf::as_path)
    }

    /// First root containing `relative` as a regular file.
    #[must_use]
    pub fn find(&self, relative: &Path) -> Option<PathBuf> {
        self.iter()
            .map(|root| root.join(relative))
            .find(|candidate| candidate.is_file())
    }

    /// Root used for navigation: the first that exists, else the primary.
    #[must_use]
    pub fn navigation_root(&self) -> &Path {
        self.iter()
            .find(|root| root.is_dir())
            .unwrap_or_else(|| self.primary())
    }
}

/// A slug resolved to rendered content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedContent {
    /// Requested segments joined with `/`.
    pub slug: String,
    /// Markdown source as read from disk.
    pub raw_text: String,
    pub html: String,
    pub title: String,
    /// Third slug segment, for display only.
    pub verse_indicator: Option<String>,
    pub toc: Vec<TocEntry>,
    /// File that was read.
    pub source_path: PathBuf,
}

/// Resolves slugs to markdown files and renders them.
#[derive(Clone, Debug)]
pub struct Resolver {
    roots: ContentRoots,
    render_options: RenderOptions,
}

impl Resolver {
    #[must_use]
    pub fn new(roots: ContentRoots, render_options: RenderOptions) -> Self {
        Self {
            roots,
            render_options,
        }
    }

    #[must_use]
    pub fn roots(&self) -> &ContentRoots {
        &self.roots
    }

    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        self.render_options
    }

    /// Resolve URL path segments.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::NotFound` if the segments are invalid or no
    /// root holds a readable UTF-8 file for them.
    pub fn resolve<S: AsRef<str>>(&self, segments: &[S]) -> Result<ResolvedContent, ResolveError> {
        let slug = Slug::new(segments.iter().map(|s| s.as_ref().to_owned()))?;
        self.resolve_slug(&slug)
    }

    /// Resolve an already validated slug.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::NotFound` if no root holds a readable UTF-8 file.
    pub fn resolve_slug(&self, slug: &Slug) -> Result<ResolvedContent, ResolveError> {
        let not_found = || ResolveError::NotFound {
            slug: slug.to_string(),
        };

        let relative = slug.file_path();
        let Some(source_path) = self.roots.find(&relative) else {
            tracing::debug!(slug = %slug, file = %relative.display(), "No content root holds slug");
            return Err(not_found());
        };

        let raw_text = fs::read_to_string(&source_path).map_err(|e| {
            tracing::debug!(path = %source_path.display(), error = %e, "Failed to read content");
            not_found()
        })?;

        let rendered = render_markdown(&raw_text, &self.render_options);

        Ok(ResolvedContent {
            slug: slug.to_string(),
            raw_text,
            html: rendered.html,
            title: slug.title(),
            verse_indicator: slug.verse().map(str::to_owned),
            toc: rendered.toc,
            source_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn resolver_for(root: &Path) -> Resolver {
        Resolver::new(ContentRoots::new(root, []), RenderOptions::default())
    }

    #[test]
    fn test_resolve_single_segment() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "getting-started.md", "# Getting Started\n\nHello.");

        let content = resolver_for(temp_dir.path())
            .resolve(&["getting-started"])
            .unwrap();

        assert_eq!(content.slug, "getting-started");
        assert_eq!(content.title, "getting started");
        assert_eq!(content.verse_indicator, None);
        assert_eq!(content.raw_text, "# Getting Started\n\nHello.");
        assert!(content.html.contains("<p>Hello.</p>"));
    }

    #[test]
    fn test_resolve_verse_reads_chapter_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "genesis/1.md", "In the beginning.");
        let resolver = resolver_for(temp_dir.path());

        let verse = resolver.resolve(&["genesis", "1", "1"]).unwrap();
        let chapter = resolver.resolve(&["genesis", "1"]).unwrap();

        assert_eq!(verse.title, "Genesis 1:1");
        assert_eq!(verse.verse_indicator.as_deref(), Some("1"));
        assert_eq!(verse.slug, "genesis/1/1");
        assert_eq!(chapter.title, "Genesis 1");
        assert_eq!(verse.source_path, chapter.source_path);
        assert_eq!(verse.html, chapter.html);
    }

    #[test]
    fn test_resolve_missing_is_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();

        let err = resolver_for(temp_dir.path())
            .resolve(&["missing"])
            .unwrap_err();

        assert_eq!(
            err,
            ResolveError::NotFound {
                slug: "missing".to_owned()
            }
        );
        assert_eq!(err.to_string(), "Could not find missing");
    }

    #[test]
    fn test_resolve_falls_back_to_secondary_root() {
        let primary = tempfile::tempdir().unwrap();
        let fallback = tempfile::tempdir().unwrap();
        write(fallback.path(), "exodus/3.md", "Burning bush.");
        let roots = ContentRoots::new(primary.path(), [fallback.path().to_path_buf()]);
        let resolver = Resolver::new(roots, RenderOptions::default());

        let content = resolver.resolve(&["exodus", "3"]).unwrap();

        assert_eq!(content.source_path, fallback.path().join("exodus/3.md"));
        assert_eq!(content.raw_text, "Burning bush.");
    }

    #[test]
    fn test_resolve_primary_wins() {
        let primary = tempfile::tempdir().unwrap();
        let fallback = tempfile::tempdir().unwrap();
        write(primary.path(), "about.md", "primary");
        write(fallback.path(), "about.md", "fallback");
        let roots = ContentRoots::new(primary.path(), [fallback.path().to_path_buf()]);

        let content = Resolver::new(roots, RenderOptions::default())
            .resolve(&["about"])
            .unwrap();

        assert_eq!(content.raw_text, "primary");
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "psalms/23.md", "## The Lord\n\nShepherd -- *still* waters.");
        let resolver = resolver_for(temp_dir.path());

        let first = resolver.resolve(&["psalms", "23"]).unwrap();
        let second = resolver.resolve(&["psalms", "23"]).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let content = temp_dir.path().join("content");
        write(temp_dir.path(), "secret.md", "hidden");
        fs::create_dir(&content).unwrap();

        let resolver = resolver_for(&content);

        assert!(resolver.resolve(&["..", "secret"]).is_err());
        assert!(resolver.resolve(&["../secret"]).is_err());
    }

    #[test]
    fn test_resolve_empty_segments_is_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();

        let err = resolver_for(temp_dir.path())
            .resolve::<&str>(&[])
            .unwrap_err();

        assert_eq!(err.slug(), "");
    }

    #[test]
    fn test_resolve_invalid_utf8_is_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("binary.md"), [0xff, 0xfe, 0x00]).unwrap();

        let result = resolver_for(temp_dir.path()).resolve(&["binary"]);

        assert!(matches!(result, Err(ResolveError::NotFound { .. })));
    }

    #[test]
    fn test_resolve_directory_named_like_file_is_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("odd.md")).unwrap();

        assert!(resolver_for(temp_dir.path()).resolve(&["odd"]).is_err());
    }

    #[test]
    fn test_resolve_collects_toc() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "guide.md", "# Guide\n\n## Setup\n\n### Details");

        let content = resolver_for(temp_dir.path()).resolve(&["guide"]).unwrap();

        let ids: Vec<&str> = content.toc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["setup", "details"]);
    }

    #[test]
    fn test_navigation_root_prefers_existing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let primary = temp_dir.path().join("content");
        let fallback = temp_dir.path().join("build");
        fs::create_dir(&fallback).unwrap();

        let roots = ContentRoots::new(&primary, [fallback.clone()]);
        assert_eq!(roots.navigation_root(), fallback);

        fs::create_dir(&primary).unwrap();
        assert_eq!(roots.navigation_root(), primary);
    }

    #[test]
    fn test_navigation_root_defaults_to_primary() {
        let temp_dir = tempfile::tempdir().unwrap();
        let primary = temp_dir.path().join("content");
        let roots = ContentRoots::new(&primary, [temp_dir.path().join("missing")]);

        assert_eq!(roots.navigation_root(), primary);
    }

    #[test]
    fn test_resolved_content_serialization() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "ruth/1.md", "Text");

        let content = resolver_for(temp_dir.path())
            .resolve(&["ruth", "1", "16"])
            .unwrap();
        let json = serde_json::to_value(&content).unwrap();

        assert_eq!(json["verseIndicator"], "16");
        assert_eq!(json["rawText"], "Text");
        assert_eq!(json["title"], "Ruth 1:16");
    }
}
