//! URL slugs and how they map to content files.
//!
//! A one-segment slug addresses a top-level file (`/getting-started` ->
//! `getting-started.md`). Longer slugs address `book/chapter.md`; a third
//! segment is a verse locator carried for display and never changes which
//! file is read.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::resolver::ResolveError;
use crate::tree::MARKDOWN_EXTENSION;

/// Validated URL path segments identifying one content item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slug {
    segments: Vec<String>,
}

impl Slug {
    /// Build a slug from path segments.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::NotFound` if there are no segments, or if any
    /// segment is empty, `.`, `..`, or contains a path separator.
    pub fn new<I, S>(segments: I) -> Result<Self, ResolveError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() || !segments.iter().all(|s| is_valid_segment(s)) {
            return Err(ResolveError::NotFound {
                slug: segments.join("/"),
            });
        }
        Ok(Self { segments })
    }

    /// Parse a URL path such as `genesis/1/1` or `/genesis/1/1/`.
    ///
    /// Empty pieces from leading, trailing, or doubled slashes are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::NotFound` for paths with no segments or with
    /// `.`/`..` segments.
    pub fn parse(path: &str) -> Result<Self, ResolveError> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Err(ResolveError::NotFound {
                slug: path.trim_matches('/').to_owned(),
            });
        }
        Self::new(segments)
    }

    /// The path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Markdown file relative to a content root.
    ///
    /// Only the first two segments participate.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        match self.segments.as_slice() {
            [single] => PathBuf::from(format!("{single}.{MARKDOWN_EXTENSION}")),
            [book, chapter, ..] => {
                PathBuf::from(book).join(format!("{chapter}.{MARKDOWN_EXTENSION}"))
            }
            [] => PathBuf::new(),
        }
    }

    /// Human-readable title.
    ///
    /// `getting-started` -> `getting started`; `genesis/1` -> `Genesis 1`;
    /// `genesis/1/1` -> `Genesis 1:1`.
    #[must_use]
    pub fn title(&self) -> String {
        match self.segments.as_slice() {
            [single] => single.replace('-', " "),
            [book, chapter, rest @ ..] => {
                let mut title = format!("{} {chapter}", capitalize(book));
                if let Some(verse) = rest.first() {
                    title.push(':');
                    title.push_str(verse);
                }
                title
            }
            [] => String::new(),
        }
    }

    /// Verse locator (third segment), if present.
    #[must_use]
    pub fn verse(&self) -> Option<&str> {
        self.segments.get(2).map(String::as_str)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

impl FromStr for Slug {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A segment must name a single path component.
fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\', '\0'])
}

/// Uppercase the first character, leaving the rest unchanged.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
