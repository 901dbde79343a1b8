//! Site façade combining navigation and page resolution.
//!
//! # Thread Safety
//!
//! `Site` holds only immutable configuration. Every call reads the
//! filesystem afresh, so a shared `Arc<Site>` needs no locking.
//!
//! # Example
//!
//! ```no_run
//! use lectern_site::{ContentRoots, RenderOptions, Site};
//!
//! let roots = ContentRoots::new("content", ["build/content".into()]);
//! let site = Site::new(roots, RenderOptions::default());
//!
//! let nav = site.navigation();
//! let page = site.render("genesis/1/1");
//! ```

use std::path::Path;

use lectern_renderer::RenderOptions;

use crate::resolver::{ContentRoots, ResolveError, ResolvedContent, Resolver};
use crate::slug::Slug;
use crate::tree::{ContentNode, build_tree};

/// Name of the page shown at the site root.
const HOME_SLUG: &str = "index";

/// Content site over an ordered list of roots.
#[derive(Clone, Debug)]
pub struct Site {
    resolver: Resolver,
}

impl Site {
    #[must_use]
    pub fn new(roots: ContentRoots, render_options: RenderOptions) -> Self {
        Self {
            resolver: Resolver::new(roots, render_options),
        }
    }

    /// Underlying resolver.
    #[must_use]
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Directory the navigation tree is built from.
    #[must_use]
    pub fn navigation_root(&self) -> &Path {
        self.resolver.roots().navigation_root()
    }

    /// Build the navigation tree.
    ///
    /// Uses the first existing root; if none exists the primary root is
    /// created and the tree is empty.
    #[must_use]
    pub fn navigation(&self) -> Vec<ContentNode> {
        build_tree(self.navigation_root())
    }

    /// Resolve and render a URL path such as `/genesis/1/1`.
    pub fn render(&self, path: &str) -> Result<ResolvedContent, ResolveError> {
        let slug = Slug::parse(path)?;
        self.resolver.resolve_slug(&slug)
    }

    /// The home page (`index.md`), if any root has one.
    #[must_use]
    pub fn home(&self) -> Option<ResolvedContent> {
        self.render(HOME_SLUG).ok()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use pretty_assertions::assert_eq;

    static_assertions::assert_impl_all!(super::Site: Send, Sync);

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn create_site(primary: &Path, fallback: &Path) -> Site {
        let roots = ContentRoots::new(primary, [fallback.to_path_buf()]);
        Site::new(roots, RenderOptions::default())
    }

    #[test]
    fn test_navigation_missing_roots_creates_primary() {
        let temp_dir = tempfile::tempdir().unwrap();
        let primary = temp_dir.path().join("content");
        let site = create_site(&primary, &temp_dir.path().join("build"));

        assert!(site.navigation().is_empty());
        assert!(primary.is_dir());
    }

    #[test]
    fn test_navigation_uses_fallback_when_primary_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let primary = temp_dir.path().join("content");
        let fallback = temp_dir.path().join("build");
        write(&fallback, "genesis/1.md", "");
        let site = create_site(&primary, &fallback);

        let nav = site.navigation();

        assert_eq!(nav.len(), 1);
        assert_eq!(nav[0].path, "/genesis");
        assert!(!primary.exists());
    }

    #[test]
    fn test_render_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "genesis/1.md", "# Genesis 1");
        let site = create_site(temp_dir.path(), &temp_dir.path().join("build"));

        let page = site.render("/genesis/1/1").unwrap();

        assert_eq!(page.title, "Genesis 1:1");
        assert_eq!(page.slug, "genesis/1/1");
    }

    #[test]
    fn test_render_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let site = create_site(temp_dir.path(), &temp_dir.path().join("build"));

        let err = site.render("nowhere").unwrap_err();

        assert_eq!(err.to_string(), "Could not find nowhere");
    }

    #[test]
    fn test_home_page() {
        let temp_dir = tempfile::tempdir().unwrap();
        let site = create_site(temp_dir.path(), &temp_dir.path().join("build"));
        assert!(site.home().is_none());

        write(temp_dir.path(), "index.md", "Welcome");
        let home = site.home().unwrap();

        assert!(home.html.contains("<p>Welcome</p>"));
    }
}
