//! Content navigation and slug resolution for Lectern.
//!
//! This crate provides:
//! - [`build_tree`]: Navigation tree of a content root, directories first in
//!   natural order
//! - [`Resolver`]: URL segments to rendered markdown, checking [`ContentRoots`]
//!   in order
//! - [`Site`]: Façade combining both for the server and CLI
//!
//! Nothing is cached. Every call reads the filesystem afresh.
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use lectern_site::{ContentRoots, RenderOptions, Resolver, build_tree};
//!
//! let roots = ContentRoots::new("content", ["build/content".into()]);
//! let nav = build_tree(roots.navigation_root());
//!
//! let resolver = Resolver::new(roots, RenderOptions::default());
//! let page = resolver.resolve(&["genesis", "1", "1"])?;
//! assert_eq!(page.title, "Genesis 1:1");
//! # Ok(())
//! # }
//! ```

mod natural;
mod resolver;
mod site;
mod slug;
mod tree;

pub use natural::natural_cmp;
pub use resolver::{ContentRoots, ResolveError, ResolvedContent, Resolver};
pub use site::Site;
pub use slug::Slug;
pub use tree::{ContentNode, build_tree};

// Re-export renderer types that appear in this crate's API
pub use lectern_renderer::{RenderOptions, TocEntry};
