//! Markdown to HTML rendering for Lectern.
//!
//! Rendering is configured with an explicit [`RenderOptions`] value passed to
//! every call; there is no process-wide renderer state.
//!
//! Headings receive stable anchor IDs from [`slugify`], so other pages can link
//! to `/genesis/1#in-the-beginning` and expect the anchor to survive a re-render.
//!
//! # Example
//!
//! ```
//! use lectern_renderer::{RenderOptions, render_markdown};
//!
//! let result = render_markdown("## In the Beginning\n\nText", &RenderOptions::default());
//! assert!(result.html.contains(r#"id="in-the-beginning""#));
//! ```

mod html;
mod renderer;
mod slug;
mod state;
mod util;

pub use renderer::{MarkdownRenderer, RenderOptions, RenderResult, render_markdown};
pub use slug::slugify;
pub use state::{TocEntry, escape_html};
