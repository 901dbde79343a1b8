//! HTML shell for server-rendered pages.
//!
//! Every page is the same frame: a header with the site title, the navigation
//! sidebar, and one `<article>` in `<main>`.

use lectern_renderer::escape_html;
use lectern_site::ContentNode;

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;line-height:1.6;color:#222}\
header{padding:.75rem 1.5rem;border-bottom:1px solid #ddd}\
header a{color:inherit;text-decoration:none;font-weight:600}\
.layout{display:flex;align-items:flex-start}\
nav{flex:0 0 16rem;padding:1rem;border-right:1px solid #ddd}\
nav ul{list-style:none;margin:0;padding-left:1rem}\
nav>ul{padding-left:0}\
nav a[aria-current]{font-weight:600}\
main{flex:1;padding:1rem 2rem;max-width:48rem}\
.verse-indicator{color:#666;font-size:.9rem}\
.markdown-alert{border-left:4px solid #888;padding:0 1rem}";

/// Content placed in the page's `<article>`.
pub(crate) struct Article<'a> {
    /// Text for `<title>` and the heading above the article.
    pub(crate) title: &'a str,
    /// Rendered markdown.
    pub(crate) html: &'a str,
    /// URL path of the page, used to mark the current sidebar entry.
    pub(crate) path: &'a str,
    pub(crate) verse: Option<&'a str>,
}

/// Render a full HTML document.
pub(crate) fn render_page(site_title: &str, nav: &[ContentNode], article: &Article<'_>) -> String {
    let mut out = String::with_capacity(article.html.len() + 2048);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(article.title)));
    out.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
    out.push_str(&format!(
        "<header><a href=\"/\">{}</a></header>\n",
        escape_html(site_title)
    ));
    out.push_str("<div class=\"layout\">\n<nav aria-label=\"Contents\">\n");
    render_sidebar(nav, article.path, &mut out);
    out.push_str("</nav>\n<main>\n");

    match article.verse {
        Some(verse) => out.push_str(&format!(
            "<article data-verse=\"{}\">\n",
            escape_html(verse)
        )),
        None => out.push_str("<article>\n"),
    }
    if let Some(verse) = article.verse {
        out.push_str(&format!(
            "<p class=\"verse-indicator\">Verse {}</p>\n",
            escape_html(verse)
        ));
    }
    out.push_str(article.html);
    out.push_str("</article>\n</main>\n</div>\n</body>\n</html>\n");
    out
}

/// Render the not-found page for a slug.
pub(crate) fn render_not_found(site_title: &str, nav: &[ContentNode], slug: &str) -> String {
    let html = format!(
        "<h1>Not found</h1>\n<p>Could not find {}</p>\n",
        escape_html(slug)
    );
    render_page(
        site_title,
        nav,
        &Article {
            title: "Not found",
            html: &html,
            path: "",
            verse: None,
        },
    )
}

/// Render nested `<ul>` lists for navigation nodes.
fn render_sidebar(nodes: &[ContentNode], current: &str, out: &mut String) {
    if nodes.is_empty() {
        return;
    }
    out.push_str("<ul>\n");
    for node in nodes {
        let name = escape_html(&node.name);
        if node.is_directory {
            out.push_str(&format!("<li class=\"directory\"><span>{name}</span>\n"));
            render_sidebar(node.children(), current, out);
            out.push_str("</li>\n");
        } else if is_current(&node.path, current) {
            out.push_str(&format!(
                "<li><a href=\"{}\" aria-current=\"page\">{name}</a></li>\n",
                escape_html(&node.path)
            ));
        } else {
            out.push_str(&format!(
                "<li><a href=\"{}\">{name}</a></li>\n",
                escape_html(&node.path)
            ));
        }
    }
    out.push_str("</ul>\n");
}

/// A verse page (`/genesis/1/1`) highlights its chapter entry.
fn is_current(node_path: &str, current: &str) -> bool {
    current == node_path
        || current
            .strip_prefix(node_path)
            .is_some_and(|rest| rest.starts_with('/'))
}
