//! HTML fragments for block elements that need more than a tag pair.

use std::fmt::Write;

use pulldown_cmark::BlockQuoteKind;

use crate::state::escape_html;

/// Write a code block as `<pre><code>`, tagging the language when known.
pub(crate) fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
    if let Some(lang) = lang {
        let _ = write!(
            out,
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(content)
        );
    } else {
        let _ = write!(out, "<pre><code>{}</code></pre>", escape_html(content));
    }
}

/// Open a GitHub-style alert (`> [!NOTE]`).
pub(crate) fn alert_start(kind: BlockQuoteKind, out: &mut String) {
    let (class, title) = match kind {
        BlockQuoteKind::Note => ("note", "Note"),
        BlockQuoteKind::Tip => ("tip", "Tip"),
        BlockQuoteKind::Important => ("important", "Important"),
        BlockQuoteKind::Warning => ("warning", "Warning"),
        BlockQuoteKind::Caution => ("caution", "Caution"),
    };
    let _ = write!(
        out,
        r#"<div class="markdown-alert markdown-alert-{class}"><p class="markdown-alert-title">{title}</p>"#
    );
}

pub(crate) fn alert_end(out: &mut String) {
    out.push_str("</div>");
}

/// Write an image tag.
pub(crate) fn image(src: &str, alt: &str, title: &str) -> String {
    let title_attr = if title.is_empty() {
        String::new()
    } else {
        format!(r#" title="{}""#, escape_html(title))
    };
    format!(
        r#"<img src="{}"{title_attr} alt="{}">"#,
        escape_html(src),
        escape_html(alt)
    )
}

/// Write an opening link tag.
pub(crate) fn link_start(href: &str, title: &str) -> String {
    if title.is_empty() {
        format!(r#"<a href="{}">"#, escape_html(href))
    } else {
        format!(
            r#"<a href="{}" title="{}">"#,
            escape_html(href),
            escape_html(title)
        )
    }
}

/// Write a disabled task list checkbox.
pub(crate) fn task_list_marker(checked: bool, out: &mut String) {
    if checked {
        out.push_str(r#"<input type="checkbox" disabled checked> "#);
    } else {
        out.push_str(r#"<input type="checkbox" disabled> "#);
    }
}

/// Write a heading, optionally wrapping its content in a self-link.
///
/// Headings that already contain a link are not wrapped, since anchors
/// cannot nest.
pub(crate) fn heading(level: u8, id: &str, inner: &str, anchor: bool, out: &mut String) {
    let inner = inner.trim();
    if anchor && !inner.contains("<a ") {
        let _ = write!(
            out,
            r##"<h{level} id="{id}"><a href="#{id}">{inner}</a></h{level}>"##
        );
    } else {
        let _ = write!(out, r#"<h{level} id="{id}">{inner}</h{level}>"#);
    }
}
