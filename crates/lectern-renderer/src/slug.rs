//! Heading anchor generation.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Convert heading text to an anchor ID.
///
/// Diacritics are stripped (`é` -> `e`), letters are lowercased, runs of
/// whitespace and hyphens become a single `-`, and any other character that is
/// not alphanumeric or `_` is dropped. Applying it to its own output returns
/// the same string.
///
/// # Examples
///
/// ```
/// use lectern_renderer::slugify;
///
/// assert_eq!(slugify("In the Beginning"), "in-the-beginning");
/// assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
/// assert_eq!(slugify("What's New?"), "whats-new");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_whitespace() || c == '-' {
            pending_dash = !slug.is_empty();
        } else if c.is_alphanumeric() || c == '_' {
            if pending_dash {
                slug.push('-');
                pending_dash = false;
            }
            slug.extend(c.to_lowercase());
        }
    }

    slug
}
