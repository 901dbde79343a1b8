//! HTTP request handlers.

pub(crate) mod documents;
pub(crate) mod navigation;
pub(crate) mod pages;

/// Convert a wildcard slug (without leading slash) to a URL path.
///
/// axum's `{*slug}` captures `genesis/1`, but navigation paths are `/genesis/1`.
pub(crate) fn to_url_path(slug: &str) -> String {
    if slug.is_empty() {
        "/".to_owned()
    } else {
        format!("/{slug}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_url_path() {
        assert_eq!(to_url_path(""), "/");
        assert_eq!(to_url_path("genesis/1"), "/genesis/1");
    }
}
