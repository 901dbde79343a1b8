//! Natural (numeric-aware) string ordering.
//!
//! Names are split into alternating runs of ASCII digits and non-digits.
//! Digit runs compare by integer value, so `2` sorts before `10`.

use std::cmp::Ordering;

/// One run of a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

/// Split a name into alternating digit and non-digit runs.
fn chunks(s: &str) -> impl Iterator<Item = Chunk<'_>> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let is_digit = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != is_digit)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(if is_digit {
            Chunk::Digits(run)
        } else {
            Chunk::Text(run)
        })
    })
}

/// Compare two digit runs by integer value without parsing.
///
/// Leading zeros are ignored, so any run length is supported.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare two text runs: case-insensitive first, then by code point.
fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

fn compare_chunks(a: Chunk<'_>, b: Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Digits(x), Chunk::Digits(y)) => compare_digits(x, y),
        (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
        (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
        (Chunk::Text(x), Chunk::Text(y)) => compare_text(x, y),
    }
}

/// Compare two names in natural order.
///
/// Runs are compared pairwise; when every compared pair is equal the name
/// with fewer runs sorts first. Names that are still equal (`a01` vs `a1`)
/// fall back to raw string order, so the ordering is total.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use lectern_site::natural_cmp;
///
/// assert_eq!(natural_cmp("2", "10"), Ordering::Less);
/// assert_eq!(natural_cmp("chapter 9", "chapter 10"), Ordering::Less);
/// ```
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);

    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => match compare_chunks(x, y) {
                Ordering::Equal => {}
                other => return other,
            },
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return a.cmp(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|s| (*s).to_owned()).collect();
        names.sort_by(|a, b| natural_cmp(a, b));
        names
    }

    #[test]
    fn test_chunks_alternate() {
        let runs: Vec<_> = chunks("ch10v2").collect();
        assert_eq!(
            runs,
            vec![
                Chunk::Text("ch"),
                Chunk::Digits("10"),
                Chunk::Text("v"),
                Chunk::Digits("2"),
            ]
        );
    }

    #[test]
    fn test_chunks_empty() {
        assert_eq!(chunks("").count(), 0);
    }

    #[test]
    fn test_numbers_compare_as_integers() {
        assert_eq!(sorted(&["2", "10", "1"]), vec!["1", "2", "10"]);
    }

    #[test]
    fn test_embedded_numbers() {
        assert_eq!(
            sorted(&["chapter 10", "chapter 2", "chapter 1"]),
            vec!["chapter 1", "chapter 2", "chapter 10"]
        );
    }

    #[test]
    fn test_digit_run_before_text_run() {
        assert_eq!(natural_cmp("1abc", "abc"), Ordering::Less);
        assert_eq!(natural_cmp("abc", "1abc"), Ordering::Greater);
    }

    #[test]
    fn test_shorter_equal_prefix_first() {
        assert_eq!(natural_cmp("genesis", "genesis2"), Ordering::Less);
        assert_eq!(natural_cmp("1", "1a"), Ordering::Less);
    }

    #[test]
    fn test_text_is_case_insensitive_first() {
        assert_eq!(
            sorted(&["exodus", "Genesis", "acts"]),
            vec!["acts", "exodus", "Genesis"]
        );
    }

    #[test]
    fn test_leading_zeros_tie_break() {
        assert_eq!(natural_cmp("01", "1"), Ordering::Less);
        assert_eq!(natural_cmp("007", "7"), Ordering::Less);
        assert_eq!(natural_cmp("7", "007"), Ordering::Greater);
    }

    #[test]
    fn test_large_numbers() {
        assert_eq!(
            natural_cmp("99999999999999999999999", "100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn test_equal_names() {
        assert_eq!(natural_cmp("psalms", "psalms"), Ordering::Equal);
    }
}
