//! Priority-chain helpers for string fields.
//!
//! Upstream payloads treat an empty string the same as a missing field, so a
//! candidate only wins when it is present *and* non-empty.

use crate::NOT_AVAILABLE;

/// Return the first candidate that is present and non-empty.
pub fn first_present<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates.into_iter().flatten().find(|value| !value.is_empty())
}

/// Like [`first_present`], falling back to [`NOT_AVAILABLE`].
pub fn first_present_or_na<'a, I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    first_present(candidates).unwrap_or(NOT_AVAILABLE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_highest_priority_present_value() {
        assert_eq!(first_present([None, Some("b"), Some("c")]), Some("b"));
    }

    #[test]
    fn skips_empty_strings() {
        assert_eq!(first_present([Some(""), None, Some("c")]), Some("c"));
    }

    #[test]
    fn none_when_nothing_present() {
        assert_eq!(first_present([None, Some("")]), None);
    }

    #[test]
    fn sentinel_when_nothing_present() {
        assert_eq!(first_present_or_na([None, None]), "N/A");
    }
}
