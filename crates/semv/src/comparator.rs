//! Version precedence

use std::cmp::Ordering;

use crate::Version;

/// Comparator implementing semantic versioning precedence
pub struct Comparator;

impl Comparator {
    /// Compare two versions by precedence.
    ///
    /// Major, minor and patch decide first. At an equal triple a release is
    /// greater than any prerelease, and two prereleases are compared
    /// identifier by identifier. Build metadata never participates.
    pub fn compare(a: &Version, b: &Version) -> Ordering {
        a.major
            .cmp(&b.major)
            .then(a.minor.cmp(&b.minor))
            .then(a.patch.cmp(&b.patch))
            .then_with(|| Self::compare_prerelease(a.pre(), b.pre()))
    }

    /// Compare two single prerelease identifiers.
    ///
    /// Numeric identifiers compare by value and always sort below
    /// alphanumeric ones; alphanumeric identifiers compare as ASCII text.
    pub fn compare_identifiers(a: &str, b: &str) -> Ordering {
        match (numeric_value(a), numeric_value(b)) {
            (Some(x), Some(y)) => x.len().cmp(&y.len()).then_with(|| x.cmp(y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }

    fn compare_prerelease(a: &[String], b: &[String]) -> Ordering {
        match (a.is_empty(), b.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a
                .iter()
                .zip(b)
                .map(|(x, y)| Self::compare_identifiers(x, y))
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len())),
        }
    }

    /// Check if a > b
    pub fn greater_than(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) == Ordering::Greater
    }

    /// Check if a >= b
    pub fn greater_than_or_equal_to(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) != Ordering::Less
    }

    /// Check if a < b
    pub fn less_than(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) == Ordering::Less
    }

    /// Check if a <= b
    pub fn less_than_or_equal_to(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) != Ordering::Greater
    }

    /// Check if a == b, i.e. neither is less than the other
    pub fn equal_to(a: &Version, b: &Version) -> bool {
        !Self::less_than(a, b) && !Self::less_than(b, a)
    }

    /// Check if a != b
    pub fn not_equal_to(a: &Version, b: &Version) -> bool {
        !Self::equal_to(a, b)
    }
}

/// The digits of a purely numeric identifier with leading zeros removed.
///
/// Comparing by length first and then lexically gives numeric order without
/// any width limit.
pub(crate) fn numeric_value(identifier: &str) -> Option<&str> {
    if identifier.is_empty() || !identifier.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let trimmed = identifier.trim_start_matches('0');
    Some(if trimmed.is_empty() { "0" } else { trimmed })
}
