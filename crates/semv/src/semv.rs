//! Semv facade providing high-level operations over version strings

use crate::range::{parse_compound_range, Range};
use crate::{Comparator, Version, VersionList};

/// String-in, string-out entry points for callers that do not hold parsed
/// values. Inputs that fail to parse never match and are dropped from
/// results.
pub struct Semv;

impl Semv {
    /// Check if a version satisfies a range
    pub fn satisfies(version: &str, range: &str) -> bool {
        let version = match Version::parse(version) {
            Ok(v) => v,
            Err(_) => return false,
        };

        let range = match parse_compound_range(range) {
            Ok(r) => r,
            Err(_) => return false,
        };

        range.satisfied_by(&version)
    }

    /// Return all versions that satisfy the given range, in input order
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let range = match parse_compound_range(range) {
            Ok(r) => r,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter(|v| matches_range(&range, v))
            .map(|v| v.to_string())
            .collect()
    }

    /// Return the highest version that satisfies the given range
    pub fn max_satisfying(versions: &[&str], range: &str) -> Option<String> {
        let range = parse_compound_range(range).ok()?;
        let list: VersionList = versions.iter().filter_map(|v| Version::parse(v).ok()).collect();

        list.greatest_satisfying(&range).map(|v| v.to_string())
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match Version::parse(v) {
                Ok(version) => Some((version, i)),
                Err(err) => {
                    log::debug!("Skipping {:?} while sorting: {}", v, err);
                    None
                }
            })
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = Comparator::compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        // Hand back the caller's spelling, not the canonical rendering
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}

fn matches_range(range: &Range, version: &str) -> bool {
    Version::parse(version).map_or(false, |v| range.satisfied_by(&v))
}
