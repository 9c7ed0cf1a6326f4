//! Ordered queries over a collection of versions

use std::slice;
use std::vec;

use crate::range::Range;
use crate::{Comparator, Version};

/// A plain sequence of versions with precedence-aware queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionList(Vec<Version>);

impl VersionList {
    pub fn new() -> Self {
        VersionList(Vec::new())
    }

    pub fn push(&mut self, version: Version) {
        self.0.push(version);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Version> {
        self.0.iter()
    }

    /// Lowest to highest. Versions of equal precedence keep their relative
    /// order.
    pub fn sorted(mut self) -> Self {
        self.0.sort_by(Comparator::compare);
        self
    }

    /// Highest to lowest. Versions of equal precedence keep their relative
    /// order.
    pub fn sorted_desc(mut self) -> Self {
        self.0.sort_by(|a, b| Comparator::compare(b, a));
        self
    }

    /// The versions that satisfy `range`, in list order
    pub fn satisfying<'a>(&'a self, range: &'a Range) -> impl Iterator<Item = &'a Version> + 'a {
        self.0.iter().filter(move |version| range.satisfied_by(version))
    }

    /// The highest version satisfying `range`.
    ///
    /// When several satisfying versions share the highest precedence (they
    /// differ only in metadata) the one listed first wins.
    pub fn greatest_satisfying(&self, range: &Range) -> Option<&Version> {
        let greatest = self
            .0
            .iter()
            .filter(|version| range.satisfied_by(version))
            .fold(None, |best: Option<&Version>, version| match best {
                Some(best) if Comparator::greater_than_or_equal_to(best, version) => Some(best),
                _ => Some(version),
            });

        match greatest {
            Some(version) => log::debug!("Greatest version satisfying {} is {}", range, version),
            None => log::debug!("No version satisfies {}", range),
        }
        greatest
    }
}

impl From<Vec<Version>> for VersionList {
    fn from(versions: Vec<Version>) -> Self {
        VersionList(versions)
    }
}

impl From<VersionList> for Vec<Version> {
    fn from(list: VersionList) -> Self {
        list.0
    }
}

impl FromIterator<Version> for VersionList {
    fn from_iter<I: IntoIterator<Item = Version>>(iter: I) -> Self {
        VersionList(iter.into_iter().collect())
    }
}

impl IntoIterator for VersionList {
    type Item = Version;
    type IntoIter = vec::IntoIter<Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a VersionList {
    type Item = &'a Version;
    type IntoIter = slice::Iter<'a, Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
