//! Bound type for range boundaries

use std::cmp::Ordering;

use crate::{Comparator, Version};

/// Represents a bound (lower or upper) of a version range
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bound {
    version: Version,
    is_inclusive: bool,
}

impl Bound {
    /// Create a new bound
    pub fn new(version: Version, is_inclusive: bool) -> Self {
        Bound {
            version,
            is_inclusive,
        }
    }

    pub fn inclusive(version: Version) -> Self {
        Self::new(version, true)
    }

    pub fn exclusive(version: Version) -> Self {
        Self::new(version, false)
    }

    /// Get the version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Check if the bound is inclusive
    pub fn is_inclusive(&self) -> bool {
        self.is_inclusive
    }

    /// Check if `version` is on or above this bound, used as a lower bound
    pub fn admits_above(&self, version: &Version) -> bool {
        match Comparator::compare(version, &self.version) {
            Ordering::Greater => true,
            Ordering::Equal => self.is_inclusive,
            Ordering::Less => false,
        }
    }

    /// Check if `version` is on or below this bound, used as an upper bound
    pub fn admits_below(&self, version: &Version) -> bool {
        match Comparator::compare(version, &self.version) {
            Ordering::Less => true,
            Ordering::Equal => self.is_inclusive,
            Ordering::Greater => false,
        }
    }
}
