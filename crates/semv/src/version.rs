//! The semantic version value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::de::{self, Deserialize, Deserializer, Visitor};
#[cfg(feature = "serde")]
use serde::ser::{Serialize, Serializer};

use crate::comparator::{numeric_value, Comparator};
use crate::error::{Component, ParseError, Result};
use crate::format;

/// How much of the original text was explicit, used to re-render a version
/// at the level of detail it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Shape {
    /// Only the major component was written, e.g. `1`
    Major,
    /// Major and minor were written, e.g. `1.2`
    MajorMinor,
    /// All three numeric components were written, e.g. `1.2.3`
    #[default]
    MajorMinorPatch,
    /// A caller supplied template, see [`crate::format`]
    Custom(String),
}

impl Shape {
    /// The template this shape renders with.
    ///
    /// Prerelease and metadata use the optional placeholders, so they are
    /// written back exactly when present.
    pub fn template(&self) -> &str {
        match self {
            Shape::Major => "M-?+?",
            Shape::MajorMinor => "M.m-?+?",
            Shape::MajorMinorPatch => format::COMPLETE,
            Shape::Custom(template) => template,
        }
    }
}

/// A semantic version.
///
/// Equality, ordering and hashing only consider major, minor, patch and the
/// prerelease identifiers. Build metadata and the recorded [`Shape`] are
/// carried for display.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pre: Vec<String>,
    meta: Vec<String>,
    shape: Shape,
}

impl Version {
    /// Create a release version from its three numeric components
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: Vec::new(),
            meta: Vec::new(),
            shape: Shape::MajorMinorPatch,
        }
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre: Vec<String>,
        meta: Vec<String>,
        shape: Shape,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre,
            meta,
            shape,
        }
    }

    /// Parse permissively, see [`crate::parse_permissive`]
    pub fn parse(input: &str) -> Result<Self> {
        crate::version_parser::parse_permissive(input)
    }

    /// Replace the prerelease with the dot-separated identifiers in `pre`.
    ///
    /// An empty string clears the prerelease.
    pub fn with_prerelease(mut self, pre: &str) -> Result<Self> {
        self.pre = split_identifiers(pre, Component::Prerelease)?;
        Ok(self)
    }

    /// Replace the build metadata with the dot-separated identifiers in `meta`.
    pub fn with_metadata(mut self, meta: &str) -> Result<Self> {
        self.meta = split_identifiers(meta, Component::Metadata)?;
        Ok(self)
    }

    /// Render with `template` by default instead of the parsed shape
    pub fn with_format(mut self, template: &str) -> Self {
        self.shape = if template.is_empty() {
            Shape::MajorMinorPatch
        } else {
            Shape::Custom(template.to_string())
        };
        self
    }

    pub fn pre(&self) -> &[String] {
        &self.pre
    }

    pub fn meta(&self) -> &[String] {
        &self.meta
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Check if this is a prerelease
    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// The prerelease identifiers joined with dots, without the leading `-`
    pub fn pre_string(&self) -> String {
        self.pre.join(".")
    }

    /// The metadata identifiers joined with dots, without the leading `+`
    pub fn meta_string(&self) -> String {
        self.meta.join(".")
    }

    /// Render the version using a template, see [`crate::format`].
    ///
    /// An empty template renders with the version's own shape.
    pub fn format(&self, template: &str) -> String {
        format::render(self, template)
    }

    pub fn increment_major(&self) -> Self {
        self.released(self.major.saturating_add(1), 0, 0)
    }

    pub fn increment_minor(&self) -> Self {
        self.released(self.major, self.minor.saturating_add(1), 0)
    }

    pub fn increment_patch(&self) -> Self {
        self.released(self.major, self.minor, self.patch.saturating_add(1))
    }

    // Increments produce a release: prerelease and metadata are dropped.
    fn released(&self, major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: Vec::new(),
            meta: Vec::new(),
            shape: self.shape.clone(),
        }
    }
}

fn split_identifiers(text: &str, component: Component) -> Result<Vec<String>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    if let Some((position, character)) = text
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '.'))
    {
        return Err(ParseError::UnexpectedCharacter { character, position });
    }
    if text.split('.').any(str::is_empty) {
        return Err(ParseError::ZeroLengthComponent { component });
    }
    Ok(text.split('.').map(String::from).collect())
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        Comparator::compare(self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::compare(self, other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        // Numeric identifiers compare by value, so "01" and "1" must hash alike.
        self.pre.len().hash(state);
        for identifier in &self.pre {
            numeric_value(identifier).unwrap_or(identifier).hash(state);
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::render(self, self.shape.template()))
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VersionVisitor;

        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a version string")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Version::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_renders_complete() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");
        assert!(!v.is_prerelease());
        assert_eq!(v.shape(), &Shape::MajorMinorPatch);
    }

    #[test]
    fn test_with_identifiers() {
        let v = Version::new(1, 0, 0)
            .with_prerelease("alpha.1")
            .unwrap()
            .with_metadata("build.5")
            .unwrap();
        assert_eq!(v.pre(), ["alpha", "1"]);
        assert_eq!(v.meta(), ["build", "5"]);
        assert_eq!(v.to_string(), "1.0.0-alpha.1+build.5");

        let cleared = v.with_prerelease("").unwrap();
        assert_eq!(cleared.to_string(), "1.0.0+build.5");
    }

    #[test]
    fn test_with_identifiers_rejects_invalid() {
        assert_eq!(
            Version::new(1, 0, 0).with_prerelease("be ta").unwrap_err(),
            ParseError::UnexpectedCharacter { character: ' ', position: 2 }
        );
        assert_eq!(
            Version::new(1, 0, 0).with_metadata("a..b").unwrap_err(),
            ParseError::ZeroLengthComponent { component: Component::Metadata }
        );
    }

    #[test]
    fn test_increments() {
        let v1 = Version::parse("1.0.0").unwrap();
        let v1_0_1 = v1.increment_patch();
        assert_eq!(v1_0_1.to_string(), "1.0.1");
        let v1_1_0 = v1_0_1.increment_minor();
        assert_eq!(v1_1_0.to_string(), "1.1.0");
        let v1_1_1 = v1_1_0.increment_patch();
        assert_eq!(v1_1_1.to_string(), "1.1.1");
        let v2_0_0 = v1_1_1.increment_major();
        assert_eq!(v2_0_0.to_string(), "2.0.0");
    }

    #[test]
    fn test_increment_drops_prerelease_and_keeps_shape() {
        let v = Version::parse("1.2-rc.1+abc").unwrap();
        assert_eq!(v.increment_minor().to_string(), "1.3");
        assert_eq!(v.increment_major().to_string(), "2.0");
    }

    #[test]
    fn test_increment_saturates() {
        let v = Version::new(u64::MAX, 0, 0);
        assert_eq!(v.increment_major().major, u64::MAX);
    }

    #[test]
    fn test_equality_ignores_metadata_and_shape() {
        let a = Version::parse("1.0.0-alpha.1.4-beta.2+abc").unwrap();
        let b = Version::parse("1.0.0-alpha.1.4-beta.2+123.456.789.abc").unwrap();
        assert_eq!(a, b);
        assert_eq!(Version::parse("1").unwrap(), Version::parse("1.0.0").unwrap());
        assert_ne!(Version::parse("0.0.0-beta").unwrap(), Version::parse("0.0.0").unwrap());
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(Version::parse("1.0.0-rc.1+a").unwrap());
        set.insert(Version::parse("1.0.0-rc.01+b").unwrap());
        set.insert(Version::parse("1.0").unwrap());
        set.insert(Version::parse("1.0.0").unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_custom_format_is_default_display() {
        let v = Version::new(3, 1, 4).with_format("vM.m");
        assert_eq!(v.to_string(), "v3.1");
        assert_eq!(v.with_format("").to_string(), "3.1.4");
    }

    #[test]
    fn test_from_str() {
        let v: Version = "2.4.0-beta".parse().unwrap();
        assert_eq!(v, Version::new(2, 4, 0).with_prerelease("beta").unwrap());
        assert!("x".parse::<Version>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let v = Version::parse("1.2-beta+7").unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"1.2-beta+7\"");
        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), "1.2-beta+7");
        assert!(serde_json::from_str::<Version>("\"1.x\"").is_err());
    }
}
