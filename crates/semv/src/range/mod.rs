//! Version ranges
//!
//! A [`Range`] holds at most one lower and one upper [`Bound`]. Ranges are
//! written with a leading operator:
//!
//! | Syntax | Bounds |
//! |---|---|
//! | `1.2.3`, `=1.2.3`, `==1.2.3` | `>=1.2.3` and `<=1.2.3` |
//! | `>1.2.3` / `>=1.2.3` | lower bound only |
//! | `<1.2.3` / `<=1.2.3` | upper bound only |
//! | `~1.2.3` | `>=1.2.3 <1.3.0` |
//! | `^1.2.3` | `>=1.2.3 <2.0.0` |
//!
//! [`parse_range`] reads one clause and ignores whatever follows the version.
//! [`parse_compound_range`] (and `str::parse::<Range>`) also accepts a lower
//! and an upper clause separated by whitespace, `>=1.2.0 <1.5.0`, which is how
//! such a range renders.

mod bound;
mod operator;

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

pub use bound::Bound;
pub use operator::Operator;

use crate::error::{ParseError, Result};
use crate::version_parser::scan_anywhere;
use crate::Version;

lazy_static! {
    static ref OPERATOR_RE: Regex = Regex::new(r"^(==|>=|<=|[=<>~^])?\s*").unwrap();
}

/// A constraint over versions made of an optional lower and an optional
/// upper bound.
///
/// Equality is structural: both sides must be absent in both ranges, or hold
/// equal versions with the same inclusivity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Range {
    lower: Option<Bound>,
    upper: Option<Bound>,
}

impl Range {
    /// The unbounded range, satisfied by every version
    pub fn any() -> Self {
        Range::default()
    }

    pub fn new(lower: Option<Bound>, upper: Option<Bound>) -> Self {
        Range { lower, upper }
    }

    pub fn exactly(version: Version) -> Self {
        Range::new(Some(Bound::inclusive(version.clone())), Some(Bound::inclusive(version)))
    }

    pub fn greater_than(version: Version) -> Self {
        Range::new(Some(Bound::exclusive(version)), None)
    }

    pub fn at_least(version: Version) -> Self {
        Range::new(Some(Bound::inclusive(version)), None)
    }

    pub fn less_than(version: Version) -> Self {
        Range::new(None, Some(Bound::exclusive(version)))
    }

    pub fn at_most(version: Version) -> Self {
        Range::new(None, Some(Bound::inclusive(version)))
    }

    /// `>=min <max`
    pub fn at_least_below(min: Version, max: Version) -> Self {
        Range::new(Some(Bound::inclusive(min)), Some(Bound::exclusive(max)))
    }

    /// Versions from `version` up to the next minor release.
    ///
    /// When the minor component cannot be incremented the range has no upper
    /// bound.
    pub fn tilde(version: Version) -> Self {
        let max = version.increment_minor();
        Range::below_next(version, max)
    }

    /// Versions from `version` up to the next major release.
    ///
    /// When the major component cannot be incremented the range has no upper
    /// bound.
    pub fn caret(version: Version) -> Self {
        let max = version.increment_major();
        Range::below_next(version, max)
    }

    // Increments saturate, so `next` may not lie above `version`.
    fn below_next(version: Version, next: Version) -> Self {
        if next > version {
            Range::at_least_below(version, next)
        } else {
            Range::at_least(version)
        }
    }

    pub fn lower(&self) -> Option<&Bound> {
        self.lower.as_ref()
    }

    pub fn upper(&self) -> Option<&Bound> {
        self.upper.as_ref()
    }

    /// Check if `version` lies within both bounds
    pub fn satisfied_by(&self, version: &Version) -> bool {
        self.lower.as_ref().map_or(true, |bound| bound.admits_above(version))
            && self.upper.as_ref().map_or(true, |bound| bound.admits_below(version))
    }

    // A lower-only clause followed by an upper-only clause, or the reverse.
    fn combine(self, other: Range) -> Option<Range> {
        match (self.lower, self.upper, other.lower, other.upper) {
            (Some(lower), None, None, Some(upper)) | (None, Some(upper), Some(lower), None) => {
                Some(Range::new(Some(lower), Some(upper)))
            }
            _ => None,
        }
    }
}

/// Parse a range expression such as `^1.2.0` or `>= 2`.
///
/// After the operator the version is read with
/// [`parse_anywhere`](crate::parse_anywhere) rules, so whitespace between
/// operator and version is allowed and trailing text ends the version:
/// `">=1.0.0 <2.0.0"` parses as `>=1.0.0`.
pub fn parse_range(input: &str) -> Result<Range> {
    let (range, _) = parse_clause(input.trim(), input)?;

    log::debug!("Parsed range {:?} as {}", input, range);
    Ok(range)
}

/// Parse a range of one clause, or of a lower and an upper clause separated
/// by whitespace such as `>1.0.0 <=1.4.0`.
///
/// A second clause must bound the side the first one leaves open, otherwise
/// the input is [`ParseError::InvalidRangeSyntax`]. Text after the version
/// that does not start with an operator is ignored as in [`parse_range`].
pub fn parse_compound_range(input: &str) -> Result<Range> {
    let (range, rest) = parse_clause(input.trim(), input)?;

    let rest = rest.trim_start();
    let range = if rest.starts_with(['<', '>', '=', '~', '^']) {
        let (second, _) = parse_clause(rest, input)?;
        range
            .combine(second)
            .ok_or_else(|| ParseError::InvalidRangeSyntax {
                input: input.to_string(),
            })?
    } else {
        range
    };

    log::debug!("Parsed compound range {:?} as {}", input, range);
    Ok(range)
}

fn parse_clause<'a>(text: &'a str, input: &str) -> Result<(Range, &'a str)> {
    let invalid = || ParseError::InvalidRangeSyntax {
        input: input.to_string(),
    };

    let caps = OPERATOR_RE.captures(text).ok_or_else(invalid)?;
    let operator = match caps.get(1) {
        Some(m) => m.as_str().parse::<Operator>()?,
        None if text.starts_with(|c: char| c.is_ascii_digit()) => Operator::Equal,
        None => return Err(invalid()),
    };

    let remainder = &text[caps.get(0).map_or(0, |m| m.end())..];
    let (version, span) = scan_anywhere(remainder)?;
    Ok((operator.range(version), &remainder[span.end..]))
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(lower), Some(upper)) = (&self.lower, &self.upper) {
            let (min, max) = (lower.version(), upper.version());
            if lower.is_inclusive() && upper.is_inclusive() && min == max {
                return write!(f, "{}", min);
            }
            if lower.is_inclusive() && !upper.is_inclusive() {
                if *max == min.increment_major() {
                    return write!(f, "^{}", min);
                }
                if *max == min.increment_minor() {
                    return write!(f, "~{}", min);
                }
            }
        }

        let lower = self.lower.as_ref().map(|bound| {
            let op = if bound.is_inclusive() { ">=" } else { ">" };
            format!("{}{}", op, bound.version())
        });
        let upper = self.upper.as_ref().map(|bound| {
            let op = if bound.is_inclusive() { "<=" } else { "<" };
            format!("{}{}", op, bound.version())
        });
        let clauses: Vec<String> = lower.into_iter().chain(upper).collect();
        f.write_str(&clauses.join(" "))
    }
}

impl FromStr for Range {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_compound_range(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Range {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Range {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RangeVisitor;

        impl<'de> serde::de::Visitor<'de> for RangeVisitor {
            type Value = Range;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a version range string")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                parse_compound_range(v).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(RangeVisitor)
    }
}
