//! Template rendering for versions
//!
//! A template is free text in which the following tokens are substituted:
//!
//! | Token | Renders as |
//! |-------|------------|
//! | `M`   | major |
//! | `m`   | minor |
//! | `p`   | patch |
//! | `-?`  | `-` followed by the prerelease, or nothing when there is none |
//! | `-!`  | the bare prerelease |
//! | `+?`  | `+` followed by the metadata, or nothing when there is none |
//! | `+!`  | the bare metadata |
//!
//! Everything else is copied through unchanged.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::Version;

pub const MAJOR: &str = "M";
pub const MINOR: &str = "m";
pub const PATCH: &str = "p";
pub const PRE: &str = "-?";
pub const PRE_RAW: &str = "-!";
pub const META: &str = "+?";
pub const META_RAW: &str = "+!";
pub const MAJOR_MINOR: &str = "M.m";
pub const MAJOR_MINOR_PATCH: &str = "M.m.p";
pub const MMP_PRE: &str = "M.m.p-?";
pub const COMPLETE: &str = "M.m.p-?+?";

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"[-+][?!]|[Mmp]").unwrap();
}

pub(crate) fn render(version: &Version, template: &str) -> String {
    let template = if template.is_empty() {
        version.shape().template()
    } else {
        template
    };

    TOKEN_RE
        .replace_all(template, |caps: &Captures| render_token(version, &caps[0]))
        .into_owned()
}

fn render_token(version: &Version, token: &str) -> String {
    match token {
        MAJOR => version.major.to_string(),
        MINOR => version.minor.to_string(),
        PATCH => version.patch.to_string(),
        PRE => optional('-', version.pre()),
        PRE_RAW => version.pre_string(),
        META => optional('+', version.meta()),
        META_RAW => version.meta_string(),
        other => other.to_string(),
    }
}

fn optional(delimiter: char, identifiers: &[String]) -> String {
    if identifiers.is_empty() {
        String::new()
    } else {
        format!("{}{}", delimiter, identifiers.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Version {
        Version::parse("1.2.3-beta.1+some.metadata").unwrap()
    }

    #[test]
    fn test_numeric_tokens() {
        assert_eq!(full().format(MAJOR), "1");
        assert_eq!(full().format(MAJOR_MINOR), "1.2");
        assert_eq!(full().format(MAJOR_MINOR_PATCH), "1.2.3");
        assert_eq!(Version::parse("1").unwrap().format(MAJOR_MINOR_PATCH), "1.0.0");
    }

    #[test]
    fn test_optional_tokens() {
        assert_eq!(full().format(MMP_PRE), "1.2.3-beta.1");
        assert_eq!(full().format(COMPLETE), "1.2.3-beta.1+some.metadata");
        assert_eq!(Version::new(1, 2, 3).format(COMPLETE), "1.2.3");
    }

    #[test]
    fn test_raw_tokens() {
        assert_eq!(full().format("-!"), "beta.1");
        assert_eq!(full().format("+!"), "some.metadata");
        assert_eq!(Version::new(1, 2, 3).format("[-!][+!]"), "[][]");
    }

    #[test]
    fn test_literal_text_is_kept() {
        assert_eq!(full().format("vM.m (p)"), "v1.2 (3)");
        assert_eq!(Version::new(10, 0, 7).format("M_p"), "10_7");
    }

    #[test]
    fn test_empty_template_uses_shape() {
        assert_eq!(Version::parse("1.2").unwrap().format(""), "1.2");
        assert_eq!(full().format(""), "1.2.3-beta.1+some.metadata");
    }

    #[test]
    fn test_substitution_is_single_pass() {
        // Rendered digits and identifiers are never re-scanned for tokens.
        let v = Version::new(1, 2, 3).with_prerelease("pm").unwrap();
        assert_eq!(v.format("-!.M"), "pm.1");
    }
}
