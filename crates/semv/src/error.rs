use std::fmt;

use thiserror::Error;

/// The part of a version string an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
    Prerelease,
    Metadata,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
            Component::Prerelease => "prerelease",
            Component::Metadata => "metadata",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for version and range parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no version found in \"{input}\"")]
    NoDigitsFound { input: String },

    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    #[error("zero-length {component} component")]
    ZeroLengthComponent { component: Component },

    #[error("unexpected preceding zero in {component} component: \"{text}\"")]
    PrecedingZero { component: Component, text: String },

    #[error("version incomplete: missing {component} component")]
    VersionIncomplete { component: Component },

    #[error("{component} component \"{text}\" is too large")]
    ComponentOverflow { component: Component, text: String },

    #[error("unable to parse version range \"{input}\"")]
    InvalidRangeSyntax { input: String },
}

impl ParseError {
    /// Errors that permissive parsing tolerates by applying defaults.
    pub fn is_strict_only(&self) -> bool {
        matches!(
            self,
            ParseError::PrecedingZero { .. } | ParseError::VersionIncomplete { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ParseError::UnexpectedCharacter { character: 'x', position: 2 };
        assert_eq!(err.to_string(), "unexpected character 'x' at position 2");

        let err = ParseError::PrecedingZero {
            component: Component::Major,
            text: "01".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected preceding zero in major component: \"01\"");

        let err = ParseError::VersionIncomplete { component: Component::Patch };
        assert_eq!(err.to_string(), "version incomplete: missing patch component");

        let err = ParseError::ZeroLengthComponent { component: Component::Prerelease };
        assert_eq!(err.to_string(), "zero-length prerelease component");
    }

    #[test]
    fn test_strict_only() {
        assert!(ParseError::VersionIncomplete { component: Component::Minor }.is_strict_only());
        assert!(!ParseError::ZeroLengthComponent { component: Component::Minor }.is_strict_only());
        assert!(!ParseError::InvalidRangeSyntax { input: "x".to_string() }.is_strict_only());
    }
}
