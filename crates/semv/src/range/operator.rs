//! Operator types for version ranges

use std::fmt;
use std::str::FromStr;

use super::Range;
use crate::{ParseError, Version};

/// Leading operators accepted in range expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=, ==, or no operator)
    Equal,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Same major and minor (~)
    Tilde,
    /// Same major (^)
    Caret,
}

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::Tilde => "~",
            Operator::Caret => "^",
        }
    }

    /// Build the range this operator denotes for `version`
    pub fn range(self, version: Version) -> Range {
        match self {
            Operator::Equal => Range::exactly(version),
            Operator::LessThan => Range::less_than(version),
            Operator::LessThanOrEqual => Range::at_most(version),
            Operator::GreaterThan => Range::greater_than(version),
            Operator::GreaterThanOrEqual => Range::at_least(version),
            Operator::Tilde => Range::tilde(version),
            Operator::Caret => Range::caret(version),
        }
    }
}

impl FromStr for Operator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" | "==" => Ok(Operator::Equal),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "~" => Ok(Operator::Tilde),
            "^" => Ok(Operator::Caret),
            _ => Err(ParseError::InvalidRangeSyntax {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
