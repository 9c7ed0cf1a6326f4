//! Semantic version parsing, precedence ordering and version ranges
//!
//! This crate parses `MAJOR.MINOR.PATCH-PRERELEASE+METADATA` versions in
//! three modes (permissive, strict, and anywhere-in-text), renders them
//! through format templates, orders them by semantic versioning precedence,
//! and evaluates version ranges.
//!
//! ```
//! use semv::{parse_range, Version};
//!
//! let version: Version = "1.4.0-rc.1".parse().unwrap();
//! assert!(parse_range("^1.2").unwrap().satisfied_by(&version));
//! assert_eq!(version.increment_minor().to_string(), "1.5.0");
//! ```

mod comparator;
pub mod error;
pub mod format;
pub mod range;
mod semv;
mod version;
mod version_list;
mod version_parser;

pub use comparator::Comparator;
pub use error::{Component, ParseError, Result};
pub use range::{parse_compound_range, parse_range, Bound, Operator, Range};
pub use semv::Semv;
pub use version::{Shape, Version};
pub use version_list::VersionList;
pub use version_parser::{parse_anywhere, parse_permissive, parse_strict, ParseMode, VersionParser};
