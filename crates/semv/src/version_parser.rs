//! Version parsing
//!
//! Parsing is a single left-to-right scan. The scan is in one field at a time
//! (major, minor, patch, prerelease, metadata) and records the byte span each
//! opened field covers; separators move it to the next field. Validation of
//! the collected spans happens once the input is exhausted.

use std::ops::Range;

use crate::error::{Component, ParseError, Result};
use crate::version::{Shape, Version};

/// How strictly input is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseMode {
    /// Missing minor/patch default to zero, leading zeros are accepted
    #[default]
    Permissive,
    /// Exactly semantic versioning 2.0.0
    Strict,
    /// Parse the first version found anywhere in free text
    Anywhere,
}

/// Version parser configured with a [`ParseMode`]
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser {
    mode: ParseMode,
}

impl VersionParser {
    /// Create a permissive parser
    pub fn new() -> Self {
        VersionParser::default()
    }

    pub fn with_mode(mode: ParseMode) -> Self {
        VersionParser { mode }
    }

    pub fn strict() -> Self {
        Self::with_mode(ParseMode::Strict)
    }

    pub fn anywhere() -> Self {
        Self::with_mode(ParseMode::Anywhere)
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse `input` according to the configured mode
    pub fn parse(&self, input: &str) -> Result<Version> {
        match self.mode {
            ParseMode::Permissive => parse_permissive(input),
            ParseMode::Strict => parse_strict(input),
            ParseMode::Anywhere => parse_anywhere(input),
        }
    }

    /// Check if `input` parses under the configured mode
    pub fn is_valid(&self, input: &str) -> bool {
        self.parse(input).is_ok()
    }
}

/// Permissively parse a version.
///
/// The shortest accepted input is a single number, which is read as the
/// major version: `parse_permissive("1")` renders back as `"1"` and formats
/// as `"1.0.0"` with [`crate::format::MAJOR_MINOR_PATCH`]. Leading zeros are
/// accepted; grammar violations and empty components are still errors.
pub fn parse_permissive(input: &str) -> Result<Version> {
    let scan = scan(input)?;
    finalise(input, &scan, false)
}

/// Parse a version that must conform exactly to semantic versioning 2.0.0
pub fn parse_strict(input: &str) -> Result<Version> {
    let scan = scan(input)?;
    finalise(input, &scan, true)
}

/// Parse the first version found in `input`.
///
/// Parsing starts at the first ASCII digit and stops at the first character
/// that cannot continue the version, so `"go version go1.6 darwin/amd64"`
/// yields `1.6`.
///
/// Fails with [`ParseError::NoDigitsFound`] when `input` has no digit, and
/// with [`ParseError::ComponentOverflow`] when the version found has a
/// numeric component that does not fit in a `u64`. The number is never
/// truncated to make it fit.
pub fn parse_anywhere(input: &str) -> Result<Version> {
    scan_anywhere(input).map(|(version, _)| version)
}

/// Like [`parse_anywhere`], also returning the byte span of `input` that was
/// consumed.
pub(crate) fn scan_anywhere(input: &str) -> Result<(Version, Range<usize>)> {
    let start = input
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| ParseError::NoDigitsFound {
            input: input.to_string(),
        })?;
    let rest = &input[start..];
    let (scan, len) = scan_prefix(rest);
    log::trace!("Found version {:?} at {}..{} in {:?}", &rest[..len], start, start + len, input);

    let version = finalise(rest, &scan, false)?;
    Ok((version, start..start + len))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Major,
    Minor,
    Patch,
    Pre,
    Meta,
}

impl Field {
    const ALL: [Field; 5] = [Field::Major, Field::Minor, Field::Patch, Field::Pre, Field::Meta];

    fn index(self) -> usize {
        self as usize
    }

    fn component(self) -> Component {
        match self {
            Field::Major => Component::Major,
            Field::Minor => Component::Minor,
            Field::Patch => Component::Patch,
            Field::Pre => Component::Prerelease,
            Field::Meta => Component::Metadata,
        }
    }

    fn accepts(self, c: char) -> bool {
        match self {
            Field::Major | Field::Minor | Field::Patch => c.is_ascii_digit(),
            Field::Pre | Field::Meta => c.is_ascii_alphanumeric() || c == '-' || c == '.',
        }
    }
}

/// What a character does in a given field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Open(Field),
    Push,
    Reject,
}

fn step(field: Field, c: char) -> Step {
    match (field, c) {
        (Field::Major, '.') => Step::Open(Field::Minor),
        (Field::Minor, '.') => Step::Open(Field::Patch),
        (Field::Patch, '.') => Step::Reject,
        (Field::Major | Field::Minor | Field::Patch, '-') => Step::Open(Field::Pre),
        (Field::Meta, '+') => Step::Reject,
        (_, '+') => Step::Open(Field::Meta),
        (field, c) if field.accepts(c) => Step::Push,
        _ => Step::Reject,
    }
}

/// Scan state: the current field and the byte span of every opened field
#[derive(Debug, Clone)]
struct Scan {
    field: Field,
    spans: [Option<Range<usize>>; 5],
}

impl Scan {
    fn start() -> Self {
        Scan {
            field: Field::Major,
            spans: [Some(0..0), None, None, None, None],
        }
    }

    fn feed(self, position: usize, c: char) -> Result<Self> {
        match step(self.field, c) {
            Step::Reject => Err(ParseError::UnexpectedCharacter {
                character: c,
                position,
            }),
            next => Ok(self.apply(next, position, c)),
        }
    }

    fn apply(mut self, step: Step, position: usize, c: char) -> Self {
        let end = position + c.len_utf8();
        match step {
            Step::Open(next) => {
                self.spans[next.index()] = Some(end..end);
                self.field = next;
            }
            Step::Push => {
                if let Some(span) = self.spans[self.field.index()].as_mut() {
                    span.end = end;
                }
            }
            Step::Reject => {}
        }
        self
    }

    fn span(&self, field: Field) -> Option<Range<usize>> {
        self.spans[field.index()].clone()
    }

    fn current_is_empty(&self) -> bool {
        self.span(self.field).map_or(true, |span| span.is_empty())
    }
}

fn scan(input: &str) -> Result<Scan> {
    input
        .char_indices()
        .try_fold(Scan::start(), |scan, (position, c)| scan.feed(position, c))
}

/// Scan as far as the input keeps forming a version, returning the scan and
/// the number of bytes that belong to the version.
///
/// Leaving an empty field ends the scan too, and a field opened by a trailing
/// separator is dropped together with the separator.
fn scan_prefix(input: &str) -> (Scan, usize) {
    let mut scan = Scan::start();
    let mut len = input.len();

    for (position, c) in input.char_indices() {
        let next = step(scan.field, c);
        let leaves_empty = matches!(next, Step::Open(_)) && scan.current_is_empty();
        if next == Step::Reject || leaves_empty {
            log::trace!("Version scan stopped at {:?} (byte {})", c, position);
            len = position;
            break;
        }
        scan = scan.apply(next, position, c);
    }

    if scan.field != Field::Major && scan.current_is_empty() {
        if let Some(span) = scan.spans[scan.field.index()].take() {
            // Every separator is a single ASCII byte.
            len = span.start - 1;
        }
    }

    (scan, len)
}

fn finalise(input: &str, scan: &Scan, strict: bool) -> Result<Version> {
    let text = |field: Field| scan.span(field).map(|span| &input[span]);

    for field in Field::ALL {
        if text(field).is_some_and(str::is_empty) {
            return Err(ParseError::ZeroLengthComponent {
                component: field.component(),
            });
        }
    }

    let major = number(text(Field::Major).unwrap_or_default(), Field::Major)?;
    let minor = text(Field::Minor).map_or(Ok(0), |t| number(t, Field::Minor))?;
    let patch = text(Field::Patch).map_or(Ok(0), |t| number(t, Field::Patch))?;
    let pre = text(Field::Pre).map(identifiers).unwrap_or_default();
    let meta = text(Field::Meta).map(identifiers).unwrap_or_default();

    if strict {
        for field in [Field::Minor, Field::Patch] {
            if text(field).is_none() {
                return Err(ParseError::VersionIncomplete {
                    component: field.component(),
                });
            }
        }
        for field in [Field::Major, Field::Minor, Field::Patch] {
            if let Some(t) = text(field) {
                check_preceding_zero(t, field)?;
            }
        }
        check_identifiers(&pre, Field::Pre)?;
        check_identifiers(&meta, Field::Meta)?;
    }

    let shape = if text(Field::Patch).is_some() {
        Shape::MajorMinorPatch
    } else if text(Field::Minor).is_some() {
        Shape::MajorMinor
    } else {
        Shape::Major
    };

    Ok(Version::from_parts(major, minor, patch, pre, meta, shape))
}

fn number(text: &str, field: Field) -> Result<u64> {
    text.parse().map_err(|_| ParseError::ComponentOverflow {
        component: field.component(),
        text: text.to_string(),
    })
}

fn identifiers(text: &str) -> Vec<String> {
    text.split('.').map(String::from).collect()
}

fn check_preceding_zero(text: &str, field: Field) -> Result<()> {
    if text.len() > 1 && text.starts_with('0') {
        return Err(ParseError::PrecedingZero {
            component: field.component(),
            text: text.to_string(),
        });
    }
    Ok(())
}

// Identifiers must be non-empty; numeric prerelease identifiers also must not
// carry leading zeros.
fn check_identifiers(identifiers: &[String], field: Field) -> Result<()> {
    for identifier in identifiers {
        if identifier.is_empty() {
            return Err(ParseError::ZeroLengthComponent {
                component: field.component(),
            });
        }
        if field == Field::Pre && identifier.bytes().all(|b| b.is_ascii_digit()) {
            check_preceding_zero(identifier, field)?;
        }
    }
    Ok(())
}
