//! Shape grammars for digit bodies
//! 
//! A body must match the character-level shape of its numeral system before
//! any numeric interpretation is attempted. The patterns are compiled once and
//! shared read-only by every caller.

use numlit_common::LiteralError;
use once_cell::sync::Lazy;
use regex::Regex;

/// The digit-group separator
pub const SEPARATOR: char = '_';

// ASCII classes only: `\d` would admit non-ASCII digits.
static UNSIGNED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+_?)*$").unwrap());
static SIGNED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?([0-9]+_?)*$").unwrap());
static FLOAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(_?[0-9]+_?)*$").unwrap());
static HEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9a-fA-F]+_?)*$").unwrap());

/// Character shape a digit body has to satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Decimal digit groups, each optionally followed by one separator
    Unsigned,
    /// [`Shape::Unsigned`] with an optional leading `+` or `-`
    Signed,
    /// Decimal digit groups that may also be preceded by one separator
    Float,
    /// Hex digit groups, each optionally followed by one separator
    Hex,
}

impl Shape {
    pub fn name(self) -> &'static str {
        match self {
            Shape::Unsigned => "unsigned",
            Shape::Signed => "signed",
            Shape::Float => "float",
            Shape::Hex => "hex",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Shape::Unsigned => &*UNSIGNED,
            Shape::Signed => &*SIGNED,
            Shape::Float => &*FLOAT,
            Shape::Hex => &*HEX,
        }
    }

    /// Does `body` match this shape? The empty body always does.
    pub fn matches(self, body: &str) -> bool {
        self.pattern().is_match(body)
    }

    pub fn check(self, body: &str) -> Result<(), LiteralError> {
        if self.matches(body) {
            Ok(())
        } else {
            Err(LiteralError::shape(self.name(), body))
        }
    }
}

/// Remove every digit-group separator
pub fn strip_separators(body: &str) -> String {
    body.replace(SEPARATOR, "")
}

/// An unsuffixed body may not end in a separator, even though the shape
/// grammars would accept one there.
pub fn reject_trailing_separator(body: &str) -> Result<(), LiteralError> {
    if body.ends_with(SEPARATOR) {
        Err(LiteralError::TrailingSeparator)
    } else {
        Ok(())
    }
}
