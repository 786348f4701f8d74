//! Range validation
//! 
//! A cleaned numeral (separators already stripped) is accepted only if it
//! parses within the numeric domain of its declared width. Out-of-range
//! numerals are rejected, never clamped or wrapped.

use numlit_common::{BitWidth, LiteralError, LiteralKind};
use std::str::FromStr;

/// Numeric domain a cleaned numeral is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Two's-complement decimal integer
    Signed(BitWidth),
    /// Unsigned decimal integer
    Unsigned(BitWidth),
    /// Unsigned base-16 magnitude
    Hex(BitWidth),
    /// IEEE float of the given precision
    Float(BitWidth),
}

impl Domain {
    /// Does `digits` denote a value inside this domain?
    pub fn admits(self, digits: &str) -> bool {
        match self {
            Domain::Signed(width) => match width {
                BitWidth::W8 => fits::<i8>(digits),
                BitWidth::W16 => fits::<i16>(digits),
                BitWidth::W32 => fits::<i32>(digits),
                BitWidth::W64 => fits::<i64>(digits),
            },
            // `from_str` tolerates a leading '+' for unsigned types; a sign
            // never belongs to an unsigned numeral.
            Domain::Unsigned(_) | Domain::Hex(_) if digits.starts_with('+') => false,
            Domain::Unsigned(width) => match width {
                BitWidth::W8 => fits::<u8>(digits),
                BitWidth::W16 => fits::<u16>(digits),
                BitWidth::W32 => fits::<u32>(digits),
                BitWidth::W64 => fits::<u64>(digits),
            },
            Domain::Hex(width) => match width {
                BitWidth::W8 => u8::from_str_radix(digits, 16).is_ok(),
                BitWidth::W16 => u16::from_str_radix(digits, 16).is_ok(),
                BitWidth::W32 => u32::from_str_radix(digits, 16).is_ok(),
                BitWidth::W64 => u64::from_str_radix(digits, 16).is_ok(),
            },
            // Overflow parses to infinity, which is out of range.
            Domain::Float(BitWidth::W32) => digits.parse::<f32>().is_ok_and(f32::is_finite),
            Domain::Float(BitWidth::W64) => digits.parse::<f64>().is_ok_and(f64::is_finite),
            Domain::Float(BitWidth::W8 | BitWidth::W16) => false,
        }
    }

    /// Accept `digits` as `kind`, or say why not
    pub fn validate(self, digits: &str, kind: LiteralKind) -> Result<LiteralKind, LiteralError> {
        // A lone sign has no digits either.
        if digits.trim_start_matches(['+', '-']).is_empty() {
            return Err(LiteralError::Empty);
        }
        if self.admits(digits) {
            Ok(kind)
        } else {
            Err(LiteralError::out_of_range(digits, kind))
        }
    }
}

fn fits<T: FromStr>(digits: &str) -> bool {
    digits.parse::<T>().is_ok()
}
