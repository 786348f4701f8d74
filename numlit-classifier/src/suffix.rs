//! Marker splitting
//! 
//! Splits a literal around a single structural marker (`.`, `x`, `f`, `u`,
//! `i`) and turns the width token that follows a type suffix into a
//! [`BitWidth`].

use numlit_common::{BitWidth, LiteralError};

/// Widths accepted after an integer suffix
pub const INTEGER_WIDTHS: [BitWidth; 4] = [BitWidth::W8, BitWidth::W16, BitWidth::W32, BitWidth::W64];

/// Widths accepted after a float or hex suffix
pub const WIDE_WIDTHS: [BitWidth; 2] = [BitWidth::W32, BitWidth::W64];

/// Split `input` around its only `marker`.
///
/// Returns `Ok(None)` when the marker is absent and an error when it occurs
/// more than once.
pub fn split_marker(input: &str, marker: char) -> Result<Option<(&str, &str)>, LiteralError> {
    split_any(input, &[marker], marker)
}

/// Like [`split_marker`], but any character of `markers` counts as the
/// marker. `name` is reported when the marker repeats.
pub fn split_any<'a>(
    input: &'a str,
    markers: &[char],
    name: char,
) -> Result<Option<(&'a str, &'a str)>, LiteralError> {
    match input.split_once(markers) {
        None => Ok(None),
        Some((_, rest)) if rest.contains(markers) => {
            Err(LiteralError::RepeatedMarker { marker: name })
        }
        Some(halves) => Ok(Some(halves)),
    }
}

/// Parse the width token after `marker`, restricted to `allowed`
pub fn parse_width(marker: char, token: &str, allowed: &[BitWidth]) -> Result<BitWidth, LiteralError> {
    BitWidth::from_suffix(token)
        .filter(|width| allowed.contains(width))
        .ok_or_else(|| LiteralError::width(marker, token))
}
