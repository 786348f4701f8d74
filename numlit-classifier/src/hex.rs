//! Hex literals: `"0" ("x" | "X") <digits> ["u" <width>]`

use crate::range::Domain;
use crate::shape::{reject_trailing_separator, strip_separators, Shape};
use crate::suffix::{parse_width, split_any, split_marker, WIDE_WIDTHS};
use log::trace;
use numlit_common::{BitWidth, LiteralError, LiteralKind};

const RADIX_MARKERS: [char; 2] = ['x', 'X'];

pub(crate) fn classify_hex(literal: &str) -> Result<LiteralKind, LiteralError> {
    let Some((prefix, body)) = split_any(literal, &RADIX_MARKERS, 'x')? else {
        return Err(LiteralError::shape(Shape::Hex.name(), literal));
    };
    if prefix != "0" {
        return Err(LiteralError::RadixPrefix {
            prefix: prefix.to_string(),
        });
    }

    match split_marker(body, 'u')? {
        Some((digits, token)) => {
            trace!("hex digits {digits:?} with width {token:?}");
            Shape::Hex.check(digits)?;
            let width = parse_width('u', token, &WIDE_WIDTHS)?;
            Domain::Hex(width).validate(&strip_separators(digits), LiteralKind::unsigned(width))
        }
        // Unsuffixed hex is range checked as an unsigned magnitude but
        // reported as a signed 32 bit integer.
        None => {
            reject_trailing_separator(body)?;
            Shape::Hex.check(body)?;
            Domain::Hex(BitWidth::W32).validate(&strip_separators(body), LiteralKind::Int32)
        }
    }
}
