//! Float literals: `<mantissa> "." <fraction> ["f" <width>]`
//! 
//! Only the fraction is numerically validated; the mantissa is checked for
//! shape alone.

use crate::range::Domain;
use crate::shape::{reject_trailing_separator, strip_separators, Shape};
use crate::suffix::{parse_width, split_marker, WIDE_WIDTHS};
use log::trace;
use numlit_common::{BitWidth, LiteralError, LiteralKind};

pub(crate) fn classify_float(literal: &str) -> Result<LiteralKind, LiteralError> {
    let Some((mantissa, fraction)) = split_marker(literal, '.')? else {
        return Err(LiteralError::shape(Shape::Float.name(), literal));
    };
    Shape::Unsigned.check(mantissa)?;

    match split_marker(fraction, 'f')? {
        Some((body, token)) => {
            trace!("float body {body:?} with width {token:?}");
            Shape::Float.check(body)?;
            let width = parse_width('f', token, &WIDE_WIDTHS)?;
            let kind = LiteralKind::float(width).ok_or_else(|| LiteralError::width('f', token))?;
            Domain::Float(width).validate(&strip_separators(body), kind)
        }
        None => {
            reject_trailing_separator(fraction)?;
            Shape::Float.check(fraction)?;
            Domain::Float(BitWidth::W32).validate(&strip_separators(fraction), LiteralKind::Float32)
        }
    }
}
