//! Decimal integer literals: `[sign] <digits> [("i" | "u") <width>]`
//! 
//! The `i` suffix is looked for before `u`; without either the literal is a
//! signed 32 bit integer.

use crate::range::Domain;
use crate::shape::{reject_trailing_separator, strip_separators, Shape};
use crate::suffix::{parse_width, split_marker, INTEGER_WIDTHS};
use log::trace;
use numlit_common::{BitWidth, LiteralError, LiteralKind};

pub(crate) fn classify_decimal(literal: &str) -> Result<LiteralKind, LiteralError> {
    if let Some((digits, token)) = split_marker(literal, 'i')? {
        trace!("signed digits {digits:?} with width {token:?}");
        Shape::Signed.check(digits)?;
        let width = parse_width('i', token, &INTEGER_WIDTHS)?;
        return Domain::Signed(width).validate(&strip_separators(digits), LiteralKind::signed(width));
    }

    if let Some((digits, token)) = split_marker(literal, 'u')? {
        trace!("unsigned digits {digits:?} with width {token:?}");
        Shape::Unsigned.check(digits)?;
        let width = parse_width('u', token, &INTEGER_WIDTHS)?;
        return Domain::Unsigned(width).validate(&strip_separators(digits), LiteralKind::unsigned(width));
    }

    reject_trailing_separator(literal)?;
    Shape::Signed.check(literal)?;
    Domain::Signed(BitWidth::W32).validate(&strip_separators(literal), LiteralKind::Int32)
}
