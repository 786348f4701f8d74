//! Numeric literal classifier
//! 
//! Classifies one whitespace-free literal into a [`LiteralKind`]. The
//! pipeline routes the literal to the float, hex or decimal grammar, splits
//! off its type suffix, checks the digit body's shape and finally checks the
//! cleaned numeral against the range of its declared width.
//!
//! Every stage is a pure function and the shape matchers are shared
//! read-only, so classification may run from any number of threads at once.

pub mod range;
pub mod router;
pub mod shape;
pub mod suffix;

mod decimal;
mod float;
mod hex;

pub use numlit_common::{BitWidth, LiteralError, LiteralKind};
pub use router::LiteralFormat;

use log::{debug, trace};

/// Classify `literal`, keeping the reason when it is rejected
pub fn try_classify(literal: &str) -> Result<LiteralKind, LiteralError> {
    if literal.is_empty() {
        return Err(LiteralError::Empty);
    }

    let format = LiteralFormat::detect(literal);
    trace!("{literal:?} routed to the {format:?} grammar");
    match format {
        LiteralFormat::Float => float::classify_float(literal),
        LiteralFormat::Hex => hex::classify_hex(literal),
        LiteralFormat::Decimal => decimal::classify_decimal(literal),
    }
}

/// Classify `literal`. Never fails: anything that is not a well-formed,
/// in-range literal is [`LiteralKind::Invalid`].
pub fn classify(literal: &str) -> LiteralKind {
    match try_classify(literal) {
        Ok(kind) => kind,
        Err(err) => {
            debug!("rejected {literal:?}: {err}");
            LiteralKind::Invalid
        }
    }
}

/// One classified field of an input line
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<'a> {
    pub literal: &'a str,
    pub outcome: Result<LiteralKind, LiteralError>,
}

impl<'a> Classification<'a> {
    pub fn of(literal: &'a str) -> Self {
        let outcome = try_classify(literal);
        if let Err(err) = &outcome {
            debug!("rejected {literal:?}: {err}");
        }
        Self { literal, outcome }
    }

    pub fn kind(&self) -> LiteralKind {
        match self.outcome {
            Ok(kind) => kind,
            Err(_) => LiteralKind::Invalid,
        }
    }

    /// Why the literal was rejected, if it was
    pub fn reason(&self) -> Option<&LiteralError> {
        self.outcome.as_ref().err()
    }
}

/// Split `line` on whitespace and classify every field, in order
pub fn classify_fields(line: &str) -> impl Iterator<Item = Classification<'_>> {
    line.split_whitespace().map(Classification::of)
}
