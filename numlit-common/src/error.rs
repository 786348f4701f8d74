//! Rejection reasons for numeric literals
//! 
//! The public classifier folds every one of these into
//! [`LiteralKind::Invalid`]; they exist so callers and logs can say *why*.

use crate::kind::LiteralKind;
use thiserror::Error;

/// Why a literal failed to classify
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("no digits to classify")]
    Empty,

    #[error("marker '{marker}' appears more than once")]
    RepeatedMarker { marker: char },

    #[error("radix prefix must be exactly \"0\", found {prefix:?}")]
    RadixPrefix { prefix: String },

    #[error("{body:?} is not a valid {shape} body")]
    Shape { shape: &'static str, body: String },

    #[error("literal ends with a digit separator")]
    TrailingSeparator,

    #[error("unsupported width {width:?} after '{marker}'")]
    UnsupportedWidth { marker: char, width: String },

    #[error("{digits:?} does not fit in a {kind}")]
    OutOfRange { digits: String, kind: LiteralKind },
}

impl LiteralError {
    /// Create a shape error
    pub fn shape(shape: &'static str, body: &str) -> Self {
        LiteralError::Shape {
            shape,
            body: body.to_string(),
        }
    }

    /// Create an unsupported width error
    pub fn width(marker: char, width: &str) -> Self {
        LiteralError::UnsupportedWidth {
            marker,
            width: width.to_string(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(digits: &str, kind: LiteralKind) -> Self {
        LiteralError::OutOfRange {
            digits: digits.to_string(),
            kind,
        }
    }
}
