//! Classification results
//! 
//! A literal classifies to exactly one [`LiteralKind`]. The kind carries no
//! value: classification validates, it does not convert.

use crate::width::BitWidth;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of classifying one literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralKind {
    Invalid,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
}

impl LiteralKind {
    /// Every kind, in declaration order
    pub const ALL: [LiteralKind; 11] = [
        LiteralKind::Invalid,
        LiteralKind::Int8,
        LiteralKind::Int16,
        LiteralKind::Int32,
        LiteralKind::Int64,
        LiteralKind::Uint8,
        LiteralKind::Uint16,
        LiteralKind::Uint32,
        LiteralKind::Uint64,
        LiteralKind::Float32,
        LiteralKind::Float64,
    ];

    /// Signed integer kind of the given width
    pub fn signed(width: BitWidth) -> Self {
        match width {
            BitWidth::W8 => LiteralKind::Int8,
            BitWidth::W16 => LiteralKind::Int16,
            BitWidth::W32 => LiteralKind::Int32,
            BitWidth::W64 => LiteralKind::Int64,
        }
    }

    /// Unsigned integer kind of the given width
    pub fn unsigned(width: BitWidth) -> Self {
        match width {
            BitWidth::W8 => LiteralKind::Uint8,
            BitWidth::W16 => LiteralKind::Uint16,
            BitWidth::W32 => LiteralKind::Uint32,
            BitWidth::W64 => LiteralKind::Uint64,
        }
    }

    /// Float kind of the given width; there are no 8 or 16 bit floats
    pub fn float(width: BitWidth) -> Option<Self> {
        match width {
            BitWidth::W32 => Some(LiteralKind::Float32),
            BitWidth::W64 => Some(LiteralKind::Float64),
            BitWidth::W8 | BitWidth::W16 => None,
        }
    }

    pub fn is_valid(self) -> bool {
        self != LiteralKind::Invalid
    }

    /// Storage width, `None` for `Invalid`
    pub fn bit_width(self) -> Option<BitWidth> {
        match self {
            LiteralKind::Invalid => None,
            LiteralKind::Int8 | LiteralKind::Uint8 => Some(BitWidth::W8),
            LiteralKind::Int16 | LiteralKind::Uint16 => Some(BitWidth::W16),
            LiteralKind::Int32 | LiteralKind::Uint32 | LiteralKind::Float32 => Some(BitWidth::W32),
            LiteralKind::Int64 | LiteralKind::Uint64 | LiteralKind::Float64 => Some(BitWidth::W64),
        }
    }

    /// Human readable label, as printed by the interactive driver
    pub fn label(self) -> &'static str {
        match self {
            LiteralKind::Invalid => "Invalid",
            LiteralKind::Int8 => "signed 8bit integer",
            LiteralKind::Int16 => "signed 16bit integer",
            LiteralKind::Int32 => "signed 32bit integer",
            LiteralKind::Int64 => "signed 64bit integer",
            LiteralKind::Uint8 => "unsigned 8bit integer",
            LiteralKind::Uint16 => "unsigned 16bit integer",
            LiteralKind::Uint32 => "unsigned 32bit integer",
            LiteralKind::Uint64 => "unsigned 64bit integer",
            LiteralKind::Float32 => "32bit float",
            LiteralKind::Float64 => "64bit float",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
