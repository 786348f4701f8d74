//! Declared storage widths of numeric literals

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bit width named by a literal suffix (`i8`, `u64`, `f32`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BitWidth {
    W8,
    W16,
    W32,
    W64,
}

impl BitWidth {
    /// Parse the width token that follows a suffix marker.
    ///
    /// Only the exact spellings `8`, `16`, `32` and `64` are accepted; no
    /// separators, signs or leading zeros.
    pub fn from_suffix(token: &str) -> Option<Self> {
        match token {
            "8" => Some(BitWidth::W8),
            "16" => Some(BitWidth::W16),
            "32" => Some(BitWidth::W32),
            "64" => Some(BitWidth::W64),
            _ => None,
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            BitWidth::W8 => 8,
            BitWidth::W16 => 16,
            BitWidth::W32 => 32,
            BitWidth::W64 => 64,
        }
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}
