//! Format routing
//! 
//! Picks the grammar that governs a literal from its structural markers. A
//! decimal point beats a radix marker, which beats the decimal default.

/// Grammar a literal is parsed with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralFormat {
    Float,
    Hex,
    Decimal,
}

impl LiteralFormat {
    pub fn detect(literal: &str) -> Self {
        if literal.contains('.') {
            LiteralFormat::Float
        } else if literal.contains(['x', 'X']) {
            LiteralFormat::Hex
        } else {
            LiteralFormat::Decimal
        }
    }
}
