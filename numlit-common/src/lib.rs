//! Numeric literal classifier - Common Types and Errors
//! 
//! This crate contains the result kinds, bit widths and error definitions
//! shared by the classifier and the driver.

pub mod error;
pub mod kind;
pub mod width;

pub use error::LiteralError;
pub use kind::LiteralKind;
pub use width::BitWidth;
