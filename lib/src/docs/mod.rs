//! Extended documentation (the “book”)
//!
//! The following modules are dedicated solely to providing additional documentation not provided or
//! suitable to include within other modules. Think of this as the crate “book”.

pub mod ch1_overview;
pub mod ch2_syntax;
pub mod ch3_precedence;
