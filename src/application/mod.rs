//! # Application Layer
//!
//! The provider port and the use case orchestrating one chat turn.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
