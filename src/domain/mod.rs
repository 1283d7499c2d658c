//! # Domain Layer
//!
//! Conversation state, generation profiles, provider wire types, and the
//! pure request/response adaptation services. Independent of transport and
//! UI concerns.

pub mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
