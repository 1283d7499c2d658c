//! # Connector Layer
//!
//! Adapters implementing the application ports:
//! - Gemini `generateContent` over HTTP
//! - a scripted mock for tests

pub mod adapter;

pub use adapter::*;
