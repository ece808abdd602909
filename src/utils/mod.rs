//! Utility functions shared across the application.
//!
//! - [`base62`] - Short code derivation from record identifiers

pub mod base62;
