//! Infrastructure layer: persistence, caching, and queue backends.

pub mod cache;
pub mod persistence;
pub mod queue;
