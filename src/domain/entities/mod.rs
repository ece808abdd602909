//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`ShortUrl`] - A shortened URL record with its visit counter
//! - [`Visit`] - A persisted visit to a shortened URL
//!
//! Creation inputs use separate structs (`NewShortUrl`) so store-assigned
//! fields (id, timestamps, counter) never appear half-initialized.

pub mod url;
pub mod visit;

pub use url::{NewShortUrl, ShortUrl};
pub use visit::{NewVisit, Visit};
