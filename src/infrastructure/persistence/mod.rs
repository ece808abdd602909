//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx for
//! type-safe SQL queries with compile-time verification.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - URL record storage and retrieval
//! - [`PgVisitRepository`] - Transactional batch visit persistence

pub mod pg_url_repository;
pub mod pg_visit_repository;

pub use pg_url_repository::PgUrlRepository;
pub use pg_visit_repository::PgVisitRepository;
