//! Core business model: entities, repository contracts, and the visit worker.

pub mod entities;
pub mod repositories;
pub mod visit_event;
pub mod visit_worker;
