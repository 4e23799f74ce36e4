//! Service layer for the store registry.
//! - `store::repository` abstracts where stores live.
//! - `store::memory` is the process-lifetime implementation.
//! - `store::service` applies input validation and not-found policy.

pub mod errors;
pub mod store;
