//! Registry storage behind a repository contract.
//!
//! # Responsibility
//! - Own the append-only article and magazine registries.
//! - Let callers inject a fresh catalog instead of sharing process globals.

pub mod catalog_repo;
