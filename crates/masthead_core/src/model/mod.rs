//! Domain model for authors, magazines and the articles linking them.
//!
//! # Responsibility
//! - Define the three entities and the validation rules they share.
//! - Express derived queries as pure reads over a `CatalogRepository`.
//!
//! # Invariants
//! - Every entity is identified by a stable UUID; equality is identity.
//! - An entity either exists with all invariants satisfied or was never
//!   created. There is no deletion.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;
