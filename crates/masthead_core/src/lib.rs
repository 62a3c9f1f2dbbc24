//! Core domain logic for Masthead: authors, magazines and the articles that
//! link them.
//! This crate is the single source of truth for the model's invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{
    default_log_level, flush_logging, init_logging, logging_status, LogTarget, LoggingConfig,
    LoggingError,
};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::validation::ValidationError;
pub use repo::catalog_repo::{CatalogRepository, InMemoryCatalog};
pub use service::catalog_service::{
    AuthorSummary, CatalogError, CatalogResult, CatalogService, MagazineSummary,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
