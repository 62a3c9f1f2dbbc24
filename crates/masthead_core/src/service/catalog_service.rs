//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for creating magazines and articles and for
//!   editing magazines by id.
//! - Bundle derived queries into serializable read models.
//! - Emit one metadata-only log event per mutating call.
//!
//! # Invariants
//! - Service APIs never bypass entity validation.
//! - Service layer stays storage-agnostic through `CatalogRepository`.
//! - Names and titles are never written to logs; ids and lengths only.

use crate::model::article::ArticleId;
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::ValidationError;
use crate::repo::catalog_repo::CatalogRepository;
use log::{info, warn};
use serde::Serialize;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Service error for catalog use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Input violated an entity invariant.
    Validation(ValidationError),
    /// No magazine with this id is registered.
    MagazineNotFound(MagazineId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::MagazineNotFound(_) => None,
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Read model of one author's derived queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorSummary {
    pub author_id: AuthorId,
    pub name: String,
    pub article_count: usize,
    /// Magazine names in first-appearance order.
    pub magazines: Vec<String>,
    /// `None` when the author has not written anything yet.
    pub topic_areas: Option<BTreeSet<String>>,
}

/// Read model of one magazine's derived queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MagazineSummary {
    pub magazine_id: MagazineId,
    pub name: String,
    pub category: String,
    pub article_titles: Option<Vec<String>>,
    /// Contributor names in first-appearance order.
    pub contributors: Vec<String>,
    pub contributing_authors: Option<Vec<String>>,
}

/// Catalog service facade over repository implementations.
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a service owning the provided repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read access for entity-level queries.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn into_repo(self) -> R {
        self.repo
    }

    /// Registers a new magazine and returns its id.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> CatalogResult<MagazineId> {
        match Magazine::create(&mut self.repo, name, category) {
            Ok(magazine) => {
                info!(
                    "event=magazine_create module=catalog status=ok magazine_id={}",
                    magazine.id()
                );
                Ok(magazine.id())
            }
            Err(err) => {
                warn!(
                    "event=magazine_create module=catalog status=error error_code=validation_failed error={}",
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Renames a registered magazine.
    ///
    /// The previous name is kept when validation fails.
    pub fn rename_magazine(
        &mut self,
        id: MagazineId,
        name: impl Into<String>,
    ) -> CatalogResult<()> {
        let result = self.magazine_mut(id)?.set_name(name);
        log_magazine_update("magazine_rename", id, &result);
        Ok(result?)
    }

    /// Changes the category of a registered magazine.
    ///
    /// The previous category is kept when validation fails.
    pub fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> CatalogResult<()> {
        let result = self.magazine_mut(id)?.set_category(category);
        log_magazine_update("magazine_recategorize", id, &result);
        Ok(result?)
    }

    /// Publishes an article by `author` in the magazine `magazine_id`.
    pub fn publish_article(
        &mut self,
        author: &Author,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        match author.add_article(&mut self.repo, magazine_id, title) {
            Ok(article) => {
                info!(
                    "event=article_publish module=catalog status=ok article_id={} author_id={} magazine_id={}",
                    article.id(),
                    author.id(),
                    magazine_id
                );
                Ok(article.id())
            }
            Err(err) => {
                warn!(
                    "event=article_publish module=catalog status=error author_id={} magazine_id={} error_code=validation_failed error={}",
                    author.id(),
                    magazine_id,
                    err
                );
                Err(err.into())
            }
        }
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.repo.magazine(id)
    }

    /// Magazine with the most articles; see `Magazine::top_publisher`.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        Magazine::top_publisher(&self.repo)
    }

    /// Collects every author-level derived query into one read model.
    pub fn author_summary(&self, author: &Author) -> AuthorSummary {
        AuthorSummary {
            author_id: author.id(),
            name: author.name().to_string(),
            article_count: author.articles(&self.repo).len(),
            magazines: author
                .magazines(&self.repo)
                .into_iter()
                .map(|magazine| magazine.name().to_string())
                .collect(),
            topic_areas: author.topic_areas(&self.repo),
        }
    }

    /// Collects every magazine-level derived query into one read model.
    pub fn magazine_summary(&self, id: MagazineId) -> CatalogResult<MagazineSummary> {
        let magazine = self
            .repo
            .magazine(id)
            .ok_or(CatalogError::MagazineNotFound(id))?;
        Ok(MagazineSummary {
            magazine_id: id,
            name: magazine.name().to_string(),
            category: magazine.category().to_string(),
            article_titles: magazine
                .article_titles(&self.repo)
                .map(|titles| titles.into_iter().map(str::to_string).collect()),
            contributors: author_names(magazine.contributors(&self.repo)),
            contributing_authors: magazine
                .contributing_authors(&self.repo)
                .map(author_names),
        })
    }

    fn magazine_mut(&mut self, id: MagazineId) -> CatalogResult<&mut Magazine> {
        match self.repo.magazine_mut(id) {
            Some(magazine) => Ok(magazine),
            None => {
                warn!(
                    "event=magazine_lookup module=catalog status=error magazine_id={} error_code=not_found",
                    id
                );
                Err(CatalogError::MagazineNotFound(id))
            }
        }
    }
}

fn author_names(authors: Vec<&Author>) -> Vec<String> {
    authors
        .into_iter()
        .map(|author| author.name().to_string())
        .collect()
}

fn log_magazine_update(event: &str, id: MagazineId, result: &Result<(), ValidationError>) {
    match result {
        Ok(()) => info!("event={event} module=catalog status=ok magazine_id={id}"),
        Err(err) => warn!(
            "event={event} module=catalog status=error magazine_id={id} error_code=validation_failed error={err}"
        ),
    }
}
