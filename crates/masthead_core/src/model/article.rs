//! Article domain model.
//!
//! # Responsibility
//! - Link exactly one author to exactly one registered magazine.
//! - Own the only write path into the article registry.
//!
//! # Invariants
//! - `title` has 5 to 50 characters and never changes after construction.
//! - `magazine_id` always names a magazine held by the catalog the article
//!   was created in.
//! - Author and magazine links are fixed for the article's lifetime.

use crate::model::author::Author;
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::{check_title, ValidationError};
use crate::repo::catalog_repo::CatalogRepository;
use serde::Serialize;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Stable identifier for an article.
pub type ArticleId = Uuid;

/// A single authored piece published in one magazine.
///
/// There is no setter for any field; the title is fixed once created.
/// Equality follows `id`: two articles with the same title, author and
/// magazine are still distinct.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    id: ArticleId,
    title: String,
    author: Author,
    magazine_id: MagazineId,
}

impl Article {
    /// Validates the inputs and appends a new article to `repo`.
    ///
    /// # Errors
    /// - `UnknownMagazine` when `magazine` is not registered in `repo`.
    /// - `TitleLength` when the title is outside 5..=50 characters.
    ///
    /// On error nothing is appended.
    pub fn create<'r, R>(
        repo: &'r mut R,
        author: &Author,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<&'r Article, ValidationError>
    where
        R: CatalogRepository + ?Sized,
    {
        if repo.magazine(magazine).is_none() {
            return Err(ValidationError::UnknownMagazine(magazine));
        }
        let title = title.into();
        check_title(&title)?;

        Ok(repo.insert_article(Self {
            id: Uuid::new_v4(),
            title,
            author: author.clone(),
            magazine_id: magazine,
        }))
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    /// Resolves the linked magazine with its current name and category.
    pub fn magazine<'r, R>(&self, repo: &'r R) -> Option<&'r Magazine>
    where
        R: CatalogRepository + ?Sized,
    {
        repo.magazine(self.magazine_id)
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
