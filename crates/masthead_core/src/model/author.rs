//! Author domain model.
//!
//! # Responsibility
//! - Hold an author's immutable identity and name.
//! - Derive article/magazine/topic views from a catalog by filtering.
//!
//! # Invariants
//! - `name` is non-empty for the author's whole lifetime.
//! - Authors are not registered anywhere; articles carry them.
//! - Equality follows `id`, so two authors sharing a name stay distinct.

use crate::model::article::Article;
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::{check_author_name, check_id, ValidationError};
use crate::repo::catalog_repo::CatalogRepository;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Stable identifier for an author.
pub type AuthorId = Uuid;

/// A person who writes articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "AuthorRecord")]
pub struct Author {
    id: AuthorId,
    name: String,
}

/// Unvalidated wire shape used when decoding an `Author`.
#[derive(Deserialize)]
struct AuthorRecord {
    id: AuthorId,
    name: String,
}

impl TryFrom<AuthorRecord> for Author {
    type Error = ValidationError;

    fn try_from(record: AuthorRecord) -> Result<Self, Self::Error> {
        check_id(record.id)?;
        check_author_name(&record.name)?;
        Ok(Self {
            id: record.id,
            name: record.name,
        })
    }
}

impl Author {
    /// Creates an author with a freshly generated id.
    ///
    /// # Errors
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        check_author_name(&name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Articles written by this author, in catalog insertion order.
    pub fn articles<'r, R>(&self, repo: &'r R) -> Vec<&'r Article>
    where
        R: CatalogRepository + ?Sized,
    {
        repo.articles()
            .iter()
            .filter(|article| article.author().id == self.id)
            .collect()
    }

    /// Distinct magazines this author has written for.
    ///
    /// Ordered by each magazine's first appearance among the author's
    /// articles.
    pub fn magazines<'r, R>(&self, repo: &'r R) -> Vec<&'r Magazine>
    where
        R: CatalogRepository + ?Sized,
    {
        let mut seen = HashSet::<MagazineId>::new();
        self.articles(repo)
            .into_iter()
            .map(Article::magazine_id)
            .filter(|magazine_id| seen.insert(*magazine_id))
            .filter_map(|magazine_id| repo.magazine(magazine_id))
            .collect()
    }

    /// Creates a new article by this author and appends it to the catalog.
    ///
    /// Article validation errors are returned unchanged.
    pub fn add_article<'r, R>(
        &self,
        repo: &'r mut R,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<&'r Article, ValidationError>
    where
        R: CatalogRepository + ?Sized,
    {
        Article::create(repo, self, magazine, title)
    }

    /// Distinct categories of the magazines this author has written for.
    ///
    /// Returns `None` (not an empty set) when the author has no magazines.
    pub fn topic_areas<R>(&self, repo: &R) -> Option<BTreeSet<String>>
    where
        R: CatalogRepository + ?Sized,
    {
        let categories = self
            .magazines(repo)
            .into_iter()
            .map(|magazine| magazine.category().to_string())
            .collect::<BTreeSet<_>>();
        if categories.is_empty() {
            None
        } else {
            Some(categories)
        }
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
