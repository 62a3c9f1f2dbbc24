//! Magazine domain model.
//!
//! # Responsibility
//! - Hold a publication's mutable name/category behind validated setters.
//! - Derive article, contributor and ranking views from a catalog.
//!
//! # Invariants
//! - `2 <= chars(name) <= 16` and `category` is non-empty at all times.
//! - A rejected setter call leaves the stored value untouched.
//! - A magazine enters the catalog only after both fields validate.

use crate::model::article::Article;
use crate::model::author::{Author, AuthorId};
use crate::model::validation::{check_category, check_id, check_magazine_name, ValidationError};
use crate::repo::catalog_repo::CatalogRepository;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Stable identifier for a magazine.
pub type MagazineId = Uuid;

/// Minimum per-magazine article count (exclusive) for a contributing author.
const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// A publication that articles are written for.
///
/// Equality follows `id`, so a copy taken before a rename still equals the
/// registered magazine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MagazineRecord")]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

#[derive(Deserialize)]
struct MagazineRecord {
    id: MagazineId,
    name: String,
    category: String,
}

impl TryFrom<MagazineRecord> for Magazine {
    type Error = ValidationError;

    fn try_from(record: MagazineRecord) -> Result<Self, Self::Error> {
        check_id(record.id)?;
        Self::with_id(record.id, record.name, record.category)
    }
}

impl Magazine {
    /// Validates the fields and registers a new magazine in `repo`.
    ///
    /// # Errors
    /// - `MagazineNameLength` / `EmptyCategory` on invalid input. The catalog
    ///   is left unchanged in that case.
    pub fn create<R>(
        repo: &mut R,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<&Magazine, ValidationError>
    where
        R: CatalogRepository + ?Sized,
    {
        let magazine = Self::with_id(Uuid::new_v4(), name.into(), category.into())?;
        Ok(repo.insert_magazine(magazine))
    }

    fn with_id(id: MagazineId, name: String, category: String) -> Result<Self, ValidationError> {
        check_magazine_name(&name)?;
        check_category(&category)?;
        Ok(Self { id, name, category })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the name when it has 2 to 16 characters.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        check_magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replaces the category when it is non-empty.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        check_category(&category)?;
        self.category = category;
        Ok(())
    }

    /// Articles published in this magazine, in catalog insertion order.
    pub fn articles<'r, R>(&self, repo: &'r R) -> Vec<&'r Article>
    where
        R: CatalogRepository + ?Sized,
    {
        repo.articles()
            .iter()
            .filter(|article| article.magazine_id() == self.id)
            .collect()
    }

    /// Distinct authors with at least one article here.
    pub fn contributors<'r, R>(&self, repo: &'r R) -> Vec<&'r Author>
    where
        R: CatalogRepository + ?Sized,
    {
        let mut seen = HashSet::<AuthorId>::new();
        self.articles(repo)
            .into_iter()
            .map(Article::author)
            .filter(|author| seen.insert(author.id()))
            .collect()
    }

    /// Titles of this magazine's articles; `None` when it has none.
    pub fn article_titles<'r, R>(&self, repo: &'r R) -> Option<Vec<&'r str>>
    where
        R: CatalogRepository + ?Sized,
    {
        let titles = self
            .articles(repo)
            .into_iter()
            .map(Article::title)
            .collect::<Vec<_>>();
        if titles.is_empty() {
            None
        } else {
            Some(titles)
        }
    }

    /// Authors with more than two articles in this magazine.
    ///
    /// Counts only this magazine's articles. Authors keep the order of their
    /// first article here. Returns `None` when nobody qualifies.
    pub fn contributing_authors<'r, R>(&self, repo: &'r R) -> Option<Vec<&'r Author>>
    where
        R: CatalogRepository + ?Sized,
    {
        let mut counts: Vec<(&Author, usize)> = Vec::new();
        let mut slots = HashMap::<AuthorId, usize>::new();
        for article in self.articles(repo) {
            let author = article.author();
            match slots.get(&author.id()).copied() {
                Some(slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(author.id(), counts.len());
                    counts.push((author, 1));
                }
            }
        }

        let authors = counts
            .into_iter()
            .filter(|(_, count)| *count > CONTRIBUTING_AUTHOR_THRESHOLD)
            .map(|(author, _)| author)
            .collect::<Vec<_>>();
        if authors.is_empty() {
            None
        } else {
            Some(authors)
        }
    }

    /// Magazine with the most articles across the whole catalog.
    ///
    /// Ties resolve to the earliest registered magazine. Returns `None` when
    /// the catalog holds no articles, even if magazines exist.
    pub fn top_publisher<R>(repo: &R) -> Option<&Magazine>
    where
        R: CatalogRepository + ?Sized,
    {
        if repo.articles().is_empty() {
            return None;
        }

        let mut counts = HashMap::<MagazineId, usize>::new();
        for article in repo.articles() {
            *counts.entry(article.magazine_id()).or_default() += 1;
        }

        let mut best: Option<(&Magazine, usize)> = None;
        for magazine in repo.magazines() {
            let count = counts.get(&magazine.id).copied().unwrap_or(0);
            // Strict comparison keeps the first maximal magazine.
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((magazine, count));
            }
        }
        best.map(|(magazine, _)| magazine)
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Magazine {}

impl Hash for Magazine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
