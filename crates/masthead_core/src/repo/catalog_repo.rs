//! Catalog repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the magazine registry and the article registry.
//! - Give entity queries ordered, read-only views over both.
//!
//! # Invariants
//! - Both registries are append-only; nothing is ever removed or reordered.
//! - Insertion order is the order queries observe.
//! - Insert paths trust their input: entity constructors validate first.

use crate::model::article::Article;
use crate::model::magazine::{Magazine, MagazineId};

/// Storage contract for the article and magazine registries.
pub trait CatalogRepository {
    /// Every registered magazine, oldest first.
    fn magazines(&self) -> &[Magazine];
    /// Every registered article, oldest first.
    fn articles(&self) -> &[Article];
    /// Appends a validated magazine and returns the stored value.
    fn insert_magazine(&mut self, magazine: Magazine) -> &Magazine;
    /// Appends a validated article and returns the stored value.
    fn insert_article(&mut self, article: Article) -> &Article;
    fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine>;

    fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines().iter().find(|magazine| magazine.id() == id)
    }
}

/// Process-memory catalog. Create one per composition root or per test.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl InMemoryCatalog {
    /// Creates a catalog with both registries empty.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    fn articles(&self) -> &[Article] {
        &self.articles
    }

    fn insert_magazine(&mut self, magazine: Magazine) -> &Magazine {
        self.magazines.push(magazine);
        &self.magazines[self.magazines.len() - 1]
    }

    fn insert_article(&mut self, article: Article) -> &Article {
        self.articles.push(article);
        &self.articles[self.articles.len() - 1]
    }

    fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.magazines
            .iter_mut()
            .find(|magazine| magazine.id() == id)
    }
}
