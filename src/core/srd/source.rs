//! Search Backends
//!
//! The lookup layer never searches the dataset itself; it asks an
//! [`SrdSource`] for the candidates of one category and resolves those.

use async_trait::async_trait;

use super::category::Category;
use super::entry::{Entry, Named};
use super::error::Result;

/// Search capability over the rules dataset.
///
/// Implementations decide how names are matched; callers rely only on the
/// returned order being stable for the same query.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SrdSource: Send + Sync {
    /// Return the entries of `category` matching `query`, best first.
    async fn search(&self, category: Category, query: &str) -> Result<Vec<Entry>>;
}

/// Dataset held in memory, matched by case-insensitive substring.
///
/// Results keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    entries: Vec<Entry>,
}

impl InMemorySource {
    pub fn new(entries: impl IntoIterator<Item = Entry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Synchronous form of [`SrdSource::search`].
    pub fn find(&self, category: Category, query: &str) -> Vec<Entry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|e| e.category() == category)
            .filter(|e| e.name().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

impl FromIterator<Entry> for InMemorySource {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[async_trait]
impl SrdSource for InMemorySource {
    async fn search(&self, category: Category, query: &str) -> Result<Vec<Entry>> {
        Ok(self.find(category, query))
    }
}
