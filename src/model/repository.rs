//! Generic ordered, keyed collection of entities.

use crate::error::{Error, Result};
use crate::model::entity::Entity;

/// Ordered keyed collection with insert-or-replace semantics.
///
/// Entries keep their insertion order; replacing an existing entry via
/// [`upsert`] keeps its position. Absence is always reported as a
/// not-found result, never an error.
///
/// [`upsert`]: Repository::upsert
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Repository<T> {
    items: Vec<T>,
}

impl<T: Entity> Repository<T> {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Stable snapshot of all entries, in order.
    #[must_use]
    pub fn get_all(&self) -> &[T] {
        &self.items
    }

    /// Look up an entry by identifier.
    pub fn get_by_id(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Mutable lookup by identifier.
    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Insert the item, or replace the existing entry with the same
    /// identifier in place. Returns a reference to the stored item.
    pub fn upsert(&mut self, item: T) -> &T {
        match self.items.iter().position(|i| i.id() == item.id()) {
            Some(pos) => {
                self.items[pos] = item;
                &self.items[pos]
            }
            None => {
                self.items.push(item);
                &self.items[self.items.len() - 1]
            }
        }
    }

    /// Strict insertion: fails with [`Error::RepositoryKeyConflict`] when an
    /// entry with the same identifier already exists.
    pub fn insert(&mut self, item: T) -> Result<&T> {
        if self.get_by_id(item.id()).is_some() {
            return Err(Error::key_conflict(item.id()));
        }
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Remove and return the entry with the given identifier, if present.
    pub fn remove_by_id(&mut self, id: T::Id) -> Option<T> {
        let pos = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(pos))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the repository holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T: Entity> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Entity> IntoIterator for &'a Repository<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
