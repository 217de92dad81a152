//! Generic identity-unique collection
//!
//! `UniqueList` enforces the split between identity equality (`is_same`) and
//! full equality (`==`): add/set protect against two records describing the
//! same real-world entity even when other fields differ, while remove demands
//! an exact structural match so a partially reconstructed value can never
//! silently delete the wrong record.

use crate::domain::error::{DomainError, DomainResult, EntityKind};

/// An entity with identity distinct from full equality.
pub trait Entity: Clone + PartialEq {
    /// Entity kind used in duplicate/not-found messages.
    const KIND: EntityKind;

    /// True if `self` and `other` refer to the same real-world entity,
    /// comparing key fields only.
    fn is_same(&self, other: &Self) -> bool;
}

/// Ordered collection rejecting identity duplicates on insert and update.
///
/// Insertion order is preserved. Read access goes through `&`-borrows only,
/// so obtained views cannot mutate the list.
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueList<E: Entity> {
    items: Vec<E>,
}

impl<E: Entity> UniqueList<E> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// True if any stored entity is-same as `entity`.
    pub fn contains(&self, entity: &E) -> bool {
        self.items.iter().any(|e| e.is_same(entity))
    }

    /// Append `entity`, rejecting identity duplicates.
    pub fn add(&mut self, entity: E) -> DomainResult<()> {
        if self.contains(&entity) {
            return Err(DomainError::DuplicateEntity { kind: E::KIND });
        }
        self.items.push(entity);
        Ok(())
    }

    /// Replace the entity is-same as `target` with `replacement`, in place.
    ///
    /// Returns whether the stored value observably changed, so
    /// `set(t, t.clone())` reports `false`.
    pub fn set(&mut self, target: &E, replacement: E) -> DomainResult<bool> {
        let index = self
            .items
            .iter()
            .position(|e| e.is_same(target))
            .ok_or(DomainError::EntityNotFound { kind: E::KIND })?;

        let clashes = self
            .items
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && e.is_same(&replacement));
        if clashes {
            return Err(DomainError::DuplicateEntity { kind: E::KIND });
        }

        if self.items[index] == replacement {
            return Ok(false);
        }
        self.items[index] = replacement;
        Ok(true)
    }

    /// Remove the entity structurally equal to `entity`.
    ///
    /// Identity match alone is not enough; the caller must hold the exact
    /// stored value.
    pub fn remove(&mut self, entity: &E) -> DomainResult<()> {
        let index = self
            .items
            .iter()
            .position(|e| e == entity)
            .ok_or(DomainError::EntityNotFound { kind: E::KIND })?;
        self.items.remove(index);
        Ok(())
    }

    /// Atomically replace the whole backing sequence.
    ///
    /// Fails if `items` contains two mutually is-same entities. The duplicate
    /// scan is the plain pairwise check; lists stay small here.
    pub fn replace_all(&mut self, items: Vec<E>) -> DomainResult<bool> {
        for (i, a) in items.iter().enumerate() {
            if items[i + 1..].iter().any(|b| a.is_same(b)) {
                return Err(DomainError::DuplicateEntity { kind: E::KIND });
            }
        }
        if self.items == items {
            return Ok(false);
        }
        self.items = items;
        Ok(true)
    }

    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<E: Entity> Default for UniqueList<E> {
    fn default() -> Self {
        Self::new()
    }
}
