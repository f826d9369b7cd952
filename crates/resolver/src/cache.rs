//! Entity snapshots and the read seam the resolver scans through.
//!
//! A client library owns its caches; the resolver only needs two things from
//! them: keyed lookup by [`Snowflake`] and a full iteration. That contract is
//! [`SnowflakeView`]. This module ships two implementations:
//!
//! - [`EntityCache`]: an insertion-ordered, id-indexed store for one scope
//!   (one guild's roles, one shard's users, ...).
//! - [`CacheUnion`]: a borrowed union over several caches, used for
//!   shard-wide and cluster-wide scopes.
//!
//! Plain slices implement the seam as well, with linear lookup.

use std::collections::{HashMap, HashSet};

use crate::entity::Identified;
use crate::snowflake::Snowflake;

/// Read-only access to a snapshot of entities of one kind.
///
/// `'a` is the lifetime of the underlying entities, not of the view: a
/// temporary view (such as a [`CacheUnion`] built for one call) still hands
/// out references that outlive it.
pub trait SnowflakeView<'a, E: 'a> {
    /// Direct keyed lookup.
    fn get_by_id(&self, id: Snowflake) -> Option<&'a E>;

    /// Every entity in the snapshot, in the snapshot's own order.
    fn iter(&self) -> Box<dyn Iterator<Item = &'a E> + 'a>;
}

/// Insertion-ordered store of entities keyed by id.
#[derive(Debug, Clone)]
pub struct EntityCache<E> {
    entries: Vec<E>,
    index: HashMap<Snowflake, usize>,
}

impl<E> Default for EntityCache<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<E: Identified> EntityCache<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by id. A replaced entity keeps its position.
    pub fn insert(&mut self, entity: E) -> Option<E> {
        let id = entity.id();
        match self.index.get(&id) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos], entity)),
            None => {
                self.index.insert(id, self.entries.len());
                self.entries.push(entity);
                None
            }
        }
    }

    pub fn remove(&mut self, id: Snowflake) -> Option<E> {
        let pos = self.index.remove(&id)?;
        let removed = self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed)
    }
}

impl<E> EntityCache<E> {
    pub fn get(&self, id: Snowflake) -> Option<&E> {
        self.index.get(&id).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, id: Snowflake) -> bool {
        self.index.contains_key(&id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: Identified> FromIterator<E> for EntityCache<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut cache = Self::new();
        cache.extend(iter);
        cache
    }
}

impl<E: Identified> Extend<E> for EntityCache<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for entity in iter {
            self.insert(entity);
        }
    }
}

impl<'c, E> IntoIterator for &'c EntityCache<E> {
    type Item = &'c E;
    type IntoIter = std::slice::Iter<'c, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a, E: 'a> SnowflakeView<'a, E> for &'a EntityCache<E> {
    fn get_by_id(&self, id: Snowflake) -> Option<&'a E> {
        let cache: &'a EntityCache<E> = *self;
        cache.get(id)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &'a E> + 'a> {
        let cache: &'a EntityCache<E> = *self;
        Box::new(cache.entries.iter())
    }
}

impl<'a, E: Identified + 'a> SnowflakeView<'a, E> for &'a [E] {
    fn get_by_id(&self, id: Snowflake) -> Option<&'a E> {
        let items: &'a [E] = *self;
        items.iter().find(|entity| entity.id() == id)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &'a E> + 'a> {
        let items: &'a [E] = *self;
        Box::new(items.iter())
    }
}

/// Union of several caches, consulted in order.
///
/// Lookup returns the first cache's hit; iteration chains the caches and
/// yields each id once. When two parts cache the same entity the copy in the
/// earlier part wins, matching what lookup returns.
#[derive(Debug)]
pub struct CacheUnion<'a, E> {
    parts: Vec<&'a EntityCache<E>>,
}

impl<'a, E> Clone for CacheUnion<'a, E> {
    fn clone(&self) -> Self {
        Self {
            parts: self.parts.clone(),
        }
    }
}

impl<'a, E> Default for CacheUnion<'a, E> {
    fn default() -> Self {
        Self { parts: Vec::new() }
    }
}

impl<'a, E> CacheUnion<'a, E> {
    pub fn new(parts: Vec<&'a EntityCache<E>>) -> Self {
        Self { parts }
    }

    pub fn single(cache: &'a EntityCache<E>) -> Self {
        Self { parts: vec![cache] }
    }

    pub fn push(&mut self, cache: &'a EntityCache<E>) {
        self.parts.push(cache);
    }

    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|cache| cache.is_empty())
    }
}

impl<'a, E: Identified + 'a> CacheUnion<'a, E> {
    /// Distinct entities across parts.
    pub fn len(&self) -> usize {
        SnowflakeView::iter(self).count()
    }
}

impl<'a, E> FromIterator<&'a EntityCache<E>> for CacheUnion<'a, E> {
    fn from_iter<I: IntoIterator<Item = &'a EntityCache<E>>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

impl<'a, E: Identified + 'a> SnowflakeView<'a, E> for CacheUnion<'a, E> {
    fn get_by_id(&self, id: Snowflake) -> Option<&'a E> {
        self.parts.iter().find_map(|cache| cache.get(id))
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &'a E> + 'a> {
        let parts = self.parts.clone();
        let mut seen: HashSet<Snowflake> = HashSet::new();
        Box::new(
            parts
                .into_iter()
                .flat_map(|cache| cache.entries.iter())
                .filter(move |entity| seen.insert(entity.id())),
        )
    }
}
