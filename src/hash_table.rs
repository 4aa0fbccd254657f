//! A hash table with a fixed number of slots, resolving collisions by coalesced chaining.
//!
//! The slots of a [`CollisionTable`] are split in two areas. Keys are hashed into the *address*
//! area; a key whose home slot is taken goes to the highest empty slot, which is found in the
//! *cellar* (the overflow area placed after the address area) until the cellar is full, and
//! is then linked at the end of the chain running through its home slot. Every slot can hold an
//! entry, so the capacity of a table is exactly its slot count and never changes: inserting a new
//! key into a full table fails with [`TableError::CapacityExhausted`].
//!
//! Removing an entry leaves its slot in its chain, so the other keys of the chain remain
//! reachable and no entry ever moves while a [`Cursor`] walks the table.
//!
//! # Examples
//!
//! ```
//! use arbres::error::TableError;
//! use arbres::hash_table::CollisionTable;
//!
//! // 5 address slots and 5 cellar slots.
//! let mut table = CollisionTable::new(5, 5).unwrap();
//! for i in 0..10 {
//!     table.put(format!("k{}", i), i).unwrap();
//! }
//! assert_eq!(table.len(), 10);
//! assert_eq!(table.get(&"k3".to_string()), Some(&3));
//!
//! // Overwriting is always possible...
//! assert_eq!(table.put("k3".to_string(), 33), Ok(Some(3)));
//! // ...but a new key doesn't fit.
//! assert_eq!(
//!     table.put("k10".to_string(), 10),
//!     Err(TableError::CapacityExhausted { capacity: 10 })
//! );
//! ```

use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::mem;

use crate::error::TableError;

/// The slot layout of a [`CollisionTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableConfig {
    /// Number of slots keys are hashed into. Must not be zero.
    pub address: usize,
    /// Number of overflow slots following the address area.
    pub cellar: usize,
}

impl TableConfig {
    /// A layout with `address` hashed slots followed by `cellar` overflow slots.
    pub fn new(address: usize, cellar: usize) -> Self {
        Self { address, cellar }
    }

    /// Total number of slots, which is the number of entries a table with this layout can hold.
    pub fn capacity(&self) -> usize {
        self.address + self.cellar
    }

    fn validate(self) -> Result<Self, TableError> {
        if self.address == 0 {
            return Err(TableError::InvalidConfig {
                address: self.address,
                cellar: self.cellar,
            });
        }
        Ok(self)
    }
}

impl Default for TableConfig {
    /// 100 slots, 86 of them addressable. That ratio keeps chains short for most load factors.
    fn default() -> Self {
        Self::new(86, 14)
    }
}

#[derive(Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

#[derive(Clone)]
enum Slot<K, V> {
    /// Not part of any chain.
    Empty,
    /// Part of a chain. The entry is `None` once it has been removed.
    Linked {
        entry: Option<Entry<K, V>>,
        next: Option<usize>,
    },
}

impl<K, V> Slot<K, V> {
    fn entry(&self) -> Option<&Entry<K, V>> {
        match self {
            Slot::Linked { entry, .. } => entry.as_ref(),
            Slot::Empty => None,
        }
    }

    fn entry_mut(&mut self) -> Option<&mut Entry<K, V>> {
        match self {
            Slot::Linked { entry, .. } => entry.as_mut(),
            Slot::Empty => None,
        }
    }
}

/// A fixed capacity hash map. See the [module documentation](self) for the layout.
///
/// Stored values may themselves represent "nothing" (e.g. `V = Option<T>`):
/// [`contains`](CollisionTable::contains) tells whether a key is present regardless of its value.
#[derive(Clone)]
pub struct CollisionTable<K, V, S = RandomState> {
    slots: Vec<Slot<K, V>>,
    config: TableConfig,
    /// Every slot at or above this index is linked.
    free: usize,
    len: usize,
    hasher: S,
}

impl<K, V> CollisionTable<K, V, RandomState> {
    /// Creates an empty table with `address` hashed slots and `cellar` overflow slots.
    ///
    /// Fails with [`TableError::InvalidConfig`] when `address` is zero.
    pub fn new(address: usize, cellar: usize) -> Result<Self, TableError> {
        Self::with_config(TableConfig::new(address, cellar))
    }

    /// Creates an empty table with the given layout.
    pub fn with_config(config: TableConfig) -> Result<Self, TableError> {
        Self::with_config_and_hasher(config, RandomState::new())
    }
}

impl<K, V, S> CollisionTable<K, V, S> {
    /// Creates an empty table with the given layout, hashing keys with `hasher`.
    pub fn with_config_and_hasher(config: TableConfig, hasher: S) -> Result<Self, TableError> {
        let config = config.validate()?;
        let capacity = config.capacity();
        Ok(Self {
            slots: (0..capacity).map(|_| Slot::Empty).collect(),
            config,
            free: capacity,
            len: 0,
            hasher,
        })
    }

    /// The layout of this table.
    pub fn config(&self) -> TableConfig {
        self.config
    }

    /// The number of entries this table can hold.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The number of entries in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table holds no entry.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = Slot::Empty);
        self.free = self.slots.len();
        self.len = 0;
    }

    /// Iterates over the entries in slot order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.len,
        }
    }

    /// A cursor over the entries in slot order, able to remove the entry it is positioned on.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbres::error::TableError;
    /// use arbres::hash_table::CollisionTable;
    ///
    /// let mut table = CollisionTable::new(3, 1).unwrap();
    /// table.put("a", 1).unwrap();
    /// table.put("b", 2).unwrap();
    ///
    /// let mut cursor = table.cursor();
    /// assert_eq!(cursor.remove(), Err(TableError::InvalidCursorState));
    /// while cursor.has_next() {
    ///     let (_, value) = cursor.next_entry().unwrap();
    ///     if *value == 2 {
    ///         cursor.remove().unwrap();
    ///     }
    /// }
    /// assert_eq!(cursor.next_entry(), Err(TableError::Exhausted));
    ///
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn cursor(&mut self) -> Cursor<'_, K, V, S> {
        Cursor {
            table: self,
            state: CursorState::NotStarted,
        }
    }

    /// Keeps only the entries for which `f` returns `true`.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        for index in 0..self.slots.len() {
            let keep = match self.slots[index].entry_mut() {
                Some(entry) => f(&entry.key, &mut entry.value),
                None => true,
            };
            if !keep {
                self.vacate(index);
            }
        }
    }

    /// Takes the entry out of the slot at `index`, leaving the slot in its chain.
    fn vacate(&mut self, index: usize) -> Option<Entry<K, V>> {
        let entry = match &mut self.slots[index] {
            Slot::Linked { entry, .. } => entry.take()?,
            Slot::Empty => return None,
        };
        self.len -= 1;
        if self.len == 0 {
            // Nothing left to reach: drop every chain.
            self.clear();
        }
        Some(entry)
    }

    /// The first slot at or after `start` holding an entry.
    fn next_occupied(&self, start: usize) -> Option<usize> {
        (start..self.slots.len()).find(|&index| self.slots[index].entry().is_some())
    }

    /// Claims the highest empty slot.
    fn take_free(&mut self) -> Option<usize> {
        while self.free > 0 {
            self.free -= 1;
            if let Slot::Empty = self.slots[self.free] {
                return Some(self.free);
            }
        }
        None
    }
}

impl<K, V, S> CollisionTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Associates `value` with `key` and returns the value previously associated with it.
    ///
    /// # Errors
    ///
    /// [`TableError::CapacityExhausted`] if `key` is not in the table and every slot is already
    /// used. The table is unchanged in that case.
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>, TableError> {
        if let Some(entry) = self.find(&key).and_then(|index| self.slots[index].entry_mut()) {
            return Ok(Some(mem::replace(&mut entry.value, value)));
        }
        if self.len == self.capacity() {
            return Err(TableError::CapacityExhausted {
                capacity: self.capacity(),
            });
        }

        self.place(Entry { key, value });
        self.len += 1;
        Ok(None)
    }

    /// The value associated with `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key)
            .and_then(|index| self.slots[index].entry())
            .map(|entry| &entry.value)
    }

    /// The value associated with `key`, open for editing.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.find(key)?;
        self.slots[index].entry_mut().map(|entry| &mut entry.value)
    }

    /// Whether `key` is in the table, whatever its value.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key` from the table and returns its value. Removing a missing key does nothing.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.find(key)?;
        self.vacate(index).map(|entry| entry.value)
    }

    fn home(&self, key: &K) -> usize {
        // The remainder is below `address`, which is a `usize`.
        (self.hasher.hash_one(key) % self.config.address as u64) as usize
    }

    /// The slot holding `key`, found by following the chain through its home slot.
    fn find(&self, key: &K) -> Option<usize> {
        let mut index = Some(self.home(key));
        while let Some(current) = index {
            match &self.slots[current] {
                Slot::Empty => return None,
                Slot::Linked { entry, next } => {
                    if entry.as_ref().map_or(false, |entry| entry.key == *key) {
                        return Some(current);
                    }
                    index = *next;
                }
            }
        }
        None
    }

    /// Stores a new entry in the chain through its home slot. The table must have room for it.
    fn place(&mut self, entry: Entry<K, V>) {
        let mut tail = self.home(&entry.key);
        loop {
            match &mut self.slots[tail] {
                slot @ Slot::Empty => {
                    *slot = Slot::Linked {
                        entry: Some(entry),
                        next: None,
                    };
                    return;
                }
                // A removed entry's slot is on the chain already: reuse it.
                Slot::Linked {
                    entry: vacant @ None,
                    ..
                } => {
                    *vacant = Some(entry);
                    return;
                }
                Slot::Linked {
                    next: Some(next), ..
                } => tail = *next,
                Slot::Linked { next: None, .. } => break,
            }
        }

        match self.take_free() {
            Some(free) => {
                self.slots[free] = Slot::Linked {
                    entry: Some(entry),
                    next: None,
                };
                if let Slot::Linked { next, .. } = &mut self.slots[tail] {
                    *next = Some(free);
                }
            }
            None => {
                // Every slot is linked but some have lost their entry: relink everything.
                self.rebuild();
                self.place(entry);
            }
        }
    }

    /// Places every entry again in an emptied table, dropping the slots of removed entries.
    fn rebuild(&mut self) {
        let entries: Vec<_> = self
            .slots
            .iter_mut()
            .filter_map(|slot| match mem::replace(slot, Slot::Empty) {
                Slot::Linked { entry, .. } => entry,
                Slot::Empty => None,
            })
            .collect();
        self.free = self.slots.len();
        for entry in entries {
            self.place(entry);
        }
    }
}

impl<K, V, S> fmt::Debug for CollisionTable<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, S> IntoIterator for &'a CollisionTable<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`CollisionTable`] in slot order.
///
/// Created by [`CollisionTable::iter`].
pub struct Iter<'a, K, V> {
    slots: std::slice::Iter<'a, Slot<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.slots.by_ref().find_map(Slot::entry)?;
        self.remaining -= 1;
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CursorState {
    /// `next_entry` was never called.
    NotStarted,
    /// On the entry held in this slot.
    Positioned(usize),
    /// The entry this slot held was removed through the cursor.
    Removed(usize),
    /// `next_entry` ran past the last entry.
    Exhausted,
}

/// A cursor over the entries of a [`CollisionTable`] that can remove the entry it is on.
///
/// Created by [`CollisionTable::cursor`]. Entries are visited in slot order; removing through
/// the cursor never moves the other entries, so each remaining entry is visited exactly once.
pub struct Cursor<'a, K, V, S> {
    table: &'a mut CollisionTable<K, V, S>,
    state: CursorState,
}

impl<K, V, S> Cursor<'_, K, V, S> {
    fn start(&self) -> Option<usize> {
        match self.state {
            CursorState::NotStarted => Some(0),
            CursorState::Positioned(index) | CursorState::Removed(index) => Some(index + 1),
            CursorState::Exhausted => None,
        }
    }

    /// Whether [`next_entry`](Cursor::next_entry) would yield an entry.
    pub fn has_next(&self) -> bool {
        self.start()
            .and_then(|start| self.table.next_occupied(start))
            .is_some()
    }

    /// Moves to the next entry and returns it.
    ///
    /// # Errors
    ///
    /// [`TableError::Exhausted`] once every entry has been visited.
    pub fn next_entry(&mut self) -> Result<(&K, &V), TableError> {
        let Some(index) = self.start().and_then(|start| self.table.next_occupied(start)) else {
            self.state = CursorState::Exhausted;
            return Err(TableError::Exhausted);
        };
        self.state = CursorState::Positioned(index);

        let entry = self.table.slots[index]
            .entry()
            .ok_or(TableError::InvalidCursorState)?;
        Ok((&entry.key, &entry.value))
    }

    /// Removes the entry returned by the last call to [`next_entry`](Cursor::next_entry).
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidCursorState`] if `next_entry` was never called, or if this entry
    /// was already removed.
    pub fn remove(&mut self) -> Result<(K, V), TableError> {
        let CursorState::Positioned(index) = self.state else {
            return Err(TableError::InvalidCursorState);
        };
        let entry = self
            .table
            .vacate(index)
            .ok_or(TableError::InvalidCursorState)?;
        self.state = CursorState::Removed(index);
        Ok((entry.key, entry.value))
    }
}
