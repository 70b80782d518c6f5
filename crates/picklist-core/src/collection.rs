//! Ordered item storage with a tracked selection subset.

use serde::{Deserialize, Serialize};

/// Identifier for an item in a [`ListItemCollection`].
///
/// Ids are minted by the collection and stay stable while other items are
/// inserted or removed. They are never reused within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u64);

#[derive(Debug, Clone)]
struct Entry<I> {
    id: ItemId,
    item: I,
}

/// An ordered collection of items plus the subset of them that is selected.
///
/// Every id in the selection refers to an item currently in the collection;
/// removal operations purge removed ids from the selection. The selection
/// keeps the order items were selected in, so its last element is the
/// anchor for range selection.
#[derive(Debug, Clone)]
pub struct ListItemCollection<I> {
    entries: Vec<Entry<I>>,
    selection: Vec<ItemId>,
    next_id: u64,
}

impl<I> ListItemCollection<I> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            selection: Vec::new(),
            next_id: 0,
        }
    }

    fn mint_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append an item and return its id.
    pub fn add(&mut self, item: I) -> ItemId {
        let id = self.mint_id();
        self.entries.push(Entry { id, item });
        id
    }

    /// Insert an item at `index` and return its id.
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, item: I) -> ItemId {
        let id = self.mint_id();
        self.entries.insert(index, Entry { id, item });
        id
    }

    /// Remove the item with the given id and return it.
    /// The id is also removed from the selection.
    pub fn remove(&mut self, id: ItemId) -> Option<I> {
        let pos = self.entries.iter().position(|entry| entry.id == id)?;
        self.selection.retain(|&selected| selected != id);
        Some(self.entries.remove(pos).item)
    }

    /// Remove the item at `index` and return it.
    /// The item's id is also removed from the selection.
    /// Panics if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> I {
        let entry = self.entries.remove(index);
        self.selection.retain(|&selected| selected != entry.id);
        entry.item
    }

    /// Remove all items and clear the selection.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.selection.clear();
    }

    /// Number of items in the collection.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the collection has no items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the item at `index`.
    pub fn get(&self, index: usize) -> Option<&I> {
        self.entries.get(index).map(|entry| &entry.item)
    }

    /// Get a mutable reference to the item at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut I> {
        self.entries.get_mut(index).map(|entry| &mut entry.item)
    }

    /// Get the id of the item at `index`.
    /// Panics if `index` is out of range.
    pub fn id_at(&self, index: usize) -> ItemId {
        self.entries[index].id
    }

    /// Find the index of the item with the given id.
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Check if an item with the given id is in the collection.
    pub fn contains(&self, id: ItemId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Iterate over items in collection order.
    pub fn iter(&self) -> Iter<'_, I> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterate mutably over items in collection order.
    pub fn iter_mut(&mut self) -> IterMut<'_, I> {
        IterMut {
            inner: self.entries.iter_mut(),
        }
    }

    /// Iterate over item ids in collection order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    /// Add the item with the given id to the selection.
    /// Selecting an already-selected item, or an id not in the collection,
    /// is a no-op.
    pub fn select(&mut self, id: ItemId) {
        if self.contains(id) && !self.selection.contains(&id) {
            self.selection.push(id);
        }
    }

    /// Add the item at `index` to the selection.
    /// Panics if `index` is out of range.
    pub fn select_index(&mut self, index: usize) {
        let id = self.id_at(index);
        if !self.selection.contains(&id) {
            self.selection.push(id);
        }
    }

    /// Remove the item with the given id from the selection.
    /// Deselecting an unselected item is a no-op.
    pub fn deselect(&mut self, id: ItemId) {
        self.selection.retain(|&selected| selected != id);
    }

    /// Remove the item at `index` from the selection.
    /// Panics if `index` is out of range.
    pub fn deselect_index(&mut self, index: usize) {
        let id = self.id_at(index);
        self.selection.retain(|&selected| selected != id);
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Check if the item with the given id is selected.
    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selection.contains(&id)
    }

    /// Check if the item at `index` is selected.
    /// Panics if `index` is out of range.
    pub fn is_index_selected(&self, index: usize) -> bool {
        self.is_selected(self.id_at(index))
    }

    /// Selected ids, in the order they were selected.
    pub fn selection(&self) -> &[ItemId] {
        &self.selection
    }

    /// Number of selected items.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// The most recently selected id, which anchors range selection.
    pub fn last_selected(&self) -> Option<ItemId> {
        self.selection.last().copied()
    }
}

impl<I> Default for ListItemCollection<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> std::ops::Index<usize> for ListItemCollection<I> {
    type Output = I;

    fn index(&self, index: usize) -> &I {
        &self.entries[index].item
    }
}

impl<I> std::ops::IndexMut<usize> for ListItemCollection<I> {
    fn index_mut(&mut self, index: usize) -> &mut I {
        &mut self.entries[index].item
    }
}

/// Iterator over items in collection order.
pub struct Iter<'a, I> {
    inner: std::slice::Iter<'a, Entry<I>>,
}

impl<'a, I> Iterator for Iter<'a, I> {
    type Item = &'a I;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &entry.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Mutable iterator over items in collection order.
pub struct IterMut<'a, I> {
    inner: std::slice::IterMut<'a, Entry<I>>,
}

impl<'a, I> Iterator for IterMut<'a, I> {
    type Item = &'a mut I;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &mut entry.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, I> IntoIterator for &'a ListItemCollection<I> {
    type Item = &'a I;
    type IntoIter = Iter<'a, I>;

    fn into_iter(self) -> Iter<'a, I> {
        self.iter()
    }
}

impl<'a, I> IntoIterator for &'a mut ListItemCollection<I> {
    type Item = &'a mut I;
    type IntoIter = IterMut<'a, I>;

    fn into_iter(self) -> IterMut<'a, I> {
        self.iter_mut()
    }
}
