//! Min-oriented [priority queues] storing their entries in a positional
//! list.
//!
//! Both variants compose a [`PositionalList`] and drive it strictly through
//! its public operations. They make opposite trade-offs: the unsorted queue
//! has *O*(1) insertion and *O*(*n*) removal, the sorted queue *O*(*n*)
//! insertion and *O*(1) removal.
//!
//! [priority queues]: https://en.wikipedia.org/wiki/Priority_queue

use std::fmt;

use crate::collections::positional_list::{Position, PositionalList};
use crate::error::Error;

/// Key-value composite stored by both queue variants.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A min-oriented priority queue over an unsorted positional list.
///
/// [`add`] appends at the back in *constant* time; [`min`] and
/// [`remove_min`] scan every position for the smallest key. Entries with
/// equal keys come out in insertion order.
///
/// [`add`]: UnsortedPriorityQueue::add
/// [`min`]: UnsortedPriorityQueue::min
/// [`remove_min`]: UnsortedPriorityQueue::remove_min
pub struct UnsortedPriorityQueue<K, V> {
    data: PositionalList<Entry<K, V>>,
}

/// A min-oriented priority queue over a sorted positional list.
///
/// [`add`] walks backward from the last position to the insertion point, so
/// the list stays sorted by key and [`min`]/[`remove_min`] touch only the
/// first position. Entries with equal keys come out in insertion order.
///
/// [`add`]: SortedPriorityQueue::add
/// [`min`]: SortedPriorityQueue::min
/// [`remove_min`]: SortedPriorityQueue::remove_min
pub struct SortedPriorityQueue<K, V> {
    data: PositionalList<Entry<K, V>>,
}

impl<K, V> UnsortedPriorityQueue<K, V> {
    /// Constructs a new, empty `UnsortedPriorityQueue<K, V>`.
    pub fn new() -> Self {
        Self {
            data: PositionalList::new(),
        }
    }

    /// Returns the number of entries in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the queue contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entry at `p`. Positions come from `self.data` and are live.
    fn entry(&self, p: Position) -> &Entry<K, V> {
        self.data.get(p).unwrap()
    }
}

impl<K: Ord, V> UnsortedPriorityQueue<K, V> {
    /// Adds a key-value entry to the queue.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The entry is appended at the back; order is
    /// recovered lazily when the minimum is requested.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional::prelude::*;
    ///
    /// let mut queue = UnsortedPriorityQueue::new();
    /// queue.add(5, "five");
    /// queue.add(1, "one");
    ///
    /// assert_eq!(queue.min(), Ok((&1, &"one")));
    /// ```
    pub fn add(&mut self, key: K, value: V) {
        self.data.add_last(Entry { key, value });
    }

    /// Returns the entry with the minimum key without removing it.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyContainer`] if the queue is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. Every position is scanned for the smallest key.
    pub fn min(&self) -> Result<(&K, &V), Error> {
        let p = self.find_min()?;
        let entry = self.entry(p);
        Ok((&entry.key, &entry.value))
    }

    /// Removes and returns the entry with the minimum key.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyContainer`] if the queue is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. Every position is scanned for the smallest key;
    /// the deletion itself is *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use positional::prelude::*;
    ///
    /// let mut queue = UnsortedPriorityQueue::new();
    /// queue.add(2, "two");
    /// queue.add(1, "one");
    ///
    /// assert_eq!(queue.remove_min(), Ok((1, "one")));
    /// assert_eq!(queue.remove_min(), Ok((2, "two")));
    /// assert_eq!(queue.remove_min(), Err(Error::EmptyContainer));
    /// ```
    pub fn remove_min(&mut self) -> Result<(K, V), Error> {
        let p = self.find_min()?;
        // `p` was just produced by the scan.
        let entry = self.data.delete(p).unwrap();
        Ok((entry.key, entry.value))
    }

    /// Returns the position of the entry with the minimum key.
    ///
    /// The strict `<` comparison keeps the first of several equal keys, so
    /// equal-key entries leave in insertion order.
    fn find_min(&self) -> Result<Position, Error> {
        let mut best = match self.data.first() {
            Some(p) => p,
            None => return Err(Error::EmptyContainer),
        };

        for p in self.data.positions() {
            if self.entry(p).key < self.entry(best).key {
                best = p;
            }
        }

        Ok(best)
    }
}

impl<K, V> Default for UnsortedPriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for UnsortedPriorityQueue<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.data.iter().map(|e| (&e.key, &e.value)))
            .finish()
    }
}

impl<K, V> SortedPriorityQueue<K, V> {
    /// Constructs a new, empty `SortedPriorityQueue<K, V>`.
    pub fn new() -> Self {
        Self {
            data: PositionalList::new(),
        }
    }

    /// Returns the number of entries in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the queue contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entry at `p`. Positions come from `self.data` and are live.
    fn entry(&self, p: Position) -> &Entry<K, V> {
        self.data.get(p).unwrap()
    }
}

impl<K: Ord, V> SortedPriorityQueue<K, V> {
    /// Adds a key-value entry to the queue.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The insertion point is found by walking backward
    /// from the last position; a new maximum key inserts in *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use positional::prelude::*;
    ///
    /// let mut queue = SortedPriorityQueue::new();
    /// queue.add(5, "five");
    /// queue.add(1, "one");
    /// queue.add(3, "three");
    ///
    /// assert_eq!(queue.min(), Ok((&1, &"one")));
    /// ```
    pub fn add(&mut self, key: K, value: V) {
        let entry = Entry { key, value };

        // Walk backward while the new key is strictly smaller; stopping at
        // the first key <= the new one keeps equal keys in insertion order.
        let mut trav = self.data.last();
        while let Some(p) = trav {
            if entry.key < self.entry(p).key {
                trav = self.data.before(p).ok().flatten();
            } else {
                // `p` is live: the walk only visits current positions.
                self.data.add_after(p, entry).unwrap();
                return;
            }
        }

        // Walked past the front: the new key is the smallest.
        self.data.add_first(entry);
    }

    /// Returns the entry with the minimum key without removing it.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyContainer`] if the queue is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The minimum is always the first position.
    pub fn min(&self) -> Result<(&K, &V), Error> {
        let p = self.data.first().ok_or(Error::EmptyContainer)?;
        let entry = self.entry(p);
        Ok((&entry.key, &entry.value))
    }

    /// Removes and returns the entry with the minimum key.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyContainer`] if the queue is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The minimum is always the first position.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional::prelude::*;
    ///
    /// let mut queue = SortedPriorityQueue::new();
    /// queue.add(2, "two");
    /// queue.add(1, "one");
    ///
    /// assert_eq!(queue.remove_min(), Ok((1, "one")));
    /// assert_eq!(queue.remove_min(), Ok((2, "two")));
    /// assert_eq!(queue.remove_min(), Err(Error::EmptyContainer));
    /// ```
    pub fn remove_min(&mut self) -> Result<(K, V), Error> {
        let p = self.data.first().ok_or(Error::EmptyContainer)?;
        // The first position is live by construction.
        let entry = self.data.delete(p).unwrap();
        Ok((entry.key, entry.value))
    }
}

impl<K, V> Default for SortedPriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SortedPriorityQueue<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.data.iter().map(|e| (&e.key, &e.value)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsorted_drains_ascending() {
        let mut queue = UnsortedPriorityQueue::new();
        for (k, v) in [(4, "d"), (1, "a"), (3, "c"), (2, "b")] {
            queue.add(k, v);
        }

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.min(), Ok((&1, &"a")));

        let mut drained = Vec::new();
        while let Ok(entry) = queue.remove_min() {
            drained.push(entry);
        }
        assert_eq!(drained, [(1, "a"), (2, "b"), (3, "c"), (4, "d")]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_unsorted_empty_errors() {
        let mut queue: UnsortedPriorityQueue<i32, &str> = UnsortedPriorityQueue::new();

        assert_eq!(queue.min(), Err(Error::EmptyContainer));
        assert_eq!(queue.remove_min(), Err(Error::EmptyContainer));
    }

    #[test]
    fn test_unsorted_equal_keys_fifo() {
        let mut queue = UnsortedPriorityQueue::new();
        queue.add(1, "first");
        queue.add(0, "zero");
        queue.add(1, "second");

        assert_eq!(queue.remove_min(), Ok((0, "zero")));
        assert_eq!(queue.remove_min(), Ok((1, "first")));
        assert_eq!(queue.remove_min(), Ok((1, "second")));
    }

    #[test]
    fn test_sorted_drains_ascending() {
        let mut queue = SortedPriorityQueue::new();
        for (k, v) in [(4, "d"), (1, "a"), (3, "c"), (2, "b")] {
            queue.add(k, v);
        }

        assert_eq!(queue.min(), Ok((&1, &"a")));

        let mut drained = Vec::new();
        while let Ok(entry) = queue.remove_min() {
            drained.push(entry);
        }
        assert_eq!(drained, [(1, "a"), (2, "b"), (3, "c"), (4, "d")]);
    }

    #[test]
    fn test_sorted_empty_errors() {
        let mut queue: SortedPriorityQueue<i32, &str> = SortedPriorityQueue::new();

        assert_eq!(queue.min(), Err(Error::EmptyContainer));
        assert_eq!(queue.remove_min(), Err(Error::EmptyContainer));
    }

    #[test]
    fn test_sorted_equal_keys_fifo() {
        let mut queue = SortedPriorityQueue::new();
        queue.add(1, "first");
        queue.add(1, "second");
        queue.add(0, "zero");
        queue.add(1, "third");

        assert_eq!(queue.remove_min(), Ok((0, "zero")));
        assert_eq!(queue.remove_min(), Ok((1, "first")));
        assert_eq!(queue.remove_min(), Ok((1, "second")));
        assert_eq!(queue.remove_min(), Ok((1, "third")));
    }

    #[test]
    fn test_interleaved_add_and_remove() {
        let mut queue = SortedPriorityQueue::new();
        queue.add(5, "e");
        queue.add(2, "b");

        assert_eq!(queue.remove_min(), Ok((2, "b")));

        queue.add(1, "a");
        queue.add(7, "g");

        assert_eq!(queue.remove_min(), Ok((1, "a")));
        assert_eq!(queue.remove_min(), Ok((5, "e")));
        assert_eq!(queue.remove_min(), Ok((7, "g")));
        assert!(queue.is_empty());
    }
}
