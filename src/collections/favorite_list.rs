//! A favorites list: values ordered from most to least frequently accessed.
//!
//! The list is a composition over [`PositionalList`]: each entry pairs a
//! value with its access count, and every access nudges the entry toward the
//! front with a localized *move-up* step instead of a full re-sort. Lookup is
//! a deliberate linear scan; no secondary index from value to position is
//! maintained.

use std::fmt;

use crate::collections::positional_list::{Iter, Position, PositionalList};
use crate::error::Error;

/// A list of values ordered from most frequently accessed to least.
///
/// Recording an access with [`access`] either bumps an existing entry's count
/// or appends a new entry with count 1, then runs the move-up heuristic: the
/// entry walks toward the front past every neighbor with a strictly smaller
/// count and is re-spliced once. Ties never move: two entries with equal
/// counts keep their relative order.
///
/// The scan in [`access`] and [`remove`] is *O*(*n*) by design; the structure
/// trades lookup speed for simplicity, and duplicate-equal values merge into
/// the first matching entry. There is no eviction: entries stay until they
/// are removed explicitly.
///
/// [`access`]: FavoriteList::access
/// [`remove`]: FavoriteList::remove
pub struct FavoriteList<E> {
    /// Underlying storage, front-to-back from most to least accessed.
    data: PositionalList<Item<E>>,
}

/// One entry of the underlying positional list.
#[derive(Debug)]
struct Item<E> {
    /// The user's value.
    value: E,
    /// How many times the value has been accessed.
    count: u64,
}

/// A lazy iterator over the `k` highest-ranked values of a [`FavoriteList`].
///
/// Yields values in current list order. Returned by [`FavoriteList::top`];
/// consumed once, not restartable.
#[derive(Debug)]
pub struct Top<'a, E> {
    list: &'a PositionalList<Item<E>>,
    cursor: Option<Position>,
    remaining: usize,
}

/// An iterator over `(value, access count)` pairs of a [`FavoriteList`],
/// front to back.
#[derive(Debug)]
pub struct Entries<'a, E> {
    inner: Iter<'a, Item<E>>,
}

impl<E> FavoriteList<E> {
    /// Constructs a new, empty `FavoriteList<E>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional::prelude::*;
    ///
    /// let favorites: FavoriteList<&str> = FavoriteList::new();
    /// assert!(favorites.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            data: PositionalList::new(),
        }
    }

    /// Returns the number of distinct values in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the list contains no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a lazy iterator over the `k` highest-ranked values, in current
    /// list order.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidArgument`] unless `1 <= k <= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional::prelude::*;
    ///
    /// let mut favorites = FavoriteList::new();
    /// for page in ["a", "b", "b", "c", "b", "c"] {
    ///     favorites.access(page);
    /// }
    ///
    /// let top: Vec<_> = favorites.top(2).unwrap().collect();
    /// assert_eq!(top, [&"b", &"c"]);
    ///
    /// assert!(favorites.top(0).is_err());
    /// assert!(favorites.top(4).is_err());
    /// ```
    pub fn top(&self, k: usize) -> Result<Top<'_, E>, Error> {
        if k < 1 || k > self.len() {
            return Err(Error::InvalidArgument(
                "k must be between 1 and the number of entries",
            ));
        }

        Ok(Top {
            list: &self.data,
            cursor: self.data.first(),
            remaining: k,
        })
    }

    /// Returns an iterator over `(value, access count)` pairs, front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional::prelude::*;
    ///
    /// let mut favorites = FavoriteList::new();
    /// favorites.access("a");
    /// favorites.access("a");
    ///
    /// assert!(favorites.iter().eq([(&"a", 2)]));
    /// ```
    #[inline]
    pub fn iter(&self) -> Entries<'_, E> {
        Entries {
            inner: self.data.iter(),
        }
    }

    /// Item at `p`.
    ///
    /// Positions handed around internally always come from `self.data` and
    /// are dropped before the entry they name is deleted, so the lookup
    /// cannot fail.
    fn item(&self, p: Position) -> &Item<E> {
        self.data.get(p).unwrap()
    }

    /// Position before `p`, or [`None`] if `p` is first.
    fn prev(&self, p: Position) -> Option<Position> {
        self.data.before(p).ok().flatten()
    }

    /// Moves the entry at `p` toward the front, based on its access count.
    ///
    /// Walks backward past every neighbor whose count is strictly smaller
    /// and re-splices the entry once, immediately before the stop position.
    /// Equal counts stop the walk, so ties never swap, and the splice is not
    /// followed by a re-check.
    fn move_up(&mut self, p: Position) {
        let count = self.item(p).count;

        // Already first: nothing to do.
        let mut trav = match self.prev(p) {
            Some(trav) => trav,
            None => return,
        };

        if count > self.item(trav).count {
            while let Some(ahead) = self.prev(trav) {
                if count > self.item(ahead).count {
                    trav = ahead;
                } else {
                    break;
                }
            }

            // Splice out, reinsert immediately before the stop position.
            // Both positions are live: `trav` is a different entry than `p`.
            let item = self.data.delete(p).unwrap();
            self.data.add_before(trav, item).unwrap();
        }
    }
}

impl<E: PartialEq> FavoriteList<E> {
    /// Records an access of `value`, increasing its count by one and nudging
    /// it toward the front.
    ///
    /// If the value is not present yet it is appended at the back first. When
    /// an equal value already exists, the passed `value` is dropped and the
    /// existing entry takes the access.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time for the lookup scan; the move-up step itself costs
    /// *O*(*d*) where *d* is how far the entry advances.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional::prelude::*;
    ///
    /// let mut favorites = FavoriteList::new();
    /// favorites.access("home");
    /// favorites.access("search");
    /// favorites.access("search");
    ///
    /// assert!(favorites.iter().eq([(&"search", 2), (&"home", 1)]));
    /// ```
    pub fn access(&mut self, value: E) {
        let p = match self.find_position(&value) {
            Some(p) => p,
            None => self.data.add_last(Item { value, count: 0 }),
        };

        // `p` is live: it was just found or minted.
        self.data.get_mut(p).unwrap().count += 1;
        self.move_up(p);
    }

    /// Removes `value` from the list, returning it, or [`None`] if it was
    /// not present.
    ///
    /// Absence is not an error: removing a value that was never accessed is
    /// a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional::prelude::*;
    ///
    /// let mut favorites = FavoriteList::new();
    /// favorites.access("home");
    ///
    /// assert_eq!(favorites.remove(&"home"), Some("home"));
    /// assert_eq!(favorites.remove(&"home"), None);
    /// ```
    pub fn remove(&mut self, value: &E) -> Option<E> {
        let p = self.find_position(value)?;
        // `p` was found in `self.data` a moment ago.
        let item = self.data.delete(p).unwrap();
        Some(item.value)
    }

    /// Scans from the front for an entry holding `value` and returns its
    /// position, or [`None`] if there is none. First match wins.
    fn find_position(&self, value: &E) -> Option<Position> {
        let mut trav = self.data.first();
        while let Some(p) = trav {
            if self.item(p).value == *value {
                return Some(p);
            }
            trav = self.data.after(p).ok().flatten();
        }
        None
    }
}

impl<E> Default for FavoriteList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for FavoriteList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, E> Iterator for Top<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let p = self.cursor?;
        self.remaining -= 1;
        self.cursor = self.list.after(p).ok().flatten();

        self.list.get(p).ok().map(|item| &item.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, E> ExactSizeIterator for Top<'a, E> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, E> Iterator for Entries<'a, E> {
    type Item = (&'a E, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|item| (&item.value, item.count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, E> ExactSizeIterator for Entries<'a, E> {}
