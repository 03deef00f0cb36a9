//! Doubly linked list over an internal slab arena.
//!
//! Nodes live in a [`slab::Slab`] owned by the list; links are arena keys
//! rather than pointers. One reserved slot, the *anchor*, closes the chain
//! into a circle: `anchor.next` is the first element, `anchor.prev` the
//! last, and an empty list self-links the anchor. The anchor never holds a
//! value and doubles as the always-valid end position, so none of the link
//! operations need a null case.
//!
//! # Cursors
//!
//! Positions are handed out as [`Cursor`]/[`CursorMut`] values carrying the
//! owning list's identity token. Every cursor-taking operation validates the
//! token and the slot before touching anything and reports misuse as
//! [`Error::InvalidCursor`] instead of panicking:
//!
//! ```
//! use anchorlist::{Error, List};
//!
//! let mut list = List::new();
//! list.push_back("a");
//! list.push_back("b");
//!
//! let pos = list.begin();
//! assert_eq!(list.get(pos), Ok(&"a"));
//! let pos = list.next(pos).unwrap();
//! assert_eq!(list.get(pos), Ok(&"b"));
//!
//! // The end position is never dereferenceable.
//! assert_eq!(list.get(list.end()), Err(Error::InvalidCursor));
//!
//! // A cursor from another list is rejected, not misread.
//! let other: List<&str> = List::new();
//! assert_eq!(other.get(pos), Err(Error::InvalidCursor));
//! ```
//!
//! A cursor whose node was erased is *stale*: the occupancy check rejects it
//! until the slot is reused by a later insertion, after which it observes
//! the new element. Validation covers cross-list misuse and anchor access,
//! not full temporal validity.
//!
//! # Bulk algorithms
//!
//! `sort`, `merge`, `reverse`, and `unique` work on the link structure.
//! `sort` is **unstable**; `merge` keeps receiver elements ahead of equal
//! elements from the argument.
//!
//! ```
//! use anchorlist::List;
//!
//! let mut list: List<i32> = [3, 1, 2, 2, 1].into_iter().collect();
//! list.sort();
//! list.unique();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use core::fmt;
use core::mem;

use slab::Slab;

use crate::cursor::{Cursor, CursorMut, ListId};
use crate::error::Error;

/// Reserved key marking a detached link.
const NONE: usize = usize::MAX;

/// A node in the chain. `value` is `None` only for the anchor.
#[derive(Debug)]
struct Node<T> {
    prev: usize,
    next: usize,
    value: Option<T>,
}

impl<T> Node<T> {
    #[inline]
    fn new(value: T) -> Self {
        Self {
            prev: NONE,
            next: NONE,
            value: Some(value),
        }
    }

    #[inline]
    fn into_value(self) -> T {
        self.value.expect("anchor holds no value")
    }
}

/// A doubly linked list with validated cursors.
///
/// Insertion and removal at any position are O(1) once a cursor is in hand;
/// the bulk algorithms rewrite links instead of relocating stored values.
///
/// # Example
///
/// ```
/// use anchorlist::List;
///
/// let mut list = List::new();
/// list.push_back(1);
/// list.push_back(3);
///
/// // Insert before an existing position.
/// let pos = list.begin_mut();
/// let pos = list.next_mut(pos).unwrap();
/// list.insert(pos, 2).unwrap();
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(list.pop_front(), Ok(1));
/// ```
pub struct List<T> {
    nodes: Slab<Node<T>>,
    anchor: usize,
    len: usize,
    id: ListId,
}

impl<T> List<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` elements before the
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Slab::with_capacity(capacity + 1);
        let anchor = nodes.insert(Node {
            prev: NONE,
            next: NONE,
            value: None,
        });
        nodes[anchor].prev = anchor;
        nodes[anchor].next = anchor;
        Self {
            nodes,
            anchor,
            len: 0,
            id: ListId::next(),
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ========================================================================
    // Link operations (splice/detach on raw keys, no alloc/dealloc)
    // ========================================================================

    /// Splices `cur` immediately before `pos` in the circular chain.
    ///
    /// Touches only the four adjacent links.
    #[inline]
    fn attach(&mut self, pos: usize, cur: usize) {
        let prev = self.nodes[pos].prev;
        {
            let node = &mut self.nodes[cur];
            node.prev = prev;
            node.next = pos;
        }
        self.nodes[prev].next = cur;
        self.nodes[pos].prev = cur;
        self.len += 1;
    }

    /// Relinks `pos`'s neighbors around it and clears its own links.
    ///
    /// The slot stays in the arena; callers decide whether to free it or
    /// keep the node alive for relinking.
    #[inline]
    fn detach(&mut self, pos: usize) {
        let (prev, next) = {
            let node = &self.nodes[pos];
            (node.prev, node.next)
        };
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        let node = &mut self.nodes[pos];
        node.prev = NONE;
        node.next = NONE;
        self.len -= 1;
    }

    /// Detaches and frees the first node, returning its value.
    ///
    /// Caller must ensure the list is non-empty.
    #[inline]
    fn take_front(&mut self) -> T {
        let key = self.nodes[self.anchor].next;
        self.detach(key);
        self.nodes.remove(key).into_value()
    }

    /// Detaches and frees the last node, returning its value.
    ///
    /// Caller must ensure the list is non-empty.
    #[inline]
    fn take_back(&mut self) -> T {
        let key = self.nodes[self.anchor].prev;
        self.detach(key);
        self.nodes.remove(key).into_value()
    }

    // ========================================================================
    // Validation and internal access
    // ========================================================================

    /// Checks that a cursor is bound to this list and names an occupied slot.
    #[inline]
    fn bound_slot(&self, owner: ListId, node: usize) -> Result<usize, Error> {
        if owner != self.id || self.nodes.get(node).is_none() {
            return Err(Error::InvalidCursor);
        }
        Ok(node)
    }

    #[inline]
    fn value(&self, key: usize) -> &T {
        self.nodes[key].value.as_ref().expect("anchor holds no value")
    }

    #[inline]
    fn value_mut(&mut self, key: usize) -> &mut T {
        self.nodes[key].value.as_mut().expect("anchor holds no value")
    }

    // ========================================================================
    // Element access
    // ========================================================================

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        Ok(self.value(self.nodes[self.anchor].next))
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        let key = self.nodes[self.anchor].next;
        Ok(self.value_mut(key))
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        Ok(self.value(self.nodes[self.anchor].prev))
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        let key = self.nodes[self.anchor].prev;
        Ok(self.value_mut(key))
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// Accepts either cursor kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCursor`] if `pos` is foreign, stale, or the
    /// end position.
    #[inline]
    pub fn get(&self, pos: impl Into<Cursor>) -> Result<&T, Error> {
        let pos = pos.into();
        let key = self.bound_slot(pos.owner, pos.node)?;
        if key == self.anchor {
            return Err(Error::InvalidCursor);
        }
        Ok(self.value(key))
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCursor`] if `pos` is foreign, stale, or the
    /// end position.
    #[inline]
    pub fn get_mut(&mut self, pos: CursorMut) -> Result<&mut T, Error> {
        let key = self.bound_slot(pos.owner, pos.node)?;
        if key == self.anchor {
            return Err(Error::InvalidCursor);
        }
        Ok(self.value_mut(key))
    }

    // ========================================================================
    // Cursor positioning
    // ========================================================================

    /// Returns a cursor at the first element, or [`end`](Self::end) if the
    /// list is empty.
    #[inline]
    pub fn begin(&self) -> Cursor {
        Cursor {
            owner: self.id,
            node: self.nodes[self.anchor].next,
        }
    }

    /// Returns the past-the-end cursor.
    ///
    /// Always valid as an insertion position, never dereferenceable.
    #[inline]
    pub fn end(&self) -> Cursor {
        Cursor {
            owner: self.id,
            node: self.anchor,
        }
    }

    /// Returns a mutable cursor at the first element, or
    /// [`end_mut`](Self::end_mut) if the list is empty.
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut {
        CursorMut {
            owner: self.id,
            node: self.nodes[self.anchor].next,
        }
    }

    /// Returns the past-the-end mutable cursor.
    #[inline]
    pub fn end_mut(&mut self) -> CursorMut {
        CursorMut {
            owner: self.id,
            node: self.anchor,
        }
    }

    #[inline]
    fn step_forward(&self, owner: ListId, node: usize) -> Result<usize, Error> {
        let key = self.bound_slot(owner, node)?;
        if key == self.anchor {
            return Err(Error::InvalidCursor);
        }
        Ok(self.nodes[key].next)
    }

    #[inline]
    fn step_back(&self, owner: ListId, node: usize) -> Result<usize, Error> {
        let key = self.bound_slot(owner, node)?;
        if self.len == 0 || self.nodes[key].prev == self.anchor {
            return Err(Error::InvalidCursor);
        }
        Ok(self.nodes[key].prev)
    }

    /// Returns the cursor one step toward the back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCursor`] if `pos` is foreign, stale, or
    /// already at the end position.
    #[inline]
    pub fn next(&self, pos: Cursor) -> Result<Cursor, Error> {
        Ok(Cursor {
            owner: self.id,
            node: self.step_forward(pos.owner, pos.node)?,
        })
    }

    /// Returns the mutable cursor one step toward the back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCursor`] if `pos` is foreign, stale, or
    /// already at the end position.
    #[inline]
    pub fn next_mut(&self, pos: CursorMut) -> Result<CursorMut, Error> {
        Ok(CursorMut {
            owner: self.id,
            node: self.step_forward(pos.owner, pos.node)?,
        })
    }

    /// Returns the cursor one step toward the front.
    ///
    /// Stepping back from [`end`](Self::end) yields the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCursor`] if `pos` is foreign or stale, the
    /// list is empty, or `pos` is already at the first element.
    #[inline]
    pub fn prev(&self, pos: Cursor) -> Result<Cursor, Error> {
        Ok(Cursor {
            owner: self.id,
            node: self.step_back(pos.owner, pos.node)?,
        })
    }

    /// Returns the mutable cursor one step toward the front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCursor`] if `pos` is foreign or stale, the
    /// list is empty, or `pos` is already at the first element.
    #[inline]
    pub fn prev_mut(&self, pos: CursorMut) -> Result<CursorMut, Error> {
        Ok(CursorMut {
            owner: self.id,
            node: self.step_back(pos.owner, pos.node)?,
        })
    }

    // ========================================================================
    // Insertion and removal
    // ========================================================================

    /// Inserts `value` before `pos` and returns a cursor to the new element.
    ///
    /// `pos` may be [`end_mut`](Self::end_mut), in which case this appends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCursor`] if `pos` is foreign or stale. The
    /// list is unchanged on error.
    pub fn insert(&mut self, pos: CursorMut, value: T) -> Result<CursorMut, Error> {
        let at = self.bound_slot(pos.owner, pos.node)?;
        let cur = self.nodes.insert(Node::new(value));
        self.attach(at, cur);
        Ok(CursorMut {
            owner: self.id,
            node: cur,
        })
    }

    /// Removes the element at `pos` and returns a cursor to the element
    /// that followed it, or [`end_mut`](Self::end_mut) if it was last.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty, and
    /// [`Error::InvalidCursor`] if `pos` is foreign, stale, or the end
    /// position. The list is unchanged on error.
    pub fn erase(&mut self, pos: CursorMut) -> Result<CursorMut, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        let key = self.bound_slot(pos.owner, pos.node)?;
        if key == self.anchor {
            return Err(Error::InvalidCursor);
        }
        let next = self.nodes[key].next;
        self.detach(key);
        self.nodes.remove(key);
        Ok(CursorMut {
            owner: self.id,
            node: next,
        })
    }

    /// Appends an element, returning a cursor to it.
    #[inline]
    pub fn push_back(&mut self, value: T) -> CursorMut {
        let at = self.anchor;
        let cur = self.nodes.insert(Node::new(value));
        self.attach(at, cur);
        CursorMut {
            owner: self.id,
            node: cur,
        }
    }

    /// Prepends an element, returning a cursor to it.
    #[inline]
    pub fn push_front(&mut self, value: T) -> CursorMut {
        let at = self.nodes[self.anchor].next;
        let cur = self.nodes.insert(Node::new(value));
        self.attach(at, cur);
        CursorMut {
            owner: self.id,
            node: cur,
        }
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        Ok(self.take_front())
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        Ok(self.take_back())
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        let mut key = self.nodes[self.anchor].next;
        while key != self.anchor {
            let next = self.nodes[key].next;
            self.nodes.remove(key);
            key = next;
        }
        let anchor = self.anchor;
        let node = &mut self.nodes[anchor];
        node.prev = anchor;
        node.next = anchor;
        self.len = 0;
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.nodes[self.anchor].next,
            back: self.nodes[self.anchor].prev,
            remaining: self.len,
        }
    }

    /// Returns an iterator over mutable references, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let front = self.nodes[self.anchor].next;
        let back = self.nodes[self.anchor].prev;
        let remaining = self.len;
        IterMut {
            list: self,
            front,
            back,
            remaining,
        }
    }

    /// Reverses traversal order in place by swapping every node's links.
    ///
    /// The anchor participates, so the circle stays closed. Applying
    /// `reverse` twice restores the original order. O(n), no allocation,
    /// no value moves.
    pub fn reverse(&mut self) {
        // Every occupied slot is on the chain (anchor included), so the
        // arena's own iteration visits exactly the nodes to flip.
        for (_, node) in self.nodes.iter_mut() {
            mem::swap(&mut node.prev, &mut node.next);
        }
    }
}

// =============================================================================
// Ordered element ops - sort and merge
// =============================================================================

impl<T: Ord> List<T> {
    /// Sorts the elements ascending.
    ///
    /// Collects the chain's keys into a buffer, runs an iterative quicksort
    /// over it (middle-key pivot, Hoare partition, explicit range stack),
    /// and rebuilds the chain in buffer order. Stored values never move.
    ///
    /// O(n log n) average, O(n²) worst case, O(n) auxiliary keys.
    ///
    /// **Not stable**: equal elements may change relative order. Use
    /// [`merge`](Self::merge) when a stability guarantee matters.
    pub fn sort(&mut self) {
        if self.len <= 1 {
            return;
        }

        let mut keys: Vec<usize> = Vec::with_capacity(self.len);
        let mut key = self.nodes[self.anchor].next;
        while key != self.anchor {
            keys.push(key);
            key = self.nodes[key].next;
        }

        // The larger subrange goes on the stack and the smaller is processed
        // next, keeping the stack O(log n) deep.
        let mut ranges: Vec<(isize, isize)> = Vec::new();
        ranges.push((0, keys.len() as isize - 1));
        while let Some((l, r)) = ranges.pop() {
            let pivot = keys[((l + r) / 2) as usize];
            let (mut i, mut j) = (l, r);
            while i <= j {
                while self.value(keys[i as usize]) < self.value(pivot) {
                    i += 1;
                }
                while self.value(pivot) < self.value(keys[j as usize]) {
                    j -= 1;
                }
                if i <= j {
                    keys.swap(i as usize, j as usize);
                    i += 1;
                    j -= 1;
                }
            }
            if j - l < r - i {
                if i < r {
                    ranges.push((i, r));
                }
                if l < j {
                    ranges.push((l, j));
                }
            } else {
                if l < j {
                    ranges.push((l, j));
                }
                if i < r {
                    ranges.push((i, r));
                }
            }
        }

        // Rebuild the circular chain in buffer order.
        let anchor = self.anchor;
        let mut prev = anchor;
        for &key in &keys {
            self.nodes[prev].next = key;
            self.nodes[key].prev = prev;
            prev = key;
        }
        self.nodes[prev].next = anchor;
        self.nodes[anchor].prev = prev;
    }

    /// Merges `other` into `self`, leaving `other` empty.
    ///
    /// Both lists must already be sorted ascending; this is not checked.
    /// For equal elements, those already in `self` precede those from
    /// `other` — `other`'s front is taken only when strictly less than the
    /// element under the merge cursor. Values move between the two arenas
    /// and are never cloned. O(n + m).
    ///
    /// # Example
    ///
    /// ```
    /// use anchorlist::List;
    ///
    /// let mut a: List<i32> = [1, 3, 3, 5].into_iter().collect();
    /// let mut b: List<i32> = [2, 3, 4].into_iter().collect();
    ///
    /// a.merge(&mut b);
    ///
    /// assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 3, 3, 4, 5]);
    /// assert!(b.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut List<T>) {
        // `self` and `other` cannot alias under &mut, so merging a list
        // into itself needs no check here.
        let mut at = self.nodes[self.anchor].next;
        while at != self.anchor && other.len > 0 {
            let take = {
                let front = other.value(other.nodes[other.anchor].next);
                front < self.value(at)
            };
            if take {
                let value = other.take_front();
                let cur = self.nodes.insert(Node::new(value));
                self.attach(at, cur);
            } else {
                at = self.nodes[at].next;
            }
        }
        while other.len > 0 {
            let value = other.take_front();
            let cur = self.nodes.insert(Node::new(value));
            let anchor = self.anchor;
            self.attach(anchor, cur);
        }
    }
}

// =============================================================================
// Equality-based ops - unique
// =============================================================================

impl<T: PartialEq> List<T> {
    /// Removes each element equal to its immediate predecessor.
    ///
    /// Keeps the first of every run of consecutive equal elements;
    /// non-consecutive duplicates are untouched. Removed elements are
    /// destroyed immediately. O(n).
    pub fn unique(&mut self) {
        let mut cur = self.nodes[self.anchor].next;
        while cur != self.anchor {
            let next = self.nodes[cur].next;
            if next == self.anchor {
                break;
            }
            if self.value(cur) == self.value(next) {
                self.detach(next);
                self.nodes.remove(next);
            } else {
                cur = next;
            }
        }
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    /// Deep, order-preserving copy with a fresh identity.
    ///
    /// Cursors bound to the source do not validate against the clone.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        for value in self.iter() {
            out.push_back(value.clone());
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements.
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.front;
        self.front = self.list.nodes[key].next;
        self.remaining -= 1;
        Some(self.list.value(key))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.back;
        self.back = self.list.nodes[key].prev;
        self.remaining -= 1;
        Some(self.list.value(key))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator over mutable references to list elements.
pub struct IterMut<'a, T> {
    list: &'a mut List<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.front;
        self.front = self.list.nodes[key].next;
        self.remaining -= 1;
        let value = self.list.value_mut(key);
        // Extend lifetime - safe because we visit each node exactly once
        Some(unsafe { &mut *(value as *mut T) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.back;
        self.back = self.list.nodes[key].prev;
        self.remaining -= 1;
        let value = self.list.value_mut(key);
        // Extend lifetime - safe because we visit each node exactly once
        Some(unsafe { &mut *(value as *mut T) })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator over list elements.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.list.len == 0 {
            return None;
        }
        Some(self.list.take_front())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.list.len == 0 {
            return None;
        }
        Some(self.list.take_back())
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
