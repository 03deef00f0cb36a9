//! Cursor types and list identity.
//!
//! A cursor is a plain `(list identity, node key)` pair. It borrows nothing,
//! so it can be stored, copied, and handed back to the list later; the list
//! validates both fields before every use. [`CursorMut`] is only obtainable
//! from a `&mut` list and is required by mutating operations, while
//! [`Cursor`] works with any shared reference. A `CursorMut` converts into a
//! `Cursor`; there is no conversion back.

use core::sync::atomic::{AtomicU64, Ordering};

/// Identity token distinguishing list instances.
///
/// Drawn from a global counter at list construction, so a cursor created for
/// one list never validates against another, including clones of its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(u64);

impl ListId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        ListId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A read-only position in a list.
///
/// Obtained from [`List::begin`]/[`List::end`] or by converting a
/// [`CursorMut`]. Used with [`List::get`], [`List::next`] and [`List::prev`].
///
/// [`List::begin`]: crate::List::begin
/// [`List::end`]: crate::List::end
/// [`List::get`]: crate::List::get
/// [`List::next`]: crate::List::next
/// [`List::prev`]: crate::List::prev
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub(crate) owner: ListId,
    pub(crate) node: usize,
}

/// A position in a list that permits mutation.
///
/// Obtained from [`List::begin_mut`]/[`List::end_mut`] or returned by
/// [`List::insert`], [`List::erase`] and the push operations. Required by
/// [`List::get_mut`], [`List::insert`] and [`List::erase`].
///
/// [`List::begin_mut`]: crate::List::begin_mut
/// [`List::end_mut`]: crate::List::end_mut
/// [`List::get_mut`]: crate::List::get_mut
/// [`List::insert`]: crate::List::insert
/// [`List::erase`]: crate::List::erase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorMut {
    pub(crate) owner: ListId,
    pub(crate) node: usize,
}

impl From<CursorMut> for Cursor {
    #[inline]
    fn from(pos: CursorMut) -> Self {
        Cursor {
            owner: pos.owner,
            node: pos.node,
        }
    }
}

impl PartialEq<CursorMut> for Cursor {
    #[inline]
    fn eq(&self, other: &CursorMut) -> bool {
        self.owner == other.owner && self.node == other.node
    }
}

impl PartialEq<Cursor> for CursorMut {
    #[inline]
    fn eq(&self, other: &Cursor) -> bool {
        self.owner == other.owner && self.node == other.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = ListId::next();
        let b = ListId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn cursor_from_cursor_mut() {
        let pos = CursorMut {
            owner: ListId::next(),
            node: 3,
        };
        let shared: Cursor = pos.into();
        assert_eq!(shared, pos);
        assert_eq!(pos, shared);
    }

    #[test]
    fn cross_kind_inequality() {
        let id = ListId::next();
        let a = Cursor { owner: id, node: 1 };
        let b = CursorMut { owner: id, node: 2 };
        assert!(a != b);
        assert!(b != a);
    }
}
