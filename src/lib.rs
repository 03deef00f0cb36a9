//! Sentinel-anchored doubly linked list with validated cursors.
//!
//! This crate provides [`List`], a sequence container built around three
//! ideas:
//!
//! - **Arena-backed nodes.** Elements live in a [`slab::Slab`] owned by the
//!   list; `prev`/`next` are arena keys, not pointers, so the whole crate is
//!   index arithmetic over stable slots.
//! - **A reserved anchor slot.** One valueless node closes the chain into a
//!   circle and serves as the past-the-end position. Splicing never needs a
//!   null case: inserting before `end` is `push_back`, an empty list is the
//!   anchor linked to itself.
//! - **Checked cursors.** Positions are plain `(identity, key)` values that
//!   borrow nothing. The list validates identity and occupancy on every use
//!   and returns [`Error`] on misuse instead of panicking or reading the
//!   wrong list's memory.
//!
//! # Quick Start
//!
//! ```
//! use anchorlist::List;
//!
//! let mut list = List::new();
//! list.push_back(2);
//! list.push_front(1);
//! list.push_back(3);
//!
//! // Cursor walk with checked steps.
//! let mut pos = list.begin();
//! while pos != list.end() {
//!     let _value = list.get(pos).unwrap();
//!     pos = list.next(pos).unwrap();
//! }
//!
//! assert_eq!(list.pop_front(), Ok(1));
//! assert_eq!(list.pop_back(), Ok(3));
//! ```
//!
//! # Bulk Algorithms
//!
//! All four operate on the link structure without relocating stored values
//! within the list:
//!
//! | Operation | Cost | Guarantee |
//! |-----------|------|-----------|
//! | [`List::sort`] | O(n log n) avg | ascending, **unstable** |
//! | [`List::merge`] | O(n + m) | stable tie-break: receiver first |
//! | [`List::reverse`] | O(n) | involution, link swap only |
//! | [`List::unique`] | O(n) | keeps first of each equal run |
//!
//! ```
//! use anchorlist::List;
//!
//! let mut a: List<i32> = [5, 1, 3].into_iter().collect();
//! let mut b: List<i32> = [4, 2].into_iter().collect();
//!
//! a.sort();
//! b.sort();
//! a.merge(&mut b);
//!
//! assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
//! assert!(b.is_empty());
//! ```
//!
//! # Error Model
//!
//! Two failure kinds cover every checked operation; see [`Error`]. All
//! precondition checks run before any structural change, so a failed call
//! leaves the list and every live cursor exactly as they were.
//!
//! # What This Crate Is Not
//!
//! Not thread-safe (wrap it in your own lock), not persistent, and not
//! generic over comparators — `sort`/`merge` use `T: Ord`, `unique` uses
//! `T: PartialEq`.

#![warn(missing_docs)]

pub mod cursor;
pub mod error;
pub mod list;

pub use cursor::{Cursor, CursorMut};
pub use error::Error;
pub use list::{IntoIter, Iter, IterMut, List};
