//! This crate provides a singly-linked list with owned nodes and a tracked
//! tail pointer.
//!
//! The [`List`] allows inserting and removing elements at the front in
//! constant time, and appending at the back in constant time thanks to the
//! tail pointer. Accessing or mutating elements at any other position takes
//! *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use forward_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//!
//! list.push_front(0); // becomes [0, 1, 2, 3]
//! list.push_back(4); // becomes [0, 1, 2, 3, 4]
//! list.insert(2, 99).unwrap(); // becomes [0, 1, 99, 2, 3, 4]
//!
//! assert_eq!(list.pop_front().unwrap(), 0);
//! assert_eq!(list.pop_back().unwrap(), 4);
//! assert!(list.remove_value(&99));
//!
//! assert_eq!(list.into_vec(), vec![1, 2, 3]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    ╔═══════════╗           ╔═══════════╗                      ╔═══════════╗
//!    ║   next    ║ ────────→ ║   next    ║ ──────→ ┄┄ ────────→ ║   next    ║ ──→ ∅
//!    ╟───────────╢           ╟───────────╢    Node 2, 3, ...    ╟───────────╢
//!    ║ element T ║           ║ element T ║                      ║ element T ║
//!    ╚═══════════╝           ╚═══════════╝                      ╚═══════════╝
//!        Node 0                  Node 1                          Node n - 1
//!          ↑                                                          ↑
//! ╔═══════════╗                                                       │
//! ║   head    ║ ──────┘ (owning)                                      │
//! ╟───────────╢                                                       │
//! ║   tail    ║ ──────────────────────────────────────────────────────┘
//! ╟───────────╢          (non-owning alias)
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a pointer `head` that owns the first node (absent in an empty list);
//! - a pointer `tail` that aliases the last node of the chain without owning
//!   it, so that appending takes *O*(1) time;
//! - a length field `len` caching the number of nodes in the chain.
//!
//! Each node of the list `List<T>` is allocated on the heap, and contains:
//! - the `next` pointer that owns the successor node, or is absent if it is
//!   the last node in the chain;
//! - the actual payload `T` that depends on the element type of the list.
//!
//! There are no sentinel nodes: absence of a node is always an explicit
//! `Option`, both for `head`/`tail` and for every `next` link.
//!
//! # Errors
//!
//! Fallible operations return [`Result`] with an [`Error`] describing what
//! was wrong with the call: an index outside the valid range, an argument
//! that is invalid regardless of the list state, or an operation that needs
//! a non-empty list. Validity is checked before any mutation, so a failing
//! call never leaves the list partially modified.
//!
//! ```
//! use forward_list::{Error, List};
//!
//! let mut list: List<i32> = List::new();
//! assert_eq!(list.pop_front(), Err(Error::Empty));
//! assert_eq!(list.get(3), Err(Error::OutOfRange { index: 3, len: 0 }));
//! ```
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. They
//! iterate the list front to back, like a slice; [`IterMut`] provides
//! mutability of the elements (but not of the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Algorithms
//!
//! The classic pointer algorithms are provided as methods:
//! - [`reverse`]: in-place link reversal, *O*(*n*) time and *O*(1) space;
//! - [`middle`]: slow/fast pointers, yielding the second middle node of an
//!   even-length list;
//! - [`nth_from_end`]: lead/follow pointers, counting 1-indexed from the
//!   tail;
//! - [`dedup`]: single-pass duplicate removal keeping first occurrences;
//! - [`has_cycle`] and [`cycle_start`]: Floyd's cycle detection. These are
//!   diagnostic utilities; a list built through the public API is never
//!   cyclic.
//!
//! Methods returning a "handle" to a node ([`find`], [`middle`],
//! [`cycle_start`]) return a [`NodeRef`], which borrows the list and
//! compares by node identity rather than by element value.
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 2, 3, 1]);
//! list.dedup();
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//!
//! list.reverse();
//! assert_eq!(list.to_vec(), vec![3, 2, 1]);
//!
//! assert_eq!(list.middle().unwrap().get(), &2);
//! assert_eq!(list.nth_from_end(1).unwrap(), &1);
//! assert!(!list.has_cycle());
//! ```
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`NodeRef`]: crate::NodeRef
//! [`reverse`]: crate::List::reverse
//! [`middle`]: crate::List::middle
//! [`nth_from_end`]: crate::List::nth_from_end
//! [`dedup`]: crate::List::dedup
//! [`has_cycle`]: crate::List::has_cycle
//! [`cycle_start`]: crate::List::cycle_start
//! [`find`]: crate::List::find

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::handle::NodeRef;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod error;
pub mod list;
