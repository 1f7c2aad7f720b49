use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{Error, Result};
use crate::{IntoIter, Iter, IterMut};

pub mod handle;
pub mod iterator;

mod algorithms;

/// The `List` is a singly-linked list with owned nodes and a tracked tail
/// pointer. It allows inserting and removing elements at the front, and
/// appending at the back, in constant time. In compromise, accessing or
/// mutating elements at any other position takes *O*(*n*) time.
///
/// The `List` contains:
/// - a pointer `head` that owns the first node of the chain;
/// - a pointer `tail` that aliases the last node of the chain without
///   owning it;
/// - a length field `len` caching the number of nodes in the chain.
///
/// # Invariants
///
/// - `len == 0` iff `head` is absent iff `tail` is absent;
/// - `tail`, when present, is reachable from `head` in exactly `len - 1`
///   successor steps, and its own successor link is absent;
/// - `len` always equals the number of nodes reachable from `head`.
///
/// The cycle-detection methods [`has_cycle`] and [`cycle_start`] probe the
/// second invariant rather than assume it; every other traversal relies
/// on it.
///
/// [`has_cycle`]: List::has_cycle
/// [`cycle_start`]: List::cycle_start
pub struct List<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) element: T,
}

// private methods
impl<T> List<T> {
    /// Walk from the head to the node at index `at`.
    ///
    /// The caller must guarantee `at < self.len`; the walk dereferences
    /// successor links under that assumption.
    pub(crate) fn node_at(&self, at: usize) -> NonNull<Node<T>> {
        debug_assert!(at < self.len, "node_at index must be within the chain");
        // SAFETY: `at < len`, so the head and the first `at` successor
        // links are all present and point to live nodes.
        unsafe {
            let mut current = self.head.expect("a valid index implies a non-empty list");
            for _ in 0..at {
                current = current.as_ref().next.expect("a valid index stays within the chain");
            }
            current
        }
    }

    fn check_index(&self, at: usize, allow_end: bool) -> Result<()> {
        let ok = if allow_end { at <= self.len } else { at < self.len };
        if ok {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index: at,
                len: self.len,
            })
        }
    }

    /// Link the tail's successor back to the node at index `at`, making the
    /// chain deliberately cyclic. Only cycle-detection tests may leave the
    /// list in this state, and must call [`List::unlink_tail`] before the
    /// list is dropped or traversed by anything else.
    #[cfg(test)]
    pub(crate) fn link_tail_to(&mut self, at: usize) {
        let target = self.node_at(at);
        let mut tail = self.tail.expect("cannot make an empty list cyclic");
        // SAFETY: `tail` is a live node of this list.
        unsafe { tail.as_mut().next = Some(target) };
    }

    /// Undo [`List::link_tail_to`], restoring the acyclic invariant.
    #[cfg(test)]
    pub(crate) fn unlink_tail(&mut self) {
        let mut tail = self.tail.expect("cannot unlink the tail of an empty list");
        // SAFETY: `tail` is a live node of this list.
        unsafe { tail.as_mut().next = None };
    }

    /// Assert every structural invariant of the list by walking the whole
    /// chain. Test-only, and must not be called on a cyclic fixture.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.head.is_none(), self.len == 0);
        assert_eq!(self.tail.is_none(), self.len == 0);
        let mut steps = 0;
        let mut last = None;
        let mut current = self.head;
        // SAFETY: the chain is acyclic by the caller's guarantee, and every
        // reachable node is live.
        unsafe {
            while let Some(node) = current {
                steps += 1;
                assert!(steps <= self.len, "the chain is longer than the cached length");
                last = current;
                current = node.as_ref().next;
            }
        }
        assert_eq!(steps, self.len);
        assert_eq!(last, self.tail);
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use forward_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// The chain is released iteratively, so dropping an arbitrarily long
    /// list does not overflow the stack.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head`, when present, points to a live node owned by this
        // list.
        self.head.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(1);
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `head`, when present, points to a live node owned by this
        // list, and `&mut self` guarantees exclusive access.
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail`, when present, aliases a live node of the chain.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(1);
    /// if let Some(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `tail`, when present, aliases a live node of the chain,
        // and `&mut self` guarantees exclusive access.
        self.tail.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Adds an element first in the list. The new node becomes the head; if
    /// the list was empty, it also becomes the tail.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let mut node = Node::new_detached(elt);
        // SAFETY: `node` is freshly allocated and detached, so writing its
        // successor link cannot alias any other node.
        unsafe { node.as_mut().next = self.head };
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), Err(Error::Empty));
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Err(Error::Empty));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::Empty)?;
        // SAFETY: `head` is the sole owning handle of the first node; after
        // `Box::from_raw` the node is never read through the list again.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        self.len -= 1;
        if self.head.is_none() {
            self.tail = None;
        }
        Ok(node.element)
    }

    /// Appends an element to the back of the list. The new node becomes the
    /// tail; if the list was empty, it also becomes the head.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time, using the tail pointer.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        match self.tail {
            // SAFETY: `tail` aliases the live last node of the chain, whose
            // successor link is absent before this write.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes the last element from the list and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time: the list is singly
    /// linked, so it must traverse to the penultimate node.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), Err(Error::Empty));
    ///
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Ok(3));
    /// assert_eq!(list.pop_back(), Ok(1));
    /// assert!(list.is_empty());
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        if self.len < 2 {
            return self.pop_front();
        }
        let mut prev = self.node_at(self.len - 2);
        // SAFETY: `prev` is the penultimate node, so its successor is the
        // tail and `prev.next` is the sole owning handle to it.
        unsafe {
            let tail = prev.as_ref().next.expect("the penultimate node has a successor");
            let node = Box::from_raw(tail.as_ptr());
            prev.as_mut().next = None;
            self.tail = Some(prev);
            self.len -= 1;
            Ok(node.element)
        }
    }

    /// Provides a reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `at < len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.get(1), Ok(&2));
    /// assert_eq!(list.get(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn get(&self, at: usize) -> Result<&T> {
        self.check_index(at, false)?;
        let node = self.node_at(at);
        // SAFETY: `node` is a live node owned by this list, and the
        // returned reference borrows `self`.
        Ok(unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `at < len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// *list.get_mut(1).unwrap() = 20;
    /// assert_eq!(list.to_vec(), vec![1, 20, 3]);
    /// ```
    pub fn get_mut(&mut self, at: usize) -> Result<&mut T> {
        self.check_index(at, false)?;
        let node = self.node_at(at);
        // SAFETY: `node` is a live node owned by this list, and `&mut self`
        // guarantees exclusive access for the returned borrow.
        Ok(unsafe { &mut (*node.as_ptr()).element })
    }

    /// Replaces the element at the given index in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `at < len`, in which case the
    /// list is unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.set(1, 777).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 777, 3]);
    /// assert!(list.set(3, 0).is_err());
    /// ```
    pub fn set(&mut self, at: usize, elt: T) -> Result<()> {
        *self.get_mut(at)? = elt;
        Ok(())
    }

    /// Adds an element at the given index in the list.
    ///
    /// The valid range is `0..=len`; inserting at `len` is an append. The
    /// boundary cases delegate to [`push_front`] and [`push_back`], so they
    /// keep their *O*(1) cost.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `at > len`, in which case the list
    /// is unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, traversing to the
    /// node before `at`.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.insert(2, 4).unwrap();
    /// list.insert(4, 5).unwrap();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 3, 5]);
    /// ```
    ///
    /// [`push_front`]: List::push_front
    /// [`push_back`]: List::push_back
    pub fn insert(&mut self, at: usize, elt: T) -> Result<()> {
        self.check_index(at, true)?;
        if at == 0 {
            self.push_front(elt);
            return Ok(());
        }
        if at == self.len {
            self.push_back(elt);
            return Ok(());
        }
        let mut prev = self.node_at(at - 1);
        let mut node = Node::new_detached(elt);
        // SAFETY: `prev` is a live node of this list and `node` is freshly
        // detached; relinking splices `node` between `prev` and its
        // successor without touching any other node.
        unsafe {
            node.as_mut().next = prev.as_ref().next;
            prev.as_mut().next = Some(node);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the element at the given index and returns it, updating the
    /// tail pointer when the removed node was the last one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `at < len`, in which case the
    /// list is unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([3, 2, 1]);
    ///
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.remove(0), Ok(3));
    /// assert_eq!(list.remove(0), Ok(1));
    /// assert!(list.remove(0).is_err());
    /// ```
    pub fn remove(&mut self, at: usize) -> Result<T> {
        self.check_index(at, false)?;
        if at == 0 {
            return self.pop_front();
        }
        let mut prev = self.node_at(at - 1);
        // SAFETY: `at` is a valid element index past 0, so `prev` has a
        // successor, and `prev.next` is the sole owning handle to it.
        unsafe {
            let target = prev.as_ref().next.expect("a valid index implies a successor");
            let node = Box::from_raw(target.as_ptr());
            prev.as_mut().next = node.next;
            self.len -= 1;
            if node.next.is_none() {
                self.tail = Some(prev);
            }
            Ok(node.element)
        }
    }

    /// Removes the first node whose element equals `x`, and returns whether
    /// a removal occurred.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 2]);
    ///
    /// assert!(list.remove_value(&2));
    /// assert_eq!(list.to_vec(), vec![1, 3, 2]);
    ///
    /// assert!(!list.remove_value(&4));
    /// ```
    pub fn remove_value(&mut self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        let head = match self.head {
            Some(head) => head,
            None => return false,
        };
        // SAFETY: the walk follows successor links of live nodes; the
        // removed node is released through its sole owning handle.
        unsafe {
            if (*head.as_ptr()).element == *x {
                return self.pop_front().is_ok();
            }
            let mut prev = head;
            let mut current = head.as_ref().next;
            while let Some(node) = current {
                if node.as_ref().element == *x {
                    let removed = Box::from_raw(node.as_ptr());
                    prev.as_mut().next = removed.next;
                    self.len -= 1;
                    if removed.next.is_none() {
                        self.tail = Some(prev);
                    }
                    return true;
                }
                prev = node;
                current = node.as_ref().next;
            }
        }
        false
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Allocate a detached node with the given element. The returned
    /// pointer is the sole owning handle of the allocation until it is
    /// linked into a list.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            element,
        })))
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::list::List;
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    fn list_eq<T, I>(list: &List<T>, expected: I)
    where
        T: Debug + Clone + Eq,
        I: IntoIterator<Item = T>,
    {
        list.assert_invariants();
        assert_eq!(
            Vec::from_iter(list.iter().cloned()),
            Vec::from_iter(expected)
        );
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
        list.assert_invariants();
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), Err(Error::Empty));
        assert_eq!(list.pop_back(), Err(Error::Empty));

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Err(Error::Empty));
        assert!(list.is_empty());
        list.assert_invariants();

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_back(), Ok(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        list.assert_invariants();
    }

    #[test]
    fn list_tail_tracks_push_and_pop() {
        let mut list = List::new();
        list.push_front(1);
        assert_eq!(list.back(), Some(&1));
        list.push_back(2);
        assert_eq!(list.back(), Some(&2));
        assert_eq!(list.pop_back(), Ok(2));
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_back(), Ok(1));
        assert_eq!(list.back(), None);
        list.assert_invariants();
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = List::from_iter(0..10);
        list.insert(5, 10).unwrap();
        list_eq(&list, (0..5).chain(Some(10)).chain(5..10));

        assert_eq!(list.remove(10), Ok(9));
        assert_eq!(list.back(), Some(&8));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(0, 11).unwrap();
        assert_eq!(list.front(), Some(&11));
        list_eq(&list, (11..=11).chain((0..5).chain(Some(10)).chain(5..9)));

        assert_eq!(list.remove(0), Ok(11));
        assert_eq!(list.front(), Some(&0));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(10, 12).unwrap();
        assert_eq!(list.back(), Some(&12));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9).chain(Some(12)));
    }

    #[test]
    fn list_insert_then_get() {
        let mut list = List::from_iter(0..5);
        for at in 0..=list.len() {
            list.insert(at, 100 + at).unwrap();
            assert_eq!(list.get(at), Ok(&(100 + at)));
        }
        list.assert_invariants();
    }

    #[test]
    fn list_get_and_set() {
        let mut list = List::from_iter([1, 2, 3]);
        assert_eq!(list.get(0), Ok(&1));
        assert_eq!(list.get(2), Ok(&3));
        assert_eq!(list.get(3), Err(Error::OutOfRange { index: 3, len: 3 }));

        list.set(1, 777).unwrap();
        list_eq(&list, [1, 777, 3]);
        assert_eq!(list.set(3, 0), Err(Error::OutOfRange { index: 3, len: 3 }));
        list_eq(&list, [1, 777, 3]);
    }

    #[test]
    fn list_out_of_range_is_a_no_op() {
        let mut list = List::from_iter([1, 2, 3]);
        assert_eq!(
            list.insert(4, 9),
            Err(Error::OutOfRange { index: 4, len: 3 })
        );
        assert_eq!(list.remove(3), Err(Error::OutOfRange { index: 3, len: 3 }));
        list_eq(&list, [1, 2, 3]);
    }

    #[test]
    fn list_remove_value() {
        let mut list = List::from_iter([1, 2, 3, 2]);
        assert!(list.remove_value(&2));
        list_eq(&list, [1, 3, 2]);

        // removing the tail must re-point the tail alias
        assert!(list.remove_value(&2));
        assert_eq!(list.back(), Some(&3));
        list_eq(&list, [1, 3]);

        assert!(!list.remove_value(&4));
        list_eq(&list, [1, 3]);

        assert!(list.remove_value(&1));
        assert!(list.remove_value(&3));
        assert!(!list.remove_value(&3));
        assert!(list.is_empty());
        list.assert_invariants();
    }

    #[test]
    fn list_sole_element_removal_resets_both_ends() {
        let mut list = List::from_iter([7]);
        assert_eq!(list.remove(0), Ok(7));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        list.assert_invariants();

        let mut list = List::from_iter([7]);
        assert!(list.remove_value(&7));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        list.assert_invariants();
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(0..100);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.assert_invariants();
        // the list is reusable after clearing
        list.push_back(1);
        list_eq(&list, [1]);
    }
}
