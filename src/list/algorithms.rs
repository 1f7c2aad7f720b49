use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::ptr::NonNull;

use crate::error::{Error, Result};
use crate::list::handle::NodeRef;
use crate::list::{List, Node};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given
    /// value.
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
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns the index of the first element equal to the given value, or
    /// `None` if no element is equal.
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
    /// let list = List::from_iter([1, 2, 3, 2]);
    /// assert_eq!(list.index_of(&2), Some(1));
    /// assert_eq!(list.index_of(&4), None);
    /// ```
    pub fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.iter().position(|e| e == x)
    }

    /// Returns a handle to the first node whose element equals the given
    /// value, or `None` if no element is equal.
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
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.find(&2).unwrap().get(), &2);
    /// assert!(list.find(&4).is_none());
    /// ```
    pub fn find(&self, x: &T) -> Option<NodeRef<'_, T>>
    where
        T: PartialEq<T>,
    {
        let mut current = self.head;
        // SAFETY: the walk follows successor links of live nodes.
        unsafe {
            while let Some(node) = current {
                if node.as_ref().element == *x {
                    return Some(NodeRef::new(node));
                }
                current = node.as_ref().next;
            }
        }
        None
    }

    /// Reverses the list in place by flipping every successor link, with no
    /// extra allocation.
    ///
    /// The old head becomes the new tail, and the final `previous` pointer
    /// of the walk becomes the new head.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(list.to_vec(), vec![3, 2, 1]);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    pub fn reverse(&mut self) {
        let mut prev: Option<NonNull<Node<T>>> = None;
        let mut current = self.head;
        // the old head becomes the new tail
        self.tail = self.head;
        // SAFETY: every visited node is a live node of this list; each
        // successor link is read once before being overwritten, so every
        // node keeps exactly one owner.
        unsafe {
            while let Some(mut node) = current {
                let next = node.as_ref().next;
                node.as_mut().next = prev;
                prev = current;
                current = next;
            }
        }
        self.head = prev;
    }

    /// Returns a handle to the middle node, or `None` if the list is empty.
    ///
    /// Uses the slow/fast pointer technique: `slow` advances by one node
    /// and `fast` by two per step, until `fast` exhausts the chain. For an
    /// even-length list this yields the *second* of the two middle nodes,
    /// i.e. the node at index `len / 2`.
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
    /// let list = List::from_iter([1, 2, 3, 4, 5]);
    /// assert_eq!(list.middle().unwrap().get(), &3);
    ///
    /// let list = List::from_iter([1, 2, 3, 4]);
    /// assert_eq!(list.middle().unwrap().get(), &3); // second middle
    ///
    /// assert!(List::<i32>::new().middle().is_none());
    /// ```
    pub fn middle(&self) -> Option<NodeRef<'_, T>> {
        let mut slow = self.head?;
        let mut fast = self.head?;
        // SAFETY: both pointers only follow successor links of live nodes,
        // and `slow` stays strictly behind `fast`, so advancing it after a
        // double step of `fast` cannot fall off the chain.
        unsafe {
            while let Some(next) = fast.as_ref().next {
                match next.as_ref().next {
                    Some(next2) => {
                        fast = next2;
                        slow = slow.as_ref().next.expect("slow trails fast");
                    }
                    None => {
                        // even length: one single step remains
                        slow = slow.as_ref().next.expect("slow trails fast");
                        break;
                    }
                }
            }
        }
        Some(NodeRef::new(slow))
    }

    /// Returns a reference to the `n`-th element counted from the end,
    /// 1-indexed: `n == 1` is the last element and `n == len` the first.
    ///
    /// Uses a lead/follow two-pointer scheme: `lead` advances `n` steps
    /// first, then both pointers advance together until `lead` exhausts;
    /// `follow` then designates the target node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `n < 1`, and
    /// [`Error::OutOfRange`] if `n > len`.
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
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.nth_from_end(1), Ok(&3));
    /// assert_eq!(list.nth_from_end(3), Ok(&1));
    /// assert!(list.nth_from_end(0).is_err());
    /// assert!(list.nth_from_end(4).is_err());
    /// ```
    pub fn nth_from_end(&self, n: usize) -> Result<&T> {
        if n < 1 {
            return Err(Error::InvalidArgument("n must be at least 1"));
        }
        if n > self.len() {
            return Err(Error::OutOfRange {
                index: n,
                len: self.len(),
            });
        }
        // SAFETY: `1 <= n <= len`, so `lead` stays within the chain during
        // its head start, and `follow` trails it by exactly `n` nodes.
        unsafe {
            let mut lead = self.head;
            for _ in 0..n {
                lead = lead.expect("n is at most the length").as_ref().next;
            }
            let mut follow = self.head.expect("n >= 1 implies a non-empty list");
            while let Some(node) = lead {
                lead = node.as_ref().next;
                follow = follow.as_ref().next.expect("follow trails lead");
            }
            Ok(&(*follow.as_ptr()).element)
        }
    }

    /// Removes every node whose element has already appeared earlier in the
    /// list, in a single forward pass. First occurrences keep their
    /// relative order, and the tail pointer is updated when the removed
    /// node was the tail.
    ///
    /// Equality is element equality, not node identity; the pass keeps a
    /// set of previously seen elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time with *O*(*n*)
    /// auxiliary space for the seen-set.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 2, 2, 3, 3]);
    /// list.dedup();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn dedup(&mut self)
    where
        T: Eq + Hash,
    {
        let mut seen: HashSet<&T> = HashSet::with_capacity(self.len());
        let mut prev: Option<NonNull<Node<T>>> = None;
        let mut current = self.head;
        while let Some(node) = current {
            // SAFETY: the borrows stored in `seen` are field projections of
            // nodes that are *kept*; only nodes absent from `seen` are
            // released, so no stored borrow ever dangles. The relink writes
            // touch only `next` fields, never a borrowed `element`.
            unsafe {
                let element: &T = &(*node.as_ptr()).element;
                if seen.contains(element) {
                    let prev_node = prev.expect("a first occurrence is never a duplicate");
                    let removed = Box::from_raw(node.as_ptr());
                    // write through a field projection so the borrows of
                    // kept elements in `seen` stay untouched
                    (*prev_node.as_ptr()).next = removed.next;
                    self.len -= 1;
                    if removed.next.is_none() {
                        self.tail = prev;
                    }
                    current = removed.next;
                } else {
                    seen.insert(element);
                    prev = current;
                    current = node.as_ref().next;
                }
            }
        }
    }

    /// Returns `true` if following successor links from the head ever
    /// revisits a node.
    ///
    /// Floyd's cycle detection: a slow and a fast pointer advance by one
    /// and two nodes per step; they meet iff the chain is cyclic, and the
    /// walk terminates when `fast` (or its successor) is absent.
    ///
    /// This is a diagnostic utility: a list built solely through the public
    /// API never contains a cycle, since no operation ever points a
    /// successor link back into an earlier node.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert!(!list.has_cycle());
    /// ```
    pub fn has_cycle(&self) -> bool {
        let mut slow = self.head;
        let mut fast = self.head;
        // SAFETY: the pointers only follow successor links of live nodes;
        // on a cyclic chain they revisit nodes but never leave the chain.
        unsafe {
            loop {
                let next = match fast {
                    Some(node) => node.as_ref().next,
                    None => return false,
                };
                fast = match next {
                    Some(node) => node.as_ref().next,
                    None => return false,
                };
                slow = slow.and_then(|node| node.as_ref().next);
                if slow == fast {
                    return true;
                }
            }
        }
    }

    /// Returns a handle to the node where the cycle begins, or `None` if
    /// the chain is acyclic.
    ///
    /// Runs Floyd's algorithm to find a meeting point inside the cycle,
    /// then resets one pointer to the head and advances both in lockstep;
    /// the node where they coincide is the cycle's entry point.
    ///
    /// Like [`has_cycle`], this is a diagnostic utility: well-formed lists
    /// built through the public API never contain cycles.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert!(list.cycle_start().is_none());
    /// ```
    ///
    /// [`has_cycle`]: List::has_cycle
    pub fn cycle_start(&self) -> Option<NodeRef<'_, T>> {
        // Phase 1: find a meeting point inside the cycle, if any.
        let mut slow = self.head;
        let mut fast = self.head;
        // SAFETY: as in `has_cycle`, the pointers never leave the chain.
        let meeting = unsafe {
            loop {
                fast = fast?.as_ref().next;
                fast = fast?.as_ref().next;
                slow = slow.and_then(|node| node.as_ref().next);
                if slow == fast {
                    break slow?;
                }
            }
        };
        // Phase 2: advance from the head and from the meeting point in
        // lockstep; inside a cycle every node has a successor.
        // SAFETY: `meeting` lies inside the cycle, and the head leads into
        // it, so neither pointer can reach an absent link.
        unsafe {
            let mut from_head = self.head?;
            let mut from_meeting = meeting;
            while from_head != from_meeting {
                from_head = from_head.as_ref().next.expect("the head leads into the cycle");
                from_meeting = from_meeting
                    .as_ref()
                    .next
                    .expect("the meeting point lies inside the cycle");
            }
            Some(NodeRef::new(from_head))
        }
    }
}
