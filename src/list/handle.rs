use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::list::{List, Node};

/// A non-owning handle to one node of a [`List`].
///
/// A `NodeRef` is what the node-yielding queries ([`find`], [`middle`],
/// [`cycle_start`]) return. It borrows the list immutably, so the list
/// cannot be mutated while a handle is live, and the node it designates
/// stays valid for the handle's whole lifetime.
///
/// Unlike a plain `&T`, equality of handles is *node identity*: two handles
/// are equal iff they designate the same node, even when distinct nodes
/// hold equal elements. This is what makes the handle useful as a result of
/// structural queries.
///
/// # Examples
///
/// ```
/// use forward_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 1]);
///
/// // Both nodes hold equal elements, but they are different nodes.
/// let first = list.find(&1).unwrap();
/// let last = list.nth_from_end(1).unwrap();
/// assert_eq!(first.get(), last);
///
/// // `find` returns the handle of the *first* equal node.
/// assert_eq!(first, list.find(&1).unwrap());
/// ```
///
/// [`List`]: crate::List
/// [`find`]: crate::List::find
/// [`middle`]: crate::List::middle
/// [`cycle_start`]: crate::List::cycle_start
pub struct NodeRef<'a, T: 'a> {
    node: NonNull<Node<T>>,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> NodeRef<'a, T> {
    pub(crate) fn new(node: NonNull<Node<T>>) -> Self {
        Self {
            node,
            _marker: PhantomData,
        }
    }

    /// Provides a reference to the element held by the designated node.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(["a", "b", "c"]);
    /// let handle = list.find(&"b").unwrap();
    /// assert_eq!(handle.get(), &"b");
    /// ```
    pub fn get(&self) -> &'a T {
        // SAFETY: the handle borrows the list for 'a, so the designated
        // node stays live and unaliased by mutation for that long.
        unsafe { &(*self.node.as_ptr()).element }
    }
}

impl<'a, T: 'a> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for NodeRef<'a, T> {}

/// Compare handles by node identity, not element equality.
impl<'a, T: 'a> PartialEq for NodeRef<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<'a, T: 'a> Eq for NodeRef<'a, T> {}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for NodeRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(self.get()).finish()
    }
}
