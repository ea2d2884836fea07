//! Doubly linked list threaded through a sentinel root.
//!
//! Nodes live in an arena and link to each other by slot index. Slot 0 is the
//! sentinel: `root.next` is the front element and `root.prev` the back one, so
//! an empty list is a ring of one node and every insertion or unlink is the
//! same four index writes with no head/tail special cases.
//!
//! Callers address elements through [`NodeHandle`]s. A handle records the id of
//! the list that issued it and the generation of its slot; any operation given
//! a handle from another list, or one whose element was already removed, is a
//! no-op.

use std::fmt;
use std::iter::FusedIterator;
use std::sync::atomic::{AtomicU64, Ordering};

/// Arena slot of the sentinel root.
const ROOT: usize = 0;

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

fn next_list_id() -> u64 {
    NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed)
}

/// Stable reference to an element of a [`LinkedList`].
///
/// Handles are plain values: copying one does not copy the element, and a
/// handle outliving its element is harmless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    /// Id of the issuing list (membership check only)
    list: u64,
    index: usize,
    generation: u64,
}

#[derive(Debug)]
struct Node<T> {
    prev: usize,
    next: usize,
    /// Bumped each time the slot is vacated
    generation: u64,
    /// `None` for the sentinel and for free slots
    value: Option<T>,
}

impl<T> Node<T> {
    fn sentinel() -> Self {
        Self {
            prev: ROOT,
            next: ROOT,
            generation: 0,
            value: None,
        }
    }
}

/// Doubly linked list with O(1) push, remove, and move operations.
pub struct LinkedList<T> {
    id: u64,
    nodes: Vec<Node<T>>,
    /// Vacated slots available for reuse
    free: Vec<usize>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            id: next_list_id(),
            nodes: vec![Node::sentinel()],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node::sentinel());
        Self {
            id: next_list_id(),
            nodes,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Resets the list to an empty ring, dropping every element.
    ///
    /// Handles issued before the reset no longer refer to this list.
    pub fn init(&mut self) {
        self.id = next_list_id();
        self.nodes.truncate(1);
        self.nodes[ROOT] = Node::sentinel();
        self.free.clear();
        self.len = 0;
    }

    /// Returns the number of elements. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first element's handle, or `None` if the list is empty.
    pub fn front(&self) -> Option<NodeHandle> {
        if self.len == 0 {
            return None;
        }
        Some(self.handle(self.nodes[ROOT].next))
    }

    /// Returns the last element's handle, or `None` if the list is empty.
    pub fn back(&self) -> Option<NodeHandle> {
        if self.len == 0 {
            return None;
        }
        Some(self.handle(self.nodes[ROOT].prev))
    }

    /// Returns the element after `node`, or `None` at the back or for a foreign handle.
    pub fn next(&self, node: NodeHandle) -> Option<NodeHandle> {
        let next = self.nodes[self.slot(node)?].next;
        (next != ROOT).then(|| self.handle(next))
    }

    /// Returns the element before `node`, or `None` at the front or for a foreign handle.
    pub fn prev(&self, node: NodeHandle) -> Option<NodeHandle> {
        let prev = self.nodes[self.slot(node)?].prev;
        (prev != ROOT).then(|| self.handle(prev))
    }

    /// Returns true if `node` refers to a live element of this list.
    pub fn contains(&self, node: NodeHandle) -> bool {
        self.slot(node).is_some()
    }

    /// Returns a reference to the element behind `node`.
    pub fn get(&self, node: NodeHandle) -> Option<&T> {
        let index = self.slot(node)?;
        self.nodes[index].value.as_ref()
    }

    /// Returns a mutable reference to the element behind `node`.
    pub fn get_mut(&mut self, node: NodeHandle) -> Option<&mut T> {
        let index = self.slot(node)?;
        self.nodes[index].value.as_mut()
    }

    /// Inserts `value` at the front and returns its handle.
    pub fn push_front(&mut self, value: T) -> NodeHandle {
        self.insert_value(value, ROOT)
    }

    /// Inserts `value` at the back and returns its handle.
    pub fn push_back(&mut self, value: T) -> NodeHandle {
        let at = self.nodes[ROOT].prev;
        self.insert_value(value, at)
    }

    /// Inserts `value` immediately before `mark`.
    ///
    /// Returns `None` and leaves the list untouched if `mark` is not a live element.
    pub fn insert_before(&mut self, value: T, mark: NodeHandle) -> Option<NodeHandle> {
        let at = self.nodes[self.slot(mark)?].prev;
        Some(self.insert_value(value, at))
    }

    /// Inserts `value` immediately after `mark`.
    ///
    /// Returns `None` and leaves the list untouched if `mark` is not a live element.
    pub fn insert_after(&mut self, value: T, mark: NodeHandle) -> Option<NodeHandle> {
        let at = self.slot(mark)?;
        Some(self.insert_value(value, at))
    }

    /// Unlinks `node` and returns its value.
    ///
    /// Returns `None` if `node` is foreign to this list or already removed;
    /// callers must not assume a removal happened.
    pub fn remove(&mut self, node: NodeHandle) -> Option<T> {
        let index = self.slot(node)?;
        self.unlink(index);

        let slot = &mut self.nodes[index];
        let value = slot.value.take();
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        self.len -= 1;
        value
    }

    /// Moves `node` to the front. No-op if already there or foreign.
    pub fn move_to_front(&mut self, node: NodeHandle) {
        let Some(index) = self.slot(node) else {
            return;
        };
        if self.nodes[ROOT].next == index {
            return;
        }
        self.unlink(index);
        self.link_after(index, ROOT);
    }

    /// Moves `node` to the back. No-op if already there or foreign.
    pub fn move_to_back(&mut self, node: NodeHandle) {
        let Some(index) = self.slot(node) else {
            return;
        };
        if self.nodes[ROOT].prev == index {
            return;
        }
        self.unlink(index);
        let at = self.nodes[ROOT].prev;
        self.link_after(index, at);
    }

    /// Moves `node` to just before `mark`. No-op if either is foreign or they are equal.
    pub fn move_before(&mut self, node: NodeHandle, mark: NodeHandle) {
        let (Some(index), Some(mark)) = (self.slot(node), self.slot(mark)) else {
            return;
        };
        if index == mark {
            return;
        }
        self.unlink(index);
        let at = self.nodes[mark].prev;
        self.link_after(index, at);
    }

    /// Moves `node` to just after `mark`. No-op if either is foreign or they are equal.
    pub fn move_after(&mut self, node: NodeHandle, mark: NodeHandle) {
        let (Some(index), Some(mark)) = (self.slot(node), self.slot(mark)) else {
            return;
        };
        if index == mark {
            return;
        }
        self.unlink(index);
        self.link_after(index, mark);
    }

    /// Iterates front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.nodes[ROOT].next,
            back: self.nodes[ROOT].prev,
            remaining: self.len,
        }
    }

    /// Resolves a handle to its arena slot if it is a live element of this list.
    fn slot(&self, node: NodeHandle) -> Option<usize> {
        if node.list != self.id || node.index == ROOT {
            return None;
        }
        let slot = self.nodes.get(node.index)?;
        (slot.generation == node.generation && slot.value.is_some()).then_some(node.index)
    }

    fn handle(&self, index: usize) -> NodeHandle {
        NodeHandle {
            list: self.id,
            index,
            generation: self.nodes[index].generation,
        }
    }

    fn insert_value(&mut self, value: T, at: usize) -> NodeHandle {
        let index = match self.free.pop() {
            Some(index) => {
                self.nodes[index].value = Some(value);
                index
            }
            None => {
                self.nodes.push(Node {
                    prev: ROOT,
                    next: ROOT,
                    generation: 0,
                    value: Some(value),
                });
                self.nodes.len() - 1
            }
        };
        self.link_after(index, at);
        self.len += 1;
        self.handle(index)
    }

    /// Splices `index` in after `at`.
    fn link_after(&mut self, index: usize, at: usize) {
        let next = self.nodes[at].next;
        self.nodes[index].prev = at;
        self.nodes[index].next = next;
        self.nodes[at].next = index;
        self.nodes[next].prev = index;
    }

    /// Splices `index` out and points its links at the sentinel.
    fn unlink(&mut self, index: usize) {
        let (prev, next) = (self.nodes[index].prev, self.nodes[index].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[index].prev = ROOT;
        self.nodes[index].next = ROOT;
    }
}

impl<T: Clone> LinkedList<T> {
    /// Appends a copy of every element of `other`, in order.
    pub fn extend_back_from(&mut self, other: &LinkedList<T>) {
        for value in other.iter() {
            self.push_back(value.clone());
        }
    }

    /// Prepends a copy of every element of `other`, keeping its order.
    pub fn extend_front_from(&mut self, other: &LinkedList<T>) {
        for value in other.iter().rev() {
            self.push_front(value.clone());
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        node.value.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
