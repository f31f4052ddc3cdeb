//! A rooted, ordered n-ary tree. Every [`Node`] owns its children outright,
//! so the tree is built top-down and torn down recursively when the root is
//! dropped. Searches come in two flavors: a pre-order depth-first walk and a
//! level-order breadth-first walk, both driven by a caller-supplied stop
//! predicate.
//!
//! # Examples
//!
//! ```
//! use ntree::tree::Node;
//!
//! let mut tree = Node::new("a");
//! let b = tree.add_child("b");
//! b.add_child("d");
//! b.add_child("e");
//! tree.add_child("c");
//!
//! // Depth-first visits a node before any of its descendants.
//! let mut visited = Vec::new();
//! tree.traverse(|node| {
//!     visited.push(*node.value());
//!     false
//! });
//! assert_eq!(visited, ["a", "b", "d", "e", "c"]);
//!
//! // Breadth-first visits whole levels at a time.
//! let mut visited = Vec::new();
//! tree.traverse_breadth_first(|node| {
//!     visited.push(*node.value());
//!     false
//! });
//! assert_eq!(visited, ["a", "b", "c", "d", "e"]);
//! ```

use std::collections::VecDeque;

/// A node of a rooted, ordered n-ary tree. It holds a value and an ordered,
/// growable list of child nodes, all exclusively owned by this node. A tree
/// is just its root `Node`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    children: Vec<Node<T>>,
}

impl<T> Default for Node<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Node<T> {
    /// Generates a new `Node` holding the given value, with no children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Returns a reference to the value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns this node's children, in insertion order.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Creates a new node holding the given value and appends it as the last
    /// child of this node. The returned reference points at the new child
    /// (not at `self`), so deeper paths can be built by chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use ntree::tree::Node;
    ///
    /// let mut tree = Node::new(1);
    /// tree.add_child(2).add_child(3);
    ///
    /// assert_eq!(*tree.children()[0].value(), 2);
    /// assert_eq!(*tree.children()[0].children()[0].value(), 3);
    /// ```
    pub fn add_child(&mut self, value: T) -> &mut Self {
        self.children.push(Self::new(value));
        // The push above makes the list non-empty.
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Walks the tree in pre-order depth-first order, applying `predicate`
    /// to each node, and returns the first node for which it returns `true`.
    /// No further nodes are visited after a match. Returns `None` when no
    /// node in the tree satisfies the predicate.
    ///
    /// The predicate is evaluated on a node before any of its descendants,
    /// and children are visited left-to-right, so a `true` on the root
    /// returns the root without visiting anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use ntree::tree::Node;
    ///
    /// let mut tree = Node::new(1);
    /// tree.add_child(2).add_child(4);
    /// tree.add_child(3);
    ///
    /// let node = tree.traverse(|n| *n.value() % 2 == 0);
    /// assert_eq!(node.map(|n| *n.value()), Some(2));
    ///
    /// assert!(tree.traverse(|n| *n.value() > 4).is_none());
    /// ```
    pub fn traverse<F>(&self, mut predicate: F) -> Option<&Self>
    where
        F: FnMut(&Self) -> bool,
    {
        self.walk(&mut predicate)
    }

    /// Recursive helper for [`traverse`][Self::traverse] so the public
    /// method can take the predicate by value.
    fn walk<F>(&self, predicate: &mut F) -> Option<&Self>
    where
        F: FnMut(&Self) -> bool,
    {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.walk(predicate))
    }

    /// Walks the tree in level order, applying `predicate` to each node, and
    /// returns the first node for which it returns `true`. Returns `None`
    /// when the whole tree is exhausted without a match.
    ///
    /// Level order means the root is visited first, then every child of the
    /// root in insertion order, then every grandchild, and so on: all nodes
    /// at depth `k` before any node at depth `k + 1`. The walk keeps a FIFO
    /// queue seeded with the root; each visited node that doesn't match
    /// enqueues its children in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ntree::tree::Node;
    ///
    /// let mut tree = Node::new(1);
    /// tree.add_child(2).add_child(4);
    /// tree.add_child(3);
    ///
    /// // Depth-first would reach 4 before 3; level order doesn't.
    /// let node = tree.traverse_breadth_first(|n| *n.value() > 2);
    /// assert_eq!(node.map(|n| *n.value()), Some(3));
    /// ```
    pub fn traverse_breadth_first<F>(&self, mut predicate: F) -> Option<&Self>
    where
        F: FnMut(&Self) -> bool,
    {
        let mut queue = VecDeque::new();
        queue.push_back(self);

        while let Some(node) = queue.pop_front() {
            if predicate(node) {
                return Some(node);
            }
            queue.extend(node.children.iter());
        }

        None
    }

    /// Potentially finds a node holding the given value, searching in
    /// pre-order depth-first order. If no node holds the value, `None` is
    /// returned. Duplicate values are allowed in a tree; this returns the
    /// first one in pre-order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ntree::tree::Node;
    ///
    /// let mut tree = Node::new(1);
    /// tree.add_child(2);
    ///
    /// assert!(tree.find(&2).is_some());
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Self>
    where
        T: PartialEq,
    {
        self.traverse(|node| node.value == *value)
    }
}
