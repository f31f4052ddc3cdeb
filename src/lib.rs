//! This crate exposes a minimal rooted, ordered n-ary tree mostly as a
//! small reusable building block.
//!
//! ## N-ary Tree
//!
//! An n-ary tree is a data structure in which every `Node` holds a value
//! and an ordered list of child `Node`s. Unlike a search tree there is no
//! ordering relation between values; the only structural invariants are:
//!
//! 1. Every `Node` exclusively owns its children, so the structure is
//!    acyclic and dropping the root drops the whole tree.
//! 2. The children of a `Node` are kept in insertion order, and every
//!    traversal observes that order exactly.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The interesting operations are the traversals. A *pre-order depth-first*
//! traversal visits a node before any of its descendants and recurses into
//! children left-to-right; a *level-order breadth-first* traversal visits
//! every node at depth `k` before any node at depth `k + 1`. Both take a
//! caller-supplied predicate and stop at the first node (in their respective
//! order) for which it returns `true`, so a search over a tree of `N` nodes
//! is `O(N)` in the worst case but returns as early as the predicate allows.
//! Value search is a thin equality predicate over the depth-first walk.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod tree;
