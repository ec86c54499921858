//! This crate exposes an ordered symbol table backed by an AVL tree.
//!
//! ## Ordered Symbol Table
//!
//! A symbol table associates a value with each key and supports inserting,
//! finding, and deleting entries. An *ordered* symbol table additionally
//! keeps its keys in sorted order, which unlocks queries that a hash table
//! cannot answer: smallest and largest key, the number of keys below a given
//! key (its *rank*), and all keys in a range, in ascending order.
//!
//! The implementation here is an AVL tree, a self-balancing Binary Search
//! Tree. The important invariants are:
//!
//! 1. For every `Node`, all keys in its left subtree compare less than its
//!    own key and all keys in its right subtree compare greater
//!    (the *symmetric order* property).
//! 2. For every `Node`, the heights of its left and right subtrees differ
//!    by at most one (the *AVL* property).
//!
//! The second invariant is restored after every insertion or deletion with
//! at most two local rotations per level, which keeps the height of the tree
//! logarithmic in the number of entries. Searches, updates, and the ordered
//! queries above all run in `O(lg N)`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod map;

#[cfg(test)]
mod test;
