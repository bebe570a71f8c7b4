//! An AVL tree of unique, totally ordered keys. Besides the usual balanced
//! insertion and removal, the tree exposes unbalanced variants that skip the
//! rotations, which makes it possible to build and study degenerate trees.
//! Every mutation is split into a raw structural change, which records the
//! nodes it visited, and a bottom-up pass over that record which refreshes
//! the cached heights and balance factors and, for the balanced variants,
//! rotates where needed.
//!
//! Alongside the tree live a few tools for exercising it: a random unique
//! key generator, a Graphviz renderer, and a driver which runs a sequence of
//! inserts and removals while checking the tree after every step.

pub mod avl_tree;
pub mod check;
pub mod error;
pub mod graph;
pub mod keys;
pub mod node;
pub mod path;

pub use avl_tree::AvlTree;
pub use error::Error;
pub use node::{Node, NodeSnapshot};
