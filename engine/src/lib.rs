//! schoolyard Engine - Core draft equilibrium solver
//!
//! This crate contains the core solver for the two-captain schoolyard pick:
//! the contest probability model, the mutable draft state, the decision tree
//! built during the search, and the backward-induction recursion itself.
//!
//! The engine is platform-agnostic and has zero UI dependencies. Parameter
//! validation and all rendering live in the schoolyard-cli and
//! schoolyard-tree crates; the engine assumes validated inputs and never
//! writes to stdout.

pub mod draft;
pub mod error;
pub mod node;
pub mod prob;
pub mod solver;
