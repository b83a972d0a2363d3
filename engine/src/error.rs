//! Error taxonomy for the solver core.
//!
//! Only internal-consistency failures live here: defects in state rollback
//! or tree bookkeeping that a correct implementation never produces. Tests
//! assert that `solve` never returns them for any valid configuration.
//! Parameter validation happens in the CLI before the engine is called, so
//! configuration errors have no representation in this crate.

use crate::node::NodeId;
use thiserror::Error;

/// A defect in the solver's own bookkeeping.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// The count of unclaimed players disagrees with what this point in
    /// the draft requires. Indicates a sibling branch that was not rolled
    /// back (or was rolled back twice).
    #[error("expected {expected} unclaimed player(s), found {found}")]
    LeftoverMismatch { expected: usize, found: usize },

    /// A non-leaf node on the replay path has no equilibrium-marked child.
    #[error("no equilibrium-marked child under node {node}")]
    MissingEquilibriumChild { node: NodeId },
}
