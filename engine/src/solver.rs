//! Backward-induction search for the equilibrium draft order.
//!
//! The recursion explores every candidate at every turn with no pruning or
//! memoization: a candidate is hypothetically claimed, the rest of the game
//! resolved, the mover's composite elimination probability read off the
//! resolved roster, and the claim rolled back before the next sibling runs.
//! The minimizing pick is marked in the decision tree, the marked path is
//! replayed into the draft state with alternating movers, and the single
//! leftover player goes to team B.
//!
//! The recursion borrows the one `DraftState` for the duration of a
//! subtree and restores it before returning control to its caller; the
//! tree is append-only and handed back to the caller for inspection.

use log::{debug, trace};
use rayon::prelude::*;

use crate::draft::{DraftState, Roster, Team};
use crate::error::SolverError;
use crate::node::{DecisionTree, NodeId, ROOT};
use crate::prob;

/// Validated draft parameters.
///
/// The caller guarantees `n > 2` and even, `m > 0`, distinct captains,
/// both in `[0, n)`. The engine does not re-validate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraftConfig {
    /// Number of players in the pool, captains included.
    pub n: usize,
    /// Elimination-sensitivity coefficient.
    pub m: f64,
    /// Strength (pool index) of team A's captain.
    pub captain_a: usize,
    /// Strength (pool index) of team B's captain.
    pub captain_b: usize,
}

/// A solved draft: the full roster plus the explored decision tree with
/// the equilibrium path marked.
#[derive(Debug, Clone)]
pub struct Solution {
    pub roster: Roster,
    pub tree: DecisionTree,
}

/// Team on the clock for a given unclaimed count: odd counts are B's
/// turns, even counts A's. Counted down from `n - 2` this alternates the
/// movers with A making both the first pick and the final two-player
/// decision.
fn mover(unclaimed: usize) -> Team {
    if unclaimed % 2 == 1 {
        Team::B
    } else {
        Team::A
    }
}

/// Position of the smallest score; the first occurrence wins ties.
fn index_of_smallest(scores: &[f64]) -> usize {
    let mut best = 0;
    for (position, &score) in scores.iter().enumerate().skip(1) {
        if score < scores[best] {
            best = position;
        }
    }
    best
}

/// Compute the sequential-equilibrium draft for `config`.
pub fn solve(config: &DraftConfig) -> Result<Solution, SolverError> {
    let mut state = DraftState::new(config.n, config.captain_a, config.captain_b);
    let mut tree = DecisionTree::new();
    resolve(config, &mut state, &mut tree, ROOT, config.n - 2)?;
    let roster = state.roster()?;
    Ok(Solution { roster, tree })
}

/// Solve the same pool once per sensitivity value, in parallel. Each solve
/// owns a private state and tree and is internally sequential, so the
/// results are deterministic regardless of scheduling.
pub fn sweep(
    n: usize,
    captain_a: usize,
    captain_b: usize,
    sensitivities: &[f64],
) -> Vec<(f64, Result<Solution, SolverError>)> {
    sensitivities
        .par_iter()
        .map(|&m| {
            let config = DraftConfig {
                n,
                m,
                captain_a,
                captain_b,
            };
            (m, solve(&config))
        })
        .collect()
}

/// Resolve the draft below `node`. On entry exactly `unclaimed` players
/// are unclaimed; on return every player is claimed. The caller is
/// responsible for rolling the state back.
fn resolve(
    config: &DraftConfig,
    state: &mut DraftState,
    tree: &mut DecisionTree,
    node: NodeId,
    unclaimed: usize,
) -> Result<(), SolverError> {
    debug_assert_eq!(
        state.unclaimed_len(),
        unclaimed,
        "unclaimed count out of sync with recursion depth"
    );

    let left = state.unclaimed();
    tree.attach_candidates(node, &left);

    if unclaimed == 2 {
        return resolve_last_pair(config, state, tree, node, &left);
    }

    let team = mover(unclaimed);
    let mut scores = Vec::with_capacity(left.len());
    for (position, &candidate) in left.iter().enumerate() {
        trace!("{unclaimed} players left, {team} tries {candidate}");
        let child = tree.get(node).expect("invalid node id").children()[position];
        state.claim(candidate, team);
        resolve(config, state, tree, child, unclaimed - 1)?;

        // Score the mover against the fully resolved roster of this branch.
        let strength_a = state.team_strength(Team::A);
        let strength_b = state.team_strength(Team::B);
        scores.push(prob::elimination(
            team,
            config.n,
            config.m,
            config.captain_a,
            config.captain_b,
            strength_a,
            strength_b,
        ));

        // Roll the whole branch back: every player that was unclaimed on
        // entry is unclaimed again before the next sibling runs.
        for &player in &left {
            state.release(player);
        }
    }

    let best = index_of_smallest(&scores);
    tree.mark_equilibrium(node, best);
    debug!("{unclaimed} players left, {team} takes {}", left[best]);

    apply_equilibrium_path(state, tree, node, team)?;
    state.claim_remaining(Team::B)?;
    Ok(())
}

/// Final decision: exactly two unclaimed players, team A on the clock. A
/// keeps whichever candidate leaves it the smaller elimination probability
/// (ties go to the lower-strength candidate) and the other player goes to
/// team B. Resolved directly; the two candidate nodes stay leaves.
fn resolve_last_pair(
    config: &DraftConfig,
    state: &mut DraftState,
    tree: &mut DecisionTree,
    node: NodeId,
    left: &[usize],
) -> Result<(), SolverError> {
    let strength_a = state.team_strength(Team::A);
    let strength_b = state.team_strength(Team::B);

    let score = |keep: usize, other: usize| {
        prob::elimination(
            Team::A,
            config.n,
            config.m,
            config.captain_a,
            config.captain_b,
            strength_a + keep as u32,
            strength_b + other as u32,
        )
    };
    let first = score(left[0], left[1]);
    let second = score(left[1], left[0]);

    let position = if first <= second { 0 } else { 1 };
    let keep = left[position];
    let other = left[1 - position];
    tree.mark_equilibrium(node, position);
    state.claim(keep, Team::A);
    state.claim(other, Team::B);
    trace!("2 players left, {} chooses {keep}", Team::A);
    trace!("1 player left, {} chooses {other}", Team::B);
    Ok(())
}

/// Claim every pick on the marked path below `node` for the alternating
/// mover, starting with the team that chose at `node`. The replay walks
/// the tree only; the leftover fixup (`claim_remaining`) inspects the
/// state only.
fn apply_equilibrium_path(
    state: &mut DraftState,
    tree: &DecisionTree,
    node: NodeId,
    first_mover: Team,
) -> Result<(), SolverError> {
    let picks = tree.replay_path(node)?;
    let mut team = first_mover;
    for player in picks {
        state.claim(player, team);
        team = team.opponent();
    }
    Ok(())
}
