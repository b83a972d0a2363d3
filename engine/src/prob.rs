//! Contest probability model.
//!
//! Pure functions over team strengths; no state. The quantity a choosing
//! captain minimizes is `elimination`: the probability their team loses
//! the inter-team contest times the probability they personally perform
//! worst inside their own team.

use crate::draft::Team;

/// Probability that `team` loses the inter-team strength contest.
///
/// `strength_a` and `strength_b` are the two team sums. The contest is
/// degenerate when both are zero; valid configurations rule that out
/// (captains have distinct indices), so it fails loudly.
pub fn prob_loss(team: Team, strength_a: u32, strength_b: u32) -> f64 {
    let total = strength_a + strength_b;
    assert!(total > 0, "degenerate contest: both team strengths are zero");
    match team {
        Team::A => f64::from(strength_b) / f64::from(total),
        Team::B => f64::from(strength_a) / f64::from(total),
    }
}

/// Probability that `team`'s captain performs worst in the individual
/// contest: `(N - m * indivStrength) / (N^2/2 - m * teamStrength)`.
///
/// `team_strength` may be a realized sum or a hypothetical extension
/// (current sum plus a candidate); the formula only sees the total, so
/// both call shapes agree whenever the effective strength is equal.
pub fn prob_worst(
    team: Team,
    n: usize,
    m: f64,
    captain_a: usize,
    captain_b: usize,
    team_strength: u32,
) -> f64 {
    let indiv = match team {
        Team::A => captain_a,
        Team::B => captain_b,
    } as f64;
    let n = n as f64;
    (n - m * indiv) / (n * n / 2.0 - m * f64::from(team_strength))
}

/// Composite elimination probability for `team`, the quantity every
/// choosing captain minimizes. The `prob_worst` factor is evaluated
/// against the mover's own team strength.
pub fn elimination(
    team: Team,
    n: usize,
    m: f64,
    captain_a: usize,
    captain_b: usize,
    strength_a: u32,
    strength_b: u32,
) -> f64 {
    let own = match team {
        Team::A => strength_a,
        Team::B => strength_b,
    };
    prob_loss(team, strength_a, strength_b) * prob_worst(team, n, m, captain_a, captain_b, own)
}
