//! schoolyard CLI - Command-line driver for the draft equilibrium solver
//!
//! Validates parameters, runs the solver, and prints the final roster,
//! optionally with the explored decision tree. The engine assumes its
//! inputs are valid, so every precondition is enforced here before the
//! solver is called.

use anyhow::Result;
use clap::Parser;
use log::info;
use thiserror::Error;

use schoolyard_engine::draft::Team;
use schoolyard_engine::solver::{self, DraftConfig, Solution};

#[derive(Debug, Parser)]
#[command(
    name = "schoolyard",
    version,
    about = "Equilibrium draft order for the two-captain schoolyard pick"
)]
struct Args {
    /// Number of players in the pool, captains included (even, > 2).
    n: usize,

    /// Elimination-sensitivity coefficient (> 0).
    m: f64,

    /// Strength (pool index) of team A's captain. A picks first.
    captain_a: usize,

    /// Strength (pool index) of team B's captain.
    captain_b: usize,

    /// Print the explored decision tree after the roster.
    #[arg(long)]
    tree: bool,

    /// Solve once per listed sensitivity value instead of a single solve,
    /// reporting each equilibrium pick order.
    #[arg(long, value_name = "M", num_args = 1..)]
    sweep: Option<Vec<f64>>,
}

/// A rejected parameter. These never reach the engine.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
enum ConfigError {
    #[error("N must be greater than 2")]
    PoolTooSmall,
    #[error("N must be even")]
    PoolOdd,
    #[error("m must be greater than 0")]
    NonPositiveSensitivity,
    #[error("A and B must have distinct strengths")]
    EqualCaptains,
    #[error("A's strength must lie between 0 and N-1, inclusive")]
    CaptainAOutOfRange,
    #[error("B's strength must lie between 0 and N-1, inclusive")]
    CaptainBOutOfRange,
}

fn validate(args: &Args) -> Result<DraftConfig, ConfigError> {
    if args.n <= 2 {
        return Err(ConfigError::PoolTooSmall);
    }
    if args.n % 2 != 0 {
        return Err(ConfigError::PoolOdd);
    }
    if args.m <= 0.0 {
        return Err(ConfigError::NonPositiveSensitivity);
    }
    if args.captain_a == args.captain_b {
        return Err(ConfigError::EqualCaptains);
    }
    if args.captain_a >= args.n {
        return Err(ConfigError::CaptainAOutOfRange);
    }
    if args.captain_b >= args.n {
        return Err(ConfigError::CaptainBOutOfRange);
    }
    if let Some(sensitivities) = &args.sweep {
        if sensitivities.iter().any(|&m| m <= 0.0) {
            return Err(ConfigError::NonPositiveSensitivity);
        }
    }
    Ok(DraftConfig {
        n: args.n,
        m: args.m,
        captain_a: args.captain_a,
        captain_b: args.captain_b,
    })
}

fn print_roster(solution: &Solution) {
    println!("Final roster:");
    for (player, team) in solution.roster.iter() {
        println!("{player}: {team}");
    }
}

fn run_sweep(config: &DraftConfig, sensitivities: &[f64]) -> Result<()> {
    for (m, outcome) in solver::sweep(
        config.n,
        config.captain_a,
        config.captain_b,
        sensitivities,
    ) {
        let solution = outcome?;
        let order = schoolyard_tree::render_equilibrium(&solution.tree)?;
        let team_a = solution.roster.members(Team::A);
        println!("m = {m}: picks {order}; team A = {team_a:?}");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = validate(&args)?;

    if let Some(sensitivities) = &args.sweep {
        return run_sweep(&config, sensitivities);
    }

    info!(
        "solving draft: N={} m={} A={} B={}",
        config.n, config.m, config.captain_a, config.captain_b
    );
    let solution = solver::solve(&config)?;
    print_roster(&solution);
    if args.tree {
        println!("Decision tree:");
        print!("{}", schoolyard_tree::render(&solution.tree));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(n: usize, m: f64, captain_a: usize, captain_b: usize) -> Args {
        Args {
            n,
            m,
            captain_a,
            captain_b,
            tree: false,
            sweep: None,
        }
    }

    #[test]
    fn test_validate_accepts_reference_parameters() {
        let config = validate(&args(4, 1.0, 0, 1)).unwrap();
        assert_eq!(config.n, 4);
        assert_eq!(config.captain_b, 1);
    }

    #[test]
    fn test_validate_rejects_small_pool() {
        assert_eq!(validate(&args(2, 1.0, 0, 1)), Err(ConfigError::PoolTooSmall));
    }

    #[test]
    fn test_validate_rejects_odd_pool() {
        assert_eq!(validate(&args(5, 1.0, 0, 1)), Err(ConfigError::PoolOdd));
    }

    #[test]
    fn test_validate_rejects_nonpositive_sensitivity() {
        assert_eq!(
            validate(&args(4, 0.0, 0, 1)),
            Err(ConfigError::NonPositiveSensitivity)
        );
        assert_eq!(
            validate(&args(4, -1.5, 0, 1)),
            Err(ConfigError::NonPositiveSensitivity)
        );
    }

    #[test]
    fn test_validate_rejects_equal_captains() {
        assert_eq!(validate(&args(4, 1.0, 3, 3)), Err(ConfigError::EqualCaptains));
    }

    #[test]
    fn test_validate_rejects_out_of_range_captains() {
        assert_eq!(
            validate(&args(4, 1.0, 4, 1)),
            Err(ConfigError::CaptainAOutOfRange)
        );
        assert_eq!(
            validate(&args(4, 1.0, 0, 9)),
            Err(ConfigError::CaptainBOutOfRange)
        );
    }

    #[test]
    fn test_validate_rejects_nonpositive_sweep_values() {
        let mut invalid = args(6, 1.0, 0, 1);
        invalid.sweep = Some(vec![1.0, 0.0]);
        assert_eq!(validate(&invalid), Err(ConfigError::NonPositiveSensitivity));
    }
}
