//! The uniform result record every search strategy returns.
//!
//! A strategy is handed a start and a goal board and gives back one
//! `SearchReport`; reporting layers (the binaries here) only ever format this
//! record and never influence the search itself. All per-run statistics,
//! including the genetic algorithm's fitness history, live inside the report
//! so nothing outlives or is shared across calls.
use crate::engine::{Board, Move};

/// Why a search run ended. Failure causes are deliberately distinct so tests
/// and callers can tell "the space is exhausted" from "a cap fired" from
/// "hill climbing got stuck".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The goal board was reached.
    Goal,
    /// The frontier emptied without reaching the goal.
    FrontierExhausted,
    /// The depth cutoff pruned at least one branch and no solution was found
    /// within it.
    DepthLimit,
    /// The external expansion cap of [`SearchLimits`] fired.
    ExpansionLimit,
    /// Hill climbing ran out of its iteration budget.
    IterationLimit,
    /// The genetic algorithm ran out of generations.
    GenerationLimit,
    /// Hill climbing found no strictly improving neighbor.
    LocalOptimum,
}

/// Best and average population fitness for one generation of the genetic
/// algorithm. Elitism makes `best` non-decreasing across a run's history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationStats {
    pub best: f64,
    pub average: f64,
}

/// Strategy-specific extras attached to a report.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostics {
    /// Nothing beyond the common fields.
    None,
    /// Iterative deepening: the smallest depth limit that succeeded.
    Ids { depth_limit: u32 },
    /// Hill climbing: iterations executed and the heuristic value of the
    /// final board (0 on success).
    HillClimbing { iterations: u32, final_h: u32 },
    /// Restart wrapper around hill climbing: attempts consumed plus the
    /// retained attempt's own numbers.
    Restarts {
        attempts: u32,
        iterations: u32,
        final_h: u32,
    },
    /// Genetic algorithm: generations evaluated and the per-generation
    /// fitness history.
    Genetic {
        generations: u32,
        fitness_history: Vec<GenerationStats>,
    },
}

/// The record every strategy produces.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// Whether a goal-reaching path was produced.
    pub solution_found: bool,
    /// Moves from the start to the final board, excluding the start's own
    /// (non-existent) move. Goal-reaching when `solution_found`, otherwise a
    /// best-effort sequence (genetic algorithm) or empty.
    pub path: Vec<(Move, Board)>,
    /// Number of moves in `path`.
    pub path_length: usize,
    /// Nodes actually expanded (popped and had successors generated); for the
    /// genetic algorithm, fitness evaluations.
    pub nodes_expanded: usize,
    pub termination: Termination,
    pub diagnostics: Diagnostics,
}

impl SearchReport {
    /// Successful report around a reconstructed path.
    pub fn solved(
        path: Vec<(Move, Board)>,
        nodes_expanded: usize,
        diagnostics: Diagnostics,
    ) -> Self {
        SearchReport {
            solution_found: true,
            path_length: path.len(),
            path,
            nodes_expanded,
            termination: Termination::Goal,
            diagnostics,
        }
    }

    /// Immediate success for a search whose start already equals the goal:
    /// empty path, zero nodes expanded.
    pub fn trivial() -> Self {
        SearchReport::solved(Vec::new(), 0, Diagnostics::None)
    }

    /// Failure report with the given cause.
    pub fn failed(
        termination: Termination,
        nodes_expanded: usize,
        diagnostics: Diagnostics,
    ) -> Self {
        SearchReport {
            solution_found: false,
            path: Vec::new(),
            path_length: 0,
            nodes_expanded,
            termination,
            diagnostics,
        }
    }
}

/// External caps on a search run, polled at each node expansion.
///
/// The exhaustive strategies terminate only by finding the goal or emptying
/// the frontier, which on this puzzle's connected 181k-state graph can mean a
/// full sweep; the cap is the escape hatch for callers that want bounded
/// work. `None` means unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    /// No caps at all.
    pub const UNBOUNDED: SearchLimits = SearchLimits {
        max_expansions: None,
    };

    /// Cap on the number of node expansions.
    pub fn expansions(max: usize) -> Self {
        SearchLimits {
            max_expansions: Some(max),
        }
    }

    /// True once `expanded` has consumed the whole budget.
    pub fn exhausted(&self, expanded: usize) -> bool {
        self.max_expansions.map_or(false, |cap| expanded >= cap)
    }
}
