//! Steepest-descent hill climbing over the Manhattan distance, plus a
//! random-restart wrapper.
//!
//! Each iteration scores every neighbor and moves to the strictly best
//! improving one. Strict improvement means the heuristic value decreases on
//! every step, so a single attempt can never loop even though no visited-set
//! is kept. A state with no strictly improving neighbor is a local optimum,
//! a failure cause distinct from running out of the iteration budget.
use crate::engine::{Board, Move};
use crate::heuristics::manhattan_distance;
use crate::report::{Diagnostics, SearchReport, Termination};

/// One hill-climbing attempt with an iteration budget.
///
/// `nodes_expanded` counts generated neighbors (at most four per iteration).
/// The attempt is fully deterministic: neighbors are scored in `Move::ALL`
/// order and the first of several equally-best improvements wins.
pub fn hill_climbing(start: &Board, goal: &Board, max_iterations: u32) -> SearchReport {
    if start == goal {
        return SearchReport::trivial();
    }

    let mut current = *start;
    let mut current_h = manhattan_distance(&current, goal);
    let mut path: Vec<(Move, Board)> = Vec::new();
    let mut expanded = 0usize;

    for iteration in 0..max_iterations {
        if current == *goal {
            return SearchReport::solved(
                path,
                expanded,
                Diagnostics::HillClimbing {
                    iterations: iteration,
                    final_h: 0,
                },
            );
        }

        let neighbors = current.successors();
        expanded += neighbors.len();

        let mut best: Option<(Move, Board, u32)> = None;
        let mut best_h = current_h;
        for (mv, neighbor) in neighbors {
            let h = manhattan_distance(&neighbor, goal);
            if h < best_h {
                best_h = h;
                best = Some((mv, neighbor, h));
            }
        }

        match best {
            Some((mv, neighbor, h)) => {
                path.push((mv, neighbor));
                current = neighbor;
                current_h = h;
            }
            None => {
                return SearchReport::failed(
                    Termination::LocalOptimum,
                    expanded,
                    Diagnostics::HillClimbing {
                        iterations: iteration + 1,
                        final_h: current_h,
                    },
                );
            }
        }
    }

    SearchReport::failed(
        Termination::IterationLimit,
        expanded,
        Diagnostics::HillClimbing {
            iterations: max_iterations,
            final_h: current_h,
        },
    )
}

/// Runs up to `restarts` independent hill-climbing attempts, returning the
/// first success; when every attempt fails, the one that ended with the
/// lowest heuristic value is returned as the best effort.
pub fn hill_climbing_with_restart(
    start: &Board,
    goal: &Board,
    restarts: u32,
    max_iterations: u32,
) -> SearchReport {
    let mut best: Option<SearchReport> = None;

    for attempt in 1..=restarts {
        let result = hill_climbing(start, goal, max_iterations);
        if result.solution_found {
            return with_restart_diagnostics(result, attempt);
        }
        let is_better = match (&best, final_h_of(&result)) {
            (None, _) => true,
            (Some(kept), Some(h)) => final_h_of(kept).map_or(true, |kept_h| h < kept_h),
            (Some(_), None) => false,
        };
        if is_better {
            best = Some(result);
        }
    }

    match best {
        Some(result) => with_restart_diagnostics(result, restarts),
        None => SearchReport::failed(
            Termination::IterationLimit,
            0,
            Diagnostics::Restarts {
                attempts: 0,
                iterations: 0,
                final_h: manhattan_distance(start, goal),
            },
        ),
    }
}

fn final_h_of(report: &SearchReport) -> Option<u32> {
    match report.diagnostics {
        Diagnostics::HillClimbing { final_h, .. } => Some(final_h),
        _ => None,
    }
}

fn with_restart_diagnostics(mut report: SearchReport, attempts: u32) -> SearchReport {
    if let Diagnostics::HillClimbing {
        iterations,
        final_h,
    } = report.diagnostics
    {
        report.diagnostics = Diagnostics::Restarts {
            attempts,
            iterations,
            final_h,
        };
    }
    report
}
