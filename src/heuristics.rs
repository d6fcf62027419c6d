//! Heuristic estimates of the remaining distance to a goal board.
//!
//! Every function takes the board under evaluation and the goal board and
//! returns a non-negative estimate of the number of moves still needed. All
//! three are admissible, so A* with any of them returns optimal paths.
use std::fmt;
use std::str::FromStr;

use crate::engine::{Board, CELLS, SIDE};

/// Goal position of every tile value, indexed by the value itself.
fn goal_positions(goal: &Board) -> [(usize, usize); CELLS] {
    let mut positions = [(0, 0); CELLS];
    for r in 0..SIDE {
        for c in 0..SIDE {
            positions[goal.tile(r, c) as usize] = (r, c);
        }
    }
    positions
}

/// Sum over non-blank tiles of the row plus column distance to the tile's
/// goal cell. Admissible and consistent.
///
/// # Examples
///
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::heuristics::manhattan_distance;
///
/// let board = Board::from_grid([[1, 2, 3], [4, 0, 5], [7, 8, 6]]).unwrap();
/// let goal = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
/// assert_eq!(manhattan_distance(&board, &goal), 2);
/// ```
pub fn manhattan_distance(board: &Board, goal: &Board) -> u32 {
    let positions = goal_positions(goal);
    let mut distance = 0u32;
    for r in 0..SIDE {
        for c in 0..SIDE {
            let tile = board.tile(r, c);
            if tile != 0 {
                let (gr, gc) = positions[tile as usize];
                distance += r.abs_diff(gr) as u32 + c.abs_diff(gc) as u32;
            }
        }
    }
    distance
}

/// Number of non-blank tiles not on their goal cell. Admissible and
/// consistent, but a weaker bound than Manhattan distance.
pub fn misplaced_tiles(board: &Board, goal: &Board) -> u32 {
    let mut count = 0u32;
    for r in 0..SIDE {
        for c in 0..SIDE {
            let tile = board.tile(r, c);
            if tile != 0 && tile != goal.tile(r, c) {
                count += 1;
            }
        }
    }
    count
}

/// Manhattan distance plus 2 per linear conflict: a pair of tiles that share
/// a row (or column) with the goal, both belong in that row (or column), but
/// sit in reversed relative order. Each such pair costs at least one extra
/// detour move. Still admissible.
pub fn linear_conflict(board: &Board, goal: &Board) -> u32 {
    let positions = goal_positions(goal);
    let mut distance = manhattan_distance(board, goal);

    for r in 0..SIDE {
        // Goal columns of the tiles already in their goal row, left to right.
        let mut goal_cols = Vec::with_capacity(SIDE);
        for c in 0..SIDE {
            let tile = board.tile(r, c);
            if tile != 0 {
                let (gr, gc) = positions[tile as usize];
                if gr == r {
                    goal_cols.push(gc);
                }
            }
        }
        distance += 2 * reversed_pairs(&goal_cols);
    }

    for c in 0..SIDE {
        let mut goal_rows = Vec::with_capacity(SIDE);
        for r in 0..SIDE {
            let tile = board.tile(r, c);
            if tile != 0 {
                let (gr, gc) = positions[tile as usize];
                if gc == c {
                    goal_rows.push(gr);
                }
            }
        }
        distance += 2 * reversed_pairs(&goal_rows);
    }

    distance
}

fn reversed_pairs(targets: &[usize]) -> u32 {
    let mut pairs = 0u32;
    for i in 0..targets.len() {
        for j in i + 1..targets.len() {
            if targets[i] > targets[j] {
                pairs += 1;
            }
        }
    }
    pairs
}

/// Caller-selectable heuristic for the informed strategies and the binaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    Manhattan,
    Misplaced,
    LinearConflict,
}

impl Heuristic {
    pub fn evaluate(&self, board: &Board, goal: &Board) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan_distance(board, goal),
            Heuristic::Misplaced => misplaced_tiles(board, goal),
            Heuristic::LinearConflict => linear_conflict(board, goal),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Misplaced => "misplaced",
            Heuristic::LinearConflict => "linear-conflict",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manhattan" => Ok(Heuristic::Manhattan),
            "misplaced" => Ok(Heuristic::Misplaced),
            "linear-conflict" => Ok(Heuristic::LinearConflict),
            other => Err(format!(
                "Unknown heuristic '{}'. Expected manhattan, misplaced or linear-conflict",
                other
            )),
        }
    }
}
