//! # Eight Puzzle Solver Library
//!
//! This library explores the state space of the 3x3 sliding-tile puzzle with
//! a family of interchangeable search strategies and reports comparable
//! metrics (solution length, nodes expanded) through one uniform result
//! record.
//!
//! It is used by two binaries:
//! - `solve`: Runs a single strategy on a board pair and prints its report.
//! - `compare`: Sweeps every strategy over the named benchmark cases and
//!   prints a metrics table.
//!
//! ## Modules
//! - `engine`: The board representation (`Board`), blank moves (`Move`), and
//!   the node arena (`SearchTree`) every strategy shares for bookkeeping and
//!   path reconstruction.
//! - `heuristics`: Manhattan distance, misplaced tiles and linear conflict,
//!   plus the `Heuristic` selector.
//! - `report`: The uniform `SearchReport` record, termination causes and
//!   external search limits.
//! - `uninformed`: BFS, depth-limited DFS, IDS and UCS.
//! - `astar`: A* parameterized by the heuristic.
//! - `hill_climbing`: Steepest-descent local search with a restart wrapper.
//! - `genetic`: A genetic algorithm over move-sequence chromosomes.
//! - `utils`: Board parsing, the solvability check and named benchmark cases.

pub mod astar;
pub mod engine;
pub mod genetic;
pub mod heuristics;
pub mod hill_climbing;
pub mod report;
pub mod uninformed;
pub mod utils;
