use clap::Parser;
use eight_puzzle_solver::astar::astar;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::genetic::genetic_search;
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::hill_climbing::hill_climbing_with_restart;
use eight_puzzle_solver::report::SearchReport;
use eight_puzzle_solver::uninformed::{bfs, dfs, ids, ucs};
use eight_puzzle_solver::utils::{board_from_str_rows, is_solvable, named_case};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Strategy to run: bfs, dfs, ids, ucs, astar, hill-climbing or genetic
    #[clap(short, long)]
    strategy: String,

    /// Heuristic for astar: manhattan, misplaced or linear-conflict
    #[clap(long, default_value = "manhattan")]
    heuristic: Heuristic,

    /// Depth limit for dfs and ids
    #[clap(long, default_value_t = 50)]
    max_depth: u32,

    /// Iteration budget per hill-climbing attempt
    #[clap(long, default_value_t = 1000)]
    max_iterations: u32,

    /// Restart budget for hill-climbing
    #[clap(long, default_value_t = 10)]
    restarts: u32,

    /// Run a named benchmark case (easy, medium, hard, very_hard) instead of
    /// reading a board file
    #[clap(long, conflicts_with = "board_file")]
    case: Option<String>,

    /// Board file: three rows of digits for the start board, then three rows
    /// for the goal board (blank lines ignored)
    board_file: Option<PathBuf>,
}

fn read_board_file(path: &PathBuf) -> Result<(Board, Board), String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    if lines.len() != 6 {
        return Err(format!(
            "Expected 6 non-empty lines (start board then goal board), found {}",
            lines.len()
        ));
    }

    let start = board_from_str_rows(&lines[..3])
        .map_err(|e| format!("Invalid start board: {}", e))?;
    let goal = board_from_str_rows(&lines[3..])
        .map_err(|e| format!("Invalid goal board: {}", e))?;
    Ok((start, goal))
}

fn load_boards(args: &Args) -> Result<(Board, Board), String> {
    if let Some(name) = &args.case {
        let case = named_case(name)
            .ok_or_else(|| format!("Unknown case '{}'. Expected easy, medium, hard or very_hard", name))?;
        return Ok((case.start_board(), case.goal_board()));
    }
    match &args.board_file {
        Some(path) => read_board_file(path),
        None => Err("Provide a board file or --case <name>".to_string()),
    }
}

fn run_strategy(args: &Args, start: &Board, goal: &Board) -> Result<SearchReport, String> {
    match args.strategy.as_str() {
        "bfs" => Ok(bfs(start, goal)),
        "dfs" => Ok(dfs(start, goal, args.max_depth)),
        "ids" => Ok(ids(start, goal, args.max_depth)),
        "ucs" => Ok(ucs(start, goal)),
        "astar" => Ok(astar(start, goal, args.heuristic)),
        "hill-climbing" => Ok(hill_climbing_with_restart(
            start,
            goal,
            args.restarts,
            args.max_iterations,
        )),
        "genetic" => Ok(genetic_search(start, goal)),
        other => Err(format!(
            "Unknown strategy '{}'. Expected bfs, dfs, ids, ucs, astar, hill-climbing or genetic",
            other
        )),
    }
}

fn main() {
    let args = Args::parse();

    let (start, goal) = load_boards(&args).expect("Failed to load boards");
    println!("Start board:\n{}\n", start);
    println!("Goal board:\n{}\n", goal);

    if !is_solvable(&start, &goal) {
        eprintln!("Warning: the goal is not reachable from this start (parity mismatch).");
    }

    println!("Running {}...\n", args.strategy);
    let timer = Instant::now();
    let report = run_strategy(&args, &start, &goal).expect("Failed to run strategy");
    let elapsed = timer.elapsed();

    if report.solution_found {
        println!("Solution found:");
        println!("  Path length:    {}", report.path_length);
        println!("  Nodes expanded: {}", report.nodes_expanded);
        println!("  Time:           {:.4}s", elapsed.as_secs_f64());
        if !report.path.is_empty() {
            let moves: Vec<String> = report.path.iter().map(|(m, _)| m.to_string()).collect();
            println!("  Moves:          {}", moves.join(", "));
        }
    } else {
        println!("No solution found ({:?}).", report.termination);
        println!("  Nodes expanded: {}", report.nodes_expanded);
        println!("  Time:           {:.4}s", elapsed.as_secs_f64());
    }
    println!("  Diagnostics:    {:?}", report.diagnostics);
}
