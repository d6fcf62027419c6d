use clap::Parser;
use eight_puzzle_solver::astar::astar;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::genetic::genetic_search;
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::hill_climbing::hill_climbing_with_restart;
use eight_puzzle_solver::report::SearchReport;
use eight_puzzle_solver::uninformed::{bfs, dfs, ids, ucs};
use eight_puzzle_solver::utils::{NamedCase, NAMED_CASES};
use std::time::Instant;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Also run the very_hard case (expensive for the uninformed strategies)
    #[clap(long)]
    all: bool,

    /// Depth limit for dfs and ids
    #[clap(long, default_value_t = 50)]
    max_depth: u32,
}

type StrategyFn = Box<dyn Fn(&Board, &Board) -> SearchReport>;

fn strategies(max_depth: u32) -> Vec<(&'static str, StrategyFn)> {
    vec![
        ("bfs", Box::new(bfs)),
        (
            "dfs",
            Box::new(move |s: &Board, g: &Board| dfs(s, g, max_depth)),
        ),
        (
            "ids",
            Box::new(move |s: &Board, g: &Board| ids(s, g, max_depth)),
        ),
        ("ucs", Box::new(ucs)),
        (
            "astar-manhattan",
            Box::new(|s: &Board, g: &Board| astar(s, g, Heuristic::Manhattan)),
        ),
        (
            "astar-misplaced",
            Box::new(|s: &Board, g: &Board| astar(s, g, Heuristic::Misplaced)),
        ),
        (
            "hill-climbing",
            Box::new(|s: &Board, g: &Board| hill_climbing_with_restart(s, g, 10, 1000)),
        ),
        ("genetic", Box::new(genetic_search)),
    ]
}

fn run_case(case: &NamedCase, strategies: &[(&'static str, StrategyFn)]) {
    println!(
        "\nCase '{}' (optimal length {}):",
        case.name, case.optimal_length
    );
    println!(
        "  {:<16} {:>6} {:>6} {:>12} {:>10}",
        "strategy", "found", "length", "expanded", "time"
    );

    let start = case.start_board();
    let goal = case.goal_board();

    for (name, run) in strategies {
        let timer = Instant::now();
        let report = run(&start, &goal);
        let elapsed = timer.elapsed();
        println!(
            "  {:<16} {:>6} {:>6} {:>12} {:>9.4}s",
            name,
            if report.solution_found { "yes" } else { "no" },
            report.path_length,
            report.nodes_expanded,
            elapsed.as_secs_f64()
        );
    }
}

fn main() {
    let args = Args::parse();
    let strategies = strategies(args.max_depth);

    for case in NAMED_CASES.iter() {
        if case.name == "very_hard" && !args.all {
            println!("\nSkipping case 'very_hard' (pass --all to include it).");
            continue;
        }
        run_case(case, &strategies);
    }
}
