//! A* search, parameterized by the heuristic.
//!
//! Best-first expansion of the lowest `f = g + h` node. Because every
//! heuristic in [`crate::heuristics`] is admissible and consistent, a board
//! whose key is already closed can be discarded outright when regenerated;
//! no re-opening is needed, and the returned path length is optimal.
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::engine::{Board, Node, SearchTree};
use crate::heuristics::Heuristic;
use crate::report::{Diagnostics, SearchLimits, SearchReport, Termination};

/// A* from `start` to `goal` with the selected heuristic.
pub fn astar(start: &Board, goal: &Board, heuristic: Heuristic) -> SearchReport {
    astar_with_limits(start, goal, heuristic, &SearchLimits::UNBOUNDED)
}

/// [`astar`] with an external expansion cap.
///
/// Decrease-key uses the same lazy-deletion discipline as UCS: improving the
/// cost of an open board pushes a fresh heap entry (with the new parent
/// link), and a popped entry whose `g` is worse than the open map's
/// best-known cost is discarded as stale. Ties on `f` break by insertion
/// order so identical inputs always reproduce the same run.
pub fn astar_with_limits(
    start: &Board,
    goal: &Board,
    heuristic: Heuristic,
    limits: &SearchLimits,
) -> SearchReport {
    if start == goal {
        return SearchReport::trivial();
    }

    let mut tree = SearchTree::new();
    let mut root = Node::root(*start);
    root.h = heuristic.evaluate(start, goal);
    root.f = root.h;
    let root_id = tree.push(root);

    let mut heap: BinaryHeap<Reverse<(u32, u64, usize)>> = BinaryHeap::new();
    let mut sequence = 0u64;
    heap.push(Reverse((root.f, sequence, root_id)));

    let mut best_g: HashMap<u32, u32> = HashMap::new();
    best_g.insert(start.key(), 0);
    let mut closed: HashSet<u32> = HashSet::new();
    let mut expanded = 0usize;

    while let Some(Reverse((_, _, id))) = heap.pop() {
        let node = *tree.node(id);
        let key = node.board.key();
        if closed.contains(&key) {
            continue;
        }
        if best_g.get(&key).map_or(true, |&known| node.g > known) {
            // Stale entry superseded by a cheaper route.
            continue;
        }
        if node.board == *goal {
            return SearchReport::solved(tree.path_to(id), expanded, Diagnostics::None);
        }
        closed.insert(key);
        if limits.exhausted(expanded) {
            return SearchReport::failed(Termination::ExpansionLimit, expanded, Diagnostics::None);
        }
        expanded += 1;

        for (mv, child_board) in node.board.successors() {
            let child_key = child_board.key();
            if closed.contains(&child_key) {
                continue;
            }
            let child_g = node.g + 1;
            if best_g.get(&child_key).map_or(false, |&known| known <= child_g) {
                continue;
            }
            best_g.insert(child_key, child_g);

            let mut child = Node::child(id, node.g, mv, child_board);
            child.h = heuristic.evaluate(&child_board, goal);
            child.f = child.g + child.h;
            let child_id = tree.push(child);
            sequence += 1;
            heap.push(Reverse((child.f, sequence, child_id)));
        }
    }

    SearchReport::failed(Termination::FrontierExhausted, expanded, Diagnostics::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Move, SIDE};
    use crate::uninformed::bfs;

    fn board(grid: [[u8; SIDE]; SIDE]) -> Board {
        Board::from_grid(grid).unwrap()
    }

    fn goal() -> Board {
        board([[1, 2, 3], [4, 5, 6], [7, 8, 0]])
    }

    fn assert_path_replays(start: &Board, goal: &Board, path: &[(Move, Board)]) {
        let mut current = *start;
        for (mv, expected) in path {
            let next = current.apply(*mv).expect("path contains an illegal move");
            assert_eq!(&next, expected);
            current = next;
        }
        assert_eq!(&current, goal);
    }

    #[test]
    fn test_astar_easy_case_both_heuristics() {
        let start = board([[1, 2, 3], [4, 0, 5], [7, 8, 6]]);
        for heuristic in [Heuristic::Manhattan, Heuristic::Misplaced] {
            let report = astar(&start, &goal(), heuristic);
            assert!(report.solution_found);
            assert_eq!(report.path_length, 2);
            assert_path_replays(&start, &goal(), &report.path);
        }
    }

    #[test]
    fn test_astar_matches_bfs_on_hard_case() {
        let start = board([[0, 1, 3], [4, 2, 5], [7, 8, 6]]);
        let bfs_report = bfs(&start, &goal());
        for heuristic in [
            Heuristic::Manhattan,
            Heuristic::Misplaced,
            Heuristic::LinearConflict,
        ] {
            let report = astar(&start, &goal(), heuristic);
            assert!(report.solution_found);
            assert_eq!(report.path_length, bfs_report.path_length);
            assert_eq!(report.path_length, 4);
        }
    }

    #[test]
    fn test_astar_trivial_when_start_equals_goal() {
        let report = astar(&goal(), &goal(), Heuristic::Manhattan);
        assert!(report.solution_found);
        assert!(report.path.is_empty());
        assert_eq!(report.nodes_expanded, 0);
    }

    #[test]
    fn test_astar_very_hard_case_optimal_and_cheaper_than_bfs() {
        let start = board([[8, 7, 6], [5, 4, 3], [2, 1, 0]]);
        let astar_report = astar(&start, &goal(), Heuristic::Manhattan);
        let bfs_report = bfs(&start, &goal());
        assert_eq!(astar_report.path_length, 31);
        assert_eq!(bfs_report.path_length, 31);
        assert!(astar_report.nodes_expanded < bfs_report.nodes_expanded);
        assert_path_replays(&start, &goal(), &astar_report.path);
    }

    #[test]
    fn test_astar_frontier_exhaustion_on_unsolvable_pair() {
        let start = board([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);
        let report = astar(&start, &goal(), Heuristic::Manhattan);
        assert!(!report.solution_found);
        assert_eq!(report.termination, Termination::FrontierExhausted);
    }

    #[test]
    fn test_astar_expansion_cap() {
        let start = board([[8, 7, 6], [5, 4, 3], [2, 1, 0]]);
        let report = astar_with_limits(
            &start,
            &goal(),
            Heuristic::Manhattan,
            &SearchLimits::expansions(4),
        );
        assert!(!report.solution_found);
        assert_eq!(report.termination, Termination::ExpansionLimit);
        assert_eq!(report.nodes_expanded, 4);
    }

    #[test]
    fn test_linear_conflict_dominates_manhattan_expansions() {
        let start = board([[8, 7, 6], [5, 4, 3], [2, 1, 0]]);
        let manhattan = astar(&start, &goal(), Heuristic::Manhattan);
        let conflict = astar(&start, &goal(), Heuristic::LinearConflict);
        assert_eq!(conflict.path_length, manhattan.path_length);
        assert!(conflict.nodes_expanded <= manhattan.nodes_expanded);
    }
}
