//! Uninformed search strategies: BFS, depth-limited DFS, IDS and UCS.
//!
//! All four drive the same successor generator and node arena from
//! [`crate::engine`] and return the uniform [`SearchReport`].
//!
//! Dedup policy for BFS and DFS: a board key is marked explored at
//! *expansion* time, when the node is popped. Duplicate keys may therefore
//! coexist in the frontier for a while; they are discarded unexpanded when
//! popped, so `nodes_expanded` counts distinct boards actually expanded.
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::engine::{Board, Node, SearchTree};
use crate::report::{Diagnostics, SearchLimits, SearchReport, Termination};

/// Breadth-first search. FIFO frontier; under unit step costs the first time
/// the goal is popped the path to it is optimal.
pub fn bfs(start: &Board, goal: &Board) -> SearchReport {
    bfs_with_limits(start, goal, &SearchLimits::UNBOUNDED)
}

/// [`bfs`] with an external expansion cap.
pub fn bfs_with_limits(start: &Board, goal: &Board, limits: &SearchLimits) -> SearchReport {
    if start == goal {
        return SearchReport::trivial();
    }

    let mut tree = SearchTree::new();
    let root = tree.push(Node::root(*start));
    let mut frontier = VecDeque::new();
    frontier.push_back(root);
    let mut explored: HashSet<u32> = HashSet::new();
    let mut expanded = 0usize;

    while let Some(id) = frontier.pop_front() {
        let board = tree.node(id).board;
        if board == *goal {
            return SearchReport::solved(tree.path_to(id), expanded, Diagnostics::None);
        }
        if !explored.insert(board.key()) {
            // A duplicate that entered the frontier before its twin was
            // expanded; drop it without counting.
            continue;
        }
        if limits.exhausted(expanded) {
            return SearchReport::failed(Termination::ExpansionLimit, expanded, Diagnostics::None);
        }
        expanded += 1;

        let g = tree.node(id).g;
        for (mv, child) in board.successors() {
            if !explored.contains(&child.key()) {
                let child_id = tree.push(Node::child(id, g, mv, child));
                frontier.push_back(child_id);
            }
        }
    }

    SearchReport::failed(Termination::FrontierExhausted, expanded, Diagnostics::None)
}

/// Depth-first search with a depth cutoff. Returns the first goal found,
/// which is valid but in general not optimal.
///
/// On failure the termination cause distinguishes a cutoff (`DepthLimit`,
/// at least one branch was pruned at `max_depth`) from genuine exhaustion of
/// the reachable space (`FrontierExhausted`).
pub fn dfs(start: &Board, goal: &Board, max_depth: u32) -> SearchReport {
    dfs_with_limits(start, goal, max_depth, &SearchLimits::UNBOUNDED)
}

/// [`dfs`] with an external expansion cap.
pub fn dfs_with_limits(
    start: &Board,
    goal: &Board,
    max_depth: u32,
    limits: &SearchLimits,
) -> SearchReport {
    if start == goal {
        return SearchReport::trivial();
    }

    let mut tree = SearchTree::new();
    let root = tree.push(Node::root(*start));
    let mut stack: Vec<(usize, u32)> = vec![(root, 0)];
    let mut explored: HashSet<u32> = HashSet::new();
    let mut expanded = 0usize;
    let mut cut_off = false;

    while let Some((id, depth)) = stack.pop() {
        let board = tree.node(id).board;
        if board == *goal {
            return SearchReport::solved(tree.path_to(id), expanded, Diagnostics::None);
        }
        if depth >= max_depth {
            cut_off = true;
            continue;
        }
        if !explored.insert(board.key()) {
            continue;
        }
        if limits.exhausted(expanded) {
            return SearchReport::failed(Termination::ExpansionLimit, expanded, Diagnostics::None);
        }
        expanded += 1;

        let g = tree.node(id).g;
        for (mv, child) in board.successors() {
            if !explored.contains(&child.key()) {
                let child_id = tree.push(Node::child(id, g, mv, child));
                stack.push((child_id, depth + 1));
            }
        }
    }

    let termination = if cut_off {
        Termination::DepthLimit
    } else {
        Termination::FrontierExhausted
    };
    SearchReport::failed(termination, expanded, Diagnostics::None)
}

/// Iterative deepening: depth-limited DFS re-run with limit 0, 1, 2, ... up
/// to `max_depth`, with a fresh explored structure per iteration and
/// `nodes_expanded` accumulated across iterations.
///
/// The explored structure records the shallowest depth each board was
/// expanded at, and a board rediscovered strictly shallower is expanded
/// again. Without that, a board first reached on a deep detour would block
/// the shallow route through it, and the smallest succeeding limit could
/// exceed the optimal length.
pub fn ids(start: &Board, goal: &Board, max_depth: u32) -> SearchReport {
    if start == goal {
        return SearchReport::trivial();
    }

    let mut total_expanded = 0usize;
    let mut last_cut_off = false;
    for limit in 0..=max_depth {
        let mut tree = SearchTree::new();
        let root = tree.push(Node::root(*start));
        let mut explored: HashMap<u32, u32> = HashMap::new();
        let mut expanded = 0usize;
        let mut cut_off = false;

        let found = depth_limited(
            &mut tree,
            goal,
            root,
            limit,
            &mut explored,
            &mut expanded,
            &mut cut_off,
        );
        total_expanded += expanded;
        last_cut_off = cut_off;

        if let Some(goal_id) = found {
            return SearchReport::solved(
                tree.path_to(goal_id),
                total_expanded,
                Diagnostics::Ids { depth_limit: limit },
            );
        }
        if !cut_off {
            // The deepest probe swept everything reachable without touching
            // its limit; deeper limits cannot find more.
            break;
        }
    }

    let termination = if last_cut_off {
        Termination::DepthLimit
    } else {
        Termination::FrontierExhausted
    };
    SearchReport::failed(termination, total_expanded, Diagnostics::None)
}

/// One depth-limited probe for [`ids`]. Returns the arena index of the goal
/// node when found within `depth_left` further moves.
fn depth_limited(
    tree: &mut SearchTree,
    goal: &Board,
    id: usize,
    depth_left: u32,
    explored: &mut HashMap<u32, u32>,
    expanded: &mut usize,
    cut_off: &mut bool,
) -> Option<usize> {
    let board = tree.node(id).board;
    if board == *goal {
        return Some(id);
    }
    if depth_left == 0 {
        *cut_off = true;
        return None;
    }

    let depth = tree.node(id).g;
    match explored.get(&board.key()) {
        Some(&seen) if seen <= depth => return None,
        _ => {
            explored.insert(board.key(), depth);
        }
    }
    *expanded += 1;

    for (mv, child) in board.successors() {
        let child_id = tree.push(Node::child(id, depth, mv, child));
        if let Some(goal_id) = depth_limited(
            tree,
            goal,
            child_id,
            depth_left - 1,
            explored,
            expanded,
            cut_off,
        ) {
            return Some(goal_id);
        }
    }
    None
}

/// Uniform-cost search: a min-heap keyed by path cost `g`, ties broken by
/// insertion order. Equivalent to BFS under this puzzle's unit costs but
/// written generically, with decrease-key handled by lazy deletion: when a
/// cheaper route to an open board appears, a fresh heap entry is pushed and
/// the stale one is discarded when popped (its `g` no longer matches the
/// open map's best-known cost).
pub fn ucs(start: &Board, goal: &Board) -> SearchReport {
    ucs_with_limits(start, goal, &SearchLimits::UNBOUNDED)
}

/// [`ucs`] with an external expansion cap.
pub fn ucs_with_limits(start: &Board, goal: &Board, limits: &SearchLimits) -> SearchReport {
    if start == goal {
        return SearchReport::trivial();
    }

    let mut tree = SearchTree::new();
    let root = tree.push(Node::root(*start));
    let mut heap: BinaryHeap<Reverse<(u32, u64, usize)>> = BinaryHeap::new();
    let mut sequence = 0u64;
    heap.push(Reverse((0, sequence, root)));

    // Best-known g per open board key; entries whose g is beaten are stale.
    let mut best_g: HashMap<u32, u32> = HashMap::new();
    best_g.insert(start.key(), 0);
    let mut closed: HashSet<u32> = HashSet::new();
    let mut expanded = 0usize;

    while let Some(Reverse((g, _, id))) = heap.pop() {
        let board = tree.node(id).board;
        let key = board.key();
        if closed.contains(&key) {
            continue;
        }
        if best_g.get(&key).map_or(true, |&known| g > known) {
            // Lazy deletion: a cheaper entry for this board was pushed later.
            continue;
        }
        if board == *goal {
            return SearchReport::solved(tree.path_to(id), expanded, Diagnostics::None);
        }
        closed.insert(key);
        if limits.exhausted(expanded) {
            return SearchReport::failed(Termination::ExpansionLimit, expanded, Diagnostics::None);
        }
        expanded += 1;

        for (mv, child) in board.successors() {
            let child_key = child.key();
            if closed.contains(&child_key) {
                continue;
            }
            let child_g = g + 1;
            if best_g.get(&child_key).map_or(false, |&known| known <= child_g) {
                continue;
            }
            best_g.insert(child_key, child_g);
            let child_id = tree.push(Node::child(id, g, mv, child));
            sequence += 1;
            heap.push(Reverse((child_g, sequence, child_id)));
        }
    }

    SearchReport::failed(Termination::FrontierExhausted, expanded, Diagnostics::None)
}
