//! Boundary helpers: text parsing, the solvability check, and the named
//! benchmark cases the binaries run.
use crate::engine::{Board, SIDE};

/// Parses three rows of three digits (0-8, 0 being the blank) into a board.
///
/// Whitespace inside a row is ignored, so both `"123"` and `"1 2 3"` work.
/// The permutation invariant (each of 0..=8 exactly once) is enforced by the
/// `Board` constructor, so duplicates and missing blanks are rejected here,
/// before any strategy runs.
///
/// # Examples
///
/// ```
/// use eight_puzzle_solver::utils::board_from_str_rows;
///
/// let board = board_from_str_rows(&["1 2 3", "4 0 5", "7 8 6"]).unwrap();
/// assert_eq!(board.tile(1, 1), 0);
/// assert!(board_from_str_rows(&["123", "405", "786"]).is_ok());
/// assert!(board_from_str_rows(&["123", "115", "786"]).is_err());
/// ```
pub fn board_from_str_rows(rows: &[&str]) -> Result<Board, String> {
    if rows.len() != SIDE {
        return Err(format!(
            "Invalid number of rows. Expected {}, found {}",
            SIDE,
            rows.len()
        ));
    }

    let mut grid = [[0u8; SIDE]; SIDE];
    for (r, row) in rows.iter().enumerate() {
        let digits: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
        if digits.len() != SIDE {
            return Err(format!(
                "Row {} has {} tiles. Expected {}",
                r,
                digits.len(),
                SIDE
            ));
        }
        for (c, ch) in digits.into_iter().enumerate() {
            match ch.to_digit(10) {
                Some(value) if value < 9 => grid[r][c] = value as u8,
                _ => {
                    return Err(format!(
                        "Unrecognized tile '{}' in row {} col {}. Expected a digit 0-8",
                        ch, r, c
                    ))
                }
            }
        }
    }
    Board::from_grid(grid)
}

/// Number of inverted non-blank tile pairs in row-major order.
fn inversions(board: &Board) -> u32 {
    let tiles: Vec<u8> = board
        .cells()
        .iter()
        .copied()
        .filter(|&v| v != 0)
        .collect();
    let mut count = 0u32;
    for i in 0..tiles.len() {
        for j in i + 1..tiles.len() {
            if tiles[i] > tiles[j] {
                count += 1;
            }
        }
    }
    count
}

/// Whether `goal` is reachable from `start`.
///
/// On an odd-width grid a blank move never changes the inversion parity of
/// the tile sequence, so the two boards are mutually reachable exactly when
/// their parities agree. The search strategies themselves do not run this
/// check; callers should invoke it before dispatch.
///
/// # Examples
///
/// ```
/// use eight_puzzle_solver::utils::{board_from_str_rows, is_solvable};
///
/// let goal = board_from_str_rows(&["123", "456", "780"]).unwrap();
/// let near = board_from_str_rows(&["123", "405", "786"]).unwrap();
/// let swapped = board_from_str_rows(&["213", "456", "780"]).unwrap();
/// assert!(is_solvable(&near, &goal));
/// assert!(!is_solvable(&swapped, &goal));
/// ```
pub fn is_solvable(start: &Board, goal: &Board) -> bool {
    inversions(start) % 2 == inversions(goal) % 2
}

/// A named benchmark configuration with its known optimal solution length.
#[derive(Clone, Copy, Debug)]
pub struct NamedCase {
    pub name: &'static str,
    pub start: [[u8; SIDE]; SIDE],
    pub goal: [[u8; SIDE]; SIDE],
    pub optimal_length: usize,
}

impl NamedCase {
    pub fn start_board(&self) -> Board {
        // The table below is compile-time data and always a valid permutation.
        Board::from_grid(self.start).expect("benchmark start boards are valid")
    }

    pub fn goal_board(&self) -> Board {
        Board::from_grid(self.goal).expect("benchmark goal boards are valid")
    }
}

/// The benchmark cases the comparison binary sweeps, ordered easiest first.
pub const NAMED_CASES: [NamedCase; 4] = [
    NamedCase {
        name: "easy",
        start: [[1, 2, 3], [4, 0, 5], [7, 8, 6]],
        goal: [[1, 2, 3], [4, 5, 6], [7, 8, 0]],
        optimal_length: 2,
    },
    NamedCase {
        name: "medium",
        start: [[1, 2, 3], [4, 5, 6], [0, 7, 8]],
        goal: [[1, 2, 3], [4, 5, 6], [7, 8, 0]],
        optimal_length: 2,
    },
    NamedCase {
        name: "hard",
        start: [[0, 1, 3], [4, 2, 5], [7, 8, 6]],
        goal: [[1, 2, 3], [4, 5, 6], [7, 8, 0]],
        optimal_length: 4,
    },
    NamedCase {
        name: "very_hard",
        start: [[8, 7, 6], [5, 4, 3], [2, 1, 0]],
        goal: [[1, 2, 3], [4, 5, 6], [7, 8, 0]],
        optimal_length: 31,
    },
];

/// Looks up a benchmark case by name.
pub fn named_case(name: &str) -> Option<&'static NamedCase> {
    NAMED_CASES.iter().find(|case| case.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_rows() {
        let board = board_from_str_rows(&["123", "405", "786"]).unwrap();
        assert_eq!(board.tile(0, 0), 1);
        assert_eq!(board.tile(1, 1), 0);
        assert_eq!(board.tile(2, 2), 6);
    }

    #[test]
    fn test_parse_spaced_rows() {
        let board = board_from_str_rows(&["1 2 3", "4 0 5", "7 8 6"]).unwrap();
        assert_eq!(board.tile(2, 0), 7);
    }

    #[test]
    fn test_parse_rejects_wrong_row_count() {
        let result = board_from_str_rows(&["123", "405"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid number of rows"));
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let result = board_from_str_rows(&["12", "405", "786"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Row 0 has 2 tiles"));
    }

    #[test]
    fn test_parse_rejects_bad_tile() {
        let result = board_from_str_rows(&["12x", "405", "786"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized tile 'x'"));

        let nine = board_from_str_rows(&["129", "405", "786"]);
        assert!(nine.is_err());
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        let result = board_from_str_rows(&["123", "115", "786"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Duplicate tile value"));
    }

    #[test]
    fn test_solvability_parity() {
        let goal = board_from_str_rows(&["123", "456", "780"]).unwrap();
        for case in &NAMED_CASES {
            assert!(is_solvable(&case.start_board(), &case.goal_board()));
        }
        let swapped = board_from_str_rows(&["213", "456", "780"]).unwrap();
        assert!(!is_solvable(&swapped, &goal));
        // Solvability is symmetric.
        assert!(!is_solvable(&goal, &swapped));
    }

    #[test]
    fn test_named_case_lookup() {
        let case = named_case("very_hard").unwrap();
        assert_eq!(case.optimal_length, 31);
        assert!(named_case("impossible").is_none());
    }
}
