//! N-queens cost adapter.

use crate::ga::{Cost, CostFunction};

/// Counts attacking queen pairs on an N×N board.
///
/// Gene `i` is the row of the queen in column `i`, so column clashes are
/// impossible by construction. Each unordered pair adds one for a shared
/// row and one for a shared diagonal. Zero means a valid placement.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueensConflicts;

impl QueensConflicts {
    /// Goal test: no attacking pairs.
    pub fn is_goal(cost: Cost) -> bool {
        cost == 0
    }
}

impl CostFunction for QueensConflicts {
    fn cost(&self, board: &[usize]) -> Cost {
        let n = board.len();
        let mut conflicts = 0;
        for i in 0..n {
            for j in i + 1..n {
                if board[i] == board[j] {
                    conflicts += 1;
                }
                if board[i].abs_diff(board[j]) == j - i {
                    conflicts += 1;
                }
            }
        }
        conflicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_solution() {
        let board = [0, 4, 7, 5, 2, 6, 1, 3];
        assert_eq!(QueensConflicts.cost(&board), 0);
        assert!(QueensConflicts::is_goal(QueensConflicts.cost(&board)));
    }

    #[test]
    fn test_all_same_row() {
        // 28 pairs share a row, none share a diagonal.
        assert_eq!(QueensConflicts.cost(&[3; 8]), 28);
    }

    #[test]
    fn test_main_diagonal() {
        // 4 queens on one diagonal: 6 pairs.
        assert_eq!(QueensConflicts.cost(&[0, 1, 2, 3]), 6);
    }

    #[test]
    fn test_single_queen() {
        assert_eq!(QueensConflicts.cost(&[0]), 0);
    }
}
