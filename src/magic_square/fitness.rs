//! Magic-square fitness.
//!
//! The score of a board is the sum of four independent partial
//! deviations from the magic constant: rows, columns, main diagonal and
//! anti-diagonal. The four partials only read the board and are computed
//! concurrently with `rayon::join`; their sum does not depend on which
//! finishes first.
//!
//! Boards whose deviation is at or below the search threshold are also
//! scanned for nested `m × m` magic squares. Each one found lowers the
//! score by one, so a negative score marks a board that contains at least
//! one nested magic square.

use crate::ga::{Board, Fitness};

/// Magic constant `k·(k² + 1)/2` of a `k × k` square.
///
/// # Examples
///
/// ```
/// use u_evopuzzle::magic_square::magic_constant;
///
/// assert_eq!(magic_constant(3), 15);
/// assert_eq!(magic_constant(10), 505);
/// ```
pub fn magic_constant(k: usize) -> i64 {
    (k * (k * k + 1) / 2) as i64
}

/// Total of all cells of a `k × k` square holding `1..=k²`.
///
/// Equals `k · magic_constant(k)`.
pub fn square_total(k: usize) -> i64 {
    let cells = k * k;
    (cells * (cells + 1) / 2) as i64
}

/// The four partial deviations of a board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deviation {
    /// Σ |row sum − M(n)| over all rows.
    pub rows: i64,
    /// Σ |column sum − M(n)| over all columns.
    pub columns: i64,
    /// |main diagonal sum − M(n)|.
    pub diagonal: i64,
    /// |anti-diagonal sum − M(n)|.
    pub anti_diagonal: i64,
}

impl Deviation {
    /// Sum of the four partials. Zero iff the board is magic.
    pub fn total(&self) -> i64 {
        self.rows + self.columns + self.diagonal + self.anti_diagonal
    }
}

/// Computes the four partial deviations of `board` concurrently.
pub fn deviation(board: &Board) -> Deviation {
    let target = magic_constant(board.size());

    let ((rows, columns), (diagonal, anti_diagonal)) = rayon::join(
        || {
            rayon::join(
                || row_deviation(board, target),
                || column_deviation(board, target),
            )
        },
        || {
            rayon::join(
                || diagonal_deviation(board, target),
                || anti_diagonal_deviation(board, target),
            )
        },
    );

    Deviation {
        rows,
        columns,
        diagonal,
        anti_diagonal,
    }
}

fn row_deviation(board: &Board, target: i64) -> i64 {
    board
        .rows()
        .map(|row| (row.iter().map(|&v| v as i64).sum::<i64>() - target).abs())
        .sum()
}

fn column_deviation(board: &Board, target: i64) -> i64 {
    let n = board.size();
    (0..n)
        .map(|col| ((0..n).map(|row| board.get(row, col) as i64).sum::<i64>() - target).abs())
        .sum()
}

fn diagonal_deviation(board: &Board, target: i64) -> i64 {
    let n = board.size();
    ((0..n).map(|i| board.get(i, i) as i64).sum::<i64>() - target).abs()
}

fn anti_diagonal_deviation(board: &Board, target: i64) -> i64 {
    let n = board.size();
    ((0..n).map(|i| board.get(i, n - 1 - i) as i64).sum::<i64>() - target).abs()
}

/// Counts the `m × m` windows of `board` that are magic squares.
///
/// Every top-left offset is visited. A window's cells are summed first;
/// only windows whose total equals [`square_total(m)`](square_total) pay
/// for the full four-part [`deviation`].
///
/// # Panics
/// Panics if `m` is zero or larger than the board.
pub fn nested_magic_windows(board: &Board, m: usize) -> usize {
    let n = board.size();
    assert!(m >= 1 && m <= n, "nested grid must fit the board");

    let total = square_total(m);
    let span = n - m + 1;

    (0..span)
        .flat_map(|top| (0..span).map(move |left| (top, left)))
        .filter(|&(top, left)| window_sum(board, top, left, m) == total)
        .filter(|&(top, left)| deviation(&board.window(top, left, m)).total() == 0)
        .count()
}

fn window_sum(board: &Board, top: usize, left: usize, m: usize) -> i64 {
    (top..top + m)
        .flat_map(|row| (left..left + m).map(move |col| (row, col)))
        .map(|(row, col)| board.get(row, col) as i64)
        .sum()
}

/// Scores a board: its deviation, minus one per nested magic window when
/// the deviation is at most `threshold`.
pub fn board_fitness(board: &Board, nested_grid_size: usize, threshold: i64) -> Fitness {
    let deviation = deviation(board).total();
    if deviation > threshold {
        return deviation;
    }
    deviation - nested_magic_windows(board, nested_grid_size) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lo_shu() -> Board {
        Board::from_cells(3, vec![2, 7, 6, 9, 5, 1, 4, 3, 8])
    }

    #[test]
    fn test_magic_constant() {
        assert_eq!(magic_constant(1), 1);
        assert_eq!(magic_constant(3), 15);
        assert_eq!(magic_constant(4), 34);
        assert_eq!(magic_constant(10), 505);
    }

    #[test]
    fn test_square_total() {
        assert_eq!(square_total(1), 1);
        assert_eq!(square_total(3), 45);
        assert_eq!(square_total(3), 3 * magic_constant(3));
        assert_eq!(square_total(4), 136);
    }

    #[test]
    fn test_lo_shu_has_zero_deviation() {
        assert_eq!(deviation(&lo_shu()), Deviation::default());
    }

    #[test]
    fn test_durer_square_has_zero_deviation() {
        let durer = Board::from_cells(
            4,
            vec![16, 3, 2, 13, 5, 10, 11, 8, 9, 6, 7, 12, 4, 15, 14, 1],
        );
        assert_eq!(deviation(&durer).total(), 0);
    }

    #[test]
    fn test_row_major_ten_by_ten_partials() {
        let board = Board::from_cells(10, (1..=100).collect());
        let d = deviation(&board);
        // row i sums to 100i + 55
        assert_eq!(d.rows, 2500);
        // column j sums to 460 + 10j
        assert_eq!(d.columns, 250);
        assert_eq!(d.diagonal, 0);
        assert_eq!(d.anti_diagonal, 0);
        assert_eq!(d.total(), 2750);
        assert_eq!(board_fitness(&board, 3, 10), 2750);
    }

    #[test]
    fn test_lo_shu_triggers_sentinel() {
        assert_eq!(nested_magic_windows(&lo_shu(), 3), 1);
        assert_eq!(board_fitness(&lo_shu(), 3, 10), -1);
    }

    #[test]
    fn test_window_with_right_total_but_not_magic() {
        let board = Board::from_cells(3, (1..=9).collect());
        assert_eq!(deviation(&board).total(), 24);
        assert_eq!(nested_magic_windows(&board, 3), 0);
        assert_eq!(board_fitness(&board, 3, 30), 24);
    }

    #[test]
    fn test_nested_window_inside_larger_board() {
        #[rustfmt::skip]
        let board = Board::from_cells(4, vec![
            2,  7,  6,  10,
            9,  5,  1,  11,
            4,  3,  8,  12,
            13, 14, 15, 16,
        ]);
        assert_eq!(deviation(&board).total(), 88);
        assert_eq!(nested_magic_windows(&board, 3), 1);

        // Above the threshold the nested scan is skipped
        assert_eq!(board_fitness(&board, 3, 10), 88);
        assert_eq!(board_fitness(&board, 3, 100), 87);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let board = Board::from_cells(3, (1..=9).collect());
        // deviation 24, no magic window: same score either side of the boundary
        assert_eq!(board_fitness(&board, 3, 24), 24);
        assert_eq!(board_fitness(&board, 3, 23), 24);
        assert_eq!(board_fitness(&lo_shu(), 3, 0), -1);
    }

    #[test]
    fn test_fitness_is_idempotent() {
        let board = Board::from_cells(4, (1..=16).rev().collect());
        let before = board.clone();
        let a = board_fitness(&board, 2, 1_000);
        let b = board_fitness(&board, 2, 1_000);
        assert_eq!(a, b);
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "nested grid must fit the board")]
    fn test_nested_larger_than_board() {
        let _ = nested_magic_windows(&lo_shu(), 4);
    }
}
