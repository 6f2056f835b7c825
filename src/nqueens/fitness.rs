//! N-Queens fitness.
//!
//! Gene value `gene[col]` is the row of the queen in column `col`, so
//! column clashes cannot occur. Row clashes cost `n − distinct rows`;
//! diagonal clashes are counted per queen by walking all four diagonal
//! rays to the edge of the board.

use crate::ga::{Board, Fitness};

const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, 1), (1, -1)];

/// Decodes a gene into a 0/1 occupancy board.
///
/// # Panics
/// Panics if any gene value is not a row index of the board.
pub fn occupancy(gene: &[u32]) -> Board {
    let n = gene.len();
    let mut board = Board::zeros(n);
    for (col, &row) in gene.iter().enumerate() {
        board.set(row as usize, col, 1);
    }
    board
}

/// `n` minus the number of distinct rows used.
pub fn row_collisions(gene: &[u32]) -> Fitness {
    let n = gene.len();
    let mut used = vec![false; n];
    let mut distinct = 0;
    for &row in gene {
        let slot = &mut used[row as usize];
        if !*slot {
            *slot = true;
            distinct += 1;
        }
    }
    (n - distinct) as Fitness
}

/// For every queen, the number of other queens on its four diagonal rays.
///
/// Each attacking pair is therefore counted once from each end.
pub fn diagonal_attacks(board: &Board) -> Fitness {
    let n = board.size() as isize;
    let mut attacks = 0;

    for row in 0..n {
        for col in 0..n {
            if board.get(row as usize, col as usize) == 0 {
                continue;
            }
            for (dy, dx) in DIAGONALS {
                let (mut y, mut x) = (row + dy, col + dx);
                while (0..n).contains(&y) && (0..n).contains(&x) {
                    if board.get(y as usize, x as usize) == 1 {
                        attacks += 1;
                    }
                    y += dy;
                    x += dx;
                }
            }
        }
    }
    attacks
}

/// Scores a gene: row collisions plus diagonal attacks. Zero is a
/// solution.
pub fn queens_fitness(gene: &[u32]) -> Fitness {
    row_collisions(gene) + diagonal_attacks(&occupancy(gene))
}
