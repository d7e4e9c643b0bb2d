use crate::card::{number_bit, Card};
use crate::constants::*;

/// Cell indices of the 12 winning lines: 5 rows, 5 columns, 2 diagonals.
pub const LINES: [[usize; CARD_WIDTH]; 12] = [
    [0, 1, 2, 3, 4],
    [5, 6, 7, 8, 9],
    [10, 11, 12, 13, 14],
    [15, 16, 17, 18, 19],
    [20, 21, 22, 23, 24],
    [0, 5, 10, 15, 20],
    [1, 6, 11, 16, 21],
    [2, 7, 12, 17, 22],
    [3, 8, 13, 18, 23],
    [4, 9, 14, 19, 24],
    [0, 6, 12, 18, 24],
    [4, 8, 12, 16, 20],
];

/// The free cell is always marked, whatever value it holds.
pub fn is_marked(card: &Card, index: usize, drawn_mask: u128) -> bool {
    if index == FREE_CELL_INDEX {
        return true;
    }
    let bit = number_bit(card[index]);
    bit != 0 && drawn_mask & bit != 0
}

/// Indices into [`LINES`] that are fully marked.
pub fn winning_lines(card: &Card, drawn_mask: u128) -> Vec<usize> {
    LINES
        .iter()
        .enumerate()
        .filter(|(_, line)| line.iter().all(|&i| is_marked(card, i, drawn_mask)))
        .map(|(n, _)| n)
        .collect()
}

pub fn check_bingo(card: &Card, drawn_mask: u128) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| is_marked(card, i, drawn_mask)))
}
