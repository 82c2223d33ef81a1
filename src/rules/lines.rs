//! Length-3 window scanning.
//!
//! Win detection and the heuristic's alignment terms both look at every
//! horizontal, vertical and diagonal window of `LINE_LENGTH` cells. Windows
//! never wrap around the board edge.

use crate::core::{Board, Cell, Player, LINE_LENGTH};

/// A window: `LINE_LENGTH` cells in a straight line.
pub type Window = [(usize, usize); LINE_LENGTH];

/// Window orientations: horizontal, vertical, diagonal, anti-diagonal.
const ORIENTATIONS: [(i64, i64); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Every in-bounds window on a board of the given size.
pub fn windows(size: usize) -> impl Iterator<Item = Window> {
    let n = size as i64;
    let span = LINE_LENGTH as i64 - 1;

    (0..n).flat_map(move |row| {
        (0..n).flat_map(move |col| {
            ORIENTATIONS.into_iter().filter_map(move |(dr, dc)| {
                let (end_row, end_col) = (row + dr * span, col + dc * span);
                if !(0..n).contains(&end_row) || !(0..n).contains(&end_col) {
                    return None;
                }
                let mut window = [(0, 0); LINE_LENGTH];
                for (i, cell) in window.iter_mut().enumerate() {
                    let i = i as i64;
                    *cell = ((row + dr * i) as usize, (col + dc * i) as usize);
                }
                Some(window)
            })
        })
    })
}

/// Windows fully occupied by `player`.
pub fn winning_lines(board: &Board, player: Player) -> impl Iterator<Item = Window> + '_ {
    windows(board.size()).filter(move |window| {
        window
            .iter()
            .all(|&(r, c)| board.get(r, c).is_owned_by(player))
    })
}

/// Whether `player` owns at least one complete window.
#[must_use]
pub fn has_line(board: &Board, player: Player) -> bool {
    winning_lines(board, player).next().is_some()
}

/// Windows holding exactly `LINE_LENGTH - 1` of `player`'s pieces and one
/// empty cell.
#[must_use]
pub fn near_win_count(board: &Board, player: Player) -> usize {
    windows(board.size())
        .filter(|window| {
            let mut own = 0;
            let mut empty = 0;
            for &(r, c) in window {
                match board.get(r, c) {
                    Cell::Empty => empty += 1,
                    cell if cell.is_owned_by(player) => own += 1,
                    _ => {}
                }
            }
            own == LINE_LENGTH - 1 && empty == 1
        })
        .count()
}
