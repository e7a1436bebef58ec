//! Pure board transformations: shift, combine, rotate, the four directional
//! moves, tile spawning, terminal detection, and the feasibility check.
//!
//! Every directional move is the same operation in a different orientation:
//! rotate the board so the move points left, run [`combine`], spawn a tile,
//! rotate back. The randomness is injected as a [`Rng`] so callers own the
//! seed; nothing here touches a global generator.

use rand::Rng;

use crate::board::Board;
use crate::error::{Error, Result};

/// Points gained by a single move or accumulated over one playout.
pub type Score = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Left,
    Up,
    Right,
    Down,
}

impl Move {
    /// All four directions, ordered by their stable indices 0..=3.
    pub const ALL: [Move; 4] = [Move::Left, Move::Up, Move::Right, Move::Down];

    pub fn from_index(idx: usize) -> Option<Move> {
        match idx {
            0 => Some(Move::Left),
            1 => Some(Move::Up),
            2 => Some(Move::Right),
            3 => Some(Move::Down),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Move::Left => 0,
            Move::Up => 1,
            Move::Right => 2,
            Move::Down => 3,
        }
    }
}

/// Compacts every row to the left: non-zero values keep their relative order,
/// trailing cells become zero. No merging.
pub fn shift_left(board: &mut Board) {
    for row in 0..board.rows() {
        let mut write = 0;
        for col in 0..board.cols() {
            let val = board.get(row, col);
            if val != 0 {
                if write != col {
                    board.set(row, write, val);
                    board.set(row, col, 0);
                }
                write += 1;
            }
        }
    }
}

/// One full leftward merge: shift, a single left-to-right pass doubling the
/// left cell of each equal adjacent pair (the right cell is zeroed, which
/// stops it merging again in the same pass), then shift to close the gaps.
/// Returns the total of the doubled values, so the board's tile sum grows by
/// exactly the returned score.
pub fn combine(board: &mut Board) -> Score {
    let mut score = 0;
    shift_left(board);
    for row in 0..board.rows() {
        for col in 1..board.cols() {
            let val = board.get(row, col - 1);
            if val != 0 && val == board.get(row, col) {
                board.set(row, col - 1, val * 2);
                board.set(row, col, 0);
                score += val * 2;
            }
        }
    }
    shift_left(board);
    score
}

/// Rotates the grid 90 degrees clockwise through a scratch copy. On a
/// non-square board the dimensions swap.
pub fn rotate_clockwise(board: &mut Board) {
    let rows = board.rows();
    let cols = board.cols();
    let mut rotated = Board::new(cols, rows);
    for row in 0..rows {
        for col in 0..cols {
            rotated.set(col, rows - 1 - row, board.get(row, col));
        }
    }
    *board = rotated;
}

// Defined as three clockwise turns rather than its own transform so the two
// rotations can never disagree on corner cases.
pub fn rotate_counterclockwise(board: &mut Board) {
    for _ in 0..3 {
        rotate_clockwise(board);
    }
}

/// Places a tile on a uniformly chosen empty cell: 2 with probability 0.9,
/// 4 with probability 0.1. Does nothing when the board is full.
pub fn spawn_tile(board: &mut Board, rng: &mut impl Rng) {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return;
    }
    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let val = if rng.gen_range(0..10) < 9 { 2 } else { 4 };
    board.set(row, col, val);
}

/// Shift-and-merge in the given direction without spawning a tile. This is
/// the deterministic part of a move; [`can_apply`] compares against it so
/// feasibility does not depend on where a tile would spawn.
pub fn slide(board: &mut Board, direction: Move) -> Score {
    match direction {
        Move::Left => combine(board),
        Move::Up => {
            rotate_counterclockwise(board);
            let score = combine(board);
            rotate_clockwise(board);
            score
        }
        Move::Right => {
            rotate_clockwise(board);
            rotate_clockwise(board);
            let score = combine(board);
            rotate_clockwise(board);
            rotate_clockwise(board);
            score
        }
        Move::Down => {
            rotate_clockwise(board);
            let score = combine(board);
            rotate_counterclockwise(board);
            score
        }
    }
}

/// Performs a full directional move and returns its score. A tile is spawned
/// even when the slide changed nothing; standard 2048 would only spawn after
/// an effective move. See the crate docs for why the looser rule is kept.
pub fn apply_move(board: &mut Board, direction: Move, rng: &mut impl Rng) -> Score {
    let score = slide(board, direction);
    spawn_tile(board, rng);
    score
}

/// Dispatches a move by its stable index 0..=3.
pub fn apply_move_index(idx: usize, board: &mut Board, rng: &mut impl Rng) -> Result<Score> {
    match Move::from_index(idx) {
        Some(direction) => Ok(apply_move(board, direction, rng)),
        None => Err(Error::InvalidMoveIndex(idx)),
    }
}

/// True when no move can change the board: every cell is occupied and no two
/// horizontally or vertically adjacent cells are equal.
pub fn is_terminal(board: &Board) -> bool {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.get(row, col) == 0 {
                return false;
            }
        }
    }

    for row in 0..board.rows() - 1 {
        for col in 0..board.cols() {
            if board.get(row, col) == board.get(row + 1, col) {
                return false;
            }
        }
    }

    for row in 0..board.rows() {
        for col in 0..board.cols() - 1 {
            if board.get(row, col) == board.get(row, col + 1) {
                return false;
            }
        }
    }

    true
}

/// True when the directional move would change the board. Evaluated on a
/// scratch copy with [`slide`], so the answer is deterministic.
pub fn can_apply(direction: Move, board: &Board) -> bool {
    let mut scratch = board.clone();
    slide(&mut scratch, direction);
    scratch != *board
}
