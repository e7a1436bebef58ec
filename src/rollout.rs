//! The move chooser: a one-ply flat Monte Carlo rollout evaluator.
//!
//! For each of the four directions it runs a batch of independent trials.
//! A trial copies the board, applies the candidate move, then plays
//! uniformly random moves until the board is terminal, summing the scores
//! the random moves return. Directions are ranked by average trial score and
//! the best one that actually changes the board is chosen.
//!
//! This is deliberately not tree search: no node reuse, no selection policy,
//! no backpropagation beyond the flat average. The playout policy is pure
//! random. Changing either would change which moves get picked.

use std::cmp::Ordering;
use std::thread;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::engine::{self, Move};

/// Trials simulated per candidate direction.
pub const DEFAULT_ITERATIONS: usize = 100;

/// Cap on moves within one simulated playout. Real games reach a terminal
/// board long before this; the cap only guards the loop against a degenerate
/// random sequence.
pub const DEFAULT_PLAYOUT_CAP: usize = 10_000;

/// Sequential rollout evaluator. Stateless between calls; everything is
/// recomputed from the board it is handed.
#[derive(Debug, Clone, Copy)]
pub struct Rollout {
    iterations: usize,
    playout_cap: usize,
}

impl Default for Rollout {
    fn default() -> Self {
        Rollout::new(DEFAULT_ITERATIONS)
    }
}

impl Rollout {
    pub fn new(iterations: usize) -> Self {
        assert!(iterations > 0, "rollout needs at least one trial");
        Rollout {
            iterations,
            playout_cap: DEFAULT_PLAYOUT_CAP,
        }
    }

    pub fn with_playout_cap(mut self, playout_cap: usize) -> Self {
        self.playout_cap = playout_cap;
        self
    }

    /// Picks the next move for `board`, or `None` when no direction can
    /// change it (the game is over). The real board is never mutated; all
    /// simulation happens on scratch copies.
    pub fn choose_move(&self, board: &Board, rng: &mut impl Rng) -> Option<Move> {
        let mut averages = [0f64; 4];
        for direction in Move::ALL {
            let mut total: u64 = 0;
            for _ in 0..self.iterations {
                total += self.playout(board, direction, rng);
            }
            averages[direction.index()] = total as f64 / self.iterations as f64;
        }
        pick_applicable(board, &averages)
    }

    /// One trial: the candidate move first, then random moves to
    /// terminality. Only the random moves' scores count; the candidate's own
    /// score is discarded.
    fn playout(&self, board: &Board, first: Move, rng: &mut impl Rng) -> u64 {
        let mut scratch = board.clone();
        engine::apply_move(&mut scratch, first, rng);

        let mut score: u64 = 0;
        let mut moves = 0;
        while !engine::is_terminal(&scratch) && moves < self.playout_cap {
            let direction = Move::ALL[rng.gen_range(0..4)];
            score += engine::apply_move(&mut scratch, direction, rng) as u64;
            moves += 1;
        }
        trace!("playout from {:?}: {} moves, score {}", first, moves, score);
        score
    }
}

/// Parallel variant: one worker thread per candidate direction, each with its
/// own RNG seeded from the caller's, so a fixed seed still gives a
/// reproducible choice. Trial semantics are identical to [`Rollout`].
#[derive(Debug, Clone, Copy)]
pub struct RolloutParallel(Rollout);

impl RolloutParallel {
    pub fn new(iterations: usize) -> Self {
        RolloutParallel(Rollout::new(iterations))
    }

    pub fn with_playout_cap(self, playout_cap: usize) -> Self {
        RolloutParallel(self.0.with_playout_cap(playout_cap))
    }

    pub fn choose_move(&self, board: &Board, rng: &mut impl Rng) -> Option<Move> {
        let mut workers = Vec::with_capacity(4);
        for direction in Move::ALL {
            let board = board.clone();
            let seed: u64 = rng.gen();
            let rollout = self.0;
            workers.push(thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut total: u64 = 0;
                for _ in 0..rollout.iterations {
                    total += rollout.playout(&board, direction, &mut rng);
                }
                total as f64 / rollout.iterations as f64
            }));
        }

        let mut averages = [0f64; 4];
        for (direction, worker) in Move::ALL.iter().zip(workers) {
            averages[direction.index()] = worker.join().expect("rollout worker panicked");
        }
        pick_applicable(board, &averages)
    }
}

/// Ranks directions by ascending average and walks from the best down,
/// returning the first whose move would change the real board.
fn pick_applicable(board: &Board, averages: &[f64; 4]) -> Option<Move> {
    debug!(
        "direction averages: left {:.1}, up {:.1}, right {:.1}, down {:.1}",
        averages[0], averages[1], averages[2], averages[3]
    );
    let mut ranked: Vec<usize> = (0..4).collect();
    ranked.sort_by(|&a, &b| {
        averages[a]
            .partial_cmp(&averages[b])
            .unwrap_or(Ordering::Equal)
    });
    for &idx in ranked.iter().rev() {
        let direction = Move::ALL[idx];
        if engine::can_apply(direction, board) {
            debug!("chose {:?} (average {:.1})", direction, averages[idx]);
            return Some(direction);
        }
    }
    None
}
