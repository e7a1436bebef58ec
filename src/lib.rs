//! A 2048 player driven by a flat Monte Carlo rollout evaluator.
//!
//! The crate is split the same way the game is: [`board`] holds the grid,
//! [`engine`] holds the pure transformations (shift, combine, rotate, the
//! four directional moves, spawning, terminal detection), and [`rollout`]
//! picks moves by averaging random playouts from each candidate direction.
//!
//! One behavioral quirk is deliberate: a directional move spawns a tile even
//! when the shift/merge changed nothing. Standard 2048 only spawns after a
//! move that changed the board; this implementation keeps the looser rule,
//! and the rollout chooser filters out no-effect moves itself via
//! [`engine::can_apply`].

pub mod board;
pub mod engine;
pub mod error;
pub mod rollout;

pub use board::Board;
pub use engine::Move;
pub use error::{Error, Result};
