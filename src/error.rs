use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Move dispatch was handed an index outside 0..=3. A contract violation
    /// by the caller, distinct from the normal "no legal move" end-of-game
    /// signal which is not an error.
    #[error("invalid move index {0}, expected 0..=3")]
    InvalidMoveIndex(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
