use thiserror::Error;

/// Errors produced while building boards, playing moves, or searching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {location} is already occupied")]
    InvalidMove { location: usize },

    #[error("invalid move: position {location} is outside the board")]
    OutOfBounds { location: usize },

    #[error("turn must be X or O, not empty")]
    EmptyTurn,

    #[error("last move {location} does not point at an occupied cell")]
    InvalidLastMove { location: usize },

    #[error("no legal moves available")]
    NoLegalMove,

    #[error("game already over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, Error>;
