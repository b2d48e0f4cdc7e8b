//! A small and simple library for exhaustive minimax search.
//!
//! The search walks the complete game tree below a position and picks the move that is best for
//! the side to move under perfect play from both sides. It works against any game implementing
//! the [`board::Board`] trait; tic-tac-toe ships as [`boards::tic_tac_toe::TicTacToeBoard`].
//!
//! # Example
//!
//! ```rust
//! use minimax_lib::boards::tic_tac_toe::Piece::{Empty as E, O, X};
//! use minimax_lib::boards::tic_tac_toe::TicTacToeBoard;
//! use minimax_lib::minimax::find_best_move;
//!
//! // X can complete the left column
//! let board = TicTacToeBoard::new([X, O, X, X, E, O, E, E, O], X, Some(8)).unwrap();
//!
//! assert_eq!(find_best_move(&board), Ok(6));
//! ```

/// Contains the `Board` trait and the `GameOutcome` enum that define the interface for a game.
pub mod board;
/// Contains implementations of the `Board` trait.
pub mod boards;
/// Crate-wide error type.
pub mod error;
/// The minimax search and its configurable `Minimax` searcher.
pub mod minimax;
/// Contains traits and implementations for random number generation.
pub mod random;

pub use error::{Error, Result};
