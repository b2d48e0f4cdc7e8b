use crate::board::Board;
use crate::error::{Error, Result};
use std::fmt;
use tracing::warn;

/// A cell index from 0 to 8, row-major, starting with 0 in the top-left and 8 in the bottom-right.
pub type Move = usize;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The eight cell triples that win the game.
pub const WINNING_LINES: [[Move; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// The content of a cell, also used to name the side to move.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Piece {
    X,
    O,
    Empty,
}

impl Piece {
    /// Flips between the two players. `Empty` maps to itself.
    pub fn opposite(self) -> Self {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
            Piece::Empty => Piece::Empty,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Piece::X => "X",
            Piece::O => "O",
            Piece::Empty => " ",
        };
        f.write_str(symbol)
    }
}

/// A tic-tac-toe position.
///
/// The board is a 9-element array in row-major order, plus the piece whose turn it is and the move
/// that produced the position. A board is never modified in place; `play` and `apply` return a
/// new board.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct TicTacToeBoard {
    position: [Piece; CELL_COUNT],
    turn: Piece,
    last_move: Option<Move>,
}

impl Default for TicTacToeBoard {
    /// Creates an empty board with X to move.
    fn default() -> Self {
        Self {
            position: [Piece::Empty; CELL_COUNT],
            turn: Piece::X,
            last_move: None,
        }
    }
}

impl TicTacToeBoard {
    /// Creates a board from an explicit position.
    ///
    /// `last_move` is `None` for a start position. Only the structural invariants are checked:
    /// `turn` must be a player, and `last_move` must point at an occupied cell. Whether the
    /// position is reachable in a real game is up to the caller.
    pub fn new(
        position: [Piece; CELL_COUNT],
        turn: Piece,
        last_move: Option<Move>,
    ) -> Result<Self> {
        if turn == Piece::Empty {
            return Err(Error::EmptyTurn);
        }
        if let Some(location) = last_move {
            if position.get(location).is_none_or(|&piece| piece == Piece::Empty) {
                return Err(Error::InvalidLastMove { location });
            }
        }

        Ok(Self {
            position,
            turn,
            last_move,
        })
    }

    pub fn position(&self) -> &[Piece; CELL_COUNT] {
        &self.position
    }

    pub fn turn(&self) -> Piece {
        self.turn
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Plays `location` for the side to move and returns the resulting board.
    ///
    /// Fails if the location is off the board or already occupied.
    pub fn play(&self, location: Move) -> Result<Self> {
        match self.position.get(location) {
            None => {
                warn!(location, "move outside the board");
                Err(Error::OutOfBounds { location })
            }
            Some(Piece::Empty) => Ok(self.apply(location)),
            Some(_) => {
                warn!(location, "move onto an occupied cell");
                Err(Error::InvalidMove { location })
            }
        }
    }

    /// Returns the piece that completed a winning line, if any.
    pub fn winner(&self) -> Option<Piece> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let piece = self.position[a];
            (piece != Piece::Empty && piece == self.position[b] && piece == self.position[c])
                .then_some(piece)
        })
    }
}

impl Board for TicTacToeBoard {
    type Move = Move;
    type Side = Piece;

    fn side_to_move(&self) -> Piece {
        self.turn
    }

    fn last_mover(&self) -> Piece {
        self.turn.opposite()
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.position
            .iter()
            .enumerate()
            .filter(|(_, piece)| **piece == Piece::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    fn is_win(&self) -> bool {
        self.winner().is_some()
    }

    fn is_draw(&self) -> bool {
        !self.is_win() && self.position.iter().all(|&piece| piece != Piece::Empty)
    }

    fn apply(&self, location: Move) -> Self {
        let mut position = self.position;
        position[location] = self.turn;
        Self {
            position,
            turn: self.turn.opposite(),
            last_move: Some(location),
        }
    }
}

impl fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.position.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "-+-+-")?;
            }
            writeln!(f, "{}|{}|{}", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}
