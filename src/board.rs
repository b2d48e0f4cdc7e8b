use std::fmt::Debug;

/// The interface the minimax search needs from a game position.
///
/// Implementors are immutable values: every transition returns a fresh position and leaves the
/// receiver untouched, so each level of the recursion owns its own snapshot.
pub trait Board: Clone {
    /// The type representing a move, e.g. a cell index.
    type Move: Copy + Debug;

    /// The type identifying a player.
    type Side: Copy + Eq + Debug;

    /// Returns the side whose turn it is to move.
    fn side_to_move(&self) -> Self::Side;

    /// Returns the side that produced this position, i.e. the opponent of `side_to_move`.
    fn last_mover(&self) -> Self::Side;

    /// Returns every legal move in a stable order. Search tie-breaking follows this order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Returns `true` if a player has completed a winning pattern.
    fn is_win(&self) -> bool;

    /// Returns `true` if nobody has won and no legal move remains.
    fn is_draw(&self) -> bool;

    /// Returns the position after `location` is played by the side to move.
    ///
    /// No legality check is performed; callers pass moves taken from `legal_moves`.
    fn apply(&self, location: Self::Move) -> Self;

    /// Returns `true` once the game is won or drawn.
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_draw()
    }

    /// Classifies the position from the point of view of `side`.
    ///
    /// A win is credited to `last_mover`, since the turn has already passed to the other side.
    fn outcome_for(&self, side: Self::Side) -> GameOutcome {
        if self.is_win() {
            if self.last_mover() == side {
                GameOutcome::Win
            } else {
                GameOutcome::Lose
            }
        } else if self.is_draw() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }
}

/// Represents the possible outcomes of a game, relative to one side.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// The game is still ongoing.
    InProgress,
    /// The side has won.
    Win,
    /// The side has lost.
    Lose,
    /// The game has ended in a draw.
    Draw,
}

impl GameOutcome {
    /// Returns the minimax value of a terminal outcome: `1`, `-1` or `0`.
    /// `None` while the game is still in progress.
    pub fn value(self) -> Option<i32> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::Win => Some(1),
            GameOutcome::Lose => Some(-1),
            GameOutcome::Draw => Some(0),
        }
    }
}
