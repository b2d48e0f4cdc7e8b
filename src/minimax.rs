use crate::board::Board;
use crate::error::{Error, Result};
use crate::random::{RandomGenerator, StandardRandomGenerator};
use tracing::{debug, instrument};

/// Evaluates `board` for `original_player`, assuming both sides play perfectly from here on.
///
/// Returns `1` if `original_player` wins, `-1` if it loses and `0` for a draw. `maximizing` says
/// whether the side to move is `original_player` (maximize) or its opponent (minimize).
pub fn minimax<T: Board>(board: &T, maximizing: bool, original_player: T::Side) -> i32 {
    Minimax::<StandardRandomGenerator>::default().evaluate(board, maximizing, original_player)
}

/// Returns the optimal move for the side to move. Among equally good moves the first one in
/// `legal_moves` order wins.
pub fn find_best_move<T: Board>(board: &T) -> Result<T::Move> {
    Minimax::<StandardRandomGenerator>::default().find_best_move(board)
}

/// How `Minimax::find_best_move` chooses among moves with the same value.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum TieBreak {
    /// Take the first optimal move in `legal_moves` order.
    #[default]
    LowestIndex,
    /// Take a uniformly random optimal move.
    Random,
}

/// An exhaustive minimax searcher.
///
/// Every call walks the full game tree below the given position; nothing is pruned or cached
/// between calls. The searcher keeps a running count of evaluated positions.
pub struct Minimax<K: RandomGenerator = StandardRandomGenerator> {
    random: K,
    tie_break: TieBreak,
    nodes_visited: u64,
}

impl<K: RandomGenerator> Default for Minimax<K> {
    fn default() -> Self {
        MinimaxBuilder::new().build()
    }
}

/// A builder for creating instances of `Minimax`.
pub struct MinimaxBuilder<K: RandomGenerator> {
    random_generator: K,
    tie_break: TieBreak,
}

impl<K: RandomGenerator> MinimaxBuilder<K> {
    /// Creates a builder with a default generator and `TieBreak::LowestIndex`.
    pub fn new() -> Self {
        Self {
            random_generator: K::default(),
            tie_break: TieBreak::default(),
        }
    }

    /// Sets the random number generator used by `TieBreak::Random`.
    pub fn with_random_generator(mut self, rg: K) -> Self {
        self.random_generator = rg;
        self
    }

    /// Sets how ties between equally good moves are broken.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Builds the `Minimax` instance with the configured parameters.
    pub fn build(self) -> Minimax<K> {
        Minimax::new(self.random_generator, self.tie_break)
    }
}

impl<K: RandomGenerator> Default for MinimaxBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RandomGenerator> Minimax<K> {
    /// Returns a new builder for `Minimax`.
    pub fn builder() -> MinimaxBuilder<K> {
        MinimaxBuilder::new()
    }

    /// Creates a new searcher. Prefer `Minimax::builder()`.
    pub fn new(rg: K, tie_break: TieBreak) -> Self {
        Self {
            random: rg,
            tie_break,
            nodes_visited: 0,
        }
    }

    /// Returns the configured tie-break policy.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Number of positions evaluated since creation or the last `reset_stats`.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Sets the visited-position counter back to zero.
    pub fn reset_stats(&mut self) {
        self.nodes_visited = 0;
    }

    /// Recursive minimax evaluation, see [`minimax`].
    pub fn evaluate<T: Board>(
        &mut self,
        board: &T,
        maximizing: bool,
        original_player: T::Side,
    ) -> i32 {
        self.nodes_visited += 1;

        if let Some(value) = board.outcome_for(original_player).value() {
            return value;
        }

        // A position that is neither won nor drawn always has at least one legal move.
        if maximizing {
            let mut best_eval = i32::MIN;
            for location in board.legal_moves() {
                let result = self.evaluate(&board.apply(location), false, original_player);
                best_eval = best_eval.max(result);
            }
            best_eval
        } else {
            let mut worst_eval = i32::MAX;
            for location in board.legal_moves() {
                let result = self.evaluate(&board.apply(location), true, original_player);
                worst_eval = worst_eval.min(result);
            }
            worst_eval
        }
    }

    /// Returns the value of every legal move for the side to move, in `legal_moves` order.
    #[instrument(skip(self, board), fields(side = ?board.side_to_move()))]
    pub fn evaluations<T: Board>(&mut self, board: &T) -> Result<Vec<(T::Move, i32)>> {
        ensure_searchable(board)?;

        let original_player = board.side_to_move();
        let scores = board
            .legal_moves()
            .into_iter()
            .map(|location| {
                let value = self.evaluate(&board.apply(location), false, original_player);
                debug!(?location, value, "evaluated candidate");
                (location, value)
            })
            .collect();
        Ok(scores)
    }

    /// Returns every move that reaches the best achievable value, in `legal_moves` order.
    pub fn best_moves<T: Board>(&mut self, board: &T) -> Result<Vec<T::Move>> {
        let scores = self.evaluations(board)?;
        let best = scores
            .iter()
            .map(|&(_, value)| value)
            .max()
            .ok_or(Error::NoLegalMove)?;

        Ok(scores
            .into_iter()
            .filter(|&(_, value)| value == best)
            .map(|(location, _)| location)
            .collect())
    }

    /// Returns the optimal move for the side to move, breaking ties by the configured policy.
    ///
    /// Fails with `Error::GameOver` on a won board and `Error::NoLegalMove` on a full one.
    #[instrument(skip(self, board), fields(side = ?board.side_to_move(), tie_break = ?self.tie_break))]
    pub fn find_best_move<T: Board>(&mut self, board: &T) -> Result<T::Move> {
        let best_move = match self.tie_break {
            TieBreak::LowestIndex => {
                let mut best: Option<(T::Move, i32)> = None;
                for (location, value) in self.evaluations(board)? {
                    if best.is_none_or(|(_, best_eval)| value > best_eval) {
                        best = Some((location, value));
                    }
                }
                best.map(|(location, _)| location)
            }
            TieBreak::Random => {
                let candidates = self.best_moves(board)?;
                self.random.choose(&candidates).copied()
            }
        };

        let best_move = best_move.ok_or(Error::NoLegalMove)?;
        debug!(?best_move, nodes = self.nodes_visited, "search finished");
        Ok(best_move)
    }
}

fn ensure_searchable<T: Board>(board: &T) -> Result<()> {
    if board.is_win() {
        return Err(Error::GameOver);
    }
    if board.legal_moves().is_empty() {
        return Err(Error::NoLegalMove);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::boards::tic_tac_toe::{Piece, TicTacToeBoard};
    use crate::error::Error;
    use crate::minimax::{Minimax, TieBreak, find_best_move, minimax};
    use crate::random::{CustomNumberGenerator, StandardRandomGenerator};

    const E: Piece = Piece::Empty;
    const X: Piece = Piece::X;
    const O: Piece = Piece::O;

    fn win_in_one() -> TicTacToeBoard {
        TicTacToeBoard::new([X, O, X, X, E, O, E, E, O], X, Some(8)).unwrap()
    }

    fn must_block() -> TicTacToeBoard {
        TicTacToeBoard::new([X, E, E, E, E, O, E, X, O], X, Some(8)).unwrap()
    }

    fn win_in_two() -> TicTacToeBoard {
        TicTacToeBoard::new([X, E, E, E, E, O, O, X, E], X, Some(6)).unwrap()
    }

    #[test]
    fn completes_an_open_line() {
        assert_eq!(find_best_move(&win_in_one()), Ok(6));
    }

    #[test]
    fn blocks_the_opponents_line() {
        // arrange
        let board = must_block();

        // act
        let best_move = find_best_move(&board).unwrap();

        // assert
        assert_eq!(best_move, 2);
        assert!(minimax(&board.play(best_move).unwrap(), false, X) >= 0);
        assert_eq!(minimax(&board.play(1).unwrap(), false, X), -1);
    }

    #[test]
    fn sets_up_a_double_threat() {
        // arrange
        let board = win_in_two();

        // act
        let best_move = find_best_move(&board).unwrap();

        // assert
        assert_eq!(best_move, 1);
        let after = board.play(best_move).unwrap();
        assert_eq!(minimax(&after, false, X), 1);
        for reply in after.legal_moves() {
            let reply_board = after.play(reply).unwrap();
            assert!(
                reply_board
                    .legal_moves()
                    .into_iter()
                    .any(|finish| reply_board.play(finish).unwrap().winner() == Some(X)),
                "no immediate win after O plays {reply}"
            );
        }
    }

    #[test]
    fn same_board_gives_same_move() {
        for board in [win_in_one(), must_block(), win_in_two()] {
            assert_eq!(find_best_move(&board), find_best_move(&board));
        }
    }

    #[test]
    fn empty_board_is_a_draw_with_perfect_play() {
        // arrange
        let board = TicTacToeBoard::default();
        let mut search = Minimax::<StandardRandomGenerator>::default();

        // act
        let scores = search.evaluations(&board).unwrap();

        // assert
        assert_eq!(scores.len(), 9);
        assert!(scores.iter().all(|&(_, value)| value == 0));
        assert_eq!(find_best_move(&board), Ok(0));
    }

    #[test]
    fn only_the_center_holds_against_a_corner_opening() {
        let board = TicTacToeBoard::default().play(0).unwrap();
        let mut search = Minimax::<StandardRandomGenerator>::default();

        assert_eq!(search.best_moves(&board), Ok(vec![4]));
        assert_eq!(minimax(&board, true, O), 0);
    }

    #[test]
    fn terminal_positions_evaluate_directly() {
        let won = TicTacToeBoard::new([X, X, X, O, O, E, E, E, E], O, Some(2)).unwrap();
        let drawn = TicTacToeBoard::new([X, O, X, X, O, O, O, X, X], O, Some(8)).unwrap();

        assert_eq!(minimax(&won, true, X), 1);
        assert_eq!(minimax(&won, false, O), -1);
        assert_eq!(minimax(&drawn, true, X), 0);
    }

    #[test]
    fn terminal_boards_have_no_best_move() {
        let won = TicTacToeBoard::new([X, X, X, O, O, E, E, E, E], O, Some(2)).unwrap();
        let drawn = TicTacToeBoard::new([X, O, X, X, O, O, O, X, X], O, Some(8)).unwrap();

        assert_eq!(find_best_move(&won), Err(Error::GameOver));
        assert_eq!(find_best_move(&drawn), Err(Error::NoLegalMove));
    }

    #[test]
    fn evaluations_report_each_candidate() {
        // arrange
        let mut search = Minimax::<StandardRandomGenerator>::default();

        // act
        let scores = search.evaluations(&win_in_one()).unwrap();

        // assert
        assert_eq!(scores, vec![(4, 0), (6, 1), (7, 0)]);
        assert_eq!(search.nodes_visited(), 11);

        search.reset_stats();
        assert_eq!(search.nodes_visited(), 0);
    }

    #[test]
    fn best_moves_lists_every_tie() {
        let board = TicTacToeBoard::new([X, X, E, X, O, O, E, O, E], X, Some(7)).unwrap();
        let mut search = Minimax::<StandardRandomGenerator>::default();

        assert_eq!(search.best_moves(&board), Ok(vec![2, 6, 8]));
        assert_eq!(search.find_best_move(&board), Ok(2));
    }

    #[test]
    fn random_tie_break_picks_an_optimal_move() {
        // arrange
        let board = TicTacToeBoard::new([X, X, E, X, O, O, E, O, E], X, Some(7)).unwrap();
        let mut first = Minimax::builder()
            .with_random_generator(CustomNumberGenerator::new(11))
            .with_tie_break(TieBreak::Random)
            .build();
        let mut second = Minimax::builder()
            .with_random_generator(CustomNumberGenerator::new(11))
            .with_tie_break(TieBreak::Random)
            .build();

        // act
        let picks: Vec<usize> = (0..10)
            .map(|_| first.find_best_move(&board).unwrap())
            .collect();
        let repeat: Vec<usize> = (0..10)
            .map(|_| second.find_best_move(&board).unwrap())
            .collect();

        // assert
        assert_eq!(first.tie_break(), TieBreak::Random);
        assert!(picks.iter().all(|location| [2, 6, 8].contains(location)));
        assert_eq!(picks, repeat);
    }

    #[test]
    fn random_tie_break_never_changes_a_forced_move() {
        let mut search = Minimax::<StandardRandomGenerator>::builder()
            .with_tie_break(TieBreak::Random)
            .build();

        assert_eq!(search.find_best_move(&win_in_one()), Ok(6));
        assert_eq!(search.find_best_move(&must_block()), Ok(2));
    }
}
