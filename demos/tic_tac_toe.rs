extern crate minimax_lib;

use minimax_lib::boards::tic_tac_toe::Piece::{Empty as E, O, X};
use minimax_lib::boards::tic_tac_toe::TicTacToeBoard;
use minimax_lib::minimax::Minimax;
use minimax_lib::random::StandardRandomGenerator;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> minimax_lib::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // win in 1 move
    let to_win_easy = TicTacToeBoard::new([X, O, X, X, E, O, E, E, O], X, Some(8))?;
    // must block O's win
    let to_block = TicTacToeBoard::new([X, E, E, E, E, O, E, X, O], X, Some(8))?;
    // win in 2 moves
    let to_win_hard = TicTacToeBoard::new([X, E, E, E, E, O, O, X, E], X, Some(6))?;

    let mut search = Minimax::<StandardRandomGenerator>::default();
    for board in [to_win_easy, to_block, to_win_hard] {
        search.reset_stats();
        let best_move = search.find_best_move(&board)?;
        info!(nodes = search.nodes_visited(), "searched\n{board}");
        println!("{best_move}");
    }

    Ok(())
}
