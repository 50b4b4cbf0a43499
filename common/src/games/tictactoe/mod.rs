mod board;
mod bot_controller;
mod game_state;
mod score_board;
mod session;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{BotInput, SearchResult, calculate_minimax_move, search_best_move};
pub use game_state::{GameSnapshot, TicTacToeGameState, TurnReport};
pub use score_board::{PlayerTwoScore, ScoreBoard};
pub use session::{GameOverNotification, TicTacToeSession};
pub use types::{BOARD_SIDE, CELL_COUNT, GameMode, InvalidMove, Mark, Outcome, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
