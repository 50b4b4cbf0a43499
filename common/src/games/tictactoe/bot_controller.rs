use super::board::{Board, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::{CELL_COUNT, Mark};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 1;
const LOSE_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }

    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            bot_mark: state.current_mark(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub cell: usize,
    /// Minimax value of `cell` from the bot's side: 1 win, 0 draw, -1 loss.
    pub value: i32,
    pub nodes: u64,
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    search_best_move(input).map(|result| result.cell)
}

/// Full-depth minimax over every continuation of `input.board`.
///
/// The bot maximizes, its opponent minimizes. Ties between equally valued
/// moves go to the lowest cell index. Returns `None` when the position is
/// already decided or has no empty cell.
pub fn search_best_move(input: &BotInput) -> Option<SearchResult> {
    let bot_mark = input.bot_mark;
    if check_win(&input.board, bot_mark) || check_win(&input.board, bot_mark.opponent()) {
        return None;
    }

    // Scratch copy: every tentative mark below is undone before the next one.
    let mut board = input.board;
    let mut nodes = 0u64;
    let mut best: Option<(usize, i32)> = None;

    for cell in get_available_moves(&input.board) {
        board.set(cell, bot_mark);
        let value = minimax(&mut board, false, bot_mark, &mut nodes);
        board.clear(cell);

        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((cell, value));
        }
    }

    debug_assert_eq!(board, input.board);

    best.map(|(cell, value)| SearchResult { cell, value, nodes })
}

fn minimax(board: &mut Board, is_maximizing: bool, bot_mark: Mark, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if check_win(board, bot_mark) {
        return WIN_SCORE;
    }
    if check_win(board, bot_mark.opponent()) {
        return LOSE_SCORE;
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    let move_mark = if is_maximizing {
        bot_mark
    } else {
        bot_mark.opponent()
    };
    let mut best_eval = if is_maximizing { i32::MIN } else { i32::MAX };

    for cell in 0..CELL_COUNT {
        if !board.is_valid_move(cell) {
            continue;
        }

        board.set(cell, move_mark);
        let eval = minimax(board, !is_maximizing, bot_mark, nodes);
        board.clear(cell);

        best_eval = if is_maximizing {
            best_eval.max(eval)
        } else {
            best_eval.min(eval)
        };
    }

    best_eval
}
