use crate::{debug_log, log};
use super::board::Board;
use super::bot_controller::{BotInput, search_best_move};
use super::score_board::ScoreBoard;
use super::types::{CELL_COUNT, GameMode, InvalidMove, Mark, Outcome};
use super::win_detector::check_win;

/// Result of one accepted `place_mark` call. In computer mode the reply is
/// already on the board when this is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub cell: usize,
    pub mark: Mark,
    pub computer_move: Option<usize>,
    pub outcome: Outcome,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_mark: Mark,
    pub mode: GameMode,
    pub outcome: Outcome,
    pub scores: ScoreBoard,
    pub last_move: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    mode: GameMode,
    scores: ScoreBoard,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            mode,
            scores: ScoreBoard::new(mode),
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn outcome(&self) -> Outcome {
        evaluate_outcome(&self.board)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            current_mark: self.current_mark,
            mode: self.mode,
            outcome: self.outcome(),
            scores: self.scores,
            last_move: self.last_move,
        }
    }

    /// Places the current mark on `cell`. If that hands the turn to the
    /// computer, its reply is searched and applied before returning.
    pub fn place_mark(&mut self, cell: usize) -> Result<TurnReport, InvalidMove> {
        let mark = self.current_mark;
        let mut outcome = self.apply_move(cell)?;
        let mut computer_move = None;

        if let Some((reply, next)) = self.play_computer_turn() {
            outcome = next;
            computer_move = Some(reply);
        }

        Ok(TurnReport {
            cell,
            mark,
            computer_move,
            outcome,
        })
    }

    /// Plays the computer's mark if the game is running and it is the
    /// computer's turn in the current mode.
    fn play_computer_turn(&mut self) -> Option<(usize, Outcome)> {
        if self.outcome().is_terminal() || self.mode.computer_mark() != Some(self.current_mark) {
            return None;
        }

        let input = BotInput::from_game_state(self);
        let Some(result) = search_best_move(&input) else {
            log!("Computer ({}) found no move on a running game", input.bot_mark);
            return None;
        };
        debug_log!(
            "Computer ({}) chose cell {} with value {} after {} nodes",
            input.bot_mark,
            result.cell,
            result.value,
            result.nodes
        );
        debug_assert!(
            input.board.is_valid_move(result.cell),
            "search returned unplayable cell {}",
            result.cell
        );

        match self.apply_move(result.cell) {
            Ok(outcome) => Some((result.cell, outcome)),
            Err(e) => {
                log!("Computer move at cell {} was rejected: {}", result.cell, e);
                None
            }
        }
    }

    fn apply_move(&mut self, cell: usize) -> Result<Outcome, InvalidMove> {
        if self.outcome().is_terminal() {
            return Err(InvalidMove::GameOver);
        }
        if cell >= CELL_COUNT {
            return Err(InvalidMove::OutOfRange { cell });
        }
        if self.board.get(cell).is_some() {
            return Err(InvalidMove::Occupied { cell });
        }

        let mark = self.current_mark;
        self.board.set(cell, mark);
        self.last_move = Some(cell);

        if check_win(&self.board, mark) {
            self.scores.record_win(mark);
            log!("{} wins ({} mode)", mark, self.mode_name());
            return Ok(Outcome::Win(mark));
        }

        if self.board.is_full() {
            log!("Game drawn ({} mode)", self.mode_name());
            return Ok(Outcome::Draw);
        }

        self.current_mark = mark.opponent();
        Ok(Outcome::InProgress)
    }

    /// Zeroes the Player 2 slot on every call, including reselecting the
    /// active mode. The board is kept; if the new mode hands the current turn
    /// to the computer, it moves before this returns.
    pub fn set_mode(&mut self, mode: GameMode) -> Option<usize> {
        self.mode = mode;
        self.scores.switch_mode(mode);
        log!("Mode set to {}", self.mode_name());

        self.play_computer_turn().map(|(cell, _)| cell)
    }

    pub fn restart(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.last_move = None;
        debug_log!("Board cleared");
    }

    pub fn reset_scores(&mut self) {
        self.scores.reset();
        debug_log!("Scores reset");
    }

    fn mode_name(&self) -> &'static str {
        match self.mode {
            GameMode::TwoPlayer => "two player",
            GameMode::VsComputer => "vs computer",
        }
    }
}

fn evaluate_outcome(board: &Board) -> Outcome {
    if check_win(board, Mark::X) {
        Outcome::Win(Mark::X)
    } else if check_win(board, Mark::O) {
        Outcome::Win(Mark::O)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
