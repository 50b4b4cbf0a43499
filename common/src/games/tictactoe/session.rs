use crate::games::GameBroadcaster;
use crate::{debug_log, log};
use super::game_state::{GameSnapshot, TicTacToeGameState, TurnReport};
use super::score_board::ScoreBoard;
use super::types::{GameMode, InvalidMove, Mark, Outcome};
use super::win_detector::check_win_with_line;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOverNotification {
    pub winner: Option<Mark>,
    pub winning_line: Option<[usize; 3]>,
    pub scores: ScoreBoard,
}

/// Entry points used by a frontend. Every accepted input is followed by the
/// matching broadcasts before the call returns.
pub struct TicTacToeSession<B: GameBroadcaster> {
    game_state: TicTacToeGameState,
    broadcaster: B,
}

impl<B: GameBroadcaster> TicTacToeSession<B> {
    pub fn new(mode: GameMode, broadcaster: B) -> Self {
        Self {
            game_state: TicTacToeGameState::new(mode),
            broadcaster,
        }
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    pub fn into_broadcaster(self) -> B {
        self.broadcaster
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn submit_move(&mut self, cell: usize) -> Result<TurnReport, InvalidMove> {
        match self.game_state.place_mark(cell) {
            Ok(report) => {
                self.broadcaster.broadcast_state(&self.game_state.snapshot());
                if report.outcome.is_terminal() {
                    let notification = self.build_game_over_notification(report.outcome);
                    self.broadcaster.broadcast_game_over(&notification);
                }
                Ok(report)
            }
            Err(e) => {
                debug_log!("Rejected move at cell {}: {}", cell, e);
                Err(e)
            }
        }
    }

    /// Switching mode always starts a fresh board as well.
    pub fn select_mode(&mut self, mode: GameMode) {
        self.game_state.set_mode(mode);
        self.game_state.restart();
        self.broadcaster.broadcast_scores(&self.game_state.scores());
        self.broadcaster.broadcast_state(&self.game_state.snapshot());
    }

    pub fn request_restart(&mut self) {
        self.game_state.restart();
        log!("Game restarted");
        self.broadcaster.broadcast_state(&self.game_state.snapshot());
    }

    pub fn reset_scores(&mut self) {
        self.game_state.reset_scores();
        self.broadcaster.broadcast_scores(&self.game_state.scores());
    }

    pub fn query_state(&self) -> GameSnapshot {
        self.game_state.snapshot()
    }

    fn build_game_over_notification(&self, outcome: Outcome) -> GameOverNotification {
        let winning_line = match outcome {
            Outcome::Win(_) => check_win_with_line(self.game_state.board()).map(|line| line.cells),
            _ => None,
        };

        GameOverNotification {
            winner: outcome.winner(),
            winning_line,
            scores: self.game_state.scores(),
        }
    }
}
