use std::cell::RefCell;
use std::io::{self, Stdout, Write};

use tictactoe_common::games::tictactoe::{GameOverNotification, GameSnapshot, ScoreBoard};
use tictactoe_common::{GameBroadcaster, log};

use crate::config::LabelConfig;
use crate::ui;

/// Writes every session update as text. Output failures are logged, not raised.
pub struct ConsoleBroadcaster<W: Write> {
    labels: LabelConfig,
    out: RefCell<W>,
}

impl ConsoleBroadcaster<Stdout> {
    pub fn stdout(labels: LabelConfig) -> Self {
        Self::new(labels, io::stdout())
    }
}

impl<W: Write> ConsoleBroadcaster<W> {
    pub fn new(labels: LabelConfig, out: W) -> Self {
        Self {
            labels,
            out: RefCell::new(out),
        }
    }

    pub fn print(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "{}\n", text).and_then(|_| out.flush()) {
            log!("Failed to write to console: {}", e);
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> GameBroadcaster for ConsoleBroadcaster<W> {
    fn broadcast_state(&self, state: &GameSnapshot) {
        self.print(&ui::render_state(state, &self.labels));
    }

    fn broadcast_game_over(&self, notification: &GameOverNotification) {
        let message = ui::render_outcome(
            notification.winner,
            notification.scores.mode(),
            &self.labels,
        );
        let scores = ui::render_scores(&notification.scores, &self.labels);
        self.print(&format!("{}\n{}\nType `restart` to play again", message, scores));
    }

    fn broadcast_scores(&self, scores: &ScoreBoard) {
        self.print(&ui::render_scores(scores, &self.labels));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::GameMode;
    use tictactoe_common::games::tictactoe::TicTacToeSession;

    fn output_of(session: TicTacToeSession<ConsoleBroadcaster<Vec<u8>>>) -> String {
        String::from_utf8(session.into_broadcaster().into_inner()).unwrap()
    }

    #[test]
    fn test_computer_win_is_announced_with_scores() {
        let broadcaster = ConsoleBroadcaster::new(LabelConfig::default(), Vec::new());
        let mut session = TicTacToeSession::new(GameMode::VsComputer, broadcaster);
        for cell in [0, 1, 3] {
            session.submit_move(cell).unwrap();
        }

        let output = output_of(session);

        assert!(output.contains("Robo (O) wins!"), "{}", output);
        assert!(output.contains("Robo (O) Score: 1"), "{}", output);
        assert!(output.contains("Player 1 (X) Score: 0"), "{}", output);
    }

    #[test]
    fn test_mode_selection_prints_scores_then_board() {
        let broadcaster = ConsoleBroadcaster::new(LabelConfig::default(), Vec::new());
        let mut session = TicTacToeSession::new(GameMode::VsComputer, broadcaster);

        session.select_mode(GameMode::TwoPlayer);

        let output = output_of(session);
        let scores_at = output.find("Player 2 (O) Score: 0").unwrap();
        let board_at = output.find(" 1 | 2 | 3 ").unwrap();
        assert!(scores_at < board_at, "{}", output);
        assert!(output.contains("Player 1 (X) to move"), "{}", output);
    }

    #[test]
    fn test_custom_labels_are_used() {
        let labels = LabelConfig {
            player_x: "Ada".to_string(),
            player_two: "Grace".to_string(),
            computer: "HAL".to_string(),
        };
        let broadcaster = ConsoleBroadcaster::new(labels, Vec::new());
        let mut session = TicTacToeSession::new(GameMode::TwoPlayer, broadcaster);
        for cell in [0, 3, 1, 4, 8, 5] {
            session.submit_move(cell).unwrap();
        }

        let output = output_of(session);

        assert!(output.contains("Grace (O) wins!"), "{}", output);
        assert!(output.contains("Ada (X) Score: 0"), "{}", output);
    }
}
