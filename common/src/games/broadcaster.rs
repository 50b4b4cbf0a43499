use crate::games::tictactoe::{GameOverNotification, GameSnapshot, ScoreBoard};

/// Outbound side of a session: whatever presents the game to the players.
pub trait GameBroadcaster {
    fn broadcast_state(&self, state: &GameSnapshot);

    fn broadcast_game_over(&self, notification: &GameOverNotification);

    fn broadcast_scores(&self, scores: &ScoreBoard);
}
