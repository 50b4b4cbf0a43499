use super::types::{GameMode, Mark};

/// Wins of whoever holds O. The slot is tagged with the mode it counts for,
/// so a human Player 2 and the computer never share a tally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerTwoScore {
    pub mode: GameMode,
    pub wins: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreBoard {
    pub player_x: u32,
    pub player_two: PlayerTwoScore,
}

impl ScoreBoard {
    pub fn new(mode: GameMode) -> Self {
        Self {
            player_x: 0,
            player_two: PlayerTwoScore { mode, wins: 0 },
        }
    }

    pub fn mode(&self) -> GameMode {
        self.player_two.mode
    }

    pub(crate) fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.player_x += 1,
            Mark::O => self.player_two.wins += 1,
        }
    }

    /// Re-tags the Player 2 slot and zeroes it. X's tally is kept.
    pub(crate) fn switch_mode(&mut self, mode: GameMode) {
        self.player_two = PlayerTwoScore { mode, wins: 0 };
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new(self.player_two.mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wins_go_to_matching_slot() {
        let mut scores = ScoreBoard::new(GameMode::TwoPlayer);
        scores.record_win(Mark::X);
        scores.record_win(Mark::O);
        scores.record_win(Mark::O);

        assert_eq!(scores.player_x, 1);
        assert_eq!(scores.player_two.wins, 2);
        assert_eq!(scores.mode(), GameMode::TwoPlayer);
    }

    #[test]
    fn test_switch_mode_keeps_x_and_zeroes_player_two() {
        let mut scores = ScoreBoard::new(GameMode::TwoPlayer);
        scores.record_win(Mark::X);
        scores.record_win(Mark::O);

        scores.switch_mode(GameMode::VsComputer);

        assert_eq!(scores.player_x, 1);
        assert_eq!(scores.player_two, PlayerTwoScore { mode: GameMode::VsComputer, wins: 0 });
    }

    #[test]
    fn test_reset_zeroes_everything_and_keeps_mode() {
        let mut scores = ScoreBoard::new(GameMode::VsComputer);
        scores.record_win(Mark::X);
        scores.record_win(Mark::O);

        scores.reset();

        assert_eq!(scores, ScoreBoard::new(GameMode::VsComputer));
    }
}
