use tictactoe_common::games::tictactoe::{
    BOARD_SIDE, Board, GameSnapshot, InvalidMove, ScoreBoard,
};
use tictactoe_common::{GameMode, Mark, Outcome};

use crate::config::LabelConfig;

pub fn player_label(labels: &LabelConfig, mark: Mark, mode: GameMode) -> String {
    let name = match (mark, mode) {
        (Mark::X, _) => &labels.player_x,
        (Mark::O, GameMode::TwoPlayer) => &labels.player_two,
        (Mark::O, GameMode::VsComputer) => &labels.computer,
    };
    format!("{} ({})", name, mark)
}

/// Empty cells show the number to type for them.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = (0..BOARD_SIDE)
        .map(|row| {
            (0..BOARD_SIDE)
                .map(|col| {
                    let cell = row * BOARD_SIDE + col;
                    match board.get(cell) {
                        Some(mark) => format!(" {} ", mark),
                        None => format!(" {} ", cell + 1),
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn render_state(snapshot: &GameSnapshot, labels: &LabelConfig) -> String {
    let mut out = String::new();

    let last_move = snapshot
        .last_move
        .and_then(|cell| snapshot.board.get(cell).map(|mark| (cell, mark)));
    if let Some((cell, mark)) = last_move {
        out.push_str(&format!(
            "{} played cell {}\n",
            player_label(labels, mark, snapshot.mode),
            cell + 1
        ));
    }

    out.push_str(&render_board(&snapshot.board));

    if snapshot.outcome == Outcome::InProgress {
        out.push_str(&format!(
            "\n{} to move",
            player_label(labels, snapshot.current_mark, snapshot.mode)
        ));
    }

    out
}

pub fn render_outcome(winner: Option<Mark>, mode: GameMode, labels: &LabelConfig) -> String {
    match winner {
        Some(mark) => format!("{} wins!", player_label(labels, mark, mode)),
        None => "It's a draw!".to_string(),
    }
}

pub fn render_scores(scores: &ScoreBoard, labels: &LabelConfig) -> String {
    format!(
        "{} Score: {}\n{} Score: {}",
        player_label(labels, Mark::X, scores.mode()),
        scores.player_x,
        player_label(labels, Mark::O, scores.mode()),
        scores.player_two.wins
    )
}

pub fn render_rejection(error: InvalidMove) -> String {
    match error {
        InvalidMove::GameOver => "The game is over, type `restart` to play again".to_string(),
        InvalidMove::OutOfRange { .. } => "Cells are numbered 1-9".to_string(),
        InvalidMove::Occupied { cell } => format!("Cell {} is already taken", cell + 1),
    }
}

pub fn help_text() -> &'static str {
    "Commands:\n  \
     1-9                  place your mark on that cell\n  \
     mode two|computer    switch mode (resets Player 2 score, restarts)\n  \
     restart              clear the board\n  \
     reset                zero both scores\n  \
     scores               show scores\n  \
     board                show the board\n  \
     help                 show this text\n  \
     quit                 leave"
}
