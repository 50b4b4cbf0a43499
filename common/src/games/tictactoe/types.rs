use derive_more::Display;
use serde::{Deserialize, Serialize};

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    TwoPlayer,
    VsComputer,
}

impl GameMode {
    /// Mark controlled by the search engine in this mode, if any.
    pub fn computer_mark(&self) -> Option<Mark> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VsComputer => Some(Mark::O),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

/// Rejected move. The game state is left exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum InvalidMove {
    #[display("game is already over")]
    GameOver,
    #[display("cell {cell} is out of range")]
    OutOfRange { cell: usize },
    #[display("cell {cell} is already marked")]
    Occupied { cell: usize },
}

impl std::error::Error for InvalidMove {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}
