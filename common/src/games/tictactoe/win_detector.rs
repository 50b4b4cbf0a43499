use super::board::Board;
use super::types::{Mark, WinningLine};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&cell| board.get(cell) == Some(mark)))
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in WINNING_LINES {
        let Some(mark) = board.get(line[0]) else {
            continue;
        };
        if board.get(line[1]) == Some(mark) && board.get(line[2]) == Some(mark) {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}
