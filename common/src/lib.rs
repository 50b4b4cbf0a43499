pub mod config;
pub mod games;
pub mod logger;

pub use games::GameBroadcaster;
pub use games::tictactoe::{GameMode, Mark, Outcome};
