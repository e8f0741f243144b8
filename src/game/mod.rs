//! Connect Four board evaluation: the grid, win and draw detection, and a
//! small turn-taking controller built on top of it.

mod board;
mod line;
mod player;
mod state;

pub use board::{BoardSnapshot, BoardState, Color, COLS, LINE_LEN, ROWS};
pub use line::{Direction, Line};
pub use player::Player;
pub use state::{GameOutcome, GameState};
