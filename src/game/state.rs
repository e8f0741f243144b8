use serde::Serialize;

use super::{BoardState, Line, Player};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Turn order and game-over bookkeeping around a [`BoardState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: BoardState,
    current_player: Player,
    last_move: Option<(usize, usize)>,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create an empty game where `first` moves first
    pub fn new(first: Player) -> Self {
        GameState {
            board: BoardState::new(),
            current_player: first,
            last_move: None,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// (row, column) of the most recent piece
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns the current player may choose
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// The four cells that decided the game, if someone won
    pub fn winning_line(&self) -> Option<Line> {
        match self.outcome {
            Some(GameOutcome::Winner(_)) => self.board.winning_line(),
            _ => None,
        }
    }

    /// Drop the current player's piece in `column`, returns the landing row
    pub fn play(&mut self, column: usize) -> Result<usize, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        let row = self.board.drop_piece(column, self.current_player.color())?;
        self.last_move = Some((row, column));

        let winner = self.board.is_won();
        debug_assert_eq!(winner, self.board.wins_through(row, column));

        if let Some(player) = Player::from_color(winner) {
            self.outcome = Some(GameOutcome::Winner(player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(row)
    }

    /// Apply a move and return new state (immutable)
    pub fn apply(&self, column: usize) -> Result<GameState, GameError> {
        let mut next = *self;
        next.play(column)?;
        Ok(next)
    }

    /// Start over with an empty board
    pub fn reset(&mut self, first: Player) {
        *self = GameState::new(first);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Player::default())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::error::BoardError;
    use crate::game::{Color, Direction};

    /// Fills the board row by row as `AABBAAB` / `BBAABBA`, which never
    /// contains four in a row.
    fn draw_sequence() -> Vec<usize> {
        [0, 2, 1, 3, 4, 6, 5].repeat(6)
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::default();
        assert_eq!(state.current_player(), Player::A);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_columns().len(), 7);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::new(Player::B);
        let next = state.apply(3).unwrap();

        assert_eq!(next.current_player(), Player::A);
        assert_eq!(next.board().get(0, 3), Ok(Color::PlayerB));
        assert_eq!(next.last_move(), Some((0, 3)));
        // Original untouched
        assert_eq!(state.board(), &BoardState::new());
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::default();

        // A builds the bottom row, B stacks on top
        for col in 0..4 {
            state.play(col).unwrap();
            if col < 3 {
                state.play(col).unwrap();
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::A)));
        let line = state.winning_line().unwrap();
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(line.cells(), [(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert!(state.legal_columns().is_empty());
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut state = GameState::default();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            state.play(col).unwrap();
        }
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::A)));
        assert_eq!(state.play(2), Err(GameError::GameOver));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut state = GameState::default();
        assert_eq!(
            state.play(9),
            Err(GameError::Board(BoardError::InvalidColumn(9)))
        );
        assert_eq!(state.current_player(), Player::A);

        for _ in 0..6 {
            state.play(0).unwrap();
        }
        assert_eq!(
            state.play(0),
            Err(GameError::Board(BoardError::ColumnFull(0)))
        );
        assert_eq!(state.current_player(), Player::A);
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::default();
        let moves = draw_sequence();

        for (i, &col) in moves.iter().enumerate() {
            assert!(!state.is_terminal(), "game ended early at move {i}");
            state.play(col).unwrap();
        }

        assert!(state.board().is_full());
        assert_eq!(state.board().is_won(), Color::Empty);
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_incremental_check_matches_full_scan() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let mut state = GameState::default();
            while !state.is_terminal() {
                let legal = state.legal_columns();
                let col = legal[rng.gen_range(0..legal.len())];
                let row = state.play(col).unwrap();
                assert_eq!(state.board().wins_through(row, col), state.board().is_won());
            }
        }
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::default();
        state.play(3).unwrap();
        state.reset(Player::B);
        assert_eq!(state, GameState::new(Player::B));
    }
}
