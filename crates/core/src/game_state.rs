//! Game state module - the falling-block engine
//!
//! Owns the board, the active piece, the score pair and the game-over flag.
//! Every mutation is a plain method call; the host decides when to call
//! [`GameState::tick`] and when to forward input.

use crate::board::ClearedRows;
use crate::pieces::{get_shape, try_rotate, PieceShape};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::{Board, SimpleRng};
use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    /// Current mino offsets; replaced on every successful rotation.
    pub blocks: PieceShape,
}

impl Tetromino {
    /// Create a new tetromino at spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            x: SPAWN_X,
            y: SPAWN_Y,
            blocks: get_shape(kind),
        }
    }

    /// Absolute board coordinates of the four minos
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.blocks.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check if every mino, shifted by (dx, dy), is in bounds over an empty cell
    pub fn fits(&self, board: &Board, dx: i8, dy: i8) -> bool {
        self.blocks.iter().all(|&(mx, my)| {
            let x = self.x.checked_add(mx).and_then(|x| x.checked_add(dx));
            let y = self.y.checked_add(my).and_then(|y| y.checked_add(dy));
            matches!((x, y), (Some(x), Some(y)) if board.is_valid(x, y))
        })
    }
}

/// Result of one [`GameState::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game over (or not started): nothing changed.
    Idle,
    /// The game advanced; the piece either fell a row or locked and was replaced.
    Advanced {
        score: u32,
        high_score: u32,
        locked: bool,
        lines_cleared: u32,
    },
    /// The replacement piece could not spawn. Reported once per game.
    GameOver { final_score: u32, high_score: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    rng: SimpleRng,
    score: u32,
    /// Best score of this process; survives restarts.
    high_score: u32,
    game_over: bool,
}

impl GameState {
    /// Create a game with the given RNG seed. Call [`GameState::start_game`]
    /// to spawn the first piece.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            rng: SimpleRng::new(seed),
            score: 0,
            high_score: 0,
            game_over: false,
        }
    }

    /// Reset board, score and game-over flag, then spawn a piece.
    pub fn start_game(&mut self) {
        self.board.clear();
        self.game_over = false;
        self.score = 0;
        self.spawn_piece();
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn active_cells(&self) -> Option<[(i8, i8); 4]> {
        self.active.map(|p| p.cells())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scripted setups (tests, benches, replays).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece without any validity check.
    pub fn set_active(&mut self, piece: Tetromino) {
        self.active = Some(piece);
    }

    /// Pick a shape uniformly at random and place it at the spawn point.
    ///
    /// Does not check whether the spawn cells are free; [`GameState::tick`]
    /// does that to detect game over.
    pub fn spawn_piece(&mut self) -> Tetromino {
        let piece = Tetromino::new(self.rng.next_piece());
        self.active = Some(piece);
        piece
    }

    /// Check whether the active piece translated by (dx, dy) fits the board.
    pub fn is_move_valid(&self, dx: i8, dy: i8) -> bool {
        match self.active {
            Some(ref piece) => piece.fits(&self.board, dx, dy),
            None => false,
        }
    }

    /// Translate the active piece if the target position is valid.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        if !self.is_move_valid(dx, dy) {
            return false;
        }
        if let Some(ref mut piece) = self.active {
            piece.x += dx;
            piece.y += dy;
        }
        true
    }

    /// Rotate the active piece about its origin, no kicks.
    pub fn rotate_piece(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        match try_rotate(&active.blocks, active.x, active.y, |x, y| {
            self.board.is_valid(x, y)
        }) {
            Some(blocks) => {
                self.active = Some(Tetromino { blocks, ..active });
                true
            }
            None => false,
        }
    }

    /// Write the active piece's cells into the board.
    ///
    /// The caller guarantees the piece is in a valid position; cells outside
    /// the board are skipped.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active else {
            return;
        };
        self.board.lock_cells(&active.blocks, active.x, active.y);
    }

    /// Remove every full row and add one point per row.
    pub fn clear_lines(&mut self) -> ClearedRows {
        let cleared = self.board.clear_full_rows();
        self.score += cleared.len() as u32;
        cleared
    }

    /// Advance one gravity step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over || self.active.is_none() {
            return TickOutcome::Idle;
        }

        let mut locked = false;
        let mut lines_cleared = 0;

        if !self.is_move_valid(0, 1) {
            self.lock_piece();
            lines_cleared = self.clear_lines().len() as u32;
            self.spawn_piece();
            locked = true;

            if !self.is_move_valid(0, 0) {
                self.game_over = true;
                self.update_high_score();
                return TickOutcome::GameOver {
                    final_score: self.score,
                    high_score: self.high_score,
                };
            }
        }

        self.move_piece(0, 1);
        self.update_high_score();

        TickOutcome::Advanced {
            score: self.score,
            high_score: self.high_score,
            locked,
            lines_cleared,
        }
    }

    fn update_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Write a renderer-facing snapshot into `out` without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.high_score = self.high_score;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
