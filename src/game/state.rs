use std::time::Instant;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::game::board::{self, Board, Cell, empty_board};
use crate::game::options::{GameOptions, GameOverRule};
use crate::game::piece::{Piece, PieceType};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    Running,
    GameOver,
}

/// Read-only view handed to renderers once per frame.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub board: Board,
    pub piece: Piece,
    pub game_over: bool,
}

impl Snapshot {
    /// The board with the active piece drawn on top. Cells above row 0 are dropped.
    pub fn composite(&self) -> Board {
        let mut cells = self.board;
        for (x, y) in self.piece.get_blocks() {
            if x >= 0 && x < BOARD_WIDTH as i32 && y >= 0 && y < BOARD_HEIGHT as i32 {
                cells[y as usize][x as usize] = Cell::Filled(self.piece.color);
            }
        }
        cells
    }
}

pub struct Game<R = StdRng> {
    pub board: Board,
    pub current_piece: Piece,
    pub game_state: GameState,
    pub options: GameOptions,
    pub drop_timer: Instant,
    rng: R,
}

impl Game<StdRng> {
    pub fn new(options: GameOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(options, rng)
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(options: GameOptions, rng: R) -> Self {
        let mut game = Self {
            board: empty_board(),
            current_piece: Piece::new(PieceType::O),
            game_state: GameState::Running,
            options,
            drop_timer: Instant::now(),
            rng,
        };
        game.reset();
        game
    }

    fn random_piece_type(rng: &mut R) -> PieceType {
        PieceType::ALL[rng.gen_range(0..PieceType::ALL.len())]
    }

    /// Starts a fresh game. Also the restart path out of `GameOver`.
    pub fn reset(&mut self) {
        self.board = empty_board();
        self.game_state = GameState::Running;
        self.drop_timer = Instant::now();
        self.spawn_piece();
    }

    pub fn is_game_over(&self) -> bool {
        self.game_state == GameState::GameOver
    }

    pub fn spawn_piece(&mut self) {
        let piece_type = Self::random_piece_type(&mut self.rng);
        self.place_new_piece(piece_type);
    }

    /// Replaces the active piece with a fresh one of `piece_type` at the spawn point.
    pub fn place_new_piece(&mut self, piece_type: PieceType) {
        self.current_piece = Piece::new(piece_type);
        if !self.is_valid_position(&self.current_piece) {
            self.game_state = GameState::GameOver;
        }
    }

    pub fn is_valid_position(&self, piece: &Piece) -> bool {
        board::is_valid_position(piece, &self.board)
    }

    pub fn move_piece(&mut self, dx: i32, dy: i32) -> bool {
        if self.is_game_over() {
            return false;
        }

        let mut test_piece = self.current_piece.clone();
        test_piece.x += dx;
        test_piece.y += dy;

        if self.is_valid_position(&test_piece) {
            self.current_piece = test_piece;
            true
        } else {
            false
        }
    }

    /// Turns counter-clockwise, falling back to a clockwise turn from the
    /// original shape. No positional kicks. If neither fits the piece is unchanged.
    pub fn rotate_piece(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        let rotated = self.current_piece.rotate_counter_clockwise();
        if self.is_valid_position(&rotated) {
            self.current_piece = rotated;
            return true;
        }

        let fallback = self.current_piece.rotate_clockwise();
        if self.is_valid_position(&fallback) {
            self.current_piece = fallback;
            return true;
        }

        false
    }

    pub fn soft_drop(&mut self) -> bool {
        self.move_piece(0, 1)
    }

    /// Returns false without touching the piece when hard drop is disabled.
    pub fn hard_drop(&mut self) -> bool {
        if !self.options.hard_drop_enabled || self.is_game_over() {
            return false;
        }
        while self.move_piece(0, 1) {}
        self.lock_piece();
        true
    }

    /// One gravity step: fall a row, or lock and bring in the next piece.
    pub fn tick(&mut self) {
        if self.is_game_over() {
            return;
        }
        if !self.move_piece(0, 1) {
            self.lock_piece();
        }
    }

    pub fn lock_piece(&mut self) {
        if self.is_game_over() {
            return;
        }

        let color = self.current_piece.color;
        for (x, y) in self.current_piece.get_blocks() {
            if y >= 0 && x >= 0 {
                self.board[y as usize][x as usize] = Cell::Filled(color);
            }
        }

        self.clear_lines();

        if self.options.game_over_rule == GameOverRule::TopRow && board::top_row_occupied(&self.board) {
            self.game_state = GameState::GameOver;
            return;
        }

        self.spawn_piece();
    }

    pub fn clear_lines(&mut self) -> usize {
        board::clear_lines(&mut self.board)
    }

    /// Runs a tick if the interval has elapsed since the last one.
    pub fn update_at(&mut self, now: Instant) -> bool {
        if self.is_game_over() {
            return false;
        }
        if now.duration_since(self.drop_timer) < self.options.tick_interval {
            return false;
        }
        self.drop_timer = now;
        self.tick();
        true
    }

    pub fn update(&mut self) -> bool {
        self.update_at(Instant::now())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            piece: self.current_piece.clone(),
            game_over: self.is_game_over(),
        }
    }
}
