pub mod piece;
pub mod board;
pub mod options;
pub mod state;

pub use board::Cell;
pub use options::{GameOptions, GameOverRule};
pub use piece::{Piece, PieceType};
pub use state::{Game, GameState, Snapshot};
