use ratatui::style::Color;
use crate::constants::BOARD_WIDTH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceType {
    I, O, S, Z, T, L, J
}

impl PieceType {
    /// The shape catalog, in spawn-table order.
    pub const ALL: [PieceType; 7] = [
        PieceType::I, PieceType::O, PieceType::S, PieceType::Z,
        PieceType::T, PieceType::L, PieceType::J,
    ];

    pub fn shape(self) -> Vec<Vec<bool>> {
        let rows: &[&[u8]] = match self {
            PieceType::I => &[&[1, 1, 1, 1]],
            PieceType::O => &[&[1, 1], &[1, 1]],
            PieceType::S => &[&[0, 1, 1], &[1, 1, 0]],
            PieceType::Z => &[&[1, 1, 0], &[0, 1, 1]],
            PieceType::T => &[&[1, 1, 1], &[0, 1, 0]],
            PieceType::L => &[&[0, 0, 1], &[1, 1, 1]],
            PieceType::J => &[&[1, 0, 0], &[1, 1, 1]],
        };
        rows.iter()
            .map(|row| row.iter().map(|&cell| cell == 1).collect())
            .collect()
    }

    pub fn color(self) -> Color {
        match self {
            PieceType::I => Color::Cyan,
            PieceType::O => Color::Yellow,
            PieceType::S => Color::Green,
            PieceType::Z => Color::Red,
            PieceType::T => Color::Blue,
            PieceType::L => Color::Rgb(255, 165, 0),
            PieceType::J => Color::Magenta,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub piece_type: PieceType,
    pub shape: Vec<Vec<bool>>,
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Piece {
    pub fn new(piece_type: PieceType) -> Self {
        let shape = piece_type.shape();
        let width = shape[0].len() as i32;

        Self {
            piece_type,
            shape,
            x: BOARD_WIDTH as i32 / 2 - width / 2,
            y: 0,
            color: piece_type.color(),
        }
    }

    pub fn width(&self) -> usize {
        self.shape.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.shape.len()
    }

    /// Transpose, then reverse the row order. An h x w matrix becomes w x h.
    pub fn rotate_counter_clockwise(&self) -> Self {
        let mut rotated = self.clone();
        let (height, width) = (self.height(), self.width());
        let mut new_shape = vec![vec![false; height]; width];

        for i in 0..height {
            for j in 0..width {
                new_shape[width - 1 - j][i] = self.shape[i][j];
            }
        }

        rotated.shape = new_shape;
        rotated
    }

    /// Inverse of [`Piece::rotate_counter_clockwise`].
    pub fn rotate_clockwise(&self) -> Self {
        let mut rotated = self.clone();
        let (height, width) = (self.height(), self.width());
        let mut new_shape = vec![vec![false; height]; width];

        for i in 0..height {
            for j in 0..width {
                new_shape[j][height - 1 - i] = self.shape[i][j];
            }
        }

        rotated.shape = new_shape;
        rotated
    }

    pub fn get_blocks(&self) -> Vec<(i32, i32)> {
        let mut blocks = Vec::new();
        for (i, row) in self.shape.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell {
                    blocks.push((self.x + j as i32, self.y + i as i32));
                }
            }
        }
        blocks
    }
}
