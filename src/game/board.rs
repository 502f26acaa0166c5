use ratatui::style::Color;
use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::game::piece::Piece;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Filled(Color),
}

pub type Row = [Cell; BOARD_WIDTH];
pub type Board = [Row; BOARD_HEIGHT];

pub fn empty_board() -> Board {
    [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT]
}

pub fn is_row_full(row: &Row) -> bool {
    row.iter().all(|&cell| cell != Cell::Empty)
}

pub fn top_row_occupied(board: &Board) -> bool {
    board[0].iter().any(|&cell| cell != Cell::Empty)
}

pub fn occupied_cells(board: &Board) -> usize {
    board.iter().flatten().filter(|&&cell| cell != Cell::Empty).count()
}

/// Cells above the board (negative rows) are allowed; walls and the floor are not.
pub fn is_valid_position(piece: &Piece, board: &Board) -> bool {
    for (x, y) in piece.get_blocks() {
        if x < 0 || x >= BOARD_WIDTH as i32 || y >= BOARD_HEIGHT as i32 {
            return false;
        }
        if y >= 0 && board[y as usize][x as usize] != Cell::Empty {
            return false;
        }
    }
    true
}

/// Removes every full row in one bottom-up pass and returns how many went.
pub fn clear_lines(board: &mut Board) -> usize {
    let mut write_row = BOARD_HEIGHT;

    // Copy kept rows down; write_row never passes read_row
    for read_row in (0..BOARD_HEIGHT).rev() {
        if !is_row_full(&board[read_row]) {
            write_row -= 1;
            if read_row != write_row {
                board[write_row] = board[read_row];
            }
        }
    }

    for row in board[..write_row].iter_mut() {
        *row = [Cell::Empty; BOARD_WIDTH];
    }

    write_row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::piece::PieceType;

    const GRAY: Cell = Cell::Filled(Color::Gray);

    fn fill_row(board: &mut Board, y: usize) {
        board[y] = [GRAY; BOARD_WIDTH];
    }

    #[test]
    fn rejects_walls_and_floor() {
        let board = empty_board();
        let mut piece = Piece::new(PieceType::O);

        piece.x = -1;
        assert!(!is_valid_position(&piece, &board));
        piece.x = BOARD_WIDTH as i32 - 1;
        assert!(!is_valid_position(&piece, &board));
        piece.x = 0;
        piece.y = BOARD_HEIGHT as i32 - 1;
        assert!(!is_valid_position(&piece, &board));
        piece.y = BOARD_HEIGHT as i32 - 2;
        assert!(is_valid_position(&piece, &board));
    }

    #[test]
    fn rows_above_the_board_are_valid() {
        let board = empty_board();
        let mut piece = Piece::new(PieceType::O);
        piece.y = -1;
        assert!(is_valid_position(&piece, &board));
        piece.x = -1;
        assert!(!is_valid_position(&piece, &board));
    }

    #[test]
    fn rejects_overlap() {
        let mut board = empty_board();
        let piece = Piece::new(PieceType::O);
        board[1][5] = GRAY;
        assert!(!is_valid_position(&piece, &board));
        board[1][5] = Cell::Empty;
        board[1][6] = GRAY;
        assert!(is_valid_position(&piece, &board));
    }

    #[test]
    fn clears_single_row_and_shifts_down() {
        let mut board = empty_board();
        fill_row(&mut board, 19);
        board[18][0] = GRAY;
        board[10][3] = GRAY;

        assert_eq!(clear_lines(&mut board), 1);
        assert_eq!(board.len(), BOARD_HEIGHT);
        assert_eq!(board[19][0], GRAY);
        assert_eq!(board[11][3], GRAY);
        assert_eq!(occupied_cells(&board), 2);
    }

    #[test]
    fn clears_separated_rows_in_one_pass() {
        let mut board = empty_board();
        fill_row(&mut board, 19);
        fill_row(&mut board, 17);
        board[18][4] = GRAY;
        board[16][2] = GRAY;
        board[0][9] = GRAY;

        assert_eq!(clear_lines(&mut board), 2);
        assert_eq!(board[19][4], GRAY);
        assert_eq!(board[18][2], GRAY);
        assert_eq!(board[2][9], GRAY);
        assert!(board[0].iter().chain(board[1].iter()).all(|&c| c == Cell::Empty));
    }

    #[test]
    fn keeps_top_row_when_nothing_is_full() {
        let mut board = empty_board();
        board[0][0] = GRAY;
        board[19][9] = GRAY;

        assert_eq!(clear_lines(&mut board), 0);
        assert_eq!(board[0][0], GRAY);
        assert_eq!(board[19][9], GRAY);
    }

    #[test]
    fn clearing_twice_is_idempotent() {
        let mut board = empty_board();
        fill_row(&mut board, 19);
        fill_row(&mut board, 18);
        board[17][1] = GRAY;

        assert_eq!(clear_lines(&mut board), 2);
        let after_first = board;
        assert_eq!(clear_lines(&mut board), 0);
        assert_eq!(board, after_first);
    }

    #[test]
    fn top_row_check() {
        let mut board = empty_board();
        assert!(!top_row_occupied(&board));
        board[0][7] = GRAY;
        assert!(top_row_occupied(&board));
    }
}
