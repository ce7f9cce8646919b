//! Board tests - grid access, collision, merging and line sweeps

use stackfall::core::{Board, Piece};
use stackfall::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(0, 0, Some(PieceKind::I)));
    assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
fn test_board_is_occupied() {
    let mut board = Board::new();
    assert!(!board.is_occupied(5, 10));

    board.set(5, 10, Some(PieceKind::T));
    assert!(board.is_occupied(5, 10));

    // Off-board cells are never "occupied".
    assert!(!board.is_occupied(-1, 0));
    assert!(!board.is_occupied(0, -1));
}

#[test]
fn test_collides_with_walls_and_floor() {
    let board = Board::new();
    let piece = Piece::spawn(PieceKind::T);

    assert!(!board.collides(&piece, 0, 0, 0));
    // T North spans x..x+2, spawn x=3: 4 steps left hits the wall.
    assert!(!board.collides(&piece, -3, 0, 0));
    assert!(board.collides(&piece, -4, 0, 0));
    assert!(!board.collides(&piece, 4, 0, 0));
    assert!(board.collides(&piece, 5, 0, 0));
    // Bottom row of T North is y+1; it may rest on row 19 but not below.
    assert!(!board.collides(&piece, 0, 18, 0));
    assert!(board.collides(&piece, 0, 19, 0));
}

#[test]
fn test_cells_above_the_top_are_free() {
    let board = Board::new();
    let piece = Piece {
        y: -1,
        ..Piece::spawn(PieceKind::I)
    };
    // I East occupies column x+2 from y..y+3; starting at y=-1 pokes above the board.
    assert!(!board.collides(&piece, 0, -1, 1));
}

#[test]
fn test_collides_with_locked_cells() {
    let mut board = Board::new();
    board.set(4, 1, Some(PieceKind::O));
    let piece = Piece::spawn(PieceKind::T);

    assert!(board.collides(&piece, 0, 0, 0));
    assert!(!board.collides(&piece, 0, -1, 0));
}

#[test]
fn test_merge_drops_cells_above_top() {
    let mut board = Board::new();
    let piece = Piece {
        kind: PieceKind::I,
        rotation: Rotation::East,
        x: 0,
        y: -2,
    };
    board.merge(&piece);

    // Column x+2 = 2, rows -2..=1: only rows 0 and 1 land.
    assert_eq!(board.get(2, 0), Some(Some(PieceKind::I)));
    assert_eq!(board.get(2, 1), Some(Some(PieceKind::I)));
    let filled = board.cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(filled, 2);
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(5));

    for x in 0..BOARD_WIDTH {
        board.set(x as i8, 5, Some(PieceKind::T));
    }
    assert!(board.is_row_full(5));

    for x in 0..BOARD_WIDTH - 1 {
        board.set(x as i8, 6, Some(PieceKind::I));
    }
    assert!(!board.is_row_full(6));
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_sweep_shifts_rows_above_down() {
    let mut board = Board::from_rows(&[
        "J.........",
        "IIIIIIIIII",
        ".O........",
    ]);

    assert_eq!(board.sweep_full_lines(), 1);
    assert_eq!(board.get(0, 18), Some(Some(PieceKind::J)));
    assert_eq!(board.get(1, 19), Some(Some(PieceKind::O)));
    assert_eq!(board.get(0, 17), Some(None));
}

#[test]
fn test_sweep_adjacent_full_rows() {
    let mut board = Board::from_rows(&[
        "T.........",
        "IIIIIIIIII",
        "OOOOOOOOOO",
    ]);

    assert_eq!(board.sweep_full_lines(), 2);
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
}

#[test]
fn test_sweep_non_adjacent_rows_keeps_order() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 5, Some(PieceKind::T));
        board.set(x, 10, Some(PieceKind::I));
        board.set(x, 15, Some(PieceKind::O));
    }
    board.set(0, 4, Some(PieceKind::J));
    board.set(0, 9, Some(PieceKind::L));
    board.set(0, 14, Some(PieceKind::S));

    assert_eq!(board.sweep_full_lines(), 3);

    // Each marker falls by the number of cleared rows beneath it.
    assert_eq!(board.get(0, 7), Some(Some(PieceKind::J)));
    assert_eq!(board.get(0, 11), Some(Some(PieceKind::L)));
    assert_eq!(board.get(0, 15), Some(Some(PieceKind::S)));
}

#[test]
fn test_sweep_four_lines() {
    let mut board = Board::from_rows(&[
        "XXXXXXXXXX",
        "XXXXXXXXXX",
        "XXXXXXXXXX",
        "XXXXXXXXXX",
    ]);
    assert_eq!(board.sweep_full_lines(), 4);
    assert_eq!(board, Board::new());
}

#[test]
fn test_board_clear() {
    let mut board = Board::from_rows(&["TTTTT.....", "IIIIIIIII."]);
    board.clear();
    assert_eq!(board, Board::new());
}

#[test]
fn test_write_u8_grid_uses_tags() {
    let board = Board::from_rows(&["I........Z"]);
    let mut grid = [[0u8; 10]; 20];
    board.write_u8_grid(&mut grid);

    assert_eq!(grid[19][0], PieceKind::I.tag());
    assert_eq!(grid[19][9], PieceKind::Z.tag());
    assert_eq!(grid[19][1], 0);
    assert!(grid[..19].iter().all(|row| row.iter().all(|&c| c == 0)));
}
