//! Pieces tests - shape tables, kick tables and rotation

use stackfall::core::pieces::{kick_class, KickClass};
use stackfall::core::{get_shape, kick_offsets, try_rotate, Board, Piece};
use stackfall::types::{PieceKind, Rotation, SPAWN_POSITION};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    assert_eq!(get_shape(PieceKind::I, Rotation::North), [(0, 1), (1, 1), (2, 1), (3, 1)]);
    assert_eq!(get_shape(PieceKind::I, Rotation::East), [(2, 0), (2, 1), (2, 2), (2, 3)]);
    assert_eq!(get_shape(PieceKind::I, Rotation::South), [(0, 2), (1, 2), (2, 2), (3, 2)]);
    assert_eq!(get_shape(PieceKind::I, Rotation::West), [(1, 0), (1, 1), (1, 2), (1, 3)]);
}

#[test]
fn test_o_piece_shapes() {
    let north = get_shape(PieceKind::O, Rotation::North);
    assert_eq!(north, [(1, 0), (2, 0), (1, 1), (2, 1)]);
    for rot in ROTATIONS {
        assert_eq!(get_shape(PieceKind::O, rot), north);
    }
}

#[test]
fn test_t_piece_shapes() {
    assert_eq!(get_shape(PieceKind::T, Rotation::North), [(1, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(get_shape(PieceKind::T, Rotation::East), [(1, 0), (1, 1), (2, 1), (1, 2)]);
    assert_eq!(get_shape(PieceKind::T, Rotation::South), [(0, 1), (1, 1), (2, 1), (1, 2)]);
    assert_eq!(get_shape(PieceKind::T, Rotation::West), [(1, 0), (0, 1), (1, 1), (1, 2)]);
}

#[test]
fn test_all_shapes_fit_in_4x4_box() {
    for kind in PieceKind::ALL {
        for rot in ROTATIONS {
            for (x, y) in get_shape(kind, rot) {
                assert!((0..4).contains(&x) && (0..4).contains(&y), "{:?} {:?}", kind, rot);
            }
        }
    }
}

#[test]
fn test_spawn_piece_position() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        assert_eq!((piece.x, piece.y), SPAWN_POSITION);
        assert_eq!(piece.rotation, Rotation::North);
        assert!(!Board::new().collides(&piece, 0, 0, 0), "{:?} spawns clear", kind);
    }
}

// ============== Kick Table Tests ==============

#[test]
fn test_kick_classes() {
    assert_eq!(kick_class(PieceKind::I), KickClass::I);
    assert_eq!(kick_class(PieceKind::O), KickClass::Symmetric);
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        assert_eq!(kick_class(kind), KickClass::Default);
    }
}

#[test]
fn test_default_kicks_north_to_east() {
    let kicks = kick_offsets(PieceKind::T, Rotation::North, Rotation::East);
    assert_eq!(kicks, &[(-1, 0), (-1, 1), (0, -2), (-1, -2)]);
}

#[test]
fn test_i_kicks_east_to_north() {
    let kicks = kick_offsets(PieceKind::I, Rotation::East, Rotation::North);
    assert_eq!(kicks, &[(2, 0), (-1, 0), (2, 1), (-1, -2)]);
}

#[test]
fn test_cw_and_ccw_entries_exist_for_every_state() {
    for kind in [PieceKind::I, PieceKind::T] {
        for from in ROTATIONS {
            for to in [from.rotate_cw(), from.rotate_ccw()] {
                let kicks = kick_offsets(kind, from, to);
                assert_eq!(kicks.len(), 4);
                assert!(!kicks.contains(&(0, 0)));
            }
        }
    }
}

#[test]
fn test_o_and_half_turns_fall_back_to_zero_kick() {
    for from in ROTATIONS {
        assert_eq!(kick_offsets(PieceKind::O, from, from.rotate_cw()), &[(0, 0)]);
    }
    assert_eq!(kick_offsets(PieceKind::T, Rotation::North, Rotation::South), &[(0, 0)]);
}

// ============== Rotation Tests ==============

#[test]
fn test_rotate_in_open_space_uses_first_kick() {
    let piece = Piece {
        x: 4,
        y: 8,
        ..Piece::spawn(PieceKind::T)
    };
    let (rotated, offset) = try_rotate(&piece, 1, |_| false).unwrap();

    assert_eq!(offset, (-1, 0));
    assert_eq!(rotated.rotation, Rotation::East);
    assert_eq!((rotated.x, rotated.y), (3, 8));
}

#[test]
fn test_rotate_skips_blocked_candidates() {
    let piece = Piece {
        x: 4,
        y: 8,
        ..Piece::spawn(PieceKind::J)
    };
    // Reject the first two candidates by position.
    let (rotated, offset) =
        try_rotate(&piece, 1, |p| (p.x, p.y) == (3, 8) || (p.x, p.y) == (3, 9)).unwrap();

    assert_eq!(offset, (0, -2));
    assert_eq!((rotated.x, rotated.y), (4, 6));
}

#[test]
fn test_rotate_ccw() {
    let piece = Piece {
        x: 4,
        y: 8,
        ..Piece::spawn(PieceKind::S)
    };
    let (rotated, offset) = try_rotate(&piece, -1, |_| false).unwrap();

    assert_eq!(rotated.rotation, Rotation::West);
    assert_eq!(offset, (1, 0));
}

#[test]
fn test_rotate_blocked_everywhere() {
    let piece = Piece::spawn(PieceKind::L);
    assert_eq!(try_rotate(&piece, 1, |_| true), None);
}

#[test]
fn test_o_rotates_in_place() {
    let piece = Piece::spawn(PieceKind::O);
    let (rotated, offset) = try_rotate(&piece, 1, |_| false).unwrap();

    assert_eq!(offset, (0, 0));
    assert_eq!(rotated.cells(), piece.cells());
}

#[test]
fn test_rotate_against_wall_on_board() {
    let board = Board::new();
    // I East hugging the left wall: column x+2 = 0.
    let piece = Piece {
        kind: PieceKind::I,
        rotation: Rotation::East,
        x: -2,
        y: 5,
    };
    assert!(!board.collides(&piece, 0, 0, 0));

    let (rotated, offset) = try_rotate(&piece, -1, |p| board.collides(p, 0, 0, 0)).unwrap();
    // East -> North: (2,0) puts the bar at x 0..3.
    assert_eq!(offset, (2, 0));
    assert_eq!(rotated.rotation, Rotation::North);
    assert!(!board.collides(&rotated, 0, 0, 0));
}
