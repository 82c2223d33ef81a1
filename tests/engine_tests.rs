//! Rules engine integration tests: placement, movement, pushes and wins.

use proptest::prelude::*;

use push_battle::core::{Board, Cell, GameConfig, Move, MoveRequest, Phase, Player, PlayerMap};
use push_battle::error::MoveError;
use push_battle::nn::ActionSpace;
use push_battle::rules::push::{resolve_pushes, resolve_pushes_in_order};
use push_battle::rules::{Push, PushBattle, PUSH_DIRECTIONS};

fn position(rows: &[&str], current: Player, pieces_per_player: u8) -> PushBattle {
    let board = Board::from_rows(rows).unwrap();
    let placed = PlayerMap::new(|p| board.pieces(p).count() as u8);
    let config = GameConfig::new()
        .with_board_size(rows.len())
        .with_pieces_per_player(pieces_per_player);
    PushBattle::from_board(config, board, current, placed).unwrap()
}

/// Play `moves` alternately from a fresh standard game, ending each turn.
fn play(moves: &[(usize, usize)]) -> PushBattle {
    let mut game = PushBattle::standard();
    for &(row, col) in moves {
        game.apply_placement(row, col).unwrap();
        game.end_turn();
    }
    game
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn test_opening_placement() {
    let mut game = PushBattle::standard();

    assert!(game.validate(&MoveRequest::from_coords(&[3, 3])).is_ok());
    let pushes = game.apply_placement(3, 3).unwrap();

    assert!(pushes.is_empty());
    assert_eq!(game.board().get(3, 3), Cell::Piece(Player::A));
    assert_eq!(game.pieces_placed(Player::A), 1);
    assert_eq!(game.check_winner(), None);

    game.end_turn();
    assert_eq!(game.current_player(), Player::B);
    assert_eq!(game.phase(), Phase::Placement);
}

#[test]
fn test_placement_on_occupied_cell_rejected() {
    let game = play(&[(3, 3)]);

    assert_eq!(
        game.validate(&MoveRequest::from_coords(&[3, 3])),
        Err(MoveError::Occupied { row: 3, col: 3 })
    );
    assert!(!game.is_valid_placement(3, 3));
}

#[test]
fn test_relocation_during_placement_is_malformed() {
    let game = play(&[(3, 3), (5, 5)]);
    let err = game
        .validate(&MoveRequest::from_coords(&[3, 3, 4, 4]))
        .unwrap_err();
    assert!(err.is_malformed());
}

// =============================================================================
// Pushes
// =============================================================================

#[test]
fn test_neighbour_pushed_away() {
    let mut game = play(&[(0, 0), (3, 5)]);

    let pushes = game.apply_placement(3, 4).unwrap();

    assert_eq!(
        pushes.as_slice(),
        &[Push {
            from: (3, 5),
            to: (3, 6)
        }]
    );
    assert_eq!(game.board().get(3, 5), Cell::Empty);
    assert_eq!(game.board().get(3, 6), Cell::Piece(Player::B));
    assert_eq!(game.board().get(3, 4), Cell::Piece(Player::A));
}

#[test]
fn test_push_wraps_around_edge() {
    let mut game = play(&[(0, 0), (3, 7)]);

    game.apply_placement(3, 6).unwrap();

    assert_eq!(game.board().get(3, 7), Cell::Empty);
    assert_eq!(game.board().get(3, 0), Cell::Piece(Player::B));
}

#[test]
fn test_blocked_push_does_nothing() {
    let mut game = position(
        &[
            "........", //
            "........", //
            "........", //
            ".....OX.", //
            "........", //
            "........", //
            "........", //
            "........", //
        ],
        Player::A,
        8,
    );

    let pushes = game.apply_placement(3, 4).unwrap();

    assert!(pushes.is_empty());
    assert_eq!(game.board().get(3, 5), Cell::Piece(Player::B));
    assert_eq!(game.board().get(3, 6), Cell::Piece(Player::A));
}

#[test]
fn test_pushes_in_all_directions() {
    let mut game = play(&[(0, 0), (3, 5), (6, 6), (3, 3), (0, 3), (2, 4), (6, 2), (4, 4)]);

    let pushes = game.apply_placement(3, 4).unwrap();

    assert_eq!(pushes.len(), 4);
    for (row, col) in [(3, 6), (3, 2), (5, 4), (1, 4)] {
        assert_eq!(game.board().get(row, col), Cell::Piece(Player::B));
    }
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn test_movement_phase_after_all_pieces_placed() {
    let game = position(
        &[
            "X....", //
            "..O..", //
            ".....", //
            "X....", //
            "..O..", //
        ],
        Player::A,
        2,
    );

    assert_eq!(game.phase(), Phase::Movement);
    assert!(game.is_valid_relocation(0, 0, 2, 2));
    assert!(!game.is_valid_relocation(1, 2, 2, 2));
    assert!(!game.is_valid_relocation(0, 0, 1, 2));
    assert!(!game.is_valid_placement(2, 2));

    let legal = game.legal_moves();
    assert_eq!(legal.len(), 2 * 21);
    assert!(legal.iter().all(|mv| mv.phase() == Phase::Movement));
}

#[test]
fn test_relocation_then_push() {
    let mut game = position(
        &[
            "X....", //
            ".....", //
            "..O..", //
            "X....", //
            "..O..", //
        ],
        Player::A,
        2,
    );

    // Landing on (2, 1) pushes the piece at (2, 2) to (2, 3).
    let pushes = game.apply_relocation(0, 0, 2, 1).unwrap();

    assert_eq!(pushes.len(), 1);
    assert_eq!(game.board().get(0, 0), Cell::Empty);
    assert_eq!(game.board().get(2, 1), Cell::Piece(Player::A));
    assert_eq!(game.board().get(2, 3), Cell::Piece(Player::B));
}

// =============================================================================
// Winning
// =============================================================================

#[test]
fn test_three_in_a_row_wins() {
    let game = play(&[(0, 0), (5, 5), (1, 1), (5, 7), (2, 2)]);

    // end_turn already handed over; A's line is found regardless of who is
    // to move.
    assert_eq!(game.check_winner(), Some(Player::A));
    assert_eq!(game.winning_lines(Player::A), vec![[(0, 0), (1, 1), (2, 2)]]);
}

#[test]
fn test_horizontal_win() {
    let game = position(
        &[
            "......", //
            ".XXX..", //
            "......", //
            "......", //
            "....O.", //
            "O.....", //
        ],
        Player::B,
        8,
    );
    assert_eq!(game.check_winner(), Some(Player::A));
    assert_eq!(game.near_win_count(Player::B), 0);
}

#[test]
fn test_lines_do_not_wrap() {
    let game = position(
        &[
            "XX...X", //
            "......", //
            "......", //
            "..O...", //
            "......", //
            "O.....", //
        ],
        Player::B,
        8,
    );
    assert_eq!(game.check_winner(), None);
}

#[test]
fn test_double_win_goes_to_mover() {
    let game = position(
        &[
            "XXX..", //
            ".....", //
            "OOO..", //
            ".....", //
            ".....", //
        ],
        Player::B,
        3,
    );
    assert_eq!(game.check_winner(), Some(Player::B));
}

// =============================================================================
// Properties
// =============================================================================

fn random_board() -> impl Strategy<Value = Board> {
    (5usize..=10).prop_flat_map(|size| {
        prop::collection::vec(0u8..3, size * size).prop_map(move |cells| {
            let mut board = Board::new(size);
            for (i, v) in cells.into_iter().enumerate() {
                let cell = match v {
                    0 => Cell::Empty,
                    1 => Cell::Piece(Player::A),
                    _ => Cell::Piece(Player::B),
                };
                board.set(i / size, i % size, cell);
            }
            board
        })
    })
}

proptest! {
    #[test]
    fn prop_push_order_does_not_matter(
        mut board in random_board(),
        row_seed in any::<usize>(),
        col_seed in any::<usize>(),
        rotation in 0usize..4,
        swap in any::<bool>(),
    ) {
        let n = board.size();
        let (row, col) = (row_seed % n, col_seed % n);
        board.set(row, col, Cell::Piece(Player::A));

        let mut order = PUSH_DIRECTIONS;
        order.rotate_left(rotation);
        if swap {
            order.swap(0, 3);
        }

        let mut canonical = board;
        resolve_pushes(&mut canonical, row, col);
        let mut permuted = board;
        resolve_pushes_in_order(&mut permuted, row, col, order);

        prop_assert_eq!(canonical, permuted);
    }

    #[test]
    fn prop_pushes_preserve_piece_counts(
        mut board in random_board(),
        row_seed in any::<usize>(),
        col_seed in any::<usize>(),
    ) {
        let n = board.size();
        let (row, col) = (row_seed % n, col_seed % n);
        board.set(row, col, Cell::Piece(Player::B));
        let before = (board.count(Cell::Piece(Player::A)), board.count(Cell::Piece(Player::B)));

        resolve_pushes(&mut board, row, col);

        prop_assert_eq!(
            (board.count(Cell::Piece(Player::A)), board.count(Cell::Piece(Player::B))),
            before
        );
        prop_assert_eq!(board.get(row, col), Cell::Piece(Player::B));
    }

    #[test]
    fn prop_legal_moves_land_on_empty_cells(moves in prop::collection::vec((0usize..8, 0usize..8), 0..20)) {
        let mut game = PushBattle::standard();
        for (row, col) in moves {
            if game.apply_placement(row, col).is_ok() {
                if game.check_winner().is_some() {
                    break;
                }
                game.end_turn();
            }
        }

        for mv in game.legal_moves() {
            let (row, col) = mv.destination();
            prop_assert!(game.board().get(row, col).is_empty());
            prop_assert!(game.check_move(&mv).is_ok());
            if let Move::Relocation { from_row, from_col, .. } = mv {
                prop_assert!(game.board().get(from_row, from_col).is_owned_by(game.current_player()));
            }
        }
    }

    #[test]
    fn prop_winner_symmetric_under_relabel(board in random_board()) {
        let n = board.size();
        let limit = (n * n - 1) / 2;
        prop_assume!(Player::ALL.iter().all(|&p| board.pieces(p).count() <= limit));

        let config = GameConfig::new().with_board_size(n).with_pieces_per_player(limit as u8);
        let placed = PlayerMap::new(|p| board.pieces(p).count() as u8);
        let game = PushBattle::from_board(config, board, Player::A, placed).unwrap();

        let swapped = board.relabeled();
        let swapped_placed = PlayerMap::new(|p| swapped.pieces(p).count() as u8);
        let mirror = PushBattle::from_board(config, swapped, Player::B, swapped_placed).unwrap();

        prop_assert_eq!(game.check_winner(), mirror.check_winner().map(Player::opponent));
    }

    #[test]
    fn prop_action_space_roundtrips_legal_moves(moves in prop::collection::vec((0usize..5, 0usize..5), 0..12)) {
        let config = GameConfig::new().with_board_size(5).with_pieces_per_player(3);
        let mut game = PushBattle::new(config).unwrap();
        for (row, col) in moves {
            if game.apply_placement(row, col).is_ok() {
                if game.check_winner().is_some() {
                    break;
                }
                game.end_turn();
            }
        }

        let space = ActionSpace::for_game(&game);
        let mask = space.legal_mask(&game);
        let legal = game.legal_moves();
        prop_assert_eq!(mask.iter().filter(|&&m| m).count(), legal.len());
        for mv in legal {
            let index = space.move_to_index(&mv);
            prop_assert!(mask[index]);
            prop_assert_eq!(space.index_to_move(index, game.phase()), Some(mv));
        }
    }
}
