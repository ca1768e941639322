//! Tests for placement legality through the game facade.

use strictly_blokus::{
    AlreadyPlayedError, AnchorNotSetError, Blokus, BlokusError, Piece, PlayerId, Point, ShapeKind,
    Variant,
};

fn piece(game: &Blokus, kind: ShapeKind, row: i32, col: i32) -> Piece {
    Piece::from_shape(game.shapes().get(kind)).anchored_at(Point::new(row, col))
}

fn place(game: &mut Blokus, kind: ShapeKind, row: i32, col: i32) -> bool {
    let candidate = piece(game, kind, row, col);
    game.place(&candidate).expect("placement errored")
}

fn duo_after_monominoes() -> Blokus {
    let mut game = Blokus::from_variant(Variant::Duo, 2).unwrap();
    assert!(place(&mut game, ShapeKind::One, 4, 4));
    assert!(place(&mut game, ShapeKind::One, 9, 9));
    game
}

#[test]
fn test_invalid_construction() {
    let cases: [(u8, usize, &[(i32, i32)]); 4] = [
        (0, 10, &[(0, 0)]),
        (1, 2, &[(0, 0)]),
        (1, 10, &[(-1, 0)]),
        (2, 10, &[(0, 0)]),
    ];
    for (players, size, starts) in cases {
        let result = Blokus::new(players, size, starts.iter().copied().map(Point::from));
        assert!(
            matches!(result, Err(BlokusError::Config(_))),
            "({}, {}) should be rejected",
            players,
            size
        );
    }
}

#[test]
fn test_config_error_reports_location() {
    let err = Blokus::new(5, 10, [Point::new(0, 0)]).unwrap_err();
    let BlokusError::Config(config) = err else {
        panic!("expected a config error");
    };
    assert!(config.message.contains("num_players"));
    assert!(config.file.ends_with(".rs"));
    assert!(config.line > 0);
}

#[test]
fn test_already_played() {
    let mut game = Blokus::new(1, 10, [Point::new(0, 0)]).unwrap();
    let mut monomino = piece(&game, ShapeKind::One, 0, 0);
    assert!(game.place(&monomino).unwrap());

    monomino.set_anchor(Point::new(1, 0));
    let expected = BlokusError::AlreadyPlayed(AlreadyPlayedError {
        player: PlayerId::new(1),
        kind: ShapeKind::One,
    });
    assert_eq!(game.place(&monomino), Err(expected.clone()));
    assert_eq!(game.legal_to_place(&monomino), Err(expected.clone()));
    assert_eq!(game.any_collision(&monomino), Err(expected.clone()));
    assert_eq!(game.any_wall_collision(&monomino), Err(expected));
}

#[test]
fn test_anchor_not_set() {
    let mut game = Blokus::new(1, 10, [Point::new(0, 0)]).unwrap();
    let loose = Piece::from_shape(game.shapes().get(ShapeKind::One));
    let expected = BlokusError::AnchorNotSet(AnchorNotSetError {
        kind: ShapeKind::One,
    });
    assert_eq!(game.place(&loose), Err(expected.clone()));
    assert_eq!(game.legal_to_place(&loose), Err(expected));
    assert!(game.history().is_empty());
}

#[test]
fn test_wall_collision_is_not_an_error() {
    let mut game = Blokus::new(1, 5, [Point::new(0, 0)]).unwrap();
    let hanging = piece(&game, ShapeKind::Two, -1, 0);
    let before = game.grid().clone();
    assert_eq!(game.any_wall_collision(&hanging), Ok(true));
    assert_eq!(game.any_collision(&hanging), Ok(true));
    assert_eq!(game.legal_to_place(&hanging), Ok(false));
    assert_eq!(game.place(&hanging), Ok(false));
    assert_eq!(game.grid(), &before);
    assert_eq!(game.current_player(), PlayerId::new(1));
}

#[test]
fn test_overlap_is_a_collision_but_not_a_wall_collision() {
    let mut game = Blokus::new(1, 5, [Point::new(0, 0)]).unwrap();
    assert!(place(&mut game, ShapeKind::One, 0, 0));
    let overlapping = piece(&game, ShapeKind::Two, 0, 0);
    assert_eq!(game.any_wall_collision(&overlapping), Ok(false));
    assert_eq!(game.any_collision(&overlapping), Ok(true));
    assert_eq!(game.legal_to_place(&overlapping), Ok(false));
}

#[test]
fn test_start_positions() {
    let layouts: [(u8, usize, &[(i32, i32)]); 3] = [
        (1, 10, &[(0, 0)]),
        (2, 14, &[(0, 0), (13, 13)]),
        (2, 14, &[(0, 0), (0, 13), (13, 13), (13, 0)]),
    ];
    for (players, size, starts) in layouts {
        let mut game = Blokus::new(players, size, starts.iter().copied().map(Point::from)).unwrap();

        assert!(!place(&mut game, ShapeKind::One, 0, 1));
        assert!(place(&mut game, ShapeKind::One, 0, 0));
        if players == 2 {
            assert!(!place(&mut game, ShapeKind::One, 1, 1));
            assert!(!place(&mut game, ShapeKind::One, 0, 0));
            assert!(place(&mut game, ShapeKind::One, 13, 13));
        }
        assert!(place(&mut game, ShapeKind::Two, 1, 1));
        if players == 2 {
            assert!(place(&mut game, ShapeKind::Two, 12, 11));
        }
    }
}

#[test]
fn test_prevent_own_edges_on_mini() {
    let mut game = Blokus::from_variant(Variant::Mini, 1).unwrap();
    assert!(place(&mut game, ShapeKind::One, 0, 0));
    assert!(!place(&mut game, ShapeKind::Two, 0, 1));
}

#[test]
fn test_prevent_own_edges_on_duo() {
    let mut game = duo_after_monominoes();
    assert!(!place(&mut game, ShapeKind::Two, 4, 5));
    assert!(place(&mut game, ShapeKind::Two, 5, 5));
    assert!(!place(&mut game, ShapeKind::Two, 8, 9));
    assert!(place(&mut game, ShapeKind::Two, 8, 7));
    assert!(place(&mut game, ShapeKind::LetterO, 6, 7));
    assert!(place(&mut game, ShapeKind::LetterO, 6, 5));
}

#[test]
fn test_require_own_corners_on_mini() {
    let mut game = Blokus::from_variant(Variant::Mini, 1).unwrap();
    assert!(place(&mut game, ShapeKind::One, 0, 0));
    assert!(!place(&mut game, ShapeKind::Two, 2, 2));
}

#[test]
fn test_require_own_corners_on_duo() {
    let mut game = duo_after_monominoes();
    assert!(!place(&mut game, ShapeKind::Two, 0, 0));
    assert!(place(&mut game, ShapeKind::Two, 5, 5));
    assert!(!place(&mut game, ShapeKind::Two, 12, 12));
    assert!(place(&mut game, ShapeKind::Two, 8, 7));
    assert!(place(&mut game, ShapeKind::LetterO, 3, 7));
    assert!(place(&mut game, ShapeKind::LetterO, 9, 5));
}

#[test]
fn test_rejections_leave_the_turn_alone() {
    let mut game = duo_after_monominoes();
    let before = game.clone();
    assert!(!place(&mut game, ShapeKind::Two, 4, 5));
    assert!(!place(&mut game, ShapeKind::Two, 0, 0));
    assert_eq!(game, before);
    assert_eq!(game.current_player(), PlayerId::new(1));
}

#[test]
fn test_legality_is_a_pure_query() {
    let game = duo_after_monominoes();
    let before = game.clone();
    let candidate = piece(&game, ShapeKind::Two, 5, 5);
    assert_eq!(game.legal_to_place(&candidate), Ok(true));
    assert_eq!(game.legal_to_place(&candidate), Ok(true));
    assert_eq!(game, before);
}

#[test]
fn test_relabelled_piece_is_not_legal() {
    let mut game = Blokus::from_variant(Variant::Duo, 2).unwrap();
    let bar = piece(&game, ShapeKind::Five, 4, 4);
    let mut raw = serde_json::to_value(&bar).unwrap();
    raw["shape"]["kind"] = serde_json::to_value(ShapeKind::One).unwrap();
    let relabelled: Piece = serde_json::from_value(raw).unwrap();
    assert_eq!(relabelled.kind(), ShapeKind::One);
    assert_eq!(relabelled.len(), 5);

    let before = game.clone();
    assert_eq!(game.legal_to_place(&relabelled), Ok(false));
    assert_eq!(game.place(&relabelled), Ok(false));
    assert_eq!(game, before);

    assert!(place(&mut game, ShapeKind::Five, 4, 4));
    assert_eq!(game.score(PlayerId::new(1)), Some(-84));
}
