//! Tests for the typestate game phases.

use grandpas_dots::{
    BoardSize, Edge, GameError, GameInProgress, GameResult, GameSetup, Move, Outcome, PlayerId,
    RankPolicy, Roster,
};

fn p(id: u8) -> PlayerId {
    PlayerId::new(id).unwrap()
}

fn one_box_setup(players: usize) -> GameSetup {
    GameSetup::with(
        BoardSize::new(1).unwrap(),
        Roster::with_size(players).unwrap(),
        RankPolicy::Positional,
    )
}

#[test]
fn test_typestate_lifecycle() {
    let game = one_box_setup(2).start();
    assert_eq!(game.active_player(), p(1));

    let mut game = game;
    let report = game.make_move(Move::new(p(1), Edge::horizontal(0, 0))).unwrap();
    assert!(!report.extra_turn());
    assert_eq!(game.active_player(), p(2));

    match game.conclude() {
        GameResult::InProgress(game) => assert_eq!(game.history().len(), 1),
        GameResult::Finished(_) => panic!("Game shouldn't finish after one move"),
    }
}

#[test]
fn test_replay_to_finish() {
    let moves = [
        Move::new(p(1), Edge::horizontal(0, 0)),
        Move::new(p(2), Edge::horizontal(1, 0)),
        Move::new(p(3), Edge::vertical(0, 0)),
        Move::new(p(1), Edge::vertical(0, 1)),
    ];
    match GameInProgress::replay(one_box_setup(3), &moves).unwrap() {
        GameResult::Finished(game) => {
            assert_eq!(game.outcome(), &Outcome::Winner(p(1)));
            assert_eq!(game.standings().entries().len(), 3);
            assert_eq!(game.history().len(), 4);
            assert!(game.board().is_complete());
        }
        GameResult::InProgress(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_replay_surfaces_wrong_player() {
    let moves = [
        Move::new(p(1), Edge::horizontal(0, 0)),
        Move::new(p(1), Edge::horizontal(1, 0)),
    ];
    let result = GameInProgress::replay(one_box_setup(2), &moves);
    assert!(matches!(result, Err(GameError::NotYourTurn { .. })));
}

#[test]
fn test_restart_returns_same_setup() {
    let moves = [
        Move::new(p(1), Edge::horizontal(0, 0)),
        Move::new(p(2), Edge::horizontal(1, 0)),
        Move::new(p(1), Edge::vertical(0, 0)),
        Move::new(p(2), Edge::vertical(0, 1)),
    ];
    let GameResult::Finished(game) = GameInProgress::replay(one_box_setup(2), &moves).unwrap()
    else {
        panic!("Game should be finished");
    };
    let setup = game.restart();
    assert_eq!(setup.size().get(), 1);
    assert_eq!(setup.roster().len(), 2);

    let fresh = setup.start();
    assert!(fresh.history().is_empty());
    assert_eq!(fresh.active_player(), p(1));
}
