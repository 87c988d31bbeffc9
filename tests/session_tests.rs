//! Game session tests.
//!
//! These drive `Game` through its command/query surface the way a user
//! interface would.

use reversi_engine::board::Mark;
use reversi_engine::core::{Coordinate, GameRng, GameSettings, Player, TurnRecord};
use reversi_engine::games::reversi::{random_playout, Game, Phase};
use reversi_engine::rules::GameResult;

fn c(col: i32, row: i32) -> Coordinate {
    Coordinate::new(col, row)
}

/// The standard opening: Black to move with four choices.
#[test]
fn test_standard_opening() {
    let game = Game::started(&GameSettings::new()).unwrap();

    assert_eq!(game.mark(c(3, 3)), Some(Mark::White));
    assert_eq!(game.mark(c(4, 4)), Some(Mark::White));
    assert_eq!(game.mark(c(3, 4)), Some(Mark::Black));
    assert_eq!(game.mark(c(4, 3)), Some(Mark::Black));

    let mut moves = game.legal_moves().to_vec();
    moves.sort();
    let mut want = vec![c(3, 2), c(2, 3), c(5, 4), c(4, 5)];
    want.sort();
    assert_eq!(moves, want);
}

/// Playing (2,3) flips (3,3) and hands the turn to White.
#[test]
fn test_first_move() {
    let mut game = Game::started(&GameSettings::new()).unwrap();

    assert!(game.play_move(c(2, 3)));
    assert_eq!(game.mark(c(2, 3)), Some(Mark::Black));
    assert_eq!(game.mark(c(3, 3)), Some(Mark::Black));
    assert_eq!(game.score(Player::One), 4);
    assert_eq!(game.score(Player::Two), 1);
    assert_eq!(game.current_turn(), Some(Player::Two));

    let mut moves = game.legal_moves().to_vec();
    moves.sort();
    let mut want = vec![c(2, 2), c(4, 2), c(2, 4)];
    want.sort();
    assert_eq!(moves, want);

    let history: Vec<_> = game.history().cloned().collect();
    assert_eq!(
        history,
        vec![TurnRecord::Placed {
            player: Player::One,
            at: c(2, 3),
            flipped: 1,
            sequence: 0,
        }]
    );
}

/// Rejected moves change nothing.
#[test]
fn test_illegal_moves_are_noops() {
    let mut game = Game::started(&GameSettings::new()).unwrap();
    let before = game.state().cloned();

    for at in [c(3, 3), c(0, 0), c(-1, 2), c(8, 8), c(4, 2)] {
        assert!(!game.play_move(at), "{at} should be rejected");
    }
    assert_eq!(game.state().cloned(), before);
    assert_eq!(game.current_turn(), Some(Player::One));
}

/// Ending and re-initializing reproduces a fresh game.
#[test]
fn test_end_and_restart() {
    let settings = GameSettings::new().with_board_size(10);
    let fresh = Game::started(&settings).unwrap();

    let mut game = Game::started(&settings).unwrap();
    random_playout(&mut game, &mut GameRng::new(3));
    game.end_game();
    assert_eq!(game.phase(), Phase::Inactive);

    game.initialize(&settings).unwrap();
    game.start();
    assert_eq!(game.state(), fresh.state());
    assert_eq!(game.history().count(), 0);
}

/// Initializing an active session discards the game and requires a start.
#[test]
fn test_initialize_while_active() {
    let mut game = Game::started(&GameSettings::new()).unwrap();
    assert!(game.play_move(c(2, 3)));

    game.initialize(&GameSettings::new().with_dimensions(6, 4)).unwrap();
    assert!(!game.is_active());
    assert_eq!(game.width(), Some(6));
    assert_eq!(game.height(), Some(4));
    assert!(!game.play_move(c(2, 0)));

    game.start();
    assert!(game.is_active());
    assert_eq!(game.score(Player::One), 2);
}

/// Rectangular boards place the cross by width and height separately.
#[test]
fn test_rectangular_board() {
    let game = Game::started(&GameSettings::new().with_dimensions(6, 4)).unwrap();
    // cw = 3, ch = 2
    assert_eq!(game.mark(c(3, 2)), Some(Mark::White));
    assert_eq!(game.mark(c(2, 1)), Some(Mark::White));
    assert_eq!(game.mark(c(2, 2)), Some(Mark::Black));
    assert_eq!(game.mark(c(3, 1)), Some(Mark::Black));
    assert_eq!(game.legal_moves().len(), 4);
}

/// A finished game reports its result and refuses further moves.
#[test]
fn test_game_over_after_playout() {
    let mut game = Game::started(&GameSettings::new()).unwrap();
    random_playout(&mut game, &mut GameRng::new(2024));

    assert!(game.is_game_over());
    assert!(game.legal_moves().is_empty());
    assert!(game.is_active());

    let (one, two) = (game.score(Player::One), game.score(Player::Two));
    let expected = match one.cmp(&two) {
        std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
        std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
        std::cmp::Ordering::Equal => GameResult::Draw,
    };
    assert_eq!(game.result(), Some(expected));

    // The last two records are the closing passes.
    let history: Vec<_> = game.history().collect();
    let tail = &history[history.len() - 2..];
    assert!(tail.iter().all(|r| r.is_pass()));

    let state = game.state().cloned();
    let board = game.board().unwrap();
    let empty = board.coordinates().find(|&at| board.mark_at(at) == Some(Mark::Empty));
    if let Some(at) = empty {
        assert!(!game.play_move(at));
    }
    assert_eq!(game.state().cloned(), state);
}

/// Player Two may open, still playing white.
#[test]
fn test_player_two_starts() {
    let settings = GameSettings::new().with_starting_player(Player::Two);
    let mut game = Game::started(&settings).unwrap();
    assert_eq!(game.current_turn(), Some(Player::Two));

    let mut moves = game.legal_moves().to_vec();
    moves.sort();
    let mut want = vec![c(4, 2), c(5, 3), c(2, 4), c(3, 5)];
    want.sort();
    assert_eq!(moves, want);

    assert!(game.play_move(c(5, 3)));
    assert_eq!(game.mark(c(4, 3)), Some(Mark::White));
    assert_eq!(game.current_turn(), Some(Player::One));
}
