//! Game tests - round state machine driven end to end

use blockbreaker_core::core::{Game, Phase, Step};
use blockbreaker_core::types::{coord, Color, GridError};

#[test]
fn test_new_game_starts_playing_on_full_grid() {
    let game = Game::new(5, 1).unwrap();
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.blocks_remaining(), 25);
    assert_eq!(game.round(), 0);
}

#[test]
fn test_new_game_validates_inputs() {
    assert_eq!(Game::new(0, 1).unwrap_err(), GridError::InvalidSize);
    assert_eq!(
        Game::with_palette(5, &[], 1).unwrap_err(),
        GridError::InvalidPalette
    );
}

#[test]
fn test_same_seed_same_board() {
    let game1 = Game::new(5, 777).unwrap();
    let game2 = Game::new(5, 777).unwrap();
    assert_eq!(game1.grid(), game2.grid());
}

#[test]
fn test_selection_removes_group_and_settles() {
    let mut game = Game::new(5, 3).unwrap();
    let group_len = game.select(coord(2, 2)).unwrap().len();
    assert!(group_len >= 1);
    assert_eq!(game.phase(), Phase::Removing);
    assert_eq!(game.blocks_remaining(), 25 - group_len as u32);

    assert_eq!(game.advance(), Step::Settled);
    assert!(!game.grid().has_gaps());
    assert!(!game.grid().columns_need_shifting());

    assert_eq!(game.advance(), Step::Ready);
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn test_selection_blocked_mid_round() {
    let mut game = Game::new(5, 3).unwrap();
    game.select(coord(0, 0)).unwrap();

    assert_eq!(game.select(coord(4, 4)).unwrap_err(), GridError::PhaseBlocked);

    game.advance(); // Settled
    assert_eq!(game.select(coord(4, 4)).unwrap_err(), GridError::PhaseBlocked);

    game.advance(); // Ready
    assert!(game.select(coord(0, 0)).is_ok());
}

#[test]
fn test_play_until_board_clears_and_repopulates() {
    // Single color: the whole board is one group, cleared in one tap.
    let mut game = Game::with_palette(4, &[Color::Magenta], 9).unwrap();

    let removed = game.select(coord(3, 1)).unwrap().len();
    assert_eq!(removed, 16);
    assert_eq!(game.blocks_remaining(), 0);

    assert_eq!(game.advance(), Step::Settled);
    assert_eq!(game.advance(), Step::RoundOver);
    assert_eq!(game.advance(), Step::Repopulated);

    assert_eq!(game.round(), 1);
    assert_eq!(game.blocks_remaining(), 16);
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn test_headless_full_game_loop_terminates() {
    // Drive a real multi-color game by always tapping the first occupied
    // cell until the grid empties once. Every selection removes at least
    // one block, so the loop must finish.
    let mut game = Game::new(5, 20260826).unwrap();

    let mut taps = 0;
    while game.round() == 0 {
        let grid = game.grid();
        let size = grid.size();
        let target = (0..size)
            .flat_map(|row| (0..size).map(move |col| coord(row, col)))
            .find(|&at| grid.is_occupied(at))
            .expect("round 0 grid still holds blocks");

        let removed = game.select(target).unwrap().len();
        assert!(removed >= 1);
        taps += 1;
        assert!(taps <= 25, "5x5 round takes at most 25 selections");

        while !matches!(game.advance(), Step::Idle) {}
    }

    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.blocks_remaining(), 25);
}

#[test]
fn test_last_moves_reflect_latest_settle_only() {
    let mut game = Game::new(5, 5).unwrap();
    game.select(coord(0, 0)).unwrap();
    game.advance(); // Settled
    game.advance(); // Ready

    game.select(coord(0, 0)).unwrap();
    game.advance(); // Settled

    // Moves belong to the latest settle: every destination is a live block
    // and every origin cleared out or received another block.
    for mv in game.last_moves() {
        assert!(game.grid().is_occupied(mv.to));
        assert_ne!(mv.from, mv.to);
    }
}
