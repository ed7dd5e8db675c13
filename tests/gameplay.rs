use minefield::{
    neighbor_indices, render, resolve, Action, Board, Game, GameError, GamePhase, Outcome,
    Symbol, Tile, DEFAULT_COLUMNS, DEFAULT_ROWS,
};
use proptest::prelude::*;

fn game_on(layout: &str) -> Game {
    Game::with_board(layout.parse().unwrap())
}

#[test]
fn test_fresh_game_invariants() {
    for _ in 0..100 {
        let mut game = Game::default();
        game.new_game(DEFAULT_COLUMNS, DEFAULT_ROWS).unwrap();

        assert_eq!(game.board().len(), DEFAULT_COLUMNS * DEFAULT_ROWS);
        assert_eq!(game.tiles().len(), game.board().len());
        assert_eq!(game.phase(), GamePhase::InProgress);

        for index in 0..game.board().len() {
            let is_mine = game.board().cells()[index].is_mine();
            assert_eq!(resolve(game.board(), index) == Symbol::Mine, is_mine);
        }
    }
}

#[test]
fn test_four_by_four_candidate_counts() {
    assert_eq!(neighbor_indices(0, 4, 4).len(), 3);
    assert_eq!(neighbor_indices(1, 4, 4).len(), 5);
    assert_eq!(neighbor_indices(5, 4, 4).len(), 8);
}

#[test]
fn test_losing_game() {
    let mut game = game_on(
        "
        .*..
        ....
        ..*.
        ....",
    );

    game.reveal_tile(0).unwrap();
    assert_eq!(game.tile(0), Some(Tile::Revealed(Symbol::Count(1))));
    game.toggle_flag(10).unwrap();
    game.reveal_tile(1).unwrap();

    assert!(game.is_lost());
    assert!(!game.is_won());
    assert_eq!(game.phase(), GamePhase::Finished(Outcome::Lost));
    assert_eq!(game.tile(10), Some(Tile::Flagged));
    for (index, tile) in game.tiles().iter().enumerate() {
        if index != 10 {
            assert_eq!(*tile, Tile::Revealed(resolve(game.board(), index)));
        }
    }

    let screen = render::render(&game);
    assert!(screen.contains("Game finished: You've lost"));
}

#[test]
fn test_winning_game() {
    let mut game = game_on(
        "
        *...
        ....
        ...*",
    );

    game.perform_action(0, Action::Flag).unwrap();
    game.perform_action(11, Action::Flag).unwrap();
    for index in 1..11 {
        game.perform_action(index, Action::Reveal).unwrap();
    }

    assert!(game.is_finished());
    assert!(game.is_won());
    assert_eq!(game.phase(), GamePhase::Finished(Outcome::Won));
    assert!(render::render(&game).contains("Game finished: You've won"));
}

#[test]
fn test_misplaced_flags_still_win() {
    // flag count matches mine count even though the flags are on safe tiles
    let mut game = game_on("*.\n..");
    game.toggle_flag(3).unwrap();
    game.reveal_tile(1).unwrap();
    game.reveal_tile(2).unwrap();
    assert!(game.is_won());

    // the only unrevealed tile left is the real mine
    assert_eq!(game.phase(), GamePhase::InProgress);
}

#[test]
fn test_flagging_everything_ends_without_revealing_mines() {
    let mut game = game_on("*.\n..");
    for index in 0..4 {
        game.toggle_flag(index).unwrap();
    }
    assert!(game.is_finished());
    assert!(!game.tiles().iter().any(|tile| tile.is_revealed()));
    assert_eq!(game.phase(), GamePhase::Finished(Outcome::Undecided));
}

#[test]
fn test_reveal_all_action_then_restart() {
    let mut game = game_on("*.\n..");
    game.reveal_all();
    assert_eq!(game.phase(), GamePhase::Finished(Outcome::Lost));

    game.new_game(DEFAULT_COLUMNS, DEFAULT_ROWS).unwrap();
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert_eq!(game.flag_count(), 0);
}

#[test]
fn test_errors() {
    let mut game = Game::default();
    assert_eq!(game.reveal_tile(0), Err(GameError::NotStarted));
    assert_eq!(
        game.new_game(0, 4),
        Err(GameError::InvalidDimensions { columns: 0, rows: 4 })
    );

    let mut game = game_on("..");
    assert_eq!(
        game.toggle_flag(2),
        Err(GameError::OutOfBounds { index: 2, len: 2 })
    );
}

fn arb_game() -> impl Strategy<Value = Game> {
    (1usize..6, 1usize..6).prop_flat_map(|(columns, rows)| {
        prop::collection::vec(prop::bool::weighted(0.3), columns * rows).prop_map(move |mines| {
            let layout = mines
                .chunks(columns)
                .map(|row| row.iter().map(|&m| if m { '*' } else { '.' }).collect::<String>())
                .collect::<Vec<_>>()
                .join("\n");
            Game::with_board(layout.parse::<Board>().unwrap())
        })
    })
}

fn arb_actions() -> impl Strategy<Value = Vec<(usize, bool)>> {
    prop::collection::vec((any::<usize>(), any::<bool>()), 0..40)
}

proptest! {
    #[test]
    fn overlay_length_never_changes(mut game in arb_game(), actions in arb_actions()) {
        let len = game.board().len();
        for (seed, flag) in actions {
            let action = if flag { Action::Flag } else { Action::Reveal };
            game.perform_action(seed % len, action).unwrap();
            prop_assert_eq!(game.tiles().len(), len);
        }
    }

    #[test]
    fn revealed_tiles_stay_revealed(mut game in arb_game(), actions in arb_actions()) {
        let len = game.board().len();
        for (seed, flag) in actions {
            let index = seed % len;
            let before = game.tile(index).unwrap();
            let action = if flag { Action::Flag } else { Action::Reveal };
            game.perform_action(index, action).unwrap();
            if before.is_revealed() {
                prop_assert_eq!(game.tile(index).unwrap(), before);
            }
        }
    }

    #[test]
    fn reveal_all_keeps_flags(mut game in arb_game(), flags in prop::collection::vec(any::<usize>(), 0..10)) {
        let len = game.board().len();
        for seed in flags {
            game.toggle_flag(seed % len).unwrap();
        }
        let flagged: Vec<usize> = (0..len).filter(|&i| game.tile(i) == Some(Tile::Flagged)).collect();

        game.reveal_all();

        prop_assert!(game.is_finished());
        for index in 0..len {
            if flagged.contains(&index) {
                prop_assert_eq!(game.tile(index), Some(Tile::Flagged));
            } else {
                prop_assert_eq!(game.tile(index), Some(Tile::Revealed(resolve(game.board(), index))));
            }
        }
    }

    #[test]
    fn lost_implies_finished(mut game in arb_game(), actions in arb_actions()) {
        let len = game.board().len();
        for (seed, flag) in actions {
            let action = if flag { Action::Flag } else { Action::Reveal };
            game.perform_action(seed % len, action).unwrap();
            if game.is_lost() {
                prop_assert!(game.is_finished());
            }
        }
    }
}
