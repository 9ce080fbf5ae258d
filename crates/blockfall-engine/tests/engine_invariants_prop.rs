//! Property tests for the board, collision and rotation rules, and for
//! whole games driven by arbitrary input.

use std::time::Duration;

use blockfall_engine::{
    ActivePiece, Anchor, Board, Cell, CommandError, Game, GameConfig, GameObserver,
    ManualScheduler, PieceSeed, ShapeKind, clone_shape, collides,
};
use proptest::prelude::*;

fn shape_kind() -> impl Strategy<Value = ShapeKind> {
    (0..ShapeKind::LEN).prop_map(|i| ShapeKind::ALL[i])
}

/// Board of the given size with arbitrary occupancy.
fn board(max_width: usize, max_height: usize) -> impl Strategy<Value = Board> {
    (1..=max_width, 1..=max_height).prop_flat_map(|(width, height)| {
        prop::collection::vec(any::<bool>(), width * height).prop_map(move |cells| {
            let mut board = Board::new(width, height);
            for (i, occupied) in cells.into_iter().enumerate() {
                if occupied {
                    board.set_occupied(i % width, i / width);
                }
            }
            board
        })
    })
}

#[derive(Debug, Clone, Copy)]
enum Input {
    Left,
    Right,
    Down,
    Rotate,
    Tick,
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        Just(Input::Left),
        Just(Input::Right),
        Just(Input::Down),
        Just(Input::Rotate),
        Just(Input::Tick),
    ]
}

#[derive(Debug, Default)]
struct Counter {
    renders: usize,
    scores: Vec<usize>,
    game_overs: usize,
}

impl GameObserver for Counter {
    fn render(&mut self, board: &Board, _piece: &ActivePiece) {
        assert_eq!(board.width(), 10);
        assert_eq!(board.height(), 20);
        self.renders += 1;
    }

    fn on_score_changed(&mut self, score: usize) {
        self.scores.push(score);
    }

    fn on_game_over(&mut self, _final_score: usize) {
        self.game_overs += 1;
    }
}

#[test]
fn scheduler_is_cancelled_exactly_when_game_ends() {
    let mut scheduler = ManualScheduler::new();
    let mut game = Game::new(GameConfig::default(), PieceSeed::from_u128(2026), ()).unwrap();
    game.start(&mut scheduler);

    for _ in 0..5000 {
        for _ in 0..scheduler.advance(Duration::from_millis(500)) {
            _ = game.tick(&mut scheduler);
        }
        assert_eq!(scheduler.is_scheduled(), game.phase().is_running());
    }
    assert!(game.phase().is_game_over());
}

proptest! {
    #[test]
    fn four_rotations_are_identity(kind in shape_kind(), turns in 0..4_usize) {
        let mut shape = clone_shape(kind);
        for _ in 0..turns {
            shape = shape.rotated();
        }
        let original = shape.clone();
        let back = shape.rotated().rotated().rotated().rotated();
        prop_assert_eq!(back, original);
    }

    #[test]
    fn out_of_bounds_cells_always_collide(
        board in board(12, 12),
        kind in shape_kind(),
        col in -6..18_i32,
        row in -6..18_i32,
    ) {
        let shape = clone_shape(kind);
        let anchor = Anchor::new(col, row);
        let width = i32::try_from(board.width()).unwrap();
        let height = i32::try_from(board.height()).unwrap();
        let piece = ActivePiece::new(kind, shape.clone(), anchor);
        let outside = piece
            .occupied_positions()
            .any(|(x, y)| x < 0 || x >= width || y >= height);
        if outside {
            prop_assert!(collides(&board, &shape, anchor));
        }
        let empty = Board::new(board.width(), board.height());
        prop_assert_eq!(collides(&empty, &shape, anchor), outside);
    }

    #[test]
    fn clear_full_rows_keeps_dimensions_and_order(board in board(8, 12)) {
        let kept = board
            .rows()
            .filter(|row| !row.iter().all(|cell| cell.is_occupied()))
            .map(<[Cell]>::to_vec)
            .collect::<Vec<_>>();
        let full = board.height() - kept.len();

        let mut cleared = board.clone();
        prop_assert_eq!(cleared.clear_full_rows(), full);
        prop_assert_eq!(cleared.width(), board.width());
        prop_assert_eq!(cleared.height(), board.height());

        let rows = cleared.rows().map(<[Cell]>::to_vec).collect::<Vec<_>>();
        for row in &rows[..full] {
            prop_assert!(row.iter().all(|cell| cell.is_empty()));
        }
        prop_assert_eq!(&rows[full..], &kept[..]);
    }

    #[test]
    fn arbitrary_input_respects_game_invariants(
        seed in any::<u128>(),
        inputs in prop::collection::vec(input(), 1..600),
    ) {
        let config = GameConfig::default();
        let points = config.points_per_line;
        let mut scheduler = ManualScheduler::new();
        let mut game = Game::new(config, PieceSeed::from_u128(seed), Counter::default()).unwrap();
        game.start(&mut scheduler);

        let mut last_score = 0;
        for input in inputs {
            let was_running = game.phase().is_running();
            let renders = game.observer().renders;
            let result = match input {
                Input::Left => game.move_left(),
                Input::Right => game.move_right(),
                Input::Down => game.soft_drop(),
                Input::Rotate => game.rotate_cw(),
                Input::Tick => game.tick(&mut scheduler).map(|_| ()),
            };

            if was_running {
                prop_assert_eq!(game.observer().renders, renders + 1);
                prop_assert_ne!(result, Err(CommandError::GameOver));
                let piece = game.active_piece();
                let fits = !collides(game.board(), piece.shape(), piece.anchor());
                prop_assert!(fits || game.phase().is_game_over());
            } else {
                prop_assert_eq!(result, Err(CommandError::GameOver));
                prop_assert_eq!(game.observer().renders, renders);
            }

            prop_assert!(game.score() >= last_score);
            prop_assert_eq!(game.score() % points, 0);
            prop_assert_eq!(game.score(), game.stats().total_cleared_lines() * points);
            last_score = game.score();
        }

        prop_assert_eq!(game.observer().game_overs, usize::from(game.phase().is_game_over()));
        prop_assert_eq!(game.observer().scores.last().copied(), Some(game.score()));
    }
}
