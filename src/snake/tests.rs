use super::*;
use crate::{seeded_rng, SnakeConfig};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::{collections::HashSet, time::Duration};

const SEED: u64 = 42;

fn new_game(config: SnakeConfig, high_score: u32) -> SnakeGame<ChaCha8Rng> {
    let mut game = SnakeGame::new(config, high_score, seeded_rng(Some(SEED)));
    game.start();
    game
}

/// Moves the food out of the way so plain ticks do not eat it.
fn park_food(game: &mut SnakeGame<ChaCha8Rng>) {
    assert!(game.place_food_at(Segment::new(0, 0)));
}

/// Puts food right in front of the head, then ticks.
fn feed(game: &mut SnakeGame<ChaCha8Rng>, direction: Direction) -> TickOutcome {
    game.request_direction(direction);
    let target = game.head().moved(direction);
    assert!(game.place_food_at(target), "{:?} is not free", target);
    game.tick()
}

fn expect_report(outcome: TickOutcome) -> GameOverReport {
    match outcome {
        TickOutcome::GameOver(report) => report,
        other => panic!("expected game over, got {:?}", other),
    }
}

#[test]
fn test_initial_state() {
    let game = SnakeGame::new(SnakeConfig::default(), 7, seeded_rng(Some(SEED)));
    assert_eq!(game.state(), GameState::Idle);
    assert_eq!(game.len(), 3);
    assert_eq!(game.score(), 0);
    assert_eq!(game.speed_level(), 1);
    assert_eq!(game.high_score(), 7);
    assert_eq!(game.tick_interval(), Duration::from_millis(150));
    assert_eq!(
        game.segments().collect::<Vec<_>>(),
        vec![Segment::new(10, 10), Segment::new(9, 10), Segment::new(8, 10)]
    );
    assert_eq!(game.direction(), Direction::Right);
    let food = game.food().unwrap();
    assert!(game.segments().all(|s| s != food));
}

#[test]
fn test_idle_game_ignores_ticks_and_input() {
    let mut game = SnakeGame::new(SnakeConfig::default(), 0, seeded_rng(Some(SEED)));
    assert!(!game.request_direction(Direction::Up));
    assert_eq!(game.tick(), TickOutcome::NotRunning);
    assert_eq!(game.head(), Segment::new(10, 10));
}

#[test]
fn test_move_keeps_length() {
    let mut game = new_game(SnakeConfig::default(), 0);
    park_food(&mut game);
    for x in 11..15 {
        assert_eq!(game.tick(), TickOutcome::Moved);
        assert_eq!(game.head(), Segment::new(x, 10));
        assert_eq!(game.len(), 3);
    }
    assert_eq!(game.score(), 0);
}

#[test]
fn test_eating_grows_and_scores() {
    let mut game = new_game(SnakeConfig::default(), 0);
    assert!(game.place_food_at(Segment::new(11, 10)));

    assert_eq!(game.tick(), TickOutcome::Ate { speed_up: false });
    assert_eq!(game.score(), 1);
    assert_eq!(game.len(), 4);
    assert_eq!(game.segments().last(), Some(Segment::new(8, 10)));

    let food = game.food().unwrap();
    assert!(game.segments().all(|s| s != food));

    park_food(&mut game);
    assert_eq!(game.tick(), TickOutcome::Moved);
    assert_eq!(game.len(), 4);
}

#[test]
fn test_reverse_direction_is_ignored() {
    let mut game = new_game(SnakeConfig::default(), 0);
    park_food(&mut game);

    assert!(!game.request_direction(Direction::Left));
    assert_eq!(game.buffered_direction(), Direction::Right);
    assert_eq!(game.tick(), TickOutcome::Moved);
    assert_eq!(game.head(), Segment::new(11, 10));
    assert_eq!(game.state(), GameState::Running);
}

#[test]
fn test_reverse_is_checked_against_current_direction() {
    let mut game = new_game(SnakeConfig::default(), 0);
    park_food(&mut game);

    // Down is buffered, but the snake still moves right, so Left stays illegal
    // and Up is still legal.
    assert!(game.request_direction(Direction::Down));
    assert!(!game.request_direction(Direction::Left));
    assert!(game.request_direction(Direction::Up));
    assert_eq!(game.tick(), TickOutcome::Moved);
    assert_eq!(game.head(), Segment::new(10, 9));
    assert_eq!(game.direction(), Direction::Up);
}

#[test]
fn test_last_buffered_direction_wins() {
    let mut game = new_game(SnakeConfig::default(), 0);
    park_food(&mut game);

    assert!(game.request_direction(Direction::Up));
    assert!(game.request_direction(Direction::Down));
    game.tick();
    assert_eq!(game.head(), Segment::new(10, 11));
}

#[test]
fn test_wall_collision() {
    let mut game = new_game(SnakeConfig::default(), 0);
    park_food(&mut game);
    for _ in 0..9 {
        assert_eq!(game.tick(), TickOutcome::Moved);
    }
    assert_eq!(game.head(), Segment::new(19, 10));

    let report = expect_report(game.tick());
    assert_eq!(report.cause, GameOverCause::Wall);
    assert_eq!(report.score, 0);
    assert!(!report.new_high_score);
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.score(), 0);
    assert_eq!(game.tick(), TickOutcome::NotRunning);
}

#[test]
fn test_wall_collision_updates_high_score_only_when_beaten() {
    for (previous, expect_new) in [(0, true), (1, false), (5, false)] {
        let mut store = MemoryStore::with_score(previous);
        let mut game = new_game(SnakeConfig::default(), load_high_score(&store));
        feed(&mut game, Direction::Up);
        park_food(&mut game);

        let report = loop {
            if let TickOutcome::GameOver(report) = game.tick() {
                break report;
            }
        };
        assert_eq!(report.cause, GameOverCause::Wall);
        assert_eq!(report.score, 1);
        assert_eq!(report.new_high_score, expect_new);
        assert_eq!(report.high_score, previous.max(1));

        assert_eq!(record_high_score(&mut store, &report), expect_new);
        assert_eq!(store.writes(), expect_new as usize);
        assert_eq!(store.load().unwrap(), previous.max(1));
    }
}

#[test]
fn test_self_collision() {
    let mut game = new_game(SnakeConfig::default(), 0);
    feed(&mut game, Direction::Right);
    feed(&mut game, Direction::Right);
    assert_eq!(game.len(), 5);
    park_food(&mut game);

    for direction in [Direction::Down, Direction::Left] {
        assert!(game.request_direction(direction));
        assert_eq!(game.tick(), TickOutcome::Moved);
    }
    assert!(game.request_direction(Direction::Up));
    let report = expect_report(game.tick());
    assert_eq!(report.cause, GameOverCause::SelfCollision);
    assert_eq!(report.score, 2);
}

#[test]
fn test_running_into_tail_is_a_collision() {
    let mut game = new_game(SnakeConfig::default(), 0);
    feed(&mut game, Direction::Right);
    assert_eq!(game.len(), 4);
    park_food(&mut game);

    for direction in [Direction::Down, Direction::Left] {
        game.request_direction(direction);
        assert_eq!(game.tick(), TickOutcome::Moved);
    }
    assert_eq!(game.segments().last(), Some(Segment::new(10, 10)));
    game.request_direction(Direction::Up);
    let report = expect_report(game.tick());
    assert_eq!(report.cause, GameOverCause::SelfCollision);
}

#[test]
fn test_speed_up_every_five_food() {
    let mut game = new_game(SnakeConfig::default(), 0);
    for i in 1..=5 {
        let outcome = feed(&mut game, Direction::Right);
        assert_eq!(outcome, TickOutcome::Ate { speed_up: i == 5 });
    }
    assert_eq!(game.score(), 5);
    assert_eq!(game.speed_level(), 2);
    assert_eq!(game.tick_interval(), Duration::from_millis(140));
}

#[test]
fn test_speed_stops_at_floor() {
    let config = SnakeConfig {
        grid_size: 40,
        min_interval_ms: 140,
        ..Default::default()
    };
    let mut game = new_game(config, 0);
    for _ in 0..10 {
        feed(&mut game, Direction::Right);
    }
    assert_eq!(game.score(), 10);
    assert_eq!(game.speed_level(), 2);
    assert_eq!(game.tick_interval(), Duration::from_millis(140));
}

#[test]
fn test_restart_resets_everything() {
    let mut game = new_game(SnakeConfig::default(), 0);
    for _ in 0..5 {
        feed(&mut game, Direction::Right);
    }
    park_food(&mut game);
    game.request_direction(Direction::Up);
    while game.is_running() {
        game.tick();
    }
    assert_eq!(game.high_score(), 5);

    game.start();
    assert_eq!(game.state(), GameState::Running);
    assert_eq!(game.len(), 3);
    assert_eq!(game.score(), 0);
    assert_eq!(game.speed_level(), 1);
    assert_eq!(game.direction(), Direction::Right);
    assert_eq!(game.tick_interval(), Duration::from_millis(150));
    assert_eq!(game.high_score(), 5);
}

#[test]
fn test_place_food_at_rejects_occupied_and_outside() {
    let mut game = new_game(SnakeConfig::default(), 0);
    let food = game.food();
    assert!(!game.place_food_at(Segment::new(10, 10)));
    assert!(!game.place_food_at(Segment::new(9, 10)));
    assert!(!game.place_food_at(Segment::new(-1, 3)));
    assert!(!game.place_food_at(Segment::new(3, 20)));
    assert_eq!(game.food(), food);
}

#[test]
fn test_board_full_ends_game() {
    use Direction::*;

    let config = SnakeConfig {
        grid_size: 4,
        ..Default::default()
    };
    let mut game = new_game(config, 0);
    assert_eq!(game.head(), Segment::new(2, 2));

    // Hamiltonian path over the 13 free cells, eating on every tick
    let path = [Up, Left, Left, Up, Right, Right, Right, Down, Down, Down, Left, Left];
    for direction in path {
        assert!(matches!(feed(&mut game, direction), TickOutcome::Ate { .. }));
    }
    assert_eq!(game.len(), 15);

    let report = expect_report(feed(&mut game, Left));
    assert_eq!(report.cause, GameOverCause::BoardFull);
    assert_eq!(report.score, 13);
    assert_eq!(game.len(), 16);
    assert_eq!(game.food(), None);
}

#[test]
fn test_food_never_on_snake() {
    let mut rng = seeded_rng(Some(SEED + 1));
    let config = SnakeConfig {
        grid_size: 8,
        ..Default::default()
    };
    let mut game = new_game(config, 0);
    let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    for _ in 0..20_000 {
        if !game.is_running() {
            game.start();
        }
        // steer towards the food half of the time to get long snakes
        let direction = match game.food() {
            Some(food) if rng.gen_bool(0.5) => {
                let head = game.head();
                if food.x > head.x {
                    Direction::Right
                } else if food.x < head.x {
                    Direction::Left
                } else if food.y > head.y {
                    Direction::Down
                } else {
                    Direction::Up
                }
            }
            _ => directions[rng.gen_range(0..4)],
        };
        game.request_direction(direction);
        game.tick();

        if game.is_running() {
            let segments = game.segments().collect::<HashSet<_>>();
            assert_eq!(segments.len(), game.len(), "segments overlap");
            let food = game.food().unwrap();
            assert!(!segments.contains(&food), "food {:?} on the snake", food);
            assert!(segments.iter().all(|s| s.in_bounds(8)));
        }
    }
}

#[test]
fn test_tiny_board_is_raised_to_minimum() {
    for grid_size in [0, 1, 2, 3] {
        let config = SnakeConfig {
            grid_size,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let game = new_game(config, 0);
        assert_eq!(game.grid_size(), SnakeConfig::MIN_GRID_SIZE);
        assert!(game.segments().all(|s| s.in_bounds(4)), "{}", grid_size);
        assert_eq!(game.len(), 3);
    }
}

#[test]
fn test_zero_food_per_level_speeds_up_on_every_food() {
    let config = SnakeConfig {
        food_per_level: 0,
        initial_interval_ms: 0,
        ..Default::default()
    };
    assert!(config.validate().is_err());
    let game = new_game(config, 0);
    assert_eq!(game.tick_interval(), Duration::from_millis(1));

    let mut game = new_game(
        SnakeConfig {
            food_per_level: 0,
            ..Default::default()
        },
        0,
    );
    for level in 2..=3 {
        assert_eq!(
            feed(&mut game, Direction::Right),
            TickOutcome::Ate { speed_up: true }
        );
        assert_eq!(game.speed_level(), level);
    }
}
