use torus_snake::config::GameConfig;
use torus_snake::food::Food;
use torus_snake::game::{GameState, GameStatus};
use torus_snake::grid::Position;
use torus_snake::input::{Direction, GameInput};
use torus_snake::snake::Snake;

#[test]
fn first_tick_and_first_meal_on_default_grid() {
    let mut state = GameState::new_with_seed(GameConfig::with_grid(32, 24), 42);
    assert_eq!(state.snake.head(), Position::new(16, 12));
    assert_eq!(state.snake.direction(), Direction::Right);

    state.food = Food::new(Position::new(17, 12));
    state.tick();

    let snapshot = state.snapshot();
    assert_eq!(snapshot.status, GameStatus::Playing);
    assert_eq!(snapshot.segments, vec![Position::new(17, 12)]);
    assert_eq!(snapshot.last_removed, Some(Position::new(16, 12)));
    assert_eq!(snapshot.length, 2);
    assert_eq!(snapshot.score, 1);
    assert!(!snapshot.segments.contains(&snapshot.food));

    state.tick();
    let snapshot = state.snapshot();
    assert_eq!(snapshot.segments, vec![Position::new(18, 12), Position::new(17, 12)]);
    assert_eq!(snapshot.last_removed, None);
    assert!(!snapshot.segments.contains(&snapshot.food));
}

#[test]
fn snake_wraps_around_the_torus() {
    let mut state = GameState::new_with_seed(GameConfig::with_grid(6, 4), 7);
    state.snake = Snake::new(Position::new(5, 0), Direction::Right);
    state.food = Food::new(Position::new(2, 2));

    state.tick();
    assert_eq!(state.snake.head(), Position::new(0, 0));

    state.apply_input(GameInput::Direction(Direction::Up));
    state.tick();
    assert_eq!(state.snake.head(), Position::new(0, 3));
    assert_eq!(state.status, GameStatus::Playing);
}

#[test]
fn self_collision_resets_then_play_resumes() {
    let mut state = GameState::new_with_seed(GameConfig::with_grid(10, 10), 3);
    state.snake = Snake::from_segments(
        vec![
            Position::new(2, 2),
            Position::new(2, 3),
            Position::new(3, 3),
            Position::new(3, 2),
            Position::new(3, 1),
        ],
        Direction::Up,
    );
    state.score = 4;
    state.apply_input(GameInput::SpeedDown);

    // Right from (2, 2) lands on (3, 2), which stays part of the body.
    state.apply_input(GameInput::Direction(Direction::Right));
    state.tick();

    assert_eq!(state.status, GameStatus::Collided);
    assert_eq!(state.snake.length(), 1);
    assert_eq!(state.snake.segments().copied().collect::<Vec<_>>(), vec![Position::new(5, 5)]);
    assert_eq!(state.score, 0);
    assert_eq!(state.ticks_per_second, 10);

    state.tick();
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.tick_count, 2);
}

#[test]
fn eating_up_to_win_length_ends_the_game() {
    let config = GameConfig {
        win_length: 4,
        ..GameConfig::with_grid(12, 3)
    };
    let mut state = GameState::new_with_seed(config, 9);
    state.snake = Snake::new(Position::new(0, 1), Direction::Right);

    for x in 1..=3 {
        state.food = Food::new(Position::new(x, 1));
        state.tick();
    }

    assert_eq!(state.status, GameStatus::Victory);
    assert_eq!(state.score, 3);

    let frozen = state.snapshot();
    state.apply_input(GameInput::Direction(Direction::Down));
    state.apply_input(GameInput::SpeedUp);
    state.tick();
    assert_eq!(state.snapshot(), frozen);
}
