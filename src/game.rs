use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::{
    GridSize, INITIAL_SNAKE_LENGTH, MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH, POINTS_PER_FOOD,
};
use crate::display::Snapshot;
use crate::error::EngineError;
use crate::food::place_food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Why the game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
    Quit,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct Game {
    pub snake: Snake,
    pub food: Position,
    pub status: GameStatus,
    pub game_over_reason: Option<GameOverReason>,
    pub tick_count: u64,
    bounds: GridSize,
    rng: StdRng,
}

impl Game {
    /// Creates a deterministic game for tests and reproducible sessions.
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Result<Self, EngineError> {
        Self::new(bounds, StdRng::seed_from_u64(seed))
    }

    /// Seats the initial snake at the board centre heading right and places
    /// the first food.
    pub fn new(bounds: GridSize, mut rng: StdRng) -> Result<Self, EngineError> {
        if bounds.width < MIN_BOARD_WIDTH || bounds.height < MIN_BOARD_HEIGHT {
            return Err(EngineError::BoardTooSmall {
                width: bounds.width,
                height: bounds.height,
                min_width: MIN_BOARD_WIDTH,
                min_height: MIN_BOARD_HEIGHT,
            });
        }

        let centre = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let snake = Snake::new(centre, INITIAL_SNAKE_LENGTH, Direction::Right);
        let food = place_food(&mut rng, &snake, bounds)?;

        Ok(Self {
            snake,
            food,
            status: GameStatus::Running,
            game_over_reason: None,
            tick_count: 0,
            bounds,
            rng,
        })
    }

    /// Advances the simulation by one tick.
    ///
    /// Applies the requested turn, moves the snake, then checks walls, the
    /// body, and food in that order. Does nothing once the game is over.
    pub fn tick(&mut self, requested: Option<Direction>) -> Result<GameStatus, EngineError> {
        if self.status != GameStatus::Running {
            return Ok(self.status);
        }

        if let Some(direction) = requested {
            self.snake.steer(direction);
        }

        self.tick_count += 1;
        self.snake.advance();

        if check_wall_collision(&self.snake, self.bounds) {
            self.end(GameOverReason::WallCollision);
            return Ok(self.status);
        }

        if check_self_collision(&self.snake) {
            self.end(GameOverReason::SelfCollision);
            return Ok(self.status);
        }

        if check_food_eaten(&self.snake, self.food) {
            self.consume_food()?;
        }

        Ok(self.status)
    }

    /// Ends the game on the player's request.
    pub fn quit(&mut self) {
        if self.status == GameStatus::Running {
            self.end(GameOverReason::Quit);
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Read-only view of everything the display needs for one frame.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            segments: self.snake.segments(),
            direction: self.snake.direction(),
            food: self.food,
            score: self.snake.score(),
            bounds: self.bounds,
        }
    }

    fn consume_food(&mut self) -> Result<(), EngineError> {
        self.snake.grow();
        self.snake.add_score(POINTS_PER_FOOD);
        self.food = place_food(&mut self.rng, &self.snake, self.bounds)?;

        debug!(
            score = self.snake.score(),
            length = self.snake.len(),
            food_x = self.food.x,
            food_y = self.food.y,
            "food eaten"
        );
        Ok(())
    }

    fn end(&mut self, reason: GameOverReason) {
        self.status = GameStatus::GameOver;
        self.game_over_reason = Some(reason);

        info!(
            ?reason,
            score = self.snake.score(),
            length = self.snake.len(),
            ticks = self.tick_count,
            "game over"
        );
    }
}

/// True when the head sits on or beyond the border ring.
#[must_use]
pub fn check_wall_collision(snake: &Snake, bounds: GridSize) -> bool {
    !snake.head().is_interior(bounds)
}

/// True when the head shares a cell with any other segment.
#[must_use]
pub fn check_self_collision(snake: &Snake) -> bool {
    snake.head_overlaps_body()
}

#[must_use]
pub fn check_food_eaten(snake: &Snake, food: Position) -> bool {
    snake.head() == food
}
