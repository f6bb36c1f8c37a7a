use std::thread;
use std::time::Duration;

use tracing::info;

use crate::display::DisplaySink;
use crate::error::AppError;
use crate::game::{Game, GameOverReason, GameStatus};
use crate::input::{GameInput, InputSource};

/// Final result of one session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameSummary {
    pub score: u32,
    pub length: usize,
    pub ticks: u64,
    pub reason: GameOverReason,
}

/// Runs ticks until the game ends, then shows the final score and waits
/// for one key press.
///
/// Each tick reads one input sample, updates the game, redraws, and sleeps
/// `tick_interval`. Quit ends the loop before that tick's update.
pub fn run_game<I, D>(
    game: &mut Game,
    input: &mut I,
    display: &mut D,
    tick_interval: Duration,
) -> Result<GameSummary, AppError>
where
    I: InputSource + ?Sized,
    D: DisplaySink + ?Sized,
{
    display.render(&game.snapshot())?;

    while !game.is_over() {
        let requested = match input.poll_input()? {
            Some(GameInput::Quit) => {
                game.quit();
                break;
            }
            Some(GameInput::Direction(direction)) => Some(direction),
            None => None,
        };

        let status = game.tick(requested)?;
        display.render(&game.snapshot())?;

        if status == GameStatus::GameOver {
            break;
        }

        thread::sleep(tick_interval);
    }

    display.render_game_over(game.score())?;
    input.wait_for_key()?;

    let summary = GameSummary {
        score: game.score(),
        length: game.snake.len(),
        ticks: game.tick_count,
        reason: game.game_over_reason.unwrap_or(GameOverReason::Quit),
    };
    info!(?summary, "session finished");

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::config::GridSize;
    use crate::display::RecordingDisplay;
    use crate::game::{Game, GameOverReason};
    use crate::input::{Direction, GameInput, ScriptedInput};
    use crate::snake::Position;

    use super::run_game;

    const BOARD: GridSize = GridSize {
        width: 20,
        height: 20,
    };

    #[test]
    fn quit_stops_before_the_update() {
        let mut game = Game::new_with_seed(BOARD, 11).expect("valid board");
        let mut input = ScriptedInput::new([Some(GameInput::Quit)]);
        let mut display = RecordingDisplay::new(BOARD);

        let summary =
            run_game(&mut game, &mut input, &mut display, Duration::ZERO).expect("session runs");

        assert_eq!(summary.reason, GameOverReason::Quit);
        assert_eq!(summary.ticks, 0);
        assert_eq!(game.snake.head(), Position { x: 10, y: 10 });
        assert_eq!(display.frames.len(), 1);
        assert_eq!(display.game_over_score, Some(0));
        assert_eq!(input.keys_waited(), 1);
    }

    #[test]
    fn one_frame_is_drawn_per_tick() {
        let mut game = Game::new_with_seed(BOARD, 12).expect("valid board");
        game.food = Position { x: 2, y: 2 };
        let mut input = ScriptedInput::new([None, None, Some(GameInput::Quit)]);
        let mut display = RecordingDisplay::new(BOARD);

        let summary =
            run_game(&mut game, &mut input, &mut display, Duration::ZERO).expect("session runs");

        assert_eq!(summary.ticks, 2);
        assert_eq!(display.frames.len(), 3);
        let heads: Vec<Position> = display.frames.iter().map(|frame| frame.segments[0]).collect();
        assert_eq!(
            heads,
            vec![
                Position { x: 10, y: 10 },
                Position { x: 11, y: 10 },
                Position { x: 12, y: 10 },
            ]
        );
    }

    #[test]
    fn steering_into_the_wall_ends_the_session() {
        let mut game = Game::new_with_seed(BOARD, 13).expect("valid board");
        game.food = Position { x: 18, y: 18 };
        let mut input = ScriptedInput::new([Some(GameInput::Direction(Direction::Up))]);
        let mut display = RecordingDisplay::new(BOARD);

        let summary =
            run_game(&mut game, &mut input, &mut display, Duration::ZERO).expect("session runs");

        assert_eq!(summary.reason, GameOverReason::WallCollision);
        assert_eq!(summary.ticks, 10);
        assert_eq!(game.snake.head(), Position { x: 10, y: 0 });
        assert_eq!(display.game_over_score, Some(0));
    }
}
