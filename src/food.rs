use rand::Rng;

use crate::config::GridSize;
use crate::error::EngineError;
use crate::snake::{Position, Snake};

/// Random draws per free cell before switching to an exhaustive scan.
const RANDOM_ATTEMPTS_PER_CELL: usize = 4;

/// Chooses a uniformly random interior cell not occupied by the snake.
///
/// Retries random draws first. When the snake covers most of the board the
/// draws keep missing, so after a bounded number of attempts the free cells
/// are enumerated and one is picked directly.
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    snake: &Snake,
    bounds: GridSize,
) -> Result<Position, EngineError> {
    let interior = bounds.interior_cells();
    if snake.len() >= interior {
        return Err(EngineError::NoFreeCell {
            snake_len: snake.len(),
            interior,
        });
    }

    let max_x = i32::from(bounds.width) - 1;
    let max_y = i32::from(bounds.height) - 1;

    for _ in 0..interior * RANDOM_ATTEMPTS_PER_CELL {
        let candidate = Position {
            x: rng.gen_range(1..max_x),
            y: rng.gen_range(1..max_y),
        };
        if !snake.occupies(candidate) {
            return Ok(candidate);
        }
    }

    let candidates = free_cells(snake, bounds);
    if candidates.is_empty() {
        // Only reachable when segments overlap, so len() overstates coverage.
        return Err(EngineError::NoFreeCell {
            snake_len: snake.len(),
            interior,
        });
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}

/// Lists interior cells not occupied by the snake, row by row.
#[must_use]
pub fn free_cells(snake: &Snake, bounds: GridSize) -> Vec<Position> {
    let mut candidates = Vec::new();

    for y in 1..i32::from(bounds.height) - 1 {
        for x in 1..i32::from(bounds.width) - 1 {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::error::EngineError;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{free_cells, place_food};

    #[test]
    fn food_never_overlaps_snake_or_border() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = GridSize {
            width: 10,
            height: 10,
        };
        let snake = Snake::new(Position { x: 5, y: 5 }, 3, Direction::Right);

        for _ in 0..500 {
            let food = place_food(&mut rng, &snake, bounds).expect("free cells exist");
            assert!(!snake.occupies(food));
            assert!(food.is_interior(bounds));
        }
    }

    #[test]
    fn same_seed_gives_same_food() {
        let bounds = GridSize {
            width: 30,
            height: 15,
        };
        let snake = Snake::new(Position { x: 15, y: 7 }, 3, Direction::Right);

        let first = place_food(&mut StdRng::seed_from_u64(99), &snake, bounds);
        let second = place_food(&mut StdRng::seed_from_u64(99), &snake, bounds);

        assert_eq!(first, second);
    }

    #[test]
    fn last_free_cell_is_found() {
        let bounds = GridSize {
            width: 5,
            height: 4,
        };
        // Interior is 3x2; the snake covers all of it except (3, 2).
        let snake = Snake::from_segments(
            vec![
                Position { x: 1, y: 2 },
                Position { x: 1, y: 1 },
                Position { x: 2, y: 1 },
                Position { x: 3, y: 1 },
                Position { x: 2, y: 2 },
            ],
            Direction::Down,
        );

        assert_eq!(free_cells(&snake, bounds), vec![Position { x: 3, y: 2 }]);

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            assert_eq!(
                place_food(&mut rng, &snake, bounds),
                Ok(Position { x: 3, y: 2 })
            );
        }
    }

    #[test]
    fn full_interior_is_an_error() {
        let bounds = GridSize {
            width: 4,
            height: 3,
        };
        let snake = Snake::from_segments(
            vec![Position { x: 1, y: 1 }, Position { x: 2, y: 1 }],
            Direction::Left,
        );
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            place_food(&mut rng, &snake, bounds),
            Err(EngineError::NoFreeCell {
                snake_len: 2,
                interior: 2,
            })
        );
    }
}
