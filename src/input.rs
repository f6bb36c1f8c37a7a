use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the `(dx, dy)` step for one cell of movement. `y` grows downward.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Resolves the direction for this tick: `requested`, unless it reverses `current`.
#[must_use]
pub fn apply_input(current: Direction, requested: Direction) -> Direction {
    if direction_change_is_valid(current, requested) {
        requested
    } else {
        current
    }
}

/// Supplies player input to the game loop.
pub trait InputSource {
    /// Returns at most one input without blocking. `None` means no change.
    fn poll_input(&mut self) -> io::Result<Option<GameInput>>;

    /// Blocks until any key is pressed.
    fn wait_for_key(&mut self) -> io::Result<()>;
}

/// Keyboard input read from the crossterm event queue.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_input(&mut self) -> io::Result<Option<GameInput>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key(key) {
                    return Ok(Some(input));
                }
            }
        }

        Ok(None)
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

/// Maps a key press to a game input. Raw mode swallows SIGINT, so Ctrl-C quits here.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameInput::Quit)
        }
        KeyCode::Char('q' | 'Q') => Some(GameInput::Quit),
        _ => None,
    }
}

/// Replays a fixed sequence of per-tick samples, then reports no input.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    samples: VecDeque<Option<GameInput>>,
    keys_waited: usize,
}

impl ScriptedInput {
    #[must_use]
    pub fn new(samples: impl IntoIterator<Item = Option<GameInput>>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            keys_waited: 0,
        }
    }

    /// Number of times the loop blocked waiting for a key.
    #[must_use]
    pub fn keys_waited(&self) -> usize {
        self.keys_waited
    }

    /// Samples not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_input(&mut self) -> io::Result<Option<GameInput>> {
        Ok(self.samples.pop_front().flatten())
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        self.keys_waited += 1;
        Ok(())
    }
}
