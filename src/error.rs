use std::io;

use thiserror::Error;

/// Failures raised by the game engine.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum EngineError {
    #[error(
        "board {width}x{height} is too small to seat the snake (need at least {min_width}x{min_height})"
    )]
    BoardTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("no free cell left for food (snake length {snake_len}, interior {interior} cells)")]
    NoFreeCell { snake_len: usize, interior: usize },
}

/// Top-level error for a game session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
