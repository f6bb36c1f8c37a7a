use std::io;

use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::config::GridSize;
use crate::input::Direction;
use crate::renderer;
use crate::snake::Position;

/// Read-only view of the game handed to a display once per tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Snapshot<'a> {
    /// Head first.
    pub segments: &'a [Position],
    pub direction: Direction,
    pub food: Position,
    pub score: u32,
    pub bounds: GridSize,
}

/// Renders game state to a visible surface.
pub trait DisplaySink {
    /// Size of the drawable surface in cells.
    fn surface_size(&self) -> io::Result<GridSize>;

    /// Redraws the whole surface from `snapshot`.
    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()>;

    /// Replaces the board with the final score message.
    fn render_game_over(&mut self, score: u32) -> io::Result<()>;
}

/// Display sink drawing through a ratatui terminal.
pub struct TerminalDisplay<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalDisplay<B> {
    pub fn new(backend: B) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
        })
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend> DisplaySink for TerminalDisplay<B> {
    fn surface_size(&self) -> io::Result<GridSize> {
        let size = self.terminal.size()?;
        Ok(GridSize {
            width: size.width,
            height: size.height,
        })
    }

    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, snapshot))?;
        Ok(())
    }

    fn render_game_over(&mut self, score: u32) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render_game_over(frame, score))?;
        Ok(())
    }
}

/// Owned copy of one rendered snapshot.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RecordedFrame {
    pub segments: Vec<Position>,
    pub direction: Direction,
    pub food: Position,
    pub score: u32,
}

/// Headless display that keeps every frame it is asked to draw.
#[derive(Debug, Clone)]
pub struct RecordingDisplay {
    size: GridSize,
    pub frames: Vec<RecordedFrame>,
    pub game_over_score: Option<u32>,
}

impl RecordingDisplay {
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            frames: Vec::new(),
            game_over_score: None,
        }
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl DisplaySink for RecordingDisplay {
    fn surface_size(&self) -> io::Result<GridSize> {
        Ok(self.size)
    }

    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        self.frames.push(RecordedFrame {
            segments: snapshot.segments.to_vec(),
            direction: snapshot.direction,
            food: snapshot.food,
            score: snapshot.score,
        });
        Ok(())
    }

    fn render_game_over(&mut self, score: u32) -> io::Result<()> {
        self.game_over_score = Some(score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::Position;

    use super::{DisplaySink, RecordingDisplay, Snapshot, TerminalDisplay};

    #[test]
    fn terminal_display_reports_backend_size() {
        let display = TerminalDisplay::new(TestBackend::new(32, 12)).expect("test backend");

        assert_eq!(
            display.surface_size().expect("size"),
            GridSize {
                width: 32,
                height: 12,
            }
        );
    }

    #[test]
    fn recording_display_keeps_owned_frames() {
        let bounds = GridSize {
            width: 12,
            height: 12,
        };
        let segments = [Position { x: 4, y: 4 }, Position { x: 3, y: 4 }];
        let mut display = RecordingDisplay::new(bounds);

        display
            .render(&Snapshot {
                segments: &segments,
                direction: Direction::Right,
                food: Position { x: 8, y: 8 },
                score: 20,
                bounds,
            })
            .expect("recording never fails");
        display.render_game_over(20).expect("recording never fails");

        let frame = display.last_frame().expect("one frame recorded");
        assert_eq!(frame.segments, segments.to_vec());
        assert_eq!(frame.score, 20);
        assert_eq!(display.game_over_score, Some(20));
    }
}
