use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
///
/// The outermost ring of cells is the border; everything inside it is the
/// playable interior.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the number of playable cells inside the border ring.
    #[must_use]
    pub fn interior_cells(self) -> usize {
        usize::from(self.width.saturating_sub(2)) * usize::from(self.height.saturating_sub(2))
    }
}

/// Colors applied to the visual elements.
#[derive(Debug)]
pub struct Palette {
    pub border: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub score: Color,
    pub message: Color,
}

pub const PALETTE: Palette = Palette {
    border: Color::White,
    snake_head: Color::Green,
    snake_body: Color::Green,
    food: Color::Red,
    score: Color::Yellow,
    message: Color::White,
};

pub const GLYPH_BORDER: &str = "#";
pub const GLYPH_SNAKE_HEAD: &str = "O";
pub const GLYPH_SNAKE_BODY: &str = "=";
pub const GLYPH_FOOD: &str = "*";

/// Border drawn with the same glyph on every side and corner.
pub const BORDER_HASH: border::Set = border::Set {
    top_left: GLYPH_BORDER,
    top_right: GLYPH_BORDER,
    bottom_left: GLYPH_BORDER,
    bottom_right: GLYPH_BORDER,
    vertical_left: GLYPH_BORDER,
    vertical_right: GLYPH_BORDER,
    horizontal_top: GLYPH_BORDER,
    horizontal_bottom: GLYPH_BORDER,
};

/// Column on the top border where the score readout starts.
pub const SCORE_COLUMN: u16 = 5;

/// Fixed delay between ticks in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Segments in a freshly spawned snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Score granted per food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Smallest board accepted at startup.
pub const MIN_BOARD_WIDTH: u16 = 10;
pub const MIN_BOARD_HEIGHT: u16 = 10;

#[cfg(test)]
mod tests {
    use super::GridSize;

    #[test]
    fn interior_excludes_border_ring() {
        let board = GridSize {
            width: 20,
            height: 10,
        };

        assert_eq!(board.interior_cells(), 18 * 8);
    }

    #[test]
    fn interior_of_degenerate_grid_is_empty() {
        let board = GridSize {
            width: 2,
            height: 1,
        };

        assert_eq!(board.interior_cells(), 0);
    }
}
