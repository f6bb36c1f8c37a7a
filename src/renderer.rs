use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::{
    GridSize, BORDER_HASH, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, PALETTE, SCORE_COLUMN,
};
use crate::display::Snapshot;
use crate::snake::Position;

/// Renders the full game frame from an immutable snapshot.
///
/// The board occupies the top-left `bounds` cells of the frame, border
/// included, so logical positions map one-to-one onto terminal cells.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>) {
    let board_area = board_rect(frame.area(), snapshot.bounds);

    let block = Block::bordered()
        .border_set(BORDER_HASH)
        .border_style(Style::new().fg(PALETTE.border));
    frame.render_widget(block, board_area);

    render_food(frame, board_area, snapshot.food);
    render_snake(frame, board_area, snapshot.segments);
    render_score(frame, board_area, snapshot.score);
}

/// Clears the surface and centres the final score with an exit prompt.
pub fn render_game_over(frame: &mut Frame<'_>, score: u32) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    let [_, message_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(area);

    let lines = vec![
        Line::from(format!("Game Over! Score: {score}")),
        Line::from("Press any key to exit..."),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(PALETTE.message)
                    .add_modifier(Modifier::BOLD),
            ),
        message_area,
    );
}

fn render_food(frame: &mut Frame<'_>, board_area: Rect, food: Position) {
    let Some((x, y)) = logical_to_terminal(board_area, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(PALETTE.food));
}

fn render_snake(frame: &mut Frame<'_>, board_area: Rect, segments: &[Position]) {
    let buffer = frame.buffer_mut();

    // Body first so the head stays visible if it overlaps a segment.
    for segment in segments.iter().skip(1) {
        if let Some((x, y)) = logical_to_terminal(board_area, *segment) {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_BODY,
                Style::new().fg(PALETTE.snake_body),
            );
        }
    }

    if let Some((x, y)) = segments
        .first()
        .and_then(|head| logical_to_terminal(board_area, *head))
    {
        buffer.set_string(
            x,
            y,
            GLYPH_SNAKE_HEAD,
            Style::new()
                .fg(PALETTE.snake_head)
                .add_modifier(Modifier::BOLD),
        );
    }
}

fn render_score(frame: &mut Frame<'_>, board_area: Rect, score: u32) {
    if board_area.height == 0 || board_area.width <= SCORE_COLUMN {
        return;
    }

    let x = board_area.x + SCORE_COLUMN;
    let max_width = usize::from(board_area.right() - x);
    frame.buffer_mut().set_stringn(
        x,
        board_area.y,
        format!(" Score: {score} "),
        max_width,
        Style::new().fg(PALETTE.score),
    );
}

fn board_rect(area: Rect, bounds: GridSize) -> Rect {
    Rect::new(area.x, area.y, bounds.width, bounds.height).intersection(area)
}

fn logical_to_terminal(board_area: Rect, position: Position) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = board_area.x.saturating_add(x_offset);
    let y = board_area.y.saturating_add(y_offset);
    if x >= board_area.right() || y >= board_area.bottom() {
        return None;
    }

    Some((x, y))
}
