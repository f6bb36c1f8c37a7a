use crate::config::GridSize;
use crate::input::{apply_input, Direction};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when the position lies in the playable interior,
    /// i.e. inside the bounds and off the border ring.
    #[must_use]
    pub fn is_interior(self, bounds: GridSize) -> bool {
        self.x >= 1
            && self.y >= 1
            && self.x < i32::from(bounds.width) - 1
            && self.y < i32::from(bounds.height) - 1
    }
}

/// Player-controlled snake: body segments, heading, and score.
#[derive(Debug, Clone)]
pub struct Snake {
    /// Head first, then body in movement order.
    segments: Vec<Position>,
    direction: Direction,
    score: u32,
}

impl Snake {
    /// Creates a snake of `length` segments with the head at `head` and the
    /// body laid out contiguously behind it, opposite to `direction`.
    #[must_use]
    pub fn new(head: Position, length: usize, direction: Direction) -> Self {
        let trailing = direction.opposite();
        let mut segments = Vec::with_capacity(length.max(1));
        let mut cursor = head;
        segments.push(cursor);
        for _ in 1..length {
            cursor = cursor.stepped(trailing);
            segments.push(cursor);
        }

        Self {
            segments,
            direction,
            score: 0,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            segments,
            direction,
            score: 0,
        }
    }

    /// Turns toward `requested` unless that would reverse onto the body.
    pub fn steer(&mut self, requested: Direction) {
        self.direction = apply_input(self.direction, requested);
    }

    /// Moves the snake one cell.
    ///
    /// Each body segment takes its predecessor's cell, walking from the tail
    /// toward the head so no position is overwritten before it is read. The
    /// head then steps in the current direction.
    pub fn advance(&mut self) {
        for index in (1..self.segments.len()).rev() {
            self.segments[index] = self.segments[index - 1];
        }

        self.segments[0] = self.segments[0].stepped(self.direction);
    }

    /// Adds one trailing segment on the current tail cell.
    ///
    /// The copy shares the tail's cell until the next [`Snake::advance`],
    /// which leaves it behind on the old tail position.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.segments.push(tail);
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    #[must_use]
    pub fn tail(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.segments.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.segments[1..].contains(&head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a snake keeps at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Body segments from head to tail.
    #[must_use]
    pub fn segments(&self) -> &[Position] {
        &self.segments
    }
}
