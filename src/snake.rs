use crate::grid::{Direction, Grid, Position};

const INITIAL_LENGTH: usize = 1;
const INITIAL_DIRECTION: Direction = Direction::Right;

/// Result of advancing the snake by one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum StepOutcome {
    Moved,
    /// The head would have entered a body cell; the snake was left unmoved
    Collided,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    grid: Grid,
    /// Occupied cells, head first
    segments: Vec<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
    /// Target length; the body catches up one cell per step
    length: usize,
}

impl Snake {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            segments: vec![grid.center()],
            direction: INITIAL_DIRECTION,
            pending_direction: None,
            length: INITIAL_LENGTH,
        }
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    #[cfg(test)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Queues a turn for the next step. Reversing onto the neck is ignored.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.pending_direction = Some(direction);
        }
    }

    pub fn step(&mut self) -> StepOutcome {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let new_head = self.grid.step(self.head(), self.direction);

        // The tail moves out of the way unless the snake is still growing
        let tail_vacates = self.segments.len() >= self.length;
        let blocking = if tail_vacates {
            &self.segments[..self.segments.len() - 1]
        } else {
            &self.segments[..]
        };
        if blocking.contains(&new_head) {
            return StepOutcome::Collided;
        }

        self.segments.insert(0, new_head);
        if self.segments.len() > self.length {
            self.segments.pop();
        }
        StepOutcome::Moved
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn reset(&mut self) {
        *self = Snake::new(self.grid);
    }

    #[cfg(test)]
    pub fn from_segments(grid: Grid, segments: Vec<Position>, direction: Direction) -> Self {
        let length = segments.len();
        Self {
            grid,
            segments,
            direction,
            pending_direction: None,
            length,
        }
    }
}
