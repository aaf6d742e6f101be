use std::collections::VecDeque;
use std::time::Duration;

use super::action::Direction;
use super::config::GameConfig;

/// One cell on the play field.
///
/// The original demos worked in pixel centers on a 20 px lattice; everything
/// here is in whole cells (classic field: 40x30 cells for 800x600 px).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell offset by (dx, dy).
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The adjacent cell one step along `direction`.
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

/// The snake: an ordered run of cells, head first.
///
/// Invariant: never empty, and a tick shifts every non-head segment into the
/// cell its predecessor occupied on the previous tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: VecDeque<Position>,
    pub direction: Direction,
}

impl Snake {
    /// Build a snake of `length` cells with the tail trailing away from
    /// `direction` behind `head`.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length.max(1))
            .map(|i| head.offset(-dx * i as i32, -dy * i as i32))
            .collect();

        Self { body, direction }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        *self.body.back().expect("snake body is never empty")
    }

    /// True if any segment sits on `cell`. The candidate head cell passed in
    /// by the engine is always one step away from the current head, so
    /// including the head in the scan cannot produce a false hit.
    pub fn occupies(&self, cell: Position) -> bool {
        self.body.contains(&cell)
    }

    /// Slide the snake one cell along its heading. With `grow` the tail
    /// stays put and the snake gains a segment.
    pub fn advance(&mut self, grow: bool) {
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);

        if !grow {
            self.body.pop_back();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Why a tick ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// The candidate head cell left the play field.
    Wall,
    /// The candidate head cell landed on the snake itself.
    SelfHit,
}

/// Everything one snake session owns.
///
/// Built whole at scene start and replaced whole on restart; only the engine
/// mutates it in between.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    /// Current milliseconds between ticks; shrinks as food is eaten.
    pub move_delay_ms: u64,
    /// One-way flag: false until a wall or self collision, then true until
    /// a restart replaces the whole state.
    pub game_over: bool,
    pub ticks: u32,
}

impl GameState {
    pub fn new(snake: Snake, food: Position, config: &GameConfig) -> Self {
        Self {
            snake,
            food,
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            score: 0,
            move_delay_ms: config.start_delay_ms,
            game_over: false,
            ticks: 0,
        }
    }

    /// True if `cell` lies inside the `[0, w) x [0, h)` play field.
    pub fn in_bounds(&self, cell: Position) -> bool {
        cell.x >= 0
            && cell.x < self.grid_width as i32
            && cell.y >= 0
            && cell.y < self.grid_height as i32
    }

    /// Current tick delay as a `Duration`, for the scene's move timer.
    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }
}
