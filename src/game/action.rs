/// Heading of the snake on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The direct reverse of this heading.
    pub fn reverse(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True if turning to `other` would flip the snake 180 degrees.
    pub fn is_reverse_of(&self, other: Direction) -> bool {
        self.reverse() == other
    }

    /// One-cell step (dx, dy) for this heading. The grid origin is the
    /// top-left corner, so `Up` decreases y.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Input delivered to the engine for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Request a heading change for this tick.
    Turn(Direction),
    /// Keep the current heading.
    Continue,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Turn(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_pairs() {
        assert_eq!(Direction::Up.reverse(), Direction::Down);
        assert_eq!(Direction::Down.reverse(), Direction::Up);
        assert_eq!(Direction::Left.reverse(), Direction::Right);
        assert_eq!(Direction::Right.reverse(), Direction::Left);
    }

    #[test]
    fn test_is_reverse_of() {
        assert!(Direction::Up.is_reverse_of(Direction::Down));
        assert!(Direction::Left.is_reverse_of(Direction::Right));

        assert!(!Direction::Up.is_reverse_of(Direction::Up));
        assert!(!Direction::Up.is_reverse_of(Direction::Left));
        assert!(!Direction::Up.is_reverse_of(Direction::Right));
    }

    #[test]
    fn test_delta_steps_one_cell() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_direction_into_action() {
        let action: Action = Direction::Left.into();
        assert_eq!(action, Action::Turn(Direction::Left));
    }
}
