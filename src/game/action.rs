use crate::engine::{CELL_SIZE, Key, Position};

/// Direction a snake part can move, numbered clockwise from Up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up = 0,
    #[default]
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    pub fn reverse(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.reverse() == other
    }

    /// Returns the one-cell delta (dx, dy) in pixels
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -CELL_SIZE),
            Direction::Right => (CELL_SIZE, 0),
            Direction::Down => (0, CELL_SIZE),
            Direction::Left => (-CELL_SIZE, 0),
        }
    }

    /// Position one cell away from `from` in this direction
    pub fn step_from(&self, from: Position) -> Position {
        let (dx, dy) = self.delta();
        from.moved_by(dx, dy)
    }

    /// Key that requests this direction
    pub fn key(&self) -> Key {
        match self {
            Direction::Up => Key::ArrowUp,
            Direction::Right => Key::ArrowRight,
            Direction::Down => Key::ArrowDown,
            Direction::Left => Key::ArrowLeft,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::Up),
            1 => Ok(Direction::Right),
            2 => Ok(Direction::Down),
            3 => Ok(Direction::Left),
            other => Err(other),
        }
    }
}
