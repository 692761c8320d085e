/// Side length of one grid cell, in pixels
pub const CELL_SIZE: i32 = 25;

/// A position on the canvas, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position of the top-left corner of grid cell `(col, row)`
    pub fn from_cell(col: i32, row: i32) -> Self {
        Self::new(col * CELL_SIZE, row * CELL_SIZE)
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether both coordinates sit on a cell boundary
    pub fn is_cell_aligned(&self) -> bool {
        self.x % CELL_SIZE == 0 && self.y % CELL_SIZE == 0
    }
}

/// Size of the drawing canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasBounds {
    pub width: i32,
    pub height: i32,
}

impl CanvasBounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Number of whole cells across
    pub fn columns(&self) -> i32 {
        self.width / CELL_SIZE
    }

    /// Number of whole cells down
    pub fn rows(&self) -> i32 {
        self.height / CELL_SIZE
    }

    /// Check if a position is on the canvas
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// The whole canvas as a region
    pub fn region(&self) -> Region {
        Region::new(0, 0, self.width, self.height)
    }
}

/// Half-open rectangle `[x0, x1) x [y0, y1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Region {
    /// Build a region from two corners, in any order
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Region extending `radius` pixels on every side of `center`
    pub fn centered_on(center: Position, radius: i32) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x0 && pos.x < self.x1 && pos.y >= self.y0 && pos.y < self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(100, 100);
        assert_eq!(pos.moved_by(CELL_SIZE, 0), Position::new(125, 100));
        assert_eq!(pos.moved_by(0, -CELL_SIZE), Position::new(100, 75));
        assert_eq!(Position::from_cell(3, 2), Position::new(75, 50));
    }

    #[test]
    fn test_cell_alignment() {
        assert!(Position::new(0, 575).is_cell_aligned());
        assert!(!Position::new(12, 0).is_cell_aligned());
    }

    #[test]
    fn test_bounds_checking() {
        let bounds = CanvasBounds::new(800, 600);

        assert_eq!(bounds.columns(), 32);
        assert_eq!(bounds.rows(), 24);
        assert!(bounds.contains(Position::new(0, 0)));
        assert!(bounds.contains(Position::new(775, 575)));
        assert!(!bounds.contains(Position::new(-25, 0)));
        assert!(!bounds.contains(Position::new(800, 0)));
        assert!(!bounds.contains(Position::new(0, 600)));
    }

    #[test]
    fn test_region_is_half_open() {
        let region = Region::centered_on(Position::new(100, 100), 100);

        assert_eq!(region.width(), 200);
        assert_eq!(region.height(), 200);
        assert!(region.contains(Position::new(0, 0)));
        assert!(region.contains(Position::new(199, 199)));
        assert!(!region.contains(Position::new(200, 100)));
        assert!(!region.contains(Position::new(100, 200)));
    }

    #[test]
    fn test_region_normalizes_corners() {
        let region = Region::new(50, 0, 0, 50);
        assert_eq!(region, Region::new(0, 0, 50, 50));
    }
}
