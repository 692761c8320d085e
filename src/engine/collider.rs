use super::geometry::{Position, Region};

/// Half the side of the square searched for collision candidates
pub const SEARCH_RADIUS: i32 = 100;

/// Axis-aligned box attached to an entity at a fixed offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Offset from the owner's position
    pub xa: i32,
    pub ya: i32,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            xa: 0,
            ya: 0,
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub fn with_offset(mut self, xa: i32, ya: i32) -> Self {
        self.xa = xa;
        self.ya = ya;
        self
    }

    /// Reposition the box onto its owner
    pub fn follow(&mut self, owner: Position) {
        self.x = owner.x + self.xa;
        self.y = owner.y + self.ya;
    }

    /// Strict overlap test: boxes sharing only an edge do not collide
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Region scanned for candidates, centered on the box origin
    pub fn search_window(&self) -> Region {
        Region::centered_on(Position::new(self.x, self.y), SEARCH_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: i32, y: i32, width: i32, height: i32) -> BoundingBox {
        let mut bbox = BoundingBox::new(width, height);
        bbox.follow(Position::new(x, y));
        bbox
    }

    #[test]
    fn test_edge_touching_does_not_collide() {
        let a = boxed(0, 0, 25, 25);
        let b = boxed(25, 0, 25, 25);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        let below = boxed(0, 25, 25, 25);
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_one_unit_overlap_collides() {
        let a = boxed(0, 0, 25, 25);
        let b = boxed(24, 0, 25, 25);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_follow_applies_offset() {
        let mut bbox = BoundingBox::new(5, 5).with_offset(10, -5);
        bbox.follow(Position::new(100, 50));
        assert_eq!((bbox.x, bbox.y), (110, 45));
    }

    #[test]
    fn test_search_window() {
        let bbox = boxed(300, 200, 25, 25);
        assert_eq!(bbox.search_window(), Region::new(200, 100, 400, 300));
    }
}
