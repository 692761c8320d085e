use super::geometry::Position;
use super::surface::{Color, Surface};

/// Filled rectangle with an optional outline
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub width: i32,
    pub height: i32,
    pub color: Color,
    pub stroke_size: i32,
    pub stroke_color: Option<Color>,
}

impl Sprite {
    /// A plain filled square without an outline
    pub fn filled(size: i32, color: Color) -> Self {
        Self {
            width: size,
            height: size,
            color,
            stroke_size: 0,
            stroke_color: None,
        }
    }

    pub fn with_stroke(mut self, size: i32, color: Color) -> Self {
        self.stroke_size = size;
        self.stroke_color = Some(color);
        self
    }

    /// Outline first, then the fill over it
    pub fn render(&self, at: Position, surface: &mut dyn Surface) {
        if let (true, Some(stroke)) = (self.stroke_size > 0, self.stroke_color) {
            surface.stroke_rect(at.x, at.y, self.width, self.height, self.stroke_size, stroke);
        }
        surface.fill_rect(at.x, at.y, self.width, self.height, self.color);
    }
}
