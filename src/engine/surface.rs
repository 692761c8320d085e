//! Abstract 2D drawing surface consumed by the scene

use super::geometry::{CanvasBounds, Region};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// CSS "green", which is half intensity
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const GREY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Font used for text drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    /// Glyph height in points (treated as pixels by raster surfaces)
    pub size: i32,
    pub family: &'static str,
    pub unit: FontUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontUnit {
    Points,
    Pixels,
}

impl Font {
    pub fn points(size: i32, family: &'static str) -> Self {
        Self {
            size,
            family,
            unit: FontUnit::Points,
        }
    }

    pub fn pixels(size: i32, family: &'static str) -> Self {
        Self {
            size,
            family,
            unit: FontUnit::Pixels,
        }
    }

    /// CSS-style description, e.g. `20pt Calibri`
    pub fn describe(&self) -> String {
        let unit = match self.unit {
            FontUnit::Points => "pt",
            FontUnit::Pixels => "px",
        };
        format!("{}{} {}", self.size, unit, self.family)
    }
}

/// Drawing capabilities the scene needs from its host.
///
/// Coordinates are canvas pixels with the origin in the top-left corner.
/// Text is positioned by its baseline, like an HTML canvas.
pub trait Surface {
    fn bounds(&self) -> CanvasBounds;

    fn clear(&mut self, region: Region);

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        line_width: i32,
        color: Color,
    );

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: &Font, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_description() {
        assert_eq!(Font::points(20, "Calibri").describe(), "20pt Calibri");
        assert_eq!(Font::pixels(30, "Arial").describe(), "30px Arial");
    }
}
