//! Text overlays drawn on top of an entity

use super::surface::{Color, Font, Surface};

pub const UI_FONT_FAMILY: &str = "Calibri";

/// A line of text positioned relative to its overlay
#[derive(Debug, Clone, PartialEq)]
pub struct UiText {
    pub x: i32,
    pub y: i32,
    pub text: String,
    /// Point size, also the distance from the top of the text to its baseline
    pub size: i32,
    pub color: Color,
}

impl UiText {
    pub fn new(text: impl Into<String>, size: i32, color: Color) -> Self {
        Self {
            x: 0,
            y: 0,
            text: text.into(),
            size,
            color,
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    fn render(&self, origin_x: i32, origin_y: i32, surface: &mut dyn Surface) {
        let font = Font::points(self.size, UI_FONT_FAMILY);
        surface.draw_text(
            &self.text,
            origin_x + self.x,
            origin_y + self.y + self.size,
            &font,
            self.color,
        );
    }
}

/// Ordered collection of text components sharing an origin
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub name: &'static str,
    pub x: i32,
    pub y: i32,
    components: Vec<UiText>,
}

impl Overlay {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Append a component, returning its index
    pub fn add(&mut self, component: UiText) -> usize {
        self.components.push(component);
        self.components.len() - 1
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&UiText> {
        self.components.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut UiText> {
        self.components.get_mut(index)
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        for component in &self.components {
            component.render(self.x, self.y, surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::geometry::CanvasBounds;
    use crate::render::Framebuffer;

    #[test]
    fn test_text_is_drawn_at_baseline() {
        let mut overlay = Overlay::new("score_display");
        overlay.x = 10;
        overlay.add(UiText::new("Score: 0", 20, Color::WHITE).at(5, 5));

        let mut surface = Framebuffer::new(CanvasBounds::new(800, 600));
        overlay.render(&mut surface);

        let run = &surface.text_runs()[0];
        assert_eq!(run.text, "Score: 0");
        assert_eq!((run.x, run.y), (15, 25));
        assert_eq!(run.font.describe(), "20pt Calibri");
    }

    #[test]
    fn test_components_keep_order() {
        let mut overlay = Overlay::new("hud");
        let first = overlay.add(UiText::new("a", 10, Color::WHITE));
        let second = overlay.add(UiText::new("b", 10, Color::WHITE));

        assert_eq!((first, second), (0, 1));
        if let Some(text) = overlay.get_mut(first) {
            text.text = "c".to_string();
        }
        assert_eq!(overlay.get(0).map(|t| t.text.as_str()), Some("c"));
        assert_eq!(overlay.len(), 2);
    }
}
