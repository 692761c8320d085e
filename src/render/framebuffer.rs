use crate::engine::{CELL_SIZE, CanvasBounds, Color, Font, Region, Surface};

/// Text drawn onto the framebuffer, kept as-is rather than rasterized
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Left edge, in pixels
    pub x: i32,
    /// Baseline, in pixels
    pub y: i32,
    pub font: Font,
    pub color: Color,
}

impl TextRun {
    /// Approximate top edge of the glyphs
    pub fn top(&self) -> i32 {
        self.y - self.font.size
    }
}

/// In-memory bitmap canvas
#[derive(Debug, Clone)]
pub struct Framebuffer {
    bounds: CanvasBounds,
    background: Color,
    pixels: Vec<Color>,
    text: Vec<TextRun>,
}

impl Framebuffer {
    pub fn new(bounds: CanvasBounds) -> Self {
        let len = bounds.width.max(0) as usize * bounds.height.max(0) as usize;
        Self {
            bounds,
            background: Color::BLACK,
            pixels: vec![Color::BLACK; len],
            text: Vec::new(),
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if !self.bounds.contains(crate::engine::Position::new(x, y)) {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Color at the center of grid cell `(col, row)`
    pub fn cell_color(&self, col: i32, row: i32) -> Color {
        let half = CELL_SIZE / 2;
        self.pixel(col * CELL_SIZE + half, row * CELL_SIZE + half)
            .unwrap_or(self.background)
    }

    pub fn text_runs(&self) -> &[TextRun] {
        &self.text
    }

    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.bounds.width as usize + x as usize
    }

    /// Whether `region` spans the whole canvas
    fn covers(&self, region: Region) -> bool {
        region.x0 <= 0
            && region.y0 <= 0
            && region.x1 >= self.bounds.width
            && region.y1 >= self.bounds.height
    }

    /// Fill `[x0, x1) x [y0, y1)`, clipped to the canvas
    fn fill_span(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (x0, x1) = (x0.max(0), x1.min(self.bounds.width));
        let (y0, y1) = (y0.max(0), y1.min(self.bounds.height));

        for y in y0..y1 {
            let row = self.index(0, y);
            for x in x0..x1 {
                self.pixels[row + x as usize] = color;
            }
        }
    }
}

impl Surface for Framebuffer {
    fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    fn clear(&mut self, region: Region) {
        let background = self.background;
        self.fill_span(region.x0, region.y0, region.x1, region.y1, background);
        // text anchored off the canvas still goes on a full clear
        if self.covers(region) {
            self.text.clear();
            return;
        }
        self.text.retain(|run| {
            !region.contains(crate::engine::Position::new(run.x, run.top().max(0)))
        });
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.fill_span(x, y, x + width, y + height, color);
    }

    fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        line_width: i32,
        color: Color,
    ) {
        if line_width <= 0 {
            return;
        }
        // the line is centered on the rectangle's edge
        let outer = line_width / 2;
        let inner = line_width - outer;
        let (left, right) = (x - outer, x + width + inner);
        let (top, bottom) = (y - outer, y + height + inner);

        self.fill_span(left, top, right, y + inner, color);
        self.fill_span(left, y + height - outer, right, bottom, color);
        self.fill_span(left, y + inner, x + inner, y + height - outer, color);
        self.fill_span(x + width - outer, y + inner, right, y + height - outer, color);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: &Font, color: Color) {
        self.text.push(TextRun {
            text: text.to_string(),
            x,
            y,
            font: font.clone(),
            color,
        });
    }
}
