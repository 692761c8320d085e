use std::time::Duration;

use rand::rngs::StdRng;

use super::geometry::CanvasBounds;
use super::input::InputSource;
use super::scene::{Behavior, FrameContext, Scene};
use super::surface::{Color, Font, Surface};

pub const DEFAULT_FPS: u32 = 60;

/// Holds the active scene plus the state shared by every frame.
///
/// The host calls [`Engine::frame`] at a fixed cadence; nothing here is global.
pub struct Engine<B> {
    scene: Option<Scene<B>>,
    bounds: CanvasBounds,
    fps: u32,
    rng: StdRng,
    frames: u64,
}

impl<B: Behavior> Engine<B> {
    pub fn new(bounds: CanvasBounds, fps: u32, rng: StdRng) -> Self {
        Self {
            scene: None,
            bounds,
            fps: fps.max(1),
            rng,
            frames: 0,
        }
    }

    pub fn set_scene(&mut self, scene: Scene<B>) {
        self.scene = Some(scene);
    }

    pub fn scene(&self) -> Option<&Scene<B>> {
        self.scene.as_ref()
    }

    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Frames driven so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps))
    }

    /// One full pass: clear the canvas, tick the scene, then draw it
    pub fn frame(&mut self, input: &dyn InputSource, surface: &mut dyn Surface) {
        surface.clear(self.bounds.region());
        self.frames += 1;

        if let Some(scene) = self.scene.as_mut() {
            let mut ctx = FrameContext {
                input,
                bounds: self.bounds,
                rng: &mut self.rng,
            };
            scene.tick(&mut ctx);
            scene.render(surface);
        }
    }

    /// Write a line of diagnostic text in the top-left corner
    pub fn debug(&self, text: &str, surface: &mut dyn Surface) {
        surface.draw_text(text, 10, 30, &Font::pixels(30, "Arial"), Color::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::entity::Entity;
    use crate::engine::input::KeyboardState;
    use crate::engine::sprite::Sprite;
    use crate::render::Framebuffer;
    use rand::SeedableRng;

    fn engine() -> Engine<()> {
        Engine::new(CanvasBounds::new(100, 100), 60, StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_frame_interval() {
        let engine = engine();
        let interval = engine.frame_interval();
        assert!(interval > Duration::from_millis(16) && interval < Duration::from_millis(17));
        assert_eq!(
            Engine::<()>::new(CanvasBounds::new(1, 1), 0, StdRng::seed_from_u64(1)).fps(),
            1
        );
    }

    #[test]
    fn test_frame_without_scene_only_clears() {
        let mut engine = engine();
        let mut surface = Framebuffer::new(CanvasBounds::new(100, 100));
        surface.fill_rect(0, 0, 100, 100, Color::RED);

        engine.frame(&KeyboardState::new(), &mut surface);

        assert_eq!(surface.pixel(50, 50), Some(Color::BLACK));
        assert_eq!(engine.frames(), 1);
    }

    #[test]
    fn test_frame_clears_then_renders() {
        let mut engine = engine();
        let mut scene = Scene::new();
        scene.add(Entity::new("block", ()).with_sprite(Sprite::filled(25, Color::GREEN)));
        engine.set_scene(scene);

        let mut surface = Framebuffer::new(CanvasBounds::new(100, 100));
        surface.fill_rect(50, 50, 10, 10, Color::RED);
        engine.frame(&KeyboardState::new(), &mut surface);

        assert_eq!(surface.pixel(0, 0), Some(Color::GREEN));
        assert_eq!(surface.pixel(55, 55), Some(Color::BLACK));
    }

    #[test]
    fn test_debug_text() {
        let engine = engine();
        let mut surface = Framebuffer::new(CanvasBounds::new(100, 100));
        engine.debug("fps", &mut surface);

        let run = &surface.text_runs()[0];
        assert_eq!((run.x, run.y), (10, 30));
        assert_eq!(run.font.describe(), "30px Arial");
    }
}
