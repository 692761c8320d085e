use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::engine::{CanvasBounds, Engine, EntityId, InputSource, Position, Scene, Surface};

use super::actor::Actor;
use super::config::GameConfig;
use super::fruit::spawn_fruit;
use super::snake::SnakeHead;

/// A game of Snake: the engine plus a handle on the snake's head
pub struct SnakeGame {
    config: GameConfig,
    engine: Engine<Actor>,
    head: EntityId,
}

impl SnakeGame {
    /// Create a new game with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut engine = Engine::new(config.bounds(), config.fps, rng);
        let head = Self::populate(&mut engine, &config);

        Self {
            config,
            engine,
            head,
        }
    }

    /// Replace the scene with a fresh snake and fruit
    pub fn reset(&mut self) {
        self.head = Self::populate(&mut self.engine, &self.config);
    }

    fn populate(engine: &mut Engine<Actor>, config: &GameConfig) -> EntityId {
        let bounds = engine.bounds();
        let mut scene = Scene::new();

        let head = SnakeHead::spawn(&mut scene, Position::new(0, 0), config.initial_delay);
        spawn_fruit(&mut scene, bounds, engine.rng_mut());
        engine.set_scene(scene);

        info!(width = bounds.width, height = bounds.height, "new game");
        head
    }

    /// Advance and draw one frame
    pub fn frame(&mut self, input: &dyn InputSource, surface: &mut dyn Surface) {
        self.engine.frame(input, surface);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn bounds(&self) -> CanvasBounds {
        self.engine.bounds()
    }

    pub fn frame_interval(&self) -> Duration {
        self.engine.frame_interval()
    }

    pub fn frames(&self) -> u64 {
        self.engine.frames()
    }

    pub fn scene(&self) -> Option<&Scene<Actor>> {
        self.engine.scene()
    }

    pub fn head_id(&self) -> EntityId {
        self.head
    }

    fn head(&self) -> Option<&SnakeHead> {
        self.scene()?.behavior(self.head)?.as_head()
    }

    pub fn head_position(&self) -> Option<Position> {
        self.scene()?.get(self.head).map(|e| e.position)
    }

    pub fn score(&self) -> u32 {
        self.head().map_or(0, SnakeHead::score)
    }

    pub fn tail_len(&self) -> usize {
        self.head().map_or(0, SnakeHead::tail_len)
    }

    pub fn delay(&self) -> u32 {
        self.head().map_or(0, SnakeHead::delay)
    }

    pub fn is_game_over(&self) -> bool {
        self.head().is_some_and(SnakeHead::is_game_over)
    }
}
