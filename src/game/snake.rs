//! Snake head and tail pieces
//!
//! The head reads the keyboard every tick but only steps one cell every
//! `delay` ticks. On a step every tail piece takes the direction its parent
//! moved on the previous step, which makes the chain follow the head's path.
//! Fresh pieces wait out an `idle` countdown at the spot where the fruit was
//! eaten so they join the end of the chain in sync.

use tracing::{debug, info, trace};

use crate::engine::{
    BoundingBox, CELL_SIZE, CanvasBounds, Color, Entity, EntityId, FrameContext, InputSource,
    Overlay, Position, Scene, Sprite, UiText,
};

use super::action::Direction;
use super::actor::Actor;
use super::fruit::{FRUIT, spawn_fruit};

pub const SNAKE: &str = "snake";
pub const TAIL_PIECE: &str = "tail_piece";

/// Step delay of a snake with no tail
pub const BASE_DELAY: u32 = 30;
/// Fastest the snake can get
pub const MIN_DELAY: u32 = 5;

const SCORE_TEXT_SIZE: i32 = 20;
const GAME_OVER_TEXT_SIZE: i32 = 24;

/// Ticks between steps for a tail of `tail_len` pieces
pub fn delay_for(tail_len: usize) -> u32 {
    let slowdown = u32::try_from(tail_len / 2).unwrap_or(u32::MAX);
    BASE_DELAY.saturating_sub(slowdown).max(MIN_DELAY)
}

/// Top of a text line of `size`, moved up so its baseline stays on the canvas
fn fit_text(top: i32, size: i32, bounds: CanvasBounds) -> i32 {
    top.min(bounds.height - size).max(0)
}

fn part_sprite() -> Sprite {
    Sprite::filled(CELL_SIZE, Color::RED)
}

fn part_collider() -> Option<BoundingBox> {
    Some(BoundingBox::new(CELL_SIZE, CELL_SIZE))
}

/// One segment of the tail, following `parent` (the head or the previous piece)
#[derive(Debug, Clone, PartialEq)]
pub struct TailPiece {
    pub parent: EntityId,
    /// Steps left before the piece starts moving
    pub idle: u32,
    pub direction: Direction,
    pub last_direction: Direction,
}

impl TailPiece {
    pub fn new(parent: EntityId, idle: u32) -> Self {
        Self {
            parent,
            idle,
            direction: Direction::Right,
            last_direction: Direction::Right,
        }
    }

    pub fn entity(parent: EntityId, idle: u32, at: Position) -> Entity<Actor> {
        Entity::new(TAIL_PIECE, Actor::Tail(Self::new(parent, idle)))
            .at(at)
            .with_sprite(part_sprite())
            .with_collider(part_collider())
    }

    /// Whether the piece has finished its idle countdown
    pub fn is_active(&self) -> bool {
        self.idle == 0
    }

    /// Adopt the parent's previous direction; returns the direction to step
    /// in, or `None` while still idle
    pub fn follow(&mut self, parent_last: Direction) -> Option<Direction> {
        self.last_direction = self.direction;
        self.direction = parent_last;

        if self.idle > 0 {
            self.idle -= 1;
            None
        } else {
            Some(self.direction)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnakeHead {
    direction: Direction,
    last_direction: Direction,
    delay: u32,
    time: u64,
    tail: Vec<EntityId>,
    score: u32,
    paused_movement: bool,
    /// Index of the score line in the head's overlay
    score_text: usize,
}

impl SnakeHead {
    pub fn new(initial_delay: u32) -> Self {
        Self {
            direction: Direction::Right,
            last_direction: Direction::Right,
            delay: initial_delay.max(MIN_DELAY),
            time: 0,
            tail: Vec::new(),
            score: 0,
            paused_movement: false,
            score_text: 0,
        }
    }

    /// Add a head with its score display to the scene
    pub fn spawn(scene: &mut Scene<Actor>, at: Position, initial_delay: u32) -> EntityId {
        let mut head = Self::new(initial_delay);

        let mut overlay = Overlay::new("score_display");
        head.score_text =
            overlay.add(UiText::new("Score: 0", SCORE_TEXT_SIZE, Color::WHITE).at(5, 5));

        scene.add(
            Entity::new(SNAKE, Actor::Head(head))
                .at(at)
                .with_sprite(part_sprite())
                .with_collider(part_collider())
                .with_overlay(overlay),
        )
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tail(&self) -> &[EntityId] {
        &self.tail
    }

    pub fn tail_len(&self) -> usize {
        self.tail.len()
    }

    pub fn is_game_over(&self) -> bool {
        self.paused_movement
    }

    /// Turn, unless that would double back over the last step taken.
    ///
    /// Returns whether the request was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.last_direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Like [`request_direction`](Self::request_direction) with a raw code;
    /// unknown codes are ignored
    pub fn request_direction_code(&mut self, code: u8) -> bool {
        Direction::try_from(code).is_ok_and(|direction| self.request_direction(direction))
    }

    pub fn tick(&mut self, this: EntityId, scene: &mut Scene<Actor>, ctx: &mut FrameContext<'_>) {
        self.read_input(ctx.input);

        if !self.paused_movement {
            self.advance(this, scene, ctx.bounds);
        }
    }

    pub fn on_collision_enter(
        &mut self,
        this: EntityId,
        other: EntityId,
        scene: &mut Scene<Actor>,
        ctx: &mut FrameContext<'_>,
    ) {
        if self.paused_movement {
            return;
        }
        let Some(entity) = scene.get(other) else {
            return;
        };

        let name = entity.name;
        let active_piece = entity
            .behavior()
            .and_then(Actor::as_tail)
            .is_some_and(TailPiece::is_active);

        match name {
            FRUIT => self.eat(this, other, scene, ctx),
            TAIL_PIECE if active_piece => self.game_over(this, scene, ctx.bounds),
            _ => {}
        }
    }

    fn read_input(&mut self, input: &dyn InputSource) {
        // later checks win when several keys are held
        for direction in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            if input.is_key_pressed(direction.key()) {
                self.request_direction(direction);
            }
        }
    }

    fn advance(&mut self, this: EntityId, scene: &mut Scene<Actor>, bounds: CanvasBounds) {
        self.time += 1;
        if self.time % u64::from(self.delay) != 0 {
            return;
        }

        let Some(from) = scene.get(this).map(|e| e.position) else {
            return;
        };
        let to = self.direction.step_from(from);

        if !bounds.contains(to) {
            // the head stays where it was and the tail does not move
            self.game_over(this, scene, bounds);
            return;
        }

        if let Some(head) = scene.get_mut(this) {
            head.position = to;
        }
        self.move_tail(this, scene);

        self.last_direction = self.direction;
        self.delay = delay_for(self.tail.len());
        trace!(x = to.x, y = to.y, delay = self.delay, "snake stepped");
    }

    fn move_tail(&self, this: EntityId, scene: &mut Scene<Actor>) {
        for &piece_id in &self.tail {
            let Some(parent) = scene.behavior(piece_id).and_then(Actor::as_tail).map(|p| p.parent)
            else {
                continue;
            };

            // our own behavior is detached from the scene while we run
            let parent_last = if parent == this {
                Some(self.last_direction)
            } else {
                scene
                    .behavior(parent)
                    .and_then(Actor::as_tail)
                    .map(|p| p.last_direction)
            };
            let Some(parent_last) = parent_last else {
                continue;
            };

            let step = scene
                .behavior_mut(piece_id)
                .and_then(Actor::as_tail_mut)
                .and_then(|piece| piece.follow(parent_last));

            if let (Some(direction), Some(piece)) = (step, scene.get_mut(piece_id)) {
                piece.position = direction.step_from(piece.position);
            }
        }
    }

    fn eat(
        &mut self,
        this: EntityId,
        fruit: EntityId,
        scene: &mut Scene<Actor>,
        ctx: &mut FrameContext<'_>,
    ) {
        self.score += 1;
        let label = format!("Score: {}", self.score);
        if let Some(text) = scene
            .get_mut(this)
            .and_then(|e| e.overlay.as_mut())
            .and_then(|overlay| overlay.get_mut(self.score_text))
        {
            text.text = label;
        }

        self.add_tail_piece(this, scene);
        scene.destroy(fruit);
        spawn_fruit(scene, ctx.bounds, ctx.rng);
        self.delay = delay_for(self.tail.len());

        debug!(score = self.score, delay = self.delay, "fruit eaten");
    }

    /// Spawn a piece on the head, idle until the rest of the chain has passed
    fn add_tail_piece(&mut self, this: EntityId, scene: &mut Scene<Actor>) {
        let Some(at) = scene.get(this).map(|e| e.position) else {
            return;
        };
        let parent = self.tail.last().copied().unwrap_or(this);
        let idle = u32::try_from(self.tail.len() + 1).unwrap_or(u32::MAX);

        let piece = scene.add(TailPiece::entity(parent, idle, at));
        self.tail.push(piece);
    }

    /// Stop the snake for good and show the result.
    ///
    /// Terminal: later collisions are ignored, so fruit under the head is no
    /// longer eaten and the score stays final. The texts are kept on the canvas.
    fn game_over(&mut self, this: EntityId, scene: &mut Scene<Actor>, bounds: CanvasBounds) {
        if self.paused_movement {
            return;
        }
        self.paused_movement = true;

        if let Some(overlay) = scene.get_mut(this).and_then(|e| e.overlay.as_mut()) {
            overlay.add(
                UiText::new("Game Over", GAME_OVER_TEXT_SIZE, Color::WHITE).at(
                    bounds.width * 3 / 8,
                    fit_text(bounds.height / 3, GAME_OVER_TEXT_SIZE, bounds),
                ),
            );
            if let Some(score) = overlay.get_mut(self.score_text) {
                score.x = bounds.width * 2 / 5;
                score.y = fit_text(bounds.height / 3 + 30, SCORE_TEXT_SIZE, bounds);
            }
        }

        info!(score = self.score, tail = self.tail.len(), "game over");
    }
}
