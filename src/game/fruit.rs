use rand::Rng;
use tracing::debug;

use crate::engine::{
    BoundingBox, CELL_SIZE, CanvasBounds, Color, Entity, EntityId, FrameContext, Position, Scene,
    Sprite,
};

use super::actor::Actor;
use super::snake::SNAKE;

pub const FRUIT: &str = "fruit";

/// Food for the snake. Moves away from anything else it lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fruit;

impl Fruit {
    pub fn entity(at: Position) -> Entity<Actor> {
        Entity::new(FRUIT, Actor::Fruit(Fruit))
            .at(at)
            .with_sprite(Sprite::filled(CELL_SIZE, Color::GREEN))
            .with_collider(Some(BoundingBox::new(CELL_SIZE, CELL_SIZE)))
    }

    pub fn on_collision_enter(
        &mut self,
        this: EntityId,
        other: EntityId,
        scene: &mut Scene<Actor>,
        ctx: &mut FrameContext<'_>,
    ) {
        if scene.get(other).map_or(true, |e| e.name == SNAKE) {
            return;
        }

        let to = random_cell(ctx.bounds, ctx.rng);
        if let Some(fruit) = scene.get_mut(this) {
            debug!(x = to.x, y = to.y, "fruit relocated");
            fruit.position = to;
        }
    }
}

/// Top-left corner of a uniformly chosen grid cell
pub fn random_cell<R: Rng + ?Sized>(bounds: CanvasBounds, rng: &mut R) -> Position {
    let col = rng.gen_range(0..bounds.columns().max(1));
    let row = rng.gen_range(0..bounds.rows().max(1));
    Position::from_cell(col, row)
}

/// Add a fruit at a random cell
pub fn spawn_fruit<R: Rng + ?Sized>(
    scene: &mut Scene<Actor>,
    bounds: CanvasBounds,
    rng: &mut R,
) -> EntityId {
    scene.add(Fruit::entity(random_cell(bounds, rng)))
}
