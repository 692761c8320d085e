use crate::engine::{Behavior, EntityId, FrameContext, Scene};

use super::fruit::Fruit;
use super::snake::{SnakeHead, TailPiece};

/// Behavior of every entity in a Snake scene
#[derive(Debug, Clone, PartialEq)]
pub enum Actor {
    Head(SnakeHead),
    Tail(TailPiece),
    Fruit(Fruit),
}

impl Actor {
    pub fn as_head(&self) -> Option<&SnakeHead> {
        match self {
            Actor::Head(head) => Some(head),
            _ => None,
        }
    }

    pub fn as_head_mut(&mut self) -> Option<&mut SnakeHead> {
        match self {
            Actor::Head(head) => Some(head),
            _ => None,
        }
    }

    pub fn as_tail(&self) -> Option<&TailPiece> {
        match self {
            Actor::Tail(piece) => Some(piece),
            _ => None,
        }
    }

    pub fn as_tail_mut(&mut self) -> Option<&mut TailPiece> {
        match self {
            Actor::Tail(piece) => Some(piece),
            _ => None,
        }
    }
}

impl Behavior for Actor {
    fn tick(&mut self, this: EntityId, scene: &mut Scene<Self>, ctx: &mut FrameContext<'_>) {
        // tail pieces are moved by their head, fruit only reacts to collisions
        if let Actor::Head(head) = self {
            head.tick(this, scene, ctx);
        }
    }

    fn on_collision_enter(
        &mut self,
        this: EntityId,
        other: EntityId,
        scene: &mut Scene<Self>,
        ctx: &mut FrameContext<'_>,
    ) {
        match self {
            Actor::Head(head) => head.on_collision_enter(this, other, scene, ctx),
            Actor::Fruit(fruit) => fruit.on_collision_enter(this, other, scene, ctx),
            Actor::Tail(_) => {}
        }
    }
}
