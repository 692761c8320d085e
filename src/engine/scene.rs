use rand::rngs::StdRng;
use tracing::trace;

use super::entity::{Entity, EntityId};
use super::geometry::{CanvasBounds, Region};
use super::input::InputSource;
use super::surface::Surface;

/// Everything a behavior may consult during one frame besides the scene itself
pub struct FrameContext<'a> {
    pub input: &'a dyn InputSource,
    pub bounds: CanvasBounds,
    pub rng: &'a mut StdRng,
}

/// Per-type entity logic, dispatched by the scene.
///
/// While a hook runs, the entity's own behavior is detached from the scene:
/// `scene.behavior(this)` returns `None`, every other part of the entity
/// (position, collider, overlay) stays reachable through `scene.get_mut(this)`.
pub trait Behavior: Sized {
    /// Called once per tick, before the entity's collider is refreshed
    fn tick(&mut self, _this: EntityId, _scene: &mut Scene<Self>, _ctx: &mut FrameContext<'_>) {}

    /// Called once per overlapping entity found during the collider refresh
    fn on_collision_enter(
        &mut self,
        _this: EntityId,
        _other: EntityId,
        _scene: &mut Scene<Self>,
        _ctx: &mut FrameContext<'_>,
    ) {
    }
}

impl Behavior for () {}

/// Ordered set of live entities
#[derive(Debug)]
pub struct Scene<B> {
    entities: Vec<Entity<B>>,
    next_id: u64,
}

impl<B> Default for Scene<B> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 0,
        }
    }
}

impl<B: Behavior> Scene<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity and hand back its handle.
    ///
    /// Entities added while a tick is running join the pass on the next tick.
    pub fn add(&mut self, mut entity: Entity<B>) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;

        entity.id = Some(id);
        let position = entity.position;
        if let Some(collider) = entity.collider.as_mut() {
            collider.follow(position);
        }
        self.entities.push(entity);
        id
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entity_at(&self, index: usize) -> Option<&Entity<B>> {
        self.entities.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity<B>> {
        self.entities.iter()
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        // ids are handed out in insertion order, and removal keeps that order
        self.entities.binary_search_by_key(&Some(id), |e| e.id).ok()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity<B>> {
        self.index_of(id).map(|i| &self.entities[i])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity<B>> {
        self.index_of(id).map(move |i| &mut self.entities[i])
    }

    pub fn behavior(&self, id: EntityId) -> Option<&B> {
        self.get(id).and_then(Entity::behavior)
    }

    pub fn behavior_mut(&mut self, id: EntityId) -> Option<&mut B> {
        self.get_mut(id).and_then(Entity::behavior_mut)
    }

    /// Mark an entity for removal at the end of the current tick
    pub fn destroy(&mut self, id: EntityId) {
        if let Some(entity) = self.get_mut(id) {
            entity.destroy();
        }
    }

    /// Live entities positioned inside `region`.
    ///
    /// Exclusion is by type tag: every entity sharing the name of `excluding`
    /// is left out, not only `excluding` itself.
    pub fn query(&self, region: Region, excluding: EntityId) -> Vec<EntityId> {
        let excluded_name = self.get(excluding).map(|e| e.name);

        self.entities
            .iter()
            .filter(|e| !e.is_destroyed())
            .filter(|e| Some(e.name) != excluded_name)
            .filter(|e| region.contains(e.position))
            .filter_map(|e| e.id)
            .collect()
    }

    /// Run every live entity's update hook then its collider refresh, in
    /// insertion order, then drop everything marked destroyed.
    pub fn tick(&mut self, ctx: &mut FrameContext<'_>) {
        let pass: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|e| !e.is_destroyed())
            .filter_map(|e| e.id)
            .collect();

        for id in pass {
            if self.is_destroyed(id) {
                continue;
            }
            self.dispatch_tick(id, ctx);

            if self.is_destroyed(id) {
                continue;
            }
            self.refresh_collider(id, ctx);
        }

        let before = self.entities.len();
        self.entities.retain(|e| !e.is_destroyed());
        let removed = before - self.entities.len();
        if removed > 0 {
            trace!(removed, remaining = self.entities.len(), "purged destroyed entities");
        }
    }

    /// Draw every entity, later additions on top
    pub fn render(&self, surface: &mut dyn Surface) {
        for entity in &self.entities {
            entity.render(surface);
        }
    }

    fn is_destroyed(&self, id: EntityId) -> bool {
        self.get(id).map_or(true, Entity::is_destroyed)
    }

    fn dispatch_tick(&mut self, id: EntityId, ctx: &mut FrameContext<'_>) {
        let Some(mut behavior) = self.get_mut(id).and_then(|e| e.behavior.take()) else {
            return;
        };
        behavior.tick(id, self, ctx);
        if let Some(entity) = self.get_mut(id) {
            entity.behavior = Some(behavior);
        }
    }

    fn dispatch_collision(&mut self, id: EntityId, other: EntityId, ctx: &mut FrameContext<'_>) {
        let Some(mut behavior) = self.get_mut(id).and_then(|e| e.behavior.take()) else {
            return;
        };
        behavior.on_collision_enter(id, other, self, ctx);
        if let Some(entity) = self.get_mut(id) {
            entity.behavior = Some(behavior);
        }
    }

    fn refresh_collider(&mut self, id: EntityId, ctx: &mut FrameContext<'_>) {
        let Some(entity) = self.get_mut(id) else {
            return;
        };
        let position = entity.position;
        let Some(collider) = entity.collider.as_mut() else {
            return;
        };
        collider.follow(position);
        let bbox = *collider;

        let hits: Vec<EntityId> = self
            .query(bbox.search_window(), id)
            .into_iter()
            .filter(|other| {
                self.get(*other)
                    .and_then(|e| e.collider.as_ref())
                    .is_some_and(|c| bbox.overlaps(c))
            })
            .collect();

        for other in hits {
            self.dispatch_collision(id, other, ctx);
        }
    }
}
