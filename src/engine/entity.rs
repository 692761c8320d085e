use super::collider::BoundingBox;
use super::geometry::Position;
use super::sprite::Sprite;
use super::surface::Surface;
use super::ui::Overlay;

/// Side of the collider given to entities that do not pick their own
pub const DEFAULT_COLLIDER_SIZE: i32 = 5;

/// Non-owning handle to an entity in a [`Scene`](super::scene::Scene).
///
/// Ids are never reused, so a handle to a removed entity simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub(crate) u64);

/// A game object: a tagged position with optional visuals and collider.
///
/// Per-type behavior lives in `behavior`, dispatched by the scene.
#[derive(Debug)]
pub struct Entity<B> {
    pub(crate) id: Option<EntityId>,
    /// Type tag, shared by every entity of the same kind
    pub name: &'static str,
    pub position: Position,
    pub sprite: Option<Sprite>,
    pub collider: Option<BoundingBox>,
    pub overlay: Option<Overlay>,
    destroyed: bool,
    pub(crate) behavior: Option<B>,
}

impl<B> Entity<B> {
    pub fn new(name: &'static str, behavior: B) -> Self {
        Self {
            id: None,
            name,
            position: Position::default(),
            sprite: None,
            collider: Some(BoundingBox::new(DEFAULT_COLLIDER_SIZE, DEFAULT_COLLIDER_SIZE)),
            overlay: None,
            destroyed: false,
            behavior: Some(behavior),
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_sprite(mut self, sprite: Sprite) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn with_collider(mut self, collider: Option<BoundingBox>) -> Self {
        self.collider = collider;
        self
    }

    pub fn with_overlay(mut self, overlay: Overlay) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// Handle assigned when the entity was added to a scene
    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Mark for removal at the end of the current scene tick. One-way.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn behavior(&self) -> Option<&B> {
        self.behavior.as_ref()
    }

    pub fn behavior_mut(&mut self) -> Option<&mut B> {
        self.behavior.as_mut()
    }

    /// Sprite at the current position, then the overlay on top
    pub fn render(&self, surface: &mut dyn Surface) {
        if let Some(sprite) = &self.sprite {
            sprite.render(self.position, surface);
        }
        if let Some(overlay) = &self.overlay {
            overlay.render(surface);
        }
    }
}
