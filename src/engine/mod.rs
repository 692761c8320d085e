//! Minimal 2D scene engine
//!
//! Entities with optional sprites and box colliders live in a [`Scene`] that is
//! ticked and rendered once per frame by an [`Engine`]. Drawing and keyboard
//! access go through the [`Surface`] and [`InputSource`] traits, so this module
//! has no terminal or windowing dependencies.

pub mod collider;
pub mod driver;
pub mod entity;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod sprite;
pub mod surface;
pub mod ui;

pub use collider::BoundingBox;
pub use driver::{DEFAULT_FPS, Engine};
pub use entity::{Entity, EntityId};
pub use geometry::{CELL_SIZE, CanvasBounds, Position, Region};
pub use input::{InputSource, Key, KeyboardState};
pub use scene::{Behavior, FrameContext, Scene};
pub use sprite::Sprite;
pub use surface::{Color, Font, Surface};
pub use ui::{Overlay, UiText};
