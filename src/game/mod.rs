//! Snake built on the scene engine
//!
//! This module contains the game rules without any I/O or rendering dependencies
//! beyond the engine's abstract surface and input traits.

pub mod action;
pub mod actor;
pub mod config;
pub mod fruit;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use action::Direction;
pub use actor::Actor;
pub use config::GameConfig;
pub use fruit::{spawn_fruit, Fruit, FRUIT};
pub use session::SnakeGame;
pub use snake::{delay_for, SnakeHead, TailPiece, SNAKE, TAIL_PIECE};
