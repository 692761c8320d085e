//! Canvas Snake - a small tick-based scene engine and a Snake game built on it
//!
//! This library provides:
//! - A 2D scene engine with sprites, box colliders and text overlays (engine module)
//! - The Snake game rules: head, tail pieces and fruit (game module)
//! - An in-memory canvas and terminal rendering (render module)
//! - Keyboard event mapping (input module)
//! - Session statistics (metrics module)
//! - Interactive terminal play (modes module)

pub mod engine;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
