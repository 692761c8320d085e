pub mod framebuffer;
pub mod renderer;

pub use framebuffer::{Framebuffer, TextRun};
pub use renderer::Renderer;
