/// Greeting domain: input collection and message rendering.
pub mod input;
pub mod render;

pub use input::InputSource;
pub use render::render;
