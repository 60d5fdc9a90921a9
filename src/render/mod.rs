//! Rendering: output node primitive, label synthesis, composite renderer.

pub mod label;
pub mod node;
pub mod renderer;

pub use node::{build, Node};
pub use renderer::{CompositeRenderer, RenderOptions};
