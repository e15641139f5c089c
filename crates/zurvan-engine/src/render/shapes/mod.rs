//! Shape renderers, one per `DrawCmd` variant.

mod common;

pub mod circle;
pub mod rect;

pub use circle::CircleRenderer;
pub use rect::RectRenderer;
