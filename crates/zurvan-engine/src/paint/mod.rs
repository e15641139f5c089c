//! Paint model shared between the scene and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//!
//! Every fill in this engine is a solid color; geometry types remain in
//! `coords`.

mod color;

pub use color::Color;
