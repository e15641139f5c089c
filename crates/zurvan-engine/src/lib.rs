//! Zurvan engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the clock
//! application layer: winit window/event loop, wgpu device and surface
//! management, a scene draw stream, shape renderers, and the periodic tick
//! scheduler.

pub mod core;
pub mod device;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
