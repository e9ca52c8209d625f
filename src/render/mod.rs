//! Rendering primitives.

pub mod frame;
pub mod surface;

pub use frame::Frame;
pub use surface::RenderSurface;
