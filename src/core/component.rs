//! Renderable and Component traits.

use crate::core::input_event::Key;

/// Anything that can draw itself onto its render surface.
pub trait Renderable {
    fn render(&mut self);
}

/// Interactive widget: consumes key events and re-renders itself.
pub trait Component: Renderable {
    /// Sole ingress for input. `raw` is what the terminal sent, `key` its decoding.
    fn on_key_input(&mut self, raw: &str, key: &Key);
}
