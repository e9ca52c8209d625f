//! Core interfaces and types.

pub mod component;
pub mod cursor;
pub mod input_event;
pub mod output;
pub mod terminal;
