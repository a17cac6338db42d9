//! Transient tools
//!
//! Tools perform a side effect on shared state rather than owning drawn
//! geometry: Erase removes selected shapes from the registry, Zoom adjusts
//! the viewport rectangle. Each holds its own memento for undo/redo.

mod erase;
mod zoom;

pub use erase::*;
pub use zoom::*;
