//! UI module for unbored
//!
//! Rendering functions for the TUI: the top-level frame layout, the
//! suggestion and saved-entry cards, and the filter form overlay.

mod cards;
mod filters;
mod helpers;
mod render;

pub use render::render;
