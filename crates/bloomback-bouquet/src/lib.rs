//! Procedural bouquet animation.
//!
//! Seven flowers grow out of a pot on a 120x140 raster over a 500-frame
//! one-shot run: stems rise, leaves fade in, and each flower blooms through
//! three visual stages on its own delay. Rendering is a pure function of the
//! frame number, so any two renders of the same frame are pixel-identical.

pub mod flowers;
pub mod render;
pub mod surface;

pub use render::{HEIGHT, TOTAL_FRAMES, WIDTH, render_frame};
pub use surface::{Rgb, Surface};
