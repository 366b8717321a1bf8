//! Deterministic planted-tree locations.
//!
//! Every bloom stores a seed in [0,1) assigned once at creation. The seed
//! alone decides which reforestation site the tree belongs to and where
//! inside that site it stands, so the same share link always shows the same
//! spot on the map. Nothing here is randomized on read.

pub mod location;
pub mod sites;

pub use location::{ForestError, PlantedLocation, assign};
pub use sites::{SITES, Site};
