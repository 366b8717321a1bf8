//! The fixed seven-flower palette: three tall back-row flowers, two in the
//! middle, two short ones in front. Positions and timings are hand-tuned;
//! tweak with the full 500-frame run in view.

use crate::surface::Rgb;

pub struct Flower {
    /// Stem x position on the surface.
    pub x: f64,
    /// Stem height when fully grown.
    pub max_height: f64,
    /// Primary petal color.
    pub color: Rgb,
    /// Secondary petal color used for tips and diagonal petals.
    pub petal_color2: Rgb,
    pub bloom_speed: f64,
    pub stem_offset: f64,
    /// Stem height at which the leaves start to appear.
    pub leaf_height: f64,
    /// Extra wait before this flower starts blooming, as a fraction of the
    /// stem-progress scale.
    pub bloom_delay: f64,
}

pub const FLOWERS: [Flower; 7] = [
    // Back row (taller, further back)
    Flower {
        // Left purple
        x: 40.0,
        max_height: 70.0,
        color: Rgb::new(0xa8, 0x55, 0xf7),
        petal_color2: Rgb::new(0xc0, 0x84, 0xfc),
        bloom_speed: 0.85,
        stem_offset: 5.0,
        leaf_height: 30.0,
        bloom_delay: 0.15,
    },
    Flower {
        // Center pink (tallest)
        x: 60.0,
        max_height: 75.0,
        color: Rgb::new(0xec, 0x48, 0x99),
        petal_color2: Rgb::new(0xf4, 0x72, 0xb6),
        bloom_speed: 1.0,
        stem_offset: 0.0,
        leaf_height: 35.0,
        bloom_delay: 0.0,
    },
    Flower {
        // Right orange
        x: 80.0,
        max_height: 68.0,
        color: Rgb::new(0xf5, 0x9e, 0x0b),
        petal_color2: Rgb::new(0xfb, 0xbf, 0x24),
        bloom_speed: 1.15,
        stem_offset: 3.0,
        leaf_height: 28.0,
        bloom_delay: 0.08,
    },
    // Middle row
    Flower {
        // Mid-left red
        x: 50.0,
        max_height: 60.0,
        color: Rgb::new(0xf4, 0x3f, 0x5e),
        petal_color2: Rgb::new(0xfb, 0x71, 0x85),
        bloom_speed: 0.92,
        stem_offset: 10.0,
        leaf_height: 25.0,
        bloom_delay: 0.22,
    },
    Flower {
        // Mid-right blue
        x: 70.0,
        max_height: 62.0,
        color: Rgb::new(0x3b, 0x82, 0xf6),
        petal_color2: Rgb::new(0x60, 0xa5, 0xfa),
        bloom_speed: 1.08,
        stem_offset: 8.0,
        leaf_height: 27.0,
        bloom_delay: 0.05,
    },
    // Front row (shorter, in front)
    Flower {
        // Front-left teal
        x: 35.0,
        max_height: 50.0,
        color: Rgb::new(0x14, 0xb8, 0xa6),
        petal_color2: Rgb::new(0x2d, 0xd4, 0xbf),
        bloom_speed: 0.95,
        stem_offset: 15.0,
        leaf_height: 20.0,
        bloom_delay: 0.18,
    },
    Flower {
        // Front-right violet
        x: 85.0,
        max_height: 52.0,
        color: Rgb::new(0x8b, 0x5c, 0xf6),
        petal_color2: Rgb::new(0xa7, 0x8b, 0xfa),
        bloom_speed: 1.05,
        stem_offset: 13.0,
        leaf_height: 22.0,
        bloom_delay: 0.12,
    },
];
