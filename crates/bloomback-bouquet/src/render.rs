use crate::flowers::{FLOWERS, Flower};
use crate::surface::{Rgb, Surface};

pub const WIDTH: u32 = 120;
pub const HEIGHT: u32 = 140;

/// The animation plays once over this many frames and then holds the final
/// image; frame numbers past the end render identically to the last frame.
pub const TOTAL_FRAMES: u32 = 500;

/// Stems reach full height at ~77% of the run (progress * 1.3 clamps at 1).
const STEM_RATE: f64 = 1.3;
/// Blooming starts once a stem is 55% grown, plus the flower's own delay.
const BLOOM_START: f64 = 0.55;
/// A bloom takes 45% of the stem-progress scale to fully open.
const BLOOM_DURATION: f64 = 0.45;

const STEM: Rgb = Rgb::new(0x10, 0xb9, 0x81);
const LEAF: Rgb = Rgb::new(0x05, 0x96, 0x69);
const POT_BODY: Rgb = Rgb::new(0xd9, 0x77, 0x06);
const POT_LIGHT: Rgb = Rgb::new(0xf5, 0x9e, 0x0b);
const POT_RIM: Rgb = Rgb::new(0xb4, 0x53, 0x09);
const POT_RIM_TOP: Rgb = Rgb::new(0x92, 0x40, 0x0e);
const BLOOM_CENTER: Rgb = Rgb::new(0xfe, 0xf0, 0x8a);
const BLOOM_CENTER_DEEP: Rgb = Rgb::new(0xfd, 0xe0, 0x47);

/// Render one frame of the bouquet. Pure: the output depends only on the
/// frame number.
pub fn render_frame(frame: u32) -> Surface {
    let mut surface = Surface::new(WIDTH, HEIGHT);

    let progress = (frame as f64 / TOTAL_FRAMES as f64).min(1.0);

    let pot_y = HEIGHT as f64 - 20.0;
    draw_pot(&mut surface, pot_y);

    for flower in &FLOWERS {
        draw_flower(&mut surface, flower, progress, pot_y);
    }

    surface
}

fn draw_pot(s: &mut Surface, pot_y: f64) {
    let pot_w = 50.0;
    let pot_h = 20.0;
    let pot_x = (WIDTH as f64 - pot_w) / 2.0;

    // Body with a faked gradient: light inset over the base, shadow inset
    // over that.
    s.fill_rect(pot_x, pot_y, pot_w, pot_h, POT_BODY);
    s.fill_rect(pot_x + 3.0, pot_y + 3.0, pot_w - 6.0, pot_h - 6.0, POT_LIGHT);
    s.fill_rect(pot_x + 6.0, pot_y + 6.0, pot_w - 12.0, pot_h - 9.0, POT_BODY);

    // Rim
    s.fill_rect(pot_x - 3.0, pot_y, pot_w + 6.0, 4.0, POT_RIM);
    s.fill_rect(pot_x - 2.0, pot_y, pot_w + 4.0, 2.0, POT_RIM_TOP);
}

fn draw_flower(s: &mut Surface, flower: &Flower, progress: f64, pot_y: f64) {
    let stem_progress = (progress * STEM_RATE).min(1.0);
    let current_height = flower.max_height * stem_progress;
    let end_y = pot_y - current_height;

    if current_height <= 0.0 {
        return;
    }

    s.fill_rect(flower.x, end_y, 1.0, current_height, STEM);

    draw_leaves(s, flower, current_height, pot_y);

    // Bloom timing: each flower waits out the global start threshold plus
    // its own delay, then opens over BLOOM_DURATION of stem progress.
    let individual = (stem_progress - BLOOM_START - flower.bloom_delay).max(0.0);
    let eased = ease_in_out_quad((individual / BLOOM_DURATION).min(1.0));

    if eased > 0.0 {
        draw_bloom(s, flower, eased, end_y);
    }
}

fn draw_leaves(s: &mut Surface, flower: &Flower, current_height: f64, pot_y: f64) {
    if current_height <= flower.leaf_height {
        return;
    }

    // Leaves fade in over the next 10px of stem growth.
    let leaf_progress = ((current_height - flower.leaf_height) / 10.0).min(1.0);
    let leaf_size = (leaf_progress * 3.0).floor() as i64;

    for i in 0..leaf_size {
        let rise = (i / 2) as f64;
        s.set_pixel(flower.x - 1.0 - i as f64, pot_y - flower.leaf_height + rise, LEAF);
        // Right leaf sits slightly higher
        s.set_pixel(
            flower.x + 1.0 + i as f64,
            pot_y - flower.leaf_height - 3.0 + rise,
            LEAF,
        );
    }
}

fn draw_bloom(s: &mut Surface, flower: &Flower, eased: f64, end_y: f64) {
    let cx = flower.x;
    let cy = end_y - 1.0;

    if eased < 0.2 {
        // Stage 1: closed bud
        let bud_progress = eased / 0.2;
        s.set_pixel(cx, cy - 2.0, flower.color);
        s.set_pixel(cx - 1.0, cy - 1.0, flower.color);
        s.set_pixel(cx, cy - 1.0, flower.color);
        s.set_pixel(cx + 1.0, cy - 1.0, flower.color);
        if bud_progress > 0.5 {
            s.set_pixel(cx, cy - 3.0, flower.petal_color2);
        }
    } else if eased < 0.5 {
        // Stage 2: bud opening
        let opening = (eased - 0.2) / 0.3;

        s.set_pixel(cx, cy - 1.0, BLOOM_CENTER);
        if opening > 0.3 {
            s.set_pixel(cx - 1.0, cy - 1.0, BLOOM_CENTER_DEEP);
        }

        // Top petal pushes out pixel by pixel, secondary color at the tip
        let petal_extend = (opening * 2.0).floor() as i64;
        for i in 0..=petal_extend {
            let color = if i == petal_extend {
                flower.petal_color2
            } else {
                flower.color
            };
            s.set_pixel(cx, cy - 2.0 - i as f64, color);
        }
        if opening > 0.4 {
            s.set_pixel(cx - 1.0, cy - 2.0, flower.color);
            s.set_pixel(cx + 1.0, cy - 2.0, flower.color);
        }
        if opening > 0.6 {
            s.set_pixel(cx - 1.0, cy, flower.color);
            s.set_pixel(cx + 1.0, cy, flower.color);
        }
    } else {
        // Stage 3: full bloom
        let full = (eased - 0.5) / 0.5;
        let petal_length = (2.0 + full * 2.5).floor() as i64;

        s.fill_rect(cx - 1.0, cy - 1.0, 3.0, 2.0, BLOOM_CENTER);
        s.set_pixel(cx, cy - 2.0, BLOOM_CENTER_DEEP);

        // Cardinal petals with the secondary color on each tip
        for i in 0..petal_length {
            let color = if i < petal_length - 1 {
                flower.color
            } else {
                flower.petal_color2
            };
            let reach = i as f64;
            s.set_pixel(cx, cy - 3.0 - reach, color);
            s.set_pixel(cx, cy + 1.0 + reach, color);
            s.set_pixel(cx - 2.0 - reach, cy, color);
            s.set_pixel(cx + 2.0 + reach, cy, color);
        }

        // Diagonal petals open later in the stage
        if full > 0.3 {
            let diag_length = ((full - 0.3) * 4.0).floor().min(2.0) as i64;
            for i in 0..diag_length {
                let reach = i as f64;
                s.set_pixel(cx - 1.0 - reach, cy - 2.0 - reach, flower.petal_color2);
                s.set_pixel(cx + 1.0 + reach, cy - 2.0 - reach, flower.petal_color2);
                s.set_pixel(cx - 1.0 - reach, cy + 1.0 + reach, flower.petal_color2);
                s.set_pixel(cx + 1.0 + reach, cy + 1.0 + reach, flower.petal_color2);
            }
        }

        // Inner petal layer for depth at the very end
        if full > 0.7 {
            s.set_pixel(cx, cy - 2.0, flower.color);
            s.set_pixel(cx - 1.0, cy - 1.0, flower.color);
            s.set_pixel(cx + 1.0, cy - 1.0, flower.color);
            s.set_pixel(cx - 1.0, cy, flower.color);
            s.set_pixel(cx + 1.0, cy, flower.color);
        }
    }
}

/// Quadratic ease-in-out: slow start, quick middle, slow finish.
fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering_is_deterministic() {
        for frame in [0, 1, 137, 250, 499, 500] {
            let a = render_frame(frame);
            let b = render_frame(frame);
            assert_eq!(a.data(), b.data(), "frame {} not reproducible", frame);
        }
    }

    #[test]
    fn frames_past_the_end_hold_the_final_image() {
        let last = render_frame(TOTAL_FRAMES);
        let beyond = render_frame(TOTAL_FRAMES + 1000);
        assert_eq!(last.data(), beyond.data());
    }

    #[test]
    fn frame_zero_is_just_the_pot() {
        let s = render_frame(0);
        // Stems have zero height at frame 0, so nothing above the pot rim.
        for y in 0..(HEIGHT - 20) {
            for x in 0..WIDTH {
                assert_eq!(s.get(x, y), None, "unexpected pixel at ({}, {})", x, y);
            }
        }
        assert!(s.drawn_count() > 0);
    }

    #[test]
    fn stems_grow_monotonically_until_full() {
        let height_at = |frame: u32| {
            let s = render_frame(frame);
            // Center pink flower at x=60, stem color runs from the pot up.
            (0..HEIGHT)
                .filter(|&y| s.get(60, y).is_some())
                .min()
                .unwrap_or(HEIGHT)
        };

        let early = height_at(50);
        let mid = height_at(150);
        let late = height_at(400);
        assert!(early > mid, "stem should be taller (smaller min y) at frame 150");
        assert!(mid >= late);
    }

    #[test]
    fn final_frame_shows_the_center_flower_in_full_bloom() {
        let s = render_frame(TOTAL_FRAMES);

        // Center pink flower: x=60, max height 75 -> stem top at y=45,
        // bloom center one above at y=44. Petal length at full bloom is 4
        // with the secondary color on the tip.
        let color = Rgb::new(0xec, 0x48, 0x99);
        let tip = Rgb::new(0xf4, 0x72, 0xb6);

        assert_eq!(s.get(60, 41), Some(color)); // top petal shaft
        assert_eq!(s.get(60, 38), Some(tip)); // top petal tip
        assert_eq!(s.get(55, 44), Some(tip)); // left petal tip
        assert_eq!(s.get(60, 44), Some(BLOOM_CENTER)); // yellow center
    }

    #[test]
    fn bloom_waits_for_the_start_threshold() {
        // stem_progress passes BLOOM_START at frame ~212 for the zero-delay
        // flower; just before that no bloom pixel may exist above its stem.
        let frame = 210;
        let s = render_frame(frame);
        let stem_progress = ((frame as f64 / TOTAL_FRAMES as f64) * STEM_RATE).min(1.0);
        let stem_top = 120.0 - 75.0 * stem_progress;
        let bud_y = (stem_top - 3.0).floor() as u32;
        assert_eq!(s.get(60, bud_y), None);

        // Well past the threshold the bud is there.
        let s = render_frame(260);
        let stem_progress = ((260.0 / TOTAL_FRAMES as f64) * STEM_RATE).min(1.0);
        let stem_top = 120.0 - 75.0 * stem_progress;
        let bud_y = (stem_top - 1.0 - 2.0).floor() as u32;
        assert!(s.get(60, bud_y).is_some());
    }

    #[test]
    fn easing_hits_the_anchor_points() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.25), 0.125);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert!((ease_in_out_quad(0.75) - 0.875).abs() < 1e-12);
    }
}
