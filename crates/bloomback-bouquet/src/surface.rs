/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// A small RGBA raster with clipped pixel and rectangle fills.
///
/// Coordinates are accepted as floats and floored, matching canvas-style
/// drawing where geometry is computed in float space and snapped to the
/// pixel grid at the last moment. Writes outside the surface are dropped.
/// Alpha is 0 for untouched pixels and 255 for drawn ones.
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Surface {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major from the top-left.
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    pub fn set_pixel(&mut self, x: f64, y: f64, color: Rgb) {
        let (x, y) = (x.floor() as i64, y.floor() as i64);
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[idx] = color.r;
        self.pixels[idx + 1] = color.g;
        self.pixels[idx + 2] = color.b;
        self.pixels[idx + 3] = 255;
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        let (x, y) = (x.floor(), y.floor());
        let (w, h) = (w.floor() as i64, h.floor() as i64);
        for dy in 0..h {
            for dx in 0..w {
                self.set_pixel(x + dx as f64, y + dy as f64, color);
            }
        }
    }

    /// The color at (x, y), or None if the pixel was never drawn.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        if self.pixels[idx + 3] == 0 {
            return None;
        }
        Some(Rgb::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
        ))
    }

    /// Number of drawn (non-transparent) pixels.
    pub fn drawn_count(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|px| px[3] != 0).count()
    }
}
