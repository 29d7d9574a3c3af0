//! Owned ARGB raster that `embedded_graphics` primitives can draw into.
//!
//! A [`Bitmap`] starts fully transparent. Every drawn pixel is composited
//! source-over onto what is already there, matching how the launcher's canvas
//! treats a default paint. Pixels outside the bitmap are clipped silently.

use core::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};

use crate::colors::Argb8888;

/// Row-major ARGB pixel buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Argb8888>,
}

impl Bitmap {
    /// Allocate a transparent bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Argb8888::TRANSPARENT; width as usize * height as usize],
        }
    }

    pub const fn width(&self) -> u32 { self.width }

    pub const fn height(&self) -> u32 { self.height }

    /// True when the bitmap has no pixels at all.
    pub const fn is_empty(&self) -> bool { self.width == 0 || self.height == 0 }

    /// Color at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Argb8888> { self.index(x, y).map(|i| self.pixels[i]) }

    /// All pixels, row by row.
    pub fn pixels(&self) -> &[Argb8888] { &self.pixels }

    /// Packed `0xAARRGGBB` words, row by row, for handing to the launcher.
    pub fn to_argb_words(&self) -> Vec<u32> { self.pixels.iter().map(|c| c.into_argb()).collect() }

    /// Nearest-neighbour sample at normalized coordinates `0.0..1.0`.
    pub fn sample(&self, u: f32, v: f32) -> Option<Argb8888> {
        if self.is_empty() {
            return None;
        }
        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);
        self.pixel(x, y)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    fn point_index(&self, point: Point) -> Option<usize> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        self.index(x, y)
    }
}

impl core::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Pixel dumps are useless in test output
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl OriginDimensions for Bitmap {
    fn size(&self) -> Size { Size::new(self.width, self.height) }
}

impl DrawTarget for Bitmap {
    type Color = Argb8888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.point_index(point) {
                self.pixels[i] = color.over(self.pixels[i]);
            }
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
