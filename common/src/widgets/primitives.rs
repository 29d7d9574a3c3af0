//! Low-level drawing primitives for widget backgrounds.
//!
//! All primitives are generic over `DrawTarget<Color = Argb8888>` so they can
//! draw into a [`Bitmap`](crate::bitmap::Bitmap) or any other ARGB target.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::colors::Argb8888;

// =============================================================================
// Linear Gradient
// =============================================================================

/// Two-stop linear gradient between `from` and `to`, clamped past both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    from: (f32, f32),
    delta: (f32, f32),
    length_sq: f32,
    start: Argb8888,
    end: Argb8888,
}

impl LinearGradient {
    pub fn new(from: (f32, f32), to: (f32, f32), start: Argb8888, end: Argb8888) -> Self {
        let delta = (to.0 - from.0, to.1 - from.1);
        Self {
            from,
            delta,
            length_sq: delta.0.mul_add(delta.0, delta.1 * delta.1),
            start,
            end,
        }
    }

    /// Gradient from the top-left to the bottom-right corner of `area`.
    pub fn diagonal(area: &Rectangle, start: Argb8888, end: Argb8888) -> Self {
        let from = (area.top_left.x as f32, area.top_left.y as f32);
        let to = (from.0 + area.size.width as f32, from.1 + area.size.height as f32);
        Self::new(from, to, start, end)
    }

    /// Position of `(x, y)` along the gradient axis, `0.0..=1.0`.
    pub fn parameter(&self, x: f32, y: f32) -> f32 {
        if self.length_sq <= f32::EPSILON {
            return 0.0;
        }
        let dot = (x - self.from.0).mul_add(self.delta.0, (y - self.from.1) * self.delta.1);
        (dot / self.length_sq).clamp(0.0, 1.0)
    }

    /// Color at the center of pixel `point`.
    pub fn color_at(&self, point: Point) -> Argb8888 {
        let t = self.parameter(point.x as f32 + 0.5, point.y as f32 + 0.5);
        self.start.lerp(self.end, t)
    }
}

// =============================================================================
// Background Shapes
// =============================================================================

/// Fill `area` with a flat color.
pub fn fill_rect<D>(display: &mut D, area: Rectangle, color: Argb8888) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Argb8888>,
{
    area.into_styled(PrimitiveStyle::with_fill(color)).draw(display)
}

/// Flat bordered block: `border` over the whole area, `fill` inset by `margin`.
///
/// The inset is skipped when the margin leaves no interior.
pub fn draw_bordered_block<D>(
    display: &mut D,
    area: Rectangle,
    margin: u32,
    border: Argb8888,
    fill: Argb8888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Argb8888>,
{
    fill_rect(display, area, border)?;

    let inset = margin.saturating_mul(2);
    if area.size.width <= inset || area.size.height <= inset {
        return Ok(());
    }
    let inner = Rectangle::new(
        area.top_left + Point::new(margin as i32, margin as i32),
        Size::new(area.size.width - inset, area.size.height - inset),
    );
    fill_rect(display, inner, fill)
}

/// Subsamples per axis when measuring corner coverage.
const CORNER_SAMPLES: u32 = 4;

/// Rounded rectangle over `area` filled with `gradient`.
///
/// Corner edge pixels get the gradient color with alpha scaled by the share of
/// the pixel inside the arc. Pixels fully outside the corners are not touched.
pub fn draw_gradient_round_rect<D>(
    display: &mut D,
    area: Rectangle,
    corner_radius: u32,
    gradient: &LinearGradient,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Argb8888>,
{
    let corners = CornerArcs::new(&area, corner_radius);
    let pixels = area.points().filter_map(|p| {
        let coverage = corners.coverage(p);
        if coverage <= 0.0 {
            return None;
        }
        let color = gradient.color_at(p);
        Some(Pixel(p, if coverage >= 1.0 { color } else { color.scale_alpha(coverage) }))
    });
    display.draw_iter(pixels)
}

/// Four equal corner arcs of a rounded rectangle, in continuous coordinates.
struct CornerArcs {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    radius: f32,
}

impl CornerArcs {
    fn new(area: &Rectangle, corner_radius: u32) -> Self {
        let left = area.top_left.x as f32;
        let top = area.top_left.y as f32;
        let width = area.size.width as f32;
        let height = area.size.height as f32;
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
            radius: (corner_radius as f32).min(width / 2.0).min(height / 2.0),
        }
    }

    /// Arc center and outward direction along one axis, if `pos` lies in a corner band.
    fn band(&self, pos: f32, low: f32, high: f32) -> Option<(f32, f32)> {
        if pos < low + self.radius {
            Some((low + self.radius, -1.0))
        } else if pos > high - self.radius {
            Some((high - self.radius, 1.0))
        } else {
            None
        }
    }

    /// Fraction of pixel `point` inside the shape, `0.0..=1.0`.
    fn coverage(&self, point: Point) -> f32 {
        let x = point.x as f32;
        let y = point.y as f32;
        let (Some((cx, sx)), Some((cy, sy))) = (
            self.band(x + 0.5, self.left, self.right),
            self.band(y + 0.5, self.top, self.bottom),
        ) else {
            return 1.0;
        };

        let step = 1.0 / CORNER_SAMPLES as f32;
        let radius_sq = self.radius * self.radius;
        let mut inside = 0u32;
        for i in 0..CORNER_SAMPLES {
            let dx = ((x + (i as f32 + 0.5) * step - cx) * sx).max(0.0);
            for j in 0..CORNER_SAMPLES {
                let dy = ((y + (j as f32 + 0.5) * step - cy) * sy).max(0.0);
                if dx.mul_add(dx, dy * dy) <= radius_sq {
                    inside += 1;
                }
            }
        }
        inside as f32 / (CORNER_SAMPLES * CORNER_SAMPLES) as f32
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
