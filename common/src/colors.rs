//! ARGB color type and color-string parsing for widget theming.
//!
//! # Pixel Format
//!
//! Widget backgrounds are handed to the launcher as 32-bit ARGB bitmaps, so the
//! renderers work in [`Argb8888`] rather than one of the opaque
//! `embedded_graphics` RGB formats. The type implements [`PixelColor`] with
//! [`RawU32`] storage, which lets every `embedded_graphics` primitive draw into
//! a [`Bitmap`](crate::bitmap::Bitmap) directly.
//!
//! ## Layout
//!
//! ```text
//! bit 31      24 23      16 15       8 7        0
//!     [ alpha  ] [  red   ] [ green  ] [  blue  ]
//! ```
//!
//! # Color Strings
//!
//! Theme colors arrive from the shared store as strings. [`parse_color`]
//! accepts the same forms the launcher's own color parser does:
//! `#RRGGBB`, `#AARRGGBB`, and a fixed list of lower-case color names.

use embedded_graphics::pixelcolor::raw::{RawData, RawU32};
use embedded_graphics::pixelcolor::{PixelColor, Rgb888, RgbColor};

// =============================================================================
// Argb8888
// =============================================================================

/// 32-bit color with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Argb8888(u32);

impl Argb8888 {
    /// Fully transparent black. Initial content of every bitmap.
    pub const TRANSPARENT: Self = Self(0x0000_0000);

    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);

    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Build a color from individual channels.
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Build an opaque color from RGB channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self { Self::new(0xFF, r, g, b) }

    /// Wrap a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self { Self(argb) }

    /// Packed `0xAARRGGBB` value.
    pub const fn into_argb(self) -> u32 { self.0 }

    pub const fn a(self) -> u8 { (self.0 >> 24) as u8 }

    pub const fn r(self) -> u8 { (self.0 >> 16) as u8 }

    pub const fn g(self) -> u8 { (self.0 >> 8) as u8 }

    pub const fn b(self) -> u8 { self.0 as u8 }

    /// Linear interpolation per channel, `t` clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| -> u8 {
            let from = f32::from(from);
            (from + (f32::from(to) - from) * t).round() as u8
        };
        Self::new(
            mix(self.a(), other.a()),
            mix(self.r(), other.r()),
            mix(self.g(), other.g()),
            mix(self.b(), other.b()),
        )
    }

    /// Same color with alpha multiplied by `coverage`, clamped to `0.0..=1.0`.
    pub fn scale_alpha(self, coverage: f32) -> Self {
        let a = (f32::from(self.a()) * coverage.clamp(0.0, 1.0)).round() as u8;
        Self(self.0 & 0x00FF_FFFF | u32::from(a) << 24)
    }

    /// Composite `self` over `dst` (Porter-Duff source-over).
    ///
    /// Opaque sources replace the destination exactly, so flat fills stay
    /// bit-exact.
    pub fn over(self, dst: Self) -> Self {
        let sa = u32::from(self.a());
        if sa == 0xFF {
            return self;
        }
        if sa == 0 {
            return dst;
        }

        let da = u32::from(dst.a());
        let inv = 0xFF - sa;
        let out_a = sa + (da * inv + 127) / 255;
        if out_a == 0 {
            return Self::TRANSPARENT;
        }

        let denom = out_a * 255;
        let channel = |sc: u8, dc: u8| -> u8 {
            let num = u32::from(sc) * sa * 255 + u32::from(dc) * da * inv;
            ((num + denom / 2) / denom).min(0xFF) as u8
        };
        Self::new(
            out_a as u8,
            channel(self.r(), dst.r()),
            channel(self.g(), dst.g()),
            channel(self.b(), dst.b()),
        )
    }

    /// Flatten onto an opaque backdrop.
    pub fn flatten(self, backdrop: Rgb888) -> Rgb888 {
        let sa = u32::from(self.a());
        let inv = 0xFF - sa;
        let channel = |sc: u8, bc: u8| -> u8 { ((u32::from(sc) * sa + u32::from(bc) * inv + 127) / 255) as u8 };
        Rgb888::new(
            channel(self.r(), backdrop.r()),
            channel(self.g(), backdrop.g()),
            channel(self.b(), backdrop.b()),
        )
    }
}

impl PixelColor for Argb8888 {
    type Raw = RawU32;
}

impl From<RawU32> for Argb8888 {
    fn from(raw: RawU32) -> Self { Self(raw.into_inner()) }
}

impl From<Argb8888> for RawU32 {
    fn from(color: Argb8888) -> Self { Self::new(color.0) }
}

impl From<Rgb888> for Argb8888 {
    fn from(color: Rgb888) -> Self { Self::opaque(color.r(), color.g(), color.b()) }
}

// =============================================================================
// Color String Parsing
// =============================================================================

/// Named colors understood by the launcher's color parser.
const NAMED_COLORS: [(&str, u32); 23] = [
    ("black", 0xFF00_0000),
    ("darkgray", 0xFF44_4444),
    ("gray", 0xFF88_8888),
    ("lightgray", 0xFFCC_CCCC),
    ("white", 0xFFFF_FFFF),
    ("red", 0xFFFF_0000),
    ("green", 0xFF00_FF00),
    ("blue", 0xFF00_00FF),
    ("yellow", 0xFFFF_FF00),
    ("cyan", 0xFF00_FFFF),
    ("magenta", 0xFFFF_00FF),
    ("aqua", 0xFF00_FFFF),
    ("fuchsia", 0xFFFF_00FF),
    ("darkgrey", 0xFF44_4444),
    ("grey", 0xFF88_8888),
    ("lightgrey", 0xFFCC_CCCC),
    ("lime", 0xFF00_FF00),
    ("maroon", 0xFF80_0000),
    ("navy", 0xFF00_0080),
    ("olive", 0xFF80_8000),
    ("purple", 0xFF80_0080),
    ("silver", 0xFFC0_C0C0),
    ("teal", 0xFF00_8080),
];

/// Parse a theme color string.
///
/// Accepts `#RRGGBB` (opaque), `#AARRGGBB`, or a color name (case-insensitive).
/// Returns `None` for anything else.
pub fn parse_color(value: &str) -> Option<Argb8888> {
    if let Some(hex) = value.strip_prefix('#') {
        let bits = parse_hex(hex)?;
        return match hex.len() {
            6 => Some(Argb8888(0xFF00_0000 | bits)),
            8 => Some(Argb8888(bits)),
            _ => None,
        };
    }

    let name = value.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|&(_, argb)| Argb8888(argb))
}

fn parse_hex(hex: &str) -> Option<u32> {
    if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
