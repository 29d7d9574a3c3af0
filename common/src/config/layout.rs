//! Bitmap and preview layout constants.
//!
//! # Background Geometry
//!
//! The decorated widget's background is rasterized at a fixed resolution and
//! scaled by the launcher to the placed widget's size. Margin and corner
//! radius are expressed in bitmap pixels, not in launcher density units.

// =============================================================================
// Background Bitmap
// =============================================================================

/// Background bitmap width in pixels.
pub const BACKGROUND_WIDTH: u32 = 600;

/// Background bitmap height in pixels.
pub const BACKGROUND_HEIGHT: u32 = 600;

/// Border width of the brutalist style: the inset block starts this many
/// pixels from every edge.
pub const BRUTALIST_MARGIN: u32 = 12;

/// Corner radius of the gradient style's rounded rectangle.
pub const CORNER_RADIUS: u32 = 60;

// Both styles must leave a visible interior at the default size
const _: () = assert!(BRUTALIST_MARGIN * 2 < BACKGROUND_WIDTH);
const _: () = assert!(BRUTALIST_MARGIN * 2 < BACKGROUND_HEIGHT);
const _: () = assert!(CORNER_RADIUS * 2 <= BACKGROUND_WIDTH);
const _: () = assert!(CORNER_RADIUS * 2 <= BACKGROUND_HEIGHT);

// =============================================================================
// Simulator Preview
// =============================================================================

/// Width of a standard (text-only) widget preview cell.
pub const PREVIEW_STANDARD_WIDTH: u32 = 300;

/// Height of a standard widget preview cell.
pub const PREVIEW_STANDARD_HEIGHT: u32 = 120;

/// Edge length of a large (decorated) widget preview cell.
pub const PREVIEW_LARGE_SIZE: u32 = 300;

/// Space between preview cells.
pub const PREVIEW_GAP: u32 = 16;

/// Inner padding of text inside a preview cell.
pub const PREVIEW_PADDING: u32 = 16;
