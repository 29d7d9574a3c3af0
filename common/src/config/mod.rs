//! Widget configuration.
//!
//! - `layout`: Bitmap dimensions and pre-computed preview geometry
//! - `keys`: Shared store keys and their fallback values
//! - `theme`: Runtime theme configuration loaded from YAML

pub mod keys;
pub mod layout;
pub mod theme;

// Re-export layout constants at config level for convenience
pub use layout::{
    BACKGROUND_HEIGHT,
    BACKGROUND_WIDTH,
    BRUTALIST_MARGIN,
    CORNER_RADIUS,
    PREVIEW_GAP,
    PREVIEW_LARGE_SIZE,
    PREVIEW_PADDING,
    PREVIEW_STANDARD_HEIGHT,
    PREVIEW_STANDARD_WIDTH,
};
pub use theme::{BackgroundStyle, ThemeConfig};
