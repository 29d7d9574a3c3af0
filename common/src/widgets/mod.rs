//! Widget renderers.
//!
//! Each renderer turns the current store contents into a [`ViewTemplate`] for
//! one widget instance. Rendering is a pure function of the store and the
//! renderer's configuration: the same inputs always produce the same template.

mod decorated;
mod primitives;
mod text;

pub use decorated::{DecoratedWidgetRenderer, Palette, draw_background, render_background};
pub use primitives::{LinearGradient, draw_bordered_block, draw_gradient_round_rect, fill_rect};
pub use text::TextWidgetRenderer;

use crate::host::WidgetInstanceId;
use crate::store::PreferenceStore;
use crate::view::ViewTemplate;

/// Produces the view for one widget instance.
pub trait WidgetProvider {
    /// Build the template for `instance` from the current store contents.
    ///
    /// Missing store keys fall back to defaults; this never fails.
    fn render(&self, store: &dyn PreferenceStore, instance: WidgetInstanceId) -> ViewTemplate;
}
