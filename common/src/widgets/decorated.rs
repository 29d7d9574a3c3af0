//! Large widget: affirmation, persona line, status footer and a themed
//! background bitmap.
//!
//! # Decoration
//!
//! Text is always written first. Decoration (text colors plus background) is
//! all-or-nothing: if any theme color fails to parse, or rasterizing the
//! background fails for any reason, the template keeps its plain text fields
//! and the launcher shows the layout's default styling. The failure is logged
//! and never reaches the caller.
//!
//! # Background Styles
//!
//! | Style | Drawing |
//! |-------|---------|
//! | Brutalist | Text color over the whole canvas, start color inset by 12px |
//! | Gradient | Rounded rectangle (60px radius), start → end along the diagonal |

use std::panic::{self, AssertUnwindSafe};

use embedded_graphics::prelude::*;
use log::Level;

use crate::bitmap::Bitmap;
use crate::colors::{Argb8888, parse_color};
use crate::config::keys;
use crate::config::layout::{BACKGROUND_HEIGHT, BACKGROUND_WIDTH, BRUTALIST_MARGIN, CORNER_RADIUS};
use crate::config::theme::{BackgroundStyle, ResolvedTheme, ThemeConfig};
use crate::error::{ColorRole, DecorationError};
use crate::host::WidgetInstanceId;
use crate::persona::{persona_caption, status_caption};
use crate::store::PreferenceStore;
use crate::view::{LayoutId, TextFieldId, ViewTemplate};
use crate::widgets::WidgetProvider;
use crate::widgets::primitives::{LinearGradient, draw_bordered_block, draw_gradient_round_rect};
use crate::widgets_log;

// =============================================================================
// Palette
// =============================================================================

/// Parsed theme colors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    /// Text color and brutalist border.
    pub text: Argb8888,
    /// Gradient start and brutalist block.
    pub start: Argb8888,
    /// Gradient end.
    pub end: Argb8888,
}

impl Palette {
    /// Parse all three colors; the first malformed one is reported.
    pub fn parse(theme: &ResolvedTheme<'_>) -> Result<Self, DecorationError> {
        Ok(Self {
            text: parse_role(ColorRole::Text, theme.text_color)?,
            start: parse_role(ColorRole::Start, theme.color_start)?,
            end: parse_role(ColorRole::End, theme.color_end)?,
        })
    }
}

fn parse_role(role: ColorRole, value: &str) -> Result<Argb8888, DecorationError> {
    parse_color(value).ok_or_else(|| DecorationError::MalformedColor {
        role,
        value: value.to_string(),
    })
}

/// Rasterize a widget background of `size` in the given style.
pub fn render_background(size: Size, style: BackgroundStyle, palette: &Palette) -> Result<Bitmap, DecorationError> {
    if size.width == 0 || size.height == 0 {
        return Err(DecorationError::EmptyCanvas {
            width: size.width,
            height: size.height,
        });
    }

    let mut bitmap = Bitmap::new(size.width, size.height);
    let Ok(()) = draw_background(&mut bitmap, style, palette);
    Ok(bitmap)
}

/// Draw the background style over the whole of `display`.
pub fn draw_background<D>(display: &mut D, style: BackgroundStyle, palette: &Palette) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Argb8888>,
{
    let canvas = display.bounding_box();
    match style {
        BackgroundStyle::Brutalist => draw_bordered_block(display, canvas, BRUTALIST_MARGIN, palette.text, palette.start),
        BackgroundStyle::Gradient => {
            let gradient = LinearGradient::diagonal(&canvas, palette.start, palette.end);
            draw_gradient_round_rect(display, canvas, CORNER_RADIUS, &gradient)
        }
    }
}

/// Run a rasterization step, turning a panic into [`DecorationError::RasterFault`].
fn guard_raster<T>(raster: impl FnOnce() -> Result<T, DecorationError>) -> Result<T, DecorationError> {
    panic::catch_unwind(AssertUnwindSafe(raster)).unwrap_or(Err(DecorationError::RasterFault))
}

/// Large template with its three text fields filled in and no styling.
fn large_text_view(store: &dyn PreferenceStore) -> ViewTemplate {
    let text = store.string_or(keys::AFFIRMATION_TEXT, keys::DEFAULT_AFFIRMATION);
    let persona = store.string_or(keys::PERSONA_NAME, keys::DEFAULT_PERSONA);

    let mut view = ViewTemplate::new(LayoutId::Large);
    view.set_text(TextFieldId::Text, text);
    view.set_text(TextFieldId::Persona, persona_caption(persona));
    view.set_text(TextFieldId::Footer, status_caption(persona));
    view
}

/// Apply a decoration outcome to `view`. Text fields are never touched.
fn apply_decoration(
    view: &mut ViewTemplate,
    instance: WidgetInstanceId,
    decoration: Result<(Argb8888, Bitmap), DecorationError>,
) {
    match decoration {
        Ok((text_color, background)) => {
            for id in TextFieldId::ALL {
                view.set_text_color(id, text_color);
            }
            view.set_background(background);
        }
        Err(err) => {
            widgets_log!(Level::Warn, "Widget {instance}: skipping decoration: {err}");
        }
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Renders the large layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoratedWidgetRenderer {
    size: Size,
    theme: ThemeConfig,
}

impl Default for DecoratedWidgetRenderer {
    fn default() -> Self { Self::new(ThemeConfig::default()) }
}

impl DecoratedWidgetRenderer {
    /// Renderer with the default 600x600 background.
    pub fn new(theme: ThemeConfig) -> Self {
        Self {
            size: Size::new(BACKGROUND_WIDTH, BACKGROUND_HEIGHT),
            theme,
        }
    }

    /// Override the background resolution.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub const fn size(&self) -> Size { self.size }

    pub const fn theme(&self) -> &ThemeConfig { &self.theme }

    /// Text color and background for the current theme.
    fn decorate(&self, store: &dyn PreferenceStore) -> Result<(Argb8888, Bitmap), DecorationError> {
        let theme = self.theme.resolve(store);
        let palette = Palette::parse(&theme)?;
        let bitmap = render_background(self.size, theme.style, &palette)?;
        Ok((palette.text, bitmap))
    }

    /// [`decorate`](Self::decorate) with panics turned into an error, so a
    /// rasterizer fault costs only the decoration.
    fn try_decorate(&self, store: &dyn PreferenceStore) -> Result<(Argb8888, Bitmap), DecorationError> {
        guard_raster(|| self.decorate(store))
    }
}

impl WidgetProvider for DecoratedWidgetRenderer {
    fn render(&self, store: &dyn PreferenceStore, instance: WidgetInstanceId) -> ViewTemplate {
        let mut view = large_text_view(store);
        apply_decoration(&mut view, instance, self.try_decorate(store));
        view
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
