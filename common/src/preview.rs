//! Desktop preview of populated view templates.
//!
//! The launcher normally inflates the layouts; this module approximates them
//! so templates can be inspected in the simulator. Positions are fixed per
//! layout:
//!
//! ```text
//! Large                         Standard
//! +-------------------------+   +-------------------------+
//! | FROM persona            |   |                         |
//! |                         |   |   affirmation (wrapped) |
//! |  affirmation (wrapped)  |   |                         |
//! |                         |   +-------------------------+
//! | footer                  |
//! +-------------------------+
//! ```
//!
//! Text fields without a color are drawn in [`DEFAULT_TEXT_COLOR`]; a missing
//! background leaves the [`BACKDROP`] visible.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use profont::{PROFONT_12_POINT, PROFONT_18_POINT};

use crate::bitmap::Bitmap;
use crate::config::layout::{PREVIEW_LARGE_SIZE, PREVIEW_PADDING, PREVIEW_STANDARD_HEIGHT, PREVIEW_STANDARD_WIDTH};
use crate::view::{LayoutId, TextFieldId, ViewTemplate};

// =============================================================================
// Styles
// =============================================================================

/// What the launcher wallpaper would show behind a widget.
pub const BACKDROP: Rgb888 = Rgb888::new(0x1E, 0x1E, 0x24);

/// Text color of fields the renderer did not color.
pub const DEFAULT_TEXT_COLOR: Rgb888 = Rgb888::WHITE;

/// Affirmation body font.
const BODY_FONT: &MonoFont = &PROFONT_18_POINT;

/// Persona line and footer font.
const CAPTION_FONT: &MonoFont = &PROFONT_12_POINT;

const CENTERED_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

const LEFT_BOTTOM: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Bottom)
    .build();

// =============================================================================
// Layout
// =============================================================================

/// Preview cell size for a layout.
pub const fn preview_size(layout: LayoutId) -> Size {
    match layout {
        LayoutId::Standard => Size::new(PREVIEW_STANDARD_WIDTH, PREVIEW_STANDARD_HEIGHT),
        LayoutId::Large => Size::new(PREVIEW_LARGE_SIZE, PREVIEW_LARGE_SIZE),
    }
}

/// Greedy word wrap to at most `max_chars` characters per line.
///
/// Words longer than a line are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for chunk in chars.chunks(max_chars) {
            let needed = if line_len == 0 { chunk.len() } else { line_len + 1 + chunk.len() };
            if needed > max_chars && line_len > 0 {
                lines.push(core::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(chunk);
            line_len += chunk.len();
        }
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw `view` with its top-left corner at `origin`.
pub fn draw_preview<D>(display: &mut D, view: &ViewTemplate, origin: Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let area = Rectangle::new(origin, preview_size(view.layout()));
    draw_background(display, &area, view.background())?;

    let pad = PREVIEW_PADDING as i32;
    let inner_width = area.size.width.saturating_sub(2 * PREVIEW_PADDING);
    let mut body_top = area.top_left.y + pad;
    let mut body_bottom = area.top_left.y + area.size.height as i32 - pad;

    if let Some(persona) = view.text(TextFieldId::Persona) {
        let style = MonoTextStyle::new(CAPTION_FONT, field_color(view, TextFieldId::Persona));
        Text::with_text_style(persona, area.top_left + Point::new(pad, pad), style, LEFT_TOP).draw(display)?;
        body_top += CAPTION_FONT.character_size.height as i32 + pad / 2;
    }

    if let Some(footer) = view.text(TextFieldId::Footer) {
        let style = MonoTextStyle::new(CAPTION_FONT, field_color(view, TextFieldId::Footer));
        let position = Point::new(area.top_left.x + pad, body_bottom);
        Text::with_text_style(footer, position, style, LEFT_BOTTOM).draw(display)?;
        body_bottom -= CAPTION_FONT.character_size.height as i32 + pad / 2;
    }

    if let Some(body) = view.text(TextFieldId::Text) {
        let style = MonoTextStyle::new(BODY_FONT, field_color(view, TextFieldId::Text));
        let line_height = BODY_FONT.character_size.height as i32;
        let max_chars = (inner_width / BODY_FONT.character_size.width.max(1)) as usize;
        let max_lines = ((body_bottom - body_top).max(0) / line_height.max(1)) as usize;

        let lines = wrap_text(body, max_chars);
        let shown = lines.len().min(max_lines);
        let block_height = shown as i32 * line_height;
        let mut y = body_top + ((body_bottom - body_top) - block_height).max(0) / 2;
        let center_x = area.top_left.x + area.size.width as i32 / 2;

        for line in lines.iter().take(shown) {
            Text::with_text_style(line, Point::new(center_x, y), style, CENTERED_TOP).draw(display)?;
            y += line_height;
        }
    }

    Ok(())
}

fn field_color(view: &ViewTemplate, id: TextFieldId) -> Rgb888 {
    view.text_color(id)
        .map_or(DEFAULT_TEXT_COLOR, |color| color.flatten(BACKDROP))
}

/// Backdrop, then the background bitmap scaled to `area` and composited on top.
fn draw_background<D>(display: &mut D, area: &Rectangle, background: Option<&Bitmap>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let Some(bitmap) = background else {
        return display.fill_solid(area, BACKDROP);
    };

    let width = area.size.width.max(1) as f32;
    let height = area.size.height.max(1) as f32;
    let colors = area.points().map(|p| {
        let local = p - area.top_left;
        let u = (local.x as f32 + 0.5) / width;
        let v = (local.y as f32 + 0.5) / height;
        bitmap.sample(u, v).map_or(BACKDROP, |color| color.flatten(BACKDROP))
    });
    display.fill_contiguous(area, colors)
}

// =============================================================================
// Unit Tests
// =============================================================================
