//! End-to-end renderer behavior against an in-memory store.

use affirmation_common::config::keys;
use affirmation_common::widgets::render_background;
use affirmation_common::{
    Argb8888,
    BackgroundStyle,
    DecoratedWidgetRenderer,
    LayoutId,
    MemoryStore,
    RecordingHost,
    TextFieldId,
    TextWidgetRenderer,
    ThemeConfig,
    WidgetInstanceId,
    WidgetProvider,
    dispatch_update,
};

const ID: WidgetInstanceId = WidgetInstanceId(11);

const PRIMARY: Argb8888 = Argb8888::opaque(0x11, 0x11, 0x11);
const SECONDARY: Argb8888 = Argb8888::opaque(0xF5, 0xE6, 0x42);
const TERTIARY: Argb8888 = Argb8888::opaque(0x20, 0x40, 0xFF);

fn themed_store(theme_name: &str) -> MemoryStore {
    MemoryStore::new()
        .with(keys::AFFIRMATION_TEXT, "I ship, therefore I am.")
        .with(keys::PERSONA_NAME, "Builder")
        .with(keys::THEME_TEXT_COLOR, "#111111")
        .with(keys::THEME_COLOR_START, "#F5E642")
        .with(keys::THEME_COLOR_END, "#2040FF")
        .with(keys::THEME_NAME, theme_name)
}

fn close(a: Argb8888, b: Argb8888, tolerance: i32) -> bool {
    let channels = |c: Argb8888| [c.a(), c.r(), c.g(), c.b()].map(i32::from);
    channels(a).iter().zip(channels(b)).all(|(x, y)| (x - y).abs() <= tolerance)
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_text_widget_empty_store() {
    let view = TextWidgetRenderer::new().render(&MemoryStore::new(), ID);
    assert_eq!(view.text(TextFieldId::Text), Some("Open app to load affirmation"));
}

#[test]
fn test_null_store_values_fall_back_to_defaults() {
    let store = MemoryStore::from_yaml_str("affirmation_text: ~\npersona_name: ~\n").unwrap();
    let text = TextWidgetRenderer::new().render(&store, ID);
    assert_eq!(text.text(TextFieldId::Text), Some("Open app to load affirmation"));

    let view = DecoratedWidgetRenderer::default().render(&store, ID);
    assert_eq!(view.text(TextFieldId::Text), Some("Open app to load affirmation"));
    assert_eq!(view.text(TextFieldId::Persona), Some("FROM DELUSIONS"));
}

#[test]
fn test_decorated_widget_empty_store_defaults() {
    let view = DecoratedWidgetRenderer::default().render(&MemoryStore::new(), ID);
    assert_eq!(view.layout(), LayoutId::Large);
    assert_eq!(view.text(TextFieldId::Text), Some("Open app to load affirmation"));
    assert_eq!(view.text(TextFieldId::Persona), Some("FROM DELUSIONS"));
    assert_eq!(view.text(TextFieldId::Footer), Some("STAY DELUSIONAL"));
}

// =============================================================================
// Persona Captions
// =============================================================================

#[test]
fn test_persona_lookup_is_case_insensitive() {
    let renderer = DecoratedWidgetRenderer::default();
    for name in ["Overthinker", "OVERTHINKER", "overthinker"] {
        let store = MemoryStore::new().with(keys::PERSONA_NAME, name);
        let view = renderer.render(&store, ID);
        assert_eq!(view.text(TextFieldId::Footer), Some("ANALYZING VOID..."), "{name}");
    }

    let store = MemoryStore::new().with(keys::PERSONA_NAME, "unknown-persona");
    assert_eq!(renderer.render(&store, ID).text(TextFieldId::Footer), Some("STAY DELUSIONAL"));
}

#[test]
fn test_persona_line_keeps_original_casing() {
    let view = DecoratedWidgetRenderer::default().render(&themed_store("gradient"), ID);
    assert_eq!(view.text(TextFieldId::Persona), Some("FROM Builder"));
    assert_eq!(view.text(TextFieldId::Footer), Some("SHIPPING BUGS..."));
}

// =============================================================================
// Backgrounds
// =============================================================================

#[test]
fn test_brutalist_background() {
    let view = DecoratedWidgetRenderer::default().render(&themed_store("brutalist"), ID);
    for id in TextFieldId::ALL {
        assert_eq!(view.text_color(id), Some(PRIMARY));
    }

    let bg = view.background().expect("brutalist background");
    assert_eq!((bg.width(), bg.height()), (600, 600));

    // Square corners: the border reaches the very edge
    for (x, y) in [(0, 0), (599, 0), (0, 599), (599, 599), (11, 300), (300, 11), (588, 300), (300, 588)] {
        assert_eq!(bg.pixel(x, y), Some(PRIMARY), "border at ({x}, {y})");
    }
    // Flat block, no gradient
    for (x, y) in [(12, 12), (587, 12), (12, 587), (587, 587), (300, 300)] {
        assert_eq!(bg.pixel(x, y), Some(SECONDARY), "block at ({x}, {y})");
    }

    let distinct: std::collections::HashSet<_> = bg.pixels().iter().copied().collect();
    assert_eq!(distinct.len(), 2, "exactly two tones");
}

#[test]
fn test_gradient_background() {
    let view = DecoratedWidgetRenderer::default().render(&themed_store("gradient"), ID);
    let bg = view.background().expect("gradient background");

    // Rounded corners stay transparent
    for (x, y) in [(0, 0), (599, 0), (0, 599), (599, 599), (5, 5)] {
        assert_eq!(bg.pixel(x, y), Some(Argb8888::TRANSPARENT), "corner at ({x}, {y})");
    }

    // Corner arcs are anti-aliased
    assert!(bg.pixels().iter().any(|p| p.a() > 0 && p.a() < 0xFF));

    // Straight edges are filled
    assert_ne!(bg.pixel(300, 0), Some(Argb8888::TRANSPARENT));
    assert_ne!(bg.pixel(0, 300), Some(Argb8888::TRANSPARENT));

    // Start color near the top-left, end color near the bottom-right
    assert!(close(bg.pixel(60, 60).unwrap(), SECONDARY.lerp(TERTIARY, 0.1), 2));
    assert!(close(bg.pixel(30, 30).unwrap(), SECONDARY, 20));
    assert!(close(bg.pixel(569, 569).unwrap(), TERTIARY, 20));
    assert!(close(bg.pixel(299, 299).unwrap(), SECONDARY.lerp(TERTIARY, 0.5), 2));

    // Diagonal: constant along anti-diagonals
    assert_eq!(bg.pixel(400, 200), bg.pixel(200, 400));
}

#[test]
fn test_any_other_theme_name_is_gradient() {
    let renderer = DecoratedWidgetRenderer::default();
    let gradient = renderer.render(&themed_store("gradient"), ID);
    for name in ["neon", "", "BRUTALIST"] {
        let view = renderer.render(&themed_store(name), ID);
        assert_eq!(view.background(), gradient.background(), "{name:?}");
    }
}

#[test]
fn test_render_background_matches_renderer() {
    let view = DecoratedWidgetRenderer::default().render(&themed_store("brutalist"), ID);
    let palette = affirmation_common::widgets::Palette {
        text: PRIMARY,
        start: SECONDARY,
        end: TERTIARY,
    };
    let direct = render_background(embedded_graphics::prelude::Size::new(600, 600), BackgroundStyle::Brutalist, &palette).unwrap();
    assert_eq!(view.background(), Some(&direct));
}

// =============================================================================
// Malformed Colors
// =============================================================================

#[test]
fn test_invalid_primary_color_skips_decoration() {
    let store = themed_store("brutalist").with(keys::THEME_TEXT_COLOR, "not-a-color");
    let view = DecoratedWidgetRenderer::default().render(&store, ID);

    assert_eq!(view.text(TextFieldId::Text), Some("I ship, therefore I am."));
    assert_eq!(view.text(TextFieldId::Persona), Some("FROM Builder"));
    assert_eq!(view.text(TextFieldId::Footer), Some("SHIPPING BUGS..."));
    for id in TextFieldId::ALL {
        assert_eq!(view.text_color(id), None, "{id:?} keeps layout color");
    }
    assert!(view.background().is_none());
}

#[test]
fn test_invalid_end_color_skips_even_for_brutalist() {
    let store = themed_store("brutalist").with(keys::THEME_COLOR_END, "#12345");
    let view = DecoratedWidgetRenderer::default().render(&store, ID);
    assert!(view.background().is_none());
    assert_eq!(view.text_color(TextFieldId::Text), None);
}

#[test]
fn test_invalid_config_color_is_overridden_by_store() {
    let theme = ThemeConfig {
        text_color: "bogus".into(),
        ..ThemeConfig::default()
    };
    let renderer = DecoratedWidgetRenderer::new(theme);
    assert!(renderer.render(&MemoryStore::new(), ID).background().is_none());
    assert!(renderer.render(&themed_store("gradient"), ID).background().is_some());
}

// =============================================================================
// Idempotence & Dispatch
// =============================================================================

#[test]
fn test_rendering_is_idempotent() {
    let renderer = DecoratedWidgetRenderer::default();
    for name in ["brutalist", "gradient"] {
        let store = themed_store(name);
        assert_eq!(renderer.render(&store, ID), renderer.render(&store, ID), "{name}");
    }
    let text = TextWidgetRenderer::new();
    assert_eq!(text.render(&MemoryStore::new(), ID), text.render(&MemoryStore::new(), ID));
}

#[test]
fn test_instance_id_does_not_change_output() {
    let renderer = DecoratedWidgetRenderer::default();
    let store = themed_store("gradient");
    assert_eq!(renderer.render(&store, WidgetInstanceId(1)), renderer.render(&store, WidgetInstanceId(2)));
}

#[test]
fn test_dispatch_batch_through_both_renderers() {
    let store = themed_store("brutalist");
    let mut text_host = RecordingHost::new();
    let mut large_host = RecordingHost::new();
    let ids = [WidgetInstanceId(1), WidgetInstanceId(2)];

    let text_summary = dispatch_update(&TextWidgetRenderer::new(), &store, &mut text_host, &ids);
    let large_summary = dispatch_update(&DecoratedWidgetRenderer::default(), &store, &mut large_host, &ids);

    assert_eq!(text_summary.updated, 2);
    assert_eq!(large_summary.updated, 2);
    for id in ids {
        assert_eq!(text_host.view(id).unwrap().layout(), LayoutId::Standard);
        assert!(large_host.view(id).unwrap().background().is_some());
    }
}
