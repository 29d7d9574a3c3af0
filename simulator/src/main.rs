//! Affirmation widget simulator for desktop platforms.
//!
//! Runs one launcher update cycle through both widget renderers and shows the
//! resulting views side by side, using the embedded-graphics-simulator crate.
//!
//! Keys in the window:
//! - `R`: reload the store and theme files and run a new update cycle
//! - `Esc`: quit

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod cli;
mod logging;
mod timing;

use std::thread;
use std::time::Instant;

use affirmation_common::config::layout::{PREVIEW_GAP, PREVIEW_LARGE_SIZE, PREVIEW_STANDARD_HEIGHT};
use affirmation_common::preview::draw_preview;
use affirmation_common::{
    DecoratedWidgetRenderer,
    MemoryStore,
    RecordingHost,
    TextWidgetRenderer,
    ThemeConfig,
    WidgetInstanceId,
    dispatch_update,
};
use anyhow::{Context, Result};
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::Level::{Info, Warn};

use crate::cli::Cli;
use crate::timing::FRAME_TIME;

/// Area around and between preview cells.
const SCREEN_BACKGROUND: Rgb888 = Rgb888::new(0x0A, 0x0A, 0x0C);

/// Views produced by one update cycle.
struct UpdateCycle {
    standard: RecordingHost,
    large: RecordingHost,
}

fn main() -> Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    let ids: Vec<WidgetInstanceId> = cli.ids.iter().copied().map(WidgetInstanceId).collect();
    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(screen_size(ids.len()));

    let cycle = run_update_cycle(&cli, &ids)?;
    draw_cycle(&mut display, &cycle);

    if let Some(path) = &cli.png {
        let output_settings = OutputSettingsBuilder::new().scale(1).build();
        display
            .to_rgb_output_image(&output_settings)
            .save_png(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        sim_log!(Info, "Preview written to {}", path.display());
        return Ok(());
    }

    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Affirmation Widgets Sim", &output_settings);
    window.update(&display);

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => return Ok(()),
                        Keycode::R => match run_update_cycle(&cli, &ids) {
                            Ok(cycle) => draw_cycle(&mut display, &cycle),
                            // Keep showing the previous views, like the launcher would
                            Err(err) => sim_log!(Warn, "Reload failed: {err:#}"),
                        },
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

/// Load inputs and dispatch one update batch to each widget kind.
fn run_update_cycle(cli: &Cli, ids: &[WidgetInstanceId]) -> Result<UpdateCycle> {
    let store = match &cli.store {
        Some(path) => MemoryStore::from_yaml_file(path).context("loading store snapshot")?,
        None => MemoryStore::new(),
    };
    let theme = match &cli.theme {
        Some(path) => ThemeConfig::from_yaml_file(path).context("loading theme")?,
        None => ThemeConfig::default(),
    };

    let decorated = DecoratedWidgetRenderer::new(theme).with_size(cli.background_size, cli.background_size);

    let mut cycle = UpdateCycle {
        standard: RecordingHost::new(),
        large: RecordingHost::new(),
    };
    let standard = dispatch_update(&TextWidgetRenderer::new(), &store, &mut cycle.standard, ids);
    let large = dispatch_update(&decorated, &store, &mut cycle.large, ids);
    sim_log!(
        Info,
        "Update cycle: {} standard, {} large ({} skipped)",
        standard.updated,
        large.updated,
        standard.skipped + large.skipped
    );
    Ok(cycle)
}

/// Standard widgets on the top row, large widgets below, one column per id.
fn draw_cycle(display: &mut SimulatorDisplay<Rgb888>, cycle: &UpdateCycle) {
    display.clear(SCREEN_BACKGROUND).ok();

    let column = (PREVIEW_LARGE_SIZE + PREVIEW_GAP) as i32;
    let gap = PREVIEW_GAP as i32;
    let large_top = gap * 2 + PREVIEW_STANDARD_HEIGHT as i32;

    for (i, (_, view)) in cycle.standard.views().enumerate() {
        draw_preview(display, view, Point::new(gap + column * i as i32, gap)).ok();
    }
    for (i, (_, view)) in cycle.large.views().enumerate() {
        draw_preview(display, view, Point::new(gap + column * i as i32, large_top)).ok();
    }
}

fn screen_size(columns: usize) -> Size {
    let columns = columns.max(1) as u32;
    Size::new(
        PREVIEW_GAP + columns * (PREVIEW_LARGE_SIZE + PREVIEW_GAP),
        PREVIEW_GAP * 3 + PREVIEW_STANDARD_HEIGHT + PREVIEW_LARGE_SIZE,
    )
}
