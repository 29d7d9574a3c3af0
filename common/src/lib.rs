//! Home-screen widgets for the affirmations app.
//!
//! This crate contains the platform-agnostic widget logic shared between the
//! desktop simulator and the launcher integration:
//!
//! - [`widgets`]: The text-only and decorated widget renderers
//! - [`host`]: Update-batch dispatch with per-instance fault isolation
//! - [`view`]: View templates handed to the launcher
//! - [`bitmap`]: ARGB raster the backgrounds are drawn into
//! - [`colors`]: ARGB color type and color-string parsing
//! - [`persona`]: Persona status captions
//! - [`store`]: Read-only access to the app's shared key/value store
//! - [`config`]: Layout constants, store keys and theme configuration
//! - [`preview`]: Approximate layout drawing for the simulator
//! - [`error`]: Error types
//! - [`logging`]: Log targets and macros
//!
//! # Rendering Model
//!
//! The launcher calls in with a batch of widget ids. Each id is rendered by a
//! pure function of the current store contents:
//!
//! ```text
//! store ──read──> renderer ──ViewTemplate──> host.update_widget(id, view)
//! ```
//!
//! Nothing is cached between updates, so rendering twice with an unchanged
//! store yields identical templates.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod logging;

pub mod bitmap;
pub mod colors;
pub mod config;
pub mod error;
pub mod host;
pub mod persona;
pub mod preview;
pub mod store;
pub mod view;
pub mod widgets;

// Re-export commonly used items
pub use bitmap::Bitmap;
pub use colors::{Argb8888, parse_color};
pub use config::{BackgroundStyle, ThemeConfig};
pub use error::{ConfigError, DecorationError};
pub use host::{RecordingHost, UpdateSummary, WidgetHost, WidgetInstanceId, dispatch_update};
pub use store::{MemoryStore, PreferenceStore};
pub use view::{LayoutId, TextFieldId, ViewTemplate};
pub use widgets::{DecoratedWidgetRenderer, TextWidgetRenderer, WidgetProvider};
