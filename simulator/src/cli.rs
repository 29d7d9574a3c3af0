//! Command-line arguments.

use std::path::PathBuf;

use affirmation_common::config::layout::BACKGROUND_WIDTH;
use clap::Parser;

/// Render the affirmation widgets from a store snapshot.
#[derive(Parser, Debug)]
#[command(name = "simulator")]
#[command(about = "Desktop preview of the affirmation home-screen widgets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// YAML map of store keys to values (empty store when omitted)
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// YAML theme configuration (built-in theme when omitted)
    #[arg(long, value_name = "FILE")]
    pub theme: Option<PathBuf>,

    /// Widget instance ids to update, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [1, 2])]
    pub ids: Vec<i32>,

    /// Edge length of the rasterized background in pixels
    #[arg(long, default_value_t = BACKGROUND_WIDTH)]
    pub background_size: u32,

    /// Write the preview to a PNG file instead of opening a window
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,
}
