//! Error types.
//!
//! Rendering never fails from the caller's point of view: a
//! [`DecorationError`] is handled inside the decorated renderer by dropping
//! the background and text colors. [`ConfigError`] is returned by the YAML
//! loaders used by the simulator and tests.

use std::path::PathBuf;

use thiserror::Error;

/// Which theme color a malformed value was configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Text,
    Start,
    End,
}

impl core::fmt::Display for ColorRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Text => "text color",
            Self::Start => "start color",
            Self::End => "end color",
        })
    }
}

/// Reasons the background decoration of a widget was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecorationError {
    #[error("malformed {role}: {value:?}")]
    MalformedColor { role: ColorRole, value: String },

    #[error("background canvas has no pixels ({width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("background rasterizer panicked")]
    RasterFault,
}

/// Failure to load a theme or store snapshot.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
