//! Timing constants for the simulator window.

use std::time::Duration;

/// Event polling interval. The widgets are static, so this only bounds input
/// latency.
pub const FRAME_TIME: Duration = Duration::from_millis(50);
