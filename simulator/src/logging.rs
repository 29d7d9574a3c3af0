//! Logger setup for the simulator.

use std::env;

use affirmation_common::logging::NAMESPACES;
use log::{LevelFilter, info};

pub const SIMULATOR_NAMESPACE: &str = "affirmation::simulator";

pub fn init_logging() {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder
        .format_timestamp_millis()
        .format_module_path(false)
        .format_target(true)
        .filter(Some(SIMULATOR_NAMESPACE), LevelFilter::Debug);

    // RUST_LOG still wins for explicitly named targets
    if env::var("RUST_LOG").is_err() {
        for namespace in NAMESPACES {
            builder.filter(Some(namespace), LevelFilter::Debug);
        }
    }
    builder.init();

    info!(target: SIMULATOR_NAMESPACE, "Logging initialized");
}

#[macro_export]
macro_rules! sim_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::SIMULATOR_NAMESPACE, $($arg)*)
    };
}
