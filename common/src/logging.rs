//! Log targets and convenience macros.
//!
//! The library only emits records through the `log` facade. Binaries decide
//! where they go (the simulator installs `env_logger`).

pub const WIDGETS_NAMESPACE: &str = "affirmation::widgets";
pub const HOST_NAMESPACE: &str = "affirmation::host";
pub const CONFIG_NAMESPACE: &str = "affirmation::config";

/// All targets used by this crate, for filter setup.
pub const NAMESPACES: [&str; 3] = [WIDGETS_NAMESPACE, HOST_NAMESPACE, CONFIG_NAMESPACE];

#[macro_export]
macro_rules! widgets_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::WIDGETS_NAMESPACE, $($arg)*)
    };
}

#[macro_export]
macro_rules! host_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::HOST_NAMESPACE, $($arg)*)
    };
}

#[macro_export]
macro_rules! config_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::CONFIG_NAMESPACE, $($arg)*)
    };
}
