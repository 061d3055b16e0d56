//! FILENAME: reshape-engine/src/logging.rs
// PURPOSE: Category-tagged log macros over the `log` facade.
// CONTEXT: Every message carries a short category ("RESHAPE", "HOST", ...)
//          used as the log target, so hosts can filter per subsystem.
//          The library never installs a logger; the embedding host does.

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        ::log::debug!(target: $cat, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($cat:expr, $($arg:tt)*) => {
        ::log::info!(target: $cat, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($cat:expr, $($arg:tt)*) => {
        ::log::warn!(target: $cat, $($arg)*)
    };
}
