//! Logging setup for hosts that do not install their own logger.

/// Installs `env_logger` as the `log` backend.
///
/// Safe to call more than once; later calls and calls after the host
/// installed another logger are ignored. Filtering follows `RUST_LOG`.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::info!("animcam logging initialized");
    }
}
