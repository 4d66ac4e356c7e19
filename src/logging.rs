//! Log output for the `items` binary.

/// Install the global `tracing` subscriber.
///
/// The level is fixed at INFO; the binary reads no environment variables.
/// Safe to call more than once (later calls are ignored).
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .try_init();
}
