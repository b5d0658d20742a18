/// lightbox: a simple native image gallery viewer
///
/// The `lightbox` binary shows a thumbnail strip, a main display for the
/// selected picture, and a darken/lighten toggle. The `clicker` binary is
/// the button demo that grew into it.
pub mod app;
pub mod clicker;
pub mod gallery;
pub mod loader;
pub mod ui;

/// Install the global tracing subscriber, honoring `RUST_LOG`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
