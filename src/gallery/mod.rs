/// Gallery domain module
///
/// This module holds everything the viewer needs to know about a gallery,
/// independent of any widget:
/// - Configuration and the picture list (config.rs)
/// - Error taxonomy (error.rs)
/// - The darken/lighten state machine (lighting.rs)
/// - Directory scanning for picture files (scan.rs)
pub mod config;
pub mod error;
pub mod lighting;
pub mod scan;

pub use config::{GalleryConfig, ImageEntry, DEFAULT_ROOT};
pub use error::GalleryError;
pub use lighting::Lighting;
