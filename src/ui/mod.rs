/// UI building blocks for the gallery window
///
/// - `display.rs` - the selected picture under the lighting overlay
/// - `thumb_bar.rs` - the clickable thumbnail strip
pub mod display;
pub mod thumb_bar;
