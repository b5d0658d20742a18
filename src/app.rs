/// The gallery application
///
/// State, messages, and the update/view pair, wired the same way the rest
/// of the crate expects: thumbnail clicks select a picture, the toggle
/// button flips the lighting, Open Folder swaps the whole gallery.
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;

use crate::gallery::{self, GalleryConfig, Lighting};
use crate::loader::{self, DecodedBatch};
use crate::ui;

/// What the main display is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Displayed {
    /// Index of the selected entry
    pub index: usize,
    /// Full path of the picture file
    pub source: PathBuf,
    /// Alternative text describing the picture
    pub alt: String,
}

/// Main application state
pub struct Lightbox {
    /// The gallery currently on screen
    gallery: GalleryConfig,
    /// Decoded thumbnails, positionally aligned with the gallery entries
    thumbnails: Vec<Option<Handle>>,
    /// What the main display shows
    displayed: Option<Displayed>,
    /// Room lighting, flipped by the darken/lighten button
    lighting: Lighting,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked thumbnail `index` in the strip
    ThumbnailClicked(usize),
    /// User clicked the darken/lighten button
    ToggleLighting,
    /// User clicked the "Open Folder" button
    OpenFolder,
    /// Background gallery load completed
    GalleryLoaded(Result<GalleryConfig, String>),
    /// Background thumbnail decoding completed
    ThumbnailsDecoded(Result<DecodedBatch, String>),
}

impl Lightbox {
    /// Create the initial state and kick off thumbnail decoding.
    ///
    /// A missing or empty default directory is not fatal: the app starts
    /// on the built-in picture list and says so in the status line.
    pub fn new() -> (Self, Task<Message>) {
        let (gallery, status) = match GalleryConfig::load(Path::new(gallery::DEFAULT_ROOT)) {
            Ok(gallery) => {
                let status = format!("Ready. {} pictures in gallery.", gallery.len());
                (gallery, status)
            }
            Err(e) => {
                tracing::warn!(error = %e, "falling back to the built-in picture list");
                (
                    GalleryConfig::default_pictures(),
                    format!("Using the built-in picture list ({})", e),
                )
            }
        };

        tracing::info!(
            pictures = gallery.len(),
            root = %gallery.root().display(),
            "gallery initialized"
        );

        let app = Self::with_gallery(gallery, status);
        let decode = Task::perform(
            loader::decode_thumbnails(app.gallery.clone()),
            Message::ThumbnailsDecoded,
        );

        (app, decode)
    }

    /// Build state around a gallery with the first picture selected.
    fn with_gallery(gallery: GalleryConfig, status: String) -> Self {
        let mut app = Lightbox {
            thumbnails: vec![None; gallery.len()],
            gallery,
            displayed: None,
            lighting: Lighting::default(),
            status,
        };
        app.select(0);
        app
    }

    /// Point the main display at entry `index`.
    ///
    /// Out-of-range indices are ignored, so a stale click can never leave
    /// the display in a broken state.
    fn select(&mut self, index: usize) {
        let Some(entry) = self.gallery.entry(index) else {
            return;
        };
        let Some(source) = self.gallery.source_path(index) else {
            return;
        };

        self.displayed = Some(Displayed {
            index,
            source,
            alt: entry.alt.clone(),
        });
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThumbnailClicked(index) => {
                self.select(index);

                if let Some(shown) = self.displayed.as_ref().filter(|d| d.index == index) {
                    self.status = format!("Showing {}", shown.alt);
                    tracing::debug!(index, alt = %shown.alt, "thumbnail selected");
                }

                Task::none()
            }

            Message::ToggleLighting => {
                self.lighting = self.lighting.flipped();
                tracing::debug!(mode = self.lighting.label(), "lighting flipped");
                Task::none()
            }

            Message::OpenFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select a Folder of Pictures")
                    .pick_folder();

                if let Some(folder) = folder {
                    self.status = format!("Loading {}...", folder.display());
                    return Task::perform(load_gallery_async(folder), Message::GalleryLoaded);
                }

                Task::none()
            }

            Message::GalleryLoaded(Ok(gallery)) => {
                self.status = format!(
                    "{} pictures loaded from {}",
                    gallery.len(),
                    gallery.root().display()
                );
                self.thumbnails = vec![None; gallery.len()];
                self.gallery = gallery;
                self.displayed = None;
                self.select(0);

                Task::perform(
                    loader::decode_thumbnails(self.gallery.clone()),
                    Message::ThumbnailsDecoded,
                )
            }

            Message::GalleryLoaded(Err(e)) => {
                tracing::warn!(error = %e, "gallery load failed");
                self.status = format!("Could not load folder: {}", e);
                Task::none()
            }

            Message::ThumbnailsDecoded(Ok(batch)) => {
                // A decode can outlive a gallery swap; drop stale results.
                if batch.root != self.gallery.root() {
                    tracing::debug!(root = %batch.root.display(), "discarding stale thumbnail batch");
                    return Task::none();
                }

                for thumbnail in batch.thumbnails {
                    if let Some(slot) = self.thumbnails.get_mut(thumbnail.index) {
                        *slot = Some(thumbnail.handle);
                    }
                }

                Task::none()
            }

            Message::ThumbnailsDecoded(Err(e)) => {
                tracing::warn!(error = %e, "thumbnail decoding failed");
                self.status = format!("Could not decode thumbnails: {}", e);
                Task::none()
            }
        }
    }

    /// Build the user interface
    pub fn view(&self) -> Element<Message> {
        let toggle = button(text(self.lighting.label()))
            .on_press(Message::ToggleLighting)
            .padding(10);

        let open = button("Open Folder")
            .on_press(Message::OpenFolder)
            .padding(10);

        let controls = row![toggle, open, text(&self.status).size(14)]
            .spacing(12)
            .align_y(Alignment::Center);

        let content = column![
            ui::display::view(self.displayed.as_ref(), self.lighting),
            controls,
            ui::thumb_bar::view(
                &self.gallery,
                &self.thumbnails,
                self.displayed.as_ref().map(|shown| shown.index),
            ),
        ]
        .spacing(16)
        .padding(20);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// The widget theme follows the lighting mode.
    pub fn theme(&self) -> Theme {
        if self.lighting.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Load a gallery configuration from `folder` off the UI thread.
async fn load_gallery_async(folder: PathBuf) -> Result<GalleryConfig, String> {
    tokio::task::spawn_blocking(move || GalleryConfig::load(&folder).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::DecodedThumbnail;

    fn app_with_default_pictures() -> Lightbox {
        Lightbox::with_gallery(GalleryConfig::default_pictures(), String::new())
    }

    fn test_handle() -> Handle {
        Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn test_first_picture_is_selected_at_startup() {
        let app = app_with_default_pictures();

        let shown = app.displayed.as_ref().unwrap();
        assert_eq!(shown.index, 0);
        assert_eq!(shown.alt, "Closeup of a human eye");
    }

    #[test]
    fn test_clicking_a_thumbnail_updates_the_display() {
        let mut app = app_with_default_pictures();

        let _ = app.update(Message::ThumbnailClicked(2));

        let shown = app.displayed.as_ref().unwrap();
        assert_eq!(shown.index, 2);
        assert_eq!(shown.source, PathBuf::from("images").join("pic3.jpg"));
        assert_eq!(shown.alt, "Purple and white pansies");
    }

    #[test]
    fn test_reclicking_the_same_thumbnail_changes_nothing() {
        let mut app = app_with_default_pictures();

        let _ = app.update(Message::ThumbnailClicked(2));
        let before = app.displayed.clone();

        let _ = app.update(Message::ThumbnailClicked(2));

        assert_eq!(app.displayed, before);
    }

    #[test]
    fn test_out_of_range_click_is_ignored() {
        let mut app = app_with_default_pictures();
        let before = app.displayed.clone();

        let _ = app.update(Message::ThumbnailClicked(99));

        assert_eq!(app.displayed, before);
    }

    #[test]
    fn test_toggle_cycles_dark_light_dark() {
        let mut app = app_with_default_pictures();
        assert_eq!(app.lighting, Lighting::Dark);

        let _ = app.update(Message::ToggleLighting);
        assert_eq!(app.lighting, Lighting::Light);
        assert_eq!(app.lighting.overlay_alpha(), 0.0);

        let _ = app.update(Message::ToggleLighting);
        assert_eq!(app.lighting, Lighting::Dark);
        assert_eq!(app.lighting.overlay_alpha(), 0.5);
    }

    #[test]
    fn test_decoded_thumbnails_fill_their_slots() {
        let mut app = app_with_default_pictures();

        let batch = DecodedBatch {
            root: app.gallery.root().to_path_buf(),
            thumbnails: vec![DecodedThumbnail {
                index: 1,
                handle: test_handle(),
            }],
        };
        let _ = app.update(Message::ThumbnailsDecoded(Ok(batch)));

        assert!(app.thumbnails[0].is_none());
        assert!(app.thumbnails[1].is_some());
    }

    #[test]
    fn test_stale_thumbnail_batch_is_discarded() {
        let mut app = app_with_default_pictures();

        let batch = DecodedBatch {
            root: PathBuf::from("somewhere-else"),
            thumbnails: vec![DecodedThumbnail {
                index: 0,
                handle: test_handle(),
            }],
        };
        let _ = app.update(Message::ThumbnailsDecoded(Ok(batch)));

        assert!(app.thumbnails.iter().all(Option::is_none));
    }

    #[test]
    fn test_loading_a_gallery_resets_selection_and_thumbnails() {
        let mut app = app_with_default_pictures();
        let _ = app.update(Message::ThumbnailClicked(3));

        let swapped = GalleryConfig::new(
            "elsewhere",
            vec![
                crate::gallery::ImageEntry::new("one.png", "first of two"),
                crate::gallery::ImageEntry::new("two.png", "second of two"),
            ],
        );
        let _ = app.update(Message::GalleryLoaded(Ok(swapped)));

        let shown = app.displayed.as_ref().unwrap();
        assert_eq!(shown.index, 0);
        assert_eq!(shown.alt, "first of two");
        assert_eq!(app.thumbnails.len(), 2);
        assert!(app.thumbnails.iter().all(Option::is_none));
    }

    #[test]
    fn test_failed_load_keeps_the_current_gallery() {
        let mut app = app_with_default_pictures();
        let before = app.displayed.clone();

        let _ = app.update(Message::GalleryLoaded(Err("boom".to_string())));

        assert_eq!(app.displayed, before);
        assert_eq!(app.gallery.len(), 5);
        assert!(app.status.contains("boom"));
    }
}
