/// The clickable thumbnail strip
///
/// Each thumbnail emits its own message carrying its entry index; clicks
/// on the strip background produce no message at all, so they cannot
/// corrupt the display.
use iced::widget::image::Handle;
use iced::widget::{container, image, mouse_area, row, scrollable, text, tooltip};
use iced::{Border, ContentFit, Element, Length, Theme};

use crate::app::Message;
use crate::gallery::GalleryConfig;

/// Edge length of a thumbnail slot in logical pixels
const THUMB_SIZE: f32 = 96.0;

/// Build the thumbnail strip.
///
/// `thumbnails` is positionally aligned with the gallery entries; a slot
/// that has not decoded yet (or failed to) shows its alt text instead.
pub fn view<'a>(
    gallery: &'a GalleryConfig,
    thumbnails: &'a [Option<Handle>],
    selected: Option<usize>,
) -> Element<'a, Message> {
    let slots = gallery.entries().iter().enumerate().map(|(index, entry)| {
        let thumb: Element<'a, Message> = match thumbnails.get(index).and_then(Option::as_ref) {
            Some(handle) => image(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(THUMB_SIZE)
                .height(THUMB_SIZE)
                .into(),
            None => container(text(entry.alt.as_str()).size(12))
                .width(THUMB_SIZE)
                .height(THUMB_SIZE)
                .padding(6)
                .style(container::rounded_box)
                .into(),
        };

        // Outline the slot the main display is showing.
        let framed = container(thumb).style(move |theme: &Theme| {
            if selected == Some(index) {
                container::Style {
                    border: Border {
                        color: theme.palette().primary,
                        width: 2.0,
                        radius: 2.0.into(),
                    },
                    ..container::Style::default()
                }
            } else {
                container::Style::default()
            }
        });

        let hint = container(text(entry.alt.as_str()).size(12))
            .padding(6)
            .style(container::rounded_box);

        tooltip(
            mouse_area(framed).on_press(Message::ThumbnailClicked(index)),
            hint,
            tooltip::Position::Bottom,
        )
        .into()
    });

    scrollable(row(slots).spacing(8).padding(6))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new(),
        ))
        .width(Length::Fill)
        .into()
}
