/// The main display
///
/// Shows the selected picture with its alt text as a caption. A black
/// layer stacked over the picture takes its opacity from the lighting
/// state, which is what darkens the room.
use iced::widget::{column, container, image, stack, text, Space};
use iced::{Alignment, Background, Color, ContentFit, Element, Length};

use crate::app::{Displayed, Message};
use crate::gallery::Lighting;

/// Height of the main display area in logical pixels
const DISPLAY_HEIGHT: f32 = 480.0;

/// Build the main display for the currently selected picture.
pub fn view<'a>(displayed: Option<&'a Displayed>, lighting: Lighting) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match displayed {
        Some(shown) => image(image::Handle::from_path(&shown.source))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(DISPLAY_HEIGHT))
            .into(),
        None => container(text("No picture selected").size(20))
            .center_x(Length::Fill)
            .center_y(DISPLAY_HEIGHT)
            .into(),
    };

    let alpha = lighting.overlay_alpha();
    let overlay = container(Space::new(Length::Fill, Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, alpha))),
            ..container::Style::default()
        });

    let lit = stack![picture, overlay]
        .width(Length::Fill)
        .height(DISPLAY_HEIGHT);

    let caption = text(displayed.map_or("", |shown| shown.alt.as_str())).size(14);

    column![lit, caption]
        .spacing(8)
        .align_x(Alignment::Center)
        .into()
}
