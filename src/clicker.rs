/// The button demo window
///
/// A handful of identical buttons; every click appends one paragraph with
/// fixed text to the list below them. Nothing is ever deduplicated or
/// removed, the list only grows.
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

/// Text of every appended paragraph
const PARAGRAPH_TEXT: &str = "You clicked the button!";

/// How many identical buttons the window shows
const BUTTON_COUNT: usize = 3;

/// Demo state: the paragraphs accumulated so far.
#[derive(Debug, Default)]
pub struct Clicker {
    paragraphs: Vec<&'static str>,
}

/// Demo messages (events)
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// One of the buttons was pressed. Which one does not matter.
    Pressed,
}

impl Clicker {
    /// Handle demo messages and update state
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Pressed => {
                self.paragraphs.push(PARAGRAPH_TEXT);
                tracing::debug!(paragraphs = self.paragraphs.len(), "button pressed");
            }
        }
    }

    /// Build the demo interface
    pub fn view(&self) -> Element<Message> {
        let buttons = row((0..BUTTON_COUNT).map(|_| {
            button("Click me!")
                .on_press(Message::Pressed)
                .padding(10)
                .into()
        }))
        .spacing(12);

        let paragraphs = column(
            self.paragraphs
                .iter()
                .map(|paragraph| text(*paragraph).size(16).into()),
        )
        .spacing(6);

        let content = column![
            buttons,
            scrollable(paragraphs).width(Length::Fill).height(Length::Fill),
        ]
        .spacing(20)
        .padding(30)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// The paragraphs appended so far, oldest first.
    pub fn paragraphs(&self) -> &[&'static str] {
        &self.paragraphs
    }
}
