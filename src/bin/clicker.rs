use lightbox::clicker::Clicker;

fn main() -> iced::Result {
    lightbox::init_tracing();

    iced::application("Clicker", Clicker::update, Clicker::view)
        .window_size(iced::Size::new(420.0, 560.0))
        .centered()
        .run()
}
