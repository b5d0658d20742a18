use lightbox::app::Lightbox;

fn main() -> iced::Result {
    lightbox::init_tracing();

    iced::application("Lightbox", Lightbox::update, Lightbox::view)
        .theme(Lightbox::theme)
        .centered()
        .run_with(Lightbox::new)
}
