/// The darken/lighten state machine
///
/// Lighting is an explicit two-state value. The toggle button reads its
/// label from the current state and the display overlay reads its opacity
/// from it; nothing round-trips through widget attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lighting {
    /// The room is dark: the overlay dims the picture at half opacity.
    #[default]
    Dark,
    /// The room is lit: the overlay is fully transparent.
    Light,
}

impl Lighting {
    /// The state one toggle click away.
    pub fn flipped(self) -> Self {
        match self {
            Lighting::Dark => Lighting::Light,
            Lighting::Light => Lighting::Dark,
        }
    }

    /// Label shown on the toggle button. Names the current mode.
    pub fn label(self) -> &'static str {
        match self {
            Lighting::Dark => "dark",
            Lighting::Light => "light",
        }
    }

    /// Alpha of the black overlay drawn over the displayed picture.
    pub fn overlay_alpha(self) -> f32 {
        match self {
            Lighting::Dark => 0.5,
            Lighting::Light => 0.0,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Lighting::Dark)
    }
}
