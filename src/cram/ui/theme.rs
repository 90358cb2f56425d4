use ratatui::style::Color;

/// Palette for one of the two color schemes. Selected per frame from the
/// persisted dark-mode preference.
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub mastered: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::Gray,
            accent: Color::LightCyan,
            muted: Color::DarkGray,
            mastered: Color::LightGreen,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            muted: Color::Gray,
            mastered: Color::Green,
        }
    }

    pub fn select(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}
