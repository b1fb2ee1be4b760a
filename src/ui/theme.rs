use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub const ACCENT: Color = Color::Rgb(0x19, 0x76, 0xd2);
pub const WARNING: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const SUCCESS: Color = Color::Rgb(0x22, 0xc5, 0x5e);

/// Light or dark presentation. Only colors change; the text never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                text: Color::Rgb(0x00, 0x00, 0x00),
                background: Color::Rgb(0xff, 0xff, 0xff),
                border: Color::Rgb(0xbd, 0xbd, 0xbd),
                muted: Color::Rgb(0x61, 0x61, 0x61),
            },
            Self::Dark => Palette {
                text: Color::Rgb(0xff, 0xff, 0xff),
                background: Color::Rgb(0x12, 0x12, 0x12),
                border: Color::Rgb(0x40, 0x40, 0x40),
                muted: Color::Rgb(0x9e, 0x9e, 0x9e),
            },
        }
    }
}

/// Colors for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Editor and preview text.
    pub text: Color,
    pub background: Color,
    pub border: Color,
    pub muted: Color,
}
