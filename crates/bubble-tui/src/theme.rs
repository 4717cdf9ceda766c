use clap::ValueEnum;
use crossterm::style::Color;

/// Selectable color themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
    HighContrast,
}

impl ThemeName {
    /// The theme after this one, wrapping around
    pub fn next(self) -> Self {
        match self {
            ThemeName::Dark => ThemeName::Light,
            ThemeName::Light => ThemeName::HighContrast,
            ThemeName::HighContrast => ThemeName::Dark,
        }
    }
}

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: ThemeName,
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Box outline color
    pub border: Color,
    /// Resting box fill
    pub box_fill: Color,
    /// Fill of a box in the pending selection
    pub box_selected: Color,
    /// Flash color for a rejected pair
    pub box_error: Color,
    /// Fill once the row is sorted
    pub box_success: Color,
    /// Number printed inside a box
    pub box_text: Color,
    /// Title color
    pub title: Color,
    /// Counter/info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            name: ThemeName::Dark,
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            box_fill: Color::Rgb { r: 60, g: 80, b: 120 },
            box_selected: Color::Rgb { r: 110, g: 140, b: 200 },
            box_error: Color::Rgb { r: 200, g: 60, b: 40 },
            box_success: Color::Rgb { r: 30, g: 150, b: 50 },
            box_text: Color::Rgb { r: 255, g: 255, b: 255 },
            title: Color::Rgb { r: 80, g: 180, b: 255 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme, the classic widget palette
    pub fn light() -> Self {
        Self {
            name: ThemeName::Light,
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            box_fill: Color::Rgb { r: 179, g: 199, b: 239 },
            box_selected: Color::Rgb { r: 126, g: 147, b: 188 },
            box_error: Color::Rgb { r: 173, g: 50, b: 22 },
            box_success: Color::Rgb { r: 14, g: 142, b: 22 },
            box_text: Color::Rgb { r: 20, g: 20, b: 30 },
            title: Color::Rgb { r: 30, g: 100, b: 200 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            name: ThemeName::HighContrast,
            bg: Color::Black,
            fg: Color::White,
            border: Color::Grey,
            box_fill: Color::Blue,
            box_selected: Color::Cyan,
            box_error: Color::Red,
            box_success: Color::Green,
            box_text: Color::White,
            title: Color::Yellow,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }
}
