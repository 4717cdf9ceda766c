//! Color themes for the canvas UI

use serde::{Deserialize, Serialize};

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn as_css_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    /// Mix towards `to`; `t` is clamped to 0.0..=1.0
    pub fn lerp(&self, to: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::new(mix(self.r, to.r), mix(self.g, to.g), mix(self.b, to.b))
    }
}

/// Color theme for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Background color
    pub background: Color,
    /// Title text
    pub title_text: Color,
    /// Subtitle and counters
    pub info_text: Color,
    /// Resting box fill
    pub box_fill: Color,
    /// Box in the pending selection
    pub box_selected: Color,
    /// Rejected pair flash
    pub box_error: Color,
    /// Sorted row
    pub box_success: Color,
    /// Box outline
    pub box_border: Color,
    /// Number inside a box
    pub box_text: Color,
    /// Keyboard cursor marker
    pub cursor: Color,
    /// Message text
    pub message_text: Color,
}

impl Theme {
    /// The classic widget palette
    pub fn light() -> Self {
        Self {
            background: Color::new(255, 255, 255),
            title_text: Color::new(30, 30, 40),
            info_text: Color::new(90, 90, 110),
            box_fill: Color::new(179, 199, 239),
            box_selected: Color::new(126, 147, 188),
            box_error: Color::new(173, 50, 22),
            box_success: Color::new(14, 142, 22),
            box_border: Color::new(255, 255, 255),
            box_text: Color::new(20, 20, 30),
            cursor: Color::new(30, 100, 200),
            message_text: Color::new(180, 120, 0),
        }
    }

    /// Dark theme
    pub fn dark() -> Self {
        Self {
            background: Color::new(24, 24, 32),
            title_text: Color::new(200, 200, 220),
            info_text: Color::new(160, 160, 180),
            box_fill: Color::new(60, 80, 120),
            box_selected: Color::new(110, 140, 200),
            box_error: Color::new(200, 60, 40),
            box_success: Color::new(30, 150, 50),
            box_border: Color::new(24, 24, 32),
            box_text: Color::new(255, 255, 255),
            cursor: Color::new(255, 220, 100),
            message_text: Color::new(255, 220, 100),
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            background: Color::new(0, 0, 0),
            title_text: Color::new(255, 255, 255),
            info_text: Color::new(200, 200, 200),
            box_fill: Color::new(0, 0, 200),
            box_selected: Color::new(0, 200, 255),
            box_error: Color::new(255, 0, 0),
            box_success: Color::new(0, 255, 0),
            box_border: Color::new(255, 255, 255),
            box_text: Color::new(255, 255, 255),
            cursor: Color::new(255, 255, 0),
            message_text: Color::new(255, 255, 0),
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "high_contrast" => Self::high_contrast(),
            _ => Self::light(),
        }
    }
}
