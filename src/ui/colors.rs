//! Static colour palette for panels, buttons and the title label.

use egui::Color32;

use crate::types::NamedColor;

pub const BUTTON_BG: Color32 = Color32::from_rgb(0xA1, 0xEE, 0xFF);
pub const BUTTON_FG: Color32 = Color32::from_rgb(0x33, 0x33, 0x00);

/// X11 / Tk values for the named colours ("green" is the dark web green).
pub const fn named(color: NamedColor) -> Color32 {
    match color {
        NamedColor::Red => Color32::from_rgb(255, 0, 0),
        NamedColor::Green => Color32::from_rgb(0, 128, 0),
        NamedColor::Blue => Color32::from_rgb(0, 0, 255),
        NamedColor::White => Color32::from_rgb(255, 255, 255),
    }
}

