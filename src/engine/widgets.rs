//! The narrow widget interface that button actions are written against.
//!
//! egui is immediate mode, so the "handles" here are plain retained state that
//! the renderer reads back every frame. Tests substitute their own fakes.

use crate::types::{NamedColor, PanelId};

/// A text widget whose contents and background can be changed.
pub trait LabelWidget {
    fn set_text(&mut self, text: String);
    fn set_background(&mut self, color: NamedColor);
}

/// Something that owns a z-order and can bring a panel to the front.
pub trait Stacking {
    fn raise(&mut self, panel: PanelId);
}

/// Retained state of the title label.
///
/// Foreground and font are fixed at construction; only text and background
/// change at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelState {
    pub text: String,
    pub background: NamedColor,
    pub foreground: NamedColor,
    pub font_size: f32,
}

impl LabelState {
    pub fn new(text: &str, background: NamedColor, foreground: NamedColor, font_size: f32) -> Self {
        Self {
            text: text.to_owned(),
            background,
            foreground,
            font_size,
        }
    }
}

impl LabelWidget for LabelState {
    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn set_background(&mut self, color: NamedColor) {
        self.background = color;
    }
}
