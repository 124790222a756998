//! Shared domain types: panel identities, named colours and widget placement.
//!
//! Nothing in here depends on egui; the UI layer maps these onto egui types.

use std::fmt;

// ── Panels ─────────────────────────────────────────────────────────────────────

/// Identity of one of the two stacked panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelId {
    /// "frame1": the blue panel holding the label, constructed last.
    Frame1,
    /// "frame2": the red panel, constructed first.
    Frame2,
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelId::Frame1 => f.write_str("frame1"),
            PanelId::Frame2 => f.write_str("frame2"),
        }
    }
}

/// Which panel the user currently sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Panel1Visible,
    Panel2Visible,
}

impl From<PanelId> for Visibility {
    fn from(id: PanelId) -> Self {
        match id {
            PanelId::Frame1 => Visibility::Panel1Visible,
            PanelId::Frame2 => Visibility::Panel2Visible,
        }
    }
}

// ── Colours ────────────────────────────────────────────────────────────────────

/// Named colours used for panel and label backgrounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Red,
    Green,
    Blue,
    White,
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Blue => "blue",
            NamedColor::White => "white",
        };
        f.write_str(name)
    }
}

// ── Placement ──────────────────────────────────────────────────────────────────

/// Absolute pixel rectangle relative to the parent's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Placement {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// What a button does when pressed. Bound per button at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    /// Shuffle the label's letters and pick a new background.
    ShuffleTitle,
    /// Raise the given panel to the top of the stack.
    ShowPanel(PanelId),
}
