//! Fixed widget tree: every panel, button and label with its placement and
//! bound action, in construction order.

use crate::types::{ButtonAction, NamedColor, PanelId, Placement};

/// Shared rectangle of every panel: the whole 800×600 window.
pub const FULL_WINDOW: Placement = Placement::new(0.0, 0.0, 800.0, 600.0);

pub const INITIAL_TITLE: &str = "Tkinter Demo";

#[derive(Clone, Debug)]
pub struct PanelSpec {
    pub id: PanelId,
    pub background: NamedColor,
    pub placement: Placement,
}

#[derive(Clone, Debug)]
pub struct ButtonSpec {
    pub name: &'static str,
    pub parent: PanelId,
    pub text: &'static str,
    pub placement: Placement,
    pub action: ButtonAction,
}

#[derive(Clone, Debug)]
pub struct LabelSpec {
    pub parent: PanelId,
    pub text: &'static str,
    pub background: NamedColor,
    pub foreground: NamedColor,
    pub font_size: f32,
    pub placement: Placement,
}

/// The whole widget tree.
#[derive(Clone, Debug)]
pub struct DemoLayout {
    /// Panels in construction order; the last one starts on top.
    pub panels: Vec<PanelSpec>,
    pub buttons: Vec<ButtonSpec>,
    pub label: LabelSpec,
}

impl DemoLayout {
    pub fn standard() -> Self {
        let panels = vec![
            PanelSpec {
                id: PanelId::Frame2,
                background: NamedColor::Red,
                placement: FULL_WINDOW,
            },
            PanelSpec {
                id: PanelId::Frame1,
                background: NamedColor::Blue,
                placement: FULL_WINDOW,
            },
        ];

        let buttons = vec![
            ButtonSpec {
                name: "button1",
                parent: PanelId::Frame1,
                text: "Press Me to Change Title",
                placement: Placement::new(300.0, 100.0, 200.0, 50.0),
                action: ButtonAction::ShuffleTitle,
            },
            ButtonSpec {
                name: "button2",
                parent: PanelId::Frame1,
                text: "Press Me to Frame",
                placement: Placement::new(300.0, 200.0, 200.0, 50.0),
                action: ButtonAction::ShowPanel(PanelId::Frame2),
            },
            ButtonSpec {
                name: "button3",
                parent: PanelId::Frame2,
                text: "Press Me to Frame",
                placement: Placement::new(300.0, 200.0, 200.0, 50.0),
                action: ButtonAction::ShowPanel(PanelId::Frame1),
            },
        ];

        let label = LabelSpec {
            parent: PanelId::Frame1,
            text: INITIAL_TITLE,
            background: NamedColor::Blue,
            foreground: NamedColor::White,
            font_size: 24.0,
            placement: Placement::new(300.0, 20.0, 200.0, 50.0),
        };

        Self {
            panels,
            buttons,
            label,
        }
    }

    pub fn construction_order(&self) -> Vec<PanelId> {
        self.panels.iter().map(|p| p.id).collect()
    }

    pub fn buttons_on(&self, id: PanelId) -> impl Iterator<Item = &ButtonSpec> + '_ {
        self.buttons.iter().filter(move |b| b.parent == id)
    }

    /// Looks up a button's bound action by its name.
    #[cfg(test)]
    pub fn action_of(&self, name: &str) -> Option<ButtonAction> {
        self.buttons.iter().find(|b| b.name == name).map(|b| b.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_share_one_rectangle() {
        let layout = DemoLayout::standard();
        assert_eq!(layout.panels.len(), 2);
        assert!(layout.panels.iter().all(|p| p.placement == FULL_WINDOW));
        assert_eq!(layout.construction_order(), vec![PanelId::Frame2, PanelId::Frame1]);
    }

    #[test]
    fn panel_colours() {
        let layout = DemoLayout::standard();
        let colour_of = |id| layout.panels.iter().find(|p| p.id == id).map(|p| p.background);
        assert_eq!(colour_of(PanelId::Frame1), Some(NamedColor::Blue));
        assert_eq!(colour_of(PanelId::Frame2), Some(NamedColor::Red));
    }

    #[test]
    fn each_switch_button_targets_the_other_panel() {
        let layout = DemoLayout::standard();
        for b in &layout.buttons {
            if let ButtonAction::ShowPanel(target) = b.action {
                assert_ne!(target, b.parent, "{} raises its own panel", b.name);
            }
        }
        assert_eq!(layout.buttons_on(PanelId::Frame1).count(), 2);
        assert_eq!(layout.buttons_on(PanelId::Frame2).count(), 1);
        assert_eq!(layout.action_of("button1"), Some(ButtonAction::ShuffleTitle));
        assert_eq!(layout.action_of("missing"), None);
    }

    #[test]
    fn label_starts_with_window_title() {
        let layout = DemoLayout::standard();
        assert_eq!(layout.label.text, "Tkinter Demo");
        assert_eq!(layout.label.parent, PanelId::Frame1);
        assert_eq!(layout.label.foreground, NamedColor::White);
    }
}
