//! Renders one stacked panel and the controls parented to it.

use egui::{Align2, FontId, Pos2, Rect, RichText};

use crate::engine::widgets::LabelState;
use crate::layout::{ButtonSpec, DemoLayout, LabelSpec, PanelSpec};
use crate::types::{ButtonAction, PanelId, Placement};
use crate::ui::colors::{self, BUTTON_BG, BUTTON_FG};
use crate::ui::fonts::SERIF;

fn to_rect(origin: Pos2, p: Placement) -> Rect {
    Rect::from_min_size(origin + egui::vec2(p.x, p.y), egui::vec2(p.width, p.height))
}

/// One panel plus its buttons and (optionally) the title label.
pub struct PanelView {
    panel: PanelSpec,
    buttons: Vec<ButtonSpec>,
    label: Option<LabelSpec>,
}

impl PanelView {
    pub fn new(layout: &DemoLayout, panel: &PanelSpec) -> Self {
        Self {
            panel: panel.clone(),
            buttons: layout.buttons_on(panel.id).cloned().collect(),
            label: (layout.label.parent == panel.id).then(|| layout.label.clone()),
        }
    }

    /// Builds one view per panel, in construction order.
    pub fn all(layout: &DemoLayout) -> Vec<Self> {
        layout.panels.iter().map(|p| Self::new(layout, p)).collect()
    }

    pub fn id(&self) -> PanelId {
        self.panel.id
    }

    /// Paints the panel. Controls are only laid out when the panel is on top;
    /// an occluded panel is fully covered and takes no input.
    ///
    /// Returns the action of the button pressed this frame, if any.
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        origin: Pos2,
        label: &LabelState,
        topmost: bool,
    ) -> Option<ButtonAction> {
        let area = to_rect(origin, self.panel.placement);
        ui.painter()
            .rect_filled(area, 0.0, colors::named(self.panel.background));
        if !topmost {
            return None;
        }

        if let Some(spec) = &self.label {
            let rect = to_rect(area.min, spec.placement);
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, colors::named(label.background));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                &label.text,
                FontId::new(label.font_size, SERIF.clone()),
                colors::named(label.foreground),
            );
        }

        let mut pressed = None;
        for button in &self.buttons {
            let rect = to_rect(area.min, button.placement);
            let widget = egui::Button::new(RichText::new(button.text).color(BUTTON_FG)).fill(BUTTON_BG);
            if ui.put(rect, widget).clicked() {
                log::debug!("{} pressed on {}", button.name, self.panel.id);
                pressed = Some(button.action);
            }
        }
        pressed
    }
}
