//! Application orchestrator: owns the widget state and drives the panel views.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::engine::actions::DemoState;
use crate::layout::DemoLayout;
use crate::ui::fonts;
use crate::ui::panel_view::PanelView;

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// `App` only:
/// 1. Paints the panels back-to-front in stacking order.
/// 2. Forwards the button pressed this frame to [`DemoState::apply`].
pub struct App {
    state: DemoState,
    views: Vec<PanelView>,
    rng: StdRng,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, layout: DemoLayout) -> Self {
        fonts::install(&cc.egui_ctx);
        Self::with_rng(layout, StdRng::from_os_rng())
    }

    fn with_rng(layout: DemoLayout, rng: StdRng) -> Self {
        let state = DemoState::from_layout(&layout);
        log::info!(
            "{} panels, {} buttons, {:?} on top",
            layout.panels.len(),
            layout.buttons.len(),
            state.stack.topmost()
        );
        Self {
            views: PanelView::all(&layout),
            state,
            rng,
        }
    }

    fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                let top = self.state.stack.topmost();

                let mut pressed = None;
                for id in self.state.stack.back_to_front() {
                    let Some(view) = self.views.iter().find(|v| v.id() == id) else {
                        continue;
                    };
                    if let Some(action) = view.show(ui, origin, &self.state.label, top == Some(id)) {
                        pressed = Some(action);
                    }
                }

                if let Some(action) = pressed {
                    self.state.apply(action, &mut self.rng);
                    ctx.request_repaint();
                }
            });
    }
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}
