//! Window configuration and the eframe options derived from it.

/// Top-level window settings. Fixed at compile time.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub title: &'static str,
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tkinter Demo",
            width: 800.0,
            height: 600.0,
            x: 40.0,
            y: 40.0,
        }
    }
}

impl WindowConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        let viewport = egui::ViewportBuilder::default()
            .with_title(self.title)
            .with_inner_size([self.width, self.height])
            .with_position([self.x, self.y])
            .with_resizable(false);
        eframe::NativeOptions {
            viewport,
            ..Default::default()
        }
    }

    /// Tk-style geometry string, e.g. `800x600+40+40`.
    pub fn geometry(&self) -> String {
        format!("{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}
